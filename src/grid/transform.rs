//! Whole-grid color transformations.

use crate::types::{Component, TransformKind};

use super::Grid;

/// The fixed sepia transform matrix.
pub const SEPIA_MATRIX: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

/// Apply a color transformation to every pixel of `grid`.
///
/// Greyscale is defined as the Luma channel-reduction and produces
/// bit-identical output to it.
pub(crate) fn color_transform(grid: &Grid, kind: TransformKind) -> Grid {
    match kind {
        TransformKind::Greyscale => grid.channel_component(Component::Luma),
        TransformKind::Sepia => grid.map(|p| p.apply_color_matrix(&SEPIA_MATRIX)),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::grid::fixtures::*;
    use crate::grid::Grid;
    use crate::types::{Component, Pixel, TransformKind};

    #[test]
    fn test_greyscale_matches_luma_reduction() {
        for grid in [four_by_four(), two_by_one(), one_by_two()] {
            assert_eq!(
                grid.color_transformation(TransformKind::Greyscale),
                grid.channel_component(Component::Luma)
            );
        }
    }

    #[test]
    fn test_greyscale_golden() {
        let grey = two_by_one().color_transformation(TransformKind::Greyscale);
        let expected = Grid::from_rows(vec![vec![
            Pixel::rgb(200, 200, 200),
            Pixel::rgb(236, 236, 236),
        ]])
        .unwrap();
        assert_eq!(grey, expected);
    }

    #[test]
    fn test_sepia_four_by_four_golden() {
        let red_sepia = Pixel::rgb(100, 88, 69);
        let green_sepia = Pixel::rgb(196, 174, 136);
        let blue_sepia = Pixel::rgb(48, 42, 33);
        let orange_sepia = Pixel::rgb(215, 191, 149);
        let purple_sepia = Pixel::rgb(107, 95, 74);

        let expected = Grid::from_rows(vec![
            vec![red_sepia; 4],
            vec![green_sepia, blue_sepia, blue_sepia, green_sepia],
            vec![blue_sepia, green_sepia, green_sepia, blue_sepia],
            vec![orange_sepia, orange_sepia, purple_sepia, purple_sepia],
        ])
        .unwrap();
        assert_eq!(
            four_by_four().color_transformation(TransformKind::Sepia),
            expected
        );
    }

    #[test]
    fn test_sepia_saturates() {
        // Yellow's red and green rows overflow 255 and clamp.
        let sepia = two_by_one().color_transformation(TransformKind::Sepia);
        let expected = Grid::from_rows(vec![vec![
            Pixel::rgb(244, 217, 169),
            Pixel::rgb(255, 255, 205),
        ]])
        .unwrap();
        assert_eq!(sepia, expected);
    }

    #[test]
    fn test_sepia_one_by_two_golden() {
        let sepia = one_by_two().color_transformation(TransformKind::Sepia);
        let expected = Grid::from_rows(vec![
            vec![Pixel::rgb(203, 181, 141)],
            vec![Pixel::rgb(215, 192, 149)],
        ])
        .unwrap();
        assert_eq!(sepia, expected);
    }

    #[test]
    fn test_sepia_of_black_stays_black() {
        let black = Grid::from_rows(vec![vec![Pixel::BLACK; 2]; 2]).unwrap();
        assert_eq!(black.color_transformation(TransformKind::Sepia), black);
    }

    #[test]
    fn test_sepia_of_white_clamps_into_range() {
        let white = Grid::from_rows(vec![vec![Pixel::WHITE; 2]; 2]).unwrap();
        let sepia = white.color_transformation(TransformKind::Sepia);
        // Rows 0 and 1 of the matrix overflow for white, row 2 does not:
        // 0.272*255 + 0.534*255 + 0.131*255 = 238.9...
        let expected = Grid::from_rows(vec![vec![Pixel::rgb(255, 255, 238); 2]; 2]).unwrap();
        assert_eq!(sepia, expected);
    }
}
