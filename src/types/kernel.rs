//! Convolution kernels.

use crate::types::FilterKind;

/// A square convolution kernel.
///
/// Each named kernel is normalized so a uniform neighborhood maps to itself
/// within rounding: the blur weights sum to 1, and the sharpen weights
/// balance the negative border against the positive interior.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    weights: Vec<Vec<f64>>,
}

impl Kernel {
    /// 3x3 Gaussian-style blur kernel.
    pub fn blur() -> Self {
        Self {
            weights: vec![
                vec![1.0 / 16.0, 1.0 / 8.0, 1.0 / 16.0],
                vec![1.0 / 8.0, 1.0 / 4.0, 1.0 / 8.0],
                vec![1.0 / 16.0, 1.0 / 8.0, 1.0 / 16.0],
            ],
        }
    }

    /// 5x5 sharpen kernel: negative border, positive inner ring, unit center.
    pub fn sharpen() -> Self {
        let edge = -1.0 / 8.0;
        let ring = 1.0 / 4.0;
        Self {
            weights: vec![
                vec![edge, edge, edge, edge, edge],
                vec![edge, ring, ring, ring, edge],
                vec![edge, ring, 1.0, ring, edge],
                vec![edge, ring, ring, ring, edge],
                vec![edge, edge, edge, edge, edge],
            ],
        }
    }

    /// Side length of the kernel.
    pub fn size(&self) -> usize {
        self.weights.len()
    }

    /// Offset from the kernel center to its edge.
    pub fn radius(&self) -> usize {
        self.size() / 2
    }

    /// Weight at the given kernel cell.
    pub fn weight(&self, row: usize, col: usize) -> f64 {
        self.weights[row][col]
    }
}

impl FilterKind {
    /// The kernel this filter applies.
    pub fn kernel(self) -> Kernel {
        match self {
            FilterKind::Blur => Kernel::blur(),
            FilterKind::Sharpen => Kernel::sharpen(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blur_dimensions() {
        let kernel = Kernel::blur();
        assert_eq!(kernel.size(), 3);
        assert_eq!(kernel.radius(), 1);
    }

    #[test]
    fn test_sharpen_dimensions() {
        let kernel = Kernel::sharpen();
        assert_eq!(kernel.size(), 5);
        assert_eq!(kernel.radius(), 2);
    }

    #[test]
    fn test_blur_weights_sum_to_one() {
        let kernel = Kernel::blur();
        let sum: f64 = (0..3)
            .flat_map(|r| (0..3).map(move |c| (r, c)))
            .map(|(r, c)| kernel.weight(r, c))
            .sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sharpen_center_and_border() {
        let kernel = Kernel::sharpen();
        assert_eq!(kernel.weight(2, 2), 1.0);
        assert_eq!(kernel.weight(0, 0), -1.0 / 8.0);
        assert_eq!(kernel.weight(1, 1), 1.0 / 4.0);
        assert_eq!(kernel.weight(4, 4), -1.0 / 8.0);
    }

    #[test]
    fn test_filter_kind_selects_kernel() {
        assert_eq!(FilterKind::Blur.kernel().size(), 3);
        assert_eq!(FilterKind::Sharpen.kernel().size(), 5);
    }
}
