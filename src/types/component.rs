//! Closed operation-selector enums and their parsing.
//!
//! The engine never sees raw operation names; script text is parsed into
//! these enums exactly once at the command boundary, and everything past
//! that boundary matches exhaustively.

use std::fmt;
use std::str::FromStr;

use crate::error::{ImgridError, Result};

/// A channel or derived component a pixel can be reduced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Red,
    Green,
    Blue,
    /// Maximum of the three channels.
    Value,
    /// Integer average of the three channels.
    Intensity,
    /// Perceptually-weighted greyscale value.
    Luma,
}

impl Component {
    /// The script-facing name of this component.
    pub fn name(self) -> &'static str {
        match self {
            Component::Red => "red-component",
            Component::Green => "green-component",
            Component::Blue => "blue-component",
            Component::Value => "value-component",
            Component::Intensity => "intensity-component",
            Component::Luma => "luma-component",
        }
    }
}

impl FromStr for Component {
    type Err = ImgridError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "red-component" => Ok(Component::Red),
            "green-component" => Ok(Component::Green),
            "blue-component" => Ok(Component::Blue),
            "value-component" => Ok(Component::Value),
            "intensity-component" => Ok(Component::Intensity),
            "luma-component" => Ok(Component::Luma),
            _ => Err(ImgridError::InvalidArgument {
                message: format!("unknown component: {}", s),
                help: Some(
                    "expected one of red-component, green-component, blue-component, \
                     value-component, intensity-component, luma-component"
                        .to_string(),
                ),
            }),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A convolution filter selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Blur,
    Sharpen,
}

impl FilterKind {
    pub fn name(self) -> &'static str {
        match self {
            FilterKind::Blur => "blur",
            FilterKind::Sharpen => "sharpen",
        }
    }
}

impl FromStr for FilterKind {
    type Err = ImgridError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "blur" => Ok(FilterKind::Blur),
            "sharpen" => Ok(FilterKind::Sharpen),
            _ => Err(ImgridError::InvalidArgument {
                message: format!("unknown filter: {}", s),
                help: Some("expected blur or sharpen".to_string()),
            }),
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A whole-grid color transformation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformKind {
    /// Luma channel-reduction applied to every pixel.
    Greyscale,
    /// Fixed sepia matrix applied to every pixel.
    Sepia,
}

impl TransformKind {
    pub fn name(self) -> &'static str {
        match self {
            TransformKind::Greyscale => "greyscale",
            TransformKind::Sepia => "sepia",
        }
    }
}

impl FromStr for TransformKind {
    type Err = ImgridError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "greyscale" => Ok(TransformKind::Greyscale),
            "sepia" => Ok(TransformKind::Sepia),
            _ => Err(ImgridError::InvalidArgument {
                message: format!("unknown color transformation: {}", s),
                help: Some("expected greyscale or sepia".to_string()),
            }),
        }
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_parse_round_trip() {
        for component in [
            Component::Red,
            Component::Green,
            Component::Blue,
            Component::Value,
            Component::Intensity,
            Component::Luma,
        ] {
            assert_eq!(component.name().parse::<Component>().unwrap(), component);
        }
    }

    #[test]
    fn test_component_rejects_partial_names() {
        assert!("red".parse::<Component>().is_err());
        assert!("luma".parse::<Component>().is_err());
        assert!("ddfg4".parse::<Component>().is_err());
        assert!("".parse::<Component>().is_err());
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("blur".parse::<FilterKind>().unwrap(), FilterKind::Blur);
        assert_eq!("sharpen".parse::<FilterKind>().unwrap(), FilterKind::Sharpen);
        assert!("emboss".parse::<FilterKind>().is_err());
    }

    #[test]
    fn test_transform_parse() {
        assert_eq!(
            "greyscale".parse::<TransformKind>().unwrap(),
            TransformKind::Greyscale
        );
        assert_eq!("sepia".parse::<TransformKind>().unwrap(), TransformKind::Sepia);
        assert!("invert".parse::<TransformKind>().is_err());
    }

    #[test]
    fn test_display_matches_script_names() {
        assert_eq!(Component::Intensity.to_string(), "intensity-component");
        assert_eq!(FilterKind::Blur.to_string(), "blur");
        assert_eq!(TransformKind::Sepia.to_string(), "sepia");
    }
}
