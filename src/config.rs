//! View configuration.
//!
//! Everything a [`MaskedImageView`](crate::view::MaskedImageView) needs is
//! fixed once, at construction, through [`ViewConfig`]. Lengths may be given
//! in density-independent pixels and are resolved against the display
//! density when the view is built.

use std::fmt;
use std::str::FromStr;

use crate::renderer::{MaskShape, RenderOptions};
use crate::sizing::Padding;

/// Default corner radius for rounded-rectangle masks.
pub const DEFAULT_BORDER_RADIUS: Dimension = Dimension::Dip(10.0);

// ============================================================================
// Dimension
// ============================================================================

/// A length in physical or density-independent pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    Px(u32),
    Dip(f32),
}

impl Dimension {
    /// Resolve to physical pixels.
    ///
    /// Density-independent lengths are scaled and rounded to the nearest
    /// pixel; a non-zero length never collapses to zero and a negative one
    /// resolves to zero.
    pub fn to_px(self, density: f32) -> u32 {
        match self {
            Dimension::Px(px) => px,
            Dimension::Dip(dp) => {
                let scaled = dp * density;
                if scaled <= 0.0 || !scaled.is_finite() {
                    return 0;
                }
                let px = (scaled + 0.5) as u32;
                px.max(1)
            }
        }
    }
}

impl Default for Dimension {
    fn default() -> Self {
        DEFAULT_BORDER_RADIUS
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Px(px) => write!(f, "{px}px"),
            Dimension::Dip(dp) => write!(f, "{dp}dp"),
        }
    }
}

/// Error returned when a configuration value cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {what}: {value:?}")]
pub struct ParseConfigError {
    what: &'static str,
    value: String,
}

impl ParseConfigError {
    fn new(what: &'static str, value: &str) -> Self {
        Self {
            what,
            value: value.to_owned(),
        }
    }
}

impl FromStr for Dimension {
    type Err = ParseConfigError;

    /// Accepts `"12px"`, `"10dp"`, `"10dip"`, or a bare pixel count.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let err = || ParseConfigError::new("dimension", s);
        if let Some(v) = t.strip_suffix("dip").or_else(|| t.strip_suffix("dp")) {
            let dp: f32 = v.trim().parse().map_err(|_| err())?;
            if !dp.is_finite() || dp < 0.0 {
                return Err(err());
            }
            Ok(Dimension::Dip(dp))
        } else {
            let v = t.strip_suffix("px").unwrap_or(t);
            v.trim().parse().map(Dimension::Px).map_err(|_| err())
        }
    }
}

// ============================================================================
// MaskMode
// ============================================================================

/// Mask shape as configured, before lengths are resolved to pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MaskMode {
    #[default]
    Circle,
    RoundedRect { border_radius: Dimension },
}

impl MaskMode {
    /// Rounded rectangle with the default border radius.
    pub fn rounded() -> Self {
        MaskMode::RoundedRect {
            border_radius: DEFAULT_BORDER_RADIUS,
        }
    }

    /// Resolve to a pixel-exact [`MaskShape`].
    pub fn to_shape(self, density: f32) -> MaskShape {
        match self {
            MaskMode::Circle => MaskShape::Circle,
            MaskMode::RoundedRect { border_radius } => MaskShape::RoundedRect {
                corner_radius: border_radius.to_px(density),
            },
        }
    }
}

impl FromStr for MaskMode {
    type Err = ParseConfigError;

    /// Accepts `"circle"` and `"round"` / `"rounded-rect"` (with the default
    /// border radius).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circle" => Ok(MaskMode::Circle),
            "round" | "rounded" | "rounded-rect" | "rounded_rect" => Ok(MaskMode::rounded()),
            _ => Err(ParseConfigError::new("mask mode", s)),
        }
    }
}

// ============================================================================
// ViewConfig
// ============================================================================

/// Construction-time settings of a masked image view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewConfig {
    pub mask: MaskMode,
    pub padding: Padding,
    /// Physical pixels per density-independent pixel.
    pub density: f32,
    pub options: RenderOptions,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            mask: MaskMode::Circle,
            padding: Padding::default(),
            density: 1.0,
            options: RenderOptions::default(),
        }
    }
}

impl ViewConfig {
    pub fn with_mask(mut self, mask: MaskMode) -> Self {
        self.mask = mask;
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density;
        self
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// The resolved mask shape.
    pub fn shape(&self) -> MaskShape {
        self.mask.to_shape(self.density)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_to_px() {
        assert_eq!(Dimension::Px(7).to_px(3.0), 7);
        assert_eq!(Dimension::Dip(10.0).to_px(1.0), 10);
        assert_eq!(Dimension::Dip(10.0).to_px(2.625), 26);
        assert_eq!(Dimension::Dip(10.0).to_px(0.75), 8);
        // Non-zero never collapses to zero
        assert_eq!(Dimension::Dip(0.1).to_px(1.0), 1);
        assert_eq!(Dimension::Dip(0.0).to_px(3.0), 0);
        assert_eq!(Dimension::Dip(-4.0).to_px(1.0), 0);
    }

    #[test]
    fn test_dimension_parse() {
        assert_eq!("12px".parse::<Dimension>(), Ok(Dimension::Px(12)));
        assert_eq!("12".parse::<Dimension>(), Ok(Dimension::Px(12)));
        assert_eq!("10dp".parse::<Dimension>(), Ok(Dimension::Dip(10.0)));
        assert_eq!(" 2.5dip ".parse::<Dimension>(), Ok(Dimension::Dip(2.5)));
        assert!("-3dp".parse::<Dimension>().is_err());
        assert!("abc".parse::<Dimension>().is_err());
        assert!("".parse::<Dimension>().is_err());
    }

    #[test]
    fn test_dimension_display() {
        assert_eq!(Dimension::Px(4).to_string(), "4px");
        assert_eq!(Dimension::Dip(10.0).to_string(), "10dp");
    }

    #[test]
    fn test_mask_mode_parse() {
        assert_eq!("circle".parse::<MaskMode>(), Ok(MaskMode::Circle));
        assert_eq!("Round".parse::<MaskMode>(), Ok(MaskMode::rounded()));
        assert_eq!("rounded-rect".parse::<MaskMode>(), Ok(MaskMode::rounded()));
        let err = "star".parse::<MaskMode>().unwrap_err();
        assert_eq!(err.to_string(), "invalid mask mode: \"star\"");
    }

    #[test]
    fn test_mask_mode_to_shape() {
        assert_eq!(MaskMode::Circle.to_shape(3.0), MaskShape::Circle);
        assert_eq!(
            MaskMode::rounded().to_shape(2.0),
            MaskShape::RoundedRect { corner_radius: 20 }
        );
        let px = MaskMode::RoundedRect {
            border_radius: Dimension::Px(5),
        };
        assert_eq!(px.to_shape(2.0), MaskShape::RoundedRect { corner_radius: 5 });
    }

    #[test]
    fn test_view_config_defaults() {
        let config = ViewConfig::default();
        assert_eq!(config.mask, MaskMode::Circle);
        assert_eq!(config.padding, Padding::default());
        assert_eq!(config.density, 1.0);
        assert_eq!(config.shape(), MaskShape::Circle);
    }

    #[test]
    fn test_view_config_builder() {
        let config = ViewConfig::default()
            .with_mask(MaskMode::rounded())
            .with_density(1.5)
            .with_padding(Padding::uniform(2));
        assert_eq!(config.shape(), MaskShape::RoundedRect { corner_radius: 15 });
        assert_eq!(config.padding.horizontal(), 4);
    }
}
