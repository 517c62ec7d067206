//! Pixel type and per-pixel numeric rules.

use crate::types::Component;

/// Maximum value any channel can hold.
pub const MAX_CHANNEL_VALUE: u8 = 255;

/// An RGB pixel with 8 bits per channel.
///
/// Channels are clamped into `[0, 255]` at construction, so a stored pixel
/// can never hold an out-of-range value, even transiently. Pixels are value
/// types: every operation returns a fresh pixel and leaves the input alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Pixel {
    /// Create a pixel, clamping each channel into `[0, 255]`.
    ///
    /// Arithmetic throughout the engine produces `i32` channel sums; this
    /// constructor is the single place saturation happens.
    pub fn new(red: i32, green: i32, blue: i32) -> Self {
        Self {
            red: clamp_channel(red),
            green: clamp_channel(green),
            blue: clamp_channel(blue),
        }
    }

    /// Create a pixel from channel values already in range.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Add `delta` to all three channels, saturating at the range ends.
    ///
    /// A negative `delta` darkens. There is no constraint on magnitude;
    /// clamping absorbs any overshoot.
    pub fn brighten(self, delta: i32) -> Self {
        Self::new(
            self.red as i32 + delta,
            self.green as i32 + delta,
            self.blue as i32 + delta,
        )
    }

    /// Collapse this pixel to a single derived value replicated across all
    /// three channels.
    pub fn reduce_to_component(self, component: Component) -> Self {
        let value = match component {
            Component::Red => self.red as i32,
            Component::Green => self.green as i32,
            Component::Blue => self.blue as i32,
            Component::Value => self.red.max(self.green).max(self.blue) as i32,
            Component::Intensity => {
                (self.red as i32 + self.green as i32 + self.blue as i32) / 3
            }
            Component::Luma => self.luma(),
        };
        Self::new(value, value, value)
    }

    /// Perceptually-weighted greyscale value, truncated toward zero.
    ///
    /// The truncation (rather than rounding) is observable: luma of pure
    /// white is 254, not 255, because the weights sum to 1.0 only in
    /// decimal.
    fn luma(self) -> i32 {
        ((0.2126 * self.red as f64)
            + (0.7152 * self.green as f64)
            + (0.0722 * self.blue as f64)) as i32
    }

    /// Multiply this pixel by a 3x3 matrix.
    ///
    /// Each output channel is the dot product of the corresponding matrix
    /// row with the `(red, green, blue)` input vector, truncated to an
    /// integer and clamped.
    pub fn apply_color_matrix(self, matrix: &[[f64; 3]; 3]) -> Self {
        let input = [self.red as f64, self.green as f64, self.blue as f64];
        let mut output = [0i32; 3];

        for (row, weights) in matrix.iter().enumerate() {
            let mut acc = 0.0;
            for (col, weight) in weights.iter().enumerate() {
                acc += input[col] * weight;
            }
            output[row] = acc as i32;
        }

        Self::new(output[0], output[1], output[2])
    }
}

/// Clamp a channel sum into `[0, 255]`.
fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, MAX_CHANNEL_VALUE as i32) as u8
}
