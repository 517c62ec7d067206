//! Core value types: pixels, operation selectors, and kernels.

mod component;
mod kernel;
mod pixel;

pub use component::{Component, FilterKind, TransformKind};
pub use kernel::Kernel;
pub use pixel::{Pixel, MAX_CHANNEL_VALUE};
