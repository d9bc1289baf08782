//! Filter variants implementing [`PixelTransform`](crate::PixelTransform).
//!
//! ## Categories
//!
//! - **Pointwise**: invert, grayscale, sepia, brightness. Each output
//!   pixel depends only on the source pixel at the same coordinate.
//! - **Convolution**: box blur, Gaussian, sharpen, emboss. Weighted sums
//!   over a clamped kernel neighborhood.
//! - **Gradient**: Sobel, Scharr, Prewitt. Dual-kernel gradient
//!   magnitude edge detection.
//! - **Geometric**: waves, glass, rotation, shift. Coordinate remapping
//!   with direct copy, no blending.
//!
//! All filters share the same boundary policy: neighborhood reads outside
//! the image clamp to the nearest border pixel.

pub mod convolve;
pub mod geometric;
pub mod gradient;
pub mod pointwise;

pub use convolve::{Convolution, Emboss};
pub use geometric::{Glass, HorizontalWave, Rotation, Shift, VerticalWave};
pub use gradient::{GradientFilter, GradientMode};
pub use pointwise::{Brightness, Grayscale, Invert, Sepia};
