//! Gradient-magnitude edge detection: Sobel, Scharr, Prewitt.
//!
//! Each filter holds a pair of directional kernels and combines their
//! responses as `sqrt(Gx² + Gy²)`. Sobel takes the gradient of the
//! luminosity-converted neighborhood and emits gray; Scharr and Prewitt
//! take per-channel gradients and emit the three channel magnitudes
//! directly, so their output is generally not gray.

use ndarray::arr2;

use crate::engine::PixelTransform;
use crate::grid::{PixelGrid, Rgb};
use crate::kernel::{Kernel, KernelError};

/// How the two directional responses are combined into a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientMode {
    /// Gradient of the luminosity-converted neighborhood; the magnitude
    /// is replicated to all channels.
    Luminosity,
    /// Independent gradient magnitude per channel.
    PerChannel,
}

/// Edge detector built from a horizontal/vertical kernel pair.
#[derive(Debug)]
pub struct GradientFilter {
    kernel_x: Kernel,
    kernel_y: Kernel,
    mode: GradientMode,
}

impl GradientFilter {
    /// Build a detector from a custom kernel pair. Both kernels must
    /// have the same side length.
    pub fn from_kernels(
        kernel_x: Kernel,
        kernel_y: Kernel,
        mode: GradientMode,
    ) -> Result<Self, KernelError> {
        if kernel_x.side() != kernel_y.side() {
            return Err(KernelError::MismatchedPair(
                kernel_x.side(),
                kernel_y.side(),
            ));
        }
        Ok(GradientFilter {
            kernel_x,
            kernel_y,
            mode,
        })
    }

    /// Sobel operator; luminosity gradient, gray output.
    pub fn sobel() -> Self {
        GradientFilter {
            kernel_x: Kernel::from_weights(arr2(&[
                [-1.0, 0.0, 1.0],
                [-2.0, 0.0, 2.0],
                [-1.0, 0.0, 1.0],
            ])),
            kernel_y: Kernel::from_weights(arr2(&[
                [-1.0, -2.0, -1.0],
                [0.0, 0.0, 0.0],
                [1.0, 2.0, 1.0],
            ])),
            mode: GradientMode::Luminosity,
        }
    }

    /// Scharr operator; per-channel magnitudes.
    pub fn scharr() -> Self {
        GradientFilter {
            kernel_x: Kernel::from_weights(arr2(&[
                [3.0, 0.0, -3.0],
                [10.0, 0.0, -10.0],
                [3.0, 0.0, -3.0],
            ])),
            kernel_y: Kernel::from_weights(arr2(&[
                [3.0, 10.0, 3.0],
                [0.0, 0.0, 0.0],
                [-3.0, -10.0, -3.0],
            ])),
            mode: GradientMode::PerChannel,
        }
    }

    /// Prewitt operator; per-channel magnitudes.
    pub fn prewitt() -> Self {
        GradientFilter {
            kernel_x: Kernel::from_weights(arr2(&[
                [-1.0, 0.0, 1.0],
                [-1.0, 0.0, 1.0],
                [-1.0, 0.0, 1.0],
            ])),
            kernel_y: Kernel::from_weights(arr2(&[
                [-1.0, -1.0, -1.0],
                [0.0, 0.0, 0.0],
                [1.0, 1.0, 1.0],
            ])),
            mode: GradientMode::PerChannel,
        }
    }
}

impl PixelTransform for GradientFilter {
    fn pixel_at(&self, source: &PixelGrid, x: u32, y: u32) -> Rgb {
        let r = self.kernel_x.radius() as i32;
        match self.mode {
            GradientMode::Luminosity => {
                let mut gx = 0.0f32;
                let mut gy = 0.0f32;
                for l in -r..=r {
                    for k in -r..=r {
                        let lum = source.sample(x as i32 + k, y as i32 + l).luminosity();
                        gx += lum * self.kernel_x.weight(k, l);
                        gy += lum * self.kernel_y.weight(k, l);
                    }
                }
                let m = (gx * gx + gy * gy).sqrt().round() as i32;
                Rgb::from_clamped(m, m, m)
            }
            GradientMode::PerChannel => {
                let mut rx = 0.0f32;
                let mut gx = 0.0f32;
                let mut bx = 0.0f32;
                let mut ry = 0.0f32;
                let mut gy = 0.0f32;
                let mut by = 0.0f32;
                for l in -r..=r {
                    for k in -r..=r {
                        let c = source.sample(x as i32 + k, y as i32 + l);
                        let wx = self.kernel_x.weight(k, l);
                        let wy = self.kernel_y.weight(k, l);
                        rx += c.r as f32 * wx;
                        gx += c.g as f32 * wx;
                        bx += c.b as f32 * wx;
                        ry += c.r as f32 * wy;
                        gy += c.g as f32 * wy;
                        by += c.b as f32 * wy;
                    }
                }
                Rgb::from_clamped(
                    (rx * rx + ry * ry).sqrt().round() as i32,
                    (gx * gx + gy * gy).sqrt().round() as i32,
                    (bx * bx + by * by).sqrt().round() as i32,
                )
            }
        }
    }
}
