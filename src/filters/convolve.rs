//! Single-kernel convolution filters: box blur, Gaussian, sharpen, and
//! the brightness-based emboss effect.
//!
//! For each output pixel the kernel is swept over the clamped source
//! neighborhood: offset `(k, l)` in `[-r, r]²` samples `(x+k, y+l)` with
//! edge replication and accumulates `channel * weight(k, l)` per channel.
//! Accumulated sums are rounded, then clamped to `[0, 255]`.

use crate::engine::PixelTransform;
use crate::grid::{PixelGrid, Rgb};
use crate::kernel::Kernel;

/// Convolution of all three channels against one [`Kernel`].
pub struct Convolution {
    kernel: Kernel,
}

impl Convolution {
    pub fn new(kernel: Kernel) -> Self {
        Convolution { kernel }
    }

    /// 3×3 box blur, every weight `1/9`.
    pub fn blur() -> Self {
        Convolution::new(Kernel::box_blur(3))
    }

    /// Gaussian blur. The stock kernel uses radius 3 and sigma 2.
    pub fn gaussian(radius: usize, sigma: f32) -> Self {
        Convolution::new(Kernel::gaussian(radius, sigma))
    }

    /// Fixed 3×3 sharpening convolution.
    pub fn sharpen() -> Self {
        Convolution::new(Kernel::sharpen())
    }
}

impl Default for Convolution {
    fn default() -> Self {
        Convolution::gaussian(3, 2.0)
    }
}

impl PixelTransform for Convolution {
    fn pixel_at(&self, source: &PixelGrid, x: u32, y: u32) -> Rgb {
        let r = self.kernel.radius() as i32;
        let mut sum_r = 0.0f32;
        let mut sum_g = 0.0f32;
        let mut sum_b = 0.0f32;

        for l in -r..=r {
            for k in -r..=r {
                let c = source.sample(x as i32 + k, y as i32 + l);
                let w = self.kernel.weight(k, l);
                sum_r += c.r as f32 * w;
                sum_g += c.g as f32 * w;
                sum_b += c.b as f32 * w;
            }
        }

        Rgb::from_clamped(
            sum_r.round() as i32,
            sum_g.round() as i32,
            sum_b.round() as i32,
        )
    }
}

/// Relief effect: convolves per-pixel average brightness `(R+G+B)/3`
/// rather than the channels, offsets the response to mid-gray, and
/// replicates the result to all channels.
pub struct Emboss {
    kernel: Kernel,
}

impl Default for Emboss {
    fn default() -> Self {
        Emboss {
            kernel: Kernel::emboss(),
        }
    }
}

impl PixelTransform for Emboss {
    fn pixel_at(&self, source: &PixelGrid, x: u32, y: u32) -> Rgb {
        let r = self.kernel.radius() as i32;
        let mut sum = 0.0f32;

        for l in -r..=r {
            for k in -r..=r {
                let c = source.sample(x as i32 + k, y as i32 + l);
                sum += c.brightness() * self.kernel.weight(k, l);
            }
        }

        let gray = (sum + 128.0).round() as i32;
        Rgb::from_clamped(gray, gray, gray)
    }
}
