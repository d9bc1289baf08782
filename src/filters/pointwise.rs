//! Pointwise filters: Invert, Grayscale, Sepia, Brightness.
//!
//! Each output pixel depends only on the source pixel at the same
//! coordinate, never on neighbors.

use crate::engine::PixelTransform;
use crate::grid::{PixelGrid, Rgb};

/// Sepia tint strength.
const TINT: f32 = 10.0;

/// Photographic negative: `(255-R, 255-G, 255-B)`.
///
/// Applying it twice restores the original image.
pub struct Invert;

impl PixelTransform for Invert {
    fn pixel_at(&self, source: &PixelGrid, x: u32, y: u32) -> Rgb {
        let c = source.get(x, y);
        Rgb::new(255 - c.r, 255 - c.g, 255 - c.b)
    }
}

/// Luminosity grayscale: every channel becomes
/// `0.299 R + 0.587 G + 0.114 B`.
pub struct Grayscale;

impl PixelTransform for Grayscale {
    fn pixel_at(&self, source: &PixelGrid, x: u32, y: u32) -> Rgb {
        let i = source.get(x, y).luminosity() as i32;
        Rgb::from_clamped(i, i, i)
    }
}

/// Sepia toning built on the same luminosity: the red channel is pushed
/// up by `2k`, green by `k/2`, and blue down by `k`.
pub struct Sepia;

impl PixelTransform for Sepia {
    fn pixel_at(&self, source: &PixelGrid, x: u32, y: u32) -> Rgb {
        let i = source.get(x, y).luminosity();
        Rgb::from_clamped(
            (i + 2.0 * TINT) as i32,
            (i + 0.5 * TINT) as i32,
            (i - TINT) as i32,
        )
    }
}

/// Add a flat offset to every channel, saturating at the range ends.
pub struct Brightness {
    amount: i32,
}

impl Brightness {
    pub fn new(amount: i32) -> Self {
        Brightness { amount }
    }
}

impl Default for Brightness {
    /// The stock brightness boost of +30 per channel.
    fn default() -> Self {
        Brightness::new(30)
    }
}

impl PixelTransform for Brightness {
    fn pixel_at(&self, source: &PixelGrid, x: u32, y: u32) -> Rgb {
        let c = source.get(x, y);
        Rgb::from_clamped(
            c.r as i32 + self.amount,
            c.g as i32 + self.amount,
            c.b as i32 + self.amount,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::process;

    fn run<T: PixelTransform>(source: &PixelGrid, transform: &T) -> PixelGrid {
        process(source, transform, |_| {}, || false).unwrap()
    }

    #[test]
    fn test_invert_single_pixel() {
        let source = PixelGrid::filled(1, 1, Rgb::new(10, 20, 30));
        let result = run(&source, &Invert);
        assert_eq!(result.get(0, 0), Rgb::new(245, 235, 225));
    }

    #[test]
    fn test_invert_twice_is_identity() {
        let source = PixelGrid::from_fn(6, 4, |x, y| {
            Rgb::new((x * 40) as u8, (y * 60) as u8, (x + y) as u8)
        });
        let once = run(&source, &Invert);
        let twice = run(&once, &Invert);
        assert_eq!(twice, source);
    }

    #[test]
    fn test_grayscale_output_is_gray() {
        let source = PixelGrid::from_fn(5, 5, |x, y| {
            Rgb::new((x * 50) as u8, (y * 50) as u8, 200)
        });
        let result = run(&source, &Grayscale);
        for y in 0..5 {
            for x in 0..5 {
                let c = result.get(x, y);
                assert_eq!(c.r, c.g);
                assert_eq!(c.g, c.b);
            }
        }
    }

    #[test]
    fn test_grayscale_of_gray_is_unchanged() {
        let source = PixelGrid::filled(3, 3, Rgb::new(100, 100, 100));
        let result = run(&source, &Grayscale);
        assert_eq!(result.get(1, 1), Rgb::new(100, 100, 100));
    }

    #[test]
    fn test_sepia_shifts_channels_around_luminosity() {
        let source = PixelGrid::filled(1, 1, Rgb::new(100, 100, 100));
        let result = run(&source, &Sepia);
        // Luminosity of uniform gray 100 is 100.
        assert_eq!(result.get(0, 0), Rgb::new(120, 105, 90));
    }

    #[test]
    fn test_brightness_saturates_at_255() {
        let source = PixelGrid::filled(1, 1, Rgb::new(200, 250, 10));
        let result = run(&source, &Brightness::default());
        assert_eq!(result.get(0, 0), Rgb::new(230, 255, 40));
    }

    #[test]
    fn test_brightness_negative_amount_saturates_at_zero() {
        let source = PixelGrid::filled(1, 1, Rgb::new(5, 100, 200));
        let result = run(&source, &Brightness::new(-50));
        assert_eq!(result.get(0, 0), Rgb::new(0, 50, 150));
    }
}
