//! Geometric filters: waves, glass scatter, rotation, vertical shift.
//!
//! These filters carry no kernel; each remaps the output coordinate to a
//! different source coordinate and copies the sampled color directly,
//! with no blending. Out-of-range source coordinates clamp to the border.

use std::cell::RefCell;
use std::f32::consts::PI;

use crate::engine::PixelTransform;
use crate::grid::{clamp, PixelGrid, Rgb};

/// Wave displacement in pixels.
const WAVE_AMPLITUDE: f32 = 20.0;
/// Wave length in pixels.
const WAVE_PERIOD: f32 = 60.0;
/// Glass scatter half-range in pixels.
const SCATTER: f32 = 10.0;

// ============================================================================
// Deterministic RNG
// ============================================================================

/// Minimal linear congruential generator (MINSTD parameters) so the glass
/// effect is reproducible from a seed.
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        SimpleRng {
            state: seed.wrapping_add(1), // Avoid zero
        }
    }

    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(48271).wrapping_add(1) % 2147483647;
        self.state as u32
    }

    /// Uniform f32 in [0, 1).
    fn next_f32(&mut self) -> f32 {
        (self.next_u32() as f32) / (2147483647.0f32)
    }
}

// ============================================================================
// Waves
// ============================================================================

/// Sinusoidal horizontal displacement driven by the row index.
pub struct VerticalWave;

impl PixelTransform for VerticalWave {
    fn pixel_at(&self, source: &PixelGrid, x: u32, y: u32) -> Rgb {
        let offset =
            (WAVE_AMPLITUDE * (2.0 * PI * y as f32 / WAVE_PERIOD).sin()).round() as i32;
        source.sample(x as i32 + offset, y as i32)
    }
}

/// Sinusoidal vertical displacement driven by the column index.
pub struct HorizontalWave;

impl PixelTransform for HorizontalWave {
    fn pixel_at(&self, source: &PixelGrid, x: u32, y: u32) -> Rgb {
        let offset =
            (WAVE_AMPLITUDE * (2.0 * PI * x as f32 / WAVE_PERIOD).sin()).round() as i32;
        source.sample(x as i32, y as i32 + offset)
    }
}

// ============================================================================
// Glass
// ============================================================================

/// Frosted-glass scatter: every pixel is copied from an independently
/// drawn random offset in `[-10, 10)` on both axes.
///
/// The generator is seeded, so the same seed over the same source yields
/// the same image.
pub struct Glass {
    rng: RefCell<SimpleRng>,
}

impl Glass {
    pub fn new(seed: u64) -> Self {
        Glass {
            rng: RefCell::new(SimpleRng::new(seed)),
        }
    }
}

impl PixelTransform for Glass {
    fn pixel_at(&self, source: &PixelGrid, x: u32, y: u32) -> Rgb {
        let mut rng = self.rng.borrow_mut();
        let dx = (rng.next_f32() * 2.0 * SCATTER - SCATTER).floor() as i32;
        let dy = (rng.next_f32() * 2.0 * SCATTER - SCATTER).floor() as i32;
        source.sample(x as i32 + dx, y as i32 + dy)
    }
}

// ============================================================================
// Rotation and shift
// ============================================================================

/// Rotate the sampling coordinate around the image center.
///
/// When the rotated row clamps to the last row the output pixel is forced
/// to black rather than sampled, marking the swept-in region.
pub struct Rotation {
    angle: f32,
}

impl Rotation {
    /// Angle in radians, counter-clockwise in image coordinates.
    pub fn new(angle: f32) -> Self {
        Rotation { angle }
    }
}

impl Default for Rotation {
    /// The stock rotation of 1 radian.
    fn default() -> Self {
        Rotation::new(1.0)
    }
}

impl PixelTransform for Rotation {
    fn pixel_at(&self, source: &PixelGrid, x: u32, y: u32) -> Rgb {
        let width = source.width() as i32;
        let height = source.height() as i32;
        let cx = width / 2;
        let cy = height / 2;
        let (sin, cos) = self.angle.sin_cos();
        let dx = (x as i32 - cx) as f32;
        let dy = (y as i32 - cy) as f32;

        let sx = clamp((dx * cos - dy * sin) as i32 + cx, 0, width - 1);
        let sy = clamp((dx * sin + dy * cos) as i32 + cy, 0, height - 1);
        if sy == height - 1 {
            return Rgb::BLACK;
        }
        source.get(sx as u32, sy as u32)
    }
}

/// Shift the image up by a fixed number of rows (each output pixel
/// samples below itself). Rows swept in past the bottom edge are forced
/// to black, as with [`Rotation`].
pub struct Shift {
    rows: i32,
}

impl Shift {
    pub fn new(rows: i32) -> Self {
        Shift { rows }
    }
}

impl Default for Shift {
    /// The stock shift of 50 rows.
    fn default() -> Self {
        Shift::new(50)
    }
}

impl PixelTransform for Shift {
    fn pixel_at(&self, source: &PixelGrid, x: u32, y: u32) -> Rgb {
        let height = source.height() as i32;
        let sy = clamp(y as i32 + self.rows, 0, height - 1);
        if sy == height - 1 {
            return Rgb::BLACK;
        }
        source.get(x, sy as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::process;

    fn run<T: PixelTransform>(source: &PixelGrid, transform: &T) -> PixelGrid {
        process(source, transform, |_| {}, || false).unwrap()
    }

    /// Grid whose pixels encode their own coordinates.
    fn coordinate_grid(width: u32, height: u32) -> PixelGrid {
        PixelGrid::from_fn(width, height, |x, y| Rgb::new(x as u8, y as u8, 0))
    }

    #[test]
    fn test_vertical_wave_zero_crossing_row_is_unchanged() {
        let source = coordinate_grid(30, 30);
        let result = run(&source, &VerticalWave);
        // sin(0) = 0: row 0 keeps its columns.
        for x in 0..30 {
            assert_eq!(result.get(x, 0), source.get(x, 0));
        }
    }

    #[test]
    fn test_vertical_wave_peak_row_shifts_by_amplitude() {
        let source = coordinate_grid(30, 30);
        let result = run(&source, &VerticalWave);
        // Row 15 sits at the sine peak: a full 20-column displacement.
        assert_eq!(result.get(5, 15), source.get(25, 15));
        // Columns near the right edge clamp to the border.
        assert_eq!(result.get(29, 15), source.get(29, 15));
    }

    #[test]
    fn test_horizontal_wave_peak_column_shifts_by_amplitude() {
        let source = coordinate_grid(30, 30);
        let result = run(&source, &HorizontalWave);
        assert_eq!(result.get(15, 5), source.get(15, 25));
    }

    #[test]
    fn test_glass_same_seed_reproduces_output() {
        let source = coordinate_grid(12, 12);
        let a = run(&source, &Glass::new(42));
        let b = run(&source, &Glass::new(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_glass_is_identity_on_constant_field() {
        let source = PixelGrid::filled(8, 8, Rgb::new(33, 66, 99));
        let result = run(&source, &Glass::new(7));
        assert_eq!(result, source);
    }

    #[test]
    fn test_rotation_center_pixel_is_fixed() {
        let source = coordinate_grid(10, 10);
        let result = run(&source, &Rotation::default());
        assert_eq!(result.get(5, 5), source.get(5, 5));
    }

    #[test]
    fn test_rotation_forces_black_on_last_row_clamp() {
        // (9, 9) rotates past the bottom edge and clamps onto the last
        // row, so it must come out black, not sampled.
        let source = PixelGrid::filled(10, 10, Rgb::new(200, 200, 200));
        let result = run(&source, &Rotation::default());
        assert_eq!(result.get(9, 9), Rgb::BLACK);
    }

    #[test]
    fn test_shift_copies_rows_from_below() {
        let source = coordinate_grid(4, 60);
        let result = run(&source, &Shift::default());
        assert_eq!(result.get(0, 0), source.get(0, 50));
        assert_eq!(result.get(3, 5), source.get(3, 55));
    }

    #[test]
    fn test_shift_blacks_out_rows_past_the_bottom() {
        // Every row of a 10-row image lands on the clamped last row.
        let source = PixelGrid::filled(10, 10, Rgb::new(200, 200, 200));
        let result = run(&source, &Shift::default());
        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(result.get(x, y), Rgb::BLACK);
            }
        }
    }
}
