//! Convolution kernels.
//!
//! A [`Kernel`] is a square, odd-sided matrix of `f32` weights with a
//! derived radius `side / 2`. Malformed shapes are rejected at
//! construction; nothing is validated again on the per-pixel path.
//!
//! Blur and Gaussian constructors produce kernels whose weights sum to
//! 1.0. The sharpen and emboss kernels are not normalized.

use ndarray::{arr2, Array2};
use thiserror::Error;
use tracing::trace;

/// Construction-time kernel shape violations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KernelError {
    #[error("kernel must have at least one row and column")]
    Empty,

    #[error("kernel must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("kernel side length must be odd, got {0}")]
    EvenSide(usize),

    #[error("kernel pair shapes differ: {0}x{0} vs {1}x{1}")]
    MismatchedPair(usize, usize),
}

/// A square matrix of weights used to combine a pixel neighborhood into
/// one output value.
///
/// Weights are stored row-major: row index is the vertical offset
/// `l + radius`, column index the horizontal offset `k + radius`.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    weights: Array2<f32>,
}

impl Kernel {
    /// Create a kernel from a weight matrix.
    ///
    /// The matrix must be square with an odd side length.
    pub fn new(weights: Array2<f32>) -> Result<Self, KernelError> {
        let (rows, cols) = weights.dim();
        if rows == 0 || cols == 0 {
            return Err(KernelError::Empty);
        }
        if rows != cols {
            return Err(KernelError::NotSquare { rows, cols });
        }
        if rows % 2 == 0 {
            return Err(KernelError::EvenSide(rows));
        }
        Ok(Kernel { weights })
    }

    /// Internal constructor for weight matrices that are square and odd
    /// by construction.
    pub(crate) fn from_weights(weights: Array2<f32>) -> Self {
        debug_assert!(weights.nrows() == weights.ncols() && weights.nrows() % 2 == 1);
        Kernel { weights }
    }

    /// Box blur kernel: every weight `1 / side²`.
    ///
    /// An even `side` is rounded up to the next odd size.
    pub fn box_blur(side: usize) -> Self {
        let side = if side % 2 == 0 { side + 1 } else { side };
        let weight = 1.0 / (side * side) as f32;
        trace!(side, "box kernel");
        Kernel::from_weights(Array2::from_elem((side, side), weight))
    }

    /// Gaussian kernel of side `2 * radius + 1`.
    ///
    /// Weight at offset `(i, j)` is `exp(-(i² + j²) / (2 σ²))`; the whole
    /// kernel is divided by the sum of unnormalized weights so total mass
    /// is 1. `sigma` must be positive.
    pub fn gaussian(radius: usize, sigma: f32) -> Self {
        assert!(sigma > 0.0, "sigma must be positive");
        let side = 2 * radius + 1;
        let r = radius as i32;
        let mut weights = Array2::<f32>::zeros((side, side));
        let mut norm = 0.0f32;
        for j in -r..=r {
            for i in -r..=r {
                let w = (-((i * i + j * j) as f32) / (2.0 * sigma * sigma)).exp();
                weights[[(j + r) as usize, (i + r) as usize]] = w;
                norm += w;
            }
        }
        weights.mapv_inplace(|w| w / norm);
        trace!(side, sigma, "gaussian kernel");
        Kernel { weights }
    }

    /// Fixed 3×3 sharpening kernel.
    pub fn sharpen() -> Self {
        Kernel::from_weights(arr2(&[
            [0.0, -1.0, 0.0],
            [-1.0, 5.0, -1.0],
            [0.0, -1.0, 0.0],
        ]))
    }

    /// Fixed 3×3 embossing kernel.
    pub fn emboss() -> Self {
        Kernel::from_weights(arr2(&[
            [0.0, 1.0, 0.0],
            [1.0, 0.0, -1.0],
            [0.0, -1.0, 0.0],
        ]))
    }

    /// Side length (always odd).
    #[inline]
    pub fn side(&self) -> usize {
        self.weights.nrows()
    }

    /// Half-width `side / 2`.
    #[inline]
    pub fn radius(&self) -> usize {
        self.side() / 2
    }

    /// Weight at signed offset `(k, l)`, both in `[-radius, radius]`.
    #[inline]
    pub fn weight(&self, k: i32, l: i32) -> f32 {
        let r = self.radius() as i32;
        self.weights[[(l + r) as usize, (k + r) as usize]]
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f32 {
        self.weights.sum()
    }
}
