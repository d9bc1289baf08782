//! rasterfx: per-pixel image transformation engine.
//!
//! Applies a pointwise, convolution-based, or geometric transformation to
//! an 8-bit RGB [`PixelGrid`], producing a new grid of the same
//! dimensions, with per-column progress reporting and cooperative
//! cancellation.
//!
//! ## Architecture
//!
//! - [`PixelGrid`] holds the image values; out-of-range neighborhood
//!   reads are clamped to the border (edge replication).
//! - [`Kernel`] is a square, odd-sided weight matrix; malformed shapes
//!   are rejected at construction.
//! - [`PixelTransform`] is the single contract every filter implements:
//!   given a source grid and a coordinate, answer the result color.
//! - [`process`] owns the outer loop, reports progress and polls the
//!   cancellation signal once per column, and either returns the
//!   completed grid or discards the partial one.
//! - [`spawn`] runs the pass on a worker thread behind a
//!   [`ProcessingJob`] handle for callers that must not block.
//!
//! ## Example
//!
//! ```
//! use rasterfx::filters::Invert;
//! use rasterfx::{process, PixelGrid, Rgb};
//!
//! let source = PixelGrid::filled(4, 4, Rgb::new(10, 20, 30));
//! let result = process(&source, &Invert, |_percent| {}, || false).unwrap();
//! assert_eq!(result.get(0, 0), Rgb::new(245, 235, 225));
//! ```

pub mod engine;
pub mod filters;
pub mod grid;
pub mod kernel;

pub use engine::{process, spawn, PixelTransform, ProcessingJob};
pub use grid::{clamp, PixelGrid, Rgb};
pub use kernel::{Kernel, KernelError};
