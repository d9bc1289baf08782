//! Processing driver: per-pixel transformation with progress reporting
//! and cooperative cancellation.
//!
//! [`process`] owns the outer loop; filters only answer "what color goes
//! at this point" through [`PixelTransform`]. Progress is reported and the
//! cancellation signal sampled once per column, so cancellation latency is
//! bounded by one column's worth of pixel work.
//!
//! [`spawn`] runs the same loop on a worker thread and exposes the two
//! one-way channels the caller needs: a progress receiver and a
//! cancellation flag. Marshaling progress onto a UI context is the
//! caller's responsibility.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

use tracing::debug;

use crate::grid::{PixelGrid, Rgb};

/// The per-pixel transformation contract.
///
/// Given a read-only source grid and a coordinate, compute the result
/// color for that coordinate. Implementations must not write anywhere;
/// the driver owns the result grid.
pub trait PixelTransform {
    fn pixel_at(&self, source: &PixelGrid, x: u32, y: u32) -> Rgb;
}

/// Apply `transform` to every pixel of `source`, producing a new grid of
/// the same dimensions.
///
/// Iterates column-major. Before each column, `on_progress` receives the
/// integer percentage `x * 100 / width` (non-decreasing, not necessarily
/// hitting every value) and `is_cancelled` is polled: if it returns true
/// the pass aborts and the partial result is discarded.
///
/// Returns `Some(result)` only if the loop ran to completion; `None`
/// means cancelled, which is a normal termination, not an error.
pub fn process<T, P, C>(
    source: &PixelGrid,
    transform: &T,
    mut on_progress: P,
    mut is_cancelled: C,
) -> Option<PixelGrid>
where
    T: PixelTransform + ?Sized,
    P: FnMut(u8),
    C: FnMut() -> bool,
{
    let width = source.width();
    let height = source.height();
    debug!(width, height, "processing pass started");

    let mut result = PixelGrid::new(width, height);
    for x in 0..width {
        on_progress((x as u64 * 100 / width as u64) as u8);
        if is_cancelled() {
            debug!(column = x, "processing pass cancelled");
            return None;
        }
        for y in 0..height {
            result.set(x, y, transform.pixel_at(source, x, y));
        }
    }

    debug!("processing pass finished");
    Some(result)
}

/// A processing pass running on a worker thread.
///
/// Created by [`spawn`]. The caller polls [`progress`](Self::progress),
/// may [`cancel`](Self::cancel) at any time, and finally
/// [`join`](Self::join)s to take ownership of the result.
pub struct ProcessingJob {
    handle: thread::JoinHandle<Option<PixelGrid>>,
    cancel: Arc<AtomicBool>,
    progress: mpsc::Receiver<u8>,
}

/// Run `transform` over `source` on a dedicated worker thread.
///
/// The source grid and the transform move into the worker; the engine
/// shares no mutable state with the caller, so no locks are involved.
pub fn spawn<T>(source: PixelGrid, transform: T) -> ProcessingJob
where
    T: PixelTransform + Send + 'static,
{
    let cancel = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancel);
    let (tx, rx) = mpsc::channel();

    let handle = thread::spawn(move || {
        process(
            &source,
            &transform,
            |percent| {
                // Receiver may be gone if the caller dropped the job.
                let _ = tx.send(percent);
            },
            || flag.load(Ordering::Relaxed),
        )
    });

    ProcessingJob {
        handle,
        cancel,
        progress: rx,
    }
}

impl ProcessingJob {
    /// Request cancellation. The worker observes the flag at its next
    /// per-column check and discards the partial result.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    /// Progress percentages in `[0, 100]` as the driver reports them.
    /// The channel disconnects when the pass ends.
    pub fn progress(&self) -> &mpsc::Receiver<u8> {
        &self.progress
    }

    /// Wait for the pass to end. `Some` carries the completed result;
    /// `None` means the pass was cancelled.
    pub fn join(self) -> Option<PixelGrid> {
        match self.handle.join() {
            Ok(result) => result,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }
}
