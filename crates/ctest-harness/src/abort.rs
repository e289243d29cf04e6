//! Running token and the checkpoint a test body can abort to.
//!
//! The token is process-wide: at most one body runs through the engine at a
//! time, whichever thread asks. The checkpoint is per-thread: only the thread
//! that entered the body may unwind back to it.

use std::cell::Cell;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;

use crate::StatusCode;

static RUNNING: AtomicBool = AtomicBool::new(false);

thread_local! {
    static CHECKPOINT: Cell<bool> = const { Cell::new(false) };
}

/// Stop the current test body, reporting `code` as its status
///
/// Called from the thread running a test body, this unwinds out of the body
/// (and everything it called) back to the engine, which then runs teardown
/// and moves on. Called anywhere else there is nothing to resume, so the
/// process exits with `code`.
pub fn abort(code: StatusCode) -> ! {
    let owned = RUNNING.load(Ordering::Acquire) && CHECKPOINT.with(Cell::get);
    if !owned {
        tracing::error!(code, "abort outside of a running test body");
        std::process::exit(code);
    }
    tracing::debug!(code, "aborting test body");
    // `resume_unwind` skips the panic hook, an abort is not a crash
    std::panic::resume_unwind(Box::new(AbortSignal { code }))
}

/// Panic payload carrying an aborted body's status
#[derive(Debug)]
pub(crate) struct AbortSignal {
    pub(crate) code: StatusCode,
}

/// Exclusive claim on the engine, released on drop
#[derive(Debug)]
pub(crate) struct RunToken {
    _private: (),
}

impl RunToken {
    pub(crate) fn acquire() -> Option<Self> {
        RUNNING
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { _private: () })
    }
}

impl Drop for RunToken {
    fn drop(&mut self) {
        RUNNING.store(false, Ordering::Release);
    }
}

/// Marks the current thread as the owner of the resumption point, cleared on drop
#[derive(Debug)]
pub(crate) struct Checkpoint {
    _token: std::marker::PhantomData<*const ()>,
}

impl Checkpoint {
    pub(crate) fn open(_token: &RunToken) -> Self {
        CHECKPOINT.with(|open| open.set(true));
        Self {
            _token: std::marker::PhantomData,
        }
    }
}

impl Drop for Checkpoint {
    fn drop(&mut self) {
        CHECKPOINT.with(|open| open.set(false));
    }
}
