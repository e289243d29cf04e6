//! Execution engine for native test binaries
//!
//! Test bodies are registered explicitly, in order, on a [`Harness`] and then
//! dispatched according to the command line:
//!
//! ```no_run
//! use ctest_harness::Harness;
//!
//! fn adds() -> ctest_harness::StatusCode {
//!     if 1 + 1 != 2 {
//!         ctest_harness::abort(1);
//!     }
//!     ctest_harness::PASSED
//! }
//!
//! Harness::new()
//!     .case("adds", adds)
//!     .main();
//! ```
//!
//! A body may call [`abort`] from any depth of its call stack. Only that body
//! stops; the harness resumes with teardown and the next test. This relies on
//! unwinding, so binaries using the harness must not be built with
//! `panic = "abort"`.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![warn(missing_debug_implementations)]

mod abort;
mod case;
mod dispatch;
mod engine;
mod error;
mod harness;
mod hooks;
mod notify;
mod registry;
mod render;
mod status;

pub use abort::abort;
pub use case::*;
pub use engine::execute;
pub use error::*;
pub use harness::*;
pub use hooks::*;
pub use notify::RunSummary;
pub use registry::*;
pub use render::*;
pub use status::*;
