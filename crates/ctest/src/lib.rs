//! Embeddable test harness for native test binaries
//!
//! # Usage
//!
//! Add a `[[test]]` (or `[[bin]]`) target with `harness = false` and declare
//! its tests in `main`:
//!
//! ```toml
//! [[test]]
//! name = "mytest"
//! path = "tests/mytest.rs"
//! harness = false
//! ```
//!
//! ```no_run
//! use ctest::StatusCode;
//!
//! fn parses() -> StatusCode {
//!     ctest::check_eq!("42".parse::<u32>().ok(), Some(42));
//!     ctest::pass!()
//! }
//!
//! fn needs_network() -> StatusCode {
//!     ctest::skip!()
//! }
//!
//! ctest::ctest_main!(parses, needs_network);
//! ```
//!
//! A failed `check*!` stops the current test right there, the remaining tests
//! still run.

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use ctest_harness::abort;
pub use ctest_harness::Error;
pub use ctest_harness::Harness;
pub use ctest_harness::Outcome;
pub use ctest_harness::RunSummary;
pub use ctest_harness::StatusCode;
pub use ctest_harness::TestCase;
pub use ctest_harness::PASSED;
pub use ctest_harness::SKIPPED;

mod assert;
mod logging;

pub use logging::init_logging;
pub use logging::LOG_ENV;

#[doc(hidden)]
pub mod _private {
    pub use crate::assert::fail;
    pub use crate::assert::fail_binary;
    pub use crate::assert::fail_bytes;
}

/// Generate `fn main` registering the given tests in order
///
/// ```no_run
/// # use ctest::StatusCode;
/// # fn open_db(_: &str) -> StatusCode { 0 }
/// # fn close_db(_: &str) -> StatusCode { 0 }
/// # fn inserts() -> StatusCode { 0 }
/// # fn deletes() -> StatusCode { 0 }
/// ctest::ctest_main!(
///     setup = open_db,
///     teardown = close_db,
///     tests = [inserts, deletes],
/// );
/// ```
#[macro_export]
macro_rules! ctest_main {
    (
        $(setup = $setup:expr,)?
        $(teardown = $teardown:expr,)?
        $(interactive = $interactive:expr,)?
        tests = [$($test:path),* $(,)?] $(,)?
    ) => {
        fn main() {
            $crate::init_logging();
            let mut harness = $crate::Harness::new();
            $(harness.set_setup($setup);)?
            $(harness.set_teardown($teardown);)?
            $(harness.set_interactive($interactive);)?
            $(harness.register(::std::stringify!($test), $test);)*
            harness.main()
        }
    };
    ($($test:path),* $(,)?) => {
        $crate::ctest_main!(tests = [$($test),*]);
    };
}

/// Return [`SKIPPED`] from the enclosing test body
#[macro_export]
macro_rules! skip {
    () => {
        return $crate::SKIPPED
    };
}

/// Return [`PASSED`] from the enclosing test body
#[macro_export]
macro_rules! pass {
    () => {
        return $crate::PASSED
    };
}

/// Stop the current test unless `cond` holds
#[macro_export]
macro_rules! check {
    ($cond:expr $(,)?) => {
        if !$cond {
            $crate::_private::fail(
                ::std::stringify!($cond),
                ::std::file!(),
                ::std::line!(),
            );
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __check_binary {
    ($op:tt, $left:expr, $right:expr) => {
        match (&$left, &$right) {
            (left, right) => {
                if !(*left $op *right) {
                    $crate::_private::fail_binary(
                        ::std::concat!(
                            ::std::stringify!($left),
                            " ",
                            ::std::stringify!($op),
                            " ",
                            ::std::stringify!($right)
                        ),
                        left,
                        right,
                        ::std::file!(),
                        ::std::line!(),
                    );
                }
            }
        }
    };
}

/// Stop the current test unless `left == right`
#[macro_export]
macro_rules! check_eq {
    ($left:expr, $right:expr $(,)?) => {
        $crate::__check_binary!(==, $left, $right)
    };
}

/// Stop the current test unless `left != right`
#[macro_export]
macro_rules! check_ne {
    ($left:expr, $right:expr $(,)?) => {
        $crate::__check_binary!(!=, $left, $right)
    };
}

/// Stop the current test unless `left > right`
#[macro_export]
macro_rules! check_gt {
    ($left:expr, $right:expr $(,)?) => {
        $crate::__check_binary!(>, $left, $right)
    };
}

/// Stop the current test unless `left < right`
#[macro_export]
macro_rules! check_lt {
    ($left:expr, $right:expr $(,)?) => {
        $crate::__check_binary!(<, $left, $right)
    };
}

/// Stop the current test unless `left >= right`
#[macro_export]
macro_rules! check_ge {
    ($left:expr, $right:expr $(,)?) => {
        $crate::__check_binary!(>=, $left, $right)
    };
}

/// Stop the current test unless `left <= right`
#[macro_export]
macro_rules! check_le {
    ($left:expr, $right:expr $(,)?) => {
        $crate::__check_binary!(<=, $left, $right)
    };
}

/// Stop the current test unless both byte slices are equal, printing them as hex
#[macro_export]
macro_rules! check_bytes_eq {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left, right) => {
                let left: &[u8] = ::std::convert::AsRef::as_ref(left);
                let right: &[u8] = ::std::convert::AsRef::as_ref(right);
                if left != right {
                    $crate::_private::fail_bytes(
                        ::std::concat!(::std::stringify!($left), " == ", ::std::stringify!($right)),
                        left,
                        right,
                        ::std::file!(),
                        ::std::line!(),
                    );
                }
            }
        }
    };
}

/// Stop the current test if both byte slices are equal
#[macro_export]
macro_rules! check_bytes_ne {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left, right) => {
                let left: &[u8] = ::std::convert::AsRef::as_ref(left);
                let right: &[u8] = ::std::convert::AsRef::as_ref(right);
                if left == right {
                    $crate::_private::fail_bytes(
                        ::std::concat!(::std::stringify!($left), " != ", ::std::stringify!($right)),
                        left,
                        right,
                        ::std::file!(),
                        ::std::line!(),
                    );
                }
            }
        }
    };
}
