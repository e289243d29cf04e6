use std::ffi::OsString;

use ctest::StatusCode;
use ctest::PASSED;

/// Aborting from a thread the test spawned has nowhere to resume
fn background() -> StatusCode {
    let worker = std::thread::spawn(|| {
        ctest::abort(7);
    });
    let _ = worker.join();
    println!("unreachable");
    PASSED
}

fn after() -> StatusCode {
    PASSED
}

/// No test is running here at all
fn interactive(_args: &[OsString]) -> StatusCode {
    ctest::abort(5)
}

ctest::ctest_main!(interactive = interactive, tests = [background, after]);
