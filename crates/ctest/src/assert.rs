//! Failure reporting behind the `check*!` macros.

use ctest_harness::abort;

/// Status an assertion failure aborts with
const ASSERT_FAILED: ctest_harness::StatusCode = 1;

pub fn fail(expr: &str, file: &str, line: u32) -> ! {
    println!("assert failed: {expr}");
    println!("file: \"{file}\", line {line}");
    abort(ASSERT_FAILED)
}

pub fn fail_binary(
    expr: &str,
    left: &dyn std::fmt::Debug,
    right: &dyn std::fmt::Debug,
    file: &str,
    line: u32,
) -> ! {
    println!("assert failed: {expr}");
    println!("\t#0: {left:?}");
    println!("\t#1: {right:?}");
    println!("file: \"{file}\", line {line}");
    abort(ASSERT_FAILED)
}

pub fn fail_bytes(expr: &str, left: &[u8], right: &[u8], file: &str, line: u32) -> ! {
    println!("assert failed: {expr}");
    println!("\t#0: {}", hex(left));
    println!("\t#1: {}", hex(right));
    println!("file: \"{file}\", line {line}");
    abort(ASSERT_FAILED)
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("{byte:02X}")).collect()
}
