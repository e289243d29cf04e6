use std::ffi::OsString;

use ctest::StatusCode;
use ctest::PASSED;

fn setup(name: &str) -> StatusCode {
    println!("setup {name}");
    if name == "needs_db" {
        1
    } else {
        PASSED
    }
}

fn teardown(name: &str) -> StatusCode {
    println!("teardown {name}");
    if name == "leaks" {
        1
    } else {
        PASSED
    }
}

fn interactive(args: &[OsString]) -> StatusCode {
    println!("interactive");
    for arg in args.iter().skip(1) {
        println!("  {}", arg.to_string_lossy());
    }
    3
}

fn plain() -> StatusCode {
    ctest::check_eq!(2 * 21, 42);
    ctest::check_ne!("left", "right");
    ctest::check_ge!(3, 3);
    ctest::check_bytes_ne!(b"ab", b"ba");
    ctest::pass!()
}

fn needs_db() -> StatusCode {
    println!("body needs_db");
    ctest::pass!()
}

fn leaks() -> StatusCode {
    ctest::pass!()
}

fn compares() -> StatusCode {
    let items = vec![1, 2, 3];
    ctest::check_eq!(items.len(), 4);
    println!("unreachable");
    ctest::pass!()
}

fn bytes() -> StatusCode {
    let sent = [0x01u8, 0xab];
    let received = vec![0x01u8, 0xac];
    ctest::check_bytes_eq!(sent, received);
    println!("unreachable");
    ctest::pass!()
}

fn nested() -> StatusCode {
    outer();
    println!("unreachable");
    ctest::pass!()
}

fn outer() {
    inner();
    println!("unreachable");
}

fn inner() {
    ctest::check_lt!(10, 3);
}

ctest::ctest_main!(
    setup = setup,
    teardown = teardown,
    interactive = interactive,
    tests = [plain, needs_db, leaks, compares, bytes, nested],
);
