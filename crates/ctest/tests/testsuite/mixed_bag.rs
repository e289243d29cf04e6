fn test_cmd() -> snapbox::cmd::Command {
    static BIN: once_cell::sync::Lazy<std::path::PathBuf> =
        once_cell::sync::Lazy::new(|| crate::util::compile_example("mixed_bag"));
    crate::util::command(&BIN)
}

fn check(args: &[&str], code: i32, expected: &str) {
    test_cmd()
        .args(args)
        .assert()
        .code(code)
        .stdout_matches(expected);
}

#[test]
fn normal() {
    check(
        &[],
        0,
        r#"--------------------------------------------------
running A
test case "A" passed
--------------------------------------------------
running B
before check
assert failed: 1 + 1 == 3
file: "[..]mixed_bag.rs", line [..]
test case "B" failed
--------------------------------------------------
running C
test case "C" skipped
=== total: 3, passed: 1, failed: 1, skipped: 1 ===
"#,
    );
}

#[test]
fn narrow_terminal() {
    test_cmd()
        .env("COLUMNS", "10")
        .assert()
        .code(0)
        .stdout_matches(
            r#"----------
running A
test case "A" passed
----------
running B
before check
assert failed: 1 + 1 == 3
file: "[..]mixed_bag.rs", line [..]
test case "B" failed
----------
running C
test case "C" skipped
total: 3, passed: 1, failed: 1, skipped: 1
"#,
        );
}

#[test]
fn collect() {
    let expected = "A\nB\nC\n";
    check(&["-c"], 0, expected);
    check(&["--collect"], 0, expected);
}

#[test]
fn unittest_by_index() {
    check(
        &["-u", "1"],
        16,
        r#"before check
assert failed: 1 + 1 == 3
file: "[..]mixed_bag.rs", line [..]
"#,
    );
}

#[test]
fn unittest_by_name() {
    check(
        &["--unittest", "B"],
        16,
        r#"before check
assert failed: 1 + 1 == 3
file: "[..]mixed_bag.rs", line [..]
"#,
    );
}

#[test]
fn unittest_codes() {
    check(&["-u", "A"], 0, "");
    check(&["-u", "0"], 0, "");
    check(&["-u", "C"], 32, "");
    check(&["--unittest=2"], 32, "");
}

#[test]
fn unittest_not_found() {
    check(&["-u", "D"], 1, "test case D not found\n");
    check(&["-u", "3"], 1, "test case 3 not found\n");
}

#[test]
fn unittest_missing_name() {
    check(&["-u"], 2, "--unittest requires an argument\n");
}

#[test]
fn help() {
    check(
        &["--help"],
        0,
        r#"usage: [..] [-i] [-c] [-u NAME] [-h]

Options:
  -i, --interactive      run in interactive mode
  -c, --collect          list all test cases
  -u, --unittest NAME    run a single test case, by name or by index
  -h, --help             show the help text

Without arguments every test case runs in registration order.
"#,
    );
}

#[test]
fn interactive_unsupported() {
    check(&["-i"], 1, "interactive mode is not supported\n");
}

#[test]
fn unknown_argument() {
    check(&["--bogus"], 1, "unknown argument '--bogus'\n");
}
