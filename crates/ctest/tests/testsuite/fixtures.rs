fn test_cmd() -> snapbox::cmd::Command {
    static BIN: once_cell::sync::Lazy<std::path::PathBuf> =
        once_cell::sync::Lazy::new(|| crate::util::compile_example("fixtures"));
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
        "--------------------------------------------------
running plain
setup plain
teardown plain
test case \"plain\" passed
--------------------------------------------------
running needs_db
setup needs_db
setup \"needs_db\" failed
--------------------------------------------------
running leaks
setup leaks
teardown leaks
teardown \"leaks\" failed
--------------------------------------------------
running compares
setup compares
assert failed: items.len() == 4
\t#0: 3
\t#1: 4
file: \"[..]fixtures.rs\", line [..]
teardown compares
test case \"compares\" failed
--------------------------------------------------
running bytes
setup bytes
assert failed: sent == received
\t#0: 01AB
\t#1: 01AC
file: \"[..]fixtures.rs\", line [..]
teardown bytes
test case \"bytes\" failed
--------------------------------------------------
running nested
setup nested
assert failed: 10 < 3
\t#0: 10
\t#1: 3
file: \"[..]fixtures.rs\", line [..]
teardown nested
test case \"nested\" failed
=== total: 6, passed: 1, failed: 5, skipped: 0 ===
",
    );
}

#[test]
fn setup_failure() {
    check(&["-u", "needs_db"], 17, "setup needs_db\n");
}

#[test]
fn teardown_failure() {
    check(&["-u", "2"], 18, "setup leaks\nteardown leaks\n");
}

#[test]
fn assertion_failure() {
    check(
        &["-u", "compares"],
        16,
        "setup compares
assert failed: items.len() == 4
\t#0: 3
\t#1: 4
file: \"[..]fixtures.rs\", line [..]
teardown compares
",
    );
}

#[test]
fn interactive() {
    check(&["-i", "script.txt"], 3, "interactive\n  -i\n  script.txt\n");
}

#[test]
fn unknown_argument_goes_interactive() {
    check(&["repl", "--fast"], 3, "interactive\n  repl\n  --fast\n");
}

#[test]
fn flags_take_precedence_over_hook() {
    check(
        &["-c", "-i"],
        0,
        "plain\nneeds_db\nleaks\ncompares\nbytes\nnested\n",
    );
}

#[test]
fn flag_cluster_goes_interactive() {
    check(&["-ci"], 3, "interactive\n  -ci\n");
}
