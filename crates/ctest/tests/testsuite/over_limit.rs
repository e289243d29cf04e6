fn test_cmd() -> snapbox::cmd::Command {
    static BIN: once_cell::sync::Lazy<std::path::PathBuf> =
        once_cell::sync::Lazy::new(|| crate::util::compile_example("over_limit"));
    crate::util::command(&BIN)
}

#[test]
fn registration_past_limit_is_fatal() {
    test_cmd()
        .assert()
        .code(1)
        .stdout_matches("")
        .stderr_matches("too many test cases (limit 1)\n");
}

#[test]
fn fatal_before_any_dispatch() {
    test_cmd()
        .args(["-c"])
        .assert()
        .code(1)
        .stdout_matches("")
        .stderr_matches("too many test cases (limit 1)\n");
}
