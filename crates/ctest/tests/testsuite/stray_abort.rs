fn test_cmd() -> snapbox::cmd::Command {
    static BIN: once_cell::sync::Lazy<std::path::PathBuf> =
        once_cell::sync::Lazy::new(|| crate::util::compile_example("stray_abort"));
    crate::util::command(&BIN)
}

#[test]
fn abort_from_spawned_thread_exits_process() {
    test_cmd().assert().code(7).stdout_matches(
        "--------------------------------------------------
running background
",
    );
}

#[test]
fn abort_outside_any_test_exits_process() {
    test_cmd().args(["-i"]).assert().code(5).stdout_matches("");
}

#[test]
fn other_tests_unaffected() {
    test_cmd().args(["-u", "after"]).assert().code(0).stdout_matches("");
}
