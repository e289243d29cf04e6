/// Build one of this package's demo programs, returning the executable
pub fn compile_example(name: &str) -> std::path::PathBuf {
    let manifest_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
    let run = escargot::CargoBuild::new()
        .package("ctest")
        .example(name)
        .manifest_path(manifest_path)
        .current_release()
        .current_target()
        .target_dir(target_dir())
        .run()
        .unwrap_or_else(|e| panic!("{e}"));
    run.path().to_owned()
}

/// A command running `bin` with a fixed terminal width and no logging
pub fn command(bin: &std::path::Path) -> snapbox::cmd::Command {
    snapbox::cmd::Command::new(bin)
        .env("COLUMNS", "50")
        .env_remove("CTEST_LOG")
}

fn target_dir() -> std::path::PathBuf {
    const TEMPDIR: &str = env!("CARGO_TARGET_TMPDIR");

    let target_dir = std::path::Path::new(TEMPDIR).join("ctest_target");
    std::fs::create_dir_all(&target_dir).unwrap();
    target_dir
}
