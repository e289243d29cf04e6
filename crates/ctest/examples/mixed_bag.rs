use ctest::StatusCode;

fn returns_zero() -> StatusCode {
    ctest::pass!()
}

fn fails_check() -> StatusCode {
    println!("before check");
    ctest::check!(1 + 1 == 3);
    println!("after check");
    ctest::PASSED
}

fn skipped() -> StatusCode {
    ctest::skip!()
}

fn main() {
    ctest::init_logging();
    ctest::Harness::new()
        .case("A", returns_zero)
        .case("B", fails_check)
        .case("C", skipped)
        .main()
}
