use ctest::StatusCode;
use ctest::PASSED;

fn first() -> StatusCode {
    PASSED
}

fn second() -> StatusCode {
    PASSED
}

fn main() {
    ctest::init_logging();
    ctest::Harness::with_limit(1)
        .case("first", first)
        .case("second", second)
        .main()
}
