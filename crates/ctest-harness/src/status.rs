/// Value returned by a test body or a lifecycle hook
///
/// `0` means success, [`SKIPPED`] means the body chose not to run, anything
/// else is a failure.
pub type StatusCode = i32;

pub const PASSED: StatusCode = 0;

/// Sentinel a body returns to report itself as skipped
///
/// The four bytes `SKIP` read as a little-endian integer.
pub const SKIPPED: StatusCode = i32::from_le_bytes(*b"SKIP");

/// Status reported for a body that panicked instead of returning
pub const PANICKED: StatusCode = 101;

/// Classification of one test's setup, body and teardown
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Passed,
    Skipped,
    Failed,
    /// The setup hook failed; the body never ran.
    SetupFailed,
    /// The teardown hook failed; this overrides whatever the body returned.
    TeardownFailed,
}

impl Outcome {
    pub fn from_status(code: StatusCode) -> Self {
        match code {
            SKIPPED => Self::Skipped,
            PASSED => Self::Passed,
            _ => Self::Failed,
        }
    }

    /// Process exit status of a single-test run
    ///
    /// Other tooling parses these, they must not change.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Passed => 0,
            Self::Failed => 16,
            Self::SetupFailed => 17,
            Self::TeardownFailed => 18,
            Self::Skipped => 32,
        }
    }

    pub fn is_failure(self) -> bool {
        matches!(
            self,
            Self::Failed | Self::SetupFailed | Self::TeardownFailed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skip_sentinel_spells_skip() {
        assert_eq!(SKIPPED.to_le_bytes(), *b"SKIP");
        assert_ne!(SKIPPED, PASSED);
    }

    #[test]
    fn status_classification() {
        assert_eq!(Outcome::from_status(PASSED), Outcome::Passed);
        assert_eq!(Outcome::from_status(SKIPPED), Outcome::Skipped);
        assert_eq!(Outcome::from_status(1), Outcome::Failed);
        assert_eq!(Outcome::from_status(-1), Outcome::Failed);
        assert_eq!(Outcome::from_status(PANICKED), Outcome::Failed);
    }

    #[test]
    fn exit_codes_are_stable() {
        let codes = [
            Outcome::Passed,
            Outcome::Failed,
            Outcome::SetupFailed,
            Outcome::TeardownFailed,
            Outcome::Skipped,
        ]
        .map(Outcome::exit_code);
        assert_eq!(codes, [0, 16, 17, 18, 32]);
    }

    #[test]
    fn only_failures_count_as_failures() {
        assert!(!Outcome::Passed.is_failure());
        assert!(!Outcome::Skipped.is_failure());
        assert!(Outcome::Failed.is_failure());
        assert!(Outcome::SetupFailed.is_failure());
        assert!(Outcome::TeardownFailed.is_failure());
    }
}
