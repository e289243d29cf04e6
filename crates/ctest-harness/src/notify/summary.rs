use super::Event;
use super::FAILED;
use super::OK;
use super::SKIPPED;
use crate::Outcome;
use crate::Ruler;

/// Counts for one full run
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct RunSummary {
    total: usize,
    passed: usize,
    failed: usize,
    skipped: usize,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    /// Failed bodies plus setup and teardown failures
    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn has_failed(&self) -> bool {
        0 < self.failed
    }

    /// Failures take precedence over skips
    pub(crate) fn style(&self) -> anstyle::Style {
        if self.has_failed() {
            FAILED
        } else if 0 < self.skipped {
            SKIPPED
        } else {
            OK
        }
    }

    pub(crate) fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Passed => self.passed += 1,
            Outcome::Skipped => self.skipped += 1,
            Outcome::Failed | Outcome::SetupFailed | Outcome::TeardownFailed => self.failed += 1,
        }
    }

    pub(crate) fn write_complete(
        &self,
        writer: &mut dyn std::io::Write,
        ruler: &Ruler,
    ) -> std::io::Result<()> {
        ruler.banner(writer, '=', &self.to_string(), self.style())?;
        writer.flush()
    }
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "total: {}, passed: {}, failed: {}, skipped: {}",
            self.total, self.passed, self.failed, self.skipped
        )
    }
}

impl super::Notifier for RunSummary {
    fn notify(&mut self, event: Event) -> std::io::Result<()> {
        match event {
            Event::SuiteStart { total } => {
                self.total = total;
            }
            Event::CaseStart { .. } => {}
            Event::CaseComplete { outcome, .. } => self.record(outcome),
            Event::SuiteComplete => {}
        }
        Ok(())
    }
}
