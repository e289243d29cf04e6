use super::Event;
use super::Notifier;
use super::FAILED;
use super::OK;
use super::SKIPPED;
use crate::Outcome;
use crate::Ruler;
use crate::RunSummary;

/// Streams one status line per test and a closing summary banner
#[derive(Debug)]
pub(crate) struct PrettyRunNotifier<W> {
    writer: W,
    ruler: Ruler,
    summary: RunSummary,
}

impl<W: std::io::Write> PrettyRunNotifier<W> {
    pub(crate) fn new(writer: W, ruler: Ruler) -> Self {
        Self {
            writer,
            ruler,
            summary: Default::default(),
        }
    }

    pub(crate) fn summary(&self) -> RunSummary {
        self.summary
    }
}

impl<W: std::io::Write> Notifier for PrettyRunNotifier<W> {
    fn notify(&mut self, event: Event) -> std::io::Result<()> {
        self.summary.notify(event.clone())?;
        match event {
            Event::SuiteStart { .. } => {}
            Event::CaseStart { name } => {
                self.ruler.separator(&mut self.writer, '-')?;
                writeln!(self.writer, "running {name}")?;
                self.writer.flush()?;
            }
            Event::CaseComplete { name, outcome } => {
                let (subject, verdict, style) = match outcome {
                    Outcome::Passed => ("test case", "passed", OK),
                    Outcome::Skipped => ("test case", "skipped", SKIPPED),
                    Outcome::Failed => ("test case", "failed", FAILED),
                    Outcome::SetupFailed => ("setup", "failed", FAILED),
                    Outcome::TeardownFailed => ("teardown", "failed", FAILED),
                };
                writeln!(
                    self.writer,
                    "{}{subject} \"{name}\" {verdict}{}",
                    style.render(),
                    style.render_reset()
                )?;
                self.writer.flush()?;
            }
            Event::SuiteComplete => {
                self.summary.write_complete(&mut self.writer, &self.ruler)?;
            }
        }
        Ok(())
    }
}
