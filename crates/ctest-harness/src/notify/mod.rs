mod pretty;
mod summary;

pub(crate) use pretty::*;
pub use summary::*;

use crate::Outcome;

pub(crate) trait Notifier {
    fn notify(&mut self, event: Event) -> std::io::Result<()>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Event {
    SuiteStart {
        total: usize,
    },
    CaseStart {
        name: String,
    },
    CaseComplete {
        name: String,
        outcome: Outcome,
    },
    SuiteComplete,
}

pub(crate) const FAILED: anstyle::Style = anstyle::Style::new()
    .bold()
    .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red)));
pub(crate) const OK: anstyle::Style = anstyle::Style::new()
    .bold()
    .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green)));
pub(crate) const SKIPPED: anstyle::Style = anstyle::Style::new()
    .bold()
    .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow)));
