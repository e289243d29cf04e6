use std::ffi::OsString;

use crate::dispatch::Mode;
use crate::notify::Event;
use crate::notify::Notifier as _;
use crate::notify::PrettyRunNotifier;
use crate::*;

/// A test binary's registry, hooks and output settings
#[derive(Debug, Default)]
pub struct Harness {
    registry: Registry,
    hooks: Hooks,
    columns: Option<usize>,
}

impl Harness {
    pub fn new() -> Self {
        Self::default()
    }

    /// A harness holding at most `limit` test cases
    ///
    /// See [`Registry::with_limit`].
    pub fn with_limit(limit: usize) -> Self {
        Self {
            registry: Registry::with_limit(limit),
            ..Default::default()
        }
    }

    pub fn case(
        mut self,
        name: impl Into<String>,
        body: impl Fn() -> StatusCode + Send + Sync + 'static,
    ) -> Self {
        self.register(name, body);
        self
    }

    pub fn setup(mut self, hook: impl Fn(&str) -> StatusCode + Send + Sync + 'static) -> Self {
        self.set_setup(hook);
        self
    }

    pub fn teardown(mut self, hook: impl Fn(&str) -> StatusCode + Send + Sync + 'static) -> Self {
        self.set_teardown(hook);
        self
    }

    pub fn interactive(
        mut self,
        hook: impl Fn(&[OsString]) -> StatusCode + Send + Sync + 'static,
    ) -> Self {
        self.set_interactive(hook);
        self
    }

    /// Fix the separator width instead of reading it from the environment
    pub fn columns(mut self, width: usize) -> Self {
        self.columns = Some(width);
        self
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        body: impl Fn() -> StatusCode + Send + Sync + 'static,
    ) -> &mut Self {
        self.registry.register(name, body);
        self
    }

    pub fn set_setup(
        &mut self,
        hook: impl Fn(&str) -> StatusCode + Send + Sync + 'static,
    ) -> &mut Self {
        self.hooks.set_setup(hook);
        self
    }

    pub fn set_teardown(
        &mut self,
        hook: impl Fn(&str) -> StatusCode + Send + Sync + 'static,
    ) -> &mut Self {
        self.hooks.set_teardown(hook);
        self
    }

    pub fn set_interactive(
        &mut self,
        hook: impl Fn(&[OsString]) -> StatusCode + Send + Sync + 'static,
    ) -> &mut Self {
        self.hooks.set_interactive(hook);
        self
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn hooks(&self) -> &Hooks {
        &self.hooks
    }

    /// Look a test up by index or name, see [`Registry::find`]
    pub fn find(&self, key: &str) -> Option<&TestCase> {
        self.registry
            .find(key)
            .and_then(|index| self.registry.get(index))
    }

    /// Run a single test through the engine
    pub fn run_one(&self, key: &str) -> Result<Outcome, Error> {
        let case = self
            .find(key)
            .ok_or_else(|| Error::NotFound(key.to_owned()))?;
        execute(case, &self.hooks)
    }

    /// Run every test in registration order, streaming a line per test
    pub fn run_all(&self, writer: &mut dyn std::io::Write) -> std::io::Result<RunSummary> {
        let mut notifier = PrettyRunNotifier::new(writer, self.ruler());
        notifier.notify(Event::SuiteStart {
            total: self.registry.len(),
        })?;
        for case in &self.registry {
            notifier.notify(Event::CaseStart {
                name: case.name().to_owned(),
            })?;
            let outcome = match execute(case, &self.hooks) {
                Ok(outcome) => outcome,
                Err(err) => {
                    eprintln!("{err}");
                    Outcome::Failed
                }
            };
            notifier.notify(Event::CaseComplete {
                name: case.name().to_owned(),
                outcome,
            })?;
        }
        notifier.notify(Event::SuiteComplete)?;
        Ok(notifier.summary())
    }

    /// Write every test name, one per line, in registration order
    pub fn collect(&self, writer: &mut dyn std::io::Write) -> std::io::Result<()> {
        for name in self.registry.names() {
            writeln!(writer, "{name}")?;
        }
        Ok(())
    }

    /// Act on a command line (binary name first) and return the exit status
    pub fn dispatch(&self, args: &[OsString], writer: &mut dyn std::io::Write) -> i32 {
        match self.try_dispatch(args, writer) {
            Ok(code) => code,
            Err(err) => {
                let _ = writeln!(writer, "{err}");
                err.exit_code()
            }
        }
    }

    fn try_dispatch(&self, args: &[OsString], writer: &mut dyn std::io::Write) -> Result<i32, Error> {
        match dispatch::parse(args)? {
            Mode::Suite => {
                // Failures are reported, not propagated
                match self.run_all(writer) {
                    Ok(summary) => tracing::debug!(%summary, "suite finished"),
                    Err(err) => tracing::warn!(%err, "suite report interrupted"),
                }
                Ok(0)
            }
            Mode::Interactive => self.hooks.interactive(args).ok_or(Error::NoInteractive),
            Mode::Help { bin } => {
                dispatch::write_help(writer, &bin)?;
                Ok(0)
            }
            Mode::Collect => {
                self.collect(writer)?;
                Ok(0)
            }
            Mode::Unittest { key } => Ok(self.run_one(&key)?.exit_code()),
            Mode::Unrecognized { arg } => self
                .hooks
                .interactive(args)
                .ok_or(Error::Unrecognized(arg)),
        }
    }

    /// Dispatch on the process's own command line and exit
    pub fn main(self) -> ! {
        let raw = std::env::args_os().collect::<Vec<_>>();
        let mut stdout = anstream::stdout();
        let code = self.dispatch(&raw, &mut stdout);
        let _ = std::io::Write::flush(&mut stdout);
        std::process::exit(code)
    }

    fn ruler(&self) -> Ruler {
        self.columns.map(Ruler::new).unwrap_or_else(Ruler::from_env)
    }
}
