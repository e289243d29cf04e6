use crate::abort::AbortSignal;
use crate::abort::Checkpoint;
use crate::abort::RunToken;
use crate::Error;
use crate::Hooks;
use crate::Outcome;
use crate::StatusCode;
use crate::TestCase;
use crate::PANICKED;
use crate::PASSED;

/// Run one test's setup, body and teardown
///
/// Fails with [`Error::Busy`] without running anything if another test is
/// already executing, e.g. when a body re-enters the engine from a thread it
/// spawned.
pub fn execute(case: &TestCase, hooks: &Hooks) -> Result<Outcome, Error> {
    let Some(token) = RunToken::acquire() else {
        tracing::warn!(name = case.name(), "engine is busy");
        return Err(Error::Busy);
    };
    let name = case.name();

    if let Some(status) = hooks.setup(name) {
        if status != PASSED {
            tracing::debug!(name, status, "setup failed");
            return Ok(Outcome::SetupFailed);
        }
    }

    let status = run_body(case, &token);
    tracing::debug!(name, status, "body finished");

    if let Some(status) = hooks.teardown(name) {
        if status != PASSED {
            tracing::debug!(name, status, "teardown failed");
            return Ok(Outcome::TeardownFailed);
        }
    }

    Ok(Outcome::from_status(status))
}

fn run_body(case: &TestCase, token: &RunToken) -> StatusCode {
    let checkpoint = Checkpoint::open(token);
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| case.call()));
    drop(checkpoint);

    match result {
        Ok(status) => status,
        Err(payload) => match payload.downcast::<AbortSignal>() {
            Ok(signal) => signal.code,
            Err(payload) => {
                let message = if let Some(s) = payload.downcast_ref::<&str>() {
                    (*s).to_owned()
                } else if let Some(s) = payload.downcast_ref::<String>() {
                    s.clone()
                } else {
                    String::from("Box<dyn Any>")
                };
                tracing::warn!(name = case.name(), %message, "test body panicked");
                PANICKED
            }
        },
    }
}
