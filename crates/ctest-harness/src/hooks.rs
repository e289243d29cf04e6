use crate::StatusCode;

/// Called with the test's name before its body, or after it
pub type ContextHook = Box<dyn Fn(&str) -> StatusCode + Send + Sync>;

/// Takes over the whole command line, binary name first
pub type InteractiveHook = Box<dyn Fn(&[std::ffi::OsString]) -> StatusCode + Send + Sync>;

/// Optional callbacks wrapped around every test
///
/// Each slot holds at most one callback. Setting a slot again replaces the
/// previous callback.
#[derive(Default)]
pub struct Hooks {
    setup: Option<ContextHook>,
    teardown: Option<ContextHook>,
    interactive: Option<InteractiveHook>,
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_setup(&mut self, hook: impl Fn(&str) -> StatusCode + Send + Sync + 'static) {
        self.setup = Some(Box::new(hook));
    }

    pub fn set_teardown(&mut self, hook: impl Fn(&str) -> StatusCode + Send + Sync + 'static) {
        self.teardown = Some(Box::new(hook));
    }

    pub fn set_interactive(
        &mut self,
        hook: impl Fn(&[std::ffi::OsString]) -> StatusCode + Send + Sync + 'static,
    ) {
        self.interactive = Some(Box::new(hook));
    }

    pub fn has_interactive(&self) -> bool {
        self.interactive.is_some()
    }

    /// `None` when no setup hook is registered
    pub(crate) fn setup(&self, name: &str) -> Option<StatusCode> {
        self.setup.as_ref().map(|hook| hook(name))
    }

    /// `None` when no teardown hook is registered
    pub(crate) fn teardown(&self, name: &str) -> Option<StatusCode> {
        self.teardown.as_ref().map(|hook| hook(name))
    }

    /// `None` when no interactive hook is registered
    pub(crate) fn interactive(&self, args: &[std::ffi::OsString]) -> Option<StatusCode> {
        self.interactive.as_ref().map(|hook| hook(args))
    }
}

impl std::fmt::Debug for Hooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hooks")
            .field("setup", &self.setup.is_some())
            .field("teardown", &self.teardown.is_some())
            .field("interactive", &self.interactive.is_some())
            .finish()
    }
}
