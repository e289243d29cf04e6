use crate::StatusCode;
use crate::TestCase;

/// Test cases in registration order
///
/// Registration order is the order of a full run and the numbering used by
/// [`Registry::find`]. Names are not checked for uniqueness; lookup by name
/// returns the first match.
#[derive(Debug, Default)]
pub struct Registry {
    cases: Vec<TestCase>,
    limit: Option<usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry that refuses to grow past `limit` cases
    ///
    /// Registration happens before anything could recover from an overflow,
    /// so exceeding the limit terminates the process.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            cases: Vec::with_capacity(limit),
            limit: Some(limit),
        }
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        body: impl Fn() -> StatusCode + Send + Sync + 'static,
    ) {
        self.push(TestCase::new(name, body));
    }

    pub fn push(&mut self, case: TestCase) {
        if let Some(limit) = self.limit {
            if self.cases.len() == limit {
                tracing::error!(limit, name = case.name(), "registry is full");
                eprintln!("too many test cases (limit {limit})");
                std::process::exit(1);
            }
        }
        tracing::trace!(index = self.cases.len(), name = case.name(), "registered");
        self.cases.push(case);
    }

    /// Names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.cases.iter().map(TestCase::name)
    }

    /// Resolve a test by ordinal or by name
    ///
    /// A key made only of ASCII digits is always an index, even when some
    /// test is literally named with digits. Anything else (`"+1"`, `" 1"`) is
    /// a name.
    pub fn find(&self, key: &str) -> Option<usize> {
        if !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit()) {
            // Too many digits for `usize` cannot be in range either
            let index = key.parse::<usize>().ok()?;
            return (index < self.cases.len()).then_some(index);
        }
        self.cases.iter().position(|case| case.name() == key)
    }

    pub fn get(&self, index: usize) -> Option<&TestCase> {
        self.cases.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TestCase> {
        self.cases.iter()
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}

impl<'r> IntoIterator for &'r Registry {
    type Item = &'r TestCase;
    type IntoIter = std::slice::Iter<'r, TestCase>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
