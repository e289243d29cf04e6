use crate::StatusCode;

pub type Body = Box<dyn Fn() -> StatusCode + Send + Sync>;

/// A named test body
pub struct TestCase {
    name: String,
    body: Body,
}

impl TestCase {
    pub fn new(
        name: impl Into<String>,
        body: impl Fn() -> StatusCode + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            body: Box::new(body),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn call(&self) -> StatusCode {
        (self.body)()
    }
}

impl std::fmt::Debug for TestCase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestCase")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
