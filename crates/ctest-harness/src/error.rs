/// Reasons a dispatch or an engine run did not produce an [`Outcome`][crate::Outcome]
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Another test body is already running through the engine
    #[error("test case is running")]
    Busy,
    #[error("test case {0} not found")]
    NotFound(String),
    #[error("--{0} requires an argument")]
    MissingValue(&'static str),
    #[error("unknown argument '{0}'")]
    Unrecognized(String),
    #[error("interactive mode is not supported")]
    NoInteractive,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit status reported for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingValue(_) => 2,
            Self::Busy
            | Self::NotFound(_)
            | Self::Unrecognized(_)
            | Self::NoInteractive
            | Self::Io(_) => 1,
        }
    }
}
