use std::fmt;

pub const SUCCESS: i32 = 0;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
#[allow(dead_code)]
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// A malformed or unusable command-line argument.
pub fn usage(message: impl Into<String>) -> CliError {
    CliError::new(USAGE, message)
}

/// Input bytes that do not form a valid frame.
pub fn data_invalid(message: impl Into<String>) -> CliError {
    CliError::new(DATA_INVALID, message)
}
