use tally_core_types::RequestId;
use thiserror::Error;

/// Result type alias using TallyError
pub type Result<T> = std::result::Result<T, TallyError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, log assertions, and test expectations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input validation
    InvalidNumber,
    ArityMismatch,
    EmptyInput,

    // Lookup
    UnknownCommand,
    UnknownOperation,

    // Arithmetic
    DivisionByZero,

    // Command boundary
    CommandFailed,

    // Integration/IO
    Io,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidNumber => "ERR_INVALID_NUMBER",
            ExErrorKind::ArityMismatch => "ERR_ARITY_MISMATCH",
            ExErrorKind::EmptyInput => "ERR_EMPTY_INPUT",
            ExErrorKind::UnknownCommand => "ERR_UNKNOWN_COMMAND",
            ExErrorKind::UnknownOperation => "ERR_UNKNOWN_OPERATION",
            ExErrorKind::DivisionByZero => "ERR_DIVISION_BY_ZERO",
            ExErrorKind::CommandFailed => "ERR_COMMAND_FAILED",
            ExErrorKind::Io => "ERR_IO",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for structured logging alongside the
/// human-readable message.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    command: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            command: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add command name context
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Add the id of the dispatched line that failed
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(command) = &self.command {
            write!(f, " (command: {})", command)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for calculator operations and command dispatch
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TallyError {
    /// Second operand of a division is exactly zero
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// Token does not satisfy the decimal number syntax
    #[error("Invalid number: {token}")]
    InvalidNumber { token: String },

    /// Operation word is not one of add/subtract/multiply/divide
    #[error("Unknown operation: {word}")]
    UnknownOperation { word: String },

    /// Wrong number of argument tokens for a command
    #[error("'{command}' command requires exactly {expected} arguments, got {actual}")]
    ArityMismatch {
        command: String,
        expected: usize,
        actual: usize,
    },

    /// Dispatcher received a blank line
    #[error("No command entered")]
    EmptyInput,

    /// Dispatcher lookup miss
    #[error("No such command: {name}")]
    UnknownCommand { name: String },

    /// Failure raised by a command that it did not render itself
    #[error("{message}")]
    CommandFailed { message: String },

    /// Writing command output failed
    #[error("I/O error: {message}")]
    Io { message: String },
}

impl TallyError {
    /// Convenience constructor for command-level failures
    pub fn command_failed(message: impl Into<String>) -> Self {
        TallyError::CommandFailed {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for TallyError {
    fn from(err: std::io::Error) -> Self {
        TallyError::Io {
            message: err.to_string(),
        }
    }
}

/// Conversion from TallyError to the structured ExError used in logs
impl From<TallyError> for ExError {
    fn from(err: TallyError) -> Self {
        let message = err.to_string();
        match err {
            TallyError::DivisionByZero => ExError::new(ExErrorKind::DivisionByZero)
                .with_op("divide")
                .with_message(message),
            TallyError::InvalidNumber { .. } => {
                ExError::new(ExErrorKind::InvalidNumber).with_message(message)
            }
            TallyError::UnknownOperation { .. } => {
                ExError::new(ExErrorKind::UnknownOperation).with_message(message)
            }
            TallyError::ArityMismatch { command, .. } => ExError::new(ExErrorKind::ArityMismatch)
                .with_command(command)
                .with_message(message),
            TallyError::EmptyInput => ExError::new(ExErrorKind::EmptyInput).with_message(message),
            TallyError::UnknownCommand { name } => ExError::new(ExErrorKind::UnknownCommand)
                .with_command(name)
                .with_message(message),
            TallyError::CommandFailed { .. } => {
                ExError::new(ExErrorKind::CommandFailed).with_message(message)
            }
            TallyError::Io { .. } => ExError::new(ExErrorKind::Io).with_message(message),
        }
    }
}
