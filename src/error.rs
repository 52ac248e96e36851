// MIT/Apache2 License

use std::fmt;

/// Sum error type for chalkline operations.
#[derive(Debug)]
pub enum Error {
    /// An argument was rejected before any drawing took place.
    InvalidArgument {
        /// The name of the offending argument.
        argument: &'static str,
        /// Why it was rejected.
        reason: &'static str,
    },
    /// The operation was canceled, and the caller asked for cancellation to be reported as an error.
    Canceled,
    /// Something unexpected went wrong inside the rendering pipeline.
    OperationFault(String),
    /// The target surface refused to hand out its pixels.
    Surface(String),
}

impl Error {
    /// Create a new invalid argument error.
    #[inline]
    pub fn invalid(argument: &'static str, reason: &'static str) -> Self {
        Self::InvalidArgument { argument, reason }
    }

    /// Create a new operation fault from an error-like type.
    #[inline]
    pub fn fault(f: impl fmt::Display) -> Self {
        Self::OperationFault(f.to_string())
    }

    /// Is this error a cancellation?
    #[inline]
    pub fn is_canceled(&self) -> bool {
        matches!(self, Self::Canceled)
    }

    /// Is this error the result of a rejected argument?
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { argument, reason } => {
                write!(f, "Invalid argument \"{}\": {}", argument, reason)
            }
            Self::Canceled => f.write_str("The operation was canceled"),
            Self::OperationFault(msg) => write!(f, "Drawing operation failed: {}", msg),
            Self::Surface(msg) => write!(f, "Surface rejected the operation: {}", msg),
        }
    }
}

/// Convenience result type.
pub type Result<T = ()> = std::result::Result<T, Error>;
