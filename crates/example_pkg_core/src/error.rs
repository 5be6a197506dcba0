//! Call-level error type returned by the module table.

use crate::args::ArgumentDecodeError;
use crate::module::MODULE_NAME;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CallResult<T> = Result<T, CallError>;

/// Failure of one bridged call.
#[derive(Debug)]
pub enum CallError {
    /// Arguments did not match the callee's arity/type contract.
    Decode(ArgumentDecodeError),
    /// No function with this name is exported by the module.
    UnknownFunction(String),
    /// Writing call output to the sink failed.
    Output(std::io::Error),
}

impl CallError {
    /// Stable machine-readable code for host-facing envelopes.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Decode(_) => "argument_decode",
            Self::UnknownFunction(_) => "unknown_function",
            Self::Output(_) => "output_failed",
        }
    }
}

impl Display for CallError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decode(err) => write!(f, "{err}"),
            Self::UnknownFunction(name) => {
                write!(f, "module `{}` has no function `{name}`", MODULE_NAME)
            }
            Self::Output(err) => write!(f, "failed to write call output: {err}"),
        }
    }
}

impl Error for CallError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Decode(err) => Some(err),
            Self::UnknownFunction(_) => None,
            Self::Output(err) => Some(err),
        }
    }
}

impl From<ArgumentDecodeError> for CallError {
    fn from(value: ArgumentDecodeError) -> Self {
        Self::Decode(value)
    }
}

impl From<std::io::Error> for CallError {
    fn from(value: std::io::Error) -> Self {
        Self::Output(value)
    }
}
