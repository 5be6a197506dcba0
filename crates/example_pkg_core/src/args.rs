//! Argument decoding from host values into native parameter tuples.
//!
//! # Responsibility
//! - Check call arity before any per-argument conversion.
//! - Convert each positional `Value` into the native parameter type.
//!
//! # Invariants
//! - Decoding never mutates or retains the caller's values.
//! - The first failing argument (left to right) determines the error.
//! - Positions in errors are 1-based, as the host reports them.

use crate::value::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure raised when call arguments do not satisfy a function's signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentDecodeError {
    Arity {
        function: &'static str,
        expected: usize,
        given: usize,
    },
    Type {
        function: &'static str,
        position: usize,
        expected: &'static str,
        found: &'static str,
    },
    OutOfRange {
        function: &'static str,
        position: usize,
        value: i64,
    },
    EmbeddedNul {
        function: &'static str,
        position: usize,
    },
}

impl ArgumentDecodeError {
    /// Name of the function whose arguments failed to decode.
    pub fn function(&self) -> &'static str {
        match self {
            Self::Arity { function, .. }
            | Self::Type { function, .. }
            | Self::OutOfRange { function, .. }
            | Self::EmbeddedNul { function, .. } => *function,
        }
    }
}

impl Display for ArgumentDecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arity {
                function,
                expected,
                given,
            } => {
                let noun = if *expected == 1 { "argument" } else { "arguments" };
                write!(
                    f,
                    "{function}() takes exactly {expected} {noun} ({given} given)"
                )
            }
            Self::Type {
                function,
                position,
                expected,
                found,
            } => write!(
                f,
                "{function}() argument {position} must be {expected}, not {found}"
            ),
            Self::OutOfRange {
                function,
                position,
                value,
            } => write!(
                f,
                "{function}() argument {position} out of range for C int: {value}"
            ),
            Self::EmbeddedNul { function, position } => write!(
                f,
                "{function}() argument {position} contains an embedded null character"
            ),
        }
    }
}

impl Error for ArgumentDecodeError {}

/// Conversion from one positional host value into a native parameter.
pub trait FromValue: Sized {
    /// Host type name expected by this parameter.
    const EXPECTED: &'static str;

    fn from_value(
        function: &'static str,
        position: usize,
        value: &Value,
    ) -> Result<Self, ArgumentDecodeError>;
}

impl FromValue for String {
    const EXPECTED: &'static str = "str";

    fn from_value(
        function: &'static str,
        position: usize,
        value: &Value,
    ) -> Result<Self, ArgumentDecodeError> {
        match value {
            Value::Str(text) if text.contains('\0') => {
                Err(ArgumentDecodeError::EmbeddedNul { function, position })
            }
            Value::Str(text) => Ok(text.clone()),
            other => Err(type_error::<Self>(function, position, other)),
        }
    }
}

impl FromValue for i32 {
    const EXPECTED: &'static str = "int";

    fn from_value(
        function: &'static str,
        position: usize,
        value: &Value,
    ) -> Result<Self, ArgumentDecodeError> {
        match value {
            Value::Int(raw) => i32::try_from(*raw).map_err(|_| ArgumentDecodeError::OutOfRange {
                function,
                position,
                value: *raw,
            }),
            Value::Bool(flag) => Ok(i32::from(*flag)),
            other => Err(type_error::<Self>(function, position, other)),
        }
    }
}

fn type_error<T: FromValue>(
    function: &'static str,
    position: usize,
    found: &Value,
) -> ArgumentDecodeError {
    ArgumentDecodeError::Type {
        function,
        position,
        expected: T::EXPECTED,
        found: found.type_name(),
    }
}

/// Fixed-arity decoding of a whole argument list.
pub trait FromArgs: Sized {
    const ARITY: usize;

    fn from_args(function: &'static str, args: &[Value]) -> Result<Self, ArgumentDecodeError>;
}

macro_rules! impl_from_args {
    ($arity:expr; $($ty:ident => $idx:tt),+) => {
        impl<$($ty: FromValue),+> FromArgs for ($($ty,)+) {
            const ARITY: usize = $arity;

            fn from_args(
                function: &'static str,
                args: &[Value],
            ) -> Result<Self, ArgumentDecodeError> {
                if args.len() != Self::ARITY {
                    return Err(ArgumentDecodeError::Arity {
                        function,
                        expected: Self::ARITY,
                        given: args.len(),
                    });
                }
                Ok(($($ty::from_value(function, $idx + 1, &args[$idx])?,)+))
            }
        }
    };
}

impl_from_args!(1; A => 0);
impl_from_args!(2; A => 0, B => 1);

/// Decodes `args` into the native tuple `T` for `function`.
pub fn parse_args<T: FromArgs>(
    function: &'static str,
    args: &[Value],
) -> Result<T, ArgumentDecodeError> {
    T::from_args(function, args)
}
