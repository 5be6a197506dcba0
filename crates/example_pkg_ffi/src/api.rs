//! FFI use-case API for host-runtime calls into `_core`.
//!
//! # Responsibility
//! - Expose the module's exported functions to the host via FRB.
//! - Translate host arguments into core values and results into envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Failures are reported in the envelope, never thrown.
//! - Every call goes through the core module table, typed or dynamic.

use example_pkg_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, module, CallError,
    Value,
};
use log::debug;

/// Host-shaped positional argument for dynamic calls.
#[derive(Debug, Clone, PartialEq)]
pub enum CallArg {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Bytes(Vec<u8>),
}

impl From<CallArg> for Value {
    fn from(value: CallArg) -> Self {
        match value {
            CallArg::None => Value::None,
            CallArg::Bool(flag) => Value::Bool(flag),
            CallArg::Int(number) => Value::Int(number),
            CallArg::Float(number) => Value::Float(number),
            CallArg::Str(text) => Value::Str(text),
            CallArg::Bytes(bytes) => Value::Bytes(bytes),
        }
    }
}

/// Result envelope for one bridged call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallResponse {
    /// Whether the call succeeded.
    pub ok: bool,
    /// Integer result on success.
    pub value: Option<i64>,
    /// Stable error code (`argument_decode|unknown_function|output_failed|unsupported_result`).
    pub error_code: Option<String>,
    /// Human-readable message for diagnostics.
    pub message: String,
}

impl CallResponse {
    fn success(value: i64) -> Self {
        Self {
            ok: true,
            value: Some(value),
            error_code: None,
            message: String::new(),
        }
    }

    fn failure(code: &str, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            value: None,
            error_code: Some(code.to_string()),
            message: message.into(),
        }
    }
}

impl From<Result<Value, CallError>> for CallResponse {
    fn from(result: Result<Value, CallError>) -> Self {
        match result {
            Ok(Value::Int(value)) => Self::success(value),
            Ok(other) => Self::failure(
                "unsupported_result",
                format!("call returned non-integer `{}`", other.type_name()),
            ),
            Err(err) => Self::failure(err.code(), err.to_string()),
        }
    }
}

/// Prints `message` on the host's stdout and returns 42.
///
/// # FFI contract
/// - Sync call; one unbuffered write to stdout.
/// - Never panics; write failures return `output_failed`.
#[flutter_rust_bridge::frb(sync)]
pub fn echo(message: String) -> CallResponse {
    invoke("echo", vec![Value::Str(message)])
}

/// Sums two integers at C `int` width.
///
/// Host integers are 64-bit; values outside the C `int` range are rejected
/// with `argument_decode`.
///
/// # FFI contract
/// - Sync call, non-blocking, no side effects.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn example_sum(a: i64, b: i64) -> CallResponse {
    invoke("example_sum", vec![Value::Int(a), Value::Int(b)])
}

/// Calls any exported function by name with host-shaped arguments.
///
/// # FFI contract
/// - Sync call.
/// - Unknown names return `unknown_function`; bad arguments return
///   `argument_decode`.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn call(name: String, args: Vec<CallArg>) -> CallResponse {
    let args = args.into_iter().map(Value::from).collect::<Vec<_>>();
    invoke(name.as_str(), args)
}

/// Names exported by the module, in registration order.
#[flutter_rust_bridge::frb(sync)]
pub fn exported_functions() -> Vec<String> {
    module()
        .function_names()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// One-line doc for an exported function, or `None` when unknown.
#[flutter_rust_bridge::frb(sync)]
pub fn describe_function(name: String) -> Option<String> {
    module()
        .function(name.as_str())
        .map(|def| def.doc.to_string())
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may create the log directory.
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

fn invoke(name: &str, args: Vec<Value>) -> CallResponse {
    debug!(
        "event=ffi_call module=ffi status=start function={} argc={}",
        name,
        args.len()
    );
    module().call(name, &args).into()
}
