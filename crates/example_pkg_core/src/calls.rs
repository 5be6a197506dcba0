//! Native call handlers exported by the `_core` module.
//!
//! # Responsibility
//! - Decode host arguments, run the native behavior, encode the result.
//! - Keep each handler stateless; all context arrives as parameters.
//!
//! # Invariants
//! - `echo` writes exactly `message + "\n"` and returns `ECHO_RESULT`.
//! - `example_sum` delegates arithmetic to the shared library unchanged.
//! - Echoed text is never written to logs, only its length.

use crate::args::parse_args;
use crate::error::CallResult;
use crate::value::Value;
use log::debug;
use std::io::Write;

/// Constant returned by every successful `echo` call.
pub const ECHO_RESULT: i64 = 42;

pub(crate) const ECHO_NAME: &str = "echo";
pub(crate) const SUM_NAME: &str = "example_sum";

/// Module-table handler for `echo(message: str) -> int`.
pub(crate) fn echo_handler(out: &mut dyn Write, args: &[Value]) -> CallResult<Value> {
    let (message,): (String,) = parse_args(ECHO_NAME, args)?;
    let result = echo_to(out, &message)?;
    Ok(Value::Int(result))
}

/// Module-table handler for `example_sum(a: int, b: int) -> int`.
pub(crate) fn sum_handler(_out: &mut dyn Write, args: &[Value]) -> CallResult<Value> {
    let (a, b): (i32, i32) = parse_args(SUM_NAME, args)?;
    Ok(Value::Int(example_sum(a, b)))
}

/// Writes `message` and a newline to `out`, flushes, and returns 42.
///
/// # Errors
/// - Returns an I/O error when the sink rejects the write or flush.
pub fn echo_to(out: &mut dyn Write, message: &str) -> std::io::Result<i64> {
    out.write_all(message.as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()?;
    debug!(
        "event=echo module=bridge status=ok message_len={}",
        message.len()
    );
    Ok(ECHO_RESULT)
}

/// Prints `message` to standard output and returns 42.
pub fn echo(message: &str) -> std::io::Result<i64> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    echo_to(&mut handle, message)
}

/// Sums two C-width integers through the shared library and widens the result.
pub fn example_sum(a: i32, b: i32) -> i64 {
    i64::from(example_pkg_shlib::sum(a, b))
}
