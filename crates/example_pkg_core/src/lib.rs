//! Native call bridge for the `example_pkg._core` extension module.
//! Host-facing crates go through this crate for argument decoding and dispatch.

pub mod args;
pub mod calls;
pub mod error;
pub mod logging;
pub mod module;
pub mod value;

pub use args::{parse_args, ArgumentDecodeError, FromArgs, FromValue};
pub use calls::{echo, echo_to, example_sum, ECHO_RESULT};
pub use error::{CallError, CallResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use module::{module, FunctionDef, Handler, Module, MODULE_NAME, PACKAGE_NAME};
pub use value::Value;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
