//! Static function table for the `_core` extension module.
//!
//! # Responsibility
//! - Map exported call names to native handlers and their docs.
//! - Dispatch one host call: lookup, decode, invoke, encode.
//!
//! # Invariants
//! - The table is built once per process and never mutated afterwards.
//! - Exported names keep registration order (`echo`, `example_sum`).
//! - Name lookup is exact and case-sensitive.

use crate::calls::{echo_handler, sum_handler, ECHO_NAME, SUM_NAME};
use crate::error::{CallError, CallResult};
use crate::value::Value;
use log::{debug, warn};
use once_cell::sync::Lazy;
use std::io::Write;

/// Host-visible module name.
pub const MODULE_NAME: &str = "_core";
/// Package the module is installed under.
pub const PACKAGE_NAME: &str = "example_pkg";

/// Signature shared by all native handlers.
pub type Handler = fn(&mut dyn Write, &[Value]) -> CallResult<Value>;

/// One exported function entry.
#[derive(Debug, Clone, Copy)]
pub struct FunctionDef {
    pub name: &'static str,
    pub doc: &'static str,
    pub handler: Handler,
}

/// Read-only module definition.
#[derive(Debug)]
pub struct Module {
    name: &'static str,
    version: &'static str,
    functions: Vec<FunctionDef>,
}

static MODULE: Lazy<Module> = Lazy::new(|| Module {
    name: MODULE_NAME,
    version: env!("CARGO_PKG_VERSION"),
    functions: vec![
        FunctionDef {
            name: ECHO_NAME,
            doc: "Echo a string and return 42",
            handler: echo_handler,
        },
        FunctionDef {
            name: SUM_NAME,
            doc: "Sum up two integers",
            handler: sum_handler,
        },
    ],
});

/// Returns the process-wide module table.
pub fn module() -> &'static Module {
    &MODULE
}

impl Module {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn version(&self) -> &'static str {
        self.version
    }

    /// Exported names in registration order.
    pub fn function_names(&self) -> Vec<&'static str> {
        self.functions.iter().map(|def| def.name).collect()
    }

    pub fn function(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.iter().find(|def| def.name == name)
    }

    /// Calls `name` with `args`, writing any output to process stdout.
    pub fn call(&self, name: &str, args: &[Value]) -> CallResult<Value> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        self.call_with_output(name, args, &mut handle)
    }

    /// Calls `name` with `args`, writing any output to `out`.
    ///
    /// # Errors
    /// - `UnknownFunction` when `name` is not exported.
    /// - `Decode` when `args` do not match the function signature.
    /// - `Output` when writing to `out` fails.
    pub fn call_with_output(
        &self,
        name: &str,
        args: &[Value],
        out: &mut dyn Write,
    ) -> CallResult<Value> {
        let Some(def) = self.function(name) else {
            warn!(
                "event=call module=bridge status=error error_code=unknown_function function={}",
                name
            );
            return Err(CallError::UnknownFunction(name.to_string()));
        };

        match (def.handler)(out, args) {
            Ok(value) => {
                debug!(
                    "event=call module=bridge status=ok function={} argc={}",
                    def.name,
                    args.len()
                );
                Ok(value)
            }
            Err(err) => {
                warn!(
                    "event=call module=bridge status=error error_code={} function={} argc={} error={}",
                    err.code(),
                    def.name,
                    args.len(),
                    err
                );
                Err(err)
            }
        }
    }
}
