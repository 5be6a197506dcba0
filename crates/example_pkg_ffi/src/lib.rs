//! Host-facing bindings for the `example_pkg._core` module.

pub mod api;
