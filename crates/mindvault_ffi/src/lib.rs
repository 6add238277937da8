//! Flutter-facing bindings for MindVault core.

pub mod api;
