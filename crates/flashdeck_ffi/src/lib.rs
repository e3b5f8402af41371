//! Host-facing bindings over `flashdeck_core`.

pub mod api;
