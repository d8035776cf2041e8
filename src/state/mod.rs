//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `billing`, `gate`) so individual
//! components can depend on small focused models. The modules here are
//! free of browser dependencies and fully testable on the host target;
//! the async/network wiring lives under `net`.

pub mod auth;
pub mod billing;
pub mod gate;
