//! Network layer: backend REST helpers, the identity-provider client,
//! and the session coordinator bridging the two.

pub mod api;
pub mod provider;
pub mod session;
pub mod types;
