//! Browser utility helpers: persisted credential slot and color theme.

pub mod credentials;
pub mod theme;
