//! Reusable view components: layout chrome, navigation, and decorative
//! pieces. Page-specific sub-components live inside their page modules.

pub mod auth_layout;
pub mod dashboard_layout;
pub mod header;
pub mod logo;
pub mod rainfall;
pub mod sidebar;
pub mod spinner;
