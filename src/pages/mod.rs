//! Page components, one per route.

pub mod billing;
pub mod callback;
pub mod dashboard;
pub mod forgot_password;
pub mod login;
pub mod reset_password;
pub mod signup;
pub mod verify_email;
