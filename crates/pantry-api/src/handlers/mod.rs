//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod dashboard;
pub mod distributions;
pub mod donations;
pub mod health;
pub mod inventory;
pub mod users;
