//! Session token authentication

mod session;

pub use session::{Claims, SessionService};
