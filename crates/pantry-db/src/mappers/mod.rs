//! Entity <-> model mappers
//!
//! Models with enum-valued text columns convert via `TryFrom`, rejecting
//! values the write paths would never have accepted.

mod activity;
mod distribution;
mod donation;
mod inventory;
mod user;
