//! Domain logic shared by every EGOT tracker crate.
//!
//! Nothing in here touches the network or the database, so the store,
//! the wiki clients and the batch tooling can all depend on it.

pub mod award;
pub mod ceremony;
pub mod egot;
pub mod error;
pub mod naming;
pub mod records;
pub mod types;
