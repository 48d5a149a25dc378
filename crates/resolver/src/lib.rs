//! Cache-aside celebrity resolution.
//!
//! [`CelebrityService`] serves lookups from the local store and, on a miss,
//! resolves the name through a [`CelebritySource`] and writes the result
//! back before returning it.

pub mod config;
pub mod error;
pub mod service;
pub mod source;

pub use config::ResolverConfig;
pub use error::ResolveError;
pub use service::CelebrityService;
pub use source::CelebritySource;
