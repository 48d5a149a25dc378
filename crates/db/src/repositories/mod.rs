//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod award_repo;
pub mod celebrity_repo;
pub mod oscar_repo;

pub use award_repo::AwardRepo;
pub use celebrity_repo::CelebrityRepo;
pub use oscar_repo::OscarRepo;
