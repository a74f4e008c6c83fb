//! Business logic services

pub mod member_directory;

pub use member_directory::{DirectoryError, DirectoryResult, MemberDirectory};
