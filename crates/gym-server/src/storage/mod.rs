//! Storage layer
//!
//! Uses SQLite (embedded) through a sqlx connection pool.

pub mod db;
pub mod members;

pub use db::Database;
