//! HTTP handlers

pub mod health;
pub mod members;
pub mod pages;

pub use health::health;
