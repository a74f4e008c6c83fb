//! Gym Types - Pure type definitions for the member directory
//!
//! This crate contains only plain data types and form conversions, with no
//! async runtime or database dependencies.

pub mod form;
pub mod member;

pub use form::*;
pub use member::*;
