//! # Providers
//!
//! Backends the generator talks to, and the factory that builds them from
//! configuration.

pub mod ai;
pub mod factory;
