//! Greeting capability and its default provider.
//!
//! # Responsibility
//! - Define the `HelloService` capability consumed by startup runners.
//! - Provide the fallback implementation used when no consumer override exists.

pub mod default_hello;
pub mod hello_service;
