//! `HelloService` capability contract.
//!
//! # Invariants
//! - `say_hello` emits exactly one greeting per call.
//! - Implementations are stateless from the caller's point of view.

use log::info;

/// Capability: produce a greeting.
///
/// No input, no return value. The only observable effect is one message
/// written to the implementation's [`GreetingSink`].
pub trait HelloService: Send + Sync {
    fn say_hello(&self);
}

/// Destination for emitted greetings.
pub trait GreetingSink: Send + Sync {
    fn emit(&self, message: &str);
}

/// Writes each greeting as one line on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsoleSink;

impl GreetingSink for ConsoleSink {
    fn emit(&self, message: &str) {
        println!("{message}");
        info!(
            "event=greeting_emitted module=service status=ok sink=console chars={}",
            message.chars().count()
        );
    }
}
