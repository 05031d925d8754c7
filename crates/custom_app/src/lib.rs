//! Consumer application that overrides the starter's default greeting.
//!
//! # Responsibility
//! - Register `CustomHelloService` explicitly, ahead of auto-configuration.
//! - Compose the application the binary entry point runs.

pub mod custom_hello;

pub use custom_hello::{CustomHelloService, CUSTOM_GREETING, CUSTOM_HELLO_COMPONENT};

use hello_starter::{
    Application, ConsoleSink, GreetingSink, HelloRunner, HelloService, StarterConfig,
};
use std::sync::Arc;

/// Builds the consumer application writing greetings to stdout.
pub fn application(config: StarterConfig) -> Application {
    application_with_sink(config, Arc::new(ConsoleSink))
}

/// Builds the consumer application with an explicit greeting sink.
pub fn application_with_sink(config: StarterConfig, sink: Arc<dyn GreetingSink>) -> Application {
    Application::new(config)
        .with_components(move |registry| {
            registry.register::<dyn HelloService>(
                CUSTOM_HELLO_COMPONENT,
                Arc::new(CustomHelloService::new(sink)),
            )
        })
        .with_default_auto_configurations()
        .with_runner(Box::new(HelloRunner::new()))
}
