//! Hello starter: a `HelloService` capability with a conditional default.
//!
//! Applications register their own components first; the starter's
//! auto-configuration then fills in a default `HelloService` only when the
//! capability is built in and nothing else claimed it.

pub mod application;
pub mod autoconfigure;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod runner;
pub mod service;

pub use application::Application;
pub use autoconfigure::hello::{
    HelloServiceAutoConfiguration, DEFAULT_HELLO_COMPONENT, HELLO_SERVICE_AUTO_CONFIGURATION,
    HELLO_SERVICE_CAPABILITY,
};
pub use autoconfigure::{
    AutoConfiguration, AutoConfigurationReport, AutoConfigurationStatus, Condition,
    ConditionEvaluationReport, ConditionOutcome,
};
pub use config::{StarterConfig, CONFIG_PATH_ENV, DEFAULT_GREETING};
pub use context::registry::{ComponentDescriptor, ComponentRegistry, RegistrationSource};
pub use context::ApplicationContext;
pub use error::{StarterError, StarterResult};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget};
pub use runner::{CommandLineRunner, HelloRunner, InvokerState};
pub use service::default_hello::DefaultHelloService;
pub use service::hello_service::{ConsoleSink, GreetingSink, HelloService};

/// Returns the starter crate version.
pub fn starter_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
