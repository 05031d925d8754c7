//! Auto-configuration for the fallback `HelloService`.

use crate::autoconfigure::{AutoConfiguration, Condition};
use crate::config::HelloConfig;
use crate::context::registry::ComponentRegistry;
use crate::error::StarterResult;
use crate::service::default_hello::DefaultHelloService;
use crate::service::hello_service::{ConsoleSink, GreetingSink, HelloService};
use std::sync::Arc;

/// Name used for reports and `autoconfigure.exclude`.
pub const HELLO_SERVICE_AUTO_CONFIGURATION: &str = "hello_service";
/// Capability id backed by the `hello-service` cargo feature.
pub const HELLO_SERVICE_CAPABILITY: &str = "hello-service";
/// Component name given to the fallback provider.
pub const DEFAULT_HELLO_COMPONENT: &str = "helloService";

/// Registers `DefaultHelloService` when the capability is built in and no
/// `HelloService` is registered yet.
pub struct HelloServiceAutoConfiguration {
    greeting: String,
    sink: Arc<dyn GreetingSink>,
    capability_present: bool,
}

impl HelloServiceAutoConfiguration {
    pub fn from_config(config: &HelloConfig) -> Self {
        Self::with_sink(config, Arc::new(ConsoleSink))
    }

    pub fn with_sink(config: &HelloConfig, sink: Arc<dyn GreetingSink>) -> Self {
        Self {
            greeting: config.default_greeting.clone(),
            sink,
            capability_present: cfg!(feature = "hello-service"),
        }
    }

    /// Overrides build-time capability detection.
    pub fn with_capability_present(mut self, present: bool) -> Self {
        self.capability_present = present;
        self
    }
}

impl AutoConfiguration for HelloServiceAutoConfiguration {
    fn name(&self) -> &'static str {
        HELLO_SERVICE_AUTO_CONFIGURATION
    }

    fn conditions(&self, registry: &ComponentRegistry) -> Vec<Condition> {
        vec![
            Condition::on_capability(HELLO_SERVICE_CAPABILITY, self.capability_present),
            Condition::on_missing_component::<dyn HelloService>(registry),
        ]
    }

    fn configure(&self, registry: &mut ComponentRegistry) -> StarterResult<()> {
        let greeting = self.greeting.clone();
        let sink = Arc::clone(&self.sink);
        registry.register_if_missing::<dyn HelloService, _>(DEFAULT_HELLO_COMPONENT, move || {
            Arc::new(DefaultHelloService::with_sink(greeting, sink))
        })?;
        Ok(())
    }
}
