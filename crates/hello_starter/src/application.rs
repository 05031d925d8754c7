//! Application bootstrap sequence.
//!
//! # Responsibility
//! - Apply application registrations before any auto-configuration.
//! - Freeze the registry into an `ApplicationContext`.
//! - Invoke each runner once, in registration order.
//!
//! # Invariants
//! - Auto-configurations observe every application registration.
//! - Runners never observe a partially populated registry.

use crate::autoconfigure::{
    apply_auto_configurations, default_auto_configurations, AutoConfiguration,
    ConditionEvaluationReport,
};
use crate::config::StarterConfig;
use crate::context::registry::ComponentRegistry;
use crate::context::ApplicationContext;
use crate::error::StarterResult;
use crate::runner::CommandLineRunner;
use log::{error, info};
use std::time::Instant;

type ComponentInitializer = Box<dyn FnOnce(&mut ComponentRegistry) -> StarterResult<()>>;

/// Builder and runner for one application startup.
pub struct Application {
    config: StarterConfig,
    initializers: Vec<ComponentInitializer>,
    auto_configurations: Vec<Box<dyn AutoConfiguration>>,
    runners: Vec<Box<dyn CommandLineRunner>>,
}

impl Application {
    pub fn new(config: StarterConfig) -> Self {
        Self {
            config,
            initializers: Vec::new(),
            auto_configurations: Vec::new(),
            runners: Vec::new(),
        }
    }

    pub fn config(&self) -> &StarterConfig {
        &self.config
    }

    /// Adds application-owned registrations; these run before auto-configuration.
    pub fn with_components<F>(mut self, initializer: F) -> Self
    where
        F: FnOnce(&mut ComponentRegistry) -> StarterResult<()> + 'static,
    {
        self.initializers.push(Box::new(initializer));
        self
    }

    pub fn with_auto_configuration(mut self, auto_configuration: Box<dyn AutoConfiguration>) -> Self {
        self.auto_configurations.push(auto_configuration);
        self
    }

    /// Appends the starter's built-in auto-configurations.
    pub fn with_default_auto_configurations(mut self) -> Self {
        let defaults = default_auto_configurations(&self.config);
        self.auto_configurations.extend(defaults);
        self
    }

    pub fn with_runner(mut self, runner: Box<dyn CommandLineRunner>) -> Self {
        self.runners.push(runner);
        self
    }

    /// Runs the full startup sequence and returns the populated context.
    pub fn run(self, args: &[String]) -> StarterResult<ApplicationContext> {
        let started_at = Instant::now();
        let Self {
            config,
            initializers,
            auto_configurations,
            mut runners,
        } = self;

        let mut registry = ComponentRegistry::new();
        let context_id = registry.context_id();
        info!(
            "event=app_start module=application status=start context_id={} initializers={} auto_configurations={} runners={}",
            context_id,
            initializers.len(),
            auto_configurations.len(),
            runners.len()
        );

        let context = match populate(&mut registry, initializers, &auto_configurations, &config) {
            Ok(report) => ApplicationContext::new(registry, report),
            Err(err) => {
                error!(
                    "event=app_start module=application status=error context_id={} phase=registration error={}",
                    context_id, err
                );
                return Err(err);
            }
        };

        for runner in runners.iter_mut() {
            if let Err(err) = runner.run(&context, args) {
                error!(
                    "event=runner_run module=application status=error context_id={} runner={} error={}",
                    context_id,
                    runner.name(),
                    err
                );
                return Err(err);
            }
            info!(
                "event=runner_run module=application status=ok context_id={} runner={}",
                context_id,
                runner.name()
            );
        }

        info!(
            "event=app_start module=application status=ok context_id={} components={} duration_ms={}",
            context_id,
            context.components().len(),
            started_at.elapsed().as_millis()
        );
        Ok(context)
    }
}

fn populate(
    registry: &mut ComponentRegistry,
    initializers: Vec<ComponentInitializer>,
    auto_configurations: &[Box<dyn AutoConfiguration>],
    config: &StarterConfig,
) -> StarterResult<ConditionEvaluationReport> {
    for initializer in initializers {
        initializer(registry)?;
    }
    apply_auto_configurations(registry, auto_configurations, config)
}

#[cfg(test)]
mod tests {
    use super::Application;
    use crate::config::StarterConfig;
    use crate::error::StarterError;
    use crate::runner::HelloRunner;
    use crate::service::hello_service::HelloService;
    use std::sync::Arc;

    struct Quiet;

    impl HelloService for Quiet {
        fn say_hello(&self) {}
    }

    #[test]
    fn application_components_precede_auto_configuration() {
        let context = Application::new(StarterConfig::default())
            .with_components(|registry| {
                registry.register::<dyn HelloService>("quietHello", Arc::new(Quiet))
            })
            .with_default_auto_configurations()
            .run(&[])
            .expect("startup");

        assert_eq!(context.components().len(), 1);
        assert_eq!(
            context.describe::<dyn HelloService>().expect("descriptor").name,
            "quietHello"
        );
        assert!(context.condition_report().applied().is_empty());
    }

    #[test]
    fn registration_failure_aborts_before_runners() {
        let result = Application::new(StarterConfig::default())
            .with_components(|registry| {
                registry.register::<dyn HelloService>("firstHello", Arc::new(Quiet))?;
                registry.register::<dyn HelloService>("secondHello", Arc::new(Quiet))
            })
            .with_runner(Box::new(HelloRunner::new()))
            .run(&[]);

        assert!(matches!(
            result.err(),
            Some(StarterError::DuplicateRegistration { .. })
        ));
    }

    #[test]
    fn runner_without_provider_fails_startup() {
        let result = Application::new(StarterConfig::default())
            .with_runner(Box::new(HelloRunner::new()))
            .run(&[]);

        assert!(matches!(result.err(), Some(StarterError::Resolution { .. })));
    }
}
