//! Startup runners invoked once the application context is populated.
//!
//! # Invariants
//! - Runners execute after every registration phase has finished.
//! - `HelloRunner` calls `say_hello` at most once per instance.

use crate::context::ApplicationContext;
use crate::error::{StarterError, StarterResult};
use crate::service::hello_service::HelloService;
use log::info;

/// Hook executed once after startup registration completes.
pub trait CommandLineRunner {
    fn name(&self) -> &'static str;

    fn run(&mut self, context: &ApplicationContext, args: &[String]) -> StarterResult<()>;
}

/// Lifecycle of a [`HelloRunner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvokerState {
    Unstarted,
    Resolved,
    Done,
}

/// Resolves the active `HelloService` and greets exactly once.
#[derive(Debug)]
pub struct HelloRunner {
    state: InvokerState,
}

impl HelloRunner {
    pub const NAME: &'static str = "hello_runner";

    pub fn new() -> Self {
        Self {
            state: InvokerState::Unstarted,
        }
    }

    pub fn state(&self) -> InvokerState {
        self.state
    }
}

impl Default for HelloRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandLineRunner for HelloRunner {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    /// # Errors
    /// - `Resolution` when no `HelloService` is registered.
    /// - `RunnerAlreadyCompleted` on a second call.
    fn run(&mut self, context: &ApplicationContext, _args: &[String]) -> StarterResult<()> {
        if self.state == InvokerState::Done {
            return Err(StarterError::RunnerAlreadyCompleted(Self::NAME));
        }

        let service = context.resolve::<dyn HelloService>()?;
        self.state = InvokerState::Resolved;
        if let Some(descriptor) = context.describe::<dyn HelloService>() {
            info!(
                "event=runner_resolved module=runner status=ok context_id={} component={} source={:?}",
                context.id(),
                descriptor.name,
                descriptor.source
            );
        }

        service.say_hello();
        self.state = InvokerState::Done;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{CommandLineRunner, HelloRunner, InvokerState};
    use crate::autoconfigure::ConditionEvaluationReport;
    use crate::context::registry::ComponentRegistry;
    use crate::context::ApplicationContext;
    use crate::error::StarterError;
    use crate::service::hello_service::HelloService;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Default)]
    struct CountingHello {
        calls: AtomicUsize,
    }

    impl HelloService for CountingHello {
        fn say_hello(&self) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn context_with(service: Option<Arc<CountingHello>>) -> ApplicationContext {
        let mut registry = ComponentRegistry::new();
        if let Some(service) = service {
            registry
                .register::<dyn HelloService>("countingHello", service)
                .expect("registration");
        }
        ApplicationContext::new(registry, ConditionEvaluationReport::default())
    }

    #[test]
    fn runs_through_states_and_greets_once() {
        let service = Arc::new(CountingHello::default());
        let context = context_with(Some(service.clone()));
        let mut runner = HelloRunner::new();
        assert_eq!(runner.state(), InvokerState::Unstarted);

        runner.run(&context, &[]).expect("first run");
        assert_eq!(runner.state(), InvokerState::Done);
        assert_eq!(service.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn second_run_is_rejected_without_greeting() {
        let service = Arc::new(CountingHello::default());
        let context = context_with(Some(service.clone()));
        let mut runner = HelloRunner::new();
        runner.run(&context, &[]).expect("first run");

        let err = runner.run(&context, &[]).expect_err("second run must fail");
        assert_eq!(err, StarterError::RunnerAlreadyCompleted(HelloRunner::NAME));
        assert_eq!(service.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn empty_context_fails_with_resolution_error() {
        let context = context_with(None);
        let mut runner = HelloRunner::new();

        let err = runner.run(&context, &[]).expect_err("resolution must fail");
        assert!(matches!(err, StarterError::Resolution { .. }));
        assert_eq!(runner.state(), InvokerState::Unstarted);
    }
}
