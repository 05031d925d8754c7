//! Fallback `HelloService` shipped with the starter.

use crate::config::DEFAULT_GREETING;
use crate::service::hello_service::{ConsoleSink, GreetingSink, HelloService};
use log::debug;
use std::sync::Arc;

/// Default greeting provider, registered only when nothing else is.
pub struct DefaultHelloService {
    greeting: String,
    sink: Arc<dyn GreetingSink>,
}

impl DefaultHelloService {
    /// Creates the provider with the stock greeting on stdout.
    pub fn new() -> Self {
        Self::with_sink(DEFAULT_GREETING, Arc::new(ConsoleSink))
    }

    pub fn with_sink(greeting: impl Into<String>, sink: Arc<dyn GreetingSink>) -> Self {
        Self {
            greeting: greeting.into(),
            sink,
        }
    }

    pub fn greeting(&self) -> &str {
        &self.greeting
    }
}

impl Default for DefaultHelloService {
    fn default() -> Self {
        Self::new()
    }
}

impl HelloService for DefaultHelloService {
    fn say_hello(&self) {
        debug!("event=say_hello module=service status=start provider=default");
        self.sink.emit(&self.greeting);
    }
}

#[cfg(test)]
mod tests {
    use super::DefaultHelloService;
    use crate::config::DEFAULT_GREETING;
    use crate::service::hello_service::{GreetingSink, HelloService};
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingSink {
        lines: Mutex<Vec<String>>,
    }

    impl GreetingSink for RecordingSink {
        fn emit(&self, message: &str) {
            self.lines
                .lock()
                .expect("sink lock")
                .push(message.to_string());
        }
    }

    #[test]
    fn stock_provider_uses_default_greeting() {
        assert_eq!(DefaultHelloService::new().greeting(), DEFAULT_GREETING);
    }

    #[test]
    fn say_hello_emits_one_line_per_call() {
        let sink = Arc::new(RecordingSink::default());
        let service = DefaultHelloService::with_sink("Hello from Default", sink.clone());

        service.say_hello();
        assert_eq!(
            *sink.lines.lock().expect("sink lock"),
            vec!["Hello from Default".to_string()]
        );

        service.say_hello();
        assert_eq!(sink.lines.lock().expect("sink lock").len(), 2);
    }
}
