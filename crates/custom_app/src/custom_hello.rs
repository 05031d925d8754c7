//! Application-provided `HelloService`.

use hello_starter::{GreetingSink, HelloService};
use log::debug;
use std::sync::Arc;

pub const CUSTOM_GREETING: &str = "Hello from Custom";
pub const CUSTOM_HELLO_COMPONENT: &str = "customHelloService";

pub struct CustomHelloService {
    sink: Arc<dyn GreetingSink>,
}

impl CustomHelloService {
    pub fn new(sink: Arc<dyn GreetingSink>) -> Self {
        Self { sink }
    }
}

impl HelloService for CustomHelloService {
    fn say_hello(&self) {
        debug!("event=say_hello module=custom_app status=start provider=custom");
        self.sink.emit(CUSTOM_GREETING);
    }
}
