/*!
General callbacks associated with a context.

# Callback types

Callbacks may be mutable functions.
Still, information passed from the context is non-mutable.

```rust
# use otter_chain::context::Context;
# use std::sync::{Arc, Mutex};
let mut the_context = Context::default();

let seen = Arc::new(Mutex::new(Vec::<String>::new()));
let seen_clone = seen.clone();
the_context.set_callback_step(Box::new(move |step| {
    seen_clone.lock().unwrap().push(step.to_string());
}));

the_context.read_axiom("p");
assert_eq!(seen.lock().unwrap().as_slice(), ["p = True"]);
```
*/

use crate::structures::step::Step;

use super::Context;

pub type CallbackStep = dyn FnMut(&Step);

pub type CallbackTerminate = dyn FnMut() -> bool;

impl Context {
    /// Sets a callback to be made with each step as it is noted in the trace.
    pub fn set_callback_step(&mut self, callback: Box<CallbackStep>) {
        self.callback_step = Some(callback);
    }

    /// Sets a callback checked before each pass of forward chaining, which stops forward chaining if true.
    pub fn set_callback_terminate(&mut self, callback: Box<CallbackTerminate>) {
        self.callback_terminate = Some(callback);
    }

    pub fn check_callback_terminate(&mut self) -> bool {
        if let Some(callback) = &mut self.callback_terminate {
            callback()
        } else {
            false
        }
    }
}
