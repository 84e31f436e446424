/*!
Configuration of a context.

All configuration for a [context](crate::context) is contained within a [Config].
Each option records its name and bounds alongside its value, so that requests to revise an option may be checked (e.g. from the command line).

The default configuration places no limit on a solve, and leaves repeated axioms out of the trace.
Forward chaining always reaches a fixed point, as each pass which does not end a solve sets the value of some atom, and so limits are only of use when a rule base is (very) large.

```rust
# use otter_chain::config::Config;
let mut config = Config::default();

assert!(config.pass_limit.set(16).is_ok());
assert!(config.pass_limit.set(0).is_err());
```
*/

use std::time::Duration;

mod config_option;
pub use config_option::ConfigOption;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The most passes through the implication rules during a solve.
    pub pass_limit: ConfigOption<usize>,

    /// The time limit for forward chaining.
    pub time_limit: ConfigOption<Duration>,

    /// Note axioms which restate the value of an atom in the trace.
    pub trace_duplicates: ConfigOption<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            pass_limit: ConfigOption {
                name: "pass_limit",
                min: 1,
                max: usize::MAX,
                value: usize::MAX,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: Duration::from_secs(0),
                max: Duration::MAX,
                value: Duration::MAX,
            },

            trace_duplicates: ConfigOption {
                name: "trace_duplicates",
                min: false,
                max: true,
                value: false,
            },
        }
    }
}
