use std::{path::PathBuf, time::Duration};

use clap::Parser;

use otter_chain::config::Config;

/// Derives the truth of a literal from propositional axioms and implication rules.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// A rule base, written in JSON. Read from stdin if omitted.
    pub path: Option<PathBuf>,

    /// Write the result as JSON.
    #[arg(short, long)]
    pub json: bool,

    /// Write a conclusion on the statement described by the answer, if there is one.
    #[arg(short, long)]
    pub conclusion: bool,

    /// The most passes to make through the implication rules.
    #[arg(long, value_name = "PASSES")]
    pub pass_limit: Option<usize>,

    /// The most time to spend forward chaining, in seconds.
    #[arg(long, value_name = "SECONDS")]
    pub time_limit: Option<f64>,

    /// Note axioms which restate the value of an atom in the trace.
    #[arg(long)]
    pub trace_duplicates: bool,
}

/// A [Config] from the given arguments.
///
/// If some value is out of bounds, a message noting the bounds is returned.
pub fn config_from_args(args: &Args) -> Result<Config, String> {
    let mut cfg = Config::default();

    if let Some(value) = args.pass_limit {
        let (min, max) = cfg.pass_limit.min_max();
        if cfg.pass_limit.set(value).is_err() {
            return Err(format!(
                "{} requires a value between {min} and {max}",
                cfg.pass_limit.name
            ));
        }
    }

    if let Some(seconds) = args.time_limit {
        let (min, _) = cfg.time_limit.min_max();
        let duration = Duration::try_from_secs_f64(seconds).ok();
        if !duration.is_some_and(|duration| cfg.time_limit.set(duration).is_ok()) {
            return Err(format!(
                "{} requires a value of at least {} seconds",
                cfg.time_limit.name,
                min.as_secs_f64()
            ));
        }
    }

    if args.trace_duplicates {
        match cfg.trace_duplicates.set(true) {
            Ok(()) => {}
            Err(_) => return Err(format!("{} could not be set", cfg.trace_duplicates.name)),
        }
    }

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(arguments: &[&str]) -> Args {
        Args::parse_from(std::iter::once("otter_chain").chain(arguments.iter().copied()))
    }

    #[test]
    fn trace_duplicates() {
        let config = config_from_args(&args(&["--trace-duplicates"])).unwrap();
        assert!(config.trace_duplicates.value);

        let config = config_from_args(&args(&[])).unwrap();
        assert!(!config.trace_duplicates.value);
    }

    #[test]
    fn limits() {
        let config = config_from_args(&args(&["--pass-limit", "3", "--time-limit", "0.5"])).unwrap();
        assert_eq!(config.pass_limit.value, 3);
        assert_eq!(config.time_limit.value, Duration::from_millis(500));

        let error = config_from_args(&args(&["--pass-limit", "0"])).unwrap_err();
        assert!(error.starts_with("pass_limit requires a value between 1 and"));

        assert!(config_from_args(&args(&["--time-limit=-1"])).is_err());
    }
}
