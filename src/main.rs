//! Demo entry point
//!
//! Classifies its own command line and echoes the result: one line per
//! argument (kind, name, captured value) followed by the canonical
//! re-rendering. Pass `--capture NAME` style values via the fixed demo
//! capture list below, e.g.:
//!
//! ```text
//! argsift -hvac --opt world hello -1024
//! ```

use argsift::docs::{ArgDoc, HelpWriter};
use argsift::{ParseConfig, Params};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Names eligible to capture a following token in the demo.
const DEMO_CAPTURES: &[&str] = &["opt", "out", "f", "z"];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cfg = ParseConfig::new(DEMO_CAPTURES.iter().copied());
    let params = Params::from_env(&cfg);
    debug!(count = params.len(), "classified command line");

    if params.is_empty() || params.check_any(["help", "h"]) {
        print_help();
        return;
    }

    for (i, arg) in params.iter().enumerate() {
        match arg.value() {
            Some(value) => {
                println!("{:>3}  {:<9}  {}  (captured \"{}\")", i, arg.kind(), arg.name(), value)
            }
            None => println!("{:>3}  {:<9}  {}", i, arg.kind(), arg.name()),
        }
    }
    println!("canonical: {}", params);
}

fn print_help() {
    let name = std::env::args().next().unwrap_or_else(|| "argsift".into());
    println!("Usage: {} [tokens...]", name);
    println!();
    println!("Classifies its arguments into parameters, options, and flags.");
    println!("Capture-eligible names: {}", DEMO_CAPTURES.join(", "));
    println!();
    print!(
        "{}",
        HelpWriter::new(14)
            .entry(ArgDoc::pair('h', "help", "Show this help"))
            .entry(ArgDoc::option("opt", "Demo option that captures the next token"))
            .entry(ArgDoc::flag('f', "Demo flag that captures the next token"))
    );
}
