//! Command line configuration.

use anyhow::{anyhow, Result};

pub const USAGE: &str = "\
Usage: quarto [OPTIONS]

Options:
  --demo            Start from the demo position (two pieces placed, one selected)
  --once            Play a single prompt/apply cycle, then exit
  --log <FILTER>    Log filter, e.g. `debug` or `quarto_core=trace` (default: $RUST_LOG or `warn`)
  -h, --help        Print this help";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub demo: bool,
    pub once: bool,
    pub log_filter: Option<String>,
}

/// Parse arguments (program name excluded). Returns `Ok(None)` when help was requested.
pub fn parse_args(args: &[String]) -> Result<Option<Config>> {
    let mut config = Config::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--demo" => config.demo = true,
            "--once" => config.once = true,
            "--log" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --log"))?;
                config.log_filter = Some(v.clone());
            }
            "-h" | "--help" => return Ok(None),
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(Some(config))
}
