//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "routeprof",
    about = "Per-route sampling profiler substrate",
    after_help = "\
EXAMPLES:
    routeprof scopes.json                        Load config and sample until Ctrl+C
    routeprof scopes.json --duration 60          Stop after 60 seconds
    routeprof scopes.json --check /admin/users   Print the gate decision and exit"
)]
pub struct Args {
    /// Scope configuration file (JSON list of scope directives)
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Validate the config, print the gate decision for each ROUTE, and exit
    #[arg(long, value_name = "ROUTE")]
    pub check: Vec<String>,

    /// Stop after N seconds (0 = unlimited)
    #[arg(long, default_value = "0")]
    pub duration: u64,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}
