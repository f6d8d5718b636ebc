//! # routeprof - Main Entry Point
//!
//! Demonstration host: loads a scope-configuration file, runs the load
//! phase (resolve, provision, plan), and then either answers gate queries
//! (`--check`) or arms the sample timer on a current-thread reactor until
//! Ctrl+C or the `--duration` limit.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use tokio::sync::watch;

use routeprof::cli::Args;
use routeprof::config::{load, LoadedConfig, ScopeDirective};
use routeprof::domain::ConfigError;
use routeprof::sampler::{LogCollector, SampleTimer};

// Exit codes
const EXIT_SUCCESS: i32 = 0;
const EXIT_ERROR: i32 = 1;
const EXIT_CONFIG: i32 = 78; // sysexits EX_CONFIG

fn main() {
    env_logger::init();
    std::process::exit(match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            let code = exit_code_for(&e);
            eprintln!("error: {e:#}");
            code
        }
    });
}

fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.chain().any(|cause| cause.downcast_ref::<ConfigError>().is_some()) {
        EXIT_CONFIG
    } else {
        EXIT_ERROR
    }
}

#[tokio::main(flavor = "current_thread")]
async fn run() -> Result<()> {
    let args = Args::parse();

    let raw = std::fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read config file {}", args.config.display()))?;
    let directives: Vec<ScopeDirective> = serde_json::from_str(&raw)
        .with_context(|| format!("malformed config file {}", args.config.display()))?;
    let scope_count = directives.len();

    // Load phase: fatal on any ConfigError, nothing runs half-configured
    let LoadedConfig { gate, sampling } = load(directives)?;

    if !args.quiet {
        println!("routeprof v{}", env!("CARGO_PKG_VERSION"));
        println!("scopes: {scope_count} declared, {} resolved", gate.len());
        match &sampling {
            Some(plan) => println!("sampling: every {} (scope {})", plan.interval, plan.scope),
            None => println!("sampling: disabled"),
        }
    }

    // Dry-run mode: answer gate queries and exit without arming anything
    if !args.check.is_empty() {
        for route in &args.check {
            println!("{route}: {}", gate.decide(route));
        }
        return Ok(());
    }

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let control = async {
        let deadline = async {
            if args.duration > 0 {
                tokio::time::sleep(Duration::from_secs(args.duration)).await;
            } else {
                std::future::pending::<()>().await;
            }
        };
        tokio::select! {
            _ = tokio::signal::ctrl_c() => info!("interrupted"),
            () = deadline => info!("duration limit reached"),
        }
        shutdown_tx.send(true).ok();
    };

    match sampling {
        Some(plan) => {
            let collector = LogCollector::new(plan.directory.clone());
            let timer = SampleTimer::new(plan.interval, collector);
            let (timer, ()) = tokio::join!(timer.run(shutdown_rx), control);
            if !args.quiet {
                println!("samples: {}", timer.fires());
            }
        }
        None => {
            // Gate-only configuration; idle so decisions stay queryable
            // by an embedding host. Nothing to do here beyond waiting.
            drop(shutdown_rx);
            control.await;
        }
    }

    Ok(())
}
