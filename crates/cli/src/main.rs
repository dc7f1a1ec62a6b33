// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! goldcheck binary entry point.

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;

use goldcheck::cli::{Cli, Command};
use goldcheck::report::print_error;
use goldcheck::{CommandRunner, FixtureChecker, HarnessError, TimedRunner};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = run(cli).await;
    if let Err(ref e) = result {
        let reported = e
            .downcast_ref::<HarnessError>()
            .is_some_and(HarnessError::is_reported);
        if !reported {
            print_error(format!("{e:#}"));
        }
    }
    let _ = io::stdout().flush();
    if result.is_err() {
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if verbose { "debug" } else { "warn" };
    let filter = goldcheck::env::log_filter()
        .map(EnvFilter::new)
        .unwrap_or_else(|| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let fixtures = cli.fixture_dir();

    match cli.command {
        Command::Run(args) => {
            let invocation = args.invocation()?;
            let message = args.failure_message(&invocation);
            let mut runner = CommandRunner::new(fixtures, io::stdout());
            let output = runner
                .expect(args.expect, &invocation, &message, args.fixture.as_deref())
                .await?;
            print!("{output}");
        }
        Command::RunFor(args) => {
            let invocation = args.invocation()?;
            TimedRunner::new(io::stdout())
                .run_for(args.duration, &invocation)
                .await?;
        }
        Command::Check(args) => {
            let mut checker = FixtureChecker::new(fixtures, io::stdout()).with_workdir(args.workdir);
            for name in &args.names {
                checker.check(name).await?;
            }
        }
    }
    Ok(())
}
