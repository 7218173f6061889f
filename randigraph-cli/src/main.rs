//! `randigraph` binary.
//!
//! Runs one command, prints its degree summary on stdout, and exits non-zero
//! when generation, analysis, or output fails. Failures are logged with the
//! stable graph error code when one applies.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use randigraph_cli::{
    cli::{Cli, CliError, render_summary, run_cli},
    logging::{LoggingError, init_logging},
};
use randigraph_core::GraphErrorCode;
use tracing::{error, field};

fn main() -> ExitCode {
    if let Err(err) = init_logging() {
        report_logging_failure(&err);
        return ExitCode::FAILURE;
    }
    match execute(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = graph_error_code(&err).map(|code| field::display(code.as_str()));
            error!(error = %err, code, "command execution failed");
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> anyhow::Result<()> {
    let summary = run_cli(cli).context("failed to execute command")?;
    let mut out = BufWriter::new(io::stdout().lock());
    render_summary(&summary, &mut out).context("failed to render summary")?;
    out.flush().context("failed to flush output")
}

fn graph_error_code(err: &anyhow::Error) -> Option<GraphErrorCode> {
    match err.downcast_ref::<CliError>()? {
        CliError::Core(core) => Some(core.code()),
    }
}

#[expect(
    clippy::print_stderr,
    reason = "No subscriber exists to receive the diagnostic"
)]
fn report_logging_failure(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
