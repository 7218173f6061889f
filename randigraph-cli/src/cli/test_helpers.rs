//! Small helpers shared across CLI tests.

use super::{Cli, CliError, ExecutionSummary, render_summary, run_cli};

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn rendered(summary: &ExecutionSummary) -> String {
    let mut buffer = Vec::new();
    render_summary(summary, &mut buffer).expect("writing to a Vec cannot fail");
    String::from_utf8(buffer).expect("summary output is UTF-8")
}
