use anyhow::{Context, Result};
use clap::Parser;
use std::io::{IsTerminal, Write};

use rbz::cli::args::{CliArgs, OutputFormat};
use rbz::cli::driver;
use rbz::cli::reporter::Reporter;

const EXIT_SUCCESS: i32 = 0;
const EXIT_DIAGNOSTICS_REPORTED: i32 = 1;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    rbz::tracing_config::init_tracing(args.verbose);

    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    let result = driver::check(&args, &cwd)?;

    match args.format {
        OutputFormat::Json => {
            let output = Reporter::render_json(&result.diagnostics)?;
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{output}").context("failed to write diagnostics")?;
        }
        OutputFormat::Text => {
            if result.has_errors() {
                let pretty = args
                    .pretty
                    .unwrap_or_else(|| std::io::stderr().is_terminal());
                let mut reporter = Reporter::new(pretty).with_base_dir(&result.base_dir);
                let output = reporter.render(&result.diagnostics);
                let mut stderr = std::io::stderr().lock();
                write!(stderr, "{output}").context("failed to write diagnostics")?;
            }
        }
    }

    if result.has_errors() {
        std::process::exit(EXIT_DIAGNOSTICS_REPORTED);
    }
    std::process::exit(EXIT_SUCCESS);
}
