use similarity::{
    style::{self, Style},
    Command,
};
use std::{
    io::{self, BufWriter},
    process::ExitCode,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Results go to stdout, diagnostics to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("similarity=warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let command = Command::parse();
    debug!(?command, "parsed arguments");

    let stdout = io::stdout();
    let style: &dyn Style = if termion::is_tty(&stdout) {
        &style::Default
    } else {
        &style::Plain
    };
    match command.run(BufWriter::new(stdout.lock()), style) {
        Ok(count) => {
            debug!(count, "wrote results");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("!! {error}");
            ExitCode::FAILURE
        }
    }
}
