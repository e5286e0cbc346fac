use std::io;
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use zuul::engine::Parser;
use zuul::{Game, ZuulError, default_world, play};

/// Diagnostics go to stderr so stdout carries nothing but game text.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<(), ZuulError> {
    let mut game = Game::new(default_world()?);

    let stdin = io::stdin();
    let mut parser = Parser::new(stdin.lock());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    play(&mut game, &mut parser, &mut out)?;
    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
