use std::io::{self, BufWriter};

use course_order::processor::CommandProcessor;
use tracing_subscriber::EnvFilter;

fn main() -> course_order::error::Result<()> {
    // stdout carries the protocol, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut processor = CommandProcessor::new(BufWriter::new(io::stdout().lock()));

    processor.run(stdin.lock())
}
