use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;

mod args;
use args::Cli;

fn main() -> anyhow::Result<()> {
    gildedrose_observability::init();

    let cli = Cli::parse();
    let options = cli.options();
    tracing::debug!(?options, "starting fixture");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    gildedrose_fixture::run(&options, &mut out).context("text-test fixture failed")?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}
