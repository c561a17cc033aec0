use std::io::{self, BufRead, Write};
use std::num::NonZero;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::command::Command;
use crate::session::{Companion, Outcome};

mod command;
mod session;

/// Track hazard clues for a toroidal dungeon from the terminal. Type `help` for commands.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Side length of the dungeon
    #[arg(short, long, default_value_t = pitfall::DEFAULT_SIZE.get())]
    size: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let size = NonZero::new(args.size).context("--size must be at least 1")?;
    info!(size = size.get(), "starting companion");

    let mut companion = Companion::new(size);
    let mut out = io::stdout().lock();
    write!(out, "{}", companion.render())?;
    out.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(command) => match companion.apply(command) {
                Outcome::Redraw => write!(out, "{}", companion.render())?,
                Outcome::Print(text) => writeln!(out, "{text}")?,
                Outcome::Quit => break,
            },
            Err(err) => {
                warn!(%err, "rejected command");
                writeln!(out, "error: {err}")?;
            }
        }
        out.flush()?;
    }

    Ok(())
}
