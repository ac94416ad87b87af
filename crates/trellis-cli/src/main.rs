//! Trellis CLI Application
//!
//! Command-line interface for the Trellis personal goal tracker.

mod args;
mod cli;
mod renderer;
mod storage;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        data_file,
        no_color,
        command,
    } = Args::parse();

    let data_file = match data_file {
        Some(path) => path,
        None => storage::default_data_file()?,
    };
    let store = storage::load(&data_file).context("Failed to load goals")?;
    let renderer = TerminalRenderer::new(!no_color);

    info!("Trellis started with {} goal(s)", store.len());

    let mut cli = Cli::new(store, renderer, data_file);
    match command {
        Some(Add(add_args)) => cli.add(add_args.into()),
        Some(List) | None => cli.list(),
        Some(Show { id }) => cli.show(id),
        Some(Done { id }) => cli.done(id),
        Some(Undo { id }) => cli.undo(id),
        Some(Edit(edit_args)) => cli.edit(edit_args.into()),
        Some(Delete { id }) => cli.delete(id),
        Some(Completed) => cli.completed(),
    }
}
