mod format;
mod inspect;

use format::run_format;
use inspect::run_inspect;

use anyhow::{Context, Result, bail};
use std::path::Path;

use cjson_forge::Molecule;
use cjson_forge::io::cjson::reader;
use cjson_forge::io::error::Warning;

use crate::cli::Command;
use crate::display::Context as DisplayContext;
use crate::io::{open_input, stdin_is_tty};

pub fn dispatch(command: Command, ctx: DisplayContext) -> Result<()> {
    match command {
        Command::Inspect(args) => run_inspect(args, ctx),
        Command::Format(args) => run_format(args, ctx),
    }
}

fn read_molecule(input: Option<&Path>) -> Result<(Molecule, Vec<Warning>)> {
    if input.is_none() && stdin_is_tty() {
        bail!(
            "No input file specified and stdin is a terminal.\n\nUsage: cjforge <COMMAND> <FILE> or pipe data via stdin."
        );
    }

    let source = open_input(input)?;
    let label = source.label;

    let mut molecule = Molecule::new();
    let warnings = reader::read(source.reader, &mut molecule)
        .with_context(|| format!("Failed to read CJSON from {label}"))?;
    Ok((molecule, warnings))
}
