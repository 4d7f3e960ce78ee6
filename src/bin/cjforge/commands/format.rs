use std::io::Write;

use anyhow::{Context as _, Result};

use cjson_forge::io::WriteOptions;
use cjson_forge::io::cjson::writer;

use crate::cli::FormatArgs;
use crate::display::{Context, print_warnings};
use crate::io::create_output;

use super::read_molecule;

pub fn run_format(args: FormatArgs, ctx: Context) -> Result<()> {
    let (molecule, warnings) = read_molecule(args.input.as_deref())?;

    if !ctx.quiet {
        print_warnings(&warnings, ctx.interactive);
    }

    let options = WriteOptions {
        indent: args.indent,
        pretty: !args.compact,
    };

    let mut output = create_output(args.output.as_deref())?;
    writer::write(&mut output, &molecule, &options).context("Failed to write CJSON output")?;
    output.flush().context("Failed to flush output")?;

    Ok(())
}
