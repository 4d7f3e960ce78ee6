use anyhow::Result;

use crate::cli::InspectArgs;
use crate::display::{Context, print_structure_info, print_warnings};

use super::read_molecule;

pub fn run_inspect(args: InspectArgs, ctx: Context) -> Result<()> {
    let (molecule, warnings) = read_molecule(args.input.as_deref())?;

    if !ctx.quiet {
        print_warnings(&warnings, ctx.interactive);
        print_structure_info(&molecule);
    }

    Ok(())
}
