use std::io::{self, Write};

use anyhow::Error;
use cjson_forge::io::error::{Error as CjsonError, ErrorKind};

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    for line in wrap(&err.to_string(), 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    if let Some(hint) = hint_for(err) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hint:                                                       ║");
        for line in wrap(hint, 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

fn hint_for(err: &Error) -> Option<&'static str> {
    let cjson = err.chain().find_map(|e| e.downcast_ref::<CjsonError>())?;
    match cjson.kind() {
        ErrorKind::Io => None,
        ErrorKind::Syntax => Some("The input is not valid JSON; check for truncation or stray characters."),
        ErrorKind::Structural => Some("CJSON files need a top-level \"chemical json\" key and an \"atoms.elements.number\" array."),
        ErrorKind::Cardinality => Some("Coordinate arrays must hold exactly 3 (or 2) values per atom and \"bonds.order\" one value per bond."),
        ErrorKind::Referential => Some("Fractional coordinates need a \"unit cell\" and bond indices must refer to existing atoms."),
    }
}
