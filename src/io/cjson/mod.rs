//! Chemical JSON (CJSON) reader and writer.

use std::io::{Read, Write};

use tracing::error;

use super::error::Warning;
use super::{FileFormat, Format, WriteOptions};
use crate::model::molecule::Molecule;

pub mod document;
pub mod reader;
pub mod writer;

pub(crate) mod keys {
    pub const CHEMICAL_JSON: &str = "chemical json";
    pub const NAME: &str = "name";
    pub const INCHI: &str = "inchi";

    pub const UNIT_CELL: &str = "unit cell";
    pub const CELL_A: &str = "a";
    pub const CELL_B: &str = "b";
    pub const CELL_C: &str = "c";
    pub const CELL_ALPHA: &str = "alpha";
    pub const CELL_BETA: &str = "beta";
    pub const CELL_GAMMA: &str = "gamma";

    pub const BASIS_SET: &str = "basisSet";
    pub const BASIS_TYPE: &str = "basisType";
    pub const SCF_TYPE: &str = "scfType";

    pub const ATOMS: &str = "atoms";
    pub const ELEMENTS: &str = "elements";
    pub const NUMBER: &str = "number";
    pub const COORDS: &str = "coords";
    pub const COORDS_3D: &str = "3d";
    pub const COORDS_2D: &str = "2d";
    pub const COORDS_FRACTIONAL: &str = "3d fractional";

    pub const BONDS: &str = "bonds";
    pub const CONNECTIONS: &str = "connections";
    pub const INDEX: &str = "index";
    pub const ORDER: &str = "order";

    pub const ATOMS_ELEMENTS_PATH: &str = "atoms.elements";
    pub const ATOMS_NUMBER_PATH: &str = "atoms.elements.number";
    pub const COORDS_PATH: &str = "atoms.coords";
    pub const COORDS_3D_PATH: &str = "atoms.coords.3d";
    pub const COORDS_2D_PATH: &str = "atoms.coords.2d";
    pub const COORDS_FRACTIONAL_PATH: &str = "atoms.coords.3d fractional";
    pub const CONNECTIONS_PATH: &str = "bonds.connections";
    pub const INDEX_PATH: &str = "bonds.connections.index";
    pub const ORDER_PATH: &str = "bonds.order";
}

/// [`FileFormat`] implementation for CJSON with an accumulating message log.
#[derive(Debug, Clone, Default)]
pub struct CjsonFormat {
    options: WriteOptions,
    errors: Vec<String>,
}

impl CjsonFormat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: WriteOptions) -> Self {
        Self {
            options,
            errors: Vec::new(),
        }
    }

    fn append_warnings(&mut self, warnings: &[Warning]) {
        self.errors.extend(warnings.iter().map(|w| format!("Warning: {w}")));
    }
}

impl FileFormat for CjsonFormat {
    fn format(&self) -> Format {
        Format::Cjson
    }

    fn read(&mut self, reader: &mut dyn Read, molecule: &mut Molecule) -> bool {
        let mut warnings = Vec::new();
        let result = reader::read_collecting(reader, molecule, &mut warnings);
        self.append_warnings(&warnings);

        match result {
            Ok(()) => true,
            Err(e) => {
                error!(kind = ?e.kind(), "failed to read CJSON document: {e}");
                self.errors.push(format!("Error: {e}"));
                false
            }
        }
    }

    fn write(&mut self, writer: &mut dyn Write, molecule: &Molecule) -> bool {
        match writer::write(writer, molecule, &self.options) {
            Ok(()) => true,
            Err(e) => {
                error!("failed to write CJSON document: {e}");
                self.errors.push(format!("Error: {e}"));
                false
            }
        }
    }

    fn errors(&self) -> &[String] {
        &self.errors
    }

    fn clear_errors(&mut self) {
        self.errors.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn failed_read_reports_false_and_logs_message() {
        let mut format = CjsonFormat::new();
        let mut molecule = Molecule::new();
        let mut input = Cursor::new(r#"{"atoms": {"elements": {"number": [6]}}}"#);

        assert!(!format.read(&mut input, &mut molecule));
        assert_eq!(format.errors(), &["Error: no \"chemical json\" key found"]);
    }

    #[test]
    fn warnings_precede_the_fatal_error_in_the_log() {
        let mut format = CjsonFormat::new();
        let mut molecule = Molecule::new();
        let mut input = Cursor::new(
            r#"{"chemical json": 0,
                "atoms": {"elements": {"number": [6, 8]}},
                "bonds": {"connections": {}, "order": [1]}}"#,
        );

        assert!(!format.read(&mut input, &mut molecule));
        let log = format.errors();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0], "Warning: no bonding information found");
        assert!(log[1].starts_with("Error: number of bonds != number of bond orders"));
        assert_eq!(molecule.atom_count(), 2);
    }

    #[test]
    fn successful_read_keeps_warnings_and_clear_resets_log() {
        let mut format = CjsonFormat::new();
        let mut molecule = Molecule::new();
        let mut input = Cursor::new(
            r#"{"chemical json": 0,
                "atoms": {"elements": {"number": [1, 1]}},
                "bonds": {"connections": {"index": "0 1"}}}"#,
        );

        assert!(format.read(&mut input, &mut molecule));
        assert_eq!(format.errors(), &["Warning: no bonding information found"]);
        assert_eq!(molecule.bond_count(), 0);

        format.clear_errors();
        assert!(format.errors().is_empty());
    }

    #[test]
    fn write_then_read_through_the_trait() {
        let mut molecule = Molecule::new();
        molecule.add_atom(8);
        molecule.atoms[0].position_3d = Some([0.0, 0.0, 0.117]);

        let mut format: Box<dyn FileFormat> = Box::new(CjsonFormat::new());
        let mut buf = Vec::new();
        assert!(format.write(&mut buf, &molecule));

        let mut parsed = Molecule::new();
        assert!(format.read(&mut Cursor::new(buf), &mut parsed));
        assert_eq!(parsed, molecule);
        assert!(format.errors().is_empty());
        assert_eq!(format.file_extensions(), &["cjson"]);
        assert_eq!(format.mime_types(), &["chemical/x-cjson"]);
    }
}
