//! A pure Rust reader and writer for Chemical JSON (CJSON) documents.
//! It decodes the hierarchical key-value format into a molecular graph (atoms,
//! bonds, unit cell, basis-set descriptor, metadata) and encodes that graph back
//! into canonical, diff-friendly JSON.
//!
//! # Features
//!
//! - **Strict decoding** — Every required key is checked for presence and JSON
//!   type; coordinate and bond-order arrays are checked against the atom and
//!   bond counts before anything is written to the molecule
//! - **Soft warnings** — Missing bonding data or unsupported basis sets are
//!   reported without aborting the read
//! - **Crystal support** — Unit cells with angles in degrees on the wire and
//!   radians in memory; fractional coordinates converted to and from Cartesian
//! - **Canonical output** — Stable key order and configurable indentation
//!
//! # Quick Start
//!
//! ```
//! use cjson_forge::io::{WriteOptions, cjson};
//! use cjson_forge::{Molecule, UnitCell};
//!
//! let input = r#"{
//!     "chemical json": 0,
//!     "name": "sodium chloride",
//!     "unit cell": { "a": 5.64, "b": 5.64, "c": 5.64,
//!                    "alpha": 90.0, "beta": 90.0, "gamma": 90.0 },
//!     "atoms": {
//!         "elements": { "number": [11, 17] },
//!         "coords": { "3d fractional": [0.0, 0.0, 0.0, 0.5, 0.5, 0.5] }
//!     }
//! }"#;
//!
//! let mut molecule = Molecule::new();
//! let warnings = cjson::reader::read(input.as_bytes(), &mut molecule)?;
//! assert!(warnings.is_empty());
//!
//! assert_eq!(molecule.atom_count(), 2);
//! assert_eq!(molecule.formula(), "ClNa");
//! let chlorine = molecule.atoms[1].position_3d.unwrap();
//! assert!((chlorine[0] - 2.82).abs() < 1e-9);
//!
//! let cell: &UnitCell = molecule.unit_cell().unwrap();
//! assert!((cell.alpha - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//!
//! let mut out = Vec::new();
//! cjson::writer::write(&mut out, &molecule, &WriteOptions::default())?;
//! assert!(String::from_utf8(out).unwrap().contains("\"3d fractional\""));
//! # Ok::<(), cjson_forge::io::error::Error>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — Format registry, [`FileFormat`](io::FileFormat) host contract,
//!   errors and warnings, and the CJSON reader/writer
//! - [`crystal`] — Cartesian ⇄ fractional coordinate conversion
//!
//! # Data Types
//!
//! - [`Molecule`] — Atoms, bonds, optional unit cell and basis set, metadata
//! - [`Atom`] — Atomic number with optional 3D and 2D positions
//! - [`Bond`] — Pair of atom indices with an integer bond order
//! - [`UnitCell`] — Lattice lengths and angles (radians)
//! - [`BasisSet`] — Basis type tag and [`ScfType`]
//! - [`MetadataValue`] — Values of the string-keyed metadata map

mod model;

pub mod crystal;
pub mod io;

pub use model::atom::Atom;
pub use model::basis::{BasisSet, BasisType, ScfType};
pub use model::cell::UnitCell;
pub use model::molecule::{Bond, MetadataValue, Molecule};
pub use model::types::element_symbol;
