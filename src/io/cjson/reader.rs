use std::io::Read;

use serde_json::Value;
use tracing::{debug, warn};

use super::document::{self, Object};
use super::keys;
use crate::crystal;
use crate::io::error::{CoordinateKind, Error, Warning};
use crate::model::{
    basis::{BasisSet, BasisType, ScfType},
    cell::UnitCell,
    molecule::{MetadataValue, Molecule},
};

/// Parses a CJSON stream and decodes it into `molecule`.
pub fn read<R: Read>(reader: R, molecule: &mut Molecule) -> Result<Vec<Warning>, Error> {
    let mut warnings = Vec::new();
    read_collecting(reader, molecule, &mut warnings)?;
    Ok(warnings)
}

/// Like [`read`], but appends warnings to `warnings` as they occur so they
/// survive a later fatal error.
pub fn read_collecting<R: Read>(
    reader: R,
    molecule: &mut Molecule,
    warnings: &mut Vec<Warning>,
) -> Result<(), Error> {
    let document: Value = serde_json::from_reader(reader)?;
    decode_collecting(&document, molecule, warnings)
}

/// Decodes an already-parsed document into `molecule`.
///
/// Decoding stops at the first fatal error. Atoms and bonds appended before
/// that point stay in the molecule.
pub fn decode(document: &Value, molecule: &mut Molecule) -> Result<Vec<Warning>, Error> {
    let mut warnings = Vec::new();
    decode_collecting(document, molecule, &mut warnings)?;
    Ok(warnings)
}

pub fn decode_collecting(
    document: &Value,
    molecule: &mut Molecule,
    warnings: &mut Vec<Warning>,
) -> Result<(), Error> {
    let root = document.as_object().ok_or(Error::NotAnObject)?;
    if !root.contains_key(keys::CHEMICAL_JSON) {
        return Err(Error::MissingKey(keys::CHEMICAL_JSON));
    }

    read_metadata(root, molecule);
    read_unit_cell(root, molecule)?;
    read_basis_set(root, molecule, warnings);

    let atom_offset = molecule.atom_count();
    let atom_count = read_atoms(root, molecule)?;
    let bond_count = read_bonds(root, molecule, atom_offset, atom_count, warnings)?;

    debug!(
        atoms = atom_count,
        bonds = bond_count,
        periodic = molecule.is_periodic(),
        "decoded CJSON document"
    );
    Ok(())
}

fn push_warning(warnings: &mut Vec<Warning>, warning: Warning) {
    warn!("{warning}");
    warnings.push(warning);
}

fn read_metadata(root: &Object, molecule: &mut Molecule) {
    for key in [keys::NAME, keys::INCHI] {
        if let Some(text) = document::string(root, key) {
            molecule.set_data(key, MetadataValue::Text(text.to_string()));
        }
    }
}

fn read_unit_cell(root: &Object, molecule: &mut Molecule) -> Result<(), Error> {
    let Some(value) = document::optional(root, keys::UNIT_CELL) else {
        return Ok(());
    };
    let cell = document::as_object(value, keys::UNIT_CELL)?;

    let param = |key: &str| {
        cell.get(key)
            .and_then(Value::as_f64)
            .ok_or(Error::InvalidUnitCell)
    };

    let a = param(keys::CELL_A)?;
    let b = param(keys::CELL_B)?;
    let c = param(keys::CELL_C)?;
    let alpha = param(keys::CELL_ALPHA)?;
    let beta = param(keys::CELL_BETA)?;
    let gamma = param(keys::CELL_GAMMA)?;

    molecule.set_unit_cell(UnitCell::from_degrees(a, b, c, alpha, beta, gamma));
    Ok(())
}

fn read_basis_set(root: &Object, molecule: &mut Molecule, warnings: &mut Vec<Warning>) {
    let Some(value) = document::optional(root, keys::BASIS_SET) else {
        return;
    };
    let Some(basis) = value.as_object() else {
        push_warning(
            warnings,
            Warning::UnsupportedBasisSet("\"basisSet\" is not an object".to_string()),
        );
        return;
    };

    let label = document::string(basis, keys::BASIS_TYPE).unwrap_or_default();
    match BasisType::from_label(label) {
        Some(BasisType::Gaussian) => {
            let scf_type = document::string(basis, keys::SCF_TYPE)
                .map(ScfType::from_label)
                .unwrap_or_default();
            molecule.basis_set = Some(BasisSet::gaussian(scf_type));
        }
        None => push_warning(
            warnings,
            Warning::UnsupportedBasisSet(format!("unknown basis type '{label}'")),
        ),
    }
}

/// Appends one atom per entry of `atoms.elements.number` and applies any
/// coordinates. Returns the number of atoms read from the document.
fn read_atoms(root: &Object, molecule: &mut Molecule) -> Result<usize, Error> {
    let atoms = document::require(root, keys::ATOMS, keys::ATOMS)?;
    let atoms = document::as_object(atoms, keys::ATOMS)?;

    let elements = document::require(atoms, keys::ELEMENTS, keys::ATOMS_ELEMENTS_PATH)?;
    let elements = document::as_object(elements, keys::ATOMS_ELEMENTS_PATH)?;

    let numbers = document::require(elements, keys::NUMBER, keys::ATOMS_NUMBER_PATH)?;
    let numbers = document::as_array(numbers, keys::ATOMS_NUMBER_PATH)?;

    let offset = molecule.atom_count();
    for value in numbers {
        let number = document::integer(value)
            .ok_or_else(|| Error::wrong_type(keys::ATOMS_NUMBER_PATH, "array of numbers"))?;
        molecule.add_atom(number as u8);
    }
    let atom_count = numbers.len();

    if let Some(coords) = document::optional(atoms, keys::COORDS) {
        let coords = document::as_object(coords, keys::COORDS_PATH)?;
        read_coordinates(coords, molecule, offset, atom_count)?;
    }

    Ok(atom_count)
}

fn read_coordinates(
    coords: &Object,
    molecule: &mut Molecule,
    offset: usize,
    atom_count: usize,
) -> Result<(), Error> {
    if let Some(values) = coords.get(keys::COORDS_3D).and_then(Value::as_array) {
        let flat = checked_coordinates(values, CoordinateKind::Cartesian3d, atom_count)?;
        for (atom, p) in molecule.atoms[offset..].iter_mut().zip(flat.chunks_exact(3)) {
            atom.position_3d = Some([p[0], p[1], p[2]]);
        }
    }

    if let Some(values) = coords.get(keys::COORDS_2D).and_then(Value::as_array) {
        let flat = checked_coordinates(values, CoordinateKind::Planar2d, atom_count)?;
        for (atom, p) in molecule.atoms[offset..].iter_mut().zip(flat.chunks_exact(2)) {
            atom.position_2d = Some([p[0], p[1]]);
        }
    }

    if let Some(values) = coords.get(keys::COORDS_FRACTIONAL).and_then(Value::as_array) {
        let cell = molecule
            .unit_cell
            .ok_or(Error::FractionalWithoutUnitCell)?;
        let flat = checked_coordinates(values, CoordinateKind::Fractional3d, atom_count)?;
        if !flat.is_empty() {
            let frac: Vec<[f64; 3]> = flat.chunks_exact(3).map(|p| [p[0], p[1], p[2]]).collect();
            crystal::set_fractional_coordinates(&cell, &mut molecule.atoms[offset..], &frac)?;
        }
    }

    Ok(())
}

/// Validates the length of a flat coordinate array against the atom count and
/// narrows its entries to numbers. An empty array is accepted and yields no
/// values.
fn checked_coordinates(
    values: &[Value],
    kind: CoordinateKind,
    atom_count: usize,
) -> Result<Vec<f64>, Error> {
    let expected = atom_count * kind.dimension();
    if !values.is_empty() && values.len() != expected {
        return Err(Error::CoordinateCount {
            kind,
            expected,
            found: values.len(),
        });
    }

    let path = match kind {
        CoordinateKind::Cartesian3d => keys::COORDS_3D_PATH,
        CoordinateKind::Planar2d => keys::COORDS_2D_PATH,
        CoordinateKind::Fractional3d => keys::COORDS_FRACTIONAL_PATH,
    };
    document::numbers(values, path)
}

/// Appends the bonds listed under `bonds` and returns how many were read.
fn read_bonds(
    root: &Object,
    molecule: &mut Molecule,
    atom_offset: usize,
    atom_count: usize,
    warnings: &mut Vec<Warning>,
) -> Result<usize, Error> {
    let Some(bonds) = document::optional(root, keys::BONDS) else {
        return Ok(0);
    };
    let bonds = document::as_object(bonds, keys::BONDS)?;
    let connections = document::require(bonds, keys::CONNECTIONS, keys::CONNECTIONS_PATH)?;

    let bond_offset = molecule.bond_count();
    let bond_count = match connections.get(keys::INDEX).and_then(Value::as_array) {
        Some(index) => {
            let index = document::integers(index, keys::INDEX_PATH)?;
            if index.len() % 2 != 0 {
                push_warning(
                    warnings,
                    Warning::DanglingBondIndex {
                        length: index.len(),
                    },
                );
            }

            for (bond, pair) in index.chunks_exact(2).enumerate() {
                let i = atom_index(pair[0], bond, atom_count)?;
                let j = atom_index(pair[1], bond, atom_count)?;
                molecule.add_bond(atom_offset + i, atom_offset + j);
            }
            index.len() / 2
        }
        None => {
            push_warning(warnings, Warning::MissingBondConnections);
            0
        }
    };

    if let Some(orders) = bonds.get(keys::ORDER).and_then(Value::as_array) {
        if orders.len() != bond_count {
            return Err(Error::BondOrderCount {
                expected: bond_count,
                found: orders.len(),
            });
        }
        let orders = document::integers(orders, keys::ORDER_PATH)?;
        for (bond, order) in molecule.bonds[bond_offset..].iter_mut().zip(orders) {
            bond.order = order as u8;
        }
    }

    Ok(bond_count)
}

fn atom_index(index: i64, bond: usize, atom_count: usize) -> Result<usize, Error> {
    usize::try_from(index)
        .ok()
        .filter(|&i| i < atom_count)
        .ok_or(Error::BondIndexOutOfRange {
            bond,
            index,
            atom_count,
        })
}
