use std::io::Write;

use serde::Serialize;
use serde_json::ser::{CompactFormatter, PrettyFormatter, Serializer};
use serde_json::{Map, Value, json};
use tracing::{debug, warn};

use super::keys;
use crate::crystal;
use crate::io::WriteOptions;
use crate::io::error::Error;
use crate::model::{basis::BasisType, molecule::Molecule};

/// Builds the canonical document for `molecule`.
///
/// Keys appear in a fixed order: identity marker, metadata, unit cell, basis
/// set, atoms, bonds. Optional sections are omitted when the molecule has
/// nothing to put in them.
pub fn encode(molecule: &Molecule) -> Value {
    let mut root = Map::new();
    root.insert(keys::CHEMICAL_JSON.into(), json!(0));

    for key in [keys::NAME, keys::INCHI] {
        if let Some(text) = molecule.data(key).and_then(|v| v.as_text()) {
            root.insert(key.into(), Value::from(text));
        }
    }

    if let Some(cell) = molecule.unit_cell() {
        let (alpha, beta, gamma) = cell.angles_degrees();
        root.insert(
            keys::UNIT_CELL.into(),
            json!({
                "a": cell.a,
                "b": cell.b,
                "c": cell.c,
                "alpha": alpha,
                "beta": beta,
                "gamma": gamma,
            }),
        );
    }

    if let Some(basis) = &molecule.basis_set {
        match basis.basis_type {
            BasisType::Gaussian => {
                root.insert(
                    keys::BASIS_SET.into(),
                    json!({
                        "basisType": basis.basis_type.label(),
                        "scfType": basis.scf_type.label(),
                    }),
                );
            }
        }
    }

    if molecule.atom_count() > 0 {
        root.insert(keys::ATOMS.into(), encode_atoms(molecule));
    }

    if molecule.bond_count() > 0 {
        let index: Vec<usize> = molecule.bonds.iter().flat_map(|b| [b.i, b.j]).collect();
        let order: Vec<u8> = molecule.bonds.iter().map(|b| b.order).collect();
        root.insert(
            keys::BONDS.into(),
            json!({
                "connections": { "index": index },
                "order": order,
            }),
        );
    }

    debug!(
        atoms = molecule.atom_count(),
        bonds = molecule.bond_count(),
        periodic = molecule.is_periodic(),
        "encoded CJSON document"
    );
    Value::Object(root)
}

fn encode_atoms(molecule: &Molecule) -> Value {
    let numbers: Vec<u8> = molecule.atoms.iter().map(|a| a.atomic_number).collect();

    let mut atoms = Map::new();
    atoms.insert(keys::ELEMENTS.into(), json!({ "number": numbers }));

    let mut coords = Map::new();
    if let Some(positions) = molecule.positions_3d() {
        match molecule.unit_cell() {
            Some(cell) => {
                let frac = crystal::fractional_coordinates(cell, &positions);
                if frac.iter().flatten().all(|v| v.is_finite()) {
                    coords.insert(keys::COORDS_FRACTIONAL.into(), json!(flatten(&frac)));
                } else {
                    warn!(
                        a = cell.a,
                        b = cell.b,
                        c = cell.c,
                        "degenerate unit cell, writing Cartesian coordinates instead of fractional"
                    );
                    coords.insert(keys::COORDS_3D.into(), json!(flatten(&positions)));
                }
            }
            None => {
                coords.insert(keys::COORDS_3D.into(), json!(flatten(&positions)));
            }
        }
    }
    if let Some(positions) = molecule.positions_2d() {
        coords.insert(keys::COORDS_2D.into(), json!(flatten(&positions)));
    }
    if !coords.is_empty() {
        atoms.insert(keys::COORDS.into(), Value::Object(coords));
    }

    Value::Object(atoms)
}

fn flatten<const N: usize>(points: &[[f64; N]]) -> Vec<f64> {
    points.iter().flatten().copied().collect()
}

/// Encodes `molecule` and writes it followed by a newline.
pub fn write<W: Write>(
    mut writer: W,
    molecule: &Molecule,
    options: &WriteOptions,
) -> Result<(), Error> {
    let document = encode(molecule);

    if options.pretty {
        let indent = " ".repeat(options.indent);
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut ser = Serializer::with_formatter(&mut writer, formatter);
        document.serialize(&mut ser)?;
    } else {
        let mut ser = Serializer::with_formatter(&mut writer, CompactFormatter);
        document.serialize(&mut ser)?;
    }

    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::cjson::reader;
    use crate::model::{
        atom::Atom,
        basis::{BasisSet, ScfType},
        cell::UnitCell,
        molecule::{Bond, MetadataValue},
    };
    use std::io::Cursor;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn water() -> Molecule {
        let mut mol = Molecule::new();
        mol.atoms = vec![
            Atom::new(8)
                .with_position_3d([0.0, 0.0, 0.1173])
                .with_position_2d([0.0, 0.0]),
            Atom::new(1)
                .with_position_3d([0.0, 0.7572, -0.4692])
                .with_position_2d([1.0, 0.5]),
            Atom::new(1)
                .with_position_3d([0.0, -0.7572, -0.4692])
                .with_position_2d([-1.0, 0.5]),
        ];
        mol.bonds = vec![Bond::new(0, 1, 1), Bond::new(0, 2, 1)];
        mol.set_data("name", "water");
        mol
    }

    fn rock_salt() -> Molecule {
        let mut mol = Molecule::new();
        mol.set_unit_cell(UnitCell::from_degrees(5.64, 5.64, 5.64, 90.0, 90.0, 90.0));
        mol.atoms = vec![
            Atom::new(11).with_position_3d([0.0, 0.0, 0.0]),
            Atom::new(17).with_position_3d([2.82, 2.82, 2.82]),
        ];
        mol
    }

    fn assert_same_molecule(a: &Molecule, b: &Molecule) {
        assert_eq!(a.atom_count(), b.atom_count());
        for (x, y) in a.atoms.iter().zip(&b.atoms) {
            assert_eq!(x.atomic_number, y.atomic_number);
            match (x.position_3d, y.position_3d) {
                (Some(p), Some(q)) => {
                    for k in 0..3 {
                        assert!(approx_eq(p[k], q[k], 1e-9), "{p:?} != {q:?}");
                    }
                }
                (None, None) => {}
                other => panic!("3D position mismatch: {other:?}"),
            }
            assert_eq!(x.position_2d, y.position_2d);
        }
        assert_eq!(a.bonds, b.bonds);
        assert_eq!(a.data, b.data);
        assert_eq!(a.basis_set, b.basis_set);
        match (a.unit_cell(), b.unit_cell()) {
            (Some(p), Some(q)) => {
                assert!(approx_eq(p.a, q.a, 1e-12));
                assert!(approx_eq(p.b, q.b, 1e-12));
                assert!(approx_eq(p.c, q.c, 1e-12));
                assert!(approx_eq(p.alpha, q.alpha, 1e-12));
                assert!(approx_eq(p.beta, q.beta, 1e-12));
                assert!(approx_eq(p.gamma, q.gamma, 1e-12));
            }
            (None, None) => {}
            other => panic!("unit cell mismatch: {other:?}"),
        }
    }

    fn roundtrip(molecule: &Molecule) -> Molecule {
        let mut buf = Vec::new();
        write(&mut buf, molecule, &WriteOptions::default()).expect("write cjson");
        let mut parsed = Molecule::new();
        reader::read(Cursor::new(buf), &mut parsed).expect("read cjson");
        parsed
    }

    #[test]
    fn keys_follow_canonical_order() {
        let mut mol = water();
        mol.set_data("inchi", "InChI=1S/H2O/h1H2");
        mol.set_unit_cell(UnitCell::from_degrees(10.0, 10.0, 10.0, 90.0, 90.0, 90.0));
        mol.basis_set = Some(BasisSet::gaussian(ScfType::Rhf));

        let doc = encode(&mol);
        let keys: Vec<&str> = doc.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "chemical json",
                "name",
                "inchi",
                "unit cell",
                "basisSet",
                "atoms",
                "bonds"
            ]
        );
    }

    #[test]
    fn encodes_atoms_and_bonds() {
        let doc = encode(&water());
        assert_eq!(doc["chemical json"], json!(0));
        assert_eq!(doc["name"], json!("water"));
        assert_eq!(doc["atoms"]["elements"]["number"], json!([8, 1, 1]));
        assert_eq!(
            doc["atoms"]["coords"]["3d"],
            json!([0.0, 0.0, 0.1173, 0.0, 0.7572, -0.4692, 0.0, -0.7572, -0.4692])
        );
        assert_eq!(
            doc["atoms"]["coords"]["2d"],
            json!([0.0, 0.0, 1.0, 0.5, -1.0, 0.5])
        );
        assert!(doc["atoms"]["coords"].get("3d fractional").is_none());
        assert_eq!(doc["bonds"]["connections"]["index"], json!([0, 1, 0, 2]));
        assert_eq!(doc["bonds"]["order"], json!([1, 1]));
    }

    #[test]
    fn empty_molecule_only_has_identity_marker() {
        let doc = encode(&Molecule::new());
        assert_eq!(doc, json!({ "chemical json": 0 }));
    }

    #[test]
    fn non_text_metadata_is_not_written() {
        let mut mol = Molecule::new();
        mol.set_data("name", MetadataValue::Integer(7));
        mol.set_data("comment", "ignored");
        let doc = encode(&mol);
        assert!(doc.get("name").is_none());
        assert!(doc.get("comment").is_none());
    }

    #[test]
    fn partial_positions_are_omitted() {
        let mut mol = Molecule::new();
        mol.atoms = vec![
            Atom::new(6).with_position_3d([0.0, 0.0, 0.0]),
            Atom::new(6).with_position_2d([1.0, 1.0]),
        ];
        let doc = encode(&mol);
        assert!(doc["atoms"].get("coords").is_none());
    }

    #[test]
    fn periodic_molecule_writes_fractional_only() {
        let doc = encode(&rock_salt());
        let coords = doc["atoms"]["coords"].as_object().unwrap();
        assert!(coords.get("3d").is_none());

        let frac: Vec<f64> = coords["3d fractional"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_f64().unwrap())
            .collect();
        let expected = [0.0, 0.0, 0.0, 0.5, 0.5, 0.5];
        assert_eq!(frac.len(), expected.len());
        for (f, e) in frac.iter().zip(expected) {
            assert!(approx_eq(*f, e, 1e-9));
        }
    }

    #[test]
    fn degenerate_cell_falls_back_to_cartesian() {
        let mut mol = Molecule::new();
        mol.set_unit_cell(UnitCell::from_degrees(0.0, 1.0, 1.0, 90.0, 90.0, 90.0));
        mol.atoms.push(Atom::new(6).with_position_3d([1.0, 0.0, 0.0]));

        let doc = encode(&mol);
        let coords = doc["atoms"]["coords"].as_object().unwrap();
        assert!(coords.get("3d fractional").is_none());
        assert_eq!(coords["3d"], json!([1.0, 0.0, 0.0]));

        let back = roundtrip(&mol);
        assert_eq!(back.atoms[0].position_3d, Some([1.0, 0.0, 0.0]));
        assert!(back.unit_cell().is_some());
    }

    #[test]
    fn angles_are_written_in_degrees() {
        let mut mol = Molecule::new();
        mol.set_unit_cell(UnitCell::new(
            3.0,
            3.0,
            4.0,
            std::f64::consts::FRAC_PI_2,
            std::f64::consts::FRAC_PI_2,
            2.0 * std::f64::consts::FRAC_PI_3,
        ));
        let doc = encode(&mol);
        let cell = &doc["unit cell"];
        assert!(approx_eq(cell["alpha"].as_f64().unwrap(), 90.0, 1e-10));
        assert!(approx_eq(cell["beta"].as_f64().unwrap(), 90.0, 1e-10));
        assert!(approx_eq(cell["gamma"].as_f64().unwrap(), 120.0, 1e-10));
        assert_eq!(cell["c"], json!(4.0));
    }

    #[test]
    fn basis_set_scf_labels() {
        for (scf, label) in [
            (ScfType::Rhf, "rhf"),
            (ScfType::Rohf, "rohf"),
            (ScfType::Uhf, "uhf"),
            (ScfType::Unknown, "unknown"),
        ] {
            let mut mol = Molecule::new();
            mol.basis_set = Some(BasisSet::gaussian(scf));
            let doc = encode(&mol);
            assert_eq!(
                doc["basisSet"],
                json!({ "basisType": "GTO", "scfType": label })
            );
        }
    }

    #[test]
    fn pretty_output_uses_configured_indent() {
        let mut mol = Molecule::new();
        mol.add_atom(2);

        let mut buf = Vec::new();
        write(&mut buf, &mol, &WriteOptions::default()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("{\n  \"chemical json\": 0,\n  \"atoms\": {"));
        assert!(text.ends_with("}\n"));

        let mut buf = Vec::new();
        let options = WriteOptions {
            indent: 4,
            ..WriteOptions::default()
        };
        write(&mut buf, &mol, &options).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("{\n    \"chemical json\": 0,"));
    }

    #[test]
    fn compact_output_is_single_line() {
        let mut mol = Molecule::new();
        mol.add_atom(2);

        let mut buf = Vec::new();
        let options = WriteOptions {
            pretty: false,
            ..WriteOptions::default()
        };
        write(&mut buf, &mol, &options).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "{\"chemical json\":0,\"atoms\":{\"elements\":{\"number\":[2]}}}\n"
        );
    }

    #[test]
    fn molecular_roundtrip_is_lossless() {
        let mut mol = water();
        mol.set_data("inchi", "InChI=1S/H2O/h1H2");
        mol.basis_set = Some(BasisSet::gaussian(ScfType::Rohf));
        mol.bonds[1].order = 2;

        let parsed = roundtrip(&mol);
        assert_same_molecule(&mol, &parsed);
    }

    #[test]
    fn crystal_roundtrip_recovers_cartesian_positions() {
        let mut mol = rock_salt();
        mol.set_unit_cell(UnitCell::from_degrees(5.1, 6.3, 7.2, 81.0, 97.5, 112.0));
        mol.atoms[1].position_3d = Some([1.7, -0.4, 3.3]);

        let parsed = roundtrip(&mol);
        assert_same_molecule(&mol, &parsed);
    }

    #[test]
    fn document_roundtrip_is_stable() {
        let first = roundtrip(&rock_salt());
        let second = roundtrip(&first);
        assert_same_molecule(&first, &second);
    }

    #[test]
    fn right_angle_survives_degree_conversion() {
        let doc = json!({
            "chemical json": 0,
            "unit cell": { "a": 1.0, "b": 1.0, "c": 1.0, "alpha": 90.0, "beta": 90.0, "gamma": 90.0 },
            "atoms": { "elements": { "number": [] } }
        });
        let mut mol = Molecule::new();
        reader::decode(&doc, &mut mol).unwrap();
        assert!(approx_eq(
            mol.unit_cell().unwrap().alpha,
            std::f64::consts::FRAC_PI_2,
            1e-12
        ));

        let out = encode(&mol);
        assert!(approx_eq(
            out["unit cell"]["alpha"].as_f64().unwrap(),
            90.0,
            1e-12
        ));
    }
}
