use std::io::{self, Write};

use cjson_forge::Molecule;
use cjson_forge::io::error::Warning;

const INDENT: &str = "      ";

pub fn print_structure_info(molecule: &Molecule) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let mut rows = vec![
        ("Formula", display_formula(molecule)),
        ("Total Atoms", format!("{}", molecule.atom_count())),
        ("Total Bonds", format!("{}", molecule.bond_count())),
        ("Coordinates", describe_coordinates(molecule)),
    ];

    if let Some(cell) = molecule.unit_cell() {
        rows.push((
            "Cell (Å)",
            format!("{:.3} × {:.3} × {:.3}", cell.a, cell.b, cell.c),
        ));
        let (alpha, beta, gamma) = cell.angles_degrees();
        rows.push((
            "Angles (α β γ)",
            format!("{:.2}° {:.2}° {:.2}°", alpha, beta, gamma),
        ));
        rows.push(("Volume (Å³)", format!("{:.3}", cell.volume())));
    }

    if let Some(basis) = &molecule.basis_set {
        rows.push(("Basis Set", basis.to_string()));
    }

    for (key, value) in &molecule.data {
        rows.push((key.as_str(), value.to_string()));
    }

    print_kv_table(&mut out, "Structure Summary", &rows);
}

pub fn print_warnings(warnings: &[Warning], color: bool) {
    if warnings.is_empty() {
        return;
    }

    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr);
    for warning in warnings {
        if color {
            let _ = writeln!(stderr, "  \x1b[33m!\x1b[0m {}", warning);
        } else {
            let _ = writeln!(stderr, "  warning: {}", warning);
        }
    }
}

fn display_formula(molecule: &Molecule) -> String {
    if molecule.atom_count() == 0 {
        "—".to_string()
    } else {
        molecule.formula()
    }
}

fn describe_coordinates(molecule: &Molecule) -> String {
    let mut kinds = Vec::new();
    if molecule.atom_count() > 0 && molecule.positions_3d().is_some() {
        kinds.push(if molecule.is_periodic() {
            "3D (crystal)"
        } else {
            "3D"
        });
    }
    if molecule.atom_count() > 0 && molecule.positions_2d().is_some() {
        kinds.push("2D");
    }

    if kinds.is_empty() {
        "none".to_string()
    } else {
        kinds.join(", ")
    }
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = rows
        .iter()
        .map(|(k, _)| k.chars().count())
        .max()
        .unwrap_or(0);
    let val_w = rows
        .iter()
        .map(|(_, v)| v.chars().count())
        .max()
        .unwrap_or(0);

    let _ = writeln!(out);
    let _ = writeln!(out, "  {}", title);
    let _ = writeln!(
        out,
        "{INDENT}┌{}┬{}┐",
        "─".repeat(key_w + 2),
        "─".repeat(val_w + 2)
    );
    for (key, value) in rows {
        let _ = writeln!(
            out,
            "{INDENT}│ {}{} │ {}{} │",
            key,
            " ".repeat(key_w - key.chars().count()),
            value,
            " ".repeat(val_w - value.chars().count())
        );
    }
    let _ = writeln!(
        out,
        "{INDENT}└{}┴{}┘",
        "─".repeat(key_w + 2),
        "─".repeat(val_w + 2)
    );
}
