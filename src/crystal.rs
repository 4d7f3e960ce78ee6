//! Conversion between Cartesian and fractional coordinates.
//!
//! The lattice matrix built by [`UnitCell::lattice_vectors`] is
//! upper-triangular (in column form), so the inverse map is a plain
//! back-substitution and both directions stay exact inverses up to rounding.

use crate::io::error::{CoordinateKind, Error};
use crate::model::atom::Atom;
use crate::model::cell::UnitCell;

/// Maps a fractional point into Cartesian space: `f0·a + f1·b + f2·c`.
pub fn fractional_to_cartesian(cell: &UnitCell, frac: [f64; 3]) -> [f64; 3] {
    let [va, vb, vc] = cell.lattice_vectors();
    [
        frac[0] * va[0] + frac[1] * vb[0] + frac[2] * vc[0],
        frac[1] * vb[1] + frac[2] * vc[1],
        frac[2] * vc[2],
    ]
}

/// Maps a Cartesian point into lattice-fractional coordinates.
pub fn cartesian_to_fractional(cell: &UnitCell, cart: [f64; 3]) -> [f64; 3] {
    let [va, vb, vc] = cell.lattice_vectors();
    let f2 = cart[2] / vc[2];
    let f1 = (cart[1] - f2 * vc[1]) / vb[1];
    let f0 = (cart[0] - f1 * vb[0] - f2 * vc[0]) / va[0];
    [f0, f1, f2]
}

pub fn fractional_coordinates(cell: &UnitCell, positions: &[[f64; 3]]) -> Vec<[f64; 3]> {
    positions
        .iter()
        .map(|&p| cartesian_to_fractional(cell, p))
        .collect()
}

/// Converts `frac` with `cell` and stores the Cartesian result on each atom,
/// in order.
///
/// Fails with [`Error::CoordinateCount`] without touching any atom when
/// `frac.len()` differs from the number of atoms.
pub fn set_fractional_coordinates(
    cell: &UnitCell,
    atoms: &mut [Atom],
    frac: &[[f64; 3]],
) -> Result<(), Error> {
    if frac.len() != atoms.len() {
        return Err(Error::CoordinateCount {
            kind: CoordinateKind::Fractional3d,
            expected: atoms.len() * 3,
            found: frac.len() * 3,
        });
    }

    for (atom, &f) in atoms.iter_mut().zip(frac) {
        atom.position_3d = Some(fractional_to_cartesian(cell, f));
    }
    Ok(())
}
