use std::collections::{BTreeMap, HashMap};
use std::fmt;

use super::atom::Atom;
use super::basis::BasisSet;
use super::cell::UnitCell;
use super::types::{self, UNKNOWN_SYMBOL};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Bond {
    pub i: usize,
    pub j: usize,
    pub order: u8,
}

impl Bond {
    pub fn new(i: usize, j: usize, order: u8) -> Self {
        Self { i, j, order }
    }
}

/// Value stored in a molecule's metadata map.
#[derive(Debug, Clone, PartialEq)]
pub enum MetadataValue {
    Bool(bool),
    Integer(i64),
    Real(f64),
    Text(String),
}

impl MetadataValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetadataValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::Bool(v) => write!(f, "{v}"),
            MetadataValue::Integer(v) => write!(f, "{v}"),
            MetadataValue::Real(v) => write!(f, "{v}"),
            MetadataValue::Text(v) => f.write_str(v),
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        MetadataValue::Text(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        MetadataValue::Text(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Molecule {
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
    pub unit_cell: Option<UnitCell>,
    pub basis_set: Option<BasisSet>,
    pub data: BTreeMap<String, MetadataValue>,
}

impl Molecule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an atom without positions and returns its index.
    pub fn add_atom(&mut self, atomic_number: u8) -> usize {
        self.atoms.push(Atom::new(atomic_number));
        self.atoms.len() - 1
    }

    /// Appends a single bond between two atom indices and returns its index.
    pub fn add_bond(&mut self, i: usize, j: usize) -> usize {
        self.bonds.push(Bond::new(i, j, 1));
        self.bonds.len() - 1
    }

    /// Attaches `cell`, replacing any previous one.
    pub fn set_unit_cell(&mut self, cell: UnitCell) {
        self.unit_cell = Some(cell);
    }

    #[inline]
    pub fn unit_cell(&self) -> Option<&UnitCell> {
        self.unit_cell.as_ref()
    }

    pub fn data(&self, key: &str) -> Option<&MetadataValue> {
        self.data.get(key)
    }

    pub fn set_data(&mut self, key: impl Into<String>, value: impl Into<MetadataValue>) {
        self.data.insert(key.into(), value.into());
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    #[inline]
    pub fn is_periodic(&self) -> bool {
        self.unit_cell.is_some()
    }

    /// Cartesian positions of all atoms, or `None` unless every atom has one.
    pub fn positions_3d(&self) -> Option<Vec<[f64; 3]>> {
        self.atoms.iter().map(|a| a.position_3d).collect()
    }

    /// Planar positions of all atoms, or `None` unless every atom has one.
    pub fn positions_2d(&self) -> Option<Vec<[f64; 2]>> {
        self.atoms.iter().map(|a| a.position_2d).collect()
    }

    /// Hill-system formula: carbon first, then hydrogen, then the rest
    /// alphabetically. Without carbon every element is alphabetical.
    pub fn formula(&self) -> String {
        let mut counts: HashMap<&'static str, usize> = HashMap::new();
        for atom in &self.atoms {
            let symbol = types::element_symbol(atom.atomic_number).unwrap_or(UNKNOWN_SYMBOL);
            *counts.entry(symbol).or_insert(0) += 1;
        }

        let mut symbols: Vec<&'static str> = counts.keys().copied().collect();
        let has_carbon = counts.contains_key("C");
        symbols.sort_by_key(|&s| {
            let rank = match s {
                "C" if has_carbon => 0,
                "H" if has_carbon => 1,
                _ => 2,
            };
            (rank, s)
        });

        symbols
            .into_iter()
            .map(|s| match counts[s] {
                1 => s.to_string(),
                n => format!("{s}{n}"),
            })
            .collect()
    }
}
