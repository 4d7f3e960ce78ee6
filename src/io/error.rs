use std::fmt;
use thiserror::Error;

/// Broad classification of a failed read or write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The underlying stream failed.
    Io,
    /// The input is not well-formed JSON.
    Syntax,
    /// A required key is missing or holds the wrong JSON type.
    Structural,
    /// An array length disagrees with the atom or bond count.
    Cardinality,
    /// A value refers to something that does not exist.
    Referential,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateKind {
    Cartesian3d,
    Planar2d,
    Fractional3d,
}

impl CoordinateKind {
    pub fn dimension(&self) -> usize {
        match self {
            CoordinateKind::Planar2d => 2,
            CoordinateKind::Cartesian3d | CoordinateKind::Fractional3d => 3,
        }
    }
}

impl fmt::Display for CoordinateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateKind::Cartesian3d => write!(f, "3D"),
            CoordinateKind::Planar2d => write!(f, "2D"),
            CoordinateKind::Fractional3d => write!(f, "fractional"),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("input is not a JSON object")]
    NotAnObject,

    #[error("no \"{0}\" key found")]
    MissingKey(&'static str),

    #[error("\"{key}\" is not of type {expected}")]
    WrongType {
        key: &'static str,
        expected: &'static str,
    },

    #[error(
        "invalid unit cell: a, b, c, alpha, beta, gamma must be present and numeric"
    )]
    InvalidUnitCell,

    #[error(
        "number of elements != number of {kind} coordinates (expected {expected} values, found {found})"
    )]
    CoordinateCount {
        kind: CoordinateKind,
        expected: usize,
        found: usize,
    },

    #[error("number of bonds != number of bond orders (expected {expected}, found {found})")]
    BondOrderCount { expected: usize, found: usize },

    #[error("bond {bond} references atom index {index} but only {atom_count} atoms exist")]
    BondIndexOutOfRange {
        bond: usize,
        index: i64,
        atom_count: usize,
    },

    #[error("cannot interpret fractional coordinates without a unit cell")]
    FractionalWithoutUnitCell,
}

impl Error {
    pub fn wrong_type(key: &'static str, expected: &'static str) -> Self {
        Self::WrongType { key, expected }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io { .. } => ErrorKind::Io,
            Error::Json(e) if e.is_io() => ErrorKind::Io,
            Error::Json(_) => ErrorKind::Syntax,
            Error::NotAnObject
            | Error::MissingKey(_)
            | Error::WrongType { .. }
            | Error::InvalidUnitCell => ErrorKind::Structural,
            Error::CoordinateCount { .. } | Error::BondOrderCount { .. } => ErrorKind::Cardinality,
            Error::BondIndexOutOfRange { .. } | Error::FractionalWithoutUnitCell => {
                ErrorKind::Referential
            }
        }
    }
}

/// Non-fatal problem found while reading. Decoding continues past it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// `bonds.connections.index` is absent or not an array; no bonds were read.
    MissingBondConnections,
    /// `bonds.connections.index` has odd length; the last index was ignored.
    DanglingBondIndex { length: usize },
    /// `basisSet` is present but not a recognised descriptor.
    UnsupportedBasisSet(String),
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::MissingBondConnections => write!(f, "no bonding information found"),
            Warning::DanglingBondIndex { length } => write!(
                f,
                "\"bonds.connections.index\" has odd length {length}; last index ignored"
            ),
            Warning::UnsupportedBasisSet(detail) => {
                write!(f, "unsupported basis set ignored: {detail}")
            }
        }
    }
}
