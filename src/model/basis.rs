use std::fmt;

/// Kind of basis set attached to a molecule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasisType {
    /// Gaussian-type orbitals.
    Gaussian,
}

impl BasisType {
    pub fn label(&self) -> &'static str {
        match self {
            BasisType::Gaussian => "GTO",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "GTO" => Some(BasisType::Gaussian),
            _ => None,
        }
    }
}

/// Self-consistent field method the basis set was computed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScfType {
    Rhf,
    Rohf,
    Uhf,
    #[default]
    Unknown,
}

impl ScfType {
    pub fn label(&self) -> &'static str {
        match self {
            ScfType::Rhf => "rhf",
            ScfType::Rohf => "rohf",
            ScfType::Uhf => "uhf",
            ScfType::Unknown => "unknown",
        }
    }

    /// Maps a wire label onto a method; unrecognised labels become [`ScfType::Unknown`].
    pub fn from_label(label: &str) -> Self {
        match label {
            "rhf" => ScfType::Rhf,
            "rohf" => ScfType::Rohf,
            "uhf" => ScfType::Uhf,
            _ => ScfType::Unknown,
        }
    }
}

impl fmt::Display for ScfType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Descriptor of a quantum-chemistry basis set. Only its type tag and SCF
/// method are tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BasisSet {
    pub basis_type: BasisType,
    pub scf_type: ScfType,
}

impl BasisSet {
    pub fn gaussian(scf_type: ScfType) -> Self {
        Self {
            basis_type: BasisType::Gaussian,
            scf_type,
        }
    }
}

impl fmt::Display for BasisSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.basis_type.label(), self.scf_type)
    }
}
