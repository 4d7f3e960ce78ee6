//! Molecular data model populated by the readers and consumed by the writers.
//!
//! - [`atom`] – Atom with atomic number and optional 3D / 2D positions.
//! - [`molecule`] – Atoms, bonds, unit cell, basis set and string-keyed metadata.
//! - [`cell`] – Crystallographic unit cell (angles in radians).
//! - [`basis`] – Basis-set descriptor (type tag and SCF method only).
//! - [`types`] – Periodic table symbols.

pub mod atom;
pub mod basis;
pub mod cell;
pub mod molecule;
pub mod types;
