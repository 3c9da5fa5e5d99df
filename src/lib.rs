//! A pure Rust converter from PDB and XYZ structures to Tripos MOL2 files.
//! It perceives bonds and aromaticity from coordinates, assigns SYBYL atom types,
//! and attaches partial charges computed by the Gasteiger–Marsili scheme, by QEq,
//! or read from an external table of precomputed charges.
//!
//! # Features
//!
//! - **Structure input** — PDB files through `bio-forge` and plain XYZ files;
//!   when both are given for one molecule, the XYZ coordinates win
//! - **Bond perception** — Covalent-radius connectivity, valence-driven bond
//!   orders and Hückel ring aromaticity
//! - **Charges** — Gasteiger–Marsili with embedded (or custom TOML) parameters,
//!   QEq through `cheq`, or a CSV row selected by the molecule index
//! - **MOL2 output** — MOLECULE, ATOM and BOND blocks with atoms grouped by
//!   element and bonds sorted by type
//!
//! # Quick Start
//!
//! ```
//! use malt::{Atom, ConvertConfig, Element, Identity, Molecule, StructureSource, System};
//!
//! // Water, as read from an XYZ file named m1.xyz
//! let mut system = System::new();
//! system.atoms.push(Atom::new(Element::O, [0.0, 0.0, 0.0]));
//! system.atoms.push(Atom::new(Element::H, [0.9572, 0.0, 0.0]));
//! system.atoms.push(Atom::new(Element::H, [-0.2400, 0.9266, 0.0]));
//!
//! let water = Molecule::new(
//!     Identity::new("m1"),
//!     StructureSource::Xyz(system),
//!     &ConvertConfig::default(),
//! )?;
//!
//! assert_eq!(
//!     water.molecule_block(),
//!     "@<TRIPOS>MOLECULE\nm1\n3 2 1 0 0\nSMALL\nGASTEIGER\n"
//! );
//!
//! // Oxygen is written first, then the hydrogens
//! let atoms = water.atom_block()?;
//! assert!(atoms.lines().nth(1).unwrap().contains("O1"));
//!
//! // Bond endpoints refer to ATOM rows
//! let bonds = water.bond_block()?;
//! assert_eq!(bonds.lines().count(), 3);
//! # Ok::<(), malt::Error>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — PDB/XYZ readers, external charge rows, MOL2 writer
//! - [`perceive`] — Bond and aromaticity perception from coordinates
//! - [`Molecule`] — The converter and its three block formatters
//! - [`ConvertConfig`] — Charge method, SYBYL policy and perception settings
//!
//! # Data Types
//!
//! - [`System`] — Atoms plus perceived bonds
//! - [`Atom`] — Single atom with element and Cartesian coordinates
//! - [`Bond`] — Bond between two atoms with bond order
//! - [`Element`] — Chemical element (H through Og)
//! - [`BondOrder`] — Bond order (Single, Double, Triple, Aromatic)
//! - [`Hybridization`] — SP, SP2, SP3, Resonant or Unknown
//! - [`AtomOrder`] — Native atom index ↔ ATOM row table
//!
//! # Errors
//!
//! Every fallible operation returns [`Error`]; [`Error::kind`] sorts failures
//! into [`ErrorKind::Parse`], [`ErrorKind::State`] and [`ErrorKind::Lookup`].

mod model;
mod molecule;

pub mod io;
pub mod perceive;

pub use model::atom::Atom;
pub use model::system::{Bond, System};
pub use model::types::{BondOrder, Element, Hybridization, ParseElementError};

pub use molecule::{
    AtomOrder, BasisType, ChargeMethod, ChargeType, ConvertConfig, DampingStrategy, Error,
    ErrorKind, Molecule, MoleculeBuilder, QeqConfig, SolverOptions, StructureSource, SybylPolicy,
};

pub use io::{Identity, identity_from_path};
pub use perceive::PerceptionConfig;
