//! File I/O for molecular structures and partial charges.
//!
//! Structures are read from PDB (through `bio-forge`) or XYZ files into a bond-less
//! [`System`]; bonds are perceived afterwards by [`crate::perceive`]. External
//! charges come from a CSV file with one row per molecule, and the finished
//! [`Molecule`](crate::Molecule) is written out as a Tripos MOL2 document.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::model::system::System;

pub mod charges;
pub mod error;
pub mod mol2;
pub mod pdb;
pub mod util;
pub mod xyz;

pub use error::Error;
pub use util::{Identity, identity_from_path};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Pdb,
    Xyz,
    Mol2,
    Charges,
}

impl Format {
    /// Infers a format from a file extension; anything unrecognized is `None`.
    pub fn from_path(path: &Path) -> Option<Format> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "pdb" | "ent" => Some(Format::Pdb),
            "xyz" => Some(Format::Xyz),
            "mol2" => Some(Format::Mol2),
            "csv" => Some(Format::Charges),
            _ => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Pdb => write!(f, "PDB"),
            Format::Xyz => write!(f, "XYZ"),
            Format::Mol2 => write!(f, "MOL2"),
            Format::Charges => write!(f, "charges CSV"),
        }
    }
}

/// Reads atoms and coordinates from a structure source.
///
/// The returned [`System`] carries no bonds; connectivity is perceived from
/// geometry later so that PDB and XYZ inputs go through the same pipeline.
pub struct StructureReader<R: BufRead> {
    reader: R,
    format: Format,
}

impl<R: BufRead> StructureReader<R> {
    pub fn new(reader: R, format: Format) -> Self {
        Self { reader, format }
    }

    pub fn read(self) -> Result<System, Error> {
        match self.format {
            Format::Pdb => pdb::read(self.reader),
            Format::Xyz => xyz::read(self.reader),
            other => Err(Error::UnsupportedReadFormat(other)),
        }
    }
}

/// Opens `path` and reads it as `format`.
pub fn read_structure(path: &Path, format: Format) -> Result<System, Error> {
    let file = File::open(path)?;
    StructureReader::new(BufReader::new(file), format).read()
}
