use super::error::Error;
use crate::model::system::System;

/// The structure inputs supplied for a molecule.
///
/// When both are present the XYZ structure is authoritative for atoms,
/// coordinates and charge calculation.
#[derive(Debug, Clone)]
pub enum StructureSource {
    Xyz(System),
    Pdb(System),
    Both { xyz: System, pdb: System },
}

impl StructureSource {
    /// # Errors
    ///
    /// Returns [`Error::MissingStructure`] if neither structure is given.
    pub fn from_parts(xyz: Option<System>, pdb: Option<System>) -> Result<Self, Error> {
        match (xyz, pdb) {
            (Some(xyz), Some(pdb)) => Ok(Self::Both { xyz, pdb }),
            (Some(xyz), None) => Ok(Self::Xyz(xyz)),
            (None, Some(pdb)) => Ok(Self::Pdb(pdb)),
            (None, None) => Err(Error::MissingStructure),
        }
    }

    /// The authoritative structure.
    pub fn resolve(self) -> System {
        match self {
            Self::Xyz(system) | Self::Pdb(system) => system,
            Self::Both { xyz, pdb } => {
                if xyz.atom_count() != pdb.atom_count() {
                    log::warn!(
                        "XYZ has {} atoms but PDB has {}; using the XYZ structure",
                        xyz.atom_count(),
                        pdb.atom_count()
                    );
                }
                xyz
            }
        }
    }
}
