use crate::model::{atom::Atom, system::System, types::Element};
use bio_forge as bf;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("encountered an 'Unknown' element from bio-forge which is not supported")]
    UnsupportedElement,
    #[error("element symbol '{0}' from bio-forge is not a known element")]
    UnrecognizedSymbol(String),
}

/// Name and numeric index of a molecule, derived from its input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    /// 1-based row of this molecule in an external charges file.
    pub index: Option<usize>,
}

impl Identity {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let index = index_from_name(&name);
        Self { name, index }
    }
}

/// Derives the molecule identity from a structure path.
///
/// The name is the file stem (`data/m12.pdb` → `m12`); the index is the
/// stem with its single leading character dropped (`m12` → 12).
pub fn identity_from_path(path: &Path) -> Identity {
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    Identity::new(name)
}

fn index_from_name(name: &str) -> Option<usize> {
    let mut chars = name.chars();
    chars.next()?;
    chars.as_str().parse().ok()
}

pub fn from_bio_structure(bio_struct: &bf::Structure) -> Result<System, ConversionError> {
    let mut system = System::new();
    system.atoms.reserve(bio_struct.atom_count());

    for (_, _, bio_atom) in bio_struct.iter_atoms_with_context() {
        system.atoms.push(Atom::new(
            convert_element_from_bf(bio_atom.element)?,
            [bio_atom.pos.x, bio_atom.pos.y, bio_atom.pos.z],
        ));
    }

    Ok(system)
}

fn convert_element_from_bf(e: bf::Element) -> Result<Element, ConversionError> {
    if matches!(e, bf::Element::Unknown) {
        return Err(ConversionError::UnsupportedElement);
    }

    Element::from_symbol_loose(e.symbol())
        .map_err(|_| ConversionError::UnrecognizedSymbol(e.symbol().to_string()))
}
