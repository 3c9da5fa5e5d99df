use crate::io::{error::Error, util};
use crate::model::system::System;
use bio_forge as bf;
use std::io::BufRead;

/// Reads the atoms of a PDB file in record order.
///
/// Hydrogens and hetero residues are kept as written; no cleaning, repair or
/// protonation is applied since small-molecule inputs are taken verbatim.
pub fn read<R: BufRead>(reader: R) -> Result<System, Error> {
    let bio_context = bf::io::IoContext::new_default();
    let bio_struct = bf::io::read_pdb_structure(reader, &bio_context)?;
    let system = util::from_bio_structure(&bio_struct)?;

    log::debug!("read {} atoms from PDB input", system.atom_count());

    Ok(system)
}
