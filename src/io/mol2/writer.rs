use crate::io::error::Error as IoError;
use crate::molecule::{Error, Molecule};
use std::io::Write;

/// Renders the full MOL2 document for `molecule`.
///
/// Blocks are produced in order, so the ATOM block always precedes the BOND
/// block that depends on it.
pub fn render(molecule: &Molecule) -> Result<String, Error> {
    let mut document = molecule.molecule_block();
    document.push('\n');
    document.push_str(&molecule.atom_block()?);
    document.push_str(&molecule.bond_block()?);
    document.push_str(&format!(
        "@<TRIPOS>SUBSTRUCTURE\n{:>6} {:<8} {:>5}\n",
        1,
        molecule.name(),
        1
    ));
    Ok(document)
}

/// Writes the full MOL2 document for `molecule`.
///
/// Nothing is written if any block fails.
pub fn write<W: Write>(mut writer: W, molecule: &Molecule) -> Result<(), Error> {
    let document = render(molecule)?;
    writer
        .write_all(document.as_bytes())
        .map_err(IoError::from)?;
    writer.flush().map_err(IoError::from)?;
    Ok(())
}
