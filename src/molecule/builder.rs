use super::config::ConvertConfig;
use super::error::Error;
use super::source::StructureSource;
use super::Molecule;
use crate::io::{Format, Identity, identity_from_path, read_structure};
use std::path::{Path, PathBuf};

/// Step-by-step construction of a [`Molecule`] from files.
///
/// The name defaults to the PDB file stem, or the XYZ file stem when no PDB
/// is given; the index defaults to the name without its first character.
///
/// ```no_run
/// use malt::{ChargeMethod, ConvertConfig, MoleculeBuilder};
///
/// let molecule = MoleculeBuilder::new()
///     .pdb("inputs/m4.pdb")
///     .xyz("inputs/m4.xyz")
///     .config(ConvertConfig {
///         charge_method: ChargeMethod::External("charges.csv".into()),
///         ..Default::default()
///     })
///     .build()?;
/// assert_eq!(molecule.index(), Some(4));
/// # Ok::<(), malt::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MoleculeBuilder {
    pdb: Option<PathBuf>,
    xyz: Option<PathBuf>,
    name: Option<String>,
    index: Option<usize>,
    config: ConvertConfig,
}

impl MoleculeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pdb(mut self, path: impl AsRef<Path>) -> Self {
        self.pdb = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn xyz(mut self, path: impl AsRef<Path>) -> Self {
        self.xyz = Some(path.as_ref().to_path_buf());
        self
    }

    /// Overrides the name derived from the input paths.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Overrides the index derived from the name.
    pub fn index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    pub fn config(mut self, config: ConvertConfig) -> Self {
        self.config = config;
        self
    }

    /// Reads the inputs and builds the molecule.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingStructure`] without a PDB or XYZ path, an
    /// [`Error::Io`] if an input cannot be read, and any error from
    /// [`Molecule::new`].
    pub fn build(self) -> Result<Molecule, Error> {
        let identity = self.identity()?;

        let pdb = self
            .pdb
            .as_deref()
            .map(|path| read_structure(path, Format::Pdb))
            .transpose()?;
        let xyz = self
            .xyz
            .as_deref()
            .map(|path| read_structure(path, Format::Xyz))
            .transpose()?;
        let source = StructureSource::from_parts(xyz, pdb)?;

        Molecule::new(identity, source, &self.config)
    }

    fn identity(&self) -> Result<Identity, Error> {
        let mut identity = match (&self.name, self.pdb.as_deref().or(self.xyz.as_deref())) {
            (Some(name), _) => Identity::new(name.clone()),
            (None, Some(path)) => identity_from_path(path),
            (None, None) => return Err(Error::MissingStructure),
        };
        if let Some(index) = self.index {
            identity.index = Some(index);
        }
        Ok(identity)
    }
}
