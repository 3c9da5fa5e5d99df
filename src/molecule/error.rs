//! Error types for molecule conversion.
//!
//! Every failure raised while building a [`Molecule`](super::Molecule) or
//! rendering its MOL2 blocks is an [`Error`]. Callers that only care about the
//! broad category can use [`Error::kind`].

use crate::model::types::{Element, Hybridization};
use thiserror::Error;

/// Broad failure category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed, missing or inconsistent input.
    Parse,
    /// An operation was called before its prerequisite.
    State,
    /// A requested record is absent from an otherwise valid source.
    Lookup,
}

/// Errors that can occur while converting a molecule to MOL2.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or parsing an input file failed.
    #[error(transparent)]
    Io(#[from] crate::io::Error),

    /// Neither a PDB nor an XYZ structure was supplied.
    #[error("no structure supplied: provide a PDB or an XYZ file")]
    MissingStructure,

    /// The structure input holds no atoms.
    #[error("structure contains no atoms")]
    EmptyStructure,

    /// External charges were requested without a charges file.
    #[error("external charges requested but no charges file was supplied")]
    MissingChargeSource,

    /// The molecule name does not encode a numeric index.
    ///
    /// External charges are looked up by index, derived from the name with
    /// its leading character removed (`m2` → 2).
    #[error("cannot derive a numeric index from molecule name '{0}'")]
    MissingIndex(String),

    /// The selected charges row does not hold one value per atom.
    #[error("charges row {row} has {found} values but the molecule has {expected} atoms")]
    ChargeCountMismatch {
        /// 1-based row in the charges file.
        row: usize,
        /// Number of atoms in the molecule.
        expected: usize,
        /// Number of values in the row.
        found: usize,
    },

    /// The charges file has fewer rows than the molecule index requires.
    #[error("charges file has {rows} rows, no row for molecule index {index}")]
    ChargeRowMissing {
        /// The molecule index looked up.
        index: usize,
        /// Number of rows present.
        rows: usize,
    },

    /// A non-aromatic carbon or nitrogen has no SYBYL type under the strict policy.
    #[error(
        "no SYBYL type for non-aromatic {element} atom {atom} ({hybridization}); \
         use the extended SYBYL policy to type it by hybridization"
    )]
    UnassignedSybylType {
        /// 0-based native index of the atom.
        atom: usize,
        /// Element of the atom.
        element: Element,
        /// Hybridization reported by the typer.
        hybridization: Hybridization,
    },

    /// The bond block was requested before a successful atom block.
    #[error("atom order not built: call atom_block() before bond_block()")]
    AtomOrderNotBuilt,

    /// Failed to parse Gasteiger parameters TOML.
    #[error("failed to parse Gasteiger parameters: {0}")]
    ParameterParse(#[from] toml::de::Error),

    /// No Gasteiger parameters for an element in a given hybridization.
    #[error("missing Gasteiger parameters for {element} ({hybridization})")]
    MissingParameter {
        /// Element symbol.
        element: Element,
        /// Hybridization that was looked up.
        hybridization: Hybridization,
    },

    /// Hybridization perception failed.
    #[error("atom typing failed: {0}")]
    Typing(String),

    /// QEq charge calculation failed.
    #[error("charge calculation failed: {0}")]
    ChargeCalculation(String),
}

impl From<dreid_typer::TyperError> for Error {
    fn from(e: dreid_typer::TyperError) -> Self {
        Error::Typing(e.to_string())
    }
}

impl From<cheq::CheqError> for Error {
    fn from(e: cheq::CheqError) -> Self {
        Error::ChargeCalculation(e.to_string())
    }
}

impl Error {
    /// Classifies this error as a parse, state or lookup failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::AtomOrderNotBuilt => ErrorKind::State,
            Error::ChargeRowMissing { .. } | Error::MissingParameter { .. } => ErrorKind::Lookup,
            _ => ErrorKind::Parse,
        }
    }

    pub(crate) fn missing_parameter(element: Element, hybridization: Hybridization) -> Self {
        Self::MissingParameter {
            element,
            hybridization,
        }
    }
}
