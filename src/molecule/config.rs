//! Configuration types for molecule conversion.
//!
//! - [`ConvertConfig`] — Main configuration struct
//! - [`ChargeMethod`] — Charge source selection
//! - [`QeqConfig`] — QEq charge equilibration settings
//! - [`SybylPolicy`] — Typing of non-aromatic carbon and nitrogen

use crate::perceive::PerceptionConfig;
use std::path::PathBuf;

pub use cheq::{BasisType, DampingStrategy, SolverOptions};

/// Main configuration for converting a structure into MOL2.
///
/// # Examples
///
/// ```
/// use malt::{ChargeMethod, ConvertConfig, QeqConfig, SybylPolicy};
///
/// // Gasteiger charges, strict SYBYL typing
/// let default = ConvertConfig::default();
///
/// // QEq charges for an anion, hybridization-based typing
/// let custom = ConvertConfig {
///     charge_method: ChargeMethod::Qeq(QeqConfig {
///         total_charge: -1.0,
///         ..Default::default()
///     }),
///     sybyl_policy: SybylPolicy::Extended,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConvertConfig {
    /// Source of the per-atom partial charges.
    pub charge_method: ChargeMethod,

    /// How non-aromatic carbon and nitrogen atoms are typed.
    pub sybyl_policy: SybylPolicy,

    /// Bond perception settings.
    pub perception: PerceptionConfig,

    /// Custom Gasteiger parameters in TOML format.
    ///
    /// If `None`, uses the embedded `gasteiger.params.toml`.
    pub gasteiger_params: Option<String>,
}

/// Method for obtaining partial atomic charges.
#[derive(Debug, Clone, Default)]
pub enum ChargeMethod {
    /// Gasteiger–Marsili partial equalization of orbital electronegativity.
    #[default]
    Gasteiger,

    /// Charge equilibration (QEq) over the whole molecule.
    Qeq(QeqConfig),

    /// Precomputed charges read from a CSV file, one row per molecule.
    ///
    /// The row is selected by the molecule index (`m2` → row 2).
    External(PathBuf),
}

impl ChargeMethod {
    /// Charge-type literal written on the last line of the MOLECULE block.
    pub fn charge_type(&self) -> ChargeType {
        match self {
            ChargeMethod::Gasteiger => ChargeType::Gasteiger,
            ChargeMethod::Qeq(_) => ChargeType::Qeq,
            ChargeMethod::External(_) => ChargeType::External,
        }
    }
}

/// Configuration for QEq charge equilibration.
#[derive(Debug, Clone)]
pub struct QeqConfig {
    /// Target total charge in elementary charge units. Default is `0.0`.
    pub total_charge: f64,

    /// QEq solver options.
    pub solver_options: SolverOptions,
}

impl Default for QeqConfig {
    fn default() -> Self {
        Self {
            total_charge: 0.0,
            solver_options: SolverOptions::default(),
        }
    }
}

/// Typing policy for carbon and nitrogen atoms outside aromatic rings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SybylPolicy {
    /// Fail with [`Error::UnassignedSybylType`](crate::Error::UnassignedSybylType).
    #[default]
    Strict,

    /// Type by hybridization: `C.1/C.2/C.3`, `N.1/N.2/N.3`, `N.pl3`.
    Extended,
}

/// Origin of the charges stored in a molecule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeType {
    Gasteiger,
    Qeq,
    /// Externally computed charges, conventionally from DFT.
    External,
}

impl ChargeType {
    /// The literal written in the MOLECULE block.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChargeType::Gasteiger => "GASTEIGER",
            ChargeType::Qeq => "USER_CHARGES",
            ChargeType::External => "DFT",
        }
    }
}

impl std::fmt::Display for ChargeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_gasteiger_and_strict_typing() {
        let config = ConvertConfig::default();
        assert!(matches!(config.charge_method, ChargeMethod::Gasteiger));
        assert_eq!(config.sybyl_policy, SybylPolicy::Strict);
        assert_eq!(config.perception.tolerance, 0.45);
        assert!(config.gasteiger_params.is_none());
    }

    #[test]
    fn qeq_config_defaults_to_neutral() {
        let qeq = QeqConfig::default();
        assert_eq!(qeq.total_charge, 0.0);
    }

    #[test]
    fn charge_type_literals() {
        assert_eq!(ChargeMethod::Gasteiger.charge_type().as_str(), "GASTEIGER");
        assert_eq!(
            ChargeMethod::External(PathBuf::from("c.csv"))
                .charge_type()
                .to_string(),
            "DFT"
        );
        assert_eq!(
            ChargeMethod::Qeq(QeqConfig::default()).charge_type().as_str(),
            "USER_CHARGES"
        );
    }
}
