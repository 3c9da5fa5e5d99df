use malt::{BasisType as LibBasisType, DampingStrategy as LibDampingStrategy};
use malt::{ChargeMethod as LibChargeMethod, QeqConfig, SolverOptions, SybylPolicy as LibSybylPolicy};

use crate::cli;

pub fn build_charge_method(
    charge: &cli::ChargeOptions,
    qeq: &cli::QeqSolverOptions,
) -> Result<LibChargeMethod, String> {
    match (charge.method, &charge.charges) {
        (cli::ChargeMethod::External, None) => {
            Err("--charge external requires a --charges CSV file".into())
        }
        (cli::ChargeMethod::Qeq, Some(_)) => {
            Err("--charges cannot be combined with --charge qeq".into())
        }
        (cli::ChargeMethod::Qeq, None) => Ok(LibChargeMethod::Qeq(QeqConfig {
            total_charge: charge.total_charge,
            solver_options: build_solver_options(qeq),
        })),
        (_, Some(path)) => Ok(LibChargeMethod::External(path.clone())),
        (cli::ChargeMethod::Gasteiger, None) => Ok(LibChargeMethod::Gasteiger),
    }
}

fn build_solver_options(qeq: &cli::QeqSolverOptions) -> SolverOptions {
    SolverOptions {
        tolerance: qeq.tolerance,
        max_iterations: qeq.max_iterations,
        lambda_scale: qeq.lambda_scale,
        hydrogen_scf: qeq.hydrogen_scf,
        basis_type: qeq.basis_type.into(),
        damping: (&qeq.damping).into(),
    }
}

impl From<cli::BasisType> for LibBasisType {
    fn from(b: cli::BasisType) -> Self {
        match b {
            cli::BasisType::Gto => Self::Gto,
            cli::BasisType::Sto => Self::Sto,
        }
    }
}

impl From<&cli::DampingStrategy> for LibDampingStrategy {
    fn from(d: &cli::DampingStrategy) -> Self {
        match d {
            cli::DampingStrategy::None => Self::None,
            cli::DampingStrategy::Fixed(f) => Self::Fixed(*f),
            cli::DampingStrategy::Auto { initial } => Self::Auto { initial: *initial },
        }
    }
}

impl From<cli::SybylPolicy> for LibSybylPolicy {
    fn from(p: cli::SybylPolicy) -> Self {
        match p {
            cli::SybylPolicy::Strict => Self::Strict,
            cli::SybylPolicy::Extended => Self::Extended,
        }
    }
}

pub fn charge_method_display_name(method: &LibChargeMethod) -> &'static str {
    match method {
        LibChargeMethod::Gasteiger => "Gasteiger",
        LibChargeMethod::Qeq(_) => "QEq",
        LibChargeMethod::External(_) => "External CSV",
    }
}

pub fn sybyl_policy_display_name(policy: LibSybylPolicy) -> &'static str {
    match policy {
        LibSybylPolicy::Strict => "Strict",
        LibSybylPolicy::Extended => "Extended",
    }
}
