use std::fs;

use anyhow::{Context, Result, anyhow};
use malt::{ConvertConfig, PerceptionConfig};

use crate::cli;
use crate::util::convert::build_charge_method;

pub fn build_convert_config(
    charge: &cli::ChargeOptions,
    qeq: &cli::QeqSolverOptions,
    typing: &cli::TypingOptions,
) -> Result<ConvertConfig> {
    let charge_method = build_charge_method(charge, qeq).map_err(|e| anyhow!(e))?;

    if typing.bond_tolerance < 0.0 {
        anyhow::bail!("--tolerance must be non-negative (got {})", typing.bond_tolerance);
    }

    let gasteiger_params = typing
        .params
        .as_ref()
        .map(|path| {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read parameter file {}", path.display()))
        })
        .transpose()?;

    Ok(ConvertConfig {
        charge_method,
        sybyl_policy: typing.sybyl.into(),
        perception: PerceptionConfig {
            tolerance: typing.bond_tolerance,
        },
        gasteiger_params,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command};
    use clap::Parser;
    use malt::{ChargeMethod, SybylPolicy};

    fn convert_config(args: &[&str]) -> Result<ConvertConfig> {
        let cli = Cli::try_parse_from(args).unwrap();
        let Command::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        build_convert_config(&args.charge, &args.qeq, &args.typing)
    }

    #[test]
    fn defaults_to_gasteiger_and_strict_typing() {
        let config = convert_config(&["malt", "convert", "-p", "m1.pdb"]).unwrap();
        assert!(matches!(config.charge_method, ChargeMethod::Gasteiger));
        assert_eq!(config.sybyl_policy, SybylPolicy::Strict);
        assert!(config.gasteiger_params.is_none());
    }

    #[test]
    fn charges_file_selects_external_method() {
        let config =
            convert_config(&["malt", "convert", "-p", "m1.pdb", "--charges", "q.csv"]).unwrap();
        assert!(matches!(config.charge_method, ChargeMethod::External(p) if p.ends_with("q.csv")));
    }

    #[test]
    fn external_without_charges_file_is_rejected() {
        let err = convert_config(&["malt", "convert", "-p", "m1.pdb", "--charge", "external"])
            .unwrap_err();
        assert!(err.to_string().contains("--charges"));
    }

    #[test]
    fn qeq_carries_total_charge() {
        let config = convert_config(&[
            "malt",
            "convert",
            "-x",
            "m1.xyz",
            "--charge",
            "qeq",
            "--total-charge",
            "-1",
        ])
        .unwrap();
        let ChargeMethod::Qeq(qeq) = config.charge_method else {
            panic!("expected qeq");
        };
        assert_eq!(qeq.total_charge, -1.0);
    }

    #[test]
    fn unreadable_params_file_is_reported() {
        let err = convert_config(&[
            "malt",
            "convert",
            "-p",
            "m1.pdb",
            "--params",
            "/nonexistent/gasteiger.toml",
        ])
        .unwrap_err();
        assert!(err.to_string().contains("parameter file"));
    }
}
