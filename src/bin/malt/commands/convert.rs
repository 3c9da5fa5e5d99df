use std::path::Path;

use anyhow::{Context, Result, bail};
use malt::{ChargeMethod, ConvertConfig, Molecule, MoleculeBuilder};

use crate::cli::ConvertArgs;
use crate::config::build_convert_config;
use crate::display::{
    Context as DisplayContext, Progress, print_element_distribution, print_structure_info,
};
use crate::io::{stdout_is_tty, write_mol2};
use crate::util::convert::{charge_method_display_name, sybyl_policy_display_name};

const TOTAL_STEPS: u8 = 2;

pub fn run_convert(args: ConvertArgs, ctx: DisplayContext) -> Result<()> {
    if args.pdb.is_none() && args.xyz.is_none() {
        bail!("No structure specified.\n\nUsage: malt convert -p <PDB> and/or -x <XYZ>");
    }
    if args.output.is_none() && stdout_is_tty() {
        bail!(
            "No output file specified and stdout is a terminal.\n\nUsage: malt convert -p <PDB> -o <OUTPUT> or pipe output."
        );
    }

    let config = build_convert_config(&args.charge, &args.qeq, &args.typing)?;

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Building molecule");
    let molecule = build_molecule(&args, config.clone()).context("Failed to build molecule")?;

    let build_substeps = build_substeps(&args, &config);
    let build_substeps_ref: Vec<&str> = build_substeps.iter().map(|s| s.as_str()).collect();
    progress.complete_step("Building molecule", &build_substeps_ref);

    if ctx.interactive {
        print_structure_info(
            &molecule,
            charge_method_display_name(&config.charge_method),
            sybyl_policy_display_name(config.sybyl_policy),
        );
        print_element_distribution(&molecule);
    }

    progress.step("Writing MOL2");
    let text = molecule
        .to_mol2()
        .with_context(|| format!("Failed to render molecule '{}'", molecule.name()))?;
    write_mol2(args.output.as_deref(), &text)?;

    let target = args
        .output
        .as_deref()
        .map(file_name)
        .unwrap_or_else(|| "stdout".to_string());
    progress.complete_step(
        "Writing MOL2",
        &[&format!(
            "{} atoms, {} bonds → {}",
            molecule.atom_count(),
            molecule.bond_count(),
            target
        )],
    );

    progress.finish("Conversion complete");

    Ok(())
}

fn build_molecule(args: &ConvertArgs, config: ConvertConfig) -> Result<Molecule, malt::Error> {
    let mut builder = MoleculeBuilder::new().config(config);
    if let Some(pdb) = &args.pdb {
        builder = builder.pdb(pdb);
    }
    if let Some(xyz) = &args.xyz {
        builder = builder.xyz(xyz);
    }
    if let Some(name) = &args.name {
        builder = builder.name(name);
    }
    if let Some(index) = args.index {
        builder = builder.index(index);
    }
    builder.build()
}

fn build_substeps(args: &ConvertArgs, config: &ConvertConfig) -> Vec<String> {
    let mut steps = Vec::new();

    match (&args.pdb, &args.xyz) {
        (Some(pdb), Some(xyz)) => steps.push(format!(
            "Read {} (coordinates) and {}",
            file_name(xyz),
            file_name(pdb)
        )),
        (Some(path), None) | (None, Some(path)) => {
            steps.push(format!("Read {}", file_name(path)))
        }
        (None, None) => {}
    }

    steps.push(format!(
        "Perceive bonds (tolerance {:.2} Å) and aromatic rings",
        config.perception.tolerance
    ));

    steps.push(match &config.charge_method {
        ChargeMethod::Gasteiger if config.gasteiger_params.is_some() => {
            "Compute charges (Gasteiger, custom parameters)".to_string()
        }
        ChargeMethod::Gasteiger => "Compute charges (Gasteiger)".to_string(),
        ChargeMethod::Qeq(qeq) => {
            format!("Compute charges (QEq, total: {:.1}e)", qeq.total_charge)
        }
        ChargeMethod::External(path) => format!("Load charges from {}", file_name(path)),
    });

    steps
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}
