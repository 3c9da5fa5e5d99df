use std::fs;

use anyhow::{Context, Result, bail};
use malt::{ConvertConfig, MoleculeBuilder};

use crate::cli::BatchArgs;
use crate::config::build_convert_config;
use crate::display::{BatchBar, Context as DisplayContext, print_batch_summary};
use crate::io::{InputPair, pair_inputs, write_mol2};
use crate::util::path::mol2_path;

pub fn run_batch(args: BatchArgs, ctx: DisplayContext) -> Result<()> {
    let config = build_convert_config(&args.charge, &args.qeq, &args.typing)?;
    let pairs = pair_inputs(&args.inputs)?;

    fs::create_dir_all(&args.out_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            args.out_dir.display()
        )
    })?;

    let bar = ctx.interactive.then(|| BatchBar::new(pairs.len()));
    let mut rows = Vec::with_capacity(pairs.len());
    let mut failed = 0usize;

    for pair in &pairs {
        if let Some(bar) = &bar {
            bar.start(&pair.name);
        }

        match convert_one(pair, &config, &args) {
            Ok(counts) => {
                if let Some(bar) = &bar {
                    bar.done(&pair.name, None);
                }
                rows.push((pair.name.clone(), Some(counts)));
            }
            Err(e) => {
                failed += 1;
                let message = format!("{:#}", e);
                match &bar {
                    Some(bar) => bar.done(&pair.name, Some(&message)),
                    None => log::error!("{}: {}", pair.name, message),
                }
                rows.push((pair.name.clone(), None));
            }
        }
    }

    if let Some(bar) = bar {
        bar.finish(&format!(
            "{} of {} molecules converted",
            pairs.len() - failed,
            pairs.len()
        ));
        print_batch_summary(&rows);
    }

    if failed > 0 {
        bail!("{} of {} molecules failed to convert", failed, pairs.len());
    }

    Ok(())
}

fn convert_one(pair: &InputPair, config: &ConvertConfig, args: &BatchArgs) -> Result<(usize, usize)> {
    let mut builder = MoleculeBuilder::new().config(config.clone()).name(&pair.name);
    if let Some(pdb) = &pair.pdb {
        builder = builder.pdb(pdb);
    }
    if let Some(xyz) = &pair.xyz {
        builder = builder.xyz(xyz);
    }

    let molecule = builder.build()?;
    let text = molecule.to_mol2()?;
    let path = mol2_path(&args.out_dir, molecule.name());
    write_mol2(Some(path.as_path()), &text)?;

    log::info!("wrote {}", path.display());
    Ok((molecule.atom_count(), molecule.bond_count()))
}
