use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Result, bail};
use malt::io::Format;

use crate::util::path::stem;

/// Structure files that describe one molecule.
#[derive(Debug, Default, PartialEq)]
pub struct InputPair {
    pub name: String,
    pub pdb: Option<PathBuf>,
    pub xyz: Option<PathBuf>,
}

/// Groups batch inputs by file stem (`m3.pdb` + `m3.xyz` → `m3`), sorted by name.
pub fn pair_inputs(inputs: &[PathBuf]) -> Result<Vec<InputPair>> {
    let mut pairs: BTreeMap<String, InputPair> = BTreeMap::new();

    for path in inputs {
        let name = stem(path);
        let pair = pairs.entry(name.clone()).or_insert_with(|| InputPair {
            name,
            ..Default::default()
        });
        let slot = match Format::from_path(path) {
            Some(Format::Pdb) => &mut pair.pdb,
            Some(Format::Xyz) => &mut pair.xyz,
            _ => bail!(
                "Cannot use '{}' as a structure input (expected .pdb or .xyz)",
                path.display()
            ),
        };
        if let Some(existing) = slot.replace(path.clone()) {
            bail!(
                "Duplicate input for molecule '{}': {} and {}",
                pair.name,
                existing.display(),
                path.display()
            );
        }
    }

    Ok(pairs.into_values().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(items: &[&str]) -> Vec<PathBuf> {
        items.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn pairs_pdb_and_xyz_by_stem() {
        let pairs = pair_inputs(&paths(&["in/m2.xyz", "in/m1.pdb", "in/m2.pdb"])).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].name, "m1");
        assert_eq!(pairs[0].pdb, Some(PathBuf::from("in/m1.pdb")));
        assert_eq!(pairs[0].xyz, None);
        assert_eq!(pairs[1].name, "m2");
        assert_eq!(pairs[1].xyz, Some(PathBuf::from("in/m2.xyz")));
        assert_eq!(pairs[1].pdb, Some(PathBuf::from("in/m2.pdb")));
    }

    #[test]
    fn rejects_unknown_extensions() {
        let err = pair_inputs(&paths(&["m1.sdf"])).unwrap_err();
        assert!(err.to_string().contains("m1.sdf"));
    }

    #[test]
    fn rejects_duplicate_structures() {
        let err = pair_inputs(&paths(&["a/m1.pdb", "b/m1.pdb"])).unwrap_err();
        assert!(err.to_string().contains("Duplicate"));
    }
}
