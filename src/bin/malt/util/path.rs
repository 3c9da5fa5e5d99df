use std::path::{Path, PathBuf};

/// `<dir>/<name>.mol2`
pub fn mol2_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}.mol2"))
}

/// File stem used to pair PDB and XYZ inputs of one molecule.
pub fn stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mol2_path_joins_name() {
        assert_eq!(
            mol2_path(Path::new("out"), "m3"),
            PathBuf::from("out/m3.mol2")
        );
    }

    #[test]
    fn stem_drops_directory_and_extension() {
        assert_eq!(stem(Path::new("inputs/m3.xyz")), "m3");
        assert_eq!(stem(Path::new("m3.pdb")), "m3");
    }
}
