use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "malt",
    about = "Convert PDB and XYZ structures into Tripos MOL2 files",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert one molecule (PDB and/or XYZ) to MOL2
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Convert many molecules, pairing PDB and XYZ inputs by file stem
    #[command(visible_alias = "b")]
    Batch(BatchArgs),
}

impl Command {
    pub fn output(&self) -> OutputOptions {
        match self {
            Command::Convert(args) => args.output_options,
            Command::Batch(args) => args.output_options,
        }
    }
}

/// Console output options shared by all commands.
#[derive(Args, Clone, Copy)]
pub struct OutputOptions {
    /// Suppress progress output (for scripting)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log perception and charge details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Charge options shared by convert and batch.
#[derive(Args)]
#[command(next_help_heading = "Charges")]
pub struct ChargeOptions {
    /// Charge calculation method
    #[arg(long = "charge", value_name = "METHOD", default_value = "gasteiger")]
    pub method: ChargeMethod,

    /// CSV of precomputed charges, one row per molecule (implies --charge external)
    #[arg(long = "charges", value_name = "FILE")]
    pub charges: Option<PathBuf>,

    /// Total molecular charge (for QEq constraint)
    #[arg(
        long = "total-charge",
        value_name = "Q",
        default_value = "0.0",
        allow_hyphen_values = true
    )]
    pub total_charge: f64,
}

/// QEq solver options (advanced tuning).
#[derive(Args)]
#[command(next_help_heading = "QEq Solver Options")]
pub struct QeqSolverOptions {
    /// Convergence tolerance for charge equilibration
    #[arg(long = "qeq-tolerance", value_name = "TOL", default_value = "1e-6")]
    pub tolerance: f64,

    /// Maximum iterations for QEq solver
    #[arg(long = "qeq-max-iter", value_name = "N", default_value = "100")]
    pub max_iterations: u32,

    /// Orbital screening parameter λ (Rappe–Goddard)
    #[arg(long = "qeq-lambda", value_name = "λ", default_value = "0.5")]
    pub lambda_scale: f64,

    /// Enable hydrogen SCF (nonlinear hardness update)
    #[arg(long = "qeq-hydrogen-scf", value_name = "BOOL", default_value = "true")]
    pub hydrogen_scf: bool,

    /// Basis function type for Coulomb integrals
    #[arg(long = "qeq-basis", value_name = "TYPE", default_value = "sto")]
    pub basis_type: BasisType,

    /// SCF damping strategy (none, fixed:<f>, auto, auto:<f>)
    #[arg(long = "qeq-damping", value_name = "STRATEGY", default_value = "auto")]
    pub damping: DampingStrategy,
}

/// Bond perception and atom typing options.
#[derive(Args)]
#[command(next_help_heading = "Perception and Typing")]
pub struct TypingOptions {
    /// SYBYL typing of non-aromatic carbon and nitrogen
    #[arg(long, value_name = "POLICY", default_value = "strict")]
    pub sybyl: SybylPolicy,

    /// Distance slack added to covalent radii when detecting bonds (Å)
    #[arg(long = "tolerance", value_name = "Å", default_value = "0.45")]
    pub bond_tolerance: f64,

    /// Custom Gasteiger parameters (TOML)
    #[arg(long, value_name = "FILE")]
    pub params: Option<PathBuf>,
}

#[derive(Args)]
pub struct ConvertArgs {
    /// PDB structure; also names the molecule
    #[arg(short, long, value_name = "FILE")]
    pub pdb: Option<PathBuf>,

    /// XYZ structure; preferred over the PDB for coordinates
    #[arg(short = 'x', long, value_name = "FILE")]
    pub xyz: Option<PathBuf>,

    /// Molecule name (default: input file stem)
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Row of this molecule in the charges CSV (default: derived from the name)
    #[arg(long, value_name = "N")]
    pub index: Option<usize>,

    /// Output MOL2 file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub output_options: OutputOptions,

    #[command(flatten)]
    pub charge: ChargeOptions,

    #[command(flatten)]
    pub qeq: QeqSolverOptions,

    #[command(flatten)]
    pub typing: TypingOptions,
}

#[derive(Args)]
pub struct BatchArgs {
    /// PDB and XYZ inputs; files sharing a stem form one molecule
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Directory receiving <name>.mol2 files
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: PathBuf,

    #[command(flatten)]
    pub output_options: OutputOptions,

    #[command(flatten)]
    pub charge: ChargeOptions,

    #[command(flatten)]
    pub qeq: QeqSolverOptions,

    #[command(flatten)]
    pub typing: TypingOptions,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum ChargeMethod {
    /// Gasteiger–Marsili PEOE
    #[default]
    Gasteiger,
    /// Charge equilibration
    Qeq,
    /// Row of the --charges CSV
    #[value(alias = "dft")]
    External,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Default)]
pub enum SybylPolicy {
    /// Reject non-aromatic carbon and nitrogen
    #[default]
    Strict,
    /// Type them by hybridization (C.3, N.2, N.pl3, ...)
    Extended,
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum BasisType {
    /// Gaussian-type orbitals (faster, approximate)
    Gto,
    /// Slater-type orbitals (exact)
    #[default]
    Sto,
}

#[derive(Clone, Debug)]
pub enum DampingStrategy {
    /// No damping (fastest, may not converge)
    None,
    /// Fixed damping factor (0 < d ≤ 1)
    Fixed(f64),
    /// Automatic adaptive damping
    Auto {
        /// Initial damping factor
        initial: f64,
    },
}

impl Default for DampingStrategy {
    fn default() -> Self {
        Self::Auto { initial: 0.5 }
    }
}

impl std::str::FromStr for DampingStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.to_lowercase();
        if s == "none" {
            Ok(Self::None)
        } else if s == "auto" {
            Ok(Self::default())
        } else if let Some(val) = s.strip_prefix("auto:") {
            let initial = parse_damping_factor(val)?;
            Ok(Self::Auto { initial })
        } else if let Some(val) = s.strip_prefix("fixed:") {
            Ok(Self::Fixed(parse_damping_factor(val)?))
        } else {
            Err(format!(
                "unknown damping strategy: '{}' (use none, auto, auto:<f>, or fixed:<f>)",
                s
            ))
        }
    }
}

fn parse_damping_factor(val: &str) -> Result<f64, String> {
    let factor = val
        .parse::<f64>()
        .map_err(|_| format!("invalid damping value: {}", val))?;
    if factor <= 0.0 || factor > 1.0 {
        return Err("damping factor must be in (0, 1]".into());
    }
    Ok(factor)
}

pub fn parse() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_convert_with_external_charges() {
        let cli = Cli::try_parse_from([
            "malt", "convert", "-p", "m2.pdb", "-x", "m2.xyz", "--charges", "q.csv", "-o",
            "m2.mol2",
        ])
        .unwrap();
        let Command::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.pdb, Some(PathBuf::from("m2.pdb")));
        assert_eq!(args.charge.charges, Some(PathBuf::from("q.csv")));
        assert_eq!(args.charge.method, ChargeMethod::Gasteiger);
        assert_eq!(args.typing.sybyl, SybylPolicy::Strict);
        assert_eq!(args.typing.bond_tolerance, 0.45);
    }

    #[test]
    fn parses_batch_inputs() {
        let cli = Cli::try_parse_from([
            "malt", "batch", "a/m1.pdb", "a/m1.xyz", "a/m2.pdb", "--out-dir", "out", "--sybyl",
            "extended", "-q",
        ])
        .unwrap();
        let Command::Batch(args) = cli.command else {
            panic!("expected batch");
        };
        assert_eq!(args.inputs.len(), 3);
        assert_eq!(args.out_dir, PathBuf::from("out"));
        assert_eq!(args.typing.sybyl, SybylPolicy::Extended);
        assert!(args.output_options.quiet);
    }

    #[test]
    fn parses_damping_strategies() {
        assert!(matches!("none".parse(), Ok(DampingStrategy::None)));
        assert!(matches!(
            "fixed:0.3".parse(),
            Ok(DampingStrategy::Fixed(f)) if f == 0.3
        ));
        assert!(matches!(
            "AUTO:0.7".parse(),
            Ok(DampingStrategy::Auto { initial }) if initial == 0.7
        ));
        assert!("fixed:1.5".parse::<DampingStrategy>().is_err());
        assert!("sometimes".parse::<DampingStrategy>().is_err());
    }
}
