mod banner;
mod error;
mod progress;
mod tables;

pub use banner::{banner_for_help, print_banner};
pub use error::print_error;
pub use progress::{BatchBar, Progress};
pub use tables::{print_batch_summary, print_element_distribution, print_structure_info};

use crate::cli::OutputOptions;

#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub interactive: bool,
}

impl Context {
    pub fn detect() -> Self {
        Self {
            interactive: crate::io::stderr_is_tty(),
        }
    }

    pub fn with_quiet(self, quiet: bool) -> Self {
        if quiet {
            Self { interactive: false }
        } else {
            self
        }
    }
}

/// Routes library `log` records to stderr; `RUST_LOG` overrides the flags.
pub fn init_logging(output: OutputOptions) {
    let level = if output.quiet {
        "error"
    } else if output.verbose {
        "debug"
    } else {
        "warn"
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
