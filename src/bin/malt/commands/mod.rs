mod batch;
mod convert;

use batch::run_batch;
use convert::run_convert;

use anyhow::Result;

use crate::cli::Command;
use crate::display::Context;

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Convert(args) => run_convert(args, ctx),
        Command::Batch(args) => run_batch(args, ctx),
    }
}
