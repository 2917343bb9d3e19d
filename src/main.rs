//! CLI entry point for compiling autotile sheets into variant strips

use autostrip::io::cli::{Cli, FileProcessor};
use autostrip::io::logging::init_logging;
use clap::Parser;

fn main() -> autostrip::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);
    let mut processor = FileProcessor::new(cli);
    processor.process().map(|_| ())
}
