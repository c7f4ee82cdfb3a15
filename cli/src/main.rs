mod commands;
mod terminal;

use commands::{CommandLine, Commands, estimate, generate};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.verbose);

    match commands.command {
        Commands::Generate(args) => {
            print::header("generating discovery configuration");
            generate::generate(&args.into_config())
        }
        Commands::Estimate { file } => {
            print::header("estimating discovery configuration");
            estimate::estimate(&file)
        }
    }
}
