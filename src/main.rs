use clap::{Parser, Subcommand};
use generate::RelayGenerator;
use resolution::Rank;

mod error;
mod instance;
mod generate;
mod logging;
mod resolution;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct RelaySchedTools {
    /// Increase logging verbosity (-v, -vv, -vvv)
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Generate(RelayGenerator),
    Rank(Rank)
}

fn main() {
    let cli = RelaySchedTools::parse();
    logging::init_logging(cli.verbose);

    let result = match cli.command {
        Command::Generate(generate) => generate.generate(),
        Command::Rank(rank) => rank.rank()
    };

    if let Err(error) = result {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}
