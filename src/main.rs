use clap::Parser;

use recipe_guard::cli::{Cli, Commands};
use recipe_guard::commands::{run_check, run_init, run_list};

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::List => run_list(),
        Commands::Init(args) => run_init(args, &cli),
    };

    std::process::exit(exit_code);
}
