use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "interview")]
#[command(about = "Interview exercise runner", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Array problems
    Arrays {
        /// Problem name to run
        problem: String,
    },
    /// Two-pointer problems
    TwoPointers {
        /// Problem name to run
        problem: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Arrays { problem } => {
            interview::arrays::tasks().run(&problem);
        }
        Commands::TwoPointers { problem } => {
            interview::two_pointers::tasks().run(&problem);
        }
    }
}
