use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use smart_conserve::cmd;

/// Household energy usage simulator
///
/// smart-conserve simulates a week of hourly power readings, summarizes
/// average, peak and lowest usage, and suggests ways to conserve energy.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a week of usage and report insights (default)
    Run {
        /// Fixed RNG seed for a reproducible simulation
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output the report as JSON (logs move to stderr)
        #[arg(long)]
        json: bool,
    },

    /// Write a starter .smart-conserve.toml
    Init,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Run { seed, json }) => cmd::cmd_run(cmd::RunArgs {
            seed,
            json,
            quiet: cli.quiet,
        }),
        Some(Commands::Init) => cmd::cmd_init(),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(shell, &mut Cli::command());
            Ok(())
        }
        None => cmd::cmd_run(cmd::RunArgs {
            quiet: cli.quiet,
            ..Default::default()
        }),
    };

    // Failures are reported, never turned into a non-zero exit code
    if let Err(e) = result {
        use smart_conserve::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert()
    }
}
