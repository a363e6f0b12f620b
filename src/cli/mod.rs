use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod generate;
mod init;

#[derive(Parser)]
#[command(
    name = "cg",
    version,
    about = "Generate a component from a template directory",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Component name (prompted for when omitted). `init` always runs the
    /// subcommand; enter a component called "init" at the prompt instead.
    name: Option<String>,

    /// Project directory holding cg.config.json [default: .]
    #[arg(long, short = 'C')]
    dir: Option<PathBuf>,

    /// Path to the configuration file [default: <dir>/cg.config.json]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Show the files that would be written without writing them
    #[arg(long)]
    dry_run: bool,

    /// List every written file
    #[arg(long, short)]
    verbose: bool,

    /// Show project information
    #[arg(long)]
    about: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a sample cg.config.json
    Init {
        /// Target directory [default: .]
        dir: Option<PathBuf>,
        /// Overwrite an existing configuration
        #[arg(long)]
        force: bool,
    },
}

pub fn run() {
    let cli = Cli::parse();

    if cli.about {
        print_about();
        return;
    }

    match cli.command {
        Some(Commands::Init { dir, force }) => init::run(dir, force),
        None => generate::run(generate::Options {
            name: cli.name,
            dir: cli.dir,
            config: cli.config,
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        }),
    }
}

fn print_about() {
    println!(
        "cg: Rust Component Generator\n\
         ├─ version:    {}\n\
         ├─ about:      {}\n\
         └─ licence:    {} https://www.apache.org/licenses/LICENSE-2.0",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_LICENSE"),
    );
}
