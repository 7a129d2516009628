use clap::{Parser, Subcommand};
use slsgen::{
    commands::{
        config::{self, ConfigAction},
        generate,
    },
    init_tracing, logger, GlobalOpts,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "slsgen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Template manifest generator",
    long_about = "slsgen crawls a tree of example projects and writes the IDE template manifest."
)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(flatten)]
    global: GlobalOpts,

    /// Examples root holding one directory per category (overrides the config)
    examples_root: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect or create the generator configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logger::init_with_verbosity(cli.global.verbosity_level(), cli.global.no_stdout)
    {
        eprintln!("Warning: Failed to initialize logger: {}", e);
    }
    logger::set_quiet(cli.global.quiet);
    init_tracing();

    match cli.command {
        Some(Commands::Config { action }) => {
            if let Err(e) = config::handle_config(action, &cli.global) {
                logger::error(&format!("{:#}", e));
                std::process::exit(1);
            }
        }
        None => {
            if let Err(e) = generate::handle_generate(cli.examples_root, &cli.global) {
                logger::error(&format!("{:#}", e));
                logger::show_log_path();
                std::process::exit(1);
            }
        }
    }
}
