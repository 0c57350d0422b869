// ===== duelboard/src/main.rs =====
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use duelboard::config::BoardConfig;
use tracing::info;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Optional JSON file with config overrides (explicit flags still win).
    #[arg(global = true, short, long)]
    config: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Play(cmd::play::PlayArgs),
    Replay(cmd::replay::ReplayArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    // Parse raw matches first to distinguish user input from defaults,
    // then construct the typed CLI struct from them.
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    info!("🪙 Initializing duelboard...");

    let (mut config, cli_config_ref, sub_matches) = match &cli.command {
        Commands::Play(args) => (
            args.config.clone(),
            &args.config,
            matches.subcommand_matches("play").unwrap(),
        ),
        Commands::Replay(args) => (
            args.config.clone(),
            &args.config,
            matches.subcommand_matches("replay").unwrap(),
        ),
    };

    if let Some(path) = &cli.config {
        info!("⚖️  Loading config overrides from: {}", path);

        // File values form the base; explicit CLI flags overlay them.
        let mut file_config = BoardConfig::load_from_file(path);
        file_config.merge_from_cli(cli_config_ref, sub_matches);
        config = file_config;
    }

    match cli.command {
        Commands::Play(_) => cmd::play::run(config),
        Commands::Replay(args) => cmd::replay::run(args, config),
    }
}
