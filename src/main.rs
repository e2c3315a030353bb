use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use vibefm::{
    cli,
    config::{self, Settings},
    error,
    spotify::{DEFAULT_HISTORY_LIMIT, MAX_HISTORY_LIMIT},
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify and print an access token
    Auth,

    /// Print the Spotify authorization URL
    LoginUrl,

    /// Run the HTTP gateway
    Serve,

    /// Show recently played tracks
    History(HistoryOptions),

    /// Recommend new songs based on recently played tracks
    Recommend(HistoryOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct HistoryOptions {
    /// Spotify access token
    #[clap(long, env = "SPOTIFY_ACCESS_TOKEN", hide_env_values = true)]
    pub token: String,

    /// Number of recently played items to request
    #[clap(
        long,
        default_value_t = DEFAULT_HISTORY_LIMIT,
        value_parser = clap::value_parser!(u32).range(1..=MAX_HISTORY_LIMIT as i64)
    )]
    pub limit: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command_for_update();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => error!(
            "{}\nAdd it to {} or export it.",
            e,
            config::env_path().display()
        ),
    };

    match cli.command {
        Command::Auth => cli::auth(&settings).await,
        Command::LoginUrl => cli::login_url(&settings),
        Command::Serve => cli::serve(&settings).await,
        Command::History(opt) => cli::history(&settings, &opt.token, opt.limit).await,
        Command::Recommend(opt) => cli::recommend(&settings, &opt.token, opt.limit).await,
        Command::Completions(_) => {}
    }
}
