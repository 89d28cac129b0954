use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use lineuptunes::{cli, config, error};

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
    /// Build a playlist from a festival lineup
    Build(BuildArgs),

    /// Run the local callback and invocation server
    Serve,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct BuildArgs {
    /// JSON event with playlist_name, auth_code, number_of_songs_to_add and artist_list (`-` for stdin)
    #[clap(long, conflicts_with_all = ["name", "artist", "artists_file", "auth_code", "songs"])]
    pub event: Option<PathBuf>,

    /// Playlist name, " - Unofficial" is appended
    #[clap(long, required_unless_present = "event")]
    pub name: Option<String>,

    /// Number of top tracks to add per artist
    #[clap(long, default_value_t = 5)]
    pub songs: usize,

    /// Artist to add; can be repeated
    #[clap(long)]
    pub artist: Vec<String>,

    /// File with one artist per line
    #[clap(long)]
    pub artists_file: Option<PathBuf>,

    /// Authorization code; the browser consent flow runs when omitted
    #[clap(long)]
    pub auth_code: Option<String>,

    /// Number of artists looked up at the same time
    #[clap(long, default_value_t = 1)]
    pub concurrency: usize,

    /// Drop artists whose search request returns an error status
    #[clap(long)]
    pub skip_failed_searches: bool,

    /// Print the report as JSON
    #[clap(long)]
    pub json: bool,
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

    match cli.command {
        Command::Build(args) => {
            cli::build(cli::BuildOptions {
                event: args.event,
                name: args.name,
                songs: args.songs,
                artists: args.artist,
                artists_file: args.artists_file,
                auth_code: args.auth_code,
                concurrency: args.concurrency,
                skip_failed_searches: args.skip_failed_searches,
                json: args.json,
            })
            .await
        }
        Command::Serve => cli::serve().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
