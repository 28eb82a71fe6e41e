use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotifork::{cli, config, error, types::PlaylistRef, utils, warning};

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
    /// Start the web front end
    Serve(ServeOptions),

    /// Copy a playlist into your account
    Fork(ForkOptions),

    /// Combine playlists into a new one
    Merge(MergeOptions),

    /// Find playlists by (partial) name
    Predict(PredictOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct TokenOption {
    /// Spotify access token of the acting user
    #[clap(long, env = "SPOTIFORK_ACCESS_TOKEN", hide_env_values = true)]
    pub token: String,
}

#[derive(Parser, Debug, Clone)]
pub struct ServeOptions {
    /// Open the front end in the default browser
    #[clap(long)]
    pub open: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct ForkOptions {
    /// Playlist id, spotify: URI or open.spotify.com link
    #[clap(long)]
    pub playlist: String,

    /// Id of the user owning the playlist
    #[clap(long)]
    pub owner: String,

    /// Make the new playlist public
    #[clap(long)]
    pub public: bool,

    #[clap(flatten)]
    pub auth: TokenOption,
}

#[derive(Parser, Debug, Clone)]
pub struct MergeOptions {
    /// Source playlist as PLAYLIST:OWNER; repeat in the desired order
    #[clap(long = "source", value_parser = utils::parse_source, required = true, num_args = 1)]
    pub sources: Vec<PlaylistRef>,

    /// Make the new playlist public
    #[clap(long)]
    pub public: bool,

    #[clap(flatten)]
    pub auth: TokenOption,
}

#[derive(Parser, Debug, Clone)]
pub struct PredictOptions {
    /// Partial playlist name
    #[clap(long)]
    pub name: String,

    /// Only search playlists of this user
    #[clap(long)]
    pub author: Option<String>,

    /// Offset into the results
    #[clap(long, default_value_t = 0)]
    pub offset: usize,

    #[clap(flatten)]
    pub auth: TokenOption,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load .env file. Err: {}", e);
    }

    let cli = Cli::parse();

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command_for_update();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    let config = match config::AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => error!("Cannot load configuration. Err: {}", e),
    };

    match cli.command {
        Command::Serve(opt) => cli::serve(config, opt.open).await,
        Command::Fork(opt) => {
            cli::fork(config, opt.auth.token, opt.playlist, opt.owner, opt.public).await
        }
        Command::Merge(opt) => cli::merge(config, opt.auth.token, opt.sources, opt.public).await,
        Command::Predict(opt) => {
            cli::predict(config, opt.auth.token, opt.name, opt.author, opt.offset).await
        }
        Command::Completions(_) => {}
    }
}
