use anyhow::Context;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use timeline_core::{
    config::{OverflowPolicy, TimelineConfig},
    session::Session,
};

#[derive(Parser)]
#[command(author, version, about, long_about=None)]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    /// Path to config file; defaults to ~/.timeline/timeline.toml
    config: Option<PathBuf>,

    #[arg(long)]
    /// Maximum number of tweets on the timeline
    capacity: Option<usize>,

    #[arg(long)]
    /// Maximum length of a tweet, in characters
    max_post_len: Option<usize>,

    #[arg(long, action = ArgAction::SetTrue)]
    /// Refuse tweets that are too long instead of cutting them short
    reject_long: bool,

    #[arg(long, action = ArgAction::SetTrue)]
    /// Start with an empty timeline
    no_seed: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    /// Select if the timeline should be displayed as json
    json: bool,
}

impl Cli {
    /// Flags given on the command line win over the config file.
    fn apply_overrides(&self, config: &mut TimelineConfig) {
        if let Some(capacity) = self.capacity {
            config.capacity = capacity;
        }
        if let Some(max_post_len) = self.max_post_len {
            config.max_post_len = max_post_len;
        }
        if self.reject_long {
            config.overflow = OverflowPolicy::Reject;
        }
        if self.no_seed {
            config.seed = false;
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config =
        TimelineConfig::load(cli.config.as_deref()).context("Unable to load config")?;
    cli.apply_overrides(&mut config);
    config.validate()?;
    log::info!("Starting timeline with {:?}", config);

    let mut session = Session::new(&config);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    timeline_cli::run(&mut session, &mut stdin.lock(), &mut stdout.lock(), cli.json)
}
