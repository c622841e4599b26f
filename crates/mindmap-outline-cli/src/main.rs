use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use mindmap_outline_config::Config;
use mindmap_outline_engine::{ParseOptions, TreeNode, parse_with, render_cards, render_outline};
use std::{
    io::{self, Read},
    path::{Path, PathBuf},
};

/// Split a markdown outline into a mind-map tree.
#[derive(Debug, Parser)]
#[command(name = "mindmap-outline", version, about)]
struct Cli {
    /// Markdown file to parse. Reads stdin when omitted or `-`.
    file: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Outline)]
    format: Format,

    /// Break list items longer than the word limit into sentence chains.
    #[arg(long)]
    split_long_items: bool,

    /// Word count a list item must exceed before it is split.
    #[arg(long, value_name = "N")]
    word_limit: Option<usize>,

    /// Nest indented plain lines under the list item above them.
    #[arg(long)]
    continuations: bool,

    /// Config file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the effective parser options to the config file and exit.
    #[arg(long)]
    save_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Indented bullet outline.
    Outline,
    /// The forest as JSON.
    Json,
    /// One line per node showing the card it becomes.
    Cards,
}

impl Cli {
    /// Applies command-line overrides on top of the configured parser options.
    fn parse_options(&self, config: Config) -> ParseOptions {
        let mut options = config.parser;
        if self.split_long_items {
            options.split_long_items = true;
        }
        if let Some(limit) = self.word_limit {
            options.long_item_word_limit = limit;
        }
        if self.continuations {
            options.list_continuations = true;
        }
        options
    }
}

/// Loads the config file. A missing explicit file is an error only when `required`.
fn load_config(explicit: Option<&Path>, required: bool) -> Result<Config> {
    match explicit {
        Some(path) => {
            let path = Config::expand_path(path);
            match Config::load_from_path(&path)? {
                Some(config) => Ok(config),
                None if required => bail!("Config file not found: {}", path.display()),
                None => Ok(Config::default()),
            }
        }
        None => {
            let config = Config::load()?;
            if config.is_none() {
                log::debug!(
                    "No config file at {}, using defaults",
                    Config::config_path().display()
                );
            }
            Ok(config.unwrap_or_default())
        }
    }
}

/// Saves `parser` to the explicit config path, or the default one, and returns where it went.
fn save_config(explicit: Option<&Path>, parser: ParseOptions) -> Result<PathBuf> {
    let config = Config { parser };
    match explicit {
        Some(path) => {
            let path = Config::expand_path(path);
            config.save_to_path(&path)?;
            Ok(path)
        }
        None => {
            config.save()?;
            Ok(Config::config_path())
        }
    }
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read stdin")?;
            Ok(content)
        }
    }
}

fn render(forest: &[TreeNode], format: Format) -> Result<String> {
    Ok(match format {
        Format::Outline => render_outline(forest),
        Format::Json => serde_json::to_string_pretty(forest)?,
        Format::Cards => render_cards(forest),
    })
}

fn main() -> Result<()> {
    // RUST_LOG overrides the default level
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref(), !cli.save_config)?;
    let options = cli.parse_options(config);
    log::debug!("Parser options: {options:?}");

    if cli.save_config {
        let path = save_config(cli.config.as_deref(), options)?;
        log::info!("Saved parser options to {}", path.display());
        return Ok(());
    }

    let markdown = read_input(cli.file.as_deref())?;
    let forest = parse_with(&markdown, &options);
    if forest.is_empty() {
        log::warn!("Input produced an empty outline");
        return Ok(());
    }

    println!("{}", render(&forest, cli.format)?);
    Ok(())
}
