use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use html_outline_config::{Config, OutputFormat};
use html_outline_engine::io::{self, IoError};
use html_outline_engine::render::{render_json, render_text};
use html_outline_engine::{ContentMode, parse_bytes};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser, Debug)]
#[command(name = "html-outline", version, about = "Print the outline of an HTML document")]
struct Cli {
    /// Input file, or `-` for stdin (the default)
    #[arg(conflicts_with = "url")]
    input: Option<PathBuf>,

    /// Fetch the document over HTTP instead of reading a file
    #[arg(long)]
    url: Option<String>,

    /// Config file (defaults to ~/.config/html-outline/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Extra eligible tag; repeat for more
    #[arg(long = "tag", value_name = "TAG")]
    tags: Vec<String>,

    /// Keep inner markup as item content
    #[arg(long)]
    raw: bool,

    /// Print JSON instead of an indented outline
    #[arg(long)]
    json: bool,

    /// Spaces per indent level
    #[arg(long, value_name = "N")]
    indent: Option<usize>,

    /// Prefix items with their tag
    #[arg(long)]
    show_tags: bool,

    /// Write the effective settings to the config file and exit
    #[arg(long)]
    save_config: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    // RUST_LOG still wins over -v
    env_logger::Builder::new()
        .filter_level(log_level(cli.verbose))
        .parse_default_env()
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        if e.downcast_ref::<IoError>().is_some_and(IoError::is_retryable) {
            eprintln!("This looks transient; retrying may help.");
        }
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = load_config(cli.config.as_deref())?;
    apply_overrides(&mut config, cli);

    if cli.save_config {
        return save_config(&config, cli.config.as_deref());
    }

    let bytes = read_input(cli, &config)?;
    let items =
        parse_bytes(&bytes, &config.parse_options()).context("Input is not UTF-8 text")?;
    log::info!("Parsed {} top-level item(s)", items.len());

    let output = match config.output.format {
        OutputFormat::Text => render_text(&items, &config.text_style()),
        OutputFormat::Json => render_json(&items)? + "\n",
    };
    print!("{output}");
    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let Some(path) = explicit else {
        log::debug!("Config path: {}", Config::config_path().display());
        return Ok(Config::load()?.unwrap_or_default());
    };

    let config_path = expanded(path);
    log::debug!("Config path: {}", config_path.display());
    Config::load_from_path(&config_path)?
        .with_context(|| format!("Config file not found: {}", config_path.display()))
}

fn save_config(config: &Config, explicit: Option<&Path>) -> Result<()> {
    let config_path = match explicit {
        Some(path) => {
            let config_path = expanded(path);
            config.save_to_path(&config_path)?;
            config_path
        }
        None => {
            config.save()?;
            Config::config_path()
        }
    };
    eprintln!("Saved config to {}", config_path.display());
    Ok(())
}

fn expanded(path: &Path) -> PathBuf {
    Config::expand_path(path).unwrap_or_else(|| path.to_path_buf())
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    config.parser.eligible_tags.extend(cli.tags.iter().cloned());
    if cli.raw {
        config.parser.content_mode = ContentMode::RawMarkup;
    }
    if cli.json {
        config.output.format = OutputFormat::Json;
    }
    if let Some(indent) = cli.indent {
        config.output.indent_width = indent;
    }
    if cli.show_tags {
        config.output.show_tags = true;
    }
}

fn read_input(cli: &Cli, config: &Config) -> Result<Vec<u8>, IoError> {
    let max_bytes = config.input.max_bytes;
    match (&cli.url, &cli.input) {
        (Some(url), _) => io::fetch_url(url, &config.fetch_options()),
        (None, Some(path)) if path != Path::new("-") => io::read_file(path, max_bytes),
        _ => io::read_stdin(max_bytes),
    }
}

fn log_level(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    }
}
