use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};
use thinkstream_config::{Config, OutputFormat};
use thinkstream_engine::{Block, IncrementalParser, parse_blocks, render};

#[derive(Debug, Parser)]
#[command(
    name = "thinkstream",
    version,
    about = "Split LLM output into text and reasoning blocks"
)]
struct Cli {
    /// Message file to parse; reads stdin when omitted or `-`
    file: Option<PathBuf>,

    /// Output format (overrides config)
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Show think blocks as headers only
    #[arg(long)]
    collapse: bool,

    /// Feed the message in chunks and print every intermediate parse
    #[arg(long)]
    replay: bool,

    /// Chunk size in bytes for --replay (overrides config)
    #[arg(long)]
    chunk: Option<usize>,

    /// Config file to use instead of ~/.config/thinkstream/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Pretty,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Pretty => OutputFormat::Pretty,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Config values with command-line overrides applied.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Settings {
    format: OutputFormat,
    show_reasoning: bool,
    chunk: usize,
}

impl Settings {
    fn new(config: &Config, cli: &Cli) -> Self {
        Self {
            format: cli.format.map(Into::into).unwrap_or(config.format),
            show_reasoning: config.show_reasoning && !cli.collapse,
            chunk: cli.chunk.unwrap_or(config.replay_chunk).max(1),
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let loaded = match path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    if loaded.is_none() {
        log::debug!("no config file found, using defaults");
    }
    Ok(loaded.unwrap_or_default())
}

fn read_message(config: &Config, file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => {
            let path = config.resolve_input(path);
            fs::read_to_string(&path)
                .with_context(|| format!("Failed to read message file {}", path.display()))
        }
        _ => io::read_to_string(io::stdin()).context("Failed to read message from stdin"),
    }
}

/// Splits `text` into pieces of about `size` bytes without cutting a char.
fn stream_chunks(text: &str, size: usize) -> Vec<&str> {
    let mut chunks = vec![];
    let mut start = 0;
    while start < text.len() {
        let mut end = (start + size).min(text.len());
        while !text.is_char_boundary(end) {
            end += 1;
        }
        chunks.push(&text[start..end]);
        start = end;
    }
    chunks
}

fn render_blocks(blocks: &[Block], settings: &Settings) -> Result<String> {
    Ok(match settings.format {
        OutputFormat::Json => serde_json::to_string(blocks)?,
        OutputFormat::Pretty if settings.show_reasoning => render::outline(blocks),
        OutputFormat::Pretty => render::outline_collapsed(blocks),
    })
}

fn print_parse(out: &mut impl Write, message: &str, settings: &Settings) -> Result<()> {
    let blocks = parse_blocks(message);
    log::info!("parsed {} bytes into {} blocks", message.len(), blocks.len());
    writeln!(out, "{}", render_blocks(&blocks, settings)?)?;
    Ok(())
}

fn print_replay(out: &mut impl Write, message: &str, settings: &Settings) -> Result<()> {
    let mut parser = IncrementalParser::new();
    for chunk in stream_chunks(message, settings.chunk) {
        let blocks = parser.push(chunk);
        let rendered = render_blocks(&blocks, settings)?;
        match settings.format {
            OutputFormat::Json => writeln!(out, "{rendered}")?,
            OutputFormat::Pretty => {
                writeln!(out, "--- {} bytes ---", parser.buffer().len())?;
                if !rendered.is_empty() {
                    writeln!(out, "{rendered}")?;
                }
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let settings = Settings::new(&config, &cli);
    log::debug!("settings: {settings:?}");

    let message = read_message(&config, cli.file.as_deref())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.replay {
        print_replay(&mut out, &message, &settings)
    } else {
        print_parse(&mut out, &message, &settings)
    }
}
