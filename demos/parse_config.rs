use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;

use acl4ssr_parser::{ConfigParser, ParserSettings};

/// Parse an ACL4SSR-style configuration and dump rulesets and proxy groups as JSON
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(value_name = "FILE")]
    config: PathBuf,

    /// TOML file overriding the parser settings
    #[arg(short, long, value_name = "TOML")]
    settings: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    // Initialize the logger
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = Args::parse();

    let settings = match &args.settings {
        Some(path) => ParserSettings::from_file(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => ParserSettings::default(),
    };

    let content = fs::read_to_string(&args.config)
        .with_context(|| format!("failed to read {}", args.config.display()))?;

    let parsed = ConfigParser::new(settings).parse(&content);
    info!(
        "Parsed {} rulesets and {} proxy groups from {}",
        parsed.rulesets.len(),
        parsed.proxy_groups.len(),
        args.config.display()
    );

    let output = if args.pretty {
        serde_json::to_string_pretty(&parsed)?
    } else {
        serde_json::to_string(&parsed)?
    };
    println!("{}", output);

    Ok(())
}
