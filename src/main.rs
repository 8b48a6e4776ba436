use std::fs;

use anyhow::{bail, Context};
use clap::Parser;
use env_logger::Env;
use log::info;

use powertrack_rules::rules::{add_rule, add_rules_json};
use powertrack_rules::settings::{resolve, ConfigOverrides};

/// Add filtering rules to a PowerTrack stream
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Rule expression to add (omit when using --file)
    rule: Option<String>,

    /// Tag to attach to the rule
    #[arg(short, long, value_name = "TAG")]
    tag: Option<String>,

    /// JSON file containing a list of rules to add
    #[arg(short, long, value_name = "FILE")]
    file: Option<String>,

    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// PowerTrack stream URL
    #[arg(short, long, value_name = "URL")]
    url: Option<String>,

    /// Auth username
    #[arg(long, value_name = "USERNAME")]
    username: Option<String>,

    /// Auth password
    #[arg(long, value_name = "PASSWORD")]
    password: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // Initialize the logger
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    // Parse command line arguments
    let args = Args::parse();

    if args.rule.is_some() == args.file.is_some() {
        bail!("provide exactly one of a rule expression or -f/--file");
    }

    let conf = resolve(ConfigOverrides {
        config_path: args.config,
        url: args.url,
        username: args.username,
        password: args.password,
        ..Default::default()
    })?;

    if let Some(path) = args.file {
        let content =
            fs::read_to_string(&path).with_context(|| format!("failed to read '{}'", path))?;
        let rules: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("'{}' is not valid JSON", path))?;
        add_rules_json(&rules, &conf)?;
    } else {
        add_rule(args.rule.as_deref(), args.tag.as_deref(), &conf)?;
    }

    info!("rules accepted by '{}'", conf.url);
    Ok(())
}
