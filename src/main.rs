//! Tauron CLI
//!
//! Headless driver for the dashboard shell:
//! - Replay a sequence of user actions and print what would be mounted
//! - List the navigation tabs
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use tauron::config::{generate_default_config, Config};
use tauron::{replay, ReplayStep, Tab};

#[derive(Parser)]
#[command(name = "tauron")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Headless driver for the Tauron dashboard shell")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply actions to a fresh session and print the resulting view
    Replay {
        /// Actions in order: "dismiss" or "tab:<name>" (keywords are
        /// case-insensitive; unknown tab names select home)
        actions: Vec<String>,
        /// Start without the landing overlay
        #[arg(long)]
        no_splash: bool,
        /// Print the view after every action, not just the last
        #[arg(long)]
        steps: bool,
    },

    /// List navigation tabs
    Tabs,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // An existing config file that does not parse is fatal
    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load_default().context("loading config")?,
    };
    tauron::logging::init(&config.logging);

    match cli.command {
        Commands::Replay {
            actions,
            no_splash,
            steps,
        } => {
            let mut splash = config.splash.clone();
            if no_splash {
                splash.enabled = false;
            }

            let replayed = replay(&splash, actions.as_slice())?;
            if steps {
                for step in &replayed {
                    print_step(cli.format, step)?;
                }
            } else if let Some(last) = replayed.last() {
                print_view(cli.format, &last.result)?;
            }
        }

        Commands::Tabs => print_tabs(cli.format)?,

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn print_view(format: OutputFormat, view: &tauron::ShellView) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => println!("{}", view),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(view)?),
    }
    Ok(())
}

fn print_step(format: OutputFormat, step: &ReplayStep) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            println!("# {}", step.action);
            println!("{}", step.result);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(step)?),
    }
    Ok(())
}

fn print_tabs(format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            println!("{:<8} {:<16} {:<16} {:<22} Layout", "Tab", "Label", "Icon", "Panel");
            for tab in Tab::ALL {
                println!(
                    "{:<8} {:<16} {:<16} {:<22} {}",
                    tab.as_str(),
                    tab.label(),
                    tab.icon(),
                    tab.panel().name(),
                    if tab.is_framed() { "yes" } else { "no" }
                );
            }
        }
        OutputFormat::Json => {
            let tabs: Vec<_> = Tab::ALL
                .iter()
                .map(|tab| {
                    serde_json::json!({
                        "tab": tab,
                        "label": tab.label(),
                        "icon": tab.icon(),
                        "panel": tab.panel(),
                        "framed": tab.is_framed(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&tabs)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_replay() {
        let cli = Cli::parse_from(["tauron", "replay", "dismiss", "tab:map", "--format", "json"]);
        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Replay {
                actions, no_splash, ..
            } => {
                assert_eq!(actions, vec!["dismiss", "tab:map"]);
                assert!(!no_splash);
            }
            _ => panic!("Expected Replay"),
        }
    }

    #[test]
    fn test_parse_replay_flags() {
        let cli = Cli::parse_from(["tauron", "replay", "--no-splash", "--steps"]);
        match cli.command {
            Commands::Replay {
                actions,
                no_splash,
                steps,
            } => {
                assert!(actions.is_empty());
                assert!(no_splash);
                assert!(steps);
            }
            _ => panic!("Expected Replay"),
        }
    }
}
