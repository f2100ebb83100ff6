//! `hyrd-css` - generate CSS for hyrd-ui utilities from the command line.
//!
//! ```text
//! hyrd-css generate fade-in slide-in-from-left-1/2 animate-in
//! hyrd-css --config theme.yaml --named vars
//! echo "animate-out fade-out" | hyrd-css generate --no-preflight
//! hyrd-css theme primary-foreground radius-md
//! ```

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use console::style;
use hyrd_ui_preset::{Preset, PresetOptions, PresetTheme, ThemeColor, ThemeScope};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Generate CSS for hyrd-ui animation utilities and theme variables
#[derive(Debug, Parser)]
#[command(name = "hyrd-css")]
#[command(version)]
#[command(about = "Generate CSS for hyrd-ui animation utilities and theme variables")]
struct Cli {
    /// Load preset options (color theme, radius) from a YAML file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Scope theme variables to `.theme-<name>` instead of `:root`
    #[arg(long, global = true)]
    named: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Resolve utility tokens into a stylesheet
    Generate {
        /// Utility tokens; read whitespace-separated from stdin when omitted
        tokens: Vec<String>,

        /// Leave out keyframes, theme variables and base styles
        #[arg(long)]
        no_preflight: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Css)]
        format: Format,
    },
    /// Print the theme variable blocks
    Vars,
    /// List autocomplete templates for editor integrations
    Autocomplete,
    /// Look up theme color and radius tokens (`primary`, `radius-lg`)
    Theme {
        /// Tokens to look up; lists every token when omitted
        tokens: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Css,
    Json,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_preset(cli: &Cli) -> Result<Preset> {
    let options = match &cli.config {
        Some(path) => PresetOptions::from_file(path)
            .with_context(|| format!("loading preset options from {}", path.display()))?,
        None => PresetOptions::default(),
    };
    let scope = if cli.named {
        ThemeScope::Named
    } else {
        ThemeScope::Root
    };
    Ok(Preset::new(options).with_scope(scope))
}

fn read_stdin_tokens() -> Result<Vec<String>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(Vec::new());
    }
    let mut buf = String::new();
    stdin
        .lock()
        .read_to_string(&mut buf)
        .context("reading tokens from stdin")?;
    Ok(buf.split_whitespace().map(str::to_string).collect())
}

fn theme_value<'a>(theme: &'a PresetTheme, token: &str) -> Option<&'a str> {
    match token.strip_prefix("radius-") {
        Some(size) => theme.border_radius(size),
        None => theme.color(token),
    }
}

fn theme_table(theme: &PresetTheme) -> Vec<(String, &str)> {
    let mut rows = Vec::new();
    for (name, color) in theme.colors() {
        match color {
            ThemeColor::Single(value) => rows.push((name.to_string(), value.as_str())),
            ThemeColor::Pair {
                default,
                foreground,
            } => {
                rows.push((name.to_string(), default.as_str()));
                rows.push((format!("{}-foreground", name), foreground.as_str()));
            }
        }
    }
    for (size, value) in theme.border_radii() {
        rows.push((format!("radius-{}", size), value));
    }
    rows
}

/// Output for stdout plus any tokens that did not resolve.
struct Outcome {
    output: String,
    unmatched: Vec<String>,
}

fn run(cli: &Cli, stdin_tokens: impl FnOnce() -> Result<Vec<String>>) -> Result<Outcome> {
    let preset = load_preset(cli)?;
    debug!(preset = preset.name(), scope = ?preset.scope(), "preset ready");

    match &cli.command {
        Command::Generate {
            tokens,
            no_preflight,
            format,
        } => {
            let tokens = if tokens.is_empty() {
                stdin_tokens()?
            } else {
                tokens.clone()
            };
            let generated = preset.generate(&tokens);
            let output = match format {
                Format::Json => serde_json::to_string_pretty(&generated)
                    .context("serializing generated CSS")?,
                Format::Css if *no_preflight => generated.utilities_css(),
                Format::Css => generated.css(),
            };
            Ok(Outcome {
                output,
                unmatched: generated.unmatched,
            })
        }
        Command::Vars => Ok(Outcome {
            output: preset.css_vars(),
            unmatched: Vec::new(),
        }),
        Command::Autocomplete => Ok(Outcome {
            output: preset.autocomplete().join("\n"),
            unmatched: Vec::new(),
        }),
        Command::Theme { tokens } => {
            let theme = preset.theme();
            if tokens.is_empty() {
                let output = theme_table(theme)
                    .into_iter()
                    .map(|(name, value)| format!("{}: {}", name, value))
                    .collect::<Vec<_>>()
                    .join("\n");
                return Ok(Outcome {
                    output,
                    unmatched: Vec::new(),
                });
            }

            let mut lines = Vec::new();
            let mut unmatched = Vec::new();
            for token in tokens {
                match theme_value(theme, token) {
                    Some(value) => lines.push(format!("{}: {}", token, value)),
                    None => unmatched.push(token.clone()),
                }
            }
            Ok(Outcome {
                output: lines.join("\n"),
                unmatched,
            })
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let outcome = run(&cli, read_stdin_tokens)?;
    println!("{}", outcome.output.trim_end());
    for token in &outcome.unmatched {
        eprintln!("{} {}", style("unmatched:").yellow().bold(), token);
    }
    Ok(())
}
