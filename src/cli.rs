use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scorecard")]
#[command(about = "Rate your AI usage across five dimensions and export the result", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the five starting values come from and how to adjust them.
#[derive(Args, Debug, Clone, Default)]
pub struct ValueArgs {
    /// Preset to start from (beginner, intermediate, advanced, benchmark, reset)
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Read starting values from a previously copied summary
    #[arg(long = "from-summary", conflicts_with = "preset")]
    pub from_summary: Option<PathBuf>,

    /// Volume score (0-10, steps of 0.5)
    #[arg(long, allow_negative_numbers = true)]
    pub volume: Option<f64>,

    /// Breadth score (0-10, steps of 0.5)
    #[arg(long, allow_negative_numbers = true)]
    pub breadth: Option<f64>,

    /// Depth score (0-10, steps of 0.5)
    #[arg(long, allow_negative_numbers = true)]
    pub depth: Option<f64>,

    /// Systemization score (0-10, steps of 0.5)
    #[arg(long, allow_negative_numbers = true)]
    pub systemization: Option<f64>,

    /// Creative production score (0-10, steps of 0.5)
    #[arg(long, allow_negative_numbers = true)]
    pub creative: Option<f64>,

    /// Set a dimension by key, e.g. `--set depth=7.5` (repeatable)
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub set: Vec<(String, f64)>,
}

/// Parse a `KEY=VALUE` pair; the key is checked when it is applied.
fn parse_key_value(s: &str) -> Result<(String, f64), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid value '{value}': {e}"))?;
    Ok((key.trim().to_string(), value))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShowFormat {
    Terminal,
    Json,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Light,
    Dark,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the scorecard with tiers and insights
    Show {
        #[command(flatten)]
        values: ValueArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: ShowFormat,

        /// Plain output (ASCII-only, no colors, no emoji)
        #[arg(long)]
        plain: bool,
    },

    /// Print the text summary, optionally copying it to the clipboard
    Summary {
        #[command(flatten)]
        values: ValueArgs,

        /// Copy the summary to the system clipboard
        #[arg(long)]
        copy: bool,

        /// Leave out emoji markers
        #[arg(long)]
        plain: bool,
    },

    /// Export the scorecard as a PNG image
    Export {
        #[command(flatten)]
        values: ValueArgs,

        /// Export an empty template with every score at 0
        #[arg(long)]
        blank: bool,

        /// Color theme for the image
        #[arg(long, value_enum)]
        theme: Option<ThemeArg>,

        /// Directory to write the image to (defaults to config or ".")
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// List available presets
    Presets,

    /// Write a default .scorecard.toml in the current directory
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_export_arguments() {
        let cli = Cli::parse_from([
            "scorecard",
            "export",
            "--blank",
            "--theme",
            "dark",
            "--volume",
            "3.5",
        ]);
        match cli.command {
            Commands::Export {
                values,
                blank,
                theme,
                output_dir,
            } => {
                assert!(blank);
                assert_eq!(theme, Some(ThemeArg::Dark));
                assert_eq!(values.volume, Some(3.5));
                assert!(output_dir.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_repeated_set_pairs() {
        let cli = Cli::parse_from([
            "scorecard",
            "show",
            "--set",
            "depth=7.5",
            "--set",
            "creative=-1",
        ]);
        match cli.command {
            Commands::Show { values, .. } => assert_eq!(
                values.set,
                vec![("depth".to_string(), 7.5), ("creative".to_string(), -1.0)]
            ),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_set_requires_key_value_pair() {
        assert!(Cli::try_parse_from(["scorecard", "show", "--set", "depth"]).is_err());
        assert!(Cli::try_parse_from(["scorecard", "show", "--set", "depth=deep"]).is_err());
    }

    #[test]
    fn test_preset_conflicts_with_summary_file() {
        let result = Cli::try_parse_from([
            "scorecard",
            "show",
            "--preset",
            "advanced",
            "--from-summary",
            "summary.txt",
        ]);
        assert!(result.is_err());
    }
}
