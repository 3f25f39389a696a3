use anyhow::Result;
use clap::Parser;
use scorecard::cli::{Cli, Commands};
use scorecard::commands;
use tracing_subscriber::EnvFilter;

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // log records reach the subscriber through the tracing-log bridge
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let config = scorecard::config::load_config();

    match cli.command {
        Commands::Show {
            values,
            format,
            plain,
        } => commands::show::show(
            &config,
            commands::show::ShowConfig {
                values,
                format,
                plain,
                verbosity: cli.verbosity,
            },
        ),
        Commands::Summary {
            values,
            copy,
            plain,
        } => commands::summary::summary_to_system_clipboard(&config, &values, copy, plain),
        Commands::Export {
            values,
            blank,
            theme,
            output_dir,
        } => commands::export::export(
            &config,
            commands::export::ExportCommand {
                values,
                blank,
                theme,
                output_dir,
            },
        )
        .map(|_| ()),
        Commands::Presets => {
            commands::presets::list_presets();
            Ok(())
        }
        Commands::Init { force } => commands::init::init_config(force),
    }
}
