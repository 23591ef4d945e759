//! Notebook - site configuration for a technical notebook.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use notebook::cli::{self, Cli, Commands};
use notebook::config::SiteConfig;
use notebook::{export, log, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    // init runs before any config exists
    if let Commands::Init { name, force } = &cli.command {
        return cli::init::new_site(name.as_deref(), &cli.config, *force);
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { .. } => Ok(()),
        Commands::Check { args } => cli::check::check_site(&config, args),
        Commands::Links { json } => cli::links::list_links(&config, *json),
        Commands::Export { args } => {
            let content = export::render(&config, args.format, args.resolved, args.pretty)?;
            export::write_output(&content, args.output.as_deref())?;
            if let Some(path) = &args.output {
                log!("export"; "wrote {}", path.display());
            }
            Ok(())
        }
    }
}
