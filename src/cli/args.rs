//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::export::ExportFormat;

/// Notebook site configuration CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: notebook.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, default_value = "notebook.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Fail on unknown config fields instead of warning
    #[arg(long, global = true)]
    pub strict: bool,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a starter config file
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Validate the config and optionally its links against content
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },

    /// List every link with its resolved href
    #[command(visible_alias = "l")]
    Links {
        /// Output JSON instead of a table
        #[arg(short, long)]
        json: bool,
    },

    /// Emit the config record for the generator
    #[command(visible_alias = "e")]
    Export {
        #[command(flatten)]
        args: ExportArgs,
    },
}

/// Check command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Content directory (relative to project root). Enables the
    /// link-to-document check.
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Content document extension
    #[arg(long, default_value = crate::content::CONTENT_EXTENSION)]
    pub ext: String,

    /// Report broken links without failing
    #[arg(long, short = 'w')]
    pub warn_only: bool,
}

/// Export command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ExportArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,

    /// Replace internal links with base-prefixed hrefs
    #[arg(short, long)]
    pub resolved: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
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
    fn test_parse_check() {
        let cli = Cli::parse_from(["notebook", "check", "--content", "docs", "-w"]);
        let Commands::Check { args } = cli.command else {
            panic!("expected check");
        };
        assert_eq!(args.content, Some(PathBuf::from("docs")));
        assert_eq!(args.ext, "md");
        assert!(args.warn_only);
    }

    #[test]
    fn test_parse_export_defaults() {
        let cli = Cli::parse_from(["notebook", "-C", "site.toml", "export"]);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        let Commands::Export { args } = cli.command else {
            panic!("expected export");
        };
        assert_eq!(args.format, ExportFormat::Json);
        assert!(!args.resolved);
        assert!(args.output.is_none());
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["notebook", "links", "--json", "--strict", "-v"]);
        assert!(cli.strict);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Links { json: true }));
    }

    #[test]
    fn test_parse_init() {
        let cli = Cli::parse_from(["notebook", "init", "my-notes", "--force"]);
        let Commands::Init { name, force } = cli.command else {
            panic!("expected init");
        };
        assert_eq!(name, Some(PathBuf::from("my-notes")));
        assert!(force);
    }
}
