use std::env;
use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use shelfstats_data::Source;

use crate::error::CliError;

pub(crate) const DEFAULT_TITLE: &str = "Book Insights Dashboard";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Render the dashboard page from the book summaries.
    Render(RenderArgs),
    /// Print the dashboard charts as text.
    Summary(SummaryArgs),
}

#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Specify where the book summaries are read from.
    /// The value is either an `http://` or `https://` base URL,
    /// or the path to a directory holding the summary files.
    #[arg(short, long, value_parser(Source::parse))]
    pub(crate) data: Source,

    /// Specify the path where the `index.html` page will be created.
    /// If the output path is not specified then the current working
    /// directory is used.
    #[arg(short, long, value_parser(parse_path))]
    pub(crate) output_path: Option<PathBuf>,

    /// Specify the title of the page.
    #[arg(short, long, default_value = DEFAULT_TITLE)]
    pub(crate) title: String,

    /// Specify the id of the section the page opens on.
    #[arg(short, long)]
    pub(crate) section: Option<String>,
}

#[derive(Args)]
pub(crate) struct SummaryArgs {
    /// Specify where the book summaries are read from.
    /// The value is either an `http://` or `https://` base URL,
    /// or the path to a directory holding the summary files.
    #[arg(short, long, value_parser(Source::parse))]
    pub(crate) data: Source,
}

fn parse_path(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);

    if !path.exists() {
        return Err(format!("The `{}` path does not exist.", path.display()));
    }

    if !path.is_dir() {
        return Err(format!(
            "The `{}` path must point to a directory.",
            path.display()
        ));
    }

    Ok(path)
}

pub(crate) trait PathExt {
    fn or_current_dir(self) -> Result<PathBuf, CliError>;
}

impl PathExt for Option<PathBuf> {
    fn or_current_dir(self) -> Result<PathBuf, CliError> {
        if let Some(path) = self {
            Ok(path)
        } else {
            env::current_dir().map_err(|e| CliError::Path(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_render_args() {
        let dir = tempfile::tempdir().unwrap();
        let dir = dir.path().to_str().unwrap();

        let cli = Cli::try_parse_from([
            "shelfstats",
            "render",
            "--data",
            "https://example.com/data",
            "--output-path",
            dir,
            "--section",
            "hidden-gems",
        ])
        .unwrap();

        let Commands::Render(args) = cli.command else {
            panic!("expected the render command");
        };
        assert!(matches!(args.data, Source::Http(_)));
        assert_eq!(args.output_path, Some(PathBuf::from(dir)));
        assert_eq!(args.title, DEFAULT_TITLE);
        assert_eq!(args.section.as_deref(), Some("hidden-gems"));
    }

    #[test]
    fn reject_missing_output_path() {
        let result = Cli::try_parse_from([
            "shelfstats",
            "render",
            "--data",
            "https://example.com/data",
            "--output-path",
            "/this/path/does/not/exist",
        ]);

        assert!(result.is_err());
    }
}
