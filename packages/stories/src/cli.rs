//! Command-line interface for the story parser.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use roxmltree::Document;

use crate::error::Result;
use crate::factory::{parse_stories, Dialect};
use crate::grouping::{parse_groupings, GroupingKind};
use crate::output::{generate_yaml, save_yaml, summarize};

/// NPR Stories - Parse NPRML story lists and podcast feeds.
#[derive(Parser)]
#[command(name = "npr-stories")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// How parsed stories are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full YAML document
    Yaml,
    /// One line per story
    Summary,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a story document (NPRML or podcast RSS).
    Parse {
        /// Path to the XML document
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml, conflicts_with = "output")]
        format: OutputFormat,

        /// Write YAML to this file instead of stdout (cannot be combined with --format)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Parse a grouping list (topics, programs, ...).
    Groupings {
        /// Path to the XML document
        file: PathBuf,

        /// Grouping kind: topic, program, bio, music, column, series or blog
        #[arg(short, long)]
        kind: GroupingKind,

        /// Show at most this many groupings
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            file,
            format,
            output,
        } => parse_command(&file, format, output.as_deref()),
        Commands::Groupings { file, kind, limit } => groupings_command(&file, kind, limit),
    }
}

/// Execute the parse command.
fn parse_command(file: &Path, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    let xml = fs::read_to_string(file)?;
    let doc = Document::parse(&xml)?;
    let root = doc.root_element();

    let dialect = Dialect::detect(root);
    let stories = parse_stories(root);
    tracing::info!(?dialect, count = stories.len(), file = %file.display(), "Parsed document");

    if let Some(path) = output {
        save_yaml(&stories, path)?;
        println!(
            "{} {} {} to {}",
            style("Saved").green().bold(),
            stories.len(),
            if stories.len() == 1 { "story" } else { "stories" },
            path.display()
        );
        return Ok(());
    }

    match format {
        OutputFormat::Yaml => print!("{}", generate_yaml(&stories)?),
        OutputFormat::Summary => {
            for story in &stories {
                println!("{}", style(summarize(story)).cyan());
            }
            if stories.is_empty() {
                println!("{}", style("No stories found").yellow());
            }
        }
    }

    Ok(())
}

/// Execute the groupings command.
fn groupings_command(file: &Path, kind: GroupingKind, limit: Option<usize>) -> Result<()> {
    let xml = fs::read_to_string(file)?;
    let doc = Document::parse(&xml)?;
    let groupings = parse_groupings(kind, doc.root_element(), limit);

    for grouping in &groupings {
        println!(
            "{} ({}/{}/{})",
            style(grouping).bold(),
            grouping.story_count_today,
            grouping.story_count_month,
            grouping.story_count_all
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["npr-stories", "parse", "stories.xml"]);

        let Commands::Parse {
            file,
            format,
            output,
        } = cli.command
        else {
            panic!("expected parse command");
        };
        assert_eq!(file, PathBuf::from("stories.xml"));
        assert_eq!(format, OutputFormat::Yaml);
        assert!(output.is_none());
    }

    #[test]
    fn test_cli_parse_output_file() {
        let cli = Cli::parse_from(["npr-stories", "parse", "feed.xml", "--output", "out.yaml"]);

        let Commands::Parse { format, output, .. } = cli.command else {
            panic!("expected parse command");
        };
        assert_eq!(format, OutputFormat::Yaml);
        assert_eq!(output, Some(PathBuf::from("out.yaml")));
    }

    #[test]
    fn test_cli_parse_rejects_format_with_output() {
        let result = Cli::try_parse_from([
            "npr-stories",
            "parse",
            "feed.xml",
            "--format",
            "summary",
            "--output",
            "out.yaml",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_groupings() {
        let cli = Cli::parse_from([
            "npr-stories",
            "groupings",
            "topics.xml",
            "--kind",
            "topics",
            "--limit",
            "5",
        ]);

        let Commands::Groupings { kind, limit, .. } = cli.command else {
            panic!("expected groupings command");
        };
        assert_eq!(kind, GroupingKind::Topic);
        assert_eq!(limit, Some(5));
    }

    #[test]
    fn test_cli_groupings_rejects_unknown_kind() {
        let result = Cli::try_parse_from([
            "npr-stories",
            "groupings",
            "topics.xml",
            "--kind",
            "podcast",
        ]);
        assert!(result.is_err());
    }
}
