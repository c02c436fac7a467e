use clap::{Parser, Subcommand};
use simple_blog::history::{FileStore, GitHistory};
use simple_blog::{changelog, output, stats};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "simple-blog")]
#[command(about = "Content tooling for a personal portfolio and blog site")]
#[command(long_about = "\
Content tooling for a personal portfolio and blog site

Articles are static JSON documents of typed content blocks, one file per
article:

  content/articles/
  ├── error-handling.json
  ├── dark-mode.json
  └── case-study-acme.json

Commands:

  stats      Word counts, reading times, and link counts per article
  check      Validate that every article parses against the block schema
  changelog  Update CHANGELOG.md from conventional commits since the last tag

The changelog command reads the release version from --version or the
VERSION environment variable, defaulting to \"Unreleased\".")]
#[command(version)]
struct Cli {
    /// Articles directory
    #[arg(long, default_value = "content/articles", global = true)]
    articles: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Report word counts, reading times, and link counts per article
    Stats,
    /// Validate article documents without reporting
    Check,
    /// Insert a new CHANGELOG.md entry from commits since the last tag
    Changelog {
        /// Release version for the entry header
        #[arg(long, env = "VERSION", default_value = "Unreleased")]
        version: String,

        /// Changelog file to update
        #[arg(long, default_value = "CHANGELOG.md")]
        changelog: PathBuf,

        /// Print the entry instead of writing the file
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Stats => {
            let articles = stats::analyze_dir(&cli.articles)?;
            output::print_stats(&articles);
        }
        Command::Check => {
            println!("==> Checking {}", cli.articles.display());
            let articles = stats::analyze_dir(&cli.articles)?;
            output::print_stats(&articles);
            println!("==> Content is valid");
        }
        Command::Changelog {
            version,
            changelog: changelog_path,
            dry_run,
        } => {
            let history = GitHistory::new(".");
            let date = chrono::Local::now().date_naive();
            if dry_run {
                let report = changelog::assemble(&history, &version, date)?;
                print!("{}", report.entry);
            } else {
                let store = FileStore::new(&changelog_path);
                let report = changelog::generate(&history, &store, &version, date)?;
                output::print_changelog_report(&report);
                println!("==> Updated {}", changelog_path.display());
            }
        }
    }

    Ok(())
}
