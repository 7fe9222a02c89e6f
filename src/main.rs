use anyhow::Result;
use clap::{Parser, Subcommand};
use linediff::OutputFormat;
use linediff::commands::compare::CompareOptions;
use linediff::commands::{annotate, compare, output};
use linediff::engine::DEFAULT_MAX_DEPTH;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "linediff",
    version = "0.1.0",
    about = "A resynchronizing line diff for machine-patched files",
    long_about = "linediff compares an original file against a patched copy and reports \
    replacement blocks: the source line a change anchors to plus the literal \
    replacement lines. It ignores indentation-only edits and is tuned for \
    small, localized changes such as dependency fixes in build manifests.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "compare",
        about = "Show the replacement blocks between two files",
        long_about = "This command compares the source file against the patched file and prints \
        one block per divergence, either as colored text or as JSON."
    )]
    Compare {
        #[arg(index = 1, help = "The original (source) file")]
        source: PathBuf,
        #[arg(index = 2, help = "The patched (other) file")]
        other: PathBuf,
        #[arg(
            short,
            long,
            default_value_t = DEFAULT_MAX_DEPTH,
            help = "How many lines of the patched file the anchor scan inspects per source line"
        )]
        max_depth: usize,
        #[arg(long, required = false, help = "Emit the blocks as JSON")]
        json: bool,
    },
    #[command(
        name = "annotate",
        about = "Emit review-comment annotations for the changes between two files",
        long_about = "This command compares the two files and prints a JSON array of review \
        annotations, one per replacement block, each carrying the line range the comment \
        anchors to in the original file."
    )]
    Annotate {
        #[arg(index = 1, help = "The original (source) file")]
        source: PathBuf,
        #[arg(index = 2, help = "The patched (other) file")]
        other: PathBuf,
        #[arg(
            short,
            long,
            default_value_t = DEFAULT_MAX_DEPTH,
            help = "How many lines of the patched file the anchor scan inspects per source line"
        )]
        max_depth: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Compare {
            source,
            other,
            max_depth,
            json,
        } => {
            let opts = CompareOptions {
                max_depth: *max_depth,
                format: if *json {
                    OutputFormat::Json
                } else {
                    OutputFormat::Text
                },
            };

            if *json {
                compare::run(source, other, &opts, &mut std::io::stdout())?
            } else {
                output::paged(|writer| compare::run(source, other, &opts, writer))?
            }
        }
        Commands::Annotate {
            source,
            other,
            max_depth,
        } => annotate::run(source, other, *max_depth, &mut std::io::stdout())?,
    }

    Ok(())
}
