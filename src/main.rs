// ABOUTME: Main entry point for the deck-slides program.
// ABOUTME: Provides CLI interface and executes commands from the library.

use clap::{Args, Parser, Subcommand};
use deck_slides::{utils, Config};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a presentation into a JSON slide deck
    Parse(ParseArgs),

    /// List presentations found in the presentations directory
    List(DirArgs),

    /// Find a presentation by slug and print its slide deck
    Show(ShowArgs),

    /// Watch a presentation and rewrite its slide deck on change
    Watch(WatchArgs),
}

#[derive(Args)]
struct ParseArgs {
    /// Path to the markdown file (or JSON content tree with --ast)
    #[arg(short, long)]
    input: PathBuf,

    /// Path to output JSON file (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Treat the input as an MDC JSON content tree
    #[arg(long)]
    ast: bool,
}

#[derive(Args)]
struct DirArgs {
    /// Presentations directory (defaults to $PRESENTATIONS_DIR or ./presentations)
    #[arg(short, long)]
    dir: Option<PathBuf>,
}

#[derive(Args)]
struct ShowArgs {
    /// Presentation slug (file name without .md)
    slug: String,

    #[command(flatten)]
    dir: DirArgs,
}

#[derive(Args)]
struct WatchArgs {
    #[arg(short, long)]
    input: PathBuf,

    #[arg(short, long)]
    output: PathBuf,

    #[arg(long)]
    ast: bool,

    /// Debounce time in milliseconds
    #[arg(long)]
    debounce_ms: Option<u64>,
}

fn run(command: &Commands, config: &Config) -> anyhow::Result<()> {
    match command {
        Commands::Parse(args) => {
            let document = if args.ast {
                deck_slides::read_ast_file(&args.input)?
            } else {
                deck_slides::read_markdown_file(&args.input)?
            };
            let presentation =
                deck_slides::parse_document_with_theme(&document, &config.default_theme);

            match &args.output {
                Some(output) => {
                    utils::write_json_to_file(&presentation, output, config.pretty_json)?;
                    println!(
                        "Deck with {} slides written to {:?}",
                        presentation.slides.len(),
                        output
                    );
                }
                None => println!("{}", utils::to_json(&presentation, config.pretty_json)?),
            }
        }
        Commands::List(args) => {
            let dir = config.presentations_dir_or(args.dir.clone());
            let items = deck_slides::presentation_list(&dir)?;
            println!("{}", utils::to_json(&items, config.pretty_json)?);
        }
        Commands::Show(args) => {
            let dir = config.presentations_dir_or(args.dir.dir.clone());
            let (file, document) = deck_slides::load_presentation(&dir, &args.slug)?;
            log::info!("Loaded {:?} ({})", file.path, file.status);
            let presentation =
                deck_slides::parse_document_with_theme(&document, &config.default_theme);
            println!("{}", utils::to_json(&presentation, config.pretty_json)?);
        }
        Commands::Watch(args) => {
            let watch_config = config.get_watch_config(
                args.input.clone(),
                args.output.clone(),
                args.ast,
                args.debounce_ms,
            );
            deck_slides::watch_presentation(&watch_config)?;
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let config = Config::from_env();

    let Some(command) = &cli.command else {
        println!("No command specified. Use --help for usage information.");
        return;
    };

    if let Err(e) = run(command, &config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
