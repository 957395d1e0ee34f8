use std::fmt;
use std::io::{BufRead, Write as _};
use std::sync::Arc;

use prep_core::model::{CourseCatalog, CourseCode};
use services::{LibraryService, ReviewSession, SessionView, default_catalog};
use storage::repository::Storage;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidStorePath { raw: String },
    UnknownCourse { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidStorePath { raw } => write!(f, "invalid --store value: {raw}"),
            ArgsError::UnknownCourse { raw } => write!(f, "unknown --course value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- review [--store <path>] [--course <code>]");
    eprintln!("  cargo run -p app -- seed   [--store <path>]");
    eprintln!();
    eprintln!("Defaults for review:");
    eprintln!("  --store questions.json");
    eprintln!("  --course the catalog's first course");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PREP_STORE, PREP_COURSE, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Review,
    Seed,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "review" => Some(Self::Review),
            "seed" => Some(Self::Seed),
            _ => None,
        }
    }
}

struct Args {
    store_path: String,
    course: CourseCode,
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        catalog: &CourseCatalog,
    ) -> Result<Self, ArgsError> {
        let mut store_path = std::env::var("PREP_STORE")
            .ok()
            .unwrap_or_else(|| "questions.json".into());
        let mut course = match std::env::var("PREP_COURSE") {
            Ok(value) => catalog
                .resolve(&value)
                .map_err(|_| ArgsError::UnknownCourse { raw: value })?,
            Err(_) => catalog.default_course().clone(),
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--store" => {
                    let value = require_value(args, "--store")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidStorePath { raw: value });
                    }
                    store_path = value;
                }
                "--course" => {
                    let value = require_value(args, "--course")?;
                    course = catalog
                        .resolve(&value)
                        .map_err(|_| ArgsError::UnknownCourse { raw: value })?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { store_path, course })
    }
}

// The store file may live in a directory that does not exist yet; its own
// absence stays meaningful (it triggers seeding), so only parents are made.
fn prepare_store_parent(store_path: &str) -> std::io::Result<()> {
    let path = std::path::Path::new(store_path);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // Default behavior: start reviewing when no subcommand is provided.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Review,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Review,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let catalog = default_catalog();
    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter, &catalog).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    prepare_store_parent(&parsed.store_path)?;
    let storage = Storage::json(&parsed.store_path);
    let library_svc = LibraryService::new(Arc::clone(&storage.questions));

    match cmd {
        Command::Review => {
            let library = library_svc.load_or_seed().await?;
            tracing::info!(count = library.len(), store = %parsed.store_path, "library loaded");
            let session = ReviewSession::new(
                library,
                parsed.course,
                catalog.default_course().clone(),
            );
            review_loop(session, &library_svc, &catalog).await?;
            Ok(())
        }
        Command::Seed => {
            let library = library_svc.load_or_seed().await?;
            println!(
                "store at {} holds {} questions",
                parsed.store_path,
                library.len()
            );
            Ok(())
        }
    }
}

//
// ─── TERMINAL FRONT-END ────────────────────────────────────────────────────────
//

// One command per line; every mutation is followed by a full redraw from the
// session's view snapshot. The session never assumes it will be re-entered.
async fn review_loop(
    mut session: ReviewSession,
    library_svc: &LibraryService,
    catalog: &CourseCatalog,
) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = std::io::stdin();
    let mut out = std::io::stdout();

    print_help(catalog);
    render(&session, &mut out)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let mut words = line.split_whitespace();
        match words.next() {
            None => {}
            Some("n" | "next") => session.next(),
            Some("p" | "prev" | "previous") => session.previous(),
            Some("s" | "sol" | "solution") => session.toggle_solution(),
            Some("c" | "course") => {
                let selection: Vec<&str> = words.collect();
                match catalog.resolve(&selection.join(" ")) {
                    Ok(course) => session.select_course(course),
                    Err(err) => eprintln!("{err}"),
                }
            }
            Some("l" | "courses") => {
                for label in catalog.labels() {
                    println!("  {label}");
                }
                continue;
            }
            Some("r" | "reload") => {
                let library = library_svc.load_or_seed().await?;
                session.reload(library);
            }
            Some("q" | "quit" | "exit") => break,
            Some("h" | "help") => {
                print_help(catalog);
                continue;
            }
            Some(other) => {
                eprintln!("unknown command: {other} (h for help)");
                continue;
            }
        }
        render(&session, &mut out)?;
    }

    Ok(())
}

fn print_help(catalog: &CourseCatalog) {
    println!("commands: n(ext), p(rev), s(olution), c(ourse) <code>, l(ist), r(eload), q(uit)");
    println!(
        "courses: {}",
        catalog
            .codes()
            .iter()
            .map(CourseCode::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    );
}

fn render(session: &ReviewSession, out: &mut impl std::io::Write) -> std::io::Result<()> {
    match session.view() {
        SessionView::Empty { course } => {
            writeln!(out)?;
            writeln!(out, "No questions found for {course}.")?;
            writeln!(
                out,
                "Add records with \"lesson\": \"{course}\" to the store, or switch courses."
            )?;
        }
        SessionView::Card(card) => {
            writeln!(out)?;
            writeln!(
                out,
                "[{}] {} question {} of {}",
                card.topic,
                session.selected_course(),
                card.position,
                card.total
            )?;
            writeln!(out)?;
            writeln!(out, "{}", card.prompt)?;
            if let Some(solution) = card.solution {
                writeln!(out)?;
                writeln!(out, "--- solution ---")?;
                writeln!(out, "{solution}")?;
            }
        }
    }
    out.flush()
}

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout stays clean for the card display.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
