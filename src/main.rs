use clap::Parser;
use moodlog::application::{menu, run_menu, Session, SessionEnd};
use moodlog::cli::Cli;
use moodlog::error::MoodError;
use moodlog::infrastructure::{Config, FileSystemStore};
use std::io::{self, Write};

fn main() {
    let cli = Cli::parse();
    moodlog::logging::init(cli.verbose);

    let result = run(cli);

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Run one session, returning the process exit code
fn run(cli: Cli) -> Result<i32, MoodError> {
    let config = Config::resolve(cli.dir)?;
    let store = FileSystemStore::new(config.dir);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    // A blank --name falls back to the prompt
    let name = match cli.name.filter(|n| !n.trim().is_empty()) {
        Some(name) => name,
        None => match menu::prompt_name(&mut input, &mut out)? {
            Some(name) => name,
            None => {
                writeln!(out)?;
                return Ok(0);
            }
        },
    };

    let (session, notice) = Session::open(store, &name)?;
    menu::show_load_notice(&mut out, &notice)?;

    let end = run_menu(session, &mut input, &mut out)?;
    out.flush()?;

    match end {
        SessionEnd::Saved(_) | SessionEnd::InputClosed => Ok(0),
        // already reported by the menu
        SessionEnd::SaveFailed(e) => Ok(e.exit_code()),
    }
}
