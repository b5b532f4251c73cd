mod args;
mod terminal;

use services::{AppServices, OnboardingCompletion, OnboardingOutcome, initial_route};
use tracing_subscriber::EnvFilter;

use crate::args::{Args, ArgsError, Command, Toggle, print_usage};

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let parsed = match Args::parse(std::env::args().skip(1)) {
        Ok(Some(parsed)) => parsed,
        Ok(None) => {
            print_usage();
            return Ok(());
        }
        Err(err) => {
            print_usage();
            return Err(err.into());
        }
    };

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;
    let mut app = AppServices::new_sqlite(&parsed.db_url, terminal::platform()).await?;
    tracing::debug!(route = %initial_route(app.store().state()), "hydrated");

    let result = execute(&mut app, parsed.command);
    app.shutdown().await;
    result
}

fn execute(app: &mut AppServices, command: Command) -> Result<(), Box<dyn std::error::Error>> {
    let stories = app.stories();
    let settings = app.settings();

    match command {
        Command::Status => {
            terminal::print_overview(&app.progress());
            let favorites = app.store().state().user_progress().favorites().len();
            println!("{:<15} {favorites}", "Saved");
        }
        Command::Stories { order } => {
            terminal::print_list(&stories.list(app.store().state(), order));
        }
        Command::Read(id) => {
            let story = stories.open(app.store_mut(), &id)?;
            terminal::print_story(story);
        }
        Command::Answer(id, guess) => {
            let outcome = stories.answer(app.store_mut(), &id, guess)?;
            terminal::print_answer(&outcome);
        }
        Command::Favorite(id) => {
            let saved = stories.toggle_favorite(app.store_mut(), &id)?;
            let verb = if saved { "Saved" } else { "Removed" };
            println!("{verb} story {id}");
        }
        Command::Saved => {
            terminal::print_saved(&stories.saved(app.store().state()));
        }
        Command::Share(id) => stories.share(&id)?,
        Command::ShareApp => settings.share_app(),
        Command::Set { toggle, enabled } => {
            match toggle {
                Toggle::Music => settings.set_music(app.store_mut(), enabled),
                Toggle::Vibration => settings.set_vibration(app.store_mut(), enabled),
            }
            let state = if enabled { "on" } else { "off" };
            println!("{toggle:?} {state}");
        }
        Command::ClearFavorites => {
            settings.clear_favorites(app.store_mut());
            println!("Favorites cleared");
        }
        Command::Reset => {
            settings.reset_progress(app.store_mut());
            println!("Progress reset");
        }
        Command::Onboarding { mark_complete } => {
            let completion = if mark_complete {
                OnboardingCompletion::MarkComplete
            } else {
                OnboardingCompletion::LeaveIncomplete
            };
            let mut onboarding = app.onboarding(completion);
            let mut page = onboarding.current();
            loop {
                println!("{}", page.title);
                println!("{}", page.subtitle);
                println!("{}", page.description);
                println!();
                match onboarding.next(app.store_mut()) {
                    OnboardingOutcome::Continue(next) => page = next,
                    OnboardingOutcome::Finished => break,
                }
            }
        }
    }

    Ok(())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
