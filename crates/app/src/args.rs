use std::fmt;

use services::SortOrder;
use truths_core::model::{StoryId, Verdict};

#[derive(Debug)]
pub enum ArgsError {
    MissingValue { flag: &'static str },
    MissingArgument { command: &'static str, what: &'static str },
    UnknownArg(String),
    UnknownCommand(String),
    InvalidDbUrl { raw: String },
    InvalidStoryId(truths_core::Error),
    InvalidVerdict { raw: String },
    InvalidToggle { raw: String },
    InvalidSwitch { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::MissingArgument { command, what } => {
                write!(f, "{command} requires {what}")
            }
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnknownCommand(cmd) => write!(f, "unknown command: {cmd}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidStoryId(err) => write!(f, "invalid story id: {err}"),
            ArgsError::InvalidVerdict { raw } => {
                write!(f, "expected `truth` or `myth`, got: {raw}")
            }
            ArgsError::InvalidToggle { raw } => {
                write!(f, "expected `music` or `vibration`, got: {raw}")
            }
            ArgsError::InvalidSwitch { raw } => write!(f, "expected `on` or `off`, got: {raw}"),
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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Music,
    Vibration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Status,
    Stories { order: SortOrder },
    Read(StoryId),
    Answer(StoryId, Verdict),
    Favorite(StoryId),
    Saved,
    Share(StoryId),
    ShareApp,
    Set { toggle: Toggle, enabled: bool },
    ClearFavorites,
    Reset,
    Onboarding { mark_complete: bool },
}

#[derive(Debug)]
pub struct Args {
    pub db_url: String,
    pub command: Command,
}

pub fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  app [--db <sqlite_url>] <command>");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  status                        show accuracy and reading progress (default)");
    eprintln!("  stories [--desc]              list stories by title");
    eprintln!("  read <id>                     open a story and mark it read");
    eprintln!("  answer <id> truth|myth        answer the quiz for a story");
    eprintln!("  favorite <id>                 toggle a story in favorites");
    eprintln!("  saved                         list favorite stories");
    eprintln!("  share <id> | share-app        print the share message");
    eprintln!("  set music|vibration on|off    change a setting");
    eprintln!("  clear-favorites               remove all favorites");
    eprintln!("  reset                         reset reading and quiz progress");
    eprintln!("  onboarding [--mark-complete]  walk through the introduction");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite://truths.sqlite3");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TRUTHS_DB_URL, RUST_LOG");
}

impl Args {
    /// Parse the process arguments (without the program name).
    ///
    /// Returns `Ok(None)` when help was requested.
    pub fn parse(argv: impl IntoIterator<Item = String>) -> Result<Option<Self>, ArgsError> {
        let mut db_url = std::env::var("TRUTHS_DB_URL")
            .ok()
            .map_or_else(|| "sqlite://truths.sqlite3".into(), normalize_sqlite_url);
        let mut rest = Vec::new();

        let mut args = argv.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(&mut args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--help" | "-h" => return Ok(None),
                _ => rest.push(arg),
            }
        }

        let command = parse_command(rest)?;
        Ok(Some(Self { db_url, command }))
    }
}

fn parse_command(rest: Vec<String>) -> Result<Command, ArgsError> {
    let mut args = rest.into_iter();
    let Some(name) = args.next() else {
        return Ok(Command::Status);
    };

    let command = match name.as_str() {
        "status" => Command::Status,
        "stories" => {
            let mut order = SortOrder::Ascending;
            for flag in args.by_ref() {
                match flag.as_str() {
                    "--desc" => order = SortOrder::Descending,
                    "--asc" => order = SortOrder::Ascending,
                    _ => return Err(ArgsError::UnknownArg(flag)),
                }
            }
            Command::Stories { order }
        }
        "read" => Command::Read(story_id(&mut args, "read")?),
        "answer" => {
            let id = story_id(&mut args, "answer")?;
            let raw = args.next().ok_or(ArgsError::MissingArgument {
                command: "answer",
                what: "truth or myth",
            })?;
            Command::Answer(id, parse_verdict(raw)?)
        }
        "favorite" => Command::Favorite(story_id(&mut args, "favorite")?),
        "saved" => Command::Saved,
        "share" => Command::Share(story_id(&mut args, "share")?),
        "share-app" => Command::ShareApp,
        "set" => {
            let toggle = match args.next() {
                Some(raw) if raw == "music" => Toggle::Music,
                Some(raw) if raw == "vibration" => Toggle::Vibration,
                Some(raw) => return Err(ArgsError::InvalidToggle { raw }),
                None => {
                    return Err(ArgsError::MissingArgument {
                        command: "set",
                        what: "a setting name",
                    });
                }
            };
            let enabled = match args.next() {
                Some(raw) if raw == "on" => true,
                Some(raw) if raw == "off" => false,
                Some(raw) => return Err(ArgsError::InvalidSwitch { raw }),
                None => {
                    return Err(ArgsError::MissingArgument {
                        command: "set",
                        what: "on or off",
                    });
                }
            };
            Command::Set { toggle, enabled }
        }
        "clear-favorites" => Command::ClearFavorites,
        "reset" => Command::Reset,
        "onboarding" => {
            let mut mark_complete = false;
            for flag in args.by_ref() {
                match flag.as_str() {
                    "--mark-complete" => mark_complete = true,
                    _ => return Err(ArgsError::UnknownArg(flag)),
                }
            }
            Command::Onboarding { mark_complete }
        }
        _ => return Err(ArgsError::UnknownCommand(name)),
    };

    if let Some(extra) = args.next() {
        return Err(ArgsError::UnknownArg(extra));
    }
    Ok(command)
}

fn story_id(
    args: &mut impl Iterator<Item = String>,
    command: &'static str,
) -> Result<StoryId, ArgsError> {
    let raw = args.next().ok_or(ArgsError::MissingArgument {
        command,
        what: "a story id",
    })?;
    raw.parse::<StoryId>()
        .map_err(|err| ArgsError::InvalidStoryId(err.into()))
}

fn parse_verdict(raw: String) -> Result<Verdict, ArgsError> {
    match raw.to_ascii_lowercase().as_str() {
        "truth" | "true" | "t" => Ok(Verdict::Truth),
        "myth" | "false" | "m" => Ok(Verdict::Myth),
        _ => Err(ArgsError::InvalidVerdict { raw }),
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}
