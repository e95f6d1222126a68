use std::path::PathBuf;

use thiserror::Error;
use wayhire_core::FilterTag;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Down,
    Up,
    Open(usize),
    Save(Option<usize>),
    Filter(FilterTag),
    ClearFilters,
    Apply(Option<usize>),
    Name(String),
    Email(String),
    Linkedin(String),
    Resume(PathBuf),
    Submit,
    Cancel,
    ShowSaved,
    ShowJobs,
    Dismiss,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("empty command (type `help`)")]
    Empty,
    #[error("unknown command `{0}` (type `help`)")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("`{0}` is not a row number")]
    BadRow(String),
    #[error("unknown filter `{0}`; use remote, full-time, part-time or clear")]
    BadFilter(String),
}

/// Parses one input line. Rows are 1-based as shown on screen.
pub fn parse(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "" => Err(InputError::Empty),
        "search" | "/" => required(rest, "search").map(|q| Command::Search(q.to_string())),
        "down" | "j" | "more" => Ok(Command::Down),
        "up" | "k" => Ok(Command::Up),
        "open" | "o" => required(rest, "open").and_then(row).map(Command::Open),
        "save" | "s" => optional_row(rest).map(Command::Save),
        "filter" | "f" => match required(rest, "filter")? {
            clear if clear.eq_ignore_ascii_case("clear") => Ok(Command::ClearFilters),
            tag => tag
                .parse::<FilterTag>()
                .map(Command::Filter)
                .map_err(|_| InputError::BadFilter(tag.to_string())),
        },
        "apply" | "a" => optional_row(rest).map(Command::Apply),
        "name" => required(rest, "name").map(|v| Command::Name(v.to_string())),
        "email" => required(rest, "email").map(|v| Command::Email(v.to_string())),
        "linkedin" => required(rest, "linkedin").map(|v| Command::Linkedin(v.to_string())),
        "resume" => required(rest, "resume").map(|v| Command::Resume(PathBuf::from(v))),
        "submit" => Ok(Command::Submit),
        "cancel" => Ok(Command::Cancel),
        "saved" => Ok(Command::ShowSaved),
        "jobs" => Ok(Command::ShowJobs),
        "ok" => Ok(Command::Dismiss),
        "help" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        other => Err(InputError::Unknown(other.to_string())),
    }
}

fn required<'a>(rest: &'a str, command: &'static str) -> Result<&'a str, InputError> {
    if rest.is_empty() {
        Err(InputError::MissingArgument(command))
    } else {
        Ok(rest)
    }
}

fn row(raw: &str) -> Result<usize, InputError> {
    match raw.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(InputError::BadRow(raw.to_string())),
    }
}

fn optional_row(rest: &str) -> Result<Option<usize>, InputError> {
    if rest.is_empty() {
        Ok(None)
    } else {
        row(rest).map(Some)
    }
}
