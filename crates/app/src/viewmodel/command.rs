//! Command line parsing

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Check in `name` for the team key `team`
    CheckIn { team: String, name: String },
    /// Absolute override of the total
    Set(i64),
    /// Increment the total; `None` means the default step
    Increment(Option<i64>),
    Status,
    Teams,
    Help,
    Quit,
    Empty,
    /// Input that could not be understood, with a hint
    Invalid(String),
}

pub const USAGE: &str = "\
Commands:
  checkin <team> <name>   check in an attendee (alias: c)
  set <n>                 override the attendee total
  inc [step]              increment the attendee total
  status                  redraw the display
  teams                   list team keys
  help                    show this help
  quit                    leave";

/// Parse one line of input
pub fn parse(line: &str) -> Command {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "" => Command::Empty,
        "checkin" | "c" => {
            // Missing pieces are left blank for the workflow to reject
            let (team, name) = match rest.split_once(char::is_whitespace) {
                Some((team, name)) => (team, name.trim()),
                None => (rest, ""),
            };
            Command::CheckIn {
                team: team.to_string(),
                name: name.to_string(),
            }
        }
        "set" => match rest.parse::<i64>() {
            Ok(n) => Command::Set(n),
            Err(_) => Command::Invalid(format!("'{}' is not a whole number", rest)),
        },
        "inc" => {
            if rest.is_empty() {
                return Command::Increment(None);
            }
            match rest.parse::<i64>() {
                Ok(step) => Command::Increment(Some(step)),
                Err(_) => Command::Invalid(format!("'{}' is not a whole number", rest)),
            }
        }
        "status" => Command::Status,
        "teams" => Command::Teams,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Invalid(format!("Unknown command '{}', try 'help'", other)),
    }
}
