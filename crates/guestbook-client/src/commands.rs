/// One REPL action. Each maps to at most one network call.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Print the current (filtered) list without touching the network.
    List,
    /// Re-fetch from the backend and replace the local list.
    Refresh,
    /// Set the search query; empty clears the filter.
    Search(String),
    /// Prompt for a new entry and submit it.
    Post,
    /// Delete the entry with the given id (or unambiguous id prefix)
    /// after confirmation.
    Delete(String),
    Help,
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    Unknown(String),
    MissingArg(&'static str),
}

pub fn parse(line: &str) -> Result<Command, ParseError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };

    match word {
        "" => Err(ParseError::Empty),
        "list" | "ls" => Ok(Command::List),
        "refresh" => Ok(Command::Refresh),
        "search" => Ok(Command::Search(rest.to_string())),
        "post" | "sign" => Ok(Command::Post),
        "delete" | "rm" => {
            if rest.is_empty() {
                Err(ParseError::MissingArg("delete <id>"))
            } else {
                Ok(Command::Delete(rest.to_string()))
            }
        }
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(ParseError::Unknown(other.to_string())),
    }
}

pub const HELP: &str = "\
commands:
  list               show entries (filtered by the current search)
  refresh            re-fetch the list from the backend
  search <text>      filter by name, tag, or message; `search` alone clears
  post               leave a new message (prompts for each field)
  delete <id>        delete an entry by id or id prefix (asks first)
  help               this text
  quit               leave";
