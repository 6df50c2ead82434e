//! Line commands understood by nav-cycle.

use nav_list::{NavigationError, NavigationList};
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur while parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Missing argument for '{0}'")]
    MissingArgument(&'static str),

    #[error("Invalid argument for '{command}': {value}")]
    InvalidArgument { command: &'static str, value: String },

    #[error("Unexpected argument: {0}")]
    TrailingArgument(String),
}

/// A single navigation command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Next,
    Prev,
    Step(isize),
    First,
    Last,
    Reset,
    Current,
    /// Attach a value that is not in the list.
    Fuzzy(f64),
    Select(usize),
    /// Print the list and cursor.
    Show,
    Quit,
}

fn argument<T: FromStr>(command: &'static str, arg: Option<&str>) -> Result<T, ParseError> {
    let value = arg.ok_or(ParseError::MissingArgument(command))?;
    value.parse().map_err(|_| ParseError::InvalidArgument {
        command,
        value: value.to_string(),
    })
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(ParseError::Empty)?;
        let arg = words.next();

        let command = match name.to_lowercase().as_str() {
            "next" | "n" => Command::Next,
            "prev" | "p" => Command::Prev,
            "step" => Command::Step(argument("step", arg)?),
            "first" => Command::First,
            "last" => Command::Last,
            "reset" => Command::Reset,
            "current" | "c" => Command::Current,
            "fuzzy" => Command::Fuzzy(argument("fuzzy", arg)?),
            "select" => Command::Select(argument("select", arg)?),
            "show" => Command::Show,
            "quit" | "q" | "exit" => Command::Quit,
            other => return Err(ParseError::Unknown(other.to_string())),
        };

        let takes_argument = matches!(
            command,
            Command::Step(_) | Command::Fuzzy(_) | Command::Select(_)
        );
        let extra = if takes_argument { words.next() } else { arg };
        if let Some(extra) = extra {
            return Err(ParseError::TrailingArgument(extra.to_string()));
        }

        Ok(command)
    }
}

/// Apply a command to the list and describe the result.
///
/// `Quit` is left to the caller and yields an empty string.
pub fn execute(list: &mut NavigationList<f64>, command: Command) -> Result<String, NavigationError> {
    let item = match command {
        Command::Next => list.next_item()?,
        Command::Prev => list.prev_item()?,
        Command::Step(offset) => list.step(offset)?,
        Command::First => list.first()?,
        Command::Last => list.last()?,
        Command::Reset => list.reset()?,
        Command::Current => list.current()?,
        Command::Select(index) => list.select(index)?,
        Command::Fuzzy(value) => {
            list.set_fuzzy(value);
            return Ok(format!("pending {}", value));
        }
        Command::Show => {
            let cursor = list
                .cursor()
                .map_or_else(|| "-".to_string(), |index| index.to_string());
            return Ok(format!("{} mode={} cursor={}", list, list.mode(), cursor));
        }
        Command::Quit => return Ok(String::new()),
    };
    Ok(item.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nav_list::BoundaryMode;
    use pretty_assertions::assert_eq;

    fn zoom() -> NavigationList<f64> {
        NavigationList::new(vec![50.0, 100.0, 150.0], Some(100.0), BoundaryMode::Wrap).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("next".parse::<Command>(), Ok(Command::Next));
        assert_eq!("  P ".parse::<Command>(), Ok(Command::Prev));
        assert_eq!("step -3".parse::<Command>(), Ok(Command::Step(-3)));
        assert_eq!("fuzzy 133.5".parse::<Command>(), Ok(Command::Fuzzy(133.5)));
        assert_eq!("select 2".parse::<Command>(), Ok(Command::Select(2)));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Command>(), Err(ParseError::Empty));
        assert_eq!(
            "jump".parse::<Command>(),
            Err(ParseError::Unknown("jump".to_string()))
        );
        assert_eq!(
            "step".parse::<Command>(),
            Err(ParseError::MissingArgument("step"))
        );
        assert_eq!(
            "select -1".parse::<Command>(),
            Err(ParseError::InvalidArgument {
                command: "select",
                value: "-1".to_string()
            })
        );
        assert_eq!(
            "next 2".parse::<Command>(),
            Err(ParseError::TrailingArgument("2".to_string()))
        );
        assert_eq!(
            "step 1 2".parse::<Command>(),
            Err(ParseError::TrailingArgument("2".to_string()))
        );
    }

    #[test]
    fn test_execute_navigation() {
        let mut list = zoom();
        assert_eq!(execute(&mut list, Command::Next), Ok("150".to_string()));
        assert_eq!(execute(&mut list, Command::Next), Ok("50".to_string()));
        assert_eq!(execute(&mut list, Command::Reset), Ok("100".to_string()));
        assert_eq!(execute(&mut list, Command::Step(-2)), Ok("150".to_string()));
    }

    #[test]
    fn test_execute_fuzzy() {
        let mut list = zoom();
        assert_eq!(
            execute(&mut list, Command::Fuzzy(120.0)),
            Ok("pending 120".to_string())
        );
        assert_eq!(execute(&mut list, Command::Prev), Ok("100".to_string()));
    }

    #[test]
    fn test_execute_show() {
        let mut list = zoom();
        assert_eq!(
            execute(&mut list, Command::Show),
            Ok("NavigationList([50.0, 100.0, 150.0]) mode=wrap cursor=1".to_string())
        );
    }

    #[test]
    fn test_execute_errors() {
        let mut list =
            NavigationList::new(vec![1.0, 2.0], None, BoundaryMode::RaiseError).unwrap();
        assert_eq!(
            execute(&mut list, Command::Current),
            Err(NavigationError::NoCurrentItem)
        );
        assert_eq!(
            execute(&mut list, Command::Reset),
            Err(NavigationError::NoDefaultConfigured)
        );
        list.last().unwrap();
        assert_eq!(
            execute(&mut list, Command::Next),
            Err(NavigationError::IndexOutOfRange)
        );
    }
}
