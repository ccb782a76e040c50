use crate::constants::{IDENTIFY_COMMAND, PROBLEM_COMMAND, RATING_COMMAND};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Identify { handle: Option<String> },
    Problem { args: Vec<String> },
    Rating { handle: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("expected exactly two difficulty values, got {0}")]
    WrongArgCount(usize),
    #[error("'{0}' is not an integer difficulty")]
    NotAnInteger(String),
}

impl Command {
    /// Recognises a command by case-sensitive prefix at the very start of the
    /// message. Arguments are the whitespace separated tokens after the first
    /// one.
    pub fn parse(content: &str) -> Option<Self> {
        let rest = content
            .split_once(char::is_whitespace)
            .map(|(_, rest)| rest.trim())
            .unwrap_or("");
        let remainder = (!rest.is_empty()).then(|| rest.to_string());

        if content.starts_with(IDENTIFY_COMMAND) {
            Some(Command::Identify { handle: remainder })
        } else if content.starts_with(PROBLEM_COMMAND) {
            Some(Command::Problem {
                args: rest.split_whitespace().map(str::to_string).collect(),
            })
        } else if content.starts_with(RATING_COMMAND) {
            let handle = rest.split_whitespace().next().map(str::to_string);
            Some(Command::Rating { handle })
        } else {
            None
        }
    }
}

/// Parses `<min> <max>` difficulty arguments.
pub fn parse_difficulty_range(args: &[String]) -> Result<(i64, i64), UsageError> {
    let [min, max] = args else {
        return Err(UsageError::WrongArgCount(args.len()));
    };
    let parse = |raw: &String| {
        raw.parse::<i64>()
            .map_err(|_| UsageError::NotAnInteger(raw.clone()))
    };
    Ok((parse(min)?, parse(max)?))
}
