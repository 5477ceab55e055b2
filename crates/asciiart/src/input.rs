//! Validation of the raw tokens typed at the menu prompts.

use thiserror::Error;

/// A token that could not be turned into the value a prompt asked for.
///
/// The display text is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a integer number!")]
    NotAnInteger { token: String },

    #[error("Please enter a single character")]
    NotSingleCharacter { token: String },
}

/// Parse a whole line as a signed 32-bit integer.
///
/// An optional leading `+` or `-` is accepted. Whitespace is not trimmed, so
/// `" 3"` is rejected.
pub fn parse_int(token: &str) -> Result<i32, InputError> {
    token.parse::<i32>().map_err(|_| InputError::NotAnInteger {
        token: token.to_string(),
    })
}

/// Require the line to be exactly one character.
pub fn parse_char(token: &str) -> Result<char, InputError> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(InputError::NotSingleCharacter {
            token: token.to_string(),
        }),
    }
}

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Create,
    Draw,
    Undo,
    Redo,
    Show,
    History,
    Exit,
}

impl Command {
    /// Map a menu selection (`"1"` to `"7"`) to its command.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "1" => Some(Self::Create),
            "2" => Some(Self::Draw),
            "3" => Some(Self::Undo),
            "4" => Some(Self::Redo),
            "5" => Some(Self::Show),
            "6" => Some(Self::History),
            "7" => Some(Self::Exit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_with_optional_sign_parse() {
        assert_eq!(parse_int("42"), Ok(42));
        assert_eq!(parse_int("-7"), Ok(-7));
        assert_eq!(parse_int("+3"), Ok(3));
        assert_eq!(parse_int("0"), Ok(0));
    }

    #[test]
    fn non_integers_are_rejected() {
        for token in ["", "abc", "1.5", " 3", "3 ", "2147483648", "--1"] {
            let err = parse_int(token).expect_err(token);
            assert_eq!(err.to_string(), "Please enter a integer number!");
        }
    }

    #[test]
    fn single_character_parses() {
        assert_eq!(parse_char("X"), Ok('X'));
        assert_eq!(parse_char(" "), Ok(' '));
        assert_eq!(parse_char("é"), Ok('é'));
    }

    #[test]
    fn empty_or_long_tokens_are_not_characters() {
        for token in ["", "ab", "XYZ"] {
            let err = parse_char(token).expect_err(token);
            assert_eq!(err.to_string(), "Please enter a single character");
        }
    }

    #[test]
    fn menu_selections_map_to_commands() {
        assert_eq!(Command::parse("1"), Some(Command::Create));
        assert_eq!(Command::parse("6"), Some(Command::History));
        assert_eq!(Command::parse("7"), Some(Command::Exit));
        assert_eq!(Command::parse("8"), None);
        assert_eq!(Command::parse(" 1"), None);
        assert_eq!(Command::parse(""), None);
    }
}
