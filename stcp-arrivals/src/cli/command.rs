//! Command parsing.

use crate::resolve::SelectionKind;

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `stop <code>`, or a bare code
    SubmitStop(String),
    /// `line <label>`, `dir <label>`, `pick <label>`
    Select(SelectionKind, String),
    /// `lines`, `dirs`, `stops`
    List(SelectionKind),
    Help,
    Quit,
    /// Blank line
    Nothing,
    Unknown(String),
}

impl Command {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input.is_empty() {
            return Command::Nothing;
        }

        let (word, rest) = match input.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (input, ""),
        };

        match (word.to_lowercase().as_str(), rest) {
            ("stop", code) if !code.is_empty() => Command::SubmitStop(code.to_string()),
            ("line", label) if !label.is_empty() => {
                Command::Select(SelectionKind::Line, label.to_string())
            }
            ("dir", label) if !label.is_empty() => {
                Command::Select(SelectionKind::Direction, label.to_string())
            }
            ("pick", label) if !label.is_empty() => {
                Command::Select(SelectionKind::Stop, label.to_string())
            }
            ("lines", "") => Command::List(SelectionKind::Line),
            ("dirs", "") => Command::List(SelectionKind::Direction),
            ("stops", "") => Command::List(SelectionKind::Stop),
            ("help" | "?", "") => Command::Help,
            ("quit" | "exit", "") => Command::Quit,
            (_, "") => Command::SubmitStop(word.to_string()),
            _ => Command::Unknown(input.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_code_submits_stop() {
        assert_eq!(Command::parse("BLM1"), Command::SubmitStop("BLM1".into()));
        assert_eq!(Command::parse("  CMP2\n"), Command::SubmitStop("CMP2".into()));
        assert_eq!(Command::parse("stop TRD3"), Command::SubmitStop("TRD3".into()));
    }

    #[test]
    fn selections_keep_label_verbatim() {
        assert_eq!(
            Command::parse("line 200 - Bolhão"),
            Command::Select(SelectionKind::Line, "200 - Bolhão".into())
        );
        assert_eq!(
            Command::parse("dir  Castelo do Queijo "),
            Command::Select(SelectionKind::Direction, "Castelo do Queijo".into())
        );
        assert_eq!(
            Command::parse("PICK Bolhão"),
            Command::Select(SelectionKind::Stop, "Bolhão".into())
        );
    }

    #[test]
    fn keywords() {
        assert_eq!(Command::parse("lines"), Command::List(SelectionKind::Line));
        assert_eq!(Command::parse("dirs"), Command::List(SelectionKind::Direction));
        assert_eq!(Command::parse("stops"), Command::List(SelectionKind::Stop));
        assert_eq!(Command::parse("help"), Command::Help);
        assert_eq!(Command::parse("?"), Command::Help);
        assert_eq!(Command::parse("quit"), Command::Quit);
        assert_eq!(Command::parse("exit"), Command::Quit);
        assert_eq!(Command::parse("   "), Command::Nothing);
    }

    #[test]
    fn keyword_without_argument_is_a_stop_code() {
        // `stop` alone is taken as the code "stop", like any other bare word.
        assert_eq!(Command::parse("stop"), Command::SubmitStop("stop".into()));
        assert_eq!(Command::parse("line"), Command::SubmitStop("line".into()));
    }

    #[test]
    fn unknown_multi_word_input() {
        assert_eq!(
            Command::parse("show me buses"),
            Command::Unknown("show me buses".into())
        );
        assert_eq!(Command::parse("lines 200"), Command::Unknown("lines 200".into()));
    }
}
