use std::fmt;

/// Problems met while reading a reference. None of these stop a parse; they
/// are reported through the log and the offending piece is skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsingError<'i> {
    UnrecognizedChapter(&'i str),
    InvalidLines(&'i str),
    EmptyCitation(&'i str),
}

impl<'i> ParsingError<'i> {
    /// The text the problem was found in.
    pub fn fragment(&self) -> &'i str {
        match self {
            ParsingError::UnrecognizedChapter(fragment) => *fragment,
            ParsingError::InvalidLines(fragment) => *fragment,
            ParsingError::EmptyCitation(fragment) => *fragment,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ParsingError::UnrecognizedChapter(_) => "unrecognized chapter".to_string(),
            ParsingError::InvalidLines(_) => "can't parse chapter lines".to_string(),
            ParsingError::EmptyCitation(_) => "no chapters in citation".to_string(),
        }
    }
}

impl<'i> fmt::Display for ParsingError<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.message(), self.fragment())
    }
}
