//! Types representing the parsed form of a lectionary reference

use std::fmt;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Filter key naming the chapter.
pub const CHAPTER: &str = "chapter__num";
/// Filter key for a single line.
pub const LINE: &str = "num";
/// Filter key for an inclusive lower bound on the line.
pub const LINE_FROM: &str = "num__gte";
/// Filter key for an inclusive upper bound on the line.
pub const LINE_UNTIL: &str = "num__lte";

/// Which lines of a chapter a predicate selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verses {
    Whole,
    Exact(u32),
    From(u32),
    Until(u32),
    Between(u32, u32),
}

/// One chapter and a constraint on its lines. This is the unit handed on to
/// whatever builds the actual range query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Predicate {
    pub chapter: u32,
    pub verses: Verses,
}

impl Predicate {
    pub fn new(chapter: u32, verses: Verses) -> Predicate {
        Predicate { chapter, verses }
    }

    pub fn whole(chapter: u32) -> Predicate {
        Predicate {
            chapter,
            verses: Verses::Whole,
        }
    }

    /// The predicate as filter keys and values. Only the keys relevant to the
    /// constraint are present; a chapter with no line key is the whole
    /// chapter.
    pub fn filters(&self) -> Vec<(&'static str, u32)> {
        let mut result = vec![(CHAPTER, self.chapter)];

        match self.verses {
            Verses::Whole => {}
            Verses::Exact(line) => result.push((LINE, line)),
            Verses::From(line) => result.push((LINE_FROM, line)),
            Verses::Until(line) => result.push((LINE_UNTIL, line)),
            Verses::Between(from, until) => {
                result.push((LINE_FROM, from));
                result.push((LINE_UNTIL, until));
            }
        }

        result
    }
}

impl Serialize for Predicate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let filters = self.filters();
        let mut map = serializer.serialize_map(Some(filters.len()))?;
        for (key, value) in &filters {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self
            .filters()
            .iter()
            .enumerate()
        {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}: {}", key, value)?;
        }
        write!(f, "}}")
    }
}

/// A book together with the chapters and lines cited from it, in the order
/// they were written.
#[derive(Clone, Debug, Serialize)]
pub struct Citation<'i> {
    pub book: &'i str,
    pub chapters: Vec<Predicate>,
    /// The chapter clause the predicates were read from.
    pub query: &'i str,
}

impl<'i> Citation<'i> {
    pub fn new(book: &'i str, query: &'i str) -> Citation<'i> {
        Citation {
            book,
            chapters: Vec::new(),
            query,
        }
    }
}

// Two citations are the same reading if they name the same book and the same
// predicates in the same order, regardless of how the clause was spelled.
impl PartialEq for Citation<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.book == other.book && self.chapters == other.chapters
    }
}

impl Eq for Citation<'_> {}

impl fmt::Display for Citation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "book={}, chapters=[", self.book)?;
        for (i, chapter) in self
            .chapters
            .iter()
            .enumerate()
        {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", chapter)?;
        }
        write!(f, "]")
    }
}

/// A citation located within the line it was found in. Offsets are byte
/// offsets into `line` and always fall on character boundaries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Reference<'i> {
    #[serde(skip)]
    pub line: &'i str,
    pub start: usize,
    pub end: usize,
    pub citation: Citation<'i>,
}

impl<'i> Reference<'i> {
    /// The portion of the line this citation consumed.
    pub fn text(&self) -> &'i str {
        &self.line[self.start..self.end]
    }

    pub fn book(&self) -> &'i str {
        self.citation
            .book
    }

    pub fn chapters(&self) -> &[Predicate] {
        &self
            .citation
            .chapters
    }
}

impl fmt::Display for Reference<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "span=({}:{}), {}", self.start, self.end, self.citation)
    }
}
