//! The reference grammar. A line of service-book text is scanned for book
//! citations, each of the form
//!
//! ```text
//! Евр., 329 зач. (от полý),XI, 24–26, 32 – XII, 2.
//! ```
//!
//! that is, a short book title, an optional pericope annotation, and a chapter
//! clause. The chapter clause is a `;` separated sequence of units, each
//! either a single chapter with its lines or a span from a line in one chapter
//! to a line in a later one.

use tracing::{debug, warn};

use crate::language::*;
use crate::parsing::roman;

/// Where a line list sits relative to a span across chapters. The list at the
/// start of a span has its trailing single line open towards the end of the
/// chapter; the list at the end has its leading single line open towards the
/// beginning.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Boundary {
    None,
    Start,
    End,
}

/// The two shapes a chapter unit can take.
#[derive(Debug, PartialEq, Eq)]
pub enum Unit<'i> {
    /// `VII, 1-3, 5`
    Single { chapter: &'i str, lines: &'i str },
    /// `XL, 8 – XLII, 5`
    Range {
        first: &'i str,
        opening: &'i str,
        last: &'i str,
        closing: &'i str,
    },
}

enum Entry {
    Single(u32),
    Span(u32, u32),
}

/// Scan a line for every citation in it, left to right. Citations from which
/// no chapters could be read are dropped.
pub fn read_citations(line: &str) -> Vec<Reference<'_>> {
    let re = regex!(
        r"((?:\d\s)?[А-Я][а-я]+)\.?\s*(?:,\s*\d+\s*зач\.\s*(?:\([^)]+\))?)?,?\s*([IVXL]+)[^А-Яа-я.<>()]+[.;,]?"
    );

    let mut references = Vec::new();

    for cap in re.captures_iter(line) {
        let (Some(whole), Some(book), Some(marker)) = (cap.get(0), cap.get(1), cap.get(2)) else {
            continue;
        };

        // drop the title and annotation, the chapter clause starts at the
        // first chapter marker
        let clause = &line[marker.start()..whole.end()];

        let mut citation = Citation::new(book.as_str(), clause);
        let endpos = read_chapters(&mut citation.chapters, clause);

        if citation
            .chapters
            .is_empty()
        {
            debug!("{}", ParsingError::EmptyCitation(whole.as_str()));
            continue;
        }

        references.push(Reference {
            line,
            start: whole.start(),
            end: marker.start() + endpos,
            citation,
        });
    }

    references
}

/// Read a chapter clause, appending its predicates in the order written.
/// Returns the offset within the clause where the consumed text ends: the end
/// of the last chapter unit that could be read, along with the `;` closing it.
pub fn read_chapters(chapters: &mut Vec<Predicate>, clause: &str) -> usize {
    let mut endpos = 0;
    let mut offset = 0;

    for raw in clause.split(';') {
        let start = offset;
        offset += raw.len() + 1;

        let unit = raw.trim();
        if unit.is_empty() {
            continue;
        }

        let Some((shape, end)) = read_unit(unit) else {
            debug!("{}", ParsingError::UnrecognizedChapter(unit));
            continue;
        };

        let leading = raw.len()
            - raw
                .trim_start()
                .len();
        endpos = start + leading + end;

        if raw[leading + end..]
            .trim()
            .is_empty()
        {
            endpos = (start + raw.len() + 1).min(clause.len());
        }

        match shape {
            Unit::Single { chapter, lines } => {
                let chapter = roman::convert(chapter);
                read_lines(chapters, chapter, lines, Boundary::None);
            }
            Unit::Range {
                first,
                opening,
                last,
                closing,
            } => {
                let first = roman::convert(first);
                let last = roman::convert(last);

                read_lines(chapters, first, opening, Boundary::Start);
                for chapter in first.saturating_add(1)..last {
                    chapters.push(Predicate::whole(chapter));
                }
                read_lines(chapters, last, closing, Boundary::End);
            }
        }
    }

    endpos
}

/// Recognize one chapter unit. Both shapes are searched for and the one found
/// furthest left wins, the range shape winning a tie. Returns the shape along
/// with the offset in the unit where its match ended.
pub fn read_unit(unit: &str) -> Option<(Unit<'_>, usize)> {
    let range = regex!(r"([IVXL]+),\s*([^IVXL]+)([IVXL]+),\s*(.+)").captures(unit);
    let single = regex!(r"([IVXL]+),([^<>()]+)").captures(unit);

    let use_single = match (&range, &single) {
        (None, None) => return None,
        (None, Some(_)) => true,
        (Some(_), None) => false,
        (Some(range), Some(single)) => single.get(0)?.start() < range.get(0)?.start(),
    };

    if use_single {
        let cap = single?;
        let shape = Unit::Single {
            chapter: cap.get(1)?.as_str(),
            lines: cap.get(2)?.as_str(),
        };
        Some((shape, cap.get(0)?.end()))
    } else {
        let cap = range?;
        let shape = Unit::Range {
            first: cap.get(1)?.as_str(),
            opening: cap.get(2)?.as_str(),
            last: cap.get(3)?.as_str(),
            closing: cap.get(4)?.as_str(),
        };
        Some((shape, cap.get(0)?.end()))
    }
}

/// Expand a comma separated list of lines and line ranges within one chapter.
/// Entries that contain no number at all are logged and skipped.
pub fn read_lines(chapters: &mut Vec<Predicate>, chapter: u32, lines: &str, boundary: Boundary) {
    let entries: Vec<&str> = lines
        .split(',')
        .collect();
    let last = entries.len() - 1;

    for (i, raw) in entries
        .iter()
        .enumerate()
    {
        let entry = raw.replace('.', "");
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        let verses = match read_entry(entry) {
            Some(Entry::Span(from, until)) => Verses::Between(from, until),
            Some(Entry::Single(line)) => match boundary {
                Boundary::Start if i == last => Verses::From(line),
                Boundary::End if i == 0 => Verses::Until(line),
                _ => Verses::Exact(line),
            },
            None => {
                warn!("{}", ParsingError::InvalidLines(raw.trim()));
                continue;
            }
        };

        chapters.push(Predicate::new(chapter, verses));
    }
}

/// An entry is a span if it begins with two numbers joined by a single
/// separator of any kind (hyphen, en dash, and so on), otherwise it is the
/// first number found in it.
fn read_entry(entry: &str) -> Option<Entry> {
    let re = regex!(r"^([0-9]+)\s*[^0-9]\s*([0-9]+)");
    if let Some(cap) = re.captures(entry) {
        let from = cap
            .get(1)?
            .as_str()
            .parse()
            .ok()?;
        let until = cap
            .get(2)?
            .as_str()
            .parse()
            .ok()?;
        return Some(Entry::Span(from, until));
    }

    let re = regex!(r"[0-9]+");
    let line = re
        .find(entry)?
        .as_str()
        .parse()
        .ok()?;
    Some(Entry::Single(line))
}
