//! Per-line pinyin alignment.
//!
//! Every line is treated as a row of monospace columns, one column per
//! character. A qualifying character (CJK Unified Ideographs,
//! U+4E00..=U+9FFF) at column `i` gets its reading written into a companion
//! row starting at column `i`; everything else leaves its column blank.
//!
//! ```text
//! wǒ ài nǐ
//! 我  爱  你。
//! ```
//!
//! Placement rules:
//!
//! - The companion row is exactly as long as the line. A reading that would
//!   run past the end is cut off there.
//! - A reading longer than one column spills into the columns after it. The
//!   next qualifying character still writes its own reading from its own
//!   column, so readings may overwrite each other's tails but every reading
//!   starts where its character is.
//! - Trailing spaces are trimmed from the companion row. Lines without any
//!   qualifying character get no companion row at all.
//!
//! # Example
//!
//! ```rust
//! use pinyin_annotate::annotate::annotate_line;
//!
//! let lookup = |ch: char| match ch {
//!     '你' => Some("nǐ"),
//!     '好' => Some("hǎo"),
//!     _ => None,
//! };
//! let result = annotate_line("你 好 ok", &lookup).unwrap();
//! assert_eq!(result.annotation.as_deref(), Some("nǐhǎo"));
//! assert_eq!(result.line, "你 好 ok");
//! ```

pub mod document;

pub use document::{annotate_document, AnnotatedDocument};

use crate::error::MissingReading;
use crate::lookup::Lookup;

/// Whether `ch` gets a reading placed above it.
pub fn is_qualifying(ch: char) -> bool {
    matches!(ch, '\u{4E00}'..='\u{9FFF}')
}

/// Whether any character of `line` qualifies.
pub fn has_qualifying(line: &str) -> bool {
    line.chars().any(is_qualifying)
}

/// One input line and, if it needed one, the row of readings above it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineAnnotation<'a> {
    /// Trimmed companion row. `None` for pass-through lines.
    pub annotation: Option<String>,
    /// The original line, untouched.
    pub line: &'a str,
}

impl<'a> LineAnnotation<'a> {
    fn pass_through(line: &'a str) -> Self {
        Self {
            annotation: None,
            line,
        }
    }

    pub fn is_annotated(&self) -> bool {
        self.annotation.is_some()
    }

    /// Output lines in emission order: the companion row (if any), then the line.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.annotation.as_deref().into_iter().chain(Some(self.line))
    }
}

/// Build the untrimmed companion row for `line`.
///
/// Returns `Ok(None)` when nothing in the line qualifies. The row always
/// holds exactly `line.chars().count()` characters.
pub fn annotation_row<L>(line: &str, lookup: &L) -> Result<Option<Vec<char>>, MissingReading>
where
    L: Lookup + ?Sized,
{
    if !has_qualifying(line) {
        return Ok(None);
    }
    let chars: Vec<char> = line.chars().collect();
    let mut row = vec![' '; chars.len()];

    for (column, &ch) in chars.iter().enumerate() {
        if !is_qualifying(ch) {
            continue;
        }
        let reading = lookup
            .reading(ch)
            .ok_or(MissingReading { ch, column })?;
        // zip stops at the row end, which truncates overflow
        for (slot, r) in row[column..].iter_mut().zip(reading.chars()) {
            *slot = r;
        }
    }

    Ok(Some(row))
}

/// Annotate a single line.
///
/// Pure: the same line and lookup always give the same result.
pub fn annotate_line<'a, L>(line: &'a str, lookup: &L) -> Result<LineAnnotation<'a>, MissingReading>
where
    L: Lookup + ?Sized,
{
    let Some(row) = annotation_row(line, lookup)? else {
        return Ok(LineAnnotation::pass_through(line));
    };
    let rendered: String = row.into_iter().collect();
    Ok(LineAnnotation {
        annotation: Some(rendered.trim_end().to_string()),
        line,
    })
}
