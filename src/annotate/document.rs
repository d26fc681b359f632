//! Whole-document conversion.

use tracing::debug;

use super::{annotate_line, LineAnnotation};
use crate::error::{Error, Result};
use crate::lookup::Lookup;

/// The annotated form of a document, borrowing its lines from the input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AnnotatedDocument<'a> {
    entries: Vec<LineAnnotation<'a>>,
}

impl<'a> AnnotatedDocument<'a> {
    /// One entry per input line, in input order.
    pub fn entries(&self) -> &[LineAnnotation<'a>] {
        &self.entries
    }

    /// All output lines in order, companion rows included.
    pub fn lines<'s>(&'s self) -> impl Iterator<Item = &'s str> + use<'s, 'a> {
        self.entries.iter().flat_map(|e| e.lines())
    }

    /// Number of input lines that received a companion row.
    pub fn annotated_lines(&self) -> usize {
        self.entries.iter().filter(|e| e.is_annotated()).count()
    }

    /// Number of qualifying characters across the document.
    pub fn annotated_chars(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.is_annotated())
            .map(|e| e.line.chars().filter(|&c| super::is_qualifying(c)).count())
            .sum()
    }

    /// Output lines joined with `'\n'`.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.lines().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(line);
        }
        out
    }
}

/// Annotate every line of `text`.
///
/// Lines are split on `'\n'` only, so a trailing newline survives as a final
/// empty line and `'\r'` stays attached to its line. Fails on the first
/// qualifying character the lookup cannot resolve.
pub fn annotate_document<'a, L>(text: &'a str, lookup: &L) -> Result<AnnotatedDocument<'a>>
where
    L: Lookup + ?Sized,
{
    let entries = text
        .split('\n')
        .enumerate()
        .map(|(idx, line)| {
            annotate_line(line, lookup).map_err(|source| Error::MissingReading {
                line: idx + 1,
                source,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let document = AnnotatedDocument { entries };
    debug!(
        lines_in = document.entries.len(),
        lines_out = document.entries.len() + document.annotated_lines(),
        annotated_chars = document.annotated_chars(),
        "annotated document"
    );
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MissingReading;
    use crate::lookup::TableLookup;

    fn table() -> TableLookup {
        [('你', "nǐ"), ('好', "hǎo"), ('世', "shì"), ('界', "jiè")]
            .into_iter()
            .collect()
    }

    #[test]
    fn mixed_document_keeps_order() {
        let text = "title\n你 好 !\n\nworld 世  界  ";
        let doc = annotate_document(text, &table()).unwrap();
        let lines: Vec<&str> = doc.lines().collect();
        assert_eq!(
            lines,
            vec!["title", "nǐhǎo", "你 好 !", "", "      shìjiè", "world 世  界  "]
        );
        assert_eq!(doc.entries().len(), 4);
        assert_eq!(doc.annotated_lines(), 2);
        assert_eq!(doc.annotated_chars(), 4);
    }

    #[test]
    fn output_line_count_is_bounded() {
        let text = "a\n你  \nb\n好  \n";
        let doc = annotate_document(text, &table()).unwrap();
        let input_lines = text.split('\n').count();
        let output_lines = doc.lines().count();
        assert!(output_lines >= input_lines);
        assert!(output_lines <= 2 * input_lines);

        let originals: Vec<&str> = doc.entries().iter().map(|e| e.line).collect();
        assert_eq!(originals, text.split('\n').collect::<Vec<_>>());
    }

    #[test]
    fn trailing_newline_survives_render() {
        let doc = annotate_document("你好啊\n", &|ch: char| match ch {
            '你' => Some("nǐ"),
            '好' => Some("hǎo"),
            '啊' => Some("a"),
            _ => None,
        })
        .unwrap();
        assert_eq!(doc.render(), "nha\n你好啊\n");
    }

    #[test]
    fn carriage_return_stays_with_line() {
        let doc = annotate_document("你  \r\nok\r", &table()).unwrap();
        assert_eq!(doc.render(), "nǐ\n你  \r\nok\r");
    }

    #[test]
    fn empty_document_is_one_empty_line() {
        let doc = annotate_document("", &table()).unwrap();
        assert_eq!(doc.lines().collect::<Vec<_>>(), vec![""]);
        assert_eq!(doc.render(), "");
    }

    #[test]
    fn pass_through_document_renders_unchanged() {
        let text = "plain text\n  indented\n\tand tabs\n";
        let doc = annotate_document(text, &table()).unwrap();
        assert_eq!(doc.render(), text);
        assert_eq!(doc.annotated_lines(), 0);
    }

    #[test]
    fn missing_reading_carries_line_number() {
        let err = annotate_document("你好\nok\n好吗", &table()).unwrap_err();
        match err {
            Error::MissingReading { line, source } => {
                assert_eq!(line, 3);
                assert_eq!(source, MissingReading { ch: '吗', column: 1 });
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
