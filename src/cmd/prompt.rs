//! Interactive path prompts used when no input path is given.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

/// Paths collected from the user.
#[derive(Debug, PartialEq, Eq)]
pub struct Answers {
    pub input: PathBuf,
    /// `None` selects the generated output name.
    pub output: Option<PathBuf>,
}

pub fn ask_paths<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<Answers> {
    let input = ask(reader, writer, "Enter the path to your Chinese text file: ")?;
    if input.is_empty() {
        bail!("no input file given");
    }
    let output = ask(
        reader,
        writer,
        "Enter output file path (or press Enter for auto-generated name): ",
    )?;

    Ok(Answers {
        input: PathBuf::from(input),
        output: (!output.is_empty()).then(|| PathBuf::from(output)),
    })
}

/// Print `question` and read one trimmed answer. EOF reads as empty.
fn ask<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, question: &str) -> Result<String> {
    write!(writer, "{question}")?;
    writer.flush()?;

    let mut answer = String::new();
    reader
        .read_line(&mut answer)
        .context("failed to read answer")?;
    Ok(answer.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(stdin: &str) -> (Result<Answers>, String) {
        let mut reader = stdin.as_bytes();
        let mut writer = Vec::new();
        let result = ask_paths(&mut reader, &mut writer);
        (result, String::from_utf8(writer).unwrap())
    }

    #[test]
    fn both_paths_given() {
        let (result, prompts) = answer("story.txt\nout.txt\n");
        assert_eq!(
            result.unwrap(),
            Answers {
                input: PathBuf::from("story.txt"),
                output: Some(PathBuf::from("out.txt")),
            }
        );
        assert!(prompts.contains("Enter the path to your Chinese text file: "));
        assert!(prompts.contains("auto-generated name"));
    }

    #[test]
    fn blank_output_selects_default() {
        let (result, _) = answer("  story.txt  \n\n");
        let answers = result.unwrap();
        assert_eq!(answers.input, PathBuf::from("story.txt"));
        assert_eq!(answers.output, None);
    }

    #[test]
    fn eof_after_input_selects_default() {
        let (result, _) = answer("story.txt");
        assert_eq!(result.unwrap().output, None);
    }

    #[test]
    fn blank_input_is_rejected() {
        let (result, prompts) = answer("\n");
        assert!(result.is_err());
        assert!(!prompts.contains("output file path"));
    }
}
