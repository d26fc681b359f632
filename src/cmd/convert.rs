//! `pinyin-annotate <INPUT>`: annotate one file and write the result.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use tracing::{debug, warn};

use pinyin_annotate::{annotate_document, storage, PinyinLookup, Settings};

const RULE: &str = "----------------------------------------";

/// Convert `input`, write the result, and report to `out`.
///
/// Nothing is written when reading or annotating fails.
pub fn cmd_convert<W: Write>(
    out: &mut W,
    input: &Path,
    output: Option<&Path>,
    settings: &Settings,
    preview: bool,
) -> Result<()> {
    let lookup = PinyinLookup::new(settings.lookup.clone());
    debug!(overrides = lookup.override_count(), "lookup ready");

    let text = storage::read_input(input)?;
    let document = annotate_document(&text, &lookup)?;
    let rendered = document.render();

    let output = output.map_or_else(
        || storage::default_output_path(input, &settings.suffix),
        Path::to_path_buf,
    );
    if output == input {
        warn!(path = %input.display(), "output replaces the input file");
    }
    storage::write_atomic(&output, &rendered)?;

    writeln!(out, "Successfully processed: {}", input.display())?;
    writeln!(out, "Output saved as: {}", output.display())?;

    if preview {
        write_preview(out, &rendered)?;
    }
    Ok(())
}

fn write_preview<W: Write>(out: &mut W, rendered: &str) -> std::io::Result<()> {
    writeln!(out, "\nPreview:")?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "{rendered}")?;
    writeln!(out, "{RULE}")
}
