//! CLI command for encoding documents to raw dialogue strings

use std::path::Path;

use anyhow::Context;

use crate::codec::LineCodec;
use crate::error::Error;
use crate::interchange::read_document;
use crate::vocab::Vocabulary;

/// Encode a JSON document into its wire string.
pub fn execute(source: &Path, destination: Option<&Path>) -> anyhow::Result<()> {
    let doc = read_document(source).with_context(|| format!("reading {}", source.display()))?;

    let report = doc.validate();
    if !report.is_valid {
        return Err(Error::InvalidDocument {
            errors: report.errors,
        }
        .into());
    }

    let vocab = Vocabulary::stardew();
    let raw = LineCodec::new(&vocab).encode_document(&doc);

    match destination {
        Some(path) => {
            std::fs::write(path, &raw).with_context(|| format!("writing {}", path.display()))?;
            println!("Wrote {} segments to {}", doc.line_count(), path.display());
        }
        None => println!("{raw}"),
    }

    Ok(())
}
