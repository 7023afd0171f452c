//! CLI command for validating documents

use std::path::Path;

use anyhow::Context;
use console::style;

use crate::interchange::read_document;

/// Validate a JSON document, printing every violation found.
pub fn execute(source: &Path, quiet: bool) -> anyhow::Result<()> {
    let doc = read_document(source).with_context(|| format!("reading {}", source.display()))?;
    let report = doc.validate();

    if report.is_valid {
        if !quiet {
            println!("{} {}", style("valid:").green().bold(), doc.id);
        }
        return Ok(());
    }

    if !quiet {
        println!(
            "{} {} ({} problems)",
            style("invalid:").red().bold(),
            doc.id,
            report.errors.len()
        );
        for error in &report.errors {
            println!("  - {error}");
        }
    }

    anyhow::bail!("document failed validation")
}
