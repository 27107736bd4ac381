use anyhow::{Context, Result};
use codondrift_sim::translation::translate_str;

/// Translate raw text codon by codon; a trailing partial codon is dropped.
pub fn translate_sequence(sequence: &str) -> Result<()> {
    let protein = translate_str(sequence.trim())
        .with_context(|| format!("Failed to translate '{sequence}'"))?;
    println!("{protein}");
    Ok(())
}
