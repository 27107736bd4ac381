use anyhow::{Context, Result};
use codondrift_sim::analysis::{nucleotide_similarity, protein_similarity};
use codondrift_sim::base::Sequence;
use codondrift_sim::translation::translate;

pub fn compare_sequences(first: &str, second: &str) -> Result<()> {
    let a = parse(first)?;
    let b = parse(second)?;

    let nucleotide = nucleotide_similarity(&a, &b).context("Cannot compare sequences")?;
    let protein_a = translate(&a);
    let protein_b = translate(&b);

    println!("first nucleotide sequence: {a}");
    println!("second nucleotide sequence: {b}");
    println!("similarity of nucleotide sequences: {nucleotide}");
    println!("first amino acid sequence: {protein_a}");
    println!("second amino acid sequence: {protein_b}");
    if protein_a.is_empty() {
        println!("similarity of amino acid sequences: undefined");
    } else {
        let protein = protein_similarity(&protein_a, &protein_b)?;
        println!("similarity of amino acid sequences: {protein}%");
    }

    Ok(())
}

fn parse(text: &str) -> Result<Sequence> {
    text.trim()
        .parse()
        .with_context(|| format!("Invalid nucleotide sequence '{text}'"))
}
