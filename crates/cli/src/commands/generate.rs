use anyhow::Result;
use codondrift_sim::base::{ProteinSequence, Sequence};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

pub fn generate_sequence(length: Option<usize>, protein: bool, seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
        None => Xoshiro256PlusPlus::from_rng(&mut rand::rng()),
    };

    if protein {
        let length = length.unwrap_or(crate::defaults::PROTEIN_LENGTH);
        println!("{}", ProteinSequence::random(length, &mut rng));
    } else {
        let length = length.unwrap_or(crate::defaults::SEQUENCE_LENGTH);
        println!("{}", Sequence::random(length, &mut rng)?);
    }

    Ok(())
}
