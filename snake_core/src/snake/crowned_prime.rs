use crate::snake::Word;
use crate::snake::bit_ops::{KEY_333, KEY_555, KEY_AAA, xor_with_key};
use crate::snake::error::Result;
use crate::snake::stage_traits::Stage;
use crate::snake::trace::Trace;
use rand::RngCore;

pub const CROWN_STAGE: &str = "Crowns of Weights";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrownedPrime {
    pub prime: Word,
    pub weight: Word,
}

impl CrownedPrime {
    pub const fn new(prime: Word, weight: Word) -> Self {
        Self { prime, weight }
    }

    /// `prime * weight`, truncated to the word size.
    pub fn mask(&self) -> Word {
        self.prime.wrapping_mul(self.weight)
    }
}

pub const CROWNED_PRIMES: [CrownedPrime; 3] = [
    CrownedPrime::new(3, KEY_333),
    CrownedPrime::new(5, KEY_555),
    CrownedPrime::new(7, KEY_AAA),
];

pub fn apply_crowned_primes(word: Word, crowns: &[CrownedPrime], trace: &mut Trace) -> Word {
    crowns.iter().fold(word, |current, crown| {
        let next = xor_with_key(current, crown.mask());
        trace.record(
            CROWN_STAGE,
            format!("CrownedPrime {} * {}", crown.prime, crown.weight),
            current,
            next,
        );
        next
    })
}

pub struct CrownStage {
    crowns: Vec<CrownedPrime>,
}

impl CrownStage {
    pub fn new(crowns: Vec<CrownedPrime>) -> Self {
        Self { crowns }
    }

    pub fn standard() -> Self {
        Self::new(CROWNED_PRIMES.to_vec())
    }

    /// XOR of every crown mask; applying the stage is the same as XORing this once.
    pub fn combined_mask(&self) -> Word {
        self.crowns.iter().fold(0, |acc, crown| acc ^ crown.mask())
    }
}

impl Stage for CrownStage {
    fn name(&self) -> &str {
        CROWN_STAGE
    }

    fn apply(&self, word: Word, _rng: &mut dyn RngCore, trace: &mut Trace) -> Word {
        apply_crowned_primes(word, &self.crowns, trace)
    }

    fn invert(&self, word: Word) -> Result<Word> {
        Ok(word ^ self.combined_mask())
    }
}
