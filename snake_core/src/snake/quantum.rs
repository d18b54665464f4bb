use crate::snake::Word;
use crate::snake::error::{Result, SnakeError};
use crate::snake::stage_traits::Stage;
use crate::snake::trace::Trace;
use bitvec::prelude::*;
use rand::{Rng, RngCore};

pub const QUANTUM_STAGE: &str = "Quantum-Inspired Transformation";
pub const DEFAULT_SUPERPOSITION: f64 = 0.5;

/// Probability of measuring 1 after the Hadamard-like step, checked to lie in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Superposition(f64);

impl Superposition {
    pub fn new(probability: f64) -> Result<Self> {
        validate_superposition(probability).map(Self)
    }

    pub fn probability(self) -> f64 {
        self.0
    }
}

impl Default for Superposition {
    fn default() -> Self {
        Self(DEFAULT_SUPERPOSITION)
    }
}

/// A classical bit pretending to be a qubit: `state` is the probability of measuring 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantumBit {
    state: f64,
}

impl QuantumBit {
    pub fn from_bit(bit: bool) -> Self {
        Self {
            state: if bit { 1.0 } else { 0.0 },
        }
    }

    pub fn state(&self) -> f64 {
        self.state
    }

    pub fn apply_hadamard(&mut self, superposition: Superposition) {
        self.state = superposition.probability();
    }

    pub fn measure<R: Rng + ?Sized>(&self, rng: &mut R) -> bool {
        rng.random_bool(self.state)
    }
}

pub fn validate_superposition(superposition: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&superposition) {
        Ok(superposition)
    } else {
        Err(SnakeError::InvalidSuperposition(superposition))
    }
}

/// One qubit per bit, least significant bit first.
pub fn prepare_qubits(word: Word) -> Vec<QuantumBit> {
    word.view_bits::<Lsb0>()
        .iter()
        .by_vals()
        .map(QuantumBit::from_bit)
        .collect()
}

pub fn quantum_inspired_transform<R: Rng + ?Sized>(
    word: Word,
    superposition: f64,
    rng: &mut R,
    trace: &mut Trace,
) -> Result<Word> {
    let superposition = Superposition::new(superposition)?;
    Ok(measure_word(word, superposition, rng, trace))
}

fn measure_word<R: Rng + ?Sized>(
    word: Word,
    superposition: Superposition,
    rng: &mut R,
    trace: &mut Trace,
) -> Word {
    let mut qubits = prepare_qubits(word);
    for qubit in qubits.iter_mut() {
        qubit.apply_hadamard(superposition);
    }

    let mut measured: Word = 0;
    {
        let bits = measured.view_bits_mut::<Lsb0>();
        for (index, qubit) in qubits.iter().enumerate() {
            bits.set(index, qubit.measure(rng));
        }
    }

    trace.record(QUANTUM_STAGE, "measure", word, measured);
    measured
}

pub struct QuantumStage {
    superposition: Superposition,
}

impl QuantumStage {
    pub fn new(superposition: f64) -> Result<Self> {
        Ok(Self {
            superposition: Superposition::new(superposition)?,
        })
    }

    pub fn superposition(&self) -> f64 {
        self.superposition.probability()
    }
}

impl Stage for QuantumStage {
    fn name(&self) -> &str {
        QUANTUM_STAGE
    }

    fn apply(&self, word: Word, rng: &mut dyn RngCore, trace: &mut Trace) -> Word {
        measure_word(word, self.superposition, rng, trace)
    }

    fn invert(&self, _word: Word) -> Result<Word> {
        Err(SnakeError::NotInvertible(QUANTUM_STAGE.to_string()))
    }

    fn is_deterministic(&self) -> bool {
        false
    }
}
