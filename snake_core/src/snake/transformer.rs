use crate::snake::Word;
use crate::snake::bit_ops::{
    KEY_333, KEY_555, Reflector, invert_bits, reflect, rotate_left, rotate_right, xor_with_key,
};
use crate::snake::error::Result;
use crate::snake::stage_traits::Stage;
use crate::snake::trace::Trace;
use rand::RngCore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    RotateLeft(u32),
    RotateRight(u32),
    XorKey(Word),
    Invert,
    Reflect(Reflector),
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::RotateLeft(_) => "rotate_left",
            Operation::RotateRight(_) => "rotate_right",
            Operation::XorKey(_) => "xor_with_key",
            Operation::Invert => "invert_bits",
            Operation::Reflect(_) => "reflect",
        }
    }

    pub fn apply(self, word: Word) -> Word {
        match self {
            Operation::RotateLeft(bits) => rotate_left(word, bits),
            Operation::RotateRight(bits) => rotate_right(word, bits),
            Operation::XorKey(key) => xor_with_key(word, key),
            Operation::Invert => invert_bits(word),
            Operation::Reflect(reflector) => reflect(word, reflector),
        }
    }

    /// XOR, inversion and reflection are their own inverse.
    pub fn inverse(self) -> Operation {
        match self {
            Operation::RotateLeft(bits) => Operation::RotateRight(bits),
            Operation::RotateRight(bits) => Operation::RotateLeft(bits),
            other => other,
        }
    }
}

/// Named, fixed sequence of operations applied in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformer {
    name: String,
    operations: Vec<Operation>,
}

impl Transformer {
    pub fn new(name: impl Into<String>, operations: Vec<Operation>) -> Self {
        Self {
            name: name.into(),
            operations,
        }
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    pub fn transform(&self, word: Word, trace: &mut Trace) -> Word {
        self.operations.iter().fold(word, |current, op| {
            let next = op.apply(current);
            trace.record(&self.name, op.name(), current, next);
            next
        })
    }

    pub fn inverse_transform(&self, word: Word) -> Word {
        self.operations
            .iter()
            .rev()
            .fold(word, |current, op| op.inverse().apply(current))
    }
}

impl Stage for Transformer {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, word: Word, _rng: &mut dyn RngCore, trace: &mut Trace) -> Word {
        self.transform(word, trace)
    }

    fn invert(&self, word: Word) -> Result<Word> {
        Ok(self.inverse_transform(word))
    }
}

pub fn standard_transformers() -> Vec<Transformer> {
    vec![
        Transformer::new(
            "Transformer1",
            vec![Operation::RotateLeft(3), Operation::XorKey(KEY_333)],
        ),
        Transformer::new(
            "Transformer2",
            vec![Operation::Invert, Operation::RotateRight(2)],
        ),
        Transformer::new(
            "Transformer3",
            vec![
                Operation::Reflect(Reflector::Full),
                Operation::XorKey(KEY_555),
                Operation::RotateLeft(1),
            ],
        ),
    ]
}
