use crate::snake::Word;

pub const WORD_BITS: u32 = Word::BITS;

pub const REFLECTOR_000: Word = 0x0000;
pub const REFLECTOR_FFF: Word = 0xFFFF;

pub const KEY_333: Word = 0x0333;
pub const KEY_555: Word = 0x0555;
pub const KEY_AAA: Word = 0x0AAA;

/// Constant mask XORed against a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reflector {
    Zero,
    Full,
}

impl Reflector {
    pub fn mask(self) -> Word {
        match self {
            Reflector::Zero => REFLECTOR_000,
            Reflector::Full => REFLECTOR_FFF,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Reflector::Zero => "REFLECTOR_000",
            Reflector::Full => "REFLECTOR_FFF",
        }
    }
}

pub fn rotate_left(word: Word, bits: u32) -> Word {
    let r = bits % WORD_BITS;
    let inv = (WORD_BITS - r) % WORD_BITS;
    (word << r) | (word >> inv)
}

pub fn rotate_right(word: Word, bits: u32) -> Word {
    let r = bits % WORD_BITS;
    let inv = (WORD_BITS - r) % WORD_BITS;
    (word >> r) | (word << inv)
}

pub fn xor_with_key(word: Word, key: Word) -> Word {
    word ^ key
}

pub fn invert_bits(word: Word) -> Word {
    !word
}

pub fn reflect(word: Word, reflector: Reflector) -> Word {
    word ^ reflector.mask()
}
