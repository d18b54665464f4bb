use crate::snake::Word;
use bitvec::prelude::*;
use std::fmt::Write;

pub const GRID_SIDE: usize = 4;

const SET_CELL: &str = "█ ";
const CLEAR_CELL: &str = "░ ";

pub fn format_binary(word: Word) -> String {
    format!("{word:016b}")
}

/// 4x4 view of a word: bit `i` lives at row `i / 4`, column `i % 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitGrid {
    cells: [[bool; GRID_SIDE]; GRID_SIDE],
}

impl BitGrid {
    pub fn from_word(word: Word) -> Self {
        let mut cells = [[false; GRID_SIDE]; GRID_SIDE];
        for (index, bit) in word.view_bits::<Lsb0>().iter().by_vals().enumerate() {
            cells[index / GRID_SIDE][index % GRID_SIDE] = bit;
        }
        Self { cells }
    }

    pub fn cell(&self, row: usize, column: usize) -> bool {
        self.cells[row][column]
    }

    pub fn render(&self, title: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== {} ===", title);
        for row in &self.cells {
            for &bit in row {
                out.push_str(if bit { SET_CELL } else { CLEAR_CELL });
            }
            out.push('\n');
        }
        let _ = write!(out, "=== End of {} ===", title);
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitState {
    ZeroZero,
    ZeroOne,
    OneZero,
    OneOne,
}

impl BitState {
    pub fn from_pair(high: bool, low: bool) -> Self {
        match (high, low) {
            (false, false) => BitState::ZeroZero,
            (false, true) => BitState::ZeroOne,
            (true, false) => BitState::OneZero,
            (true, true) => BitState::OneOne,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BitState::ZeroZero => "00",
            BitState::ZeroOne => "01",
            BitState::OneZero => "10",
            BitState::OneOne => "11",
        }
    }
}

/// The word as eight 2-bit states, most significant pair first.
pub fn bit_states(word: Word) -> [BitState; 8] {
    let mut states = [BitState::ZeroZero; 8];
    let bits = word.view_bits::<Msb0>();
    for (state, pair) in states.iter_mut().zip(bits.chunks_exact(2)) {
        *state = BitState::from_pair(pair[0], pair[1]);
    }
    states
}
