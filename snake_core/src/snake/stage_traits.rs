use crate::snake::Word;
use crate::snake::error::Result;
use crate::snake::trace::Trace;
use rand::RngCore;

/// One step of the snake pipeline.
pub trait Stage: Send + Sync {
    fn name(&self) -> &str;

    /// Transforms `word`, recording every elementary operation in `trace`.
    fn apply(&self, word: Word, rng: &mut dyn RngCore, trace: &mut Trace) -> Word;

    /// Undoes [`Stage::apply`]. Randomised stages return `NotInvertible`.
    fn invert(&self, word: Word) -> Result<Word>;

    fn is_deterministic(&self) -> bool {
        true
    }
}
