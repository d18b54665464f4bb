use crate::snake::Word;
use crate::snake::bit_ops::{Reflector, reflect};
use crate::snake::config::PipelineConfig;
use crate::snake::crowned_prime::CrownStage;
use crate::snake::error::Result;
use crate::snake::quantum::QuantumStage;
use crate::snake::stage_traits::Stage;
use crate::snake::trace::Trace;
use crate::snake::transformer::standard_transformers;
use rand::RngCore;
use std::fmt;

pub const FINAL_REFLECTION_STAGE: &str = "Final Reflection";

pub struct ReflectionStage {
    reflector: Reflector,
}

impl ReflectionStage {
    pub fn new(reflector: Reflector) -> Self {
        Self { reflector }
    }
}

impl Stage for ReflectionStage {
    fn name(&self) -> &str {
        FINAL_REFLECTION_STAGE
    }

    fn apply(&self, word: Word, _rng: &mut dyn RngCore, trace: &mut Trace) -> Word {
        let reflected = reflect(word, self.reflector);
        trace.record(
            FINAL_REFLECTION_STAGE,
            format!("with {}", self.reflector.name()),
            word,
            reflected,
        );
        reflected
    }

    fn invert(&self, word: Word) -> Result<Word> {
        Ok(reflect(word, self.reflector))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineRun {
    pub initial: Word,
    pub result: Word,
    pub trace: Trace,
}

impl fmt::Display for PipelineRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Snake Transformation Pipeline ===")?;
        writeln!(f, "Initial Word: {:016b} ({:#06x})", self.initial, self.initial)?;

        let mut current_stage: Option<&str> = None;
        for entry in self.trace.entries() {
            if entry.stage == FINAL_REFLECTION_STAGE {
                writeln!(f)?;
                writeln!(
                    f,
                    "{} {}: {:016b} -> {:016b} ({:#06x})",
                    entry.stage, entry.label, entry.before, entry.after, entry.after
                )?;
                current_stage = Some(entry.stage.as_str());
                continue;
            }
            if current_stage != Some(entry.stage.as_str()) {
                writeln!(f)?;
                writeln!(f, "Applying {}:", entry.stage)?;
                current_stage = Some(entry.stage.as_str());
            }
            writeln!(f, "{}", entry)?;
        }

        // pipelines without a final reflection still report where the word ended up
        if current_stage != Some(FINAL_REFLECTION_STAGE) {
            writeln!(f)?;
            writeln!(f, "Result: {:016b} ({:#06x})", self.result, self.result)?;
        }
        write!(f, "=== Transformation Complete ===")
    }
}

/// Ordered list of stages every snake pushes its words through.
pub struct SnakePipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl SnakePipeline {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// Transformer1..3, crowns of weights, the quantum step (when enabled) and
    /// the final reflection with `REFLECTOR_FFF`.
    pub fn standard(config: &PipelineConfig) -> Result<Self> {
        config.validate()?;

        let mut stages: Vec<Box<dyn Stage>> = standard_transformers()
            .into_iter()
            .map(|transformer| Box::new(transformer) as Box<dyn Stage>)
            .collect();
        stages.push(Box::new(CrownStage::standard()));
        if config.quantum {
            stages.push(Box::new(QuantumStage::new(config.superposition)?));
        }
        stages.push(Box::new(ReflectionStage::new(Reflector::Full)));

        Ok(Self::new(stages))
    }

    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    pub fn is_deterministic(&self) -> bool {
        self.stages.iter().all(|stage| stage.is_deterministic())
    }

    pub fn run(&self, word: Word, rng: &mut dyn RngCore) -> PipelineRun {
        log::debug!("pipeline start: {:#06x}", word);
        let mut trace = Trace::new();
        let result = self
            .stages
            .iter()
            .fold(word, |current, stage| stage.apply(current, &mut *rng, &mut trace));
        log::debug!("pipeline done: {:#06x} -> {:#06x}", word, result);

        PipelineRun {
            initial: word,
            result,
            trace,
        }
    }

    pub fn transform(&self, word: Word, rng: &mut dyn RngCore) -> Word {
        self.run(word, rng).result
    }

    pub fn invert(&self, word: Word) -> Result<Word> {
        self.stages
            .iter()
            .rev()
            .try_fold(word, |current, stage| stage.invert(current))
    }
}
