use crate::snake::error::Result;
use crate::snake::quantum::{DEFAULT_SUPERPOSITION, validate_superposition};
use rand::SeedableRng;
use rand::rngs::StdRng;

const INDEX_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Where the quantum stage draws its coin flips from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RngSource {
    #[default]
    Entropy,
    Seeded(u64),
}

impl RngSource {
    pub fn rng(&self) -> StdRng {
        match self {
            RngSource::Entropy => StdRng::from_os_rng(),
            RngSource::Seeded(seed) => StdRng::seed_from_u64(*seed),
        }
    }

    /// Independent generator for the `index`-th item of a batch.
    pub fn rng_for(&self, index: u64) -> StdRng {
        match self {
            RngSource::Entropy => StdRng::from_os_rng(),
            RngSource::Seeded(seed) => {
                StdRng::seed_from_u64(seed ^ index.wrapping_add(1).wrapping_mul(INDEX_MIX))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineConfig {
    pub quantum: bool,
    pub superposition: f64,
    pub rng: RngSource,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            quantum: true,
            superposition: DEFAULT_SUPERPOSITION,
            rng: RngSource::Entropy,
        }
    }
}

impl PipelineConfig {
    /// Same configuration with the quantum stage switched off.
    pub fn deterministic(self) -> Self {
        Self {
            quantum: false,
            ..self
        }
    }

    pub fn validate(&self) -> Result<()> {
        validate_superposition(self.superposition)?;
        Ok(())
    }
}
