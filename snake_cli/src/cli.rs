use clap::{Parser, Subcommand};
use snake_core::{PipelineConfig, RngSource};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "snakes",
    version,
    about = "Two snakes trading 16-bit words through a bit-twiddling pipeline"
)]
pub struct Cli {
    /// Seed for the quantum-inspired step; omitted means OS entropy.
    #[arg(long, global = true, env = "SNAKES_SEED")]
    pub seed: Option<u64>,

    /// Probability of measuring 1 after the Hadamard-like step.
    #[arg(long, global = true, env = "SNAKES_SUPERPOSITION", default_value_t = 0.5)]
    pub superposition: f64,

    /// Skip the quantum-inspired step, making the pipeline deterministic.
    #[arg(
        long,
        global = true,
        env = "SNAKES_NO_QUANTUM",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_quantum: bool,

    /// Print results only, without per-operation traces.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            quantum: !self.no_quantum,
            superposition: self.superposition,
            rng: self.seed.map_or(RngSource::Entropy, RngSource::Seeded),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Trace a sample word, verify the snake exchange and process the sample batch.
    Demo {
        /// Verify against expectations computed from the quantum-free pipeline
        /// instead of the FFFF placeholders.
        #[arg(long)]
        computed: bool,
    },

    /// Trace hex messages through the pipeline.
    Transform {
        #[arg(required = true)]
        messages: Vec<String>,

        /// Also draw the result as a 4x4 bit grid.
        #[arg(long)]
        grid: bool,
    },

    /// Run the two-snake verification against the given expectations.
    Verify {
        #[arg(long, num_args = 1.., required = true)]
        outputs: Vec<String>,

        /// Defaults to the outputs themselves.
        #[arg(long, num_args = 1..)]
        expected_a: Option<Vec<String>>,

        #[arg(long, num_args = 1.., required = true)]
        expected_b: Vec<String>,
    },

    /// Transform many messages at once.
    Batch {
        /// File with whitespace-separated hex messages.
        #[arg(long)]
        file: Option<PathBuf>,

        messages: Vec<String>,
    },

    /// Show the binary form, bit grid and bit states of a message.
    Inspect { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard, PoisonError};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_guard() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[test]
    fn test_global_options_build_config() {
        let _env = env_guard();
        let cli = Cli::try_parse_from([
            "snakes", "--seed", "42", "--no-quantum", "transform", "0001", "--grid",
        ])
        .unwrap();

        let config = cli.pipeline_config();
        assert_eq!(config.rng, RngSource::Seeded(42));
        assert!(!config.quantum);
        assert_eq!(config.superposition, 0.5);
        assert!(matches!(
            cli.command,
            Command::Transform { ref messages, grid: true } if messages == &["0001"]
        ));
    }

    #[test]
    fn test_no_quantum_from_env() {
        let _env = env_guard();
        // SAFETY: every test that parses a Cli holds ENV_LOCK
        unsafe { std::env::set_var("SNAKES_NO_QUANTUM", "1") };
        let enabled = Cli::try_parse_from(["snakes", "inspect", "0001"]);

        unsafe { std::env::set_var("SNAKES_NO_QUANTUM", "off") };
        let disabled = Cli::try_parse_from(["snakes", "inspect", "0001"]);

        unsafe { std::env::remove_var("SNAKES_NO_QUANTUM") };

        assert!(enabled.unwrap().no_quantum);
        assert!(!disabled.unwrap().no_quantum);
    }

    #[test]
    fn test_verify_arguments() {
        let _env = env_guard();
        let cli = Cli::try_parse_from([
            "snakes", "verify", "--outputs", "0001", "0083", "--expected-b", "FFFF", "FFFF",
        ])
        .unwrap();

        match cli.command {
            Command::Verify { outputs, expected_a, expected_b } => {
                assert_eq!(outputs, vec!["0001", "0083"]);
                assert_eq!(expected_a, None);
                assert_eq!(expected_b, vec!["FFFF", "FFFF"]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_transform_requires_messages() {
        let _env = env_guard();
        assert!(Cli::try_parse_from(["snakes", "transform"]).is_err());
    }
}
