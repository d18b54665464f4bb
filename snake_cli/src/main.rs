mod cli;
mod report;

use clap::Parser;
use cli::{Cli, Command};
use snake_core::snake::exchange::Expectations;
use snake_core::snake::snake_io::read_messages;
use snake_core::{
    PipelineConfig, Snake, SnakePipeline, SnakeRole, expected_exchange, parse_message,
    process_input_hex, verify_exchange,
};
use std::path::PathBuf;
use std::sync::Arc;

const SAMPLE_WORD: u16 = 0x1234;
const SAMPLE_OUTPUTS: [&str; 5] = ["0001", "0083", "0000", "00E5", "73AF"];
const PLACEHOLDER_RESPONSE: &str = "FFFF";
const SAMPLE_BATCH: [&str; 8] = [
    "541A4231", "5D324646", "27219A26", "12497B0E",
    "724EDDCB", "0E131617", "9521BEDF", "55544DC7",
];

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[tokio::main]
async fn main() -> CliResult<()> {
    env_logger::init();
    if !run(Cli::parse()).await? {
        std::process::exit(1);
    }
    Ok(())
}

/// Executes one subcommand; `false` means a verification step failed.
async fn run(cli: Cli) -> CliResult<bool> {
    let config = cli.pipeline_config();
    log::info!("pipeline config: {:?}", config);

    match cli.command {
        Command::Demo { computed } => demo(&config, computed, cli.quiet),
        Command::Transform { messages, grid } => {
            transform(&config, &messages, grid, cli.quiet)?;
            Ok(true)
        }
        Command::Verify {
            outputs,
            expected_a,
            expected_b,
        } => {
            let expected_a = expected_a.unwrap_or_else(|| outputs.clone());
            verify(&config, &outputs, &expected_a, &expected_b)
        }
        Command::Batch { file, messages } => {
            batch(&config, file, messages).await?;
            Ok(true)
        }
        Command::Inspect { message } => {
            report::print_inspection(parse_message(&message)?);
            Ok(true)
        }
    }
}

fn demo(config: &PipelineConfig, computed: bool, quiet: bool) -> CliResult<bool> {
    let pipeline = Arc::new(SnakePipeline::standard(config)?);
    let mut rng = config.rng.rng();

    let run = pipeline.run(SAMPLE_WORD, &mut rng);
    report::print_run(&run, quiet);
    report::print_grid(run.result, "Bit Pattern");

    let outputs: Vec<String> = SAMPLE_OUTPUTS.iter().map(|s| s.to_string()).collect();
    let (snake_pipeline, expectations) = if computed {
        let deterministic = Arc::new(SnakePipeline::standard(&config.deterministic())?);
        let expectations = expected_exchange(&deterministic, &outputs)?;
        (deterministic, expectations)
    } else {
        let expectations = Expectations {
            expected_a: outputs.clone(),
            expected_b: vec![PLACEHOLDER_RESPONSE.to_string(); outputs.len()],
        };
        (Arc::clone(&pipeline), expectations)
    };

    let snake_a = Snake::new(SnakeRole::A, Arc::clone(&snake_pipeline));
    let snake_b = Snake::new(SnakeRole::B, snake_pipeline);
    let verification = verify_exchange(
        &snake_a,
        &snake_b,
        &outputs,
        &expectations.expected_a,
        &expectations.expected_b,
        &mut rng,
    )?;
    report::print_verification(&verification)?;

    let outcome = process_input_hex(&pipeline, &SAMPLE_BATCH, config.rng);
    report::print_batch(&outcome);

    Ok(verification.is_verified())
}

fn transform(config: &PipelineConfig, messages: &[String], grid: bool, quiet: bool) -> CliResult<()> {
    let pipeline = SnakePipeline::standard(config)?;
    let mut rng = config.rng.rng();

    for message in messages {
        let run = pipeline.run(parse_message(message)?, &mut rng);
        report::print_run(&run, quiet);
        if grid {
            report::print_grid(run.result, "Bit Pattern");
        }
    }
    Ok(())
}

fn verify(
    config: &PipelineConfig,
    outputs: &[String],
    expected_a: &[String],
    expected_b: &[String],
) -> CliResult<bool> {
    let pipeline = Arc::new(SnakePipeline::standard(config)?);
    let mut rng = config.rng.rng();
    let snake_a = Snake::new(SnakeRole::A, Arc::clone(&pipeline));
    let snake_b = Snake::new(SnakeRole::B, pipeline);

    let verification = verify_exchange(&snake_a, &snake_b, outputs, expected_a, expected_b, &mut rng)?;
    report::print_verification(&verification)?;
    Ok(verification.is_verified())
}

async fn batch(config: &PipelineConfig, file: Option<PathBuf>, mut messages: Vec<String>) -> CliResult<()> {
    let messages = match file {
        Some(path) => {
            let mut from_file = read_messages(&path).await?;
            log::info!("read {} messages from {}", from_file.len(), path.display());
            from_file.append(&mut messages);
            if from_file.is_empty() {
                return Err(format!("no messages in {}", path.display()).into());
            }
            from_file
        }
        None if messages.is_empty() => SAMPLE_BATCH.iter().map(|s| s.to_string()).collect(),
        None => messages,
    };

    let pipeline = SnakePipeline::standard(config)?;
    let outcome = process_input_hex(&pipeline, &messages, config.rng);
    report::print_batch(&outcome);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn cli(command: Command) -> Cli {
        Cli {
            seed: Some(7),
            superposition: 0.5,
            no_quantum: true,
            quiet: true,
            command,
        }
    }

    #[tokio::test]
    async fn test_demo_placeholders_fail_verification() {
        let verified = run(cli(Command::Demo { computed: false })).await.unwrap();
        assert!(!verified);
    }

    #[tokio::test]
    async fn test_demo_computed_expectations_verify() {
        let verified = run(cli(Command::Demo { computed: true })).await.unwrap();
        assert!(verified);
    }

    #[tokio::test]
    async fn test_verify_outcome() {
        let matching = Command::Verify {
            outputs: vec!["0001".to_string()],
            expected_a: Some(vec!["CB56".to_string()]),
            expected_b: vec!["2D5E".to_string()],
        };
        assert!(run(cli(matching)).await.unwrap());

        let placeholder = Command::Verify {
            outputs: vec!["0001".to_string()],
            expected_a: None,
            expected_b: vec![PLACEHOLDER_RESPONSE.to_string()],
        };
        assert!(!run(cli(placeholder)).await.unwrap());
    }

    #[tokio::test]
    async fn test_batch_empty_file_is_an_error() {
        let file = NamedTempFile::new().unwrap();
        let command = Command::Batch {
            file: Some(file.path().to_path_buf()),
            messages: Vec::new(),
        };

        let err = run(cli(command)).await.unwrap_err();
        assert!(err.to_string().starts_with("no messages in"));
    }

    #[tokio::test]
    async fn test_batch_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "541A4231 0001").unwrap();
        let command = Command::Batch {
            file: Some(file.path().to_path_buf()),
            messages: vec!["0083".to_string()],
        };

        assert!(run(cli(command)).await.unwrap());
    }
}
