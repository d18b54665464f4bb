use crate::snake::config::RngSource;
use crate::snake::error::{Result, SnakeError};
use crate::snake::message::{format_message, parse_message};
use crate::snake::pipeline::SnakePipeline;
use rayon::prelude::*;

#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Responses for the valid messages, in input order.
    pub processed: Vec<String>,
    pub rejected: Vec<(String, SnakeError)>,
}

impl BatchOutcome {
    pub fn joined(&self) -> String {
        self.processed.join(" ")
    }
}

/// Pushes every message through the pipeline in parallel.
///
/// The `i`-th message draws from `source.rng_for(i)`, so a seeded source gives
/// the same answers however rayon schedules the work.
pub fn process_input_hex<S>(
    pipeline: &SnakePipeline,
    messages: &[S],
    source: RngSource,
) -> BatchOutcome
where
    S: AsRef<str> + Sync,
{
    let results: Vec<(&str, Result<String>)> = messages
        .par_iter()
        .enumerate()
        .map(|(index, message)| {
            let message = message.as_ref();
            let mut rng = source.rng_for(index as u64);
            let response = parse_message(message)
                .map(|word| format_message(pipeline.transform(word, &mut rng)));
            (message, response)
        })
        .collect();

    let mut outcome = BatchOutcome::default();
    for (message, response) in results {
        match response {
            Ok(response) => outcome.processed.push(response),
            Err(e) => {
                log::warn!("Invalid hex string {}: {}", message, e);
                outcome.rejected.push((message.to_string(), e));
            }
        }
    }
    log::debug!(
        "batch done: {} processed, {} rejected",
        outcome.processed.len(),
        outcome.rejected.len()
    );
    outcome
}
