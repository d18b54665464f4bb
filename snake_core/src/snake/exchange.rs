use crate::snake::config::RngSource;
use crate::snake::error::{Result, SnakeError};
use crate::snake::message::{format_message, parse_message, same_message};
use crate::snake::pipeline::SnakePipeline;
use rand::RngCore;
use std::fmt;
use std::sync::Arc;

/// Answer given to a message that cannot be parsed.
pub const FALLBACK_RESPONSE: &str = "0000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeRole {
    A,
    B,
}

impl fmt::Display for SnakeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnakeRole::A => write!(f, "A Snake"),
            SnakeRole::B => write!(f, "B Snake"),
        }
    }
}

pub struct Snake {
    role: SnakeRole,
    pipeline: Arc<SnakePipeline>,
}

impl Snake {
    pub fn new(role: SnakeRole, pipeline: Arc<SnakePipeline>) -> Self {
        Self { role, pipeline }
    }

    pub fn role(&self) -> SnakeRole {
        self.role
    }

    pub fn respond(&self, message: &str, rng: &mut dyn RngCore) -> Result<String> {
        let word = parse_message(message)?;
        let run = self.pipeline.run(word, rng);
        log::debug!("{} answering {}:\n{}", self.role, message, run);
        Ok(format_message(run.result))
    }

    pub fn respond_or_default(&self, message: &str, rng: &mut dyn RngCore) -> String {
        match self.respond(message, rng) {
            Ok(response) => response,
            Err(e) => {
                log::warn!("{}: invalid message format {:?}: {}", self.role, message, e);
                FALLBACK_RESPONSE.to_string()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeEvent {
    StepStarted { step: usize },
    Sent { role: SnakeRole, message: String, expected: bool },
    Received { role: SnakeRole, message: String },
    StepVerified { step: usize, role: SnakeRole },
}

impl fmt::Display for ExchangeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExchangeEvent::StepStarted { step } => write!(f, "--- Step {} ---", step),
            ExchangeEvent::Sent { role, message, expected: false } => {
                write!(f, "Sent ({}): {}", role, message)
            }
            ExchangeEvent::Sent { role, message, expected: true } => {
                write!(f, "Sent ({} expected): {}", role, message)
            }
            ExchangeEvent::Received { role, message } => {
                write!(f, "Received ({}): {}", role, message)
            }
            ExchangeEvent::StepVerified { step, role } => {
                write!(f, "Step {}: {}'s response verified successfully.", step, role)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    Verified,
    Failed {
        step: usize,
        side: SnakeRole,
        expected: String,
        actual: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationReport {
    pub events: Vec<ExchangeEvent>,
    pub outcome: VerificationOutcome,
}

impl VerificationReport {
    pub fn is_verified(&self) -> bool {
        self.outcome == VerificationOutcome::Verified
    }
}

fn check_len(list: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(SnakeError::MismatchedExpectations {
            list,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Plays the two-snake exchange and stops at the first wrong answer.
///
/// At step `i` snake A sends `outputs[i]` and B must answer `expected_b[i]`;
/// then A sends `expected_a[i]` and its own answer must be `outputs[i]`.
pub fn verify_exchange<S: AsRef<str>>(
    snake_a: &Snake,
    snake_b: &Snake,
    outputs: &[S],
    expected_a: &[S],
    expected_b: &[S],
    rng: &mut dyn RngCore,
) -> Result<VerificationReport> {
    check_len("expected_a", outputs.len(), expected_a.len())?;
    check_len("expected_b", outputs.len(), expected_b.len())?;

    let mut events = Vec::new();

    for (index, ((output, exp_a), exp_b)) in outputs
        .iter()
        .zip(expected_a)
        .zip(expected_b)
        .enumerate()
    {
        let step = index + 1;
        let (output, exp_a, exp_b) = (output.as_ref(), exp_a.as_ref(), exp_b.as_ref());
        events.push(ExchangeEvent::StepStarted { step });

        events.push(ExchangeEvent::Sent {
            role: snake_a.role(),
            message: output.to_string(),
            expected: false,
        });
        let response_b = snake_b.respond_or_default(output, rng);
        events.push(ExchangeEvent::Received {
            role: snake_b.role(),
            message: response_b.clone(),
        });
        if !same_message(&response_b, exp_b) {
            log::error!("verification failed for {} at step {}", snake_b.role(), step);
            return Ok(VerificationReport {
                events,
                outcome: VerificationOutcome::Failed {
                    step,
                    side: snake_b.role(),
                    expected: exp_b.to_string(),
                    actual: response_b,
                },
            });
        }
        events.push(ExchangeEvent::StepVerified {
            step,
            role: snake_b.role(),
        });

        events.push(ExchangeEvent::Sent {
            role: snake_a.role(),
            message: exp_a.to_string(),
            expected: true,
        });
        let response_a = snake_a.respond_or_default(exp_a, rng);
        events.push(ExchangeEvent::Received {
            role: snake_a.role(),
            message: response_a.clone(),
        });
        if !same_message(&response_a, output) {
            log::error!("verification failed for {} at step {}", snake_a.role(), step);
            return Ok(VerificationReport {
                events,
                outcome: VerificationOutcome::Failed {
                    step,
                    side: snake_a.role(),
                    expected: output.to_string(),
                    actual: response_a,
                },
            });
        }
        events.push(ExchangeEvent::StepVerified {
            step,
            role: snake_a.role(),
        });
    }

    log::info!("all {} steps verified for both snakes", outputs.len());
    Ok(VerificationReport {
        events,
        outcome: VerificationOutcome::Verified,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expectations {
    pub expected_a: Vec<String>,
    pub expected_b: Vec<String>,
}

/// Expectations a deterministic pipeline `P` satisfies:
/// `expected_b[i] = P(outputs[i])` and `expected_a[i] = P⁻¹(outputs[i])`.
pub fn expected_exchange<S: AsRef<str>>(
    pipeline: &SnakePipeline,
    outputs: &[S],
) -> Result<Expectations> {
    // deterministic stages never draw from the generator
    let mut rng = RngSource::Seeded(0).rng();

    let mut expected_a = Vec::with_capacity(outputs.len());
    let mut expected_b = Vec::with_capacity(outputs.len());
    for output in outputs {
        let word = parse_message(output.as_ref())?;
        expected_a.push(format_message(pipeline.invert(word)?));
        expected_b.push(format_message(pipeline.transform(word, &mut rng)));
    }

    Ok(Expectations {
        expected_a,
        expected_b,
    })
}
