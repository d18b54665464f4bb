use snake_core::snake::exchange::{ExchangeEvent, SnakeRole, VerificationOutcome};
use snake_core::snake::visualize::{BitGrid, bit_states, format_binary};
use snake_core::{BatchOutcome, PipelineRun, VerificationReport, format_message};
use std::io::{self, Write};

pub fn print_run(run: &PipelineRun, quiet: bool) {
    if quiet {
        println!("{} -> {}", format_message(run.initial), format_message(run.result));
    } else {
        println!("\n{}\n", run);
    }
}

pub fn print_grid(word: u16, title: &str) {
    println!("\n{}\n", BitGrid::from_word(word).render(title));
}

pub fn print_inspection(word: u16) {
    println!("Word:   {} ({})", format_binary(word), format_message(word));
    let states: Vec<&str> = bit_states(word).iter().map(|state| state.symbol()).collect();
    println!("States: {}", states.join(" "));
    print_grid(word, "Bit Pattern");
}

/// Conversation on stdout, transcript on stderr.
pub fn print_verification(report: &VerificationReport) -> io::Result<()> {
    write_verification(&mut io::stdout().lock(), &mut io::stderr().lock(), report)
}

pub fn write_verification<O: Write, E: Write>(
    out: &mut O,
    err: &mut E,
    report: &VerificationReport,
) -> io::Result<()> {
    for event in &report.events {
        match event {
            ExchangeEvent::StepStarted { .. } => writeln!(out, "\n{}", event)?,
            ExchangeEvent::Sent { role: SnakeRole::A, message, expected: false } => {
                writeln!(out, "Snake A sends to Snake B: {}", message)?;
                writeln!(err, "{}", event)?;
            }
            ExchangeEvent::Sent { message, .. } => {
                writeln!(out, "Snake A expects to send: {}", message)?;
                writeln!(err, "{}", event)?;
            }
            ExchangeEvent::Received { role: SnakeRole::B, message } => {
                writeln!(out, "Snake B responds with: {}", message)?;
                writeln!(err, "{}", event)?;
            }
            ExchangeEvent::Received { message, .. } => {
                writeln!(out, "Snake A receives: {}", message)?;
                writeln!(err, "{}", event)?;
            }
            ExchangeEvent::StepVerified { .. } => writeln!(err, "{}", event)?,
        }
    }

    match &report.outcome {
        VerificationOutcome::Verified => {
            writeln!(out, "\nAll steps verified successfully for both snakes!\n")
        }
        VerificationOutcome::Failed {
            step,
            side,
            expected,
            actual,
        } => {
            writeln!(err, "Error: Verification failed for {} at step {}", side, step)?;
            writeln!(err, "Expected ({}): {}, but got: {}", side, expected, actual)
        }
    }
}

pub fn print_batch(outcome: &BatchOutcome) {
    for (message, error) in &outcome.rejected {
        eprintln!("Invalid hex string {}: {}", message, error);
    }
    println!("\nProcessed Output: {}", outcome.joined());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed_report() -> VerificationReport {
        VerificationReport {
            events: vec![
                ExchangeEvent::StepStarted { step: 1 },
                ExchangeEvent::Sent {
                    role: SnakeRole::A,
                    message: "0001".to_string(),
                    expected: false,
                },
                ExchangeEvent::Received {
                    role: SnakeRole::B,
                    message: "2D5E".to_string(),
                },
            ],
            outcome: VerificationOutcome::Failed {
                step: 1,
                side: SnakeRole::B,
                expected: "FFFF".to_string(),
                actual: "2D5E".to_string(),
            },
        }
    }

    #[test]
    fn test_verification_splits_conversation_and_transcript() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        write_verification(&mut out, &mut err, &failed_report()).unwrap();

        let out = String::from_utf8(out).unwrap();
        let err = String::from_utf8(err).unwrap();

        assert_eq!(
            out,
            "\n--- Step 1 ---\nSnake A sends to Snake B: 0001\nSnake B responds with: 2D5E\n"
        );
        assert_eq!(
            err,
            "Sent (A Snake): 0001\n\
             Received (B Snake): 2D5E\n\
             Error: Verification failed for B Snake at step 1\n\
             Expected (B Snake): FFFF, but got: 2D5E\n"
        );
    }

    #[test]
    fn test_verified_report_goes_to_stdout() {
        let report = VerificationReport {
            events: vec![ExchangeEvent::StepVerified {
                step: 1,
                role: SnakeRole::A,
            }],
            outcome: VerificationOutcome::Verified,
        };
        let mut out = Vec::new();
        let mut err = Vec::new();
        write_verification(&mut out, &mut err, &report).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\nAll steps verified successfully for both snakes!\n\n"
        );
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "Step 1: A Snake's response verified successfully.\n"
        );
    }
}
