pub mod snake;
pub use snake::batch::{BatchOutcome, process_input_hex};
pub use snake::config::{PipelineConfig, RngSource};
pub use snake::error::{Result, SnakeError};
pub use snake::exchange::{Snake, SnakeRole, VerificationReport, expected_exchange, verify_exchange};
pub use snake::message::{format_message, parse_message};
pub use snake::pipeline::{PipelineRun, SnakePipeline};
