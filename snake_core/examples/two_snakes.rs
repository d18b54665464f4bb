use snake_core::snake::visualize::BitGrid;
use snake_core::{
    PipelineConfig, RngSource, Snake, SnakePipeline, SnakeRole, expected_exchange,
    verify_exchange,
};
use std::sync::Arc;

fn main() -> snake_core::Result<()> {
    let config = PipelineConfig {
        quantum: false,
        rng: RngSource::Seeded(0x5A4E),
        ..PipelineConfig::default()
    };
    let pipeline = Arc::new(SnakePipeline::standard(&config)?);
    let mut rng = config.rng.rng();

    // === single word ===
    let run = pipeline.run(0x1234, &mut rng);
    println!("{run}\n");
    println!("{}\n", BitGrid::from_word(run.result).render("Bit Pattern"));

    // === exchange ===
    let outputs = ["0001", "0083", "0000", "00E5", "73AF"];
    let expectations = expected_exchange(&pipeline, &outputs)?;
    println!("B should answer: {:?}", expectations.expected_b);
    println!("A should send:   {:?}", expectations.expected_a);

    let snake_a = Snake::new(SnakeRole::A, Arc::clone(&pipeline));
    let snake_b = Snake::new(SnakeRole::B, Arc::clone(&pipeline));
    let outputs: Vec<String> = outputs.iter().map(|s| s.to_string()).collect();
    let report = verify_exchange(
        &snake_a,
        &snake_b,
        &outputs,
        &expectations.expected_a,
        &expectations.expected_b,
        &mut rng,
    )?;

    for event in &report.events {
        println!("{event}");
    }
    println!("verified: {}", report.is_verified());
    Ok(())
}
