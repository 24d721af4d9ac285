//! Renders a histogram for outcomes read from standard input.
//!
//! Input is a JSON array such as `[["One","Zero"],[true,false]]`. With empty
//! input a built-in Bell-pair sample is used instead.
//!
//! ```text
//! echo '[true, true, false]' | cargo run --example histogram
//! ```

use collapse::{CollapseError, HistogramRenderer, RawOutcome, RenderConfig, outcomes_from_json};
use std::io::Read;
use tracing_subscriber::EnvFilter;

// Eight shots of an ideal Bell pair: only |00⟩ and |11⟩ appear
fn bell_sample() -> Vec<RawOutcome> {
    [true, false, true, true, false, false, true, false]
        .into_iter()
        .map(|bit| RawOutcome::from((bit, bit)))
        .collect()
}

fn main() -> Result<(), CollapseError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let outcomes = if input.trim().is_empty() {
        println!("--- collapse demo: no input, using Bell-pair sample ---");
        bell_sample()
    } else {
        outcomes_from_json(&input)?
    };

    let config = RenderConfig::default().with_colorful(std::env::var_os("NO_COLOR").is_none());
    config.validate()?;
    let renderer = HistogramRenderer::new(config);

    println!("{}", renderer.render_text(&outcomes));
    println!("\nStructured summary:");
    println!("{}", renderer.summary(&outcomes).to_json()?);

    Ok(())
}
