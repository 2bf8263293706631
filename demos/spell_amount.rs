// ============================================================================
// Spell Amount Example
// ============================================================================
//
// Usage:
//   cargo run --example spell_amount --features logging -- 1.234.567 -50 1005
//
// Logs at TRACE, so every rendered amount and rejected input is visible.

use dong_words::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let inputs: Vec<String> = std::env::args().skip(1).collect();
    let inputs = if inputs.is_empty() {
        vec!["1234567".to_string(), "-50".to_string(), "1005".to_string()]
    } else {
        inputs
    };

    let styles = [
        ("colloquial", SpellingConfig::colloquial()),
        ("formal", SpellingConfig::formal()),
        ("southern", SpellingConfig::southern()),
    ];

    println!("=== Dong Words Example ===\n");

    for input in &inputs {
        match Amount::parse_input(input) {
            Ok(amount) => {
                println!("{} ₫", amount);
                for (name, config) in styles {
                    let renderer = NumeralRenderer::new(config);
                    println!("  {:<10} {}", name, renderer.render_amount(amount));
                }
            },
            Err(err) => println!("{:?}: {}", input, err),
        }
        println!();
    }
}
