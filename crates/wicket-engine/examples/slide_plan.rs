//! Dump a generated slide challenge as JSON.
//!
//! Usage: cargo run --example slide_plan [seed]

use wicket_engine::systems::slide;
use wicket_engine::{ImageCatalog, Rng, SlideConfig};

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);

    let config = SlideConfig::default();
    let catalog = ImageCatalog::new(vec!["bg/forest.jpg".into(), "bg/harbor.jpg".into()]);
    let mut rng = Rng::new(seed);

    match slide::generate(&config, &catalog, &mut rng) {
        Ok(challenge) => match serde_json::to_string_pretty(&challenge) {
            Ok(json) => println!("{}", json),
            Err(err) => eprintln!("serialize failed: {}", err),
        },
        Err(err) => eprintln!("generation failed: {}", err),
    }
}
