use wasm_bindgen::prelude::*;
use wicket_engine::*;

wicket_web::export_captcha!("captcha-demo");

/// Canned configuration for the demo page: a small pool of bundled photos
/// over the default challenge sizes.
#[wasm_bindgen]
pub fn captcha_demo_config() -> String {
    let config = CaptchaConfig {
        images: vec![
            "assets/bg-forest.jpg".into(),
            "assets/bg-harbor.jpg".into(),
            "assets/bg-mountain.jpg".into(),
        ],
        ..CaptchaConfig::default()
    };
    serde_json::to_string(&config).unwrap_or_else(|_| "{}".into())
}
