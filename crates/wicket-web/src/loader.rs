//! Async image loading.

use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

/// Load an image by url. Resolves once the pixels are ready to draw,
/// rejects with a short message otherwise.
pub async fn load_image(url: &str) -> Result<HtmlImageElement, String> {
    let image =
        HtmlImageElement::new().map_err(|_| String::from("image element unavailable"))?;
    image.set_src(url);
    JsFuture::from(image.decode())
        .await
        .map_err(|_| format!("failed to load {}", url))?;
    Ok(image)
}
