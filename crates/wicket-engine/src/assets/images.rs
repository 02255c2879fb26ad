use serde::{Deserialize, Serialize};

use crate::api::error::ChallengeError;
use crate::core::rng::Rng;

/// The pool of background images challenges draw from.
/// Loaded from a JSON manifest at runtime; the engine only ever sees URLs,
/// never pixels.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageCatalog {
    /// Image URLs, as the embedding's loader expects them.
    pub images: Vec<String>,
}

impl ImageCatalog {
    pub fn new(images: Vec<String>) -> Self {
        Self { images }
    }

    /// Parse a catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Uniformly pick one image URL for a fresh challenge.
    pub fn pick(&self, rng: &mut Rng) -> Result<&str, ChallengeError> {
        if self.images.is_empty() {
            return Err(ChallengeError::Precondition("image catalog is empty"));
        }
        Ok(rng.pick(&self.images).as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_catalog() {
        let json = r#"{
            "images": ["bg/forest.jpg", "bg/harbor.jpg", "bg/dunes.jpg"]
        }"#;
        let catalog = ImageCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.images[1], "bg/harbor.jpg");
    }

    #[test]
    fn pick_returns_a_catalog_entry() {
        let catalog = ImageCatalog::new(vec!["a.jpg".into(), "b.jpg".into()]);
        let mut rng = Rng::new(9);
        for _ in 0..20 {
            let picked = catalog.pick(&mut rng).unwrap();
            assert!(picked == "a.jpg" || picked == "b.jpg");
        }
    }

    #[test]
    fn empty_catalog_is_a_precondition_error() {
        let catalog = ImageCatalog::default();
        let mut rng = Rng::new(9);
        assert_eq!(
            catalog.pick(&mut rng),
            Err(ChallengeError::Precondition("image catalog is empty"))
        );
    }
}
