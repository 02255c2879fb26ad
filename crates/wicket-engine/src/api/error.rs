use thiserror::Error;

/// Failures surfaced while preparing a challenge.
///
/// Verification never errors; a wrong answer is a plain `false`. Every
/// variant here is recoverable by resetting the challenge.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChallengeError {
    /// The embedding reported that the background image failed to load.
    #[error("image load failed: {0}")]
    LoadFailure(String),
    /// Generation inputs cannot produce a valid challenge.
    #[error("invalid challenge setup: {0}")]
    Precondition(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_format_their_cause() {
        let err = ChallengeError::LoadFailure("404".into());
        assert_eq!(err.to_string(), "image load failed: 404");

        let err = ChallengeError::Precondition("image catalog is empty");
        assert_eq!(
            err.to_string(),
            "invalid challenge setup: image catalog is empty"
        );
    }
}
