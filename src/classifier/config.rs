use serde::{Deserialize, Serialize};

/// Knobs for [`Classifier`](super::Classifier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Unwrap Google AMP links to the post they wrap (default: true)
    pub follow_amp: bool,

    /// Let a post's media hint turn an otherwise external link into media (default: true)
    pub trust_post_hint: bool,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            follow_amp: true,
            trust_post_hint: true,
        }
    }
}

impl ClassifierConfig {
    /// Only the URL itself decides; no AMP unwrapping, no hints.
    pub fn strict() -> Self {
        Self {
            follow_amp: false,
            trust_post_hint: false,
        }
    }
}
