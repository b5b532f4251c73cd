use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::ids::StoryId;

//
// ─── VERDICT ──────────────────────────────────────────────────────────────────
//

/// Whether a story is grounded in history or is a tale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Truth,
    Myth,
}

impl Verdict {
    #[must_use]
    pub fn from_is_truth(is_truth: bool) -> Self {
        if is_truth { Self::Truth } else { Self::Myth }
    }

    #[must_use]
    pub fn is_truth(self) -> bool {
        matches!(self, Self::Truth)
    }

    /// Upper-case label shown on the quiz buttons and the explanation header.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Truth => "TRUTH",
            Self::Myth => "MYTH",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── STORY ────────────────────────────────────────────────────────────────────
//

/// A single narrative passage from the catalog.
///
/// Stories are read-only; the catalog owns them for the lifetime of the
/// process and the rest of the app refers to them by `StoryId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    id: StoryId,
    title: String,
    content: String,
    explanation: String,
    is_truth: bool,
    image: String,
}

impl Story {
    #[must_use]
    pub fn new(
        id: StoryId,
        title: impl Into<String>,
        content: impl Into<String>,
        explanation: impl Into<String>,
        verdict: Verdict,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            explanation: explanation.into(),
            is_truth: verdict.is_truth(),
            image: image.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &StoryId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn verdict(&self) -> Verdict {
        Verdict::from_is_truth(self.is_truth)
    }

    /// Bundled asset path of the illustration.
    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }

    /// Returns true when `guess` matches the story's verdict.
    #[must_use]
    pub fn is_correct(&self, guess: Verdict) -> bool {
        guess == self.verdict()
    }

    /// First paragraph of the content, used as a teaser in lists.
    #[must_use]
    pub fn excerpt(&self) -> &str {
        self.content
            .split("\n\n")
            .next()
            .map_or("", str::trim)
    }
}
