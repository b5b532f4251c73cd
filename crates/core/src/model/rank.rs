use std::fmt;

/// Seven-tier title awarded for a ratio in `[0, 1]`.
///
/// The same ladder is used for truth accuracy and reading progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Unawakened,
    Curious,
    Seeker,
    Discerner,
    Wise,
    Enlightened,
    TruthKeeper,
}

impl Rank {
    /// Maps a ratio to its rank band.
    ///
    /// Exactly 0 (and anything non-positive or NaN) is `Unawakened`; each band
    /// is closed at its lower bound, and 1.0 or above is `TruthKeeper`.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio.is_nan() || ratio <= 0.0 {
            Self::Unawakened
        } else if ratio < 0.2 {
            Self::Curious
        } else if ratio < 0.4 {
            Self::Seeker
        } else if ratio < 0.6 {
            Self::Discerner
        } else if ratio < 0.8 {
            Self::Wise
        } else if ratio < 1.0 {
            Self::Enlightened
        } else {
            Self::TruthKeeper
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Unawakened => "The Unawakened",
            Self::Curious => "The Curious",
            Self::Seeker => "The Seeker",
            Self::Discerner => "The Discerner",
            Self::Wise => "The Wise",
            Self::Enlightened => "The Enlightened",
            Self::TruthKeeper => "Truth Keeper",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
