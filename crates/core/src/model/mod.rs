mod ids;
mod progress;
mod rank;
mod settings;
mod story;

pub use ids::{ParseIdError, StoryId};
pub use progress::{DEFAULT_TOTAL_STORIES, ProgressPatch, UserProgress};
pub use rank::Rank;
pub use settings::{
    Asset, ImagePathError, ImagePaths, ImagePathsDraft, SettingsPatch, UserSettings,
};
pub use story::{Story, Verdict};
