use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

//
// ─── ASSETS ───────────────────────────────────────────────────────────────────
//

/// Images the user can replace with their own files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    Background,
    StoriesIcon,
    SavedIcon,
    ProgressIcon,
    SettingsIcon,
}

impl Asset {
    pub const ALL: [Asset; 5] = [
        Asset::Background,
        Asset::StoriesIcon,
        Asset::SavedIcon,
        Asset::ProgressIcon,
        Asset::SettingsIcon,
    ];

    /// Built-in asset path; `None` means the screen falls back to a gradient.
    #[must_use]
    pub fn builtin(self) -> Option<&'static str> {
        match self {
            Asset::Background => None,
            Asset::StoriesIcon => Some("img/HistoryBook.png"),
            Asset::SavedIcon => Some("img/Heart.png"),
            Asset::ProgressIcon => Some("img/Stats.png"),
            Asset::SettingsIcon => Some("img/Settings.png"),
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Asset::Background => "background",
            Asset::StoriesIcon => "stories icon",
            Asset::SavedIcon => "saved icon",
            Asset::ProgressIcon => "progress icon",
            Asset::SettingsIcon => "settings icon",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ImagePathError {
    #[error("invalid URL for {asset}: {raw}")]
    InvalidUrl { asset: Asset, raw: String },
}

//
// ─── IMAGE PATHS ──────────────────────────────────────────────────────────────
//

/// Validated set of asset overrides.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImagePaths {
    background: Option<String>,
    stories: Option<String>,
    saved: Option<String>,
    progress: Option<String>,
    settings: Option<String>,
}

/// Raw, user-entered overrides.
#[derive(Clone, Debug, Default)]
pub struct ImagePathsDraft {
    pub background: Option<String>,
    pub stories: Option<String>,
    pub saved: Option<String>,
    pub progress: Option<String>,
    pub settings: Option<String>,
}

impl ImagePathsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and normalize the draft into overrides.
    ///
    /// Blank values are treated as "use the built-in asset".
    ///
    /// # Errors
    ///
    /// Returns `ImagePathError::InvalidUrl` if a value carries a `scheme://`
    /// prefix but is not a valid URL.
    pub fn validate(self) -> Result<ImagePaths, ImagePathError> {
        Ok(ImagePaths {
            background: normalize_path(Asset::Background, self.background)?,
            stories: normalize_path(Asset::StoriesIcon, self.stories)?,
            saved: normalize_path(Asset::SavedIcon, self.saved)?,
            progress: normalize_path(Asset::ProgressIcon, self.progress)?,
            settings: normalize_path(Asset::SettingsIcon, self.settings)?,
        })
    }
}

fn normalize_path(asset: Asset, value: Option<String>) -> Result<Option<String>, ImagePathError> {
    let Some(value) = normalize_optional(value) else {
        return Ok(None);
    };
    if value.contains("://") && Url::parse(&value).is_err() {
        return Err(ImagePathError::InvalidUrl { asset, raw: value });
    }
    Ok(Some(value))
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

//
// ─── USER SETTINGS ────────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSettings {
    music_enabled: bool,
    vibration_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    background_image_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stories_icon_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    saved_icon_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    progress_icon_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    settings_icon_path: Option<String>,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            music_enabled: true,
            vibration_enabled: true,
            background_image_path: None,
            stories_icon_path: None,
            saved_icon_path: None,
            progress_icon_path: None,
            settings_icon_path: None,
        }
    }
}

impl UserSettings {
    #[must_use]
    pub fn music_enabled(&self) -> bool {
        self.music_enabled
    }

    #[must_use]
    pub fn vibration_enabled(&self) -> bool {
        self.vibration_enabled
    }

    /// The user override for `asset`, if any.
    #[must_use]
    pub fn image_override(&self, asset: Asset) -> Option<&str> {
        match asset {
            Asset::Background => self.background_image_path.as_deref(),
            Asset::StoriesIcon => self.stories_icon_path.as_deref(),
            Asset::SavedIcon => self.saved_icon_path.as_deref(),
            Asset::ProgressIcon => self.progress_icon_path.as_deref(),
            Asset::SettingsIcon => self.settings_icon_path.as_deref(),
        }
    }

    /// The override for `asset`, falling back to the built-in path.
    #[must_use]
    pub fn resolve_asset(&self, asset: Asset) -> Option<&str> {
        self.image_override(asset).or_else(|| asset.builtin())
    }

    pub(crate) fn merge(&mut self, patch: SettingsPatch) {
        let SettingsPatch {
            music_enabled,
            vibration_enabled,
            background_image_path,
            stories_icon_path,
            saved_icon_path,
            progress_icon_path,
            settings_icon_path,
        } = patch;

        if let Some(value) = music_enabled {
            self.music_enabled = value;
        }
        if let Some(value) = vibration_enabled {
            self.vibration_enabled = value;
        }
        if let Some(value) = background_image_path {
            self.background_image_path = value;
        }
        if let Some(value) = stories_icon_path {
            self.stories_icon_path = value;
        }
        if let Some(value) = saved_icon_path {
            self.saved_icon_path = value;
        }
        if let Some(value) = progress_icon_path {
            self.progress_icon_path = value;
        }
        if let Some(value) = settings_icon_path {
            self.settings_icon_path = value;
        }
    }
}

//
// ─── PATCH ────────────────────────────────────────────────────────────────────
//

/// Partial update of `UserSettings`.
///
/// The outer `Option` selects whether a field is touched; for image paths the
/// inner `Option` is the new value, so `Some(None)` clears an override.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub music_enabled: Option<bool>,
    pub vibration_enabled: Option<bool>,
    pub background_image_path: Option<Option<String>>,
    pub stories_icon_path: Option<Option<String>>,
    pub saved_icon_path: Option<Option<String>>,
    pub progress_icon_path: Option<Option<String>>,
    pub settings_icon_path: Option<Option<String>>,
}

impl SettingsPatch {
    #[must_use]
    pub fn music(enabled: bool) -> Self {
        Self {
            music_enabled: Some(enabled),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn vibration(enabled: bool) -> Self {
        Self {
            vibration_enabled: Some(enabled),
            ..Self::default()
        }
    }

    /// Replace every override with the validated set.
    #[must_use]
    pub fn image_paths(paths: ImagePaths) -> Self {
        let ImagePaths {
            background,
            stories,
            saved,
            progress,
            settings,
        } = paths;
        Self {
            background_image_path: Some(background),
            stories_icon_path: Some(stories),
            saved_icon_path: Some(saved),
            progress_icon_path: Some(progress),
            settings_icon_path: Some(settings),
            ..Self::default()
        }
    }
}
