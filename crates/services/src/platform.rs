//! Boundary traits for the collaborators the app calls but does not own.
//!
//! All of them are fire-and-forget: nothing they return is consumed.

use std::fmt;
use std::sync::Arc;

use truths_core::model::StoryId;

/// Screens the app can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Onboarding,
    MainTabs,
    Stories,
    Saved,
    Progress,
    Settings,
    StoryDetail(StoryId),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Onboarding => f.write_str("Onboarding"),
            Route::MainTabs => f.write_str("MainTabs"),
            Route::Stories => f.write_str("Stories"),
            Route::Saved => f.write_str("Saved"),
            Route::Progress => f.write_str("Progress"),
            Route::Settings => f.write_str("Settings"),
            Route::StoryDetail(id) => write!(f, "StoryDetail({id})"),
        }
    }
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Text handed to the platform share sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareMessage {
    pub title: String,
    pub message: String,
}

pub trait ShareSheet: Send + Sync {
    fn share(&self, message: ShareMessage);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HapticIntensity {
    Light,
    #[default]
    Medium,
    Heavy,
}

pub trait Haptics: Send + Sync {
    fn trigger(&self, intensity: HapticIntensity);
}

/// Haptics stand-in for platforms without a vibration motor.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggedHaptics;

impl Haptics for LoggedHaptics {
    fn trigger(&self, intensity: HapticIntensity) {
        tracing::info!(?intensity, "haptic feedback");
    }
}

/// The collaborators a front-end supplies to the services.
#[derive(Clone)]
pub struct Platform {
    pub navigator: Arc<dyn Navigator>,
    pub share: Arc<dyn ShareSheet>,
    pub haptics: Arc<dyn Haptics>,
}
