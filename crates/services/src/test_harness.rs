use std::sync::{Arc, Mutex};

use truths_core::AppState;

use crate::persistence::PersistSink;
use crate::platform::{HapticIntensity, Haptics, Navigator, Platform, Route, ShareMessage, ShareSheet};
use crate::store::StateStore;

/// Records every platform call so tests can assert on side effects.
#[derive(Default)]
pub struct FakePlatform {
    pub routes: Mutex<Vec<Route>>,
    pub shares: Mutex<Vec<ShareMessage>>,
    pub haptics: Mutex<Vec<HapticIntensity>>,
}

impl Navigator for FakePlatform {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

impl ShareSheet for FakePlatform {
    fn share(&self, message: ShareMessage) {
        self.shares.lock().unwrap().push(message);
    }
}

impl Haptics for FakePlatform {
    fn trigger(&self, intensity: HapticIntensity) {
        self.haptics.lock().unwrap().push(intensity);
    }
}

impl FakePlatform {
    pub fn platform(self: &Arc<Self>) -> Platform {
        Platform {
            navigator: self.clone(),
            share: self.clone(),
            haptics: self.clone(),
        }
    }

    pub fn last_route(&self) -> Option<Route> {
        self.routes.lock().unwrap().last().cloned()
    }
}

#[derive(Default)]
pub struct CountingSink {
    pub count: Mutex<usize>,
}

impl PersistSink for CountingSink {
    fn persist(&self, _snapshot: &AppState) {
        *self.count.lock().unwrap() += 1;
    }
}

pub fn fresh_store() -> StateStore {
    StateStore::new(AppState::default(), Arc::new(CountingSink::default()))
}
