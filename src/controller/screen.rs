use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard};

use async_trait::async_trait;

/// The screen the client is currently showing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    /// Browsing the searchable map catalog; no map selected.
    MapList,

    /// Viewing the ranked leaderboard of the named map.
    Leaderboard(String),
}

/// Shared component that allows to look up the active screen
/// and the catalog search text.
#[async_trait]
pub trait LiveScreen: Send + Sync {
    /// While holding this guard, the state is read-only, and can be referenced.
    async fn lock(&self) -> RwLockReadGuard<'_, ScreenState>;

    /// The selected map, or `None` when browsing the map list.
    async fn selected_map(&self) -> Option<String> {
        match self.lock().await.screen() {
            Screen::MapList => None,
            Screen::Leaderboard(map_name) => Some(map_name.clone()),
        }
    }
}

pub struct ScreenState {
    screen: Screen,

    /// The map list's search text; empty means no filter.
    /// Kept across screen changes.
    search: String,
}

impl ScreenState {
    fn init() -> Self {
        ScreenState {
            screen: Screen::MapList,
            search: String::new(),
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn search(&self) -> &str {
        &self.search
    }
}

#[derive(Clone)]
pub struct ScreenController {
    state: Arc<RwLock<ScreenState>>,
}

impl ScreenController {
    pub fn init() -> Self {
        ScreenController {
            state: Arc::new(RwLock::new(ScreenState::init())),
        }
    }

    /// Open the leaderboard of the given map.
    ///
    /// Only transitions from the map list: the list is the only place
    /// selections can originate, so a selection arriving while a
    /// leaderboard is open is ignored. Use `leave_leaderboard` first
    /// to view another map.
    pub async fn select_map(&self, map_name: &str) {
        let mut state = self.state.write().await;
        match &state.screen {
            Screen::MapList => {
                state.screen = Screen::Leaderboard(map_name.to_string());
            }
            Screen::Leaderboard(open_map) => {
                log::debug!(
                    "ignore selection of '{}' while '{}' is open",
                    map_name,
                    open_map
                );
            }
        }
    }

    /// Close the open leaderboard, and go back to the map list.
    pub async fn leave_leaderboard(&self) {
        self.state.write().await.screen = Screen::MapList;
    }

    /// Replace the map list's search text.
    pub async fn set_search(&self, text: &str) {
        self.state.write().await.search = text.to_string();
    }
}

#[async_trait]
impl LiveScreen for ScreenController {
    async fn lock(&self) -> RwLockReadGuard<'_, ScreenState> {
        self.state.read().await
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn test_select_and_back() {
        let screen = ScreenController::init();
        assert_eq!(None, screen.selected_map().await);

        screen.select_map("MapA").await;
        assert_eq!(Some("MapA".to_string()), screen.selected_map().await);

        screen.leave_leaderboard().await;
        assert_eq!(None, screen.selected_map().await);
    }

    #[tokio::test]
    async fn test_selecting_while_viewing_is_ignored() {
        let screen = ScreenController::init();

        screen.select_map("MapA").await;
        screen.select_map("MapB").await;
        assert_eq!(Some("MapA".to_string()), screen.selected_map().await);
    }

    #[tokio::test]
    async fn test_search_survives_screen_changes() {
        let screen = ScreenController::init();

        screen.set_search("desert").await;
        screen.select_map("Desert Run").await;
        screen.leave_leaderboard().await;
        assert_eq!("desert", screen.lock().await.search());
    }
}
