//! Mobile menu state machine
//!
//! Two states, three events, every (state, event) pair defined. Selecting an
//! entry always closes the menu *before* the navigation request is handed to
//! the router, so no render can observe the menu open at the new route.

use serde::Serialize;
use tracing::debug;

/// Open/closed state of the mobile menu. Starts `Closed` on every mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// User input the menu reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEvent {
    /// Hamburger / close button
    Toggle,
    /// A navigation entry (or the logo) was selected
    Select(String),
    /// Click on the full-viewport backdrop
    BackdropClick,
}

/// Navigation the router collaborator should perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    pub path: String,
}

/// Router collaborator. Fire-and-forget.
pub trait Navigator {
    fn navigate_to(&mut self, path: &str);
}

impl<F: FnMut(&str)> Navigator for F {
    fn navigate_to(&mut self, path: &str) {
        self(path)
    }
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open)
    }

    /// Pure transition function
    pub fn next(self, event: &MenuEvent) -> (MenuState, Option<NavigationRequest>) {
        match (self, event) {
            (MenuState::Closed, MenuEvent::Toggle) => (MenuState::Open, None),
            (MenuState::Open, MenuEvent::Toggle) => (MenuState::Closed, None),
            (_, MenuEvent::Select(path)) => (
                MenuState::Closed,
                Some(NavigationRequest { path: path.clone() }),
            ),
            (_, MenuEvent::BackdropClick) => (MenuState::Closed, None),
        }
    }

    /// Apply `event` in place, returning the navigation to issue once the new
    /// state has been committed.
    pub fn apply(&mut self, event: &MenuEvent) -> Option<NavigationRequest> {
        let previous = *self;
        let (next, request) = previous.next(event);
        *self = next;
        debug!(?previous, ?next, ?event, "Menu transition");
        request
    }
}

/// Owns the menu state for one mounted header
#[derive(Debug, Default)]
pub struct MenuController {
    state: MenuState,
}

impl MenuController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Commit the transition for `event`, then issue any navigation request
    pub fn dispatch(&mut self, event: MenuEvent, navigator: &mut dyn Navigator) -> MenuState {
        let request = self.state.apply(&event);
        if let Some(request) = request {
            debug!(path = %request.path, "Navigation requested");
            navigator.navigate_to(&request.path);
        }
        self.state
    }

    pub fn toggle(&mut self) -> MenuState {
        self.dispatch(MenuEvent::Toggle, &mut |_: &str| {})
    }

    pub fn dismiss(&mut self) -> MenuState {
        self.dispatch(MenuEvent::BackdropClick, &mut |_: &str| {})
    }

    pub fn select(&mut self, path: &str, navigator: &mut dyn Navigator) -> MenuState {
        self.dispatch(MenuEvent::Select(path.to_string()), navigator)
    }
}
