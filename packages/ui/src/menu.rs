//! Open/closed state for dismissible panels.
//!
//! Both the profile dropdown and the off-canvas sidebar are a single
//! [`MenuState`] that moves only in response to a [`MenuEvent`].

use dioxus::prelude::*;

/// Key reported by `KeyboardEvent.key` for the escape key.
pub const ESCAPE_KEY: &str = "Escape";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent<'a> {
    /// The trigger button was clicked.
    Toggle,
    /// A click landed somewhere in the page.
    Pointer { inside: bool },
    /// A key was released, carrying `KeyboardEvent.key`.
    KeyUp(&'a str),
    /// The user followed a link out of the panel.
    Navigate,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Next state after `event`.
    pub fn apply(self, event: MenuEvent<'_>) -> MenuState {
        match (self, event) {
            (MenuState::Closed, MenuEvent::Toggle) => MenuState::Open,
            (MenuState::Open, MenuEvent::Toggle) => MenuState::Closed,
            (MenuState::Open, MenuEvent::Pointer { inside: false }) => MenuState::Closed,
            (MenuState::Open, MenuEvent::KeyUp(key)) if key == ESCAPE_KEY => MenuState::Closed,
            (_, MenuEvent::Navigate) => MenuState::Closed,
            (state, _) => state,
        }
    }
}

/// Feed `event` into a menu signal, writing only when the state changes.
pub fn dispatch(menu: &mut Signal<MenuState>, event: MenuEvent<'_>) {
    let current = *menu.peek();
    let next = current.apply(event);
    if next != current {
        tracing::debug!(?event, from = ?current, to = ?next, "menu transition");
        menu.set(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn test_toggle_flips_state() {
        let open = MenuState::Closed.apply(MenuEvent::Toggle);
        assert_eq!(open, MenuState::Open);
        assert_eq!(open.apply(MenuEvent::Toggle), MenuState::Closed);
    }

    #[test]
    fn test_outside_pointer_closes_open_menu() {
        let state = MenuState::Open.apply(MenuEvent::Pointer { inside: false });
        assert_eq!(state, MenuState::Closed);
    }

    #[test]
    fn test_inside_pointer_keeps_menu_open() {
        let state = MenuState::Open.apply(MenuEvent::Pointer { inside: true });
        assert_eq!(state, MenuState::Open);
    }

    #[test]
    fn test_pointer_never_opens() {
        assert_eq!(
            MenuState::Closed.apply(MenuEvent::Pointer { inside: true }),
            MenuState::Closed
        );
        assert_eq!(
            MenuState::Closed.apply(MenuEvent::Pointer { inside: false }),
            MenuState::Closed
        );
    }

    #[test]
    fn test_escape_closes_open_menu() {
        assert_eq!(
            MenuState::Open.apply(MenuEvent::KeyUp(ESCAPE_KEY)),
            MenuState::Closed
        );
    }

    #[test]
    fn test_escape_is_noop_when_closed() {
        assert_eq!(
            MenuState::Closed.apply(MenuEvent::KeyUp(ESCAPE_KEY)),
            MenuState::Closed
        );
    }

    #[test]
    fn test_other_keys_are_ignored() {
        assert_eq!(MenuState::Open.apply(MenuEvent::KeyUp("Enter")), MenuState::Open);
        assert_eq!(MenuState::Open.apply(MenuEvent::KeyUp("escape")), MenuState::Open);
    }

    #[test]
    fn test_navigation_closes() {
        assert_eq!(MenuState::Open.apply(MenuEvent::Navigate), MenuState::Closed);
        assert_eq!(MenuState::Closed.apply(MenuEvent::Navigate), MenuState::Closed);
    }
}
