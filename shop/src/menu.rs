//! Mobile navigation drawer state.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Something the user did to the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Hamburger icon in the header.
    IconClicked,
    /// Close button inside the drawer.
    CloseClicked,
    /// A navigation link inside the drawer.
    LinkClicked,
    /// The dimmed backdrop itself, not a child of it.
    BackdropClicked,
}

/// Open/closed flag for the drawer. Starts closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Apply an event. Returns `true` when the open flag changed.
    pub fn handle(&mut self, event: MenuEvent) -> bool {
        let next = matches!(event, MenuEvent::IconClicked);
        let changed = next != self.open;
        self.open = next;
        changed
    }
}
