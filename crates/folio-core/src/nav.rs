//! Navigation-menu state
//!
//! State for the responsive navigation bar: the slide-in mobile menu and the
//! hamburger icon that hides while the page scrolls down and reappears while
//! it scrolls up.
//!
//! Scroll handling is deliberately scoped: each subscribing component owns
//! one [`ScrollWatcher`], created on mount and dropped on unmount, and feeds
//! it scroll offsets from its own handler. There is no process-global scroll
//! callback to overwrite.

/// Direction of the most recent scroll movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// Scoped scroll-position observer
///
/// Feed it successive vertical offsets; it reports the direction of travel.
/// The first sample and any non-finite offset yield no direction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollWatcher {
    last_offset: Option<f64>,
}

impl ScrollWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe the current vertical scroll offset
    pub fn observe(&mut self, offset: f64) -> Option<ScrollDirection> {
        if !offset.is_finite() {
            return None;
        }
        let direction = match self.last_offset {
            Some(last) if offset > last => Some(ScrollDirection::Down),
            Some(last) if offset < last => Some(ScrollDirection::Up),
            _ => None,
        };
        self.last_offset = Some(offset);
        direction
    }
}

/// Mobile navigation menu state
///
/// The hamburger icon visibility and the menu open flag are independent: a
/// scroll while the menu is open changes the icon state underneath without
/// dismissing the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavMenu {
    menu_open: bool,
    icon_visible: bool,
}

impl Default for NavMenu {
    fn default() -> Self {
        Self {
            menu_open: false,
            icon_visible: true,
        }
    }
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the slide-in menu is open
    pub fn is_open(&self) -> bool {
        self.menu_open
    }

    /// Whether the hamburger icon is shown
    pub fn icon_visible(&self) -> bool {
        self.icon_visible
    }

    /// Open the slide-in menu
    pub fn open(&mut self) {
        self.menu_open = true;
    }

    /// Close the slide-in menu (close button, tab selection, backdrop tap)
    pub fn close(&mut self) {
        self.menu_open = false;
    }

    /// Apply a scroll movement: scrolling down hides the hamburger icon,
    /// scrolling up restores it
    pub fn on_scroll(&mut self, direction: ScrollDirection) {
        self.icon_visible = matches!(direction, ScrollDirection::Up);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watcher_first_sample_has_no_direction() {
        let mut watcher = ScrollWatcher::new();
        assert_eq!(watcher.observe(120.0), None);
    }

    #[test]
    fn test_watcher_reports_direction() {
        let mut watcher = ScrollWatcher::new();
        watcher.observe(100.0);

        assert_eq!(watcher.observe(250.0), Some(ScrollDirection::Down));
        assert_eq!(watcher.observe(80.0), Some(ScrollDirection::Up));
        assert_eq!(watcher.observe(80.0), None);
    }

    #[test]
    fn test_watcher_ignores_non_finite_offsets() {
        let mut watcher = ScrollWatcher::new();
        watcher.observe(100.0);

        assert_eq!(watcher.observe(f64::NAN), None);
        // The bad sample is not retained as the comparison point
        assert_eq!(watcher.observe(150.0), Some(ScrollDirection::Down));
    }

    #[test]
    fn test_menu_open_close() {
        let mut menu = NavMenu::new();
        assert!(!menu.is_open());
        assert!(menu.icon_visible());

        menu.open();
        assert!(menu.is_open());

        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_scroll_toggles_icon_not_menu() {
        let mut menu = NavMenu::new();
        menu.open();

        menu.on_scroll(ScrollDirection::Down);
        assert!(!menu.icon_visible());
        assert!(menu.is_open());

        menu.on_scroll(ScrollDirection::Up);
        assert!(menu.icon_visible());
    }
}
