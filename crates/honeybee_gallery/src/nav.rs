//! Page navigation state
//!
//! Section anchors plus the three toggles of the header: compact mode once the
//! page has scrolled, the mobile menu, and the color theme.

use serde::Serialize;

/// Scroll offset past which the header compacts, in pixels
pub const COMPACT_SCROLL_PX: f32 = 50.0;

/// One in-page section jump
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub name: &'static str,
    /// Section id, without the leading `#`
    pub section: &'static str,
    /// Shown in the header bar (others are reachable by anchor only)
    pub primary: bool,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.section)
    }
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        name: "Animations",
        section: "animations",
        primary: true,
    },
    NavItem {
        name: "Gradients",
        section: "gradients",
        primary: true,
    },
    NavItem {
        name: "Fonts",
        section: "fonts",
        primary: true,
    },
    NavItem {
        name: "Colors",
        section: "colors",
        primary: false,
    },
    NavItem {
        name: "Components",
        section: "components",
        primary: false,
    },
    NavItem {
        name: "Typography",
        section: "typography",
        primary: false,
    },
    NavItem {
        name: "Guidelines",
        section: "guidelines",
        primary: false,
    },
    NavItem {
        name: "Agent Access",
        section: "agent",
        primary: false,
    },
];

/// Resolve an anchor (`#fonts` or `fonts`) to its section
pub fn resolve_anchor(anchor: &str) -> Option<&'static NavItem> {
    let section = anchor.strip_prefix('#').unwrap_or(anchor);
    NAV_ITEMS
        .iter()
        .find(|item| item.section.eq_ignore_ascii_case(section))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderMode {
    #[default]
    Expanded,
    Compact,
}

/// Header state of the page
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Navigation {
    header: HeaderMode,
    menu: MenuState,
    theme: Theme,
    current: Option<&'static str>,
}

impl Navigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn on_scroll(&mut self, offset_px: f32) -> HeaderMode {
        let mode = if offset_px > COMPACT_SCROLL_PX {
            HeaderMode::Compact
        } else {
            HeaderMode::Expanded
        };
        if mode != self.header {
            tracing::trace!(?mode, offset_px, "header mode changed");
            self.header = mode;
        }
        mode
    }

    pub fn header(&self) -> HeaderMode {
        self.header
    }

    pub fn is_compact(&self) -> bool {
        self.header == HeaderMode::Compact
    }

    pub fn toggle_menu(&mut self) -> MenuState {
        self.menu = match self.menu {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
        self.menu
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    /// Follow an anchor; the mobile menu closes either way
    pub fn navigate(&mut self, anchor: &str) -> Option<&'static NavItem> {
        self.menu = MenuState::Closed;
        let item = resolve_anchor(anchor)?;
        self.current = Some(item.section);
        tracing::debug!(section = item.section, "navigate");
        Some(item)
    }

    /// Last section navigated to
    pub fn current_section(&self) -> Option<&'static str> {
        self.current
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_compacts_past_threshold() {
        let mut nav = Navigation::new();
        assert_eq!(nav.on_scroll(50.0), HeaderMode::Expanded);
        assert_eq!(nav.on_scroll(50.5), HeaderMode::Compact);
        assert!(nav.is_compact());
        assert_eq!(nav.on_scroll(0.0), HeaderMode::Expanded);
    }

    #[test]
    fn test_navigation_closes_menu() {
        let mut nav = Navigation::new();
        assert_eq!(nav.toggle_menu(), MenuState::Open);

        let item = nav.navigate("#gradients").unwrap();
        assert_eq!(item.href(), "#gradients");
        assert_eq!(nav.menu(), MenuState::Closed);
        assert_eq!(nav.current_section(), Some("gradients"));

        nav.toggle_menu();
        assert!(nav.navigate("#nowhere").is_none());
        assert_eq!(nav.menu(), MenuState::Closed);
        assert_eq!(nav.current_section(), Some("gradients"));
    }

    #[test]
    fn test_theme_defaults_dark_and_toggles() {
        let mut nav = Navigation::new();
        assert_eq!(nav.theme(), Theme::Dark);
        assert_eq!(nav.toggle_theme(), Theme::Light);
        assert_eq!(nav.toggle_theme(), Theme::Dark);
        assert_eq!(Navigation::new().with_theme(Theme::Light).theme().as_str(), "light");
    }

    #[test]
    fn test_primary_items() {
        let primary: Vec<&str> = NAV_ITEMS
            .iter()
            .filter(|i| i.primary)
            .map(|i| i.name)
            .collect();
        assert_eq!(primary, vec!["Animations", "Gradients", "Fonts"]);
        assert_eq!(resolve_anchor("FONTS").map(|i| i.section), Some("fonts"));
    }

    #[test]
    fn test_every_section_is_reachable_by_anchor() {
        let mut nav = Navigation::new();
        for anchor in ["#components", "#typography", "#guidelines", "#agent"] {
            let item = nav.navigate(anchor).unwrap();
            assert!(!item.primary);
            assert_eq!(item.href(), anchor);
        }
        assert_eq!(nav.current_section(), Some("agent"));
        assert_eq!(NAV_ITEMS.len(), 8);
    }
}
