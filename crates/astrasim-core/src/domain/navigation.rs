use serde::Serialize;

/// Static `(label, target)` pair used by the chrome menus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl NavigationLink {
    pub const fn new(label: &'static str, href: &'static str) -> Self {
        Self { label, href }
    }
}

/// What a sidebar entry does when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "href", rename_all = "snake_case")]
pub enum SidebarAction {
    Navigate(&'static str),
    /// Control is shown but has no behavior wired up yet.
    NotYetImplemented,
}

impl SidebarAction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Navigate(_) => "navigate",
            Self::NotYetImplemented => "not-yet-implemented",
        }
    }

    pub const fn is_implemented(self) -> bool {
        !matches!(self, Self::NotYetImplemented)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SidebarSection {
    pub label: &'static str,
    pub action: SidebarAction,
}

impl SidebarSection {
    pub const fn placeholder(label: &'static str) -> Self {
        Self {
            label,
            action: SidebarAction::NotYetImplemented,
        }
    }
}

pub const BRAND_LINK: NavigationLink = NavigationLink::new("AstraSim", "/");

pub const NAV_LINKS: &[NavigationLink] = &[
    NavigationLink::new("Screener", "/screener"),
    NavigationLink::new("Scenario Builder", "/scenario-builder"),
    NavigationLink::new("Simulation", "/simulation"),
];

pub const STOCK_VIEW_LINK: NavigationLink = NavigationLink::new("Stock View", "/stock/AAPL");

pub const SIDEBAR_SECTIONS: &[SidebarSection] = &[
    SidebarSection::placeholder("Overview"),
    SidebarSection::placeholder("Factors"),
    SidebarSection::placeholder("Events"),
    SidebarSection::placeholder("Simulation"),
    SidebarSection::placeholder("Exports"),
];

/// Read-only menu configuration shared by every rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub brand: NavigationLink,
    pub links: &'static [NavigationLink],
    pub call_to_action: NavigationLink,
    pub sidebar: &'static [SidebarSection],
}

impl Navigation {
    pub const fn standard() -> Self {
        Self {
            brand: BRAND_LINK,
            links: NAV_LINKS,
            call_to_action: STOCK_VIEW_LINK,
            sidebar: SIDEBAR_SECTIONS,
        }
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::standard()
    }
}
