//! # Domain Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`SymbolParam`] | Raw `symbol` route segment and its display forms |
//! | [`NavigationLink`] | Static menu entry |
//! | [`SidebarSection`] | Sidebar entry with its [`SidebarAction`] |
//! | [`Navigation`] | Read-only menu configuration |

mod navigation;
mod symbol;

pub use navigation::{
    Navigation, NavigationLink, SidebarAction, SidebarSection, BRAND_LINK, NAV_LINKS,
    SIDEBAR_SECTIONS, STOCK_VIEW_LINK,
};
pub use symbol::{SymbolParam, HEADING_FALLBACK, METADATA_FALLBACK, SYMBOL_PARAM};
