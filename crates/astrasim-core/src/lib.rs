//! # AstraSim Core
//!
//! Page composition and routing shell for the AstraSim dashboard.
//!
//! ## Overview
//!
//! - **Route patterns** with static and dynamic segments, validated for
//!   overlap when registered
//! - **Page router** mapping a request path to a [`Page`] and its bound
//!   [`RouteParams`]
//! - **Metadata derivation** per route, callable without rendering the body
//! - **Content tree** ([`html::Node`]) built by components and pages
//! - **Root layout** that frames every page with navbar, sidebar and footer
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`components`] | Card, page header, and chrome renderers |
//! | [`domain`] | Symbol parameter and navigation configuration |
//! | [`error`] | Routing and registration errors |
//! | [`html`] | Content tree and HTML serialization |
//! | [`layout`] | Root layout and document writer |
//! | [`metadata`] | Page and document metadata |
//! | [`page`] | The [`Page`] trait |
//! | [`pages`] | The five dashboard pages |
//! | [`pattern`] | Route patterns and parameter extraction |
//! | [`routing`] | Page router and builder |
//! | [`site`] | End-to-end rendering facade |
//!
//! ## Quick Start
//!
//! ```rust
//! use astrasim_core::Site;
//!
//! let site = Site::default();
//!
//! let meta = site.metadata("/stock/aapl")?;
//! assert_eq!(meta.title, "AstraSim — AAPL");
//!
//! let page = site.render("/stock/aapl")?;
//! assert!(page.html.contains("AAPL snapshot"));
//!
//! assert!(site.render("/unknown").is_err());
//! # Ok::<(), astrasim_core::RouteError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  Request path   │
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │   PageRouter    │────▶│  RouteError      │ (unmatched)
//! └────────┬────────┘     └──────────────────┘
//!          │ page + params
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ Page::metadata  │     │  Page::render    │
//! └────────┬────────┘     └────────┬─────────┘
//!          │                       │
//!          ▼                       ▼
//! ┌──────────────────────────────────────────┐
//! │ RootLayout: navbar, sidebar, slot, footer│
//! └──────────────────────────────────────────┘
//! ```

pub mod components;
pub mod domain;
pub mod error;
pub mod html;
pub mod layout;
pub mod metadata;
pub mod page;
pub mod pages;
pub mod pattern;
pub mod routing;
pub mod site;

pub use domain::{Navigation, NavigationLink, SidebarAction, SidebarSection, SymbolParam};
pub use error::{RegistrationError, RouteError};
pub use layout::RootLayout;
pub use metadata::{DocumentMetadata, PageMetadata, RouteMetadata};
pub use page::Page;
pub use pattern::{extract_params, RouteParams, RoutePattern, Segment};
pub use routing::{PageRouter, PageRouterBuilder, ResolvedRoute, RouteEntry};
pub use site::{RenderedPage, RouteSummary, Site};
