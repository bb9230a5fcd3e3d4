use serde::Serialize;

use crate::components::PageHeader;
use crate::html::{Element, Node};
use crate::{DocumentMetadata, PageRouter, RootLayout, RouteError, RouteMetadata, RouteParams};

pub const NOT_FOUND_TITLE: &str = "404: This page could not be found.";

/// Route table, layout and site-wide metadata defaults.
///
/// Immutable once built; share it behind `Arc` between requests.
#[derive(Debug, Clone, Default)]
pub struct Site {
    router: PageRouter,
    layout: RootLayout,
    defaults: DocumentMetadata,
}

/// Output of rendering one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub page: &'static str,
    pub params: RouteParams,
    pub metadata: DocumentMetadata,
    pub body: Node,
    pub html: String,
}

/// One row of the route table listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSummary {
    pub pattern: String,
    pub page: &'static str,
    pub dynamic: bool,
    pub params: Vec<String>,
}

impl Site {
    pub fn new(router: PageRouter, layout: RootLayout, defaults: DocumentMetadata) -> Self {
        Self {
            router,
            layout,
            defaults,
        }
    }

    pub fn router(&self) -> &PageRouter {
        &self.router
    }

    pub fn layout(&self) -> &RootLayout {
        &self.layout
    }

    /// Resolve `path` and derive its document metadata without rendering the page.
    pub fn metadata(&self, path: &str) -> Result<RouteMetadata, RouteError> {
        let route = self.router.resolve(path)?;
        let resolved = route.page.metadata(&route.params).resolve(&self.defaults);

        Ok(RouteMetadata {
            path: path.to_owned(),
            pattern: route.pattern.to_string(),
            page: route.page_name(),
            params: route.params,
            title: resolved.title,
            description: resolved.description,
        })
    }

    /// Resolve, derive metadata, render the body and wrap it in the layout.
    ///
    /// An unmatched path returns before any page is rendered.
    pub fn render(&self, path: &str) -> Result<RenderedPage, RouteError> {
        let route = self.router.resolve(path)?;
        let metadata = route.page.metadata(&route.params).resolve(&self.defaults);
        let body = route.page.render(&route.params);
        let html = self.layout.document(&metadata, body.clone());

        Ok(RenderedPage {
            page: route.page_name(),
            params: route.params,
            metadata,
            body,
            html,
        })
    }

    /// Not-found document for a path that matched no route.
    pub fn not_found(&self, path: &str) -> String {
        let metadata = DocumentMetadata::new(NOT_FOUND_TITLE, self.defaults.description.clone());
        let body = Element::new("div")
            .class("space-y-8")
            .attr("data-status", "404")
            .child(
                PageHeader::new("Page not found")
                    .eyebrow("404")
                    .description(format!("No page is registered for '{path}'.")),
            )
            .into();

        self.layout.document(&metadata, body)
    }

    pub fn routes(&self) -> Vec<RouteSummary> {
        self.router
            .entries()
            .iter()
            .map(|entry| RouteSummary {
                pattern: entry.pattern.to_string(),
                page: entry.page.name(),
                dynamic: entry.pattern.is_dynamic(),
                params: entry.pattern.param_names().map(str::to_owned).collect(),
            })
            .collect()
    }
}
