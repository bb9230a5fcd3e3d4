use std::sync::Arc;

use crate::pages::{HomePage, ScenarioBuilderPage, ScreenerPage, SimulationPage, StockPage};
use crate::{Page, RegistrationError, RouteError, RouteParams, RoutePattern};

/// A pattern bound to the page that serves it.
#[derive(Clone)]
pub struct RouteEntry {
    pub pattern: RoutePattern,
    pub page: Arc<dyn Page>,
}

impl std::fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteEntry")
            .field("pattern", &self.pattern.as_str())
            .field("page", &self.page.name())
            .finish()
    }
}

/// Successful resolution of a request path.
#[derive(Clone)]
pub struct ResolvedRoute {
    pub pattern: RoutePattern,
    pub page: Arc<dyn Page>,
    pub params: RouteParams,
}

impl ResolvedRoute {
    pub fn page_name(&self) -> &'static str {
        self.page.name()
    }
}

impl std::fmt::Debug for ResolvedRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedRoute")
            .field("pattern", &self.pattern.as_str())
            .field("page", &self.page.name())
            .field("params", &self.params)
            .finish()
    }
}

/// Builder that validates every pattern as it is registered.
///
/// # Example
///
/// ```rust
/// use astrasim_core::pages::{ScreenerPage, StockPage};
/// use astrasim_core::PageRouterBuilder;
/// use std::sync::Arc;
///
/// let router = PageRouterBuilder::new()
///     .route("/screener", Arc::new(ScreenerPage))?
///     .route("/stock/:symbol", Arc::new(StockPage))?
///     .build();
///
/// let resolved = router.resolve("/stock/aapl")?;
/// assert_eq!(resolved.params.get("symbol"), Some("aapl"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default)]
pub struct PageRouterBuilder {
    entries: Vec<RouteEntry>,
}

impl PageRouterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `page` under `pattern`.
    ///
    /// Fails when the pattern is malformed or when some path could match
    /// both it and an already registered pattern.
    pub fn route(mut self, pattern: &str, page: Arc<dyn Page>) -> Result<Self, RegistrationError> {
        let pattern = RoutePattern::parse(pattern)?;

        if let Some(existing) = self
            .entries
            .iter()
            .find(|entry| entry.pattern.overlaps(&pattern))
        {
            return Err(RegistrationError::Overlap {
                existing: existing.pattern.to_string(),
                candidate: pattern.to_string(),
            });
        }

        self.entries.push(RouteEntry { pattern, page });
        Ok(self)
    }

    pub fn build(self) -> PageRouter {
        PageRouter {
            entries: self.entries,
        }
    }
}

/// Route table mapping request paths to pages.
#[derive(Debug, Clone)]
pub struct PageRouter {
    entries: Vec<RouteEntry>,
}

impl Default for PageRouter {
    fn default() -> Self {
        Self::standard().expect("built-in route table has no overlapping patterns")
    }
}

impl PageRouter {
    /// The five dashboard routes.
    pub fn standard() -> Result<Self, RegistrationError> {
        Ok(PageRouterBuilder::new()
            .route("/", Arc::new(HomePage))?
            .route("/screener", Arc::new(ScreenerPage))?
            .route("/scenario-builder", Arc::new(ScenarioBuilderPage))?
            .route("/simulation", Arc::new(SimulationPage))?
            .route("/stock/:symbol", Arc::new(StockPage))?
            .build())
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn resolve(&self, path: &str) -> Result<ResolvedRoute, RouteError> {
        self.entries
            .iter()
            .find_map(|entry| {
                entry.pattern.match_path(path).map(|params| ResolvedRoute {
                    pattern: entry.pattern.clone(),
                    page: Arc::clone(&entry.page),
                    params,
                })
            })
            .ok_or_else(|| RouteError::unmatched(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_registers_five_routes_in_order() {
        let router = PageRouter::default();
        let patterns = router
            .entries()
            .iter()
            .map(|entry| entry.pattern.as_str())
            .collect::<Vec<_>>();

        assert_eq!(
            patterns,
            vec!["/", "/screener", "/scenario-builder", "/simulation", "/stock/:symbol"]
        );
    }

    #[test]
    fn resolves_static_routes_with_empty_params() {
        let router = PageRouter::default();
        for (path, page) in [
            ("/", "home"),
            ("/screener", "screener"),
            ("/scenario-builder", "scenario_builder"),
            ("/simulation", "simulation"),
        ] {
            let resolved = router.resolve(path).expect("route should resolve");
            assert_eq!(resolved.page_name(), page);
            assert!(resolved.params.is_empty(), "{path} should bind nothing");
        }
    }

    #[test]
    fn resolves_stock_route_with_symbol() {
        let resolved = PageRouter::default()
            .resolve("/stock/AAPL")
            .expect("route should resolve");

        assert_eq!(resolved.page_name(), "stock");
        assert_eq!(resolved.params.get("symbol"), Some("AAPL"));
        assert_eq!(resolved.params.len(), 1);
    }

    #[test]
    fn unknown_path_is_unmatched() {
        let err = PageRouter::default()
            .resolve("/unknown")
            .expect_err("must fail");
        assert_eq!(err, RouteError::unmatched("/unknown"));
        assert_eq!(err.code(), "route.unmatched");
    }

    #[test]
    fn rejects_static_route_shadowed_by_dynamic_one() {
        let err = PageRouterBuilder::new()
            .route("/stock/:symbol", Arc::new(StockPage))
            .and_then(|builder| builder.route("/stock/AAPL", Arc::new(StockPage)))
            .expect_err("overlap must be rejected");

        assert_eq!(
            err,
            RegistrationError::Overlap {
                existing: String::from("/stock/:symbol"),
                candidate: String::from("/stock/AAPL"),
            }
        );
    }

    #[test]
    fn rejects_duplicate_static_route() {
        let result = PageRouterBuilder::new()
            .route("/screener", Arc::new(ScreenerPage))
            .and_then(|builder| builder.route("/screener", Arc::new(ScreenerPage)));

        assert!(matches!(result, Err(RegistrationError::Overlap { .. })));
    }
}
