use crate::RouteParams;

/// Name of the dynamic segment on the stock route.
pub const SYMBOL_PARAM: &str = "symbol";

/// Display form used in page metadata when no symbol was given.
pub const METADATA_FALLBACK: &str = "Stock";

/// Display form used in the on-page heading when no symbol was given.
///
/// Differs from [`METADATA_FALLBACK`]; both are kept as-is until someone
/// decides which one the product wants.
pub const HEADING_FALLBACK: &str = "TICKER";

/// Raw `symbol` path segment of a stock request.
///
/// Not validated against any ticker universe; built fresh for every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolParam(Option<String>);

impl SymbolParam {
    pub fn new(raw: Option<&str>) -> Self {
        Self(raw.filter(|value| !value.is_empty()).map(str::to_owned))
    }

    pub fn from_params(params: &RouteParams) -> Self {
        Self::new(params.get(SYMBOL_PARAM))
    }

    pub fn raw(&self) -> Option<&str> {
        self.0.as_deref()
    }

    /// Uppercased symbol, or `fallback` when absent.
    pub fn display_or(&self, fallback: &str) -> String {
        match &self.0 {
            Some(raw) => raw.to_uppercase(),
            None => fallback.to_owned(),
        }
    }

    pub fn title_form(&self) -> String {
        self.display_or(METADATA_FALLBACK)
    }

    pub fn heading_form(&self) -> String {
        self.display_or(HEADING_FALLBACK)
    }
}
