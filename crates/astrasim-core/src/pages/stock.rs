use crate::components::{Card, PageHeader};
use crate::domain::SymbolParam;
use crate::html::{Element, Node};
use crate::metadata::site_title;
use crate::{Page, PageMetadata, RouteParams};

/// Per-symbol snapshot at `/stock/:symbol`.
///
/// Title and heading both show the uppercased symbol but fall back to
/// different strings when it is missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct StockPage;

impl StockPage {
    pub fn heading(params: &RouteParams) -> String {
        format!("{} snapshot", SymbolParam::from_params(params).heading_form())
    }
}

impl Page for StockPage {
    fn name(&self) -> &'static str {
        "stock"
    }

    fn metadata(&self, params: &RouteParams) -> PageMetadata {
        PageMetadata::titled(site_title(&SymbolParam::from_params(params).title_form()))
    }

    fn render(&self, params: &RouteParams) -> Node {
        let header = PageHeader::new(Self::heading(params))
            .eyebrow("Stock Overview")
            .description(
                "Regimes, factor states, liquidity, and AI context will live here. For now, this page \
                 ensures routing and layout work for dynamic tickers.",
            );

        let regime = Card::new(Element::new("p").class("text-sm text-slate-300").text(
            "Rule-based regimes and volatility callouts will render in this panel once analytics are available.",
        ))
        .title("Regime Context");

        let catalysts = Card::new(Element::new("p").class("text-sm text-slate-300").text(
            "Earnings, macro events, and AI signals will populate this section in future prompts.",
        ))
        .title("Upcoming Catalysts");

        Element::new("div")
            .class("space-y-8")
            .child(header)
            .child(
                Element::new("div")
                    .class("grid gap-6 md:grid-cols-2")
                    .child(regime)
                    .child(catalysts),
            )
            .into()
    }
}
