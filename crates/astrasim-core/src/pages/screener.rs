use crate::components::{Card, PageHeader};
use crate::html::{Element, Node};
use crate::metadata::site_title;
use crate::{Page, PageMetadata, RouteParams};

#[derive(Debug, Clone, Copy, Default)]
pub struct ScreenerPage;

impl Page for ScreenerPage {
    fn name(&self) -> &'static str {
        "screener"
    }

    fn metadata(&self, _params: &RouteParams) -> PageMetadata {
        PageMetadata::titled(site_title("Screener"))
    }

    fn render(&self, _params: &RouteParams) -> Node {
        let header = PageHeader::new("S&P 100 Screener")
            .eyebrow("Phase 1")
            .description(
                "Surface large-cap names, volatility context, and regime callouts. \
                 This placeholder will evolve into a sortable grid with filters.",
            );

        let card = Card::new(Element::new("p").class("text-slate-300").text(
            "Screener data will appear here once ingestion pipelines are active. Expect columns for \
             realized/implied volatility, YTD performance, and upcoming catalysts.",
        ))
        .title("Coming Soon")
        .subtitle("Universe overview");

        Element::new("div")
            .class("space-y-8")
            .child(header)
            .child(card)
            .into()
    }
}
