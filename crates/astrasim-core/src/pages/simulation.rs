use crate::components::{Card, PageHeader};
use crate::html::{Element, Node};
use crate::metadata::site_title;
use crate::{Page, PageMetadata, RouteParams};

#[derive(Debug, Clone, Copy, Default)]
pub struct SimulationPage;

impl Page for SimulationPage {
    fn name(&self) -> &'static str {
        "simulation"
    }

    fn metadata(&self, _params: &RouteParams) -> PageMetadata {
        PageMetadata::titled(site_title("Simulation Dashboard"))
    }

    fn render(&self, _params: &RouteParams) -> Node {
        let header = PageHeader::new("Monte Carlo Dashboard")
            .eyebrow("Simulation")
            .description(
                "Distribution charts, quantiles, tail risks, and options comparisons will render \
                 in this workspace after the MC engine lands.",
            );

        let distribution = Card::new(Element::new("p").class("text-sm text-slate-300").text(
            "Histogram, KDE, and quantile tables will occupy this section. Hooking into the \
             Monte Carlo engine is a later milestone.",
        ))
        .title("Distribution Overview");

        let comparison = Card::new(Element::new("p").class("text-sm text-slate-300").text(
            "Users will be able to contrast base, bullish, and bearish scenarios, plus compare \
             vs options implied moves.",
        ))
        .title("Scenario Comparison");

        Element::new("div")
            .class("space-y-8")
            .child(header)
            .child(
                Element::new("div")
                    .class("grid gap-6 md:grid-cols-2")
                    .child(distribution)
                    .child(comparison),
            )
            .into()
    }
}
