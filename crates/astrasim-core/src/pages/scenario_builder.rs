use crate::components::{Card, PageHeader};
use crate::html::{Element, Node};
use crate::metadata::site_title;
use crate::{Page, PageMetadata, RouteParams};

#[derive(Debug, Clone, Copy, Default)]
pub struct ScenarioBuilderPage;

impl Page for ScenarioBuilderPage {
    fn name(&self) -> &'static str {
        "scenario_builder"
    }

    fn metadata(&self, _params: &RouteParams) -> PageMetadata {
        PageMetadata::titled(site_title("Scenario Builder"))
    }

    fn render(&self, _params: &RouteParams) -> Node {
        let header = PageHeader::new("Scenario Builder")
            .eyebrow("Scenarios")
            .description(
                "Configure macro, AI, earnings, and execution viewpoints. Sliders, T-shirt sizing, \
                 and guardrails will arrive in Phase 1 Sub-Phase 9.",
            );

        let controls = Card::new(Element::new("p").class("text-sm text-slate-300").text(
            "Controls for Macro Risk, AI Trend, Earnings Risk, and Execution Quality will mount here. \
             Today's stub demonstrates the component shell.",
        ))
        .title("Viewpoint Controls")
        .subtitle("Sliders + T-shirt sizing");

        let events = Card::new(Element::new("p").class("text-sm text-slate-300").text(
            "Event templates tied to factor states will show up here with probability and impact guardrails.",
        ))
        .title("Event Stack")
        .subtitle("Factor-driven events");

        Element::new("div")
            .class("space-y-8")
            .child(header)
            .child(
                Element::new("div")
                    .class("grid gap-6 lg:grid-cols-2")
                    .child(controls)
                    .child(events),
            )
            .into()
    }
}
