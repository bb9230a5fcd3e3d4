use crate::html::{Element, Node};
use crate::{Page, PageMetadata, RouteParams};

/// Landing page at `/`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HomePage;

impl Page for HomePage {
    fn name(&self) -> &'static str {
        "home"
    }

    fn metadata(&self, _params: &RouteParams) -> PageMetadata {
        PageMetadata::inherit()
    }

    fn render(&self, _params: &RouteParams) -> Node {
        Element::new("div")
            .class("mx-auto flex max-w-4xl flex-col justify-center gap-6 px-6")
            .child(
                Element::new("span")
                    .class("text-sm uppercase tracking-[0.3em] text-teal-300")
                    .text("AstraSim · Phase 1"),
            )
            .child(
                Element::new("h1")
                    .class("text-4xl font-semibold leading-tight text-white")
                    .text("Scenario-first Monte Carlo simulator"),
            )
            .child(Element::new("p").class("text-lg text-slate-300").text(
                "Backend, data, and UI scaffolding are live. Upcoming prompts will add \
                 regime detection, factor modeling, and the Scenario Builder experience.",
            ))
            .into()
    }
}
