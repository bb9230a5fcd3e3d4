//! Navbar, sidebar and footer shared by every page.

use crate::domain::{Navigation, NavigationLink, SidebarAction, SidebarSection};
use crate::html::{Element, Node};

pub const FOOTER_TEXT: &str =
    "AstraSim · Phase 1 foundations · Scenario Builder + Simulation coming soon";

const SIDEBAR_NOTE: &str =
    "Sidebar content placeholder. Future prompts will surface scenario controls and state summaries.";

pub fn navbar(navigation: &Navigation) -> Node {
    let links = navigation.links.iter().map(|link| nav_link(link, "transition hover:text-white"));

    Element::new("header")
        .attr("data-region", "navbar")
        .class("border-b border-slate-800 bg-slate-950/70 backdrop-blur")
        .child(
            Element::new("nav")
                .class("mx-auto flex max-w-6xl items-center justify-between gap-6 px-6 py-4")
                .child(nav_link(
                    &navigation.brand,
                    "font-semibold uppercase tracking-[0.4em] text-teal-300",
                ))
                .child(
                    Element::new("div")
                        .class("flex items-center gap-6 text-sm text-slate-300")
                        .children(links)
                        .child(nav_link(
                            &navigation.call_to_action,
                            "rounded-full border border-teal-400 px-4 py-1 text-xs uppercase tracking-wide text-teal-200",
                        )),
                ),
        )
        .into()
}

fn nav_link(link: &NavigationLink, class: &str) -> Element {
    Element::new("a")
        .attr("href", link.href)
        .class(class)
        .text(link.label)
}

pub fn sidebar(navigation: &Navigation) -> Node {
    let entries = navigation.sidebar.iter().map(sidebar_entry);

    Element::new("aside")
        .attr("data-region", "sidebar")
        .class("hidden w-64 flex-col border-r border-slate-800 bg-slate-950/60 p-4 text-sm text-slate-300 lg:flex")
        .child(
            Element::new("p")
                .class("mb-4 text-xs uppercase tracking-[0.3em] text-slate-500")
                .text("Workspace"),
        )
        .child(Element::new("nav").class("flex flex-col gap-2").children(entries))
        .child(
            Element::new("div")
                .class("mt-auto rounded-md border border-slate-800/80 bg-slate-900/60 p-3 text-xs text-slate-400")
                .text(SIDEBAR_NOTE),
        )
        .into()
}

fn sidebar_entry(section: &SidebarSection) -> Element {
    let class = "rounded-md px-3 py-2 text-left transition hover:bg-slate-800 hover:text-white";
    match section.action {
        SidebarAction::Navigate(href) => Element::new("a")
            .attr("href", href)
            .attr("data-action", section.action.as_str())
            .class(class)
            .text(section.label),
        SidebarAction::NotYetImplemented => Element::new("button")
            .attr("type", "button")
            .attr("data-action", section.action.as_str())
            .attr("aria-disabled", "true")
            .class(class)
            .text(section.label),
    }
}

pub fn footer() -> Node {
    Element::new("footer")
        .attr("data-region", "footer")
        .class("border-t border-slate-900/80 bg-slate-950/80 py-6 text-center text-xs text-slate-500")
        .text(FOOTER_TEXT)
        .into()
}
