use crate::components::chrome;
use crate::domain::Navigation;
use crate::html::{Element, Node};
use crate::DocumentMetadata;

/// Shared frame placed around every page body.
///
/// Order is fixed: navbar, then sidebar beside the content slot, then footer.
/// The content slot receives the page node untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RootLayout {
    navigation: Navigation,
}

impl RootLayout {
    pub const fn new(navigation: Navigation) -> Self {
        Self { navigation }
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    pub fn compose(&self, content: Node) -> Node {
        Element::new("div")
            .class("min-h-screen bg-gradient-to-b from-slate-950 via-slate-950 to-slate-900")
            .child(chrome::navbar(&self.navigation))
            .child(
                Element::new("div")
                    .class("mx-auto flex w-full max-w-6xl gap-6 px-6 py-10")
                    .child(chrome::sidebar(&self.navigation))
                    .child(
                        Element::new("main")
                            .attr("data-region", "content")
                            .class("flex-1 space-y-8")
                            .child(content),
                    ),
            )
            .child(chrome::footer())
            .into()
    }

    /// Full HTML document for a composed page.
    pub fn document(&self, metadata: &DocumentMetadata, content: Node) -> String {
        let head = Element::new("head")
            .child(Element::new("meta").attr("charset", "utf-8"))
            .child(
                Element::new("meta")
                    .attr("name", "viewport")
                    .attr("content", "width=device-width, initial-scale=1"),
            )
            .child(Element::new("title").text(metadata.title.as_str()))
            .child(
                Element::new("meta")
                    .attr("name", "description")
                    .attr("content", metadata.description.as_str()),
            );

        let html = Element::new("html")
            .attr("lang", "en")
            .child(head)
            .child(
                Element::new("body")
                    .class("bg-slate-950 text-slate-50 antialiased")
                    .child(self.compose(content)),
            );

        format!("<!DOCTYPE html>{html}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_appear_once_in_order() {
        let node = RootLayout::default().compose(Node::text("page"));
        assert_eq!(
            node.attr_values("data-region"),
            vec!["navbar", "sidebar", "content", "footer"]
        );
    }

    #[test]
    fn content_slot_holds_page_node_unchanged() {
        let page: Node = Element::new("p").attr("id", "body").text("hello").into();
        let node = RootLayout::default().compose(page.clone());

        let slot = node
            .find_by_attr("data-region", "content")
            .expect("content slot");
        assert_eq!(slot.child_nodes(), &[page]);
    }

    #[test]
    fn document_writes_head_metadata() {
        let html = RootLayout::default().document(
            &DocumentMetadata::new("AstraSim — <X>", "desc"),
            Node::text("page"),
        );

        assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\"><head>"));
        assert!(html.contains("<title>AstraSim — &lt;X&gt;</title>"));
        assert!(html.contains("<meta name=\"description\" content=\"desc\">"));
    }
}
