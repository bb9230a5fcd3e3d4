use crate::html::{Element, Node};

/// Framed panel with an optional header and footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    title: Option<String>,
    subtitle: Option<String>,
    body: Node,
    footer: Option<Node>,
}

impl Card {
    pub fn new(body: impl Into<Node>) -> Self {
        Self {
            title: None,
            subtitle: None,
            body: body.into(),
            footer: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn footer(mut self, footer: impl Into<Node>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn render(self) -> Node {
        let mut section = Element::new("section")
            .class("rounded-2xl border border-slate-800 bg-slate-950/60 shadow-xl shadow-black/40");

        if self.title.is_some() || self.subtitle.is_some() {
            let mut header = Element::new("header").class("border-b border-slate-800 px-6 py-4");
            if let Some(title) = self.title {
                header = header.child(
                    Element::new("h3")
                        .class("text-lg font-semibold text-white")
                        .text(title),
                );
            }
            if let Some(subtitle) = self.subtitle {
                header = header.child(Element::new("p").class("text-sm text-slate-400").text(subtitle));
            }
            section = section.child(header);
        }

        section = section.child(
            Element::new("div")
                .class("px-6 py-5 text-slate-200")
                .child(self.body),
        );

        if let Some(footer) = self.footer {
            section = section.child(
                Element::new("footer")
                    .class("border-t border-slate-800 px-6 py-4 text-sm text-slate-400")
                    .child(footer),
            );
        }

        section.into()
    }
}

impl From<Card> for Node {
    fn from(value: Card) -> Self {
        value.render()
    }
}
