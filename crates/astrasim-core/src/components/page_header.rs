use crate::html::{Element, Node};

/// Page title block with optional eyebrow and description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageHeader {
    title: String,
    description: Option<String>,
    eyebrow: Option<String>,
}

impl PageHeader {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            eyebrow: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn eyebrow(mut self, eyebrow: impl Into<String>) -> Self {
        self.eyebrow = Some(eyebrow.into());
        self
    }

    pub fn render(self) -> Node {
        let mut block = Element::new("div").class("space-y-2 border-b border-slate-800 pb-6");

        if let Some(eyebrow) = self.eyebrow {
            block = block.child(
                Element::new("p")
                    .class("text-xs uppercase tracking-[0.4em] text-teal-300")
                    .text(eyebrow),
            );
        }

        block = block.child(
            Element::new("h1")
                .class("text-4xl font-semibold text-white")
                .text(self.title),
        );

        if let Some(description) = self.description {
            block = block.child(
                Element::new("p")
                    .class("max-w-3xl text-base text-slate-400")
                    .text(description),
            );
        }

        block.into()
    }
}

impl From<PageHeader> for Node {
    fn from(value: PageHeader) -> Self {
        value.render()
    }
}
