use crate::editing::Cmd;
use crate::models::{BlockContent, LinkBlock};

/// What a link dialog hands back when it closes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkForm {
    pub url: String,
    pub label: String,
    pub cancelled: bool,
}

/// Decision taken from a submitted [`LinkForm`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkFormOutcome {
    Create {
        url: String,
        display_text: Option<String>,
    },
    /// The dialog was dismissed; nothing to create or report
    Cancelled,
    /// Submitted without a URL; the user should be told
    MissingUrl,
}

impl LinkForm {
    pub fn submitted(url: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            label: label.into(),
            cancelled: false,
        }
    }

    pub fn cancelled() -> Self {
        Self {
            cancelled: true,
            ..Self::default()
        }
    }

    pub fn resolve(&self) -> LinkFormOutcome {
        if self.cancelled {
            return LinkFormOutcome::Cancelled;
        }

        let url = self.url.trim();
        if url.is_empty() {
            return LinkFormOutcome::MissingUrl;
        }

        let label = self.label.trim();
        LinkFormOutcome::Create {
            url: url.to_string(),
            display_text: (!label.is_empty()).then(|| label.to_string()),
        }
    }
}

impl LinkFormOutcome {
    /// Command that creates the link, if the form produced one
    pub fn into_command(self) -> Option<Cmd> {
        match self {
            LinkFormOutcome::Create { url, display_text } => Some(Cmd::AddWith {
                body: BlockContent::Link(LinkBlock { url, display_text }),
            }),
            LinkFormOutcome::Cancelled | LinkFormOutcome::MissingUrl => None,
        }
    }
}
