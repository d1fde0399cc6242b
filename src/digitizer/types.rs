use serde::{Deserialize, Serialize};

/// Parsed response from the document-digitization API.
///
/// Every field defaults when absent so a partial or trimmed response still
/// deserializes.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DigitizeResponse {
    #[serde(default)]
    pub api: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub content: Option<ElementContent>,
    #[serde(default)]
    pub elements: Vec<Element>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

/// One laid-out element of the parsed document
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Element {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub content: Option<ElementContent>,
}

/// Per-format renderings of an element
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ElementContent {
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub markdown: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub pages: Option<u32>,
}

impl DigitizeResponse {
    /// Concatenate every element's markdown in order, terminating each
    /// piece with a newline. Elements without markdown are skipped.
    pub fn markdown(&self) -> String {
        let mut out = String::new();
        for element in &self.elements {
            let md = element
                .content
                .as_ref()
                .and_then(|c| c.markdown.as_deref())
                .unwrap_or("");
            if md.is_empty() {
                continue;
            }
            out.push_str(md);
            if !md.ends_with('\n') {
                out.push('\n');
            }
        }
        out
    }

    /// Fold a page-slice response into this one: element lists concatenate
    /// and page usage accumulates.
    pub fn merge(&mut self, mut other: DigitizeResponse) {
        self.elements.append(&mut other.elements);

        let extra_pages = other.usage.and_then(|u| u.pages).unwrap_or(0);
        if extra_pages > 0 {
            let usage = self.usage.get_or_insert(Usage::default());
            usage.pages = Some(usage.pages.unwrap_or(0) + extra_pages);
        }

        if self.api.is_none() {
            self.api = other.api;
        }
        if self.model.is_none() {
            self.model = other.model;
        }
    }
}
