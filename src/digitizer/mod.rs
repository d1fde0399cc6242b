mod client;
mod types;

pub use client::{DigitizeClient, DigitizeError, MAX_PAGES_PER_UPLOAD, page_spans};
pub use types::{DigitizeResponse, Element, ElementContent, Usage};
