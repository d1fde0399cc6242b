use reqwest::blocking::{Client, multipart};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use super::types::DigitizeResponse;

const DIGITIZE_ENDPOINT: &str = "https://api.upstage.ai/v1/document-digitization";
const API_KEY_VAR: &str = "UPSTAGE_API_KEY";

/// The API rejects uploads above this many pages, so larger files are
/// sliced client-side and the responses merged.
pub const MAX_PAGES_PER_UPLOAD: usize = 100;

#[derive(Debug, Error)]
pub enum DigitizeError {
    #[error("UPSTAGE_API_KEY environment variable is not set")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Server returned error status {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Failed to process PDF: {0}")]
    PdfFailed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Blocking client for the remote document-digitization API
pub struct DigitizeClient {
    http: Client,
    endpoint: String,
    api_key: String,
}

impl DigitizeClient {
    /// Build a client from the `UPSTAGE_API_KEY` environment variable,
    /// loading a `.env` file when one is present.
    pub fn from_env() -> Result<Self, DigitizeError> {
        dotenvy::dotenv().ok();
        let api_key = std::env::var(API_KEY_VAR).map_err(|_| DigitizeError::MissingApiKey)?;
        Ok(Self::new(api_key))
    }

    pub fn new(api_key: impl Into<String>) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(300)) // OCR on large documents is slow
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            endpoint: DIGITIZE_ENDPOINT.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Override the API endpoint (tests, proxies)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Digitize a PDF, splitting it into page slices when it exceeds the
    /// upload limit and merging the per-slice element lists.
    pub fn digitize_file(&self, path: &Path) -> Result<DigitizeResponse, DigitizeError> {
        let document =
            lopdf::Document::load(path).map_err(|e| DigitizeError::PdfFailed(e.to_string()))?;
        let page_count = document.get_pages().len();

        if page_count <= MAX_PAGES_PER_UPLOAD {
            return self.upload(&fs::read(path)?);
        }

        eprintln!(
            "[digitizer] {} pages exceeds the {}-page upload limit, slicing",
            page_count, MAX_PAGES_PER_UPLOAD
        );

        let mut merged = DigitizeResponse::default();
        for (index, (first, last)) in page_spans(page_count, MAX_PAGES_PER_UPLOAD)
            .into_iter()
            .enumerate()
        {
            let slice_path = write_page_slice(&document, first, last, index)?;
            let result = fs::read(&slice_path)
                .map_err(DigitizeError::from)
                .and_then(|bytes| self.upload(&bytes));
            let _ = fs::remove_file(&slice_path);

            let response = result?;
            eprintln!(
                "[digitizer] ✓ Digitized pages {}-{} ({} elements)",
                first,
                last,
                response.elements.len()
            );
            merged.merge(response);
        }

        Ok(merged)
    }

    /// Upload one document body as a multipart form
    fn upload(&self, bytes: &[u8]) -> Result<DigitizeResponse, DigitizeError> {
        let part = multipart::Part::bytes(bytes.to_vec())
            .file_name("document.pdf")
            .mime_str("application/pdf")?;
        let form = multipart::Form::new()
            .part("document", part)
            .text("model", "document-parse")
            .text("ocr", "auto")
            .text("output_formats", "['html', 'markdown']");

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(DigitizeError::ServerError {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json()?)
    }
}

/// Write pages `first..=last` of `document` to a temporary PDF
fn write_page_slice(
    document: &lopdf::Document,
    first: u32,
    last: u32,
    index: usize,
) -> Result<PathBuf, DigitizeError> {
    let mut slice = document.clone();
    let total = slice.get_pages().len() as u32;
    let delete: Vec<u32> = (1..=total).filter(|p| *p < first || *p > last).collect();
    slice.delete_pages(&delete);
    slice.prune_objects();

    let slice_path = std::env::temp_dir().join(format!("qbank_slice_{}.pdf", index + 1));
    slice
        .save(&slice_path)
        .map_err(|e| DigitizeError::PdfFailed(e.to_string()))?;
    Ok(slice_path)
}

/// 1-based inclusive page ranges covering `total` pages in `span`-page
/// slices
pub fn page_spans(total: usize, span: usize) -> Vec<(u32, u32)> {
    let mut spans = Vec::new();
    let mut first = 1usize;
    while first <= total {
        let last = (first + span - 1).min(total);
        spans.push((first as u32, last as u32));
        first = last + 1;
    }
    spans
}
