use std::fs;
use std::path::Path;

/// Extract plain text from a local document.
///
/// PDF files go through `pdf-extract`; anything else is read as UTF-8 text.
/// Returns an empty string when the file cannot be read or decoded, which
/// the chunking engine treats as "zero questions".
pub fn text_from_document(path: &Path) -> String {
    let is_pdf = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));

    let result = if is_pdf {
        pdf_extract::extract_text(path).map_err(|e| e.to_string())
    } else {
        fs::read_to_string(path).map_err(|e| e.to_string())
    };

    match result {
        Ok(text) => text,
        Err(e) => {
            eprintln!("[extract] Failed to read {}: {}", path.display(), e);
            String::new()
        }
    }
}
