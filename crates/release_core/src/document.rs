/// Returns true when `name` ends in ".pdf", ignoring case.
///
/// Used both for listing hrefs and for local directory entries.
pub fn has_pdf_suffix(name: &str) -> bool {
    name.to_lowercase().ends_with(".pdf")
}

/// A document link discovered on the listing page, kept exactly as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteDocument {
    href: String,
}

impl RemoteDocument {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    /// Resolve against `base_url`.
    ///
    /// Hrefs starting with "http" are used verbatim. Anything else is appended
    /// to `base_url` with plain string concatenation, no path normalization.
    pub fn resolve(&self, base_url: &str) -> ResolvedDocument {
        let url = if self.href.starts_with("http") {
            self.href.clone()
        } else {
            format!("{base_url}{}", self.href)
        };
        let file_name = last_segment(&url).to_string();
        ResolvedDocument { url, file_name }
    }
}

/// An absolute download URL and the local file name it is stored under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDocument {
    pub url: String,
    pub file_name: String,
}

fn last_segment(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
