use release_core::{has_pdf_suffix, RemoteDocument};
use release_logging::release_info;
use scraper::{Html, Selector};

use crate::{FetchError, Fetcher};

/// PDF links found on the listing page, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    documents: Vec<RemoteDocument>,
}

impl Listing {
    pub fn new(documents: Vec<RemoteDocument>) -> Self {
        Self { documents }
    }

    pub fn documents(&self) -> &[RemoteDocument] {
        &self.documents
    }

    /// Number of PDF anchors, duplicates included.
    pub fn count(&self) -> usize {
        self.documents.len()
    }

    pub fn hrefs(&self) -> Vec<&str> {
        self.documents.iter().map(RemoteDocument::href).collect()
    }
}

/// Collect the href of every `<a>` whose value ends in ".pdf" (any case).
/// Order is preserved and duplicates are kept.
pub fn extract_pdf_links(html: &str) -> Listing {
    let doc = Html::parse_document(html);
    let Ok(anchors) = Selector::parse("a[href]") else {
        return Listing::default();
    };

    let documents = doc
        .select(&anchors)
        .filter_map(|a| a.value().attr("href"))
        .filter(|href| has_pdf_suffix(href))
        .map(RemoteDocument::new)
        .collect();
    Listing::new(documents)
}

/// Fetch the listing page and extract its PDF links.
pub async fn discover(fetcher: &dyn Fetcher, listing_url: &str) -> Result<Listing, FetchError> {
    let html = fetcher.fetch_page(listing_url).await?;
    let listing = extract_pdf_links(&html);
    release_info!(
        "Discovered {} PDF links on {}",
        listing.count(),
        listing_url
    );
    Ok(listing)
}
