use serde::Deserialize;

/// Number of volumes requested per page. The server never returns more than
/// this many items for one page, and page offsets are multiples of it.
pub const PAGE_SIZE: u32 = 10;

/// One page of a catalog search: the total match count across all pages and
/// the volumes belonging to this page.
///
/// The server omits `items` entirely when a page past the end of the results
/// is requested, so the field stays optional here; consumers decide whether
/// absent means empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VolumePage {
    #[serde(rename = "totalItems")]
    pub total_items: u32,
    pub items: Option<Vec<Volume>>,
}

/// A single catalog record. Immutable once received.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Volume {
    pub id: String,
    #[serde(rename = "volumeInfo")]
    pub volume_info: VolumeInfo,
}

/// Descriptive fields of a volume. Everything but the title is optional on
/// the wire.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    pub title: String,
    pub authors: Option<Vec<String>>,
    pub publisher: Option<String>,
    pub published_date: Option<String>,
    pub description: Option<String>,
    pub page_count: Option<u32>,
    pub image_links: Option<ImageLinks>,
    pub info_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageLinks {
    pub thumbnail: Option<String>,
}

impl VolumeInfo {
    /// Thumbnail URI with its scheme upgraded to `https`.
    ///
    /// The catalog serves thumbnail links over plain `http`; image loaders
    /// refuse cleartext transport, so the scheme is rewritten before use.
    pub fn secure_thumbnail(&self) -> Option<String> {
        let thumbnail = self.image_links.as_ref()?.thumbnail.as_deref()?;
        match thumbnail.strip_prefix("http://") {
            Some(rest) => Some(format!("https://{rest}")),
            None => Some(thumbnail.to_string()),
        }
    }
}
