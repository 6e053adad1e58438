//! Seeded portrait URLs.
//!
//! The seed is the URL-encoded philosopher name, so the same name always
//! maps to the same picture.

/// Portrait dimensions used by the views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortraitSize {
    /// List card (400x500).
    Card,
    /// Detail hero (800x600).
    Hero,
}

impl PortraitSize {
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            PortraitSize::Card => (400, 500),
            PortraitSize::Hero => (800, 600),
        }
    }
}

/// Build `{base_url}/seed/{encoded name}/{width}/{height}`.
pub fn portrait_url(base_url: &str, name: &str, size: PortraitSize) -> String {
    let (width, height) = size.dimensions();
    format!(
        "{}/seed/{}/{}/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(name),
        width,
        height
    )
}
