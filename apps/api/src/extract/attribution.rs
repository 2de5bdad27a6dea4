//! Bullet-to-heading attribution.
//!
//! Ownership is nearest-preceding-heading by raw position, never structural
//! containment: headings are scanned last-to-first and the first one starting
//! strictly before the bullet wins. Bullets appearing before any heading get
//! the sentinel owner.

use super::scan::{BulletMatch, HeadingMatch};

/// Sentinel job title for bullets with no preceding heading.
pub const SENTINEL_TITLE: &str = "General";
/// Sentinel company for bullets with no preceding heading.
pub const SENTINEL_COMPANY: &str = "Unknown Company";

/// A bullet span with its resolved owner and reconstruction anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributedBullet {
    /// Trimmed inner text.
    pub inner: String,
    /// Full `\resumeItem{...}` substring, the reconstruction needle.
    pub full: String,
    pub job_title: String,
    pub company: String,
    /// Absolute offset of the first occurrence of `full` in the document at
    /// or after the section start. `None` only for degenerate inputs where
    /// the matched text cannot be re-found (should not happen for spans
    /// scanned out of the same document).
    pub anchor_offset: Option<usize>,
}

/// Resolves ownership and anchors for each bullet, in document order.
///
/// `section_start` is the byte offset of the section content within
/// `document`; anchor searches begin there so identical bullet text in
/// earlier sections never captures the anchor.
pub fn attribute(
    document: &str,
    section_start: usize,
    headings: &[HeadingMatch],
    bullets: &[BulletMatch],
) -> Vec<AttributedBullet> {
    bullets
        .iter()
        .map(|bullet| {
            let owner = headings.iter().rev().find(|h| h.start < bullet.start);
            let (job_title, company) = match owner {
                Some(h) => (h.title.clone(), h.company.clone()),
                None => (SENTINEL_TITLE.to_string(), SENTINEL_COMPANY.to_string()),
            };

            let anchor_offset = document[section_start..]
                .find(&bullet.full)
                .map(|pos| section_start + pos);

            AttributedBullet {
                inner: bullet.inner.clone(),
                full: bullet.full.clone(),
                job_title,
                company,
                anchor_offset,
            }
        })
        .collect()
}
