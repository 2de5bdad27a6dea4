//! The editing session: one document snapshot plus its bullet store.
//!
//! Single-user and exclusively owned; every mutation happens synchronously in
//! response to one handler call. Loading a document rebuilds the store from
//! scratch (the identity counter survives, see [`BulletStore::rebuild`]).

use crate::editor::render;
use crate::editor::store::BulletStore;
use crate::extract::{attribution, scan, section, ExtractError};

/// Placeholder text for bullets added from the UI.
pub const NEW_BULLET_PLACEHOLDER: &str = "New bullet point - customize this text";

/// Fallback job title when a bullet is added for a company with no records.
const NEW_ENTRY_TITLE: &str = "New Entry";

/// Immutable snapshot of the loaded LaTeX source.
#[derive(Debug)]
pub struct Document {
    pub original: String,
}

#[derive(Debug, Default)]
pub struct EditorSession {
    document: Option<Document>,
    store: BulletStore,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a document and rebuilds the store from its Experience section.
    ///
    /// On [`ExtractError`] the session is left untouched: the previous
    /// document and records stay in place, nothing is partially populated.
    pub fn load(&mut self, source: String) -> Result<(), ExtractError> {
        let span = section::locate(&source)?;
        let headings = scan::headings(span.content);
        let bullets = scan::bullets(span.content);
        let attributed = attribution::attribute(&source, span.start, &headings, &bullets);

        self.store.rebuild(attributed);
        self.document = Some(Document { original: source });
        Ok(())
    }

    /// Adds a bullet under `company`, resolving the job title from that
    /// company's existing records.
    pub fn create_bullet(&mut self, company: &str, text: &str) -> u64 {
        let job_title = self
            .store
            .job_title_for(company)
            .unwrap_or(NEW_ENTRY_TITLE)
            .to_string();
        self.store.create(company, &job_title, text)
    }

    /// Reconstructs the document. `editor_text` overrides the stored
    /// snapshot when the caller's editor content has diverged from it.
    /// Returns `None` when no document is loaded and no override is given.
    pub fn render(&self, editor_text: Option<&str>) -> Option<String> {
        let base = match editor_text {
            Some(text) => text,
            None => self.document.as_ref()?.original.as_str(),
        };
        Some(render::render(base, &self.store))
    }

    pub fn store(&self) -> &BulletStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut BulletStore {
        &mut self.store
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }
}
