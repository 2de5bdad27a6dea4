//! Bullet store: the ordered, identity-addressed record set for one session.

use serde::Serialize;

use crate::extract::attribution::AttributedBullet;

/// One editable bullet. Extracted records carry their original text and the
/// exact source span used as the substitution needle at render time;
/// user-created records carry neither (empty original, no span).
#[derive(Debug, Clone, Serialize)]
pub struct BulletRecord {
    /// Session-unique identity. Never reused, even after removal.
    pub id: u64,
    /// Captured inner text at load time; empty for user-created records.
    pub original: String,
    /// Current, user-editable text. Starts equal to `original`.
    pub text: String,
    pub job_title: String,
    pub company: String,
    /// Full `\resumeItem{...}` substring from the source document.
    pub source_span: Option<String>,
    /// Absolute offset of the source span in the original document.
    pub anchor_offset: Option<usize>,
    /// Position among bullets at creation time. Stable for display ordering;
    /// never compacted by removals.
    pub sequence: usize,
}

impl BulletRecord {
    /// True for records the user created in the editor, i.e. never present
    /// in the source document.
    pub fn is_new(&self) -> bool {
        self.source_span.is_none()
    }
}

/// Ordered mapping from identity to record.
///
/// The identity counter is monotonic for the process lifetime: a rebuild
/// replaces every record but never rewinds the counter, so identities stay
/// unique across extraction passes.
#[derive(Debug, Default)]
pub struct BulletStore {
    records: Vec<BulletRecord>,
    next_id: u64,
}

impl BulletStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn fresh_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Replaces the record set wholesale with freshly extracted bullets.
    /// Callers build the full attributed vector first, so a failed
    /// extraction never reaches this point with a partial set.
    pub fn rebuild(&mut self, bullets: Vec<AttributedBullet>) {
        self.records.clear();
        for (sequence, bullet) in bullets.into_iter().enumerate() {
            let id = self.fresh_id();
            self.records.push(BulletRecord {
                id,
                original: bullet.inner.clone(),
                text: bullet.inner,
                job_title: bullet.job_title,
                company: bullet.company,
                source_span: Some(bullet.full),
                anchor_offset: bullet.anchor_offset,
                sequence,
            });
        }
    }

    /// Appends a user-created record and returns its identity.
    pub fn create(&mut self, company: &str, job_title: &str, text: &str) -> u64 {
        let id = self.fresh_id();
        let sequence = self.records.len();
        self.records.push(BulletRecord {
            id,
            original: String::new(),
            text: text.to_string(),
            job_title: job_title.to_string(),
            company: company.to_string(),
            source_span: None,
            anchor_offset: None,
            sequence,
        });
        id
    }

    /// Overwrites the current text of the record with identity `id`.
    /// Original text, owner fields, and source span are never touched.
    /// Returns false (no-op) when the identity is absent.
    pub fn update(&mut self, id: u64, new_text: &str) -> bool {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.text = new_text.to_string();
                true
            }
            None => false,
        }
    }

    /// Removes the record with identity `id`, permanently. Other records
    /// keep their identities and sequence indices.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }

    pub fn get(&self, id: u64) -> Option<&BulletRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Records in store order (insertion order; removals do not compact).
    pub fn all(&self) -> impl Iterator<Item = &BulletRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Job title of the first record owned by `company`, used when the user
    /// adds a bullet under an existing company group.
    pub fn job_title_for(&self, company: &str) -> Option<&str> {
        self.records
            .iter()
            .find(|r| r.company == company)
            .map(|r| r.job_title.as_str())
    }
}
