//! Document reconstruction.
//!
//! Rendering starts from the caller's current editor text, never from the
//! pristine original: the user may have hand-edited the document outside the
//! bullet editor, and that text stays authoritative. Each extracted record is
//! spliced back by one literal first-occurrence replacement of its source
//! span; a record whose span no longer appears is skipped silently. Records
//! created in the editor are appended as a block before the last
//! `\resumeItemListEnd`, or under a trailing comment when no such marker
//! exists.

use crate::editor::store::BulletStore;

/// Marker closing a bullet list in the template. New bullets are inserted
/// immediately before its last occurrence.
pub const LIST_END_MARKER: &str = "\\resumeItemListEnd";

const NEW_BULLET_INDENT: &str = "        ";
const NEW_BULLET_COMMENT: &str = "% New bullet points:";

fn bullet_macro(text: &str) -> String {
    format!("\\resumeItem{{{text}}}")
}

/// Reconstructs the full LaTeX text from `editor_text` and the store.
/// This operation cannot fail; an unresolvable source span is a silent skip.
pub fn render(editor_text: &str, store: &BulletStore) -> String {
    let mut output = editor_text.to_string();

    // In-place substitution preserves the relative order of pre-existing
    // bullets. Exactly one replacement per record.
    for record in store.all() {
        if let Some(span) = &record.source_span {
            if let Some(pos) = output.find(span.as_str()) {
                output.replace_range(pos..pos + span.len(), &bullet_macro(&record.text));
            }
        }
    }

    let new_bullets: Vec<String> = store
        .all()
        .filter(|r| r.is_new())
        .map(|r| format!("{NEW_BULLET_INDENT}{}", bullet_macro(&r.text)))
        .collect();

    if !new_bullets.is_empty() {
        let block = new_bullets.join("\n");
        if let Some(pos) = output.rfind(LIST_END_MARKER) {
            output.insert_str(pos, &format!("{block}\n\n      "));
        } else {
            output.push_str("\n\n");
            output.push_str(NEW_BULLET_COMMENT);
            output.push('\n');
            output.push_str(&block);
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{attribution, scan, section};

    const DOC: &str = r"\documentclass{article}
\begin{document}
\section{Experience}
  \resumeSubheading{Engineer}{2020-2022}{City}{Acme}
    \resumeItemListStart
        \resumeItem{Did X}
        \resumeItem{Did Y}
    \resumeItemListEnd
  \resumeSubheading{Developer}{2018-2020}{Town}{Beta Corp}
    \resumeItemListStart
        \resumeItem{Did Z}
    \resumeItemListEnd
\section{Education}
\end{document}
";

    fn extracted_store(document: &str) -> BulletStore {
        let span = section::locate(document).unwrap();
        let headings = scan::headings(span.content);
        let bullets = scan::bullets(span.content);
        let attributed = attribution::attribute(document, span.start, &headings, &bullets);
        let mut store = BulletStore::new();
        store.rebuild(attributed);
        store
    }

    #[test]
    fn test_unedited_store_renders_the_document_unchanged() {
        let store = extracted_store(DOC);
        assert_eq!(render(DOC, &store), DOC);
    }

    #[test]
    fn test_single_edit_changes_exactly_one_occurrence() {
        let mut store = extracted_store(DOC);
        let id = store.all().find(|r| r.original == "Did Y").unwrap().id;
        store.update(id, "Did Y twice as fast");

        let output = render(DOC, &store);
        assert_eq!(output.matches("Did Y twice as fast").count(), 1);
        assert!(!output.contains("\\resumeItem{Did Y}"));
        // Every other byte is untouched.
        assert_eq!(
            output.replace("\\resumeItem{Did Y twice as fast}", "\\resumeItem{Did Y}"),
            DOC
        );
    }

    #[test]
    fn test_new_bullet_is_inserted_before_last_list_end() {
        let mut store = extracted_store(DOC);
        store.create("Beta Corp", "Developer", "Did W");

        let output = render(DOC, &store);
        assert_eq!(output.matches("\\resumeItem{Did W}").count(), 1);
        // Inserted before the *last* marker, after the Beta Corp bullet.
        let insert_at = output.find("\\resumeItem{Did W}").unwrap();
        let last_end = output.rfind(LIST_END_MARKER).unwrap();
        let did_z = output.find("\\resumeItem{Did Z}").unwrap();
        assert!(did_z < insert_at && insert_at < last_end);
        // Existing bullets untouched.
        assert!(output.contains("\\resumeItem{Did X}"));
        assert!(output.contains("\\resumeItem{Did Y}"));
    }

    #[test]
    fn test_new_bullets_keep_creation_order() {
        let mut store = extracted_store(DOC);
        store.create("Acme", "Engineer", "first new");
        store.create("Acme", "Engineer", "second new");

        let output = render(DOC, &store);
        let first = output.find("first new").unwrap();
        let second = output.find("second new").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_new_bullets_append_under_comment_without_marker() {
        let doc = "\\section{Experience}\n\\resumeItem{Did X}\n\\end{document}";
        let mut store = extracted_store(doc);
        store.create("Acme", "Engineer", "added");

        let output = render(doc, &store);
        assert!(output.contains("% New bullet points:"));
        assert!(output.ends_with("        \\resumeItem{added}"));
    }

    #[test]
    fn test_missing_source_span_is_silently_skipped() {
        let mut store = extracted_store(DOC);
        let id = store.all().find(|r| r.original == "Did X").unwrap().id;
        store.update(id, "edited");

        // The user hand-deleted that bullet from the editor text.
        let hand_edited = DOC.replace("        \\resumeItem{Did X}\n", "");
        let output = render(&hand_edited, &store);
        assert!(!output.contains("edited"));
        assert!(output.contains("\\resumeItem{Did Y}"));
    }

    #[test]
    fn test_hand_edited_text_stays_authoritative() {
        let store = extracted_store(DOC);
        let hand_edited = DOC.replace("\\section{Education}", "\\section{Projects}");
        let output = render(&hand_edited, &store);
        assert!(output.contains("\\section{Projects}"));
    }

    #[test]
    fn test_scenario_edit_second_bullet_round_trip() {
        // Full extraction scenario: three records, two owned by Acme, one by
        // Beta Corp; editing the second yields the input with one macro
        // argument changed.
        let mut store = extracted_store(DOC);
        let owners: Vec<(String, String)> = store
            .all()
            .map(|r| (r.job_title.clone(), r.company.clone()))
            .collect();
        assert_eq!(
            owners,
            vec![
                ("Engineer".to_string(), "Acme".to_string()),
                ("Engineer".to_string(), "Acme".to_string()),
                ("Developer".to_string(), "Beta Corp".to_string()),
            ]
        );
        let id = store.all().find(|r| r.original == "Did Y").unwrap().id;
        store.update(id, "Did X2");

        let output = render(DOC, &store);
        assert_eq!(output, DOC.replace("\\resumeItem{Did Y}", "\\resumeItem{Did X2}"));
    }
}
