//! Experience-section boundary detection.
//!
//! The section content is the shortest span between the `\section{Experience}`
//! marker and the next `\section{` or `\end{document}`, spanning line breaks.
//! Restricting all further scans to this span keeps `\resumeItem` entries in
//! other sections (projects, skills) out of the editable set.

use super::ExtractError;

/// Start marker of the one section this tool edits.
pub const SECTION_MARKER: &str = "\\section{Experience}";

const SECTION_OPEN: &str = "\\section{";
const DOCUMENT_END: &str = "\\end{document}";

/// The Experience section's content and its position in the full document.
#[derive(Debug, Clone, Copy)]
pub struct SectionSpan<'a> {
    /// Text between the section marker and the terminator (exclusive).
    pub content: &'a str,
    /// Byte offset of `content` within the full document. Later anchor
    /// searches start here rather than at offset 0.
    pub start: usize,
}

/// Locates the Experience section in `document`.
///
/// Fails with [`ExtractError::SectionNotFound`] when the start marker is
/// absent, or when no terminator (`\section{` or `\end{document}`) follows
/// it. A marker with nothing to bound it is treated as no section at all.
pub fn locate(document: &str) -> Result<SectionSpan<'_>, ExtractError> {
    let marker = document
        .find(SECTION_MARKER)
        .ok_or(ExtractError::SectionNotFound)?;
    let start = marker + SECTION_MARKER.len();
    let rest = &document[start..];

    let next_section = rest.find(SECTION_OPEN);
    let document_end = rest.find(DOCUMENT_END);

    let end = match (next_section, document_end) {
        (Some(s), Some(e)) => s.min(e),
        (Some(s), None) => s,
        (None, Some(e)) => e,
        (None, None) => return Err(ExtractError::SectionNotFound),
    };

    Ok(SectionSpan {
        content: &rest[..end],
        start,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locates_section_bounded_by_next_section() {
        let doc = "\\section{Experience}\nbody text\n\\section{Projects}\nother";
        let span = locate(doc).unwrap();
        assert_eq!(span.content, "\nbody text\n");
        assert_eq!(span.start, SECTION_MARKER.len());
    }

    #[test]
    fn test_locates_section_bounded_by_document_end() {
        let doc = "preamble\n\\section{Experience}\nbody\n\\end{document}\n";
        let span = locate(doc).unwrap();
        assert_eq!(span.content, "\nbody\n");
        assert_eq!(&doc[span.start..span.start + span.content.len()], "\nbody\n");
    }

    #[test]
    fn test_shortest_span_wins_when_both_terminators_present() {
        let doc = "\\section{Experience}AB\\section{Skills}CD\\end{document}";
        let span = locate(doc).unwrap();
        assert_eq!(span.content, "AB");
    }

    #[test]
    fn test_missing_section_is_an_error() {
        let doc = "\\section{Education}\nstuff\n\\end{document}";
        assert_eq!(locate(doc).unwrap_err(), ExtractError::SectionNotFound);
    }

    #[test]
    fn test_unterminated_section_is_an_error() {
        // Marker present but nothing bounds it.
        let doc = "\\section{Experience}\ndangling body with no terminator";
        assert_eq!(locate(doc).unwrap_err(), ExtractError::SectionNotFound);
    }

    #[test]
    fn test_span_tolerates_line_breaks() {
        let doc = "\\section{Experience}\nline one\nline two\n\nline three\n\\section{Next}";
        let span = locate(doc).unwrap();
        assert!(span.content.contains("line one"));
        assert!(span.content.contains("line three"));
    }
}
