//! Heading and bullet span scans within the Experience section.
//!
//! Both scans are non-overlapping and left-to-right. Heading arguments are
//! brace-free; bullet arguments tolerate one level of nested brace groups and
//! escaped braces, so bullet text may carry simple embedded LaTeX like
//! `\textbf{...}`.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // \resumeSubheading{title}{dates}{location}{company}: four brace-free
    // arguments, optional whitespace between groups.
    static ref HEADING_RE: Regex = Regex::new(
        r"\\resumeSubheading\s*\{([^{}]+)\}\s*\{([^{}]+)\}\s*\{([^{}]+)\}\s*\{([^{}]+)\}"
    )
    .unwrap();

    // \resumeItem{...}: argument is any run of non-brace text, escaped
    // braces, or single-level brace groups.
    static ref BULLET_RE: Regex = Regex::new(
        r"\\resumeItem\{((?:[^{}]|\\[{}]|\{[^{}]*\})*)\}"
    )
    .unwrap();
}

/// One matched `\resumeSubheading` invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingMatch {
    pub title: String,
    pub dates: String,
    pub location: String,
    pub company: String,
    /// Match start offset relative to the section content.
    pub start: usize,
}

/// One matched `\resumeItem` invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct BulletMatch {
    /// The full matched substring, macro name and braces included. This is
    /// the exact needle used for reconstruction.
    pub full: String,
    /// The captured inner text, whitespace-trimmed.
    pub inner: String,
    /// Match start offset relative to the section content.
    pub start: usize,
}

/// Scans the section content for job headings, in document order.
pub fn headings(section: &str) -> Vec<HeadingMatch> {
    HEADING_RE
        .captures_iter(section)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(HeadingMatch {
                title: caps[1].to_string(),
                dates: caps[2].to_string(),
                location: caps[3].to_string(),
                company: caps[4].to_string(),
                start: whole.start(),
            })
        })
        .collect()
}

/// Scans the section content for bullet items, in document order.
pub fn bullets(section: &str) -> Vec<BulletMatch> {
    BULLET_RE
        .captures_iter(section)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(BulletMatch {
                full: whole.as_str().to_string(),
                inner: caps[1].trim().to_string(),
                start: whole.start(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_captures_four_fields_in_order() {
        let section = "\\resumeSubheading{Engineer}{2020-2022}{City}{Acme}";
        let found = headings(section);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Engineer");
        assert_eq!(found[0].dates, "2020-2022");
        assert_eq!(found[0].location, "City");
        assert_eq!(found[0].company, "Acme");
        assert_eq!(found[0].start, 0);
    }

    #[test]
    fn test_heading_tolerates_whitespace_between_arguments() {
        let section = "x \\resumeSubheading {Dev}\n  {2021}\n  {Remote}\n  {Beta Corp} y";
        let found = headings(section);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].company, "Beta Corp");
        assert_eq!(found[0].start, 2);
    }

    #[test]
    fn test_heading_rejects_nested_braces_in_arguments() {
        let section = "\\resumeSubheading{Dev \\textbf{x}}{2021}{Remote}{Beta}";
        assert!(headings(section).is_empty());
    }

    #[test]
    fn test_bullet_captures_full_match_and_trimmed_inner() {
        let section = "  \\resumeItem{ Did X }  ";
        let found = bullets(section);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].full, "\\resumeItem{ Did X }");
        assert_eq!(found[0].inner, "Did X");
        assert_eq!(found[0].start, 2);
    }

    #[test]
    fn test_bullet_tolerates_one_level_of_nested_braces() {
        let section = "\\resumeItem{Shipped \\textbf{fast} pipelines}";
        let found = bullets(section);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].inner, "Shipped \\textbf{fast} pipelines");
    }

    #[test]
    fn test_bullet_tolerates_escaped_braces() {
        let section = "\\resumeItem{Covered 95\\% of \\{edge\\} cases}";
        let found = bullets(section);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].inner, "Covered 95\\% of \\{edge\\} cases");
    }

    #[test]
    fn test_bullet_spans_line_breaks() {
        let section = "\\resumeItem{first line\nsecond line}";
        let found = bullets(section);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].inner, "first line\nsecond line");
    }

    #[test]
    fn test_scans_are_non_overlapping_and_ordered() {
        let section = "\\resumeItem{A}\\resumeItem{B}\\resumeItem{C}";
        let found = bullets(section);
        let inners: Vec<&str> = found.iter().map(|b| b.inner.as_str()).collect();
        assert_eq!(inners, vec!["A", "B", "C"]);
        assert!(found[0].start < found[1].start && found[1].start < found[2].start);
    }
}
