//! Bullet-point extraction engine.
//!
//! Turns the raw LaTeX source into structured, addressable bullet records:
//! `section` locates the Experience section bounds, `scan` finds heading and
//! bullet spans inside it, and `attribution` assigns each bullet to its
//! nearest preceding job heading. Everything here is pure and synchronous;
//! the editor session owns orchestration and state.

pub mod attribution;
pub mod scan;
pub mod section;

use thiserror::Error;

/// Errors produced while locating structure in the LaTeX source.
///
/// Extraction errors block attribution and reconstruction entirely; the
/// bullet store must never be left partially populated after one.
#[derive(Debug, Error, PartialEq)]
pub enum ExtractError {
    #[error("No Experience section found in the LaTeX document")]
    SectionNotFound,
}
