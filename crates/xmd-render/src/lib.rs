//! Markdown page rendering.
//!
//! Turns registry entries into ordered line sequences: one reference page
//! per type plus the cross-type index. Rendering is pure - writing the
//! lines to disk is the caller's job.

mod index;
mod page;

pub use index::render_index;
pub use page::render_type_page;

/// Footer appended to every generated page.
pub const GENERATED_NOTICE: &str =
    "This page was generated automatically from code documentation; manual edits will be overwritten.";
