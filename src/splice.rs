//! # splice: marker-delimited document region replacement
//!
//! The README carries paired HTML-comment markers around every generated
//! region. Splicing replaces the interior of one region and leaves the
//! markers and all surrounding text untouched. A document with several
//! regions is updated by sequential application, each call operating on
//! the previous result; offsets shift between calls, so the pairs are
//! never processed in parallel.

/// A start/end marker pair bounding one replaceable region.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub start: &'static str,
    pub end: &'static str,
}

/// Replace everything strictly between `section`'s markers with a newline,
/// `body`, and a newline.
///
/// The end marker is searched after the start marker, matching the
/// invariant that pairs appear once each in start-before-end order. When
/// either marker is missing the document is returned unchanged; an absent
/// region is a silent no-op, not an error.
pub fn splice(document: &str, section: &Section, body: &str) -> String {
    let Some(start_index) = document.find(section.start) else {
        return document.to_string();
    };
    let interior_start = start_index + section.start.len();
    let Some(end_offset) = document[interior_start..].find(section.end) else {
        return document.to_string();
    };
    let end_index = interior_start + end_offset;

    format!(
        "{}\n{}\n{}",
        &document[..interior_start],
        body,
        &document[end_index..]
    )
}
