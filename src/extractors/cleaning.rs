// src/extractors/cleaning.rs

// --- Imports ---
use crate::newsgroups::models::Remove;
use once_cell::sync::Lazy;
use regex::Regex;

// --- Regex Patterns for Text Matching (Lazy Static) ---
// Lines carrying quoted replies or attribution, e.g. "> text",
// "| text", "bob@host (Bob) writes:", "In article <...>".
static QUOTE_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(writes in|writes:|wrote:|says:|said:|^In article|^Quoted from|^\||^>)")
        .expect("Failed to compile QUOTE_LINE_RE")
});

/// Drops the message header block: everything up to and including the
/// first blank line. Records with no blank line at all pass through
/// unchanged (newsgroup posts always separate headers with one).
pub fn strip_header(text: &str) -> &str {
    match text.split_once("\n\n") {
        Some((_headers, body)) => body,
        None => text,
    }
}

/// Drops every line that looks like a quoted reply or its attribution.
pub fn strip_quoting(text: &str) -> String {
    let good_lines: Vec<&str> = text
        .lines()
        .filter(|line| !QUOTE_LINE_RE.is_match(line))
        .collect();
    good_lines.join("\n")
}

/// Drops the trailing signature block: scanning upward from the end,
/// everything below the last separator line (blank, or dashes like
/// "--"). Records with no separator are returned whole.
pub fn strip_footer(text: &str) -> String {
    let lines: Vec<&str> = text.trim().split('\n').collect();

    let separator = lines
        .iter()
        .rposition(|line| line.trim().trim_matches('-').is_empty());

    match separator {
        Some(index) if index > 0 => lines[..index].join("\n"),
        _ => text.to_string(),
    }
}

/// Applies the requested structural stripping to one record, in the
/// same order the original dataset tooling does: headers, then
/// footers, then quoted replies.
pub fn clean_record(text: &str, remove: Remove) -> String {
    let mut record = if remove.headers {
        strip_header(text).to_string()
    } else {
        text.to_string()
    };
    if remove.footers {
        record = strip_footer(&record);
    }
    if remove.quotes {
        record = strip_quoting(&record);
    }
    record
}
