//! Shallow markup well-formedness scanner.
//!
//! Deliberately not a full XML parser: the serialization library that
//! materializes the document is an external collaborator. This scan only
//! answers "is there a document here, and is its element structure sound"
//! so a broken export is caught before submission. Scanning stops at the
//! first structural defect; everything after it is unreliable.

use std::fmt;

/// Structural defects the scanner can report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentDefect {
    /// Document is empty or whitespace-only.
    EmptyDocument,
    /// Markup opened at `position` (character offset) never terminates.
    UnterminatedMarkup { position: usize },
    /// Closing tag does not match the innermost open element.
    MismatchedClosingTag { expected: String, found: String },
    /// Closing tag appears with no element open.
    UnexpectedClosingTag { found: String },
    /// Element is still open at end of document.
    UnclosedElement { name: String },
    /// A second top-level element follows the closed root.
    MultipleRootElements { name: String },
    /// Non-whitespace text outside the root element.
    TextOutsideRoot { position: usize },
    /// Document has markup but no root element at all.
    NoRootElement,
}

impl fmt::Display for DocumentDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDocument => write!(f, "document is empty"),
            Self::UnterminatedMarkup { position } => {
                write!(f, "markup at offset {} is not terminated", position)
            }
            Self::MismatchedClosingTag { expected, found } => {
                write!(f, "closing tag </{}> does not match open <{}>", found, expected)
            }
            Self::UnexpectedClosingTag { found } => {
                write!(f, "closing tag </{}> has no matching open element", found)
            }
            Self::UnclosedElement { name } => {
                write!(f, "element <{}> is never closed", name)
            }
            Self::MultipleRootElements { name } => {
                write!(f, "second root element <{}> after the document root", name)
            }
            Self::TextOutsideRoot { position } => {
                write!(f, "text at offset {} is outside the root element", position)
            }
            Self::NoRootElement => write!(f, "document contains no root element"),
        }
    }
}

/// Scan raw markup and report the first structural defect, if any.
///
/// Returns an empty list for a well-formed document. Offsets are character
/// offsets into `raw`.
pub fn scan(raw: &str) -> Vec<DocumentDefect> {
    if raw.trim().is_empty() {
        return vec![DocumentDefect::EmptyDocument];
    }

    let chars: Vec<char> = raw.chars().collect();
    let len = chars.len();
    let mut stack: Vec<String> = Vec::new();
    let mut root_seen = false;
    let mut root_closed = false;
    let mut i = 0usize;

    while i < len {
        let c = chars[i];
        if c == '<' {
            if i + 1 >= len {
                return vec![DocumentDefect::UnterminatedMarkup { position: i }];
            }
            match chars[i + 1] {
                '?' => {
                    // Prolog / processing instruction
                    match find_past(&chars, i + 2, &['?', '>']) {
                        Some(next) => i = next,
                        None => return vec![DocumentDefect::UnterminatedMarkup { position: i }],
                    }
                }
                '!' => {
                    let next = if starts_with(&chars, i, "<!--") {
                        find_past(&chars, i + 4, &['-', '-', '>'])
                    } else if starts_with(&chars, i, "<![CDATA[") {
                        find_past(&chars, i + 9, &[']', ']', '>'])
                    } else {
                        // DOCTYPE and friends
                        find_past(&chars, i + 2, &['>'])
                    };
                    match next {
                        Some(next) => i = next,
                        None => return vec![DocumentDefect::UnterminatedMarkup { position: i }],
                    }
                }
                '/' => {
                    let (found, after) = read_name(&chars, i + 2);
                    let next = match find_past(&chars, after, &['>']) {
                        Some(next) => next,
                        None => return vec![DocumentDefect::UnterminatedMarkup { position: i }],
                    };
                    match stack.pop() {
                        None => return vec![DocumentDefect::UnexpectedClosingTag { found }],
                        Some(expected) => {
                            if expected != found {
                                return vec![DocumentDefect::MismatchedClosingTag {
                                    expected,
                                    found,
                                }];
                            }
                        }
                    }
                    if stack.is_empty() {
                        root_closed = true;
                    }
                    i = next;
                }
                _ => {
                    let (name, after) = read_name(&chars, i + 1);
                    if name.is_empty() {
                        return vec![DocumentDefect::UnterminatedMarkup { position: i }];
                    }
                    let (next, self_closing) = match scan_tag_end(&chars, after) {
                        Some(end) => end,
                        None => return vec![DocumentDefect::UnterminatedMarkup { position: i }],
                    };
                    if stack.is_empty() {
                        if root_closed {
                            return vec![DocumentDefect::MultipleRootElements { name }];
                        }
                        root_seen = true;
                        if self_closing {
                            root_closed = true;
                        }
                    }
                    if !self_closing {
                        stack.push(name);
                    }
                    i = next;
                }
            }
        } else if stack.is_empty() && !c.is_whitespace() {
            return vec![DocumentDefect::TextOutsideRoot { position: i }];
        } else {
            i += 1;
        }
    }

    if let Some(name) = stack.pop() {
        return vec![DocumentDefect::UnclosedElement { name }];
    }
    if !root_seen {
        return vec![DocumentDefect::NoRootElement];
    }
    Vec::new()
}

/// Index just past the first occurrence of `needle` at or after `from`.
fn find_past(chars: &[char], from: usize, needle: &[char]) -> Option<usize> {
    if from > chars.len() {
        return None;
    }
    chars[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|offset| from + offset + needle.len())
}

fn starts_with(chars: &[char], from: usize, prefix: &str) -> bool {
    let mut i = from;
    for p in prefix.chars() {
        if i >= chars.len() || chars[i] != p {
            return false;
        }
        i += 1;
    }
    true
}

/// Read an element name starting at `from`; returns the name and the index
/// of the first character after it.
fn read_name(chars: &[char], from: usize) -> (String, usize) {
    let mut name = String::new();
    let mut i = from;
    while i < chars.len() {
        let c = chars[i];
        if c.is_alphanumeric() || matches!(c, '_' | '-' | ':' | '.') {
            name.push(c);
            i += 1;
        } else {
            break;
        }
    }
    (name, i)
}

/// Find the closing `>` of an open tag, honoring quoted attribute values.
/// Returns the index just past `>` and whether the tag was self-closing.
fn scan_tag_end(chars: &[char], from: usize) -> Option<(usize, bool)> {
    let mut i = from;
    let mut quote: Option<char> = None;
    let mut last_nonspace = ' ';
    while i < chars.len() {
        let c = chars[i];
        match quote {
            Some(q) => {
                if c == q {
                    quote = None;
                }
            }
            None => match c {
                '"' | '\'' => quote = Some(c),
                '>' => return Some((i + 1, last_nonspace == '/')),
                _ => {}
            },
        }
        if !c.is_whitespace() && c != '>' {
            last_nonspace = c;
        }
        i += 1;
    }
    None
}
