//! Message content classification.
//!
//! Splits a raw, already-sent message into an ordered sequence of typed
//! segments so the host can render each by its own rules: emoji glyphs,
//! hyperlinks, and markdown-bearing text. Segments never overlap, and
//! concatenating their source text reconstructs the input exactly.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::emoji::EmojiTable;

/// URL-shaped pattern: optional scheme, optional `www.`, dotted host with a
/// 2-6 letter TLD, optional path/query. A display heuristic that may both
/// over- and under-match; not for security-sensitive link validation.
static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(https?://)?(www\.)?[-a-zA-Z0-9@:%._+~#=]{2,256}\.[a-z]{2,6}\b([-a-zA-Z0-9@:%_+.~#?&/=]*)",
    )
    .expect("URL regex pattern is valid")
});

/// A maximal typed span of a rendered message.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum ContentSegment {
    /// Text to render verbatim, without a markdown pass.
    PlainText(String),
    /// Text to render honoring inline markdown (never raw HTML).
    FormattedText(String),
    /// A hyperlink target, displayed and linked as-is.
    Link(String),
    /// An emoji glyph substituted for the shortcode found in the source.
    Emoji { glyph: String, source: String },
}

impl ContentSegment {
    /// The segment's content as it appeared in the source message (an emoji
    /// yields its original shortcode, not the glyph).
    pub fn source_text(&self) -> &str {
        match self {
            ContentSegment::PlainText(text)
            | ContentSegment::FormattedText(text)
            | ContentSegment::Link(text) => text,
            ContentSegment::Emoji { source, .. } => source,
        }
    }
}

/// Split a raw message into ordered typed segments.
///
/// Pure and idempotent: no shared state, the same input always yields the
/// same sequence. A single left-to-right scan finds emoji shortcodes
/// (longest match, delimited by whitespace or string boundaries on both
/// sides); the remaining text runs are then split around URL-shaped matches,
/// with everything else emitted as [`ContentSegment::FormattedText`].
pub fn classify(raw: &str, emoji: &EmojiTable) -> Vec<ContentSegment> {
    let mut segments = Vec::new();
    let mut plain = String::new();

    let mut i = 0;
    let mut at_boundary = true; // start of string counts as a boundary
    while i < raw.len() {
        let rest = &raw[i..];
        if at_boundary {
            if let Some((code, glyph)) = emoji.match_at(rest) {
                let after = &rest[code.len()..];
                if after.is_empty() || after.starts_with(char::is_whitespace) {
                    flush_plain(&mut segments, &mut plain);
                    segments.push(ContentSegment::Emoji {
                        glyph: glyph.to_string(),
                        source: code.to_string(),
                    });
                    i += code.len();
                    at_boundary = false;
                    continue;
                }
            }
        }
        let ch = match rest.chars().next() {
            Some(ch) => ch,
            None => break,
        };
        plain.push(ch);
        at_boundary = ch.is_whitespace();
        i += ch.len_utf8();
    }
    flush_plain(&mut segments, &mut plain);

    segments
}

/// Classify a finished plain run, splitting URL matches out as links.
fn flush_plain(segments: &mut Vec<ContentSegment>, plain: &mut String) {
    if plain.is_empty() {
        return;
    }
    let run = std::mem::take(plain);
    let mut last = 0;
    for m in URL_RE.find_iter(&run) {
        if m.start() > last {
            segments.push(ContentSegment::FormattedText(run[last..m.start()].to_string()));
        }
        segments.push(ContentSegment::Link(m.as_str().to_string()));
        last = m.end();
    }
    if last < run.len() {
        segments.push(ContentSegment::FormattedText(run[last..].to_string()));
    }
}
