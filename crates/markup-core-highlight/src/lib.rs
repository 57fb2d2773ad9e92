//! `markup-core-highlight` - Style span extraction and overlay theming for `markup-core`.
//!
//! This crate is the read-only half of the annotation engine: it scans the full text with
//! one compiled pattern per style and produces [`StyleSpan`]s describing where marker glyphs
//! and styled bodies sit. A host renderer applies the result as an overlay — markers hidden,
//! bodies styled, everything else untouched. The text itself is never rewritten.
//!
//! Extraction is pure and deterministic: the same input always yields the same span
//! sequence, and it is correct (if wasteful) to re-run it on every keystroke.
//!
//! ```rust
//! use markup_core::SpanKind;
//! use markup_core_highlight::{SpanExtractor, StyleTheme, render_overlay};
//!
//! let extractor = SpanExtractor::new()?;
//! let spans = extractor.extract("# Notes\nsee **this** and #tag");
//! assert!(spans.iter().any(|s| matches!(s.kind, SpanKind::Heading { level: 1 })));
//!
//! let overlay = render_overlay(&spans, &StyleTheme::default());
//! assert!(!overlay.is_empty());
//! # Ok::<(), markup_core_highlight::ExtractError>(())
//! ```

use markup_core::{
    MarkerDefinition, MarkerError, MarkerKind, OffsetMap, SpanKind, StyleSpan, TextRange,
    validate_distinct,
};
use regex::Regex;
use thiserror::Error;

mod overlay;

pub use overlay::{FontWeight, StyleTheme, StyledRange, VisualStyle, render_overlay};

/// Hashtag pattern: one `#token` of alphanumerics/hyphen/underscore, with any
/// immediately-adjacent `#token` groups absorbed into the same match.
const HASHTAG_PATTERN: &str = "#[A-Za-z0-9_-]+(?:#[A-Za-z0-9_-]+)*";

/// Heading pattern: 1-4 leading `#`, one whitespace, then a body free of newlines and `#`.
///
/// The bounded repetition is what caps headings at level 4: a fifth `#` can never be part
/// of a match, so `##### Title` matches from the second `#` and the first renders
/// literally.
const HEADING_PATTERN: &str = r"#{1,4}\s[^\n#]*";

/// Errors from building a [`SpanExtractor`].
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A style pattern failed to compile.
    #[error("invalid style pattern: {0}")]
    Pattern(#[from] regex::Error),
    /// The marker set is malformed.
    #[error(transparent)]
    Marker(#[from] MarkerError),
}

/// One compiled extraction pass.
#[derive(Debug, Clone)]
enum Pass {
    Marker(MarkerDefinition),
    Hashtag,
    Heading,
}

#[derive(Debug, Clone)]
struct Rule {
    pass: Pass,
    regex: Regex,
}

/// Scans text for every style's pattern and emits [`StyleSpan`]s for a render overlay.
///
/// Passes run in a fixed order — Bold, Italic, Hashtag, Heading, Strikethrough, Monospace —
/// and the output sequence is ordered by pass, then by match position. Passes are
/// independent whole-text scans; they only ever add spans, never alter earlier ones.
#[derive(Debug, Clone)]
pub struct SpanExtractor {
    rules: Vec<Rule>,
}

impl SpanExtractor {
    /// Extractor over the built-in marker table.
    pub fn new() -> Result<Self, ExtractError> {
        let markers: Vec<_> = MarkerKind::ALL.iter().map(|k| k.definition()).collect();
        Self::with_markers(&markers)
    }

    /// Extractor over a custom marker table.
    ///
    /// The set is validated before anything compiles: empty markers and kinds sharing a
    /// marker character are rejected. Kinds missing from `markers` simply have no pass.
    pub fn with_markers(markers: &[MarkerDefinition]) -> Result<Self, ExtractError> {
        validate_distinct(markers)?;

        let marker_rule = |kind: MarkerKind| -> Result<Option<Rule>, ExtractError> {
            let Some(def) = markers.iter().find(|d| d.kind() == kind) else {
                return Ok(None);
            };
            Ok(Some(Rule {
                regex: Regex::new(&marker_pattern(def))?,
                pass: Pass::Marker(def.clone()),
            }))
        };

        // Pass order is fixed; the output sequence accumulates in this order.
        let mut rules = Vec::with_capacity(markers.len() + 2);
        rules.extend(marker_rule(MarkerKind::Bold)?);
        rules.extend(marker_rule(MarkerKind::Italic)?);
        rules.push(Rule {
            pass: Pass::Hashtag,
            regex: Regex::new(HASHTAG_PATTERN)?,
        });
        rules.push(Rule {
            pass: Pass::Heading,
            regex: Regex::new(HEADING_PATTERN)?,
        });
        rules.extend(marker_rule(MarkerKind::Strikethrough)?);
        rules.extend(marker_rule(MarkerKind::Monospace)?);

        Ok(Self { rules })
    }

    /// Scan `text` and return every style span, in pass order then match order.
    ///
    /// Read-only and total: malformed markup simply produces no span, and marker glyphs
    /// without a matching span render literally.
    pub fn extract(&self, text: &str) -> Vec<StyleSpan> {
        let map = OffsetMap::new(text);
        let mut spans = Vec::new();

        for rule in &self.rules {
            for m in rule.regex.find_iter(text) {
                if let Some(span) = span_from_match(&rule.pass, text, m.start(), m.end(), &map) {
                    spans.push(span);
                }
            }
        }

        tracing::trace!(
            chars = map.char_len(),
            spans = spans.len(),
            "extracted style spans"
        );

        spans
    }
}

/// Build one marker style's pattern from its definition: exactly the marker glyphs, optional
/// whitespace, a word boundary, a body of anything except the style's own marker character,
/// and the closing glyphs.
///
/// The body exclusion means marker characters never appear as plain text inside a styled
/// body, and a body without a clean word boundary (empty, pure punctuation) fails to match.
fn marker_pattern(def: &MarkerDefinition) -> String {
    let marker_char = def
        .open()
        .chars()
        .next()
        .map(|ch| regex::escape(&ch.to_string()))
        .unwrap_or_default();
    format!(
        r"{open}\s*\b[^{marker_char}]*\b\s*{close}",
        open = regex::escape(def.open()),
        close = regex::escape(def.close()),
    )
}

fn span_from_match(
    pass: &Pass,
    text: &str,
    start_byte: usize,
    end_byte: usize,
    map: &OffsetMap,
) -> Option<StyleSpan> {
    let start = map.char_at_byte(start_byte);
    let end = map.char_at_byte(end_byte);
    let range = TextRange::new(start, end);
    if range.is_empty() {
        return None;
    }

    match pass {
        Pass::Marker(def) => {
            let open_len = def.open().chars().count();
            let close_len = def.close().chars().count();
            if range.len() < open_len + close_len {
                return None;
            }
            Some(StyleSpan {
                kind: def.kind().into(),
                range,
                marker_open: Some(TextRange::new(start, start + open_len)),
                body: TextRange::new(start + open_len, end - close_len),
                marker_close: Some(TextRange::new(end - close_len, end)),
            })
        }
        Pass::Hashtag => Some(StyleSpan {
            kind: SpanKind::Hashtag,
            range,
            marker_open: None,
            body: range,
            marker_close: None,
        }),
        Pass::Heading => {
            let level = text[start_byte..end_byte]
                .chars()
                .take_while(|&ch| ch == '#')
                .count();
            Some(StyleSpan {
                kind: SpanKind::Heading { level: level as u8 },
                range,
                marker_open: Some(TextRange::new(start, start + level)),
                body: TextRange::new(start + level, end),
                marker_close: None,
            })
        }
    }
}
