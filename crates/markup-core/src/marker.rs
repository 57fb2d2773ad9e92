//! Marker vocabulary.
//!
//! A [`MarkerDefinition`] names the literal glyph pair that delimits one inline style in the
//! raw text. The toggle operations and the extraction crate share this vocabulary and
//! nothing else: toggling splices marker strings around a selection, extraction builds its
//! patterns from the same strings.

use thiserror::Error;

/// Inline styles addressable by a marker pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// `**bold**`
    Bold,
    /// `~~italic~~`
    Italic,
    /// `--strikethrough--`
    Strikethrough,
    /// `` ``monospace`` ``
    Monospace,
}

impl MarkerKind {
    /// All built-in marker kinds.
    pub const ALL: [MarkerKind; 4] = [
        Self::Bold,
        Self::Italic,
        Self::Strikethrough,
        Self::Monospace,
    ];

    /// The built-in marker pair for this kind.
    ///
    /// All built-in pairs are symmetric (open == close).
    pub fn definition(self) -> MarkerDefinition {
        let glyphs = match self {
            Self::Bold => "**",
            Self::Italic => "~~",
            Self::Strikethrough => "--",
            Self::Monospace => "``",
        };
        MarkerDefinition {
            kind: self,
            open: glyphs.to_string(),
            close: glyphs.to_string(),
        }
    }
}

/// Errors for malformed marker definitions and marker sets.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MarkerError {
    /// A marker string was empty.
    #[error("{0:?} marker must not be empty")]
    Empty(MarkerKind),
    /// Two kinds share a marker character, making their spans ambiguous.
    #[error("{0:?} and {1:?} markers overlap lexically")]
    Overlap(MarkerKind, MarkerKind),
}

/// An immutable open/close marker pair for one style kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerDefinition {
    kind: MarkerKind,
    open: String,
    close: String,
}

impl MarkerDefinition {
    /// Create a validated marker pair.
    ///
    /// Marker strings must not be empty; everything else is the caller's choice. Whether a
    /// whole marker *set* is coherent (no kind stealing another kind's glyphs) is checked
    /// separately by [`validate_distinct`].
    pub fn new(
        kind: MarkerKind,
        open: impl Into<String>,
        close: impl Into<String>,
    ) -> Result<Self, MarkerError> {
        let open = open.into();
        let close = close.into();
        if open.is_empty() || close.is_empty() {
            return Err(MarkerError::Empty(kind));
        }
        Ok(Self { kind, open, close })
    }

    /// The style kind this pair belongs to.
    pub fn kind(&self) -> MarkerKind {
        self.kind
    }

    /// The opening marker glyphs.
    pub fn open(&self) -> &str {
        &self.open
    }

    /// The closing marker glyphs.
    pub fn close(&self) -> &str {
        &self.close
    }
}

/// Check that no two definitions share a marker character.
///
/// A shared character would let one style's body terminate another style's marker, so the
/// extraction patterns would stop meaning what they say. The built-in table satisfies this;
/// custom marker sets are validated before any pattern compiles.
pub fn validate_distinct(definitions: &[MarkerDefinition]) -> Result<(), MarkerError> {
    for (i, a) in definitions.iter().enumerate() {
        for b in &definitions[i + 1..] {
            let shared = a
                .open
                .chars()
                .chain(a.close.chars())
                .any(|ch| b.open.contains(ch) || b.close.contains(ch));
            if shared {
                return Err(MarkerError::Overlap(a.kind, b.kind));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table() {
        assert_eq!(MarkerKind::Bold.definition().open(), "**");
        assert_eq!(MarkerKind::Italic.definition().open(), "~~");
        assert_eq!(MarkerKind::Strikethrough.definition().open(), "--");
        assert_eq!(MarkerKind::Monospace.definition().open(), "``");

        for kind in MarkerKind::ALL {
            let def = kind.definition();
            assert_eq!(def.kind(), kind);
            assert_eq!(def.open(), def.close());
        }
    }

    #[test]
    fn test_builtin_table_is_distinct() {
        let defs: Vec<_> = MarkerKind::ALL.iter().map(|k| k.definition()).collect();
        assert_eq!(validate_distinct(&defs), Ok(()));
    }

    #[test]
    fn test_empty_marker_rejected() {
        let err = MarkerDefinition::new(MarkerKind::Bold, "", "**").unwrap_err();
        assert_eq!(err, MarkerError::Empty(MarkerKind::Bold));

        let err = MarkerDefinition::new(MarkerKind::Bold, "**", "").unwrap_err();
        assert_eq!(err, MarkerError::Empty(MarkerKind::Bold));
    }

    #[test]
    fn test_overlapping_markers_rejected() {
        let bold = MarkerDefinition::new(MarkerKind::Bold, "**", "**").unwrap();
        let fake_italic = MarkerDefinition::new(MarkerKind::Italic, "*", "*").unwrap();
        assert_eq!(
            validate_distinct(&[bold, fake_italic]),
            Err(MarkerError::Overlap(MarkerKind::Bold, MarkerKind::Italic))
        );
    }

    #[test]
    fn test_asymmetric_pair_allowed() {
        let def = MarkerDefinition::new(MarkerKind::Monospace, "{{", "}}").unwrap();
        assert_eq!(def.open(), "{{");
        assert_eq!(def.close(), "}}");
    }
}
