//! Render overlay resolution.
//!
//! Extraction produces semantic [`StyleSpan`]s; this module flattens them into concrete
//! (range, visual style) pairs against an explicit [`StyleTheme`]. The engine holds no
//! ambient theme state — the host passes its configuration into every call and interprets
//! the resulting attributes however its rendering layer supports (hidden ranges as
//! zero-size/transparent glyphs, colors, font scaling).

use markup_core::{SpanKind, StyleSpan, TextRange};

/// Font weight steps used by the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    /// Regular weight.
    #[default]
    Normal,
    /// Semi-bold.
    SemiBold,
    /// Bold.
    Bold,
}

/// Visual attributes for one overlay range.
///
/// Unset optional fields mean "inherit from the host's base text style".
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VisualStyle {
    /// Font weight.
    pub weight: FontWeight,
    /// Render italic.
    pub italic: bool,
    /// Render with a line-through decoration.
    pub strikethrough: bool,
    /// Render in a monospace face.
    pub monospace: bool,
    /// Render with zero visual footprint (marker glyphs slated to disappear).
    pub hidden: bool,
    /// Font size override in points.
    pub font_size: Option<f32>,
    /// Foreground color as `0xRRGGBBAA`.
    pub color: Option<u32>,
    /// Background color as `0xRRGGBBAA`.
    pub background: Option<u32>,
}

impl VisualStyle {
    /// The style for hidden marker glyphs: zero-size, no other attributes.
    fn hidden_marks() -> Self {
        Self {
            hidden: true,
            font_size: Some(0.0),
            ..Self::default()
        }
    }
}

/// One styled range of the render overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyledRange {
    /// The covered char range.
    pub range: TextRange,
    /// The visual attributes to apply over it.
    pub style: VisualStyle,
}

/// Style configuration for the render overlay, passed explicitly by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleTheme {
    /// Heading font sizes in points, indexed by `level - 1`. Monotonically decreasing.
    pub heading_sizes: [f32; 4],
    /// Hashtag foreground color (`0xRRGGBBAA`).
    pub hashtag_color: u32,
    /// Monospace body background color (`0xRRGGBBAA`).
    pub monospace_background: u32,
}

impl Default for StyleTheme {
    fn default() -> Self {
        Self {
            heading_sizes: [32.0, 28.0, 24.0, 18.0],
            hashtag_color: 0x0000EEFF,
            monospace_background: 0x808080FF,
        }
    }
}

impl StyleTheme {
    /// Font size for a heading `level` (1 through 4; out-of-range levels clamp).
    pub fn heading_size(&self, level: u8) -> f32 {
        let idx = usize::from(level.clamp(1, 4)) - 1;
        self.heading_sizes[idx]
    }
}

/// Flatten `spans` into host-renderable styled ranges.
///
/// Marker glyph ranges come out hidden — heading markers shrink to a quarter of the heading
/// size instead of collapsing to zero, so the line keeps its baseline — and bodies carry
/// their kind's visual style. Text outside any span is left untouched. Output order follows
/// the span sequence, so a renderer applying ranges in order reproduces the pass-accumulation
/// semantics of extraction.
pub fn render_overlay(spans: &[StyleSpan], theme: &StyleTheme) -> Vec<StyledRange> {
    let mut out = Vec::with_capacity(spans.len() * 3);

    for span in spans {
        match span.kind {
            SpanKind::Heading { level } => {
                let size = theme.heading_size(level);
                if let Some(marks) = span.marker_open {
                    out.push(StyledRange {
                        range: marks,
                        style: VisualStyle {
                            hidden: true,
                            font_size: Some(size / 4.0),
                            ..VisualStyle::default()
                        },
                    });
                }
                out.push(StyledRange {
                    range: span.body,
                    style: VisualStyle {
                        weight: FontWeight::Bold,
                        font_size: Some(size),
                        ..VisualStyle::default()
                    },
                });
            }
            SpanKind::Hashtag => {
                out.push(StyledRange {
                    range: span.body,
                    style: VisualStyle {
                        weight: FontWeight::SemiBold,
                        color: Some(theme.hashtag_color),
                        ..VisualStyle::default()
                    },
                });
            }
            kind => {
                if let Some(marks) = span.marker_open {
                    out.push(StyledRange {
                        range: marks,
                        style: VisualStyle::hidden_marks(),
                    });
                }
                out.push(StyledRange {
                    range: span.body,
                    style: body_style(kind, theme),
                });
                if let Some(marks) = span.marker_close {
                    out.push(StyledRange {
                        range: marks,
                        style: VisualStyle::hidden_marks(),
                    });
                }
            }
        }
    }

    out
}

fn body_style(kind: SpanKind, theme: &StyleTheme) -> VisualStyle {
    match kind {
        SpanKind::Bold => VisualStyle {
            weight: FontWeight::Bold,
            ..VisualStyle::default()
        },
        SpanKind::Italic => VisualStyle {
            italic: true,
            ..VisualStyle::default()
        },
        // Strikethrough compounds italic + semi-bold with the line-through. Historical
        // styling choice, kept on purpose.
        SpanKind::Strikethrough => VisualStyle {
            weight: FontWeight::SemiBold,
            italic: true,
            strikethrough: true,
            ..VisualStyle::default()
        },
        SpanKind::Monospace => VisualStyle {
            weight: FontWeight::SemiBold,
            monospace: true,
            background: Some(theme.monospace_background),
            ..VisualStyle::default()
        },
        // Heading and hashtag spans are handled by the caller.
        SpanKind::Heading { .. } | SpanKind::Hashtag => VisualStyle::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_size_clamps_level() {
        let theme = StyleTheme::default();
        assert_eq!(theme.heading_size(1), 32.0);
        assert_eq!(theme.heading_size(4), 18.0);
        assert_eq!(theme.heading_size(0), 32.0);
        assert_eq!(theme.heading_size(9), 18.0);
    }

    #[test]
    fn test_hidden_marks_have_zero_size() {
        let style = VisualStyle::hidden_marks();
        assert!(style.hidden);
        assert_eq!(style.font_size, Some(0.0));
        assert_eq!(style.weight, FontWeight::Normal);
    }
}
