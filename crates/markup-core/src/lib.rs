#![warn(missing_docs)]
//! Markup Core - Headless Inline-Markup Annotation Engine
//!
//! # Overview
//!
//! `markup-core` is the editing side of a lightweight markdown-like markup system. It knows
//! how to toggle inline style markers (`**bold**`, `~~italic~~`, `--strikethrough--`,
//! `` ``monospace`` ``) around a text selection or collapsed cursor, how to report whether a
//! selection already sits inside such a marker, and it owns the [`StyleSpan`] data model that
//! the extraction side (`markup-core-highlight`) produces for a host renderer.
//!
//! It does not render anything and holds no editor state: the host text field calls in with
//! `(text, selection_start, selection_end)` and receives back a replacement string or a
//! boolean. All operations are pure functions over immutable inputs and are safe to invoke
//! from any thread.
//!
//! # Index space
//!
//! All public offsets are **character offsets** (Unicode scalar values), not byte offsets.
//! Reversed or out-of-range selection bounds are normalized, never rejected; a caller may
//! hold stale bounds after an external edit.
//!
//! # Quick Start
//!
//! ```rust
//! use markup_core::{MarkerKind, is_inside_marker, toggle_marker};
//!
//! let bold = MarkerKind::Bold.definition();
//!
//! let text = toggle_marker("Hello world", 0, 5, &bold);
//! assert_eq!(text, "**Hello** world");
//! assert!(is_inside_marker(&text, 0, 9, &bold));
//!
//! // Toggling the now-marker-inclusive range unwraps again.
//! assert_eq!(toggle_marker(&text, 0, 9, &bold), "Hello world");
//! ```
//!
//! # Module Description
//!
//! - [`marker`] - marker vocabulary ([`MarkerKind`], [`MarkerDefinition`], validation)
//! - [`toggle`] - toggle / inside-detection operations
//! - [`selection`] - selection normalization
//! - [`span`] - extracted style span data model
//! - [`offset`] - char/byte offset mapping

pub mod marker;
pub mod offset;
pub mod selection;
pub mod span;
pub mod toggle;

pub use marker::{MarkerDefinition, MarkerError, MarkerKind, validate_distinct};
pub use offset::OffsetMap;
pub use selection::Selection;
pub use span::{SpanKind, StyleSpan, TextRange};
pub use toggle::{is_inside_marker, toggle_marker};
