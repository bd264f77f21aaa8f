//! Text shaping, font handling, and line wrapping
//!
//! This module handles all text-related operations:
//! - Font loading (bundled faces with an optional system lookup)
//! - Width measurement via HarfBuzz shaping (through rustybuzz)
//! - Greedy word wrapping with hyphenated hard splits
//!
//! # Architecture
//!
//! 1. **Font Loading**: [`fonts::FontLibrary`] loads a regular and a bold
//!    face, bundled DejaVu Sans by default for reproducible output
//! 2. **Measurement**: [`measure::measure_width`] shapes a string and sums
//!    scaled advances
//! 3. **Wrapping**: [`wrap::wrap_text`] is a pure greedy wrapper over any
//!    measuring closure, so it is testable without fonts

pub mod fonts;
pub mod measure;
pub mod wrap;

pub use fonts::{FaceMetrics, FontLibrary, FontSlot, LabelFont};
pub use measure::measure_width;
pub use wrap::wrap_text;
