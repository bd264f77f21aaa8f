//! Font loading and face metrics
//!
//! The engine ships two bundled DejaVu Sans faces (regular and bold) so
//! that output is reproducible on any machine and Cyrillic coverage is
//! guaranteed. A system lookup through `fontdb` can be opted into; any
//! face it fails to produce falls back to the bundled one, so loading a
//! [`FontLibrary`] only fails if the bundled data itself is corrupt.

use std::sync::Arc;

use crate::error::FontError;

// Bundled fallback fonts, always available
const EMBEDDED_REGULAR: &[u8] = include_bytes!("../../resources/fonts/DejaVuSans.ttf");
const EMBEDDED_BOLD: &[u8] = include_bytes!("../../resources/fonts/DejaVuSans-Bold.ttf");
const EMBEDDED_FAMILY: &str = "DejaVu Sans";

/// Vertical metrics of a parsed face, in font units
///
/// Cached at load time so that line height and baseline math never needs
/// to re-parse the face.
#[derive(Debug, Clone, Copy)]
pub struct FaceMetrics {
  pub units_per_em: u16,
  /// Distance from baseline to top of em box (positive)
  pub ascent: i16,
  /// Distance from baseline to bottom of em box (negative)
  pub descent: i16,
  /// Recommended additional spacing between lines
  pub line_gap: i16,
}

impl FaceMetrics {
  /// Extracts metrics from a parsed face
  pub fn from_face(face: &ttf_parser::Face) -> Self {
    Self {
      units_per_em: face.units_per_em(),
      ascent: face.ascender(),
      descent: face.descender(),
      line_gap: face.line_gap(),
    }
  }

  /// Font units to pixels factor at the given size
  pub fn scale(&self, font_size: f32) -> f32 {
    font_size / self.units_per_em as f32
  }

  /// Ascent in pixels at the given size
  pub fn ascent_px(&self, font_size: f32) -> f32 {
    self.ascent as f32 * self.scale(font_size)
  }

  /// Descent in pixels at the given size, as a positive distance
  pub fn descent_px(&self, font_size: f32) -> f32 {
    -(self.descent as f32) * self.scale(font_size)
  }

  /// Line height in pixels: ascent + descent + line gap
  pub fn line_height(&self, font_size: f32) -> f32 {
    (self.ascent as f32 - self.descent as f32 + self.line_gap as f32) * self.scale(font_size)
  }
}

/// A loaded font face: owned bytes plus cached metrics
///
/// The raw data is behind an `Arc` so clones share the buffer. Parsed
/// views ([`ttf_parser::Face`], [`rustybuzz::Face`]) borrow from it and
/// are constructed on demand.
#[derive(Debug, Clone)]
pub struct LabelFont {
  pub data: Arc<Vec<u8>>,
  pub index: u32,
  pub family: String,
  pub metrics: FaceMetrics,
}

impl LabelFont {
  /// Parses the bytes and caches metrics
  pub fn from_data(data: Vec<u8>, index: u32, family: &str) -> Result<Self, FontError> {
    let metrics = {
      let face =
        ttf_parser::Face::parse(&data, index).map_err(|e| FontError::LoadFailed {
          family: family.to_string(),
          reason: e.to_string(),
        })?;
      FaceMetrics::from_face(&face)
    };
    Ok(Self {
      data: Arc::new(data),
      index,
      family: family.to_string(),
      metrics,
    })
  }

  /// Parses a `ttf_parser` view of this font for outline extraction
  pub fn as_ttf_face(&self) -> Result<ttf_parser::Face<'_>, FontError> {
    ttf_parser::Face::parse(&self.data, self.index).map_err(|e| FontError::LoadFailed {
      family: self.family.clone(),
      reason: e.to_string(),
    })
  }

  /// Parses a `rustybuzz` view of this font for shaping
  pub fn as_shaper_face(&self) -> Option<rustybuzz::Face<'_>> {
    rustybuzz::Face::from_slice(&self.data, self.index)
  }
}

/// Which of the two library faces to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSlot {
  Regular,
  Bold,
}

/// The two faces every label is drawn with
#[derive(Debug, Clone)]
pub struct FontLibrary {
  pub regular: LabelFont,
  pub bold: LabelFont,
}

impl FontLibrary {
  /// Loads the bundled DejaVu Sans faces
  ///
  /// This is the deterministic default: identical input produces identical
  /// pixels regardless of what fonts the host has installed.
  pub fn bundled() -> Result<Self, FontError> {
    Ok(Self {
      regular: LabelFont::from_data(EMBEDDED_REGULAR.to_vec(), 0, EMBEDDED_FAMILY)?,
      bold: LabelFont::from_data(EMBEDDED_BOLD.to_vec(), 0, EMBEDDED_FAMILY)?,
    })
  }

  /// Loads faces from the system font database, preferring Arial
  ///
  /// Each slot falls back to the bundled face when the system has nothing
  /// suitable or the matched file fails to parse.
  pub fn with_system_fonts() -> Result<Self, FontError> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    let bundled = Self::bundled()?;
    let regular = query_system(&db, fontdb::Weight::NORMAL).unwrap_or(bundled.regular);
    let bold = query_system(&db, fontdb::Weight::BOLD).unwrap_or(bundled.bold);
    Ok(Self { regular, bold })
  }

  /// Face for the given slot
  pub fn font(&self, slot: FontSlot) -> &LabelFont {
    match slot {
      FontSlot::Regular => &self.regular,
      FontSlot::Bold => &self.bold,
    }
  }
}

fn query_system(db: &fontdb::Database, weight: fontdb::Weight) -> Option<LabelFont> {
  let query = fontdb::Query {
    families: &[
      fontdb::Family::Name("Arial"),
      fontdb::Family::Name(EMBEDDED_FAMILY),
      fontdb::Family::SansSerif,
    ],
    weight,
    stretch: fontdb::Stretch::Normal,
    style: fontdb::Style::Normal,
  };
  let id = db.query(&query)?;
  let family = db
    .face(id)
    .and_then(|info| info.families.first().map(|(name, _)| name.clone()))
    .unwrap_or_else(|| "sans-serif".to_string());
  let (data, index) = db.with_face_data(id, |data, index| (data.to_vec(), index))?;
  LabelFont::from_data(data, index, &family).ok()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_bundled_fonts_load() {
    let library = FontLibrary::bundled().unwrap();
    assert_eq!(library.regular.family, "DejaVu Sans");
    assert!(library.regular.as_shaper_face().is_some());
    assert!(library.bold.as_ttf_face().is_ok());
  }

  #[test]
  fn test_metrics_look_sane() {
    let library = FontLibrary::bundled().unwrap();
    let metrics = library.regular.metrics;
    assert!(metrics.units_per_em > 0);
    assert!(metrics.ascent > 0);
    assert!(metrics.descent < 0);
    // DejaVu line height at 16px is a bit over the em size.
    let line_height = metrics.line_height(16.0);
    assert!(line_height > 16.0 && line_height < 24.0, "{}", line_height);
  }

  #[test]
  fn test_ascent_descent_split_line_height() {
    let library = FontLibrary::bundled().unwrap();
    let metrics = library.regular.metrics;
    let sum =
      metrics.ascent_px(20.0) + metrics.descent_px(20.0) + metrics.line_gap as f32 * metrics.scale(20.0);
    assert!((sum - metrics.line_height(20.0)).abs() < 0.001);
  }

  #[test]
  fn test_cyrillic_coverage() {
    let library = FontLibrary::bundled().unwrap();
    let face = library.regular.as_ttf_face().unwrap();
    for ch in "Производитель".chars() {
      assert!(face.glyph_index(ch).is_some(), "missing glyph for {}", ch);
    }
  }

  #[test]
  fn test_font_slot_lookup() {
    let library = FontLibrary::bundled().unwrap();
    assert!(Arc::ptr_eq(
      &library.font(FontSlot::Regular).data,
      &library.regular.data
    ));
    assert!(Arc::ptr_eq(
      &library.font(FontSlot::Bold).data,
      &library.bold.data
    ));
  }

  #[test]
  fn test_garbage_data_rejected() {
    let result = LabelFont::from_data(vec![0, 1, 2, 3], 0, "junk");
    assert!(result.is_err());
  }
}
