//! Size classes: per-format margins, mark sizes, and font tier ladders
//!
//! The planned label dimensions bucket into three classes. Compact labels
//! (10x7cm and under) get tighter margins and smaller marks so content
//! still fits; wide labels (14cm and up) scale everything up for shelf
//! visibility; the rest use the standard ladder.

use serde::Serialize;

use crate::geometry::cm_to_px;

/// Label format bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeClassKind {
  Compact,
  Standard,
  Wide,
}

/// Named font size within a class ladder, smallest to largest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontTier {
  Micro,
  Small,
  Normal,
  Medium,
  Large,
  Title,
  Display,
}

/// Tiers drawn with the bold face by default
pub fn is_bold_tier(tier: FontTier) -> bool {
  matches!(
    tier,
    FontTier::Medium | FontTier::Large | FontTier::Title | FontTier::Display
  )
}

/// Resolved rendering parameters for one label format
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeClass {
  pub kind: SizeClassKind,
  /// Outer margin between canvas edge and any content
  pub margin_cm: f32,
  /// Side length of the square corner marks
  pub mark_size_cm: f32,
  /// Side length of the scan code square
  pub scan_code_size_cm: f32,
  /// Clearance kept around reserved zones
  pub safe_margin_cm: f32,
  // Pixel sizes indexed by FontTier discriminant
  font_px: [f32; 7],
}

impl SizeClass {
  /// Buckets planned label dimensions into a size class
  ///
  /// # Examples
  ///
  /// ```
  /// use labelrender::render::{SizeClass, SizeClassKind};
  ///
  /// assert_eq!(SizeClass::for_label(3.5, 3.0).kind, SizeClassKind::Compact);
  /// assert_eq!(SizeClass::for_label(12.0, 8.0).kind, SizeClassKind::Standard);
  /// assert_eq!(SizeClass::for_label(16.0, 9.0).kind, SizeClassKind::Wide);
  /// ```
  pub fn for_label(width_cm: f32, height_cm: f32) -> Self {
    if width_cm <= 10.0 && height_cm <= 7.0 {
      Self {
        kind: SizeClassKind::Compact,
        margin_cm: 0.1,
        mark_size_cm: 0.8,
        scan_code_size_cm: 1.8,
        safe_margin_cm: 0.1,
        font_px: [11.0, 13.0, 14.0, 16.0, 18.0, 22.0, 24.0],
      }
    } else if width_cm >= 14.0 {
      Self {
        kind: SizeClassKind::Wide,
        margin_cm: 0.15,
        mark_size_cm: 1.0,
        scan_code_size_cm: 2.0,
        safe_margin_cm: 0.15,
        font_px: [14.0, 16.0, 18.0, 20.0, 24.0, 30.0, 36.0],
      }
    } else {
      Self {
        kind: SizeClassKind::Standard,
        margin_cm: 0.12,
        mark_size_cm: 1.0,
        scan_code_size_cm: 2.0,
        safe_margin_cm: 0.15,
        font_px: [12.0, 14.0, 16.0, 18.0, 20.0, 26.0, 30.0],
      }
    }
  }

  /// Font size in pixels for a tier
  pub fn font_px(&self, tier: FontTier) -> f32 {
    self.font_px[tier as usize]
  }

  pub fn margin_px(&self, dpi: u32) -> i32 {
    cm_to_px(self.margin_cm, dpi)
  }

  pub fn mark_px(&self, dpi: u32) -> i32 {
    cm_to_px(self.mark_size_cm, dpi)
  }

  pub fn scan_px(&self, dpi: u32) -> i32 {
    cm_to_px(self.scan_code_size_cm, dpi)
  }

  pub fn safe_px(&self, dpi: u32) -> i32 {
    cm_to_px(self.safe_margin_cm, dpi)
  }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_class_boundaries() {
    // Compact needs both dimensions small.
    assert_eq!(SizeClass::for_label(10.0, 7.0).kind, SizeClassKind::Compact);
    assert_eq!(SizeClass::for_label(10.0, 7.1).kind, SizeClassKind::Standard);
    assert_eq!(SizeClass::for_label(10.1, 7.0).kind, SizeClassKind::Standard);
    // Wide starts at exactly 14cm.
    assert_eq!(SizeClass::for_label(14.0, 9.0).kind, SizeClassKind::Wide);
    assert_eq!(SizeClass::for_label(13.9, 9.0).kind, SizeClassKind::Standard);
  }

  #[test]
  fn test_compact_shrinks_marks() {
    let compact = SizeClass::for_label(3.5, 3.0);
    assert_eq!(compact.mark_size_cm, 0.8);
    assert_eq!(compact.scan_code_size_cm, 1.8);
    assert_eq!(compact.safe_margin_cm, 0.1);
  }

  #[test]
  fn test_pixel_conversion_at_300dpi() {
    let compact = SizeClass::for_label(3.5, 3.0);
    assert_eq!(compact.margin_px(300), 11);
    assert_eq!(compact.mark_px(300), 94);
    assert_eq!(compact.scan_px(300), 212);
    assert_eq!(compact.safe_px(300), 11);

    let standard = SizeClass::for_label(12.0, 8.0);
    assert_eq!(standard.margin_px(300), 14);
    assert_eq!(standard.scan_px(300), 236);
  }

  #[test]
  fn test_ladder_is_monotone() {
    for class in [
      SizeClass::for_label(3.5, 3.0),
      SizeClass::for_label(12.0, 8.0),
      SizeClass::for_label(16.0, 9.0),
    ] {
      let tiers = [
        FontTier::Micro,
        FontTier::Small,
        FontTier::Normal,
        FontTier::Medium,
        FontTier::Large,
        FontTier::Title,
        FontTier::Display,
      ];
      for pair in tiers.windows(2) {
        assert!(class.font_px(pair[0]) < class.font_px(pair[1]));
      }
    }
  }

  #[test]
  fn test_wide_ladder_values() {
    let wide = SizeClass::for_label(16.0, 9.0);
    assert_eq!(wide.font_px(FontTier::Normal), 18.0);
    assert_eq!(wide.font_px(FontTier::Display), 36.0);
  }

  #[test]
  fn test_bold_tiers() {
    assert!(!is_bold_tier(FontTier::Micro));
    assert!(!is_bold_tier(FontTier::Normal));
    assert!(is_bold_tier(FontTier::Medium));
    assert!(is_bold_tier(FontTier::Display));
  }
}
