//! Machine-readable layout report
//!
//! Every render produces a [`LayoutReport`] alongside the image: what was
//! planned, what was drawn, what was dropped, and a compliance summary a
//! downstream validator can act on without decoding the raster.

use serde::Serialize;

use crate::content::{BlockKind, ProductCategory, StructuredContent};
use crate::error::Result;
use crate::geometry::{ContentRect, Rgb};
use crate::plan::LabelPlan;
use crate::render::{FlowStats, MarkKind, RenderFlags, ReservedZone, SizeClassKind};

/// One reserved zone, reduced to its placement
#[derive(Debug, Clone, Serialize)]
pub struct ZoneReport {
  pub kind: MarkKind,
  pub x: i32,
  pub y: i32,
  pub size_px: i32,
}

impl From<&ReservedZone> for ZoneReport {
  fn from(zone: &ReservedZone) -> Self {
    Self {
      kind: zone.kind,
      x: zone.x,
      y: zone.y,
      size_px: zone.size,
    }
  }
}

/// Checks derived from the structured content, not from parsing the image
#[derive(Debug, Clone, Serialize)]
pub struct ComplianceReport {
  pub has_title: bool,
  pub has_country: bool,
  pub has_importer: bool,
  pub scan_code_requested: bool,
  /// Every suggested size is at least the 8pt regulatory floor
  pub font_size_ok: bool,
  /// Every hinted text color is dark enough against the white base
  pub contrast_ok: bool,
}

impl ComplianceReport {
  pub fn evaluate(content: &StructuredContent, flags: RenderFlags) -> Self {
    Self {
      has_title: content.has(BlockKind::Title),
      has_country: content.has(BlockKind::Country),
      has_importer: content.has(BlockKind::Importer) || content.has(BlockKind::Manufacturer),
      scan_code_requested: flags.needs_scan_code,
      font_size_ok: content.font_size_hints.values().all(|&pt| pt >= 8),
      contrast_ok: content
        .blocks
        .iter()
        .filter_map(|block| block.color_hint)
        .all(dark_on_white),
    }
  }
}

fn dark_on_white(color: Rgb) -> bool {
  let luminance =
    0.299 * color.r as f32 + 0.587 * color.g as f32 + 0.114 * color.b as f32;
  luminance < 160.0
}

/// Full account of one label generation
#[derive(Debug, Clone, Serialize)]
pub struct LayoutReport {
  pub plan: LabelPlan,
  pub canvas_width_px: i32,
  pub canvas_height_px: i32,
  pub size_class: SizeClassKind,
  pub category: ProductCategory,
  pub content_rect: ContentRect,
  pub drawn_blocks: Vec<BlockKind>,
  pub overflowed_blocks: Vec<BlockKind>,
  pub zones: Vec<ZoneReport>,
  pub used_fallback: bool,
  pub compliance: ComplianceReport,
  pub warnings: Vec<String>,
}

impl LayoutReport {
  /// Report for a completed layout pass
  pub fn from_flow(
    plan: &LabelPlan,
    content: &StructuredContent,
    flags: RenderFlags,
    stats: &FlowStats,
    canvas_width_px: i32,
    canvas_height_px: i32,
  ) -> Self {
    Self {
      plan: *plan,
      canvas_width_px,
      canvas_height_px,
      size_class: stats.size_class,
      category: content.category,
      content_rect: stats.content_rect,
      drawn_blocks: stats.drawn.clone(),
      overflowed_blocks: stats.overflowed.clone(),
      zones: stats.zones.iter().map(ZoneReport::from).collect(),
      used_fallback: false,
      compliance: ComplianceReport::evaluate(content, flags),
      warnings: stats.warnings.clone(),
    }
  }

  /// Report for a render that had to fall back to the minimal layout
  pub fn from_fallback(
    plan: &LabelPlan,
    content: &StructuredContent,
    flags: RenderFlags,
    canvas_width_px: i32,
    canvas_height_px: i32,
    reason: String,
  ) -> Self {
    Self {
      plan: *plan,
      canvas_width_px,
      canvas_height_px,
      size_class: SizeClassKind::Compact,
      category: content.category,
      content_rect: ContentRect::from_edges(0, canvas_width_px, 0, canvas_height_px),
      drawn_blocks: Vec::new(),
      overflowed_blocks: Vec::new(),
      zones: Vec::new(),
      used_fallback: true,
      compliance: ComplianceReport::evaluate(content, flags),
      warnings: vec![format!("fallback layout used: {}", reason)],
    }
  }

  pub fn to_json(&self) -> Result<String> {
    Ok(serde_json::to_string_pretty(self)?)
  }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
  use super::*;
  use crate::attrs::{AttributeMap, AttributeValue};
  use crate::content::structure;

  fn attrs(pairs: &[(&str, &str)]) -> AttributeMap {
    pairs
      .iter()
      .map(|(k, v)| (k.to_string(), AttributeValue::from(*v)))
      .collect()
  }

  fn stats() -> FlowStats {
    FlowStats {
      size_class: SizeClassKind::Standard,
      content_rect: ContentRect::from_edges(14, 1400, 14, 900),
      zones: Vec::new(),
      drawn: vec![BlockKind::Title, BlockKind::Country],
      overflowed: vec![BlockKind::Composition],
      warnings: vec!["Composition truncated".to_string()],
    }
  }

  fn plan() -> LabelPlan {
    use crate::plan::{
      AnchorPosition, HorizontalAnchor, ScanCodePlacement, VerticalAnchor,
    };
    LabelPlan {
      width_cm: 12.0,
      height_cm: 8.0,
      anchor: AnchorPosition::CenterMiddle,
      scan_code: ScanCodePlacement {
        horizontal: HorizontalAnchor::Right,
        vertical: VerticalAnchor::Bottom,
        margin_x_cm: 0.3,
        margin_y_cm: 0.3,
      },
      scan_code_size_cm: 2.0,
      content_width_cm: 11.0,
      content_height_cm: 5.5,
    }
  }

  #[test]
  fn test_compliance_minimal_content() {
    let content = structure(&attrs(&[("product_name", "Сок")]));
    let compliance = ComplianceReport::evaluate(&content, RenderFlags::default());
    assert!(compliance.has_title);
    assert!(!compliance.has_country);
    assert!(!compliance.has_importer);
    assert!(!compliance.scan_code_requested);
    assert!(compliance.contrast_ok);
  }

  #[test]
  fn test_compliance_full_content() {
    let content = structure(&attrs(&[
      ("product_name", "Сок яблочный"),
      ("country_of_origin", "Россия"),
      ("importer", "ООО Импорт, Москва"),
    ]));
    let compliance = ComplianceReport::evaluate(&content, RenderFlags::default());
    assert!(compliance.has_title && compliance.has_country && compliance.has_importer);
  }

  #[test]
  fn test_manufacturer_counts_as_importer_info() {
    let content = structure(&attrs(&[
      ("product_name", "Сок"),
      ("manufacturer", "ООО Сады"),
    ]));
    let compliance = ComplianceReport::evaluate(&content, RenderFlags::default());
    assert!(compliance.has_importer);
  }

  #[test]
  fn test_small_font_hint_fails_size_check() {
    // A food composition block is styled below the 8pt floor.
    let content = structure(&attrs(&[
      ("product_name", "Сок яблочный"),
      ("ingredients", "яблоко, вода"),
    ]));
    let compliance = ComplianceReport::evaluate(&content, RenderFlags::default());
    assert!(!compliance.font_size_ok);
  }

  #[test]
  fn test_dark_on_white() {
    assert!(dark_on_white(Rgb::BLACK));
    assert!(dark_on_white(Rgb::new(0xc4, 0x1e, 0x3a)));
    assert!(!dark_on_white(Rgb::new(0xee, 0xee, 0xee)));
  }

  #[test]
  fn test_report_serializes_snake_case() {
    let content = structure(&attrs(&[("product_name", "Сок")]));
    let report = LayoutReport::from_flow(
      &plan(),
      &content,
      RenderFlags::default(),
      &stats(),
      1417,
      944,
    );
    let json = report.to_json().unwrap();
    assert!(json.contains("\"drawn_blocks\""));
    assert!(json.contains("\"title\""));
    assert!(json.contains("\"composition\""));
    assert!(json.contains("\"used_fallback\": false"));
    assert!(json.contains("\"size_class\": \"standard\""));
  }

  #[test]
  fn test_fallback_report_flags_itself() {
    let content = structure(&attrs(&[("product_name", "Сок")]));
    let report = LayoutReport::from_fallback(
      &plan(),
      &content,
      RenderFlags::default(),
      240,
      160,
      "canvas allocation failed".to_string(),
    );
    assert!(report.used_fallback);
    assert!(report.warnings[0].contains("fallback"));
    assert!(report.drawn_blocks.is_empty());
  }
}
