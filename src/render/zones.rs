//! Reserved corner zones and the writable-area computation
//!
//! Marks and the scan code own fixed corners: conformance top-right,
//! recycling bottom-left, scan code bottom-right. Each zone is its glyph
//! box inflated by the safe margin. The text area then retreats from any
//! zone whose envelope sits clearly on one side of the canvas midpoint;
//! an envelope that straddles the midpoint (a large scan code on a tiny
//! label) does not shrink the text area, and overlap is accepted.

use serde::Serialize;

use crate::geometry::{ContentRect, PxRect};
use crate::render::size_class::SizeClass;
use crate::render::RenderFlags;

/// Which corner element a zone is reserved for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkKind {
  /// Conformance mark, top-right
  Gost,
  /// Recycling mark, bottom-left
  Recycle,
  /// Scan code placeholder, bottom-right
  ScanCode,
}

/// A reserved corner zone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservedZone {
  pub kind: MarkKind,
  /// Top-left corner of the glyph box
  pub x: i32,
  pub y: i32,
  /// Side length of the square glyph box
  pub size: i32,
  /// Glyph box inflated by the safe margin
  pub bounds: PxRect,
}

fn zone(kind: MarkKind, x: i32, y: i32, size: i32, safe: i32) -> ReservedZone {
  ReservedZone {
    kind,
    x,
    y,
    size,
    bounds: PxRect::new(x, y, size, size).inflate(safe),
  }
}

/// Reserves corner zones for the requested marks
pub fn reserve_zones(
  width_px: i32,
  height_px: i32,
  class: &SizeClass,
  flags: RenderFlags,
  dpi: u32,
) -> Vec<ReservedZone> {
  let margin = class.margin_px(dpi);
  let mark = class.mark_px(dpi);
  let scan = class.scan_px(dpi);
  let safe = class.safe_px(dpi);

  let mut zones = Vec::new();
  if flags.needs_compliance_mark {
    zones.push(zone(
      MarkKind::Gost,
      width_px - mark - margin,
      margin,
      mark,
      safe,
    ));
  }
  if flags.needs_recycle_mark {
    zones.push(zone(
      MarkKind::Recycle,
      margin,
      height_px - mark - margin,
      mark,
      safe,
    ));
  }
  if flags.needs_scan_code {
    zones.push(zone(
      MarkKind::ScanCode,
      width_px - scan - margin,
      height_px - scan - margin,
      scan,
      safe,
    ));
  }
  zones
}

/// Computes the writable text area for a canvas with the given zones
///
/// Pure: the same inputs always produce the same rectangle. Sides only
/// retreat from zones classified to that side by the midpoint test; the
/// result is clamped inside the outer margins and never shrinks below the
/// [`ContentRect`] minimums.
pub fn content_rect(
  width_px: i32,
  height_px: i32,
  class: &SizeClass,
  dpi: u32,
  zones: &[ReservedZone],
) -> ContentRect {
  let margin = class.margin_px(dpi);
  let safe = class.safe_px(dpi);
  let mid_x = width_px / 2;
  let mid_y = height_px / 2;

  let mut left = margin;
  let mut right = width_px - margin;
  let mut top = margin;
  let mut bottom = height_px - margin;

  if let Some(nearest) = zones
    .iter()
    .filter(|z| z.bounds.x > mid_x)
    .map(|z| z.bounds.x)
    .min()
  {
    right = nearest - safe;
  }
  if let Some(nearest) = zones
    .iter()
    .filter(|z| z.bounds.max_x() < mid_x)
    .map(|z| z.bounds.max_x())
    .max()
  {
    left = nearest + safe;
  }
  if let Some(nearest) = zones
    .iter()
    .filter(|z| z.bounds.max_y() < mid_y)
    .map(|z| z.bounds.max_y())
    .max()
  {
    top = nearest + safe;
  }
  if let Some(nearest) = zones
    .iter()
    .filter(|z| z.bounds.y > mid_y)
    .map(|z| z.bounds.y)
    .min()
  {
    bottom = nearest - safe;
  }

  ContentRect::from_edges(
    left.max(margin),
    right.min(width_px - margin),
    top.max(margin),
    bottom.min(height_px - margin),
  )
}

// =============================================================================
// Tests
// =============================================================================
