//! Label size planning: text volume plus package geometry to a print plan
//!
//! Everything here works in centimeters on the physical package wall. The
//! output [`LabelPlan`] says how big the label is, where it sits on the
//! package, and where the scan code goes; rasterization happens later at a
//! caller-chosen DPI.
//!
//! The height estimate is an empirical step function of total character
//! count. It is deliberately coarse: the renderer re-measures everything in
//! pixels and truncates honestly, so the plan only has to be in the right
//! neighborhood.

use serde::{Deserialize, Serialize};

use crate::content::StructuredContent;
use crate::geometry::round_cm;

/// Package type, used to pick aspect ratio and mounting position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageKind {
  JuiceBox,
  Bottle,
  Cosmetics,
  Electronics,
  Default,
}

impl PackageKind {
  /// Parses the wire tag; unknown tags map to [`PackageKind::Default`]
  pub fn parse(tag: &str) -> Self {
    match tag {
      "juice_box" => PackageKind::JuiceBox,
      "bottle" => PackageKind::Bottle,
      "cosmetics" => PackageKind::Cosmetics,
      "electronics" => PackageKind::Electronics,
      _ => PackageKind::Default,
    }
  }
}

/// Physical geometry of the package wall the label mounts on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackageGeometry {
  pub wall_width_cm: f32,
  pub wall_height_cm: f32,
  /// Minimum clearance between label edge and wall edge
  pub min_margin_cm: f32,
  pub package_type: PackageKind,
}

impl Default for PackageGeometry {
  fn default() -> Self {
    Self {
      wall_width_cm: 10.0,
      wall_height_cm: 6.0,
      min_margin_cm: 0.5,
      package_type: PackageKind::Default,
    }
  }
}

/// Acceptable width:height band for a package type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectRatios {
  pub min: f32,
  pub max: f32,
  pub preferred: f32,
}

/// Standard aspect ratio bands per package type
pub fn aspect_ratios(kind: PackageKind) -> AspectRatios {
  match kind {
    PackageKind::JuiceBox => AspectRatios {
      min: 2.5,
      max: 3.5,
      preferred: 3.0,
    },
    PackageKind::Cosmetics => AspectRatios {
      min: 2.0,
      max: 2.8,
      preferred: 2.5,
    },
    PackageKind::Electronics => AspectRatios {
      min: 1.8,
      max: 2.5,
      preferred: 2.2,
    },
    PackageKind::Bottle | PackageKind::Default => AspectRatios {
      min: 2.0,
      max: 3.0,
      preferred: 2.5,
    },
  }
}

/// Where the label mounts on the package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorPosition {
  CenterMiddle,
  TopCenter,
  BottomRight,
}

/// Horizontal scan code anchor within the label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalAnchor {
  Center,
  Right,
}

/// Vertical scan code anchor within the label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalAnchor {
  Top,
  Center,
  Bottom,
}

/// Scan code placement inside the label
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScanCodePlacement {
  pub horizontal: HorizontalAnchor,
  pub vertical: VerticalAnchor,
  pub margin_x_cm: f32,
  pub margin_y_cm: f32,
}

/// The planned label: physical size, mounting anchor, scan code placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LabelPlan {
  /// Label width, rounded to millimeter precision
  pub width_cm: f32,
  /// Label height, rounded to millimeter precision
  pub height_cm: f32,
  pub anchor: AnchorPosition,
  pub scan_code: ScanCodePlacement,
  pub scan_code_size_cm: f32,
  /// Rough estimate of the text area width; informational only
  pub content_width_cm: f32,
  /// Rough estimate of the text area height; informational only
  pub content_height_cm: f32,
}

/// Estimated text height in cm for a given character count
///
/// # Examples
///
/// ```
/// use labelrender::plan::estimate_text_height_cm;
///
/// assert_eq!(estimate_text_height_cm(40), 1.5);
/// assert_eq!(estimate_text_height_cm(120), 2.5);
/// assert_eq!(estimate_text_height_cm(350), 3.5);
/// ```
pub fn estimate_text_height_cm(text_volume: usize) -> f32 {
  if text_volume < 50 {
    1.5
  } else if text_volume < 100 {
    2.0
  } else if text_volume < 200 {
    2.5
  } else if text_volume < 300 {
    3.0
  } else {
    3.5
  }
}

/// Plans the label size and placement for the given content and package
///
/// Juice boxes get the fixed 3.5 x 3.0 cm side label regardless of text
/// volume; everything else derives width from the estimated height via the
/// package type's preferred aspect ratio. The wall's available area caps
/// both dimensions, so a degenerate wall produces a degenerate plan, and
/// the renderer's fallback path is what turns that into a usable image.
pub fn plan_label(
  content: &StructuredContent,
  geometry: &PackageGeometry,
  scan_code_size_cm: f32,
) -> LabelPlan {
  let available_width = geometry.wall_width_cm - 2.0 * geometry.min_margin_cm;
  let available_height = geometry.wall_height_cm - 2.0 * geometry.min_margin_cm;

  let text_volume = content.text_volume();
  let min_height = scan_code_size_cm + 1.0;
  let text_height = estimate_text_height_cm(text_volume);
  let total_height_needed = min_height.max(text_height + 0.5);

  let mut height = total_height_needed.min(available_height);
  let width = if geometry.package_type == PackageKind::JuiceBox {
    height = 3.0;
    3.5
  } else {
    height * aspect_ratios(geometry.package_type).preferred
  };
  let width = width.min(available_width);

  LabelPlan {
    width_cm: round_cm(width),
    height_cm: round_cm(height),
    anchor: anchor_for(geometry.package_type),
    scan_code: scan_code_placement(width),
    scan_code_size_cm: round_cm(scan_code_size_cm),
    content_width_cm: round_cm(width - 1.0),
    content_height_cm: round_cm(height - scan_code_size_cm - 0.5),
  }
}

fn anchor_for(kind: PackageKind) -> AnchorPosition {
  match kind {
    PackageKind::JuiceBox => AnchorPosition::CenterMiddle,
    PackageKind::Bottle => AnchorPosition::TopCenter,
    _ => AnchorPosition::BottomRight,
  }
}

/// Narrow labels put the scan code up top; wider ones push it right and
/// eventually to the bottom-right corner
fn scan_code_placement(label_width: f32) -> ScanCodePlacement {
  if label_width < 4.0 {
    ScanCodePlacement {
      horizontal: HorizontalAnchor::Center,
      vertical: VerticalAnchor::Top,
      margin_x_cm: 0.2,
      margin_y_cm: 0.2,
    }
  } else if label_width < 6.0 {
    ScanCodePlacement {
      horizontal: HorizontalAnchor::Right,
      vertical: VerticalAnchor::Center,
      margin_x_cm: 0.2,
      margin_y_cm: 0.2,
    }
  } else {
    ScanCodePlacement {
      horizontal: HorizontalAnchor::Right,
      vertical: VerticalAnchor::Bottom,
      margin_x_cm: 0.3,
      margin_y_cm: 0.3,
    }
  }
}

// =============================================================================
// Tests
// =============================================================================
