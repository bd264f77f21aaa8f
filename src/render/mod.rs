//! Rasterization: canvas, size classes, reserved zones, marks, text flow
//!
//! Rendering runs as a fixed sequence over a [`canvas::Canvas`]:
//!
//! 1. Pick a [`size_class::SizeClass`] from the planned label dimensions
//! 2. Reserve corner zones for marks and the scan code ([`zones`])
//! 3. Shrink the writable area away from those zones ([`zones::content_rect`])
//! 4. Paint the corner marks ([`marks`])
//! 5. Flow text top to bottom with per-block truncation ([`flow`])
//!
//! When any of this fails (degenerate plan, unusable canvas), the engine
//! drops to [`fallback::render_fallback`], which always produces an image.

pub mod canvas;
pub mod fallback;
pub mod flow;
pub mod marks;
pub mod size_class;
pub mod zones;

pub use canvas::Canvas;
pub use fallback::render_fallback;
pub use flow::{render_label, FlowStats};
pub use size_class::{FontTier, SizeClass, SizeClassKind};
pub use zones::{content_rect, reserve_zones, MarkKind, ReservedZone};

use crate::content::{IconKind, StructuredContent};

/// Which corner marks the label must carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderFlags {
  /// Draw the conformance mark in the top-right corner
  pub needs_compliance_mark: bool,
  /// Draw the recycling mark in the bottom-left corner
  pub needs_recycle_mark: bool,
  /// Draw the scan code placeholder in the bottom-right corner
  pub needs_scan_code: bool,
}

impl RenderFlags {
  /// Derives the flags from the structured content's required icon set
  pub fn from_content(content: &StructuredContent) -> Self {
    Self {
      needs_compliance_mark: content.required_icons.contains(&IconKind::Gost),
      needs_recycle_mark: content.required_icons.contains(&IconKind::Recycle),
      needs_scan_code: content.required_icons.contains(&IconKind::ScanCode),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::attrs::AttributeMap;
  use crate::content::structure;

  #[test]
  fn test_flags_from_content() {
    let mut map = AttributeMap::new();
    map.insert("requires_gost".to_string(), true.into());
    map.insert("requires_qr".to_string(), true.into());
    let flags = RenderFlags::from_content(&structure(&map));
    assert!(flags.needs_compliance_mark);
    assert!(!flags.needs_recycle_mark);
    assert!(flags.needs_scan_code);
  }

  #[test]
  fn test_flags_default_off() {
    let flags = RenderFlags::default();
    assert!(!flags.needs_compliance_mark);
    assert!(!flags.needs_recycle_mark);
    assert!(!flags.needs_scan_code);
  }
}
