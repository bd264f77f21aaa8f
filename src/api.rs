//! Public API for the label engine
//!
//! This module wraps the generation pipeline in one ergonomic entry
//! point. It owns the loaded fonts and the engine configuration, so a
//! single instance can stamp out any number of labels.
//!
//! # Example
//!
//! ```
//! use labelrender::api::{LabelEngine, PackageGeometry};
//! use labelrender::attrs::AttributeMap;
//!
//! let engine = LabelEngine::new()?;
//!
//! let mut attributes = AttributeMap::new();
//! attributes.insert("product_name".into(), "Сок яблочный".into());
//! attributes.insert("net_weight".into(), "1 л".into());
//!
//! let output = engine.generate(&attributes, &PackageGeometry::default())?;
//! assert!(output.report.compliance.has_title);
//! # Ok::<(), labelrender::Error>(())
//! ```
//!
//! # Architecture
//!
//! ```text
//! AttributeMap → Structure → Plan → Reserve zones → Flow text → Pixmap + Report
//! ```
//!
//! Each stage is pure given its inputs; only canvas allocation can fail.
//! When the main pass fails the engine renders the minimal fallback label
//! instead, so callers always receive an image for valid attribute maps.

use crate::attrs::AttributeMap;
use crate::content::structure;
use crate::error::Result;
use crate::image_output::{encode_pixmap, OutputFormat};
use crate::plan::plan_label;
use crate::render::{render_fallback, render_label, RenderFlags};
use crate::report::LayoutReport;
use crate::text::fonts::FontLibrary;

pub use crate::plan::{LabelPlan, PackageGeometry};

// Re-export Pixmap from tiny-skia for public use
pub use tiny_skia::Pixmap;

/// Configuration for [`LabelEngine`]
#[derive(Debug, Clone)]
pub struct EngineConfig {
  /// Raster resolution in dots per inch
  pub dpi: u32,
  /// Side length reserved for the scan code square, in cm
  pub scan_code_size_cm: f32,
  /// Query the host font database instead of the bundled faces
  ///
  /// Bundled faces keep output byte-identical across machines; system
  /// fonts match what office printers around the warehouse produce.
  pub use_system_fonts: bool,
}

impl Default for EngineConfig {
  fn default() -> Self {
    Self {
      dpi: 300,
      scan_code_size_cm: 2.0,
      use_system_fonts: false,
    }
  }
}

impl EngineConfig {
  pub fn new() -> Self {
    Self::default()
  }

  /// Sets the raster resolution
  pub fn with_dpi(mut self, dpi: u32) -> Self {
    self.dpi = dpi;
    self
  }

  /// Sets the reserved scan code size
  pub fn with_scan_code_size(mut self, size_cm: f32) -> Self {
    self.scan_code_size_cm = size_cm;
    self
  }

  /// Opts into system font lookup
  pub fn with_system_fonts(mut self) -> Self {
    self.use_system_fonts = true;
    self
  }
}

/// A rendered label: the raster plus the machine-readable account of it
#[derive(Debug)]
pub struct LabelOutput {
  pub pixmap: Pixmap,
  pub report: LayoutReport,
}

impl LabelOutput {
  /// Encodes the raster as PNG bytes
  pub fn to_png(&self) -> Result<Vec<u8>> {
    encode_pixmap(&self.pixmap, OutputFormat::Png)
  }

  /// Encodes the raster as JPEG bytes at the given quality (0-100)
  pub fn to_jpeg(&self, quality: u8) -> Result<Vec<u8>> {
    encode_pixmap(&self.pixmap, OutputFormat::Jpeg(quality))
  }
}

/// Main entry point: turns product attributes into printable labels
///
/// Holds loaded fonts and configuration; [`generate`](Self::generate) can
/// be called repeatedly and concurrently (`&self`) for different
/// products.
#[derive(Debug, Clone)]
pub struct LabelEngine {
  fonts: FontLibrary,
  config: EngineConfig,
}

impl LabelEngine {
  /// Creates an engine with default configuration and bundled fonts
  ///
  /// # Errors
  ///
  /// Fails only if the bundled font data cannot be parsed.
  pub fn new() -> Result<Self> {
    Self::with_config(EngineConfig::default())
  }

  /// Creates an engine with custom configuration
  pub fn with_config(config: EngineConfig) -> Result<Self> {
    let fonts = if config.use_system_fonts {
      FontLibrary::with_system_fonts()?
    } else {
      FontLibrary::bundled()?
    };
    Ok(Self { fonts, config })
  }

  pub fn config(&self) -> &EngineConfig {
    &self.config
  }

  pub fn fonts(&self) -> &FontLibrary {
    &self.fonts
  }

  /// Generates a label image and report for one product
  ///
  /// Runs the full pipeline. If the layout pass cannot produce a canvas
  /// (for example a degenerate package geometry planned a zero-size
  /// label) the minimal fallback label is rendered instead and the
  /// report says so; the error is not surfaced.
  pub fn generate(
    &self,
    attributes: &AttributeMap,
    geometry: &PackageGeometry,
  ) -> Result<LabelOutput> {
    let content = structure(attributes);
    let plan = plan_label(&content, geometry, self.config.scan_code_size_cm);
    let flags = RenderFlags::from_content(&content);

    match render_label(&content, &plan, flags, &self.fonts, self.config.dpi) {
      Ok((canvas, stats)) => {
        let report = LayoutReport::from_flow(
          &plan,
          &content,
          flags,
          &stats,
          canvas.width(),
          canvas.height(),
        );
        Ok(LabelOutput {
          pixmap: canvas.into_pixmap(),
          report,
        })
      }
      Err(err) => {
        let canvas = render_fallback(attributes, plan.width_cm, plan.height_cm, &self.fonts)?;
        let report = LayoutReport::from_fallback(
          &plan,
          &content,
          flags,
          canvas.width(),
          canvas.height(),
          err.to_string(),
        );
        Ok(LabelOutput {
          pixmap: canvas.into_pixmap(),
          report,
        })
      }
    }
  }

  /// Generates a label and encodes it as PNG in one step
  pub fn generate_png(
    &self,
    attributes: &AttributeMap,
    geometry: &PackageGeometry,
  ) -> Result<(Vec<u8>, LayoutReport)> {
    let output = self.generate(attributes, geometry)?;
    let bytes = output.to_png()?;
    Ok((bytes, output.report))
  }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
  use super::*;
  use crate::attrs::AttributeValue;
  use crate::content::BlockKind;
  use crate::geometry::cm_to_px;
  use crate::plan::PackageKind;

  fn attrs(pairs: &[(&str, &str)]) -> AttributeMap {
    pairs
      .iter()
      .map(|(k, v)| (k.to_string(), AttributeValue::from(*v)))
      .collect()
  }

  #[test]
  fn test_engine_new() {
    assert!(LabelEngine::new().is_ok());
  }

  #[test]
  fn test_config_methods() {
    let config = EngineConfig::new().with_dpi(150).with_scan_code_size(1.5);
    assert_eq!(config.dpi, 150);
    assert!((config.scan_code_size_cm - 1.5).abs() < f32::EPSILON);
    assert!(!config.use_system_fonts);
  }

  #[test]
  fn test_generate_end_to_end() {
    let engine = LabelEngine::new().unwrap();
    let map = attrs(&[
      ("product_name", "Сок яблочный осветленный"),
      ("net_weight", "1 л"),
      ("country_of_origin", "Россия"),
      ("manufacturer", "ООО Сады Кубани"),
      ("barcode", "4601234567890"),
    ]);
    let output = engine.generate(&map, &PackageGeometry::default()).unwrap();
    assert!(!output.report.used_fallback);
    assert!(output.report.drawn_blocks.contains(&BlockKind::Title));
    assert!(output.report.drawn_blocks.contains(&BlockKind::Barcode));
    assert!(output.report.compliance.has_title);
    assert!(output.report.compliance.has_country);
    // Pixmap matches the planned size at the configured dpi.
    let plan = output.report.plan;
    assert_eq!(
      output.pixmap.width() as i32,
      cm_to_px(plan.width_cm, 300)
    );
    assert_eq!(
      output.pixmap.height() as i32,
      cm_to_px(plan.height_cm, 300)
    );
  }

  #[test]
  fn test_generate_falls_back_on_degenerate_geometry() {
    let engine = LabelEngine::new().unwrap();
    let geometry = PackageGeometry {
      wall_width_cm: 0.5,
      wall_height_cm: 0.5,
      min_margin_cm: 0.5,
      package_type: PackageKind::Default,
    };
    let output = engine
      .generate(&attrs(&[("product_name", "Сок")]), &geometry)
      .unwrap();
    assert!(output.report.used_fallback);
    // Fallback floor dimensions.
    assert_eq!(output.pixmap.width(), 240);
    assert_eq!(output.pixmap.height(), 160);
    assert!(output.report.warnings[0].contains("fallback"));
  }

  #[test]
  fn test_generate_png_signature() {
    let engine = LabelEngine::new().unwrap();
    let (bytes, report) = engine
      .generate_png(&attrs(&[("product_name", "Сок")]), &PackageGeometry::default())
      .unwrap();
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    assert!(!report.used_fallback);
  }

  #[test]
  fn test_custom_dpi_scales_canvas() {
    let engine = LabelEngine::with_config(EngineConfig::new().with_dpi(150)).unwrap();
    let output = engine
      .generate(&attrs(&[("product_name", "Сок")]), &PackageGeometry::default())
      .unwrap();
    let plan = output.report.plan;
    assert_eq!(
      output.pixmap.width() as i32,
      cm_to_px(plan.width_cm, 150)
    );
  }
}
