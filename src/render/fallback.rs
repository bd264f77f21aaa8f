//! Minimal fallback rendering
//!
//! When the main layout pass cannot run (unusable plan dimensions, font
//! trouble) the engine still has to ship a label. The fallback draws the
//! handful of legally required fields at fixed positions on a low-dpi
//! canvas, clamped to a minimum size so the canvas itself is always
//! creatable. It reads raw attributes, not structured content, so it has
//! no dependency on the stages that may have failed.

use crate::attrs::{get_str, AttributeMap};
use crate::error::RenderError;
use crate::geometry::{cm_to_px, Rgb};
use crate::render::canvas::Canvas;
use crate::text::fonts::{FontLibrary, FontSlot};

const FALLBACK_DPI: u32 = 150;
const MIN_WIDTH_PX: i32 = 240;
const MIN_HEIGHT_PX: i32 = 160;
const EDGE_PAD: f32 = 15.0;
const BORDER_GRAY: Rgb = Rgb::new(0xcc, 0xcc, 0xcc);

fn clip(value: &str, max_chars: usize) -> String {
  value.chars().take(max_chars).collect()
}

/// Renders the bare-minimum label directly from raw attributes
///
/// Only fails if the canvas allocation itself fails; no combination of
/// attribute values can make it error.
pub fn render_fallback(
  attributes: &AttributeMap,
  width_cm: f32,
  height_cm: f32,
  fonts: &FontLibrary,
) -> Result<Canvas, RenderError> {
  let width = cm_to_px(width_cm, FALLBACK_DPI).max(MIN_WIDTH_PX);
  let height = cm_to_px(height_cm, FALLBACK_DPI).max(MIN_HEIGHT_PX);
  let mut canvas = Canvas::new(width, height)?;
  let mut y = EDGE_PAD;

  let title = get_str(attributes, "product_full_name")
    .or_else(|| get_str(attributes, "product_name"))
    .map(|name| clip(name, 60))
    .unwrap_or_else(|| "Товар".to_string());
  canvas.draw_text(&title, EDGE_PAD, y, &fonts.bold, 16.0, Rgb::BLACK);
  y += 30.0;

  if let Some(weight) = get_str(attributes, "net_weight") {
    let line = format!("Масса нетто: {}", weight);
    canvas.draw_text(&line, EDGE_PAD, y, &fonts.regular, 11.0, Rgb::BLACK);
    y += 20.0;
  } else if let Some(volume) = get_str(attributes, "volume") {
    let line = format!("Объем: {}", volume);
    canvas.draw_text(&line, EDGE_PAD, y, &fonts.regular, 11.0, Rgb::BLACK);
    y += 20.0;
  }
  if let Some(name) = get_str(attributes, "manufacturer_full")
    .or_else(|| get_str(attributes, "manufacturer"))
  {
    let line = format!("Производитель: {}", clip(name, 60));
    canvas.draw_text(&line, EDGE_PAD, y, &fonts.regular, 9.0, Rgb::BLACK);
    y += 18.0;
  }
  if let Some(name) = get_str(attributes, "importer_full")
    .or_else(|| get_str(attributes, "importer"))
  {
    let line = format!("Импортер: {}", clip(name, 60));
    canvas.draw_text(&line, EDGE_PAD, y, &fonts.regular, 9.0, Rgb::BLACK);
    y += 18.0;
  }
  if let Some(country) = get_str(attributes, "country_of_origin") {
    let line = format!("Страна: {}", country);
    canvas.draw_text(&line, EDGE_PAD, y, &fonts.regular, 9.0, Rgb::BLACK);
    y += 18.0;
  }
  if let Some(expiry) = get_str(attributes, "expiry_date") {
    let line = format!("Годен до: {}", expiry);
    canvas.draw_text(&line, EDGE_PAD, y, &fonts.regular, 9.0, Rgb::BLACK);
  }

  let (w, h) = (canvas.width() as f32, canvas.height() as f32);
  canvas.stroke_rect(0.5, 0.5, w - 1.0, h - 1.0, BORDER_GRAY, 1.0);
  Ok(canvas)
}

// =============================================================================
// Tests
// =============================================================================
