//! Single-pass top-to-bottom content layout
//!
//! [`render_label`] drives a [`LayoutPass`] through a fixed phase order:
//! reserve corner zones, compute the writable area, paint the marks, flow
//! the text blocks, draw the outer border. Phases never run twice and
//! never run out of order; the cursor only moves down.
//!
//! Every section checks the remaining height before drawing a line. A
//! line that does not fit is dropped and the block is recorded as
//! overflowed instead of aborting the render, so the pass always produces
//! a complete image.

use crate::content::{BlockKind, StructuredContent, TextBlock};
use crate::error::RenderError;
use crate::geometry::{cm_to_px, ContentRect, Rgb};
use crate::plan::LabelPlan;
use crate::render::canvas::Canvas;
use crate::render::marks::draw_marks;
use crate::render::size_class::{FontTier, SizeClass, SizeClassKind};
use crate::render::zones::{content_rect, reserve_zones, MarkKind, ReservedZone};
use crate::render::RenderFlags;
use crate::text::fonts::{FontLibrary, FontSlot};
use crate::text::{measure, wrap};

// Secondary text palette
const GRAY_TEXT: Rgb = Rgb::new(0x55, 0x55, 0x55);
const DIM_TEXT: Rgb = Rgb::new(0x44, 0x44, 0x44);
const GREEN_TEXT: Rgb = Rgb::new(0x2e, 0x7d, 0x32);
const ALERT_RED: Rgb = Rgb::new(0xc4, 0x1e, 0x3a);
const BORDER_GRAY: Rgb = Rgb::new(0xcc, 0xcc, 0xcc);

/// Flip to outline reserved zones in magenta on every render
const DEBUG_ZONES: bool = false;

/// What the layout pass did, for reporting
#[derive(Debug, Clone)]
pub struct FlowStats {
  pub size_class: SizeClassKind,
  pub content_rect: ContentRect,
  pub zones: Vec<ReservedZone>,
  /// Blocks that produced at least one line or mark on the canvas
  pub drawn: Vec<BlockKind>,
  /// Blocks dropped or cut short for lack of space
  pub overflowed: Vec<BlockKind>,
  pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
  Empty,
  ZonesReserved,
  AreaComputed,
  Flowing,
  Done,
}

struct LayoutPass<'a> {
  canvas: Canvas,
  content: &'a StructuredContent,
  fonts: &'a FontLibrary,
  class: SizeClass,
  dpi: u32,
  phase: Phase,
  zones: Vec<ReservedZone>,
  rect: ContentRect,
  cursor_y: f32,
  drawn: Vec<BlockKind>,
  overflowed: Vec<BlockKind>,
  warnings: Vec<String>,
}

/// Renders structured content onto a fresh canvas sized from the plan
///
/// Fails only when the plan produces an unusable canvas; layout itself
/// cannot fail. Returns the finished canvas plus flow statistics.
pub fn render_label(
  content: &StructuredContent,
  plan: &LabelPlan,
  flags: RenderFlags,
  fonts: &FontLibrary,
  dpi: u32,
) -> Result<(Canvas, FlowStats), RenderError> {
  let width_px = cm_to_px(plan.width_cm, dpi);
  let height_px = cm_to_px(plan.height_cm, dpi);
  let canvas = Canvas::new(width_px, height_px)?;
  let class = SizeClass::for_label(plan.width_cm, plan.height_cm);

  let mut pass = LayoutPass::new(canvas, content, fonts, class, dpi);
  pass.reserve(flags);
  pass.compute_area();
  pass.paint_marks();
  pass.flow();
  Ok(pass.finish())
}

impl<'a> LayoutPass<'a> {
  fn new(
    canvas: Canvas,
    content: &'a StructuredContent,
    fonts: &'a FontLibrary,
    class: SizeClass,
    dpi: u32,
  ) -> Self {
    Self {
      canvas,
      content,
      fonts,
      class,
      dpi,
      phase: Phase::Empty,
      zones: Vec::new(),
      rect: ContentRect::from_edges(0, 0, 0, 0),
      cursor_y: 0.0,
      drawn: Vec::new(),
      overflowed: Vec::new(),
      warnings: Vec::new(),
    }
  }

  fn advance_phase(&mut self, from: Phase, to: Phase) {
    debug_assert_eq!(self.phase, from, "layout phases ran out of order");
    self.phase = to;
  }

  fn reserve(&mut self, flags: RenderFlags) {
    self.advance_phase(Phase::Empty, Phase::ZonesReserved);
    self.zones = reserve_zones(
      self.canvas.width(),
      self.canvas.height(),
      &self.class,
      flags,
      self.dpi,
    );
  }

  fn compute_area(&mut self) {
    self.advance_phase(Phase::ZonesReserved, Phase::AreaComputed);
    self.rect = content_rect(
      self.canvas.width(),
      self.canvas.height(),
      &self.class,
      self.dpi,
      &self.zones,
    );
    self.cursor_y = self.rect.y_min as f32;
  }

  fn paint_marks(&mut self) {
    debug_assert_eq!(self.phase, Phase::AreaComputed);
    draw_marks(&mut self.canvas, &self.zones, self.fonts, &self.class);
    for zone in &self.zones {
      let kind = match zone.kind {
        MarkKind::Gost => BlockKind::GostMark,
        MarkKind::Recycle => BlockKind::RecycleMark,
        MarkKind::ScanCode => continue,
      };
      if self.content.has(kind) {
        self.drawn.push(kind);
      }
    }
    if DEBUG_ZONES {
      for zone in &self.zones {
        let b = zone.bounds;
        self.canvas.stroke_rect(
          b.x as f32,
          b.y as f32,
          b.width as f32,
          b.height as f32,
          Rgb::new(0xff, 0x00, 0xff),
          1.0,
        );
      }
    }
  }

  fn flow(&mut self) {
    self.advance_phase(Phase::AreaComputed, Phase::Flowing);
    self.flow_title();
    self.flow_net_content();
    self.flow_composition();
    self.flow_nutrition();
    self.flow_party(BlockKind::Manufacturer, "Производитель:");
    self.flow_party(BlockKind::Importer, "Импортер:");
    self.flow_country();
    self.flow_dates();
    self.flow_shelf_life();
    self.flow_storage();
    self.flow_after_opening();
    self.flow_usage();
    self.flow_regulations();
    self.flow_warning();
    self.flow_barcode();
  }

  fn finish(mut self) -> (Canvas, FlowStats) {
    self.advance_phase(Phase::Flowing, Phase::Done);
    let w = self.canvas.width() as f32;
    let h = self.canvas.height() as f32;
    self
      .canvas
      .stroke_rect(0.5, 0.5, w - 1.0, h - 1.0, BORDER_GRAY, 1.0);
    let stats = FlowStats {
      size_class: self.class.kind,
      content_rect: self.rect,
      zones: self.zones,
      drawn: self.drawn,
      overflowed: self.overflowed,
      warnings: self.warnings,
    };
    (self.canvas, stats)
  }

  // ===== Cursor and measuring helpers =====

  fn remaining(&self) -> f32 {
    self.rect.y_max as f32 - self.cursor_y
  }

  fn fits(&self, line_height: f32) -> bool {
    self.cursor_y + line_height <= self.rect.y_max as f32
  }

  fn text_width(&self, text: &str, slot: FontSlot, px: f32) -> f32 {
    measure::measure_width(text, self.fonts.font(slot), px)
  }

  fn line_height(&self, slot: FontSlot, px: f32) -> f32 {
    self.fonts.font(slot).metrics.line_height(px)
  }

  fn wrap(&self, text: &str, slot: FontSlot, px: f32, max_width: f32) -> Vec<String> {
    let font = self.fonts.font(slot);
    wrap::wrap_text(text, max_width, |s| measure::measure_width(s, font, px))
  }

  /// Cuts text to fit the width, appending an ellipsis when it had to cut
  fn ellipsis_fit(&self, text: &str, slot: FontSlot, px: f32, max_width: f32) -> (String, bool) {
    if self.text_width(text, slot, px) <= max_width {
      return (text.to_string(), false);
    }
    let mut kept = text.to_string();
    while kept.pop().is_some() {
      let candidate = format!("{}…", kept.trim_end());
      if self.text_width(&candidate, slot, px) <= max_width {
        return (candidate, true);
      }
    }
    ("…".to_string(), true)
  }

  fn draw_line_at(&mut self, text: &str, x: f32, slot: FontSlot, px: f32, color: Rgb) {
    let font = self.fonts.font(slot);
    self.canvas.draw_text(text, x, self.cursor_y, font, px, color);
  }

  fn draw_centered(&mut self, text: &str, slot: FontSlot, px: f32, color: Rgb) {
    let y = self.cursor_y;
    self.draw_centered_at(text, y, slot, px, color);
  }

  fn draw_centered_at(&mut self, text: &str, y: f32, slot: FontSlot, px: f32, color: Rgb) {
    let width = self.text_width(text, slot, px);
    let x = self.rect.x_min as f32 + (self.rect.width() as f32 - width).max(0.0) / 2.0;
    let font = self.fonts.font(slot);
    self.canvas.draw_text(text, x, y, font, px, color);
  }

  fn record(&mut self, kind: BlockKind, drew_any: bool, clipped: bool) {
    if drew_any {
      self.drawn.push(kind);
    }
    if clipped {
      self.overflowed.push(kind);
      self.warnings.push(format!("{:?} truncated", kind));
    }
  }

  // ===== Font tier ladders =====
  //
  // Tiers are chosen from the height still available when the section
  // starts, so a label that is running out of room degrades to smaller
  // faces instead of dropping whole sections.

  fn title_tier(&self) -> FontTier {
    let rem = self.remaining();
    if rem > 200.0 {
      FontTier::Display
    } else if rem > 150.0 {
      FontTier::Title
    } else {
      FontTier::Large
    }
  }

  fn emphasis_tier(&self) -> FontTier {
    if self.remaining() > 150.0 {
      FontTier::Large
    } else {
      FontTier::Medium
    }
  }

  fn body_tier(&self) -> FontTier {
    if self.remaining() > 150.0 {
      FontTier::Normal
    } else {
      FontTier::Small
    }
  }

  fn detail_tier(&self) -> FontTier {
    if self.remaining() > 150.0 {
      FontTier::Small
    } else {
      FontTier::Micro
    }
  }

  // ===== Sections, in flow order =====

  fn flow_title(&mut self) {
    let Some(block) = self.content.block(BlockKind::Title) else {
      return;
    };
    let px = self.class.font_px(self.title_tier()) * block.size_multiplier;
    let color = block.color_hint.unwrap_or(Rgb::BLACK);
    let line_h = self.line_height(FontSlot::Bold, px);
    let lines = self.wrap(&block.text, FontSlot::Bold, px, self.rect.width() as f32);

    let mut drew = 0;
    let mut clipped = false;
    for line in &lines {
      if !self.fits(line_h) {
        clipped = true;
        break;
      }
      self.draw_centered(line, FontSlot::Bold, px, color);
      self.cursor_y += line_h + 5.0;
      drew += 1;
    }
    self.cursor_y += 5.0;
    self.record(BlockKind::Title, drew > 0, clipped);
  }

  fn flow_net_content(&mut self) {
    let Some(block) = self.content.block(BlockKind::NetContent) else {
      return;
    };
    let px = self.class.font_px(self.emphasis_tier()) * block.size_multiplier;
    let color = block.color_hint.unwrap_or(Rgb::BLACK);
    let line_h = self.line_height(FontSlot::Bold, px);
    if !self.fits(line_h) {
      self.record(BlockKind::NetContent, false, true);
      return;
    }
    let (text, cut) =
      self.ellipsis_fit(&block.text, FontSlot::Bold, px, self.rect.width() as f32);
    self.draw_centered(&text, FontSlot::Bold, px, color);
    self.cursor_y += line_h + 8.0;
    self.record(BlockKind::NetContent, true, cut);
  }

  fn flow_composition(&mut self) {
    let Some(block) = self.content.block(BlockKind::Composition) else {
      return;
    };
    let slot = if block.emphasized {
      FontSlot::Bold
    } else {
      FontSlot::Regular
    };
    let px = self.class.font_px(self.body_tier()) * block.size_multiplier;
    let color = block.color_hint.unwrap_or(Rgb::BLACK);
    let line_h = self.line_height(slot, px);
    let text = format!("Состав: {}", block.text);
    let lines = self.wrap(&text, slot, px, self.rect.width() as f32);

    let mut drew = 0;
    let mut clipped = false;
    for line in &lines {
      if !self.fits(line_h) {
        clipped = true;
        // Signal the cut when even a stub of room is left.
        if self.cursor_y + 15.0 <= self.rect.y_max as f32 {
          self.draw_line_at("...", self.rect.x_min as f32, slot, px, color);
        }
        break;
      }
      self.draw_line_at(line, self.rect.x_min as f32, slot, px, color);
      self.cursor_y += line_h + 3.0;
      drew += 1;
    }
    self.cursor_y += 5.0;
    self.record(BlockKind::Composition, drew > 0, clipped);
  }

  fn flow_nutrition(&mut self) {
    if !self.content.has(BlockKind::Nutrition) && !self.content.has(BlockKind::Energy) {
      return;
    }
    let px = self.class.font_px(self.detail_tier());
    let line_h = self.line_height(FontSlot::Regular, px);

    if let Some(block) = self.content.block(BlockKind::Nutrition) {
      let color = block.color_hint.unwrap_or(DIM_TEXT);
      let text = format!("Пищевая ценность: {}", block.text);
      let lines = self.wrap(&text, FontSlot::Regular, px, self.rect.width() as f32);
      let mut drew = 0;
      let mut clipped = false;
      for line in &lines {
        if !self.fits(line_h) {
          clipped = true;
          break;
        }
        self.draw_line_at(line, self.rect.x_min as f32, FontSlot::Regular, px, color);
        self.cursor_y += line_h + 3.0;
        drew += 1;
      }
      self.record(BlockKind::Nutrition, drew > 0, clipped);
    }

    if let Some(block) = self.content.block(BlockKind::Energy) {
      let color = block.color_hint.unwrap_or(DIM_TEXT);
      if self.fits(line_h) {
        let text = format!("Энергетическая ценность: {}", block.text);
        let (line, cut) = self.ellipsis_fit(&text, FontSlot::Regular, px, self.rect.width() as f32);
        self.draw_line_at(&line, self.rect.x_min as f32, FontSlot::Regular, px, color);
        self.cursor_y += line_h + 3.0;
        self.record(BlockKind::Energy, true, cut);
      } else {
        self.record(BlockKind::Energy, false, true);
      }
    }
    self.cursor_y += 5.0;
  }

  /// Manufacturer and importer share a layout: bold header line, then the
  /// party text indented underneath.
  fn flow_party(&mut self, kind: BlockKind, header: &str) {
    let Some(block) = self.content.block(kind) else {
      return;
    };
    let px = self.class.font_px(self.detail_tier()) * block.size_multiplier;
    let header_h = self.line_height(FontSlot::Bold, px);
    if !self.fits(header_h) {
      self.record(kind, false, true);
      return;
    }
    self.draw_line_at(header, self.rect.x_min as f32, FontSlot::Bold, px, Rgb::BLACK);
    self.cursor_y += header_h + 2.0;

    let line_h = self.line_height(FontSlot::Regular, px);
    let indent_width = (self.rect.width() - 20).max(ContentRect::MIN_WIDTH) as f32;
    let lines = self.wrap(&block.text, FontSlot::Regular, px, indent_width);
    let mut clipped = false;
    for line in &lines {
      if !self.fits(line_h) {
        clipped = true;
        break;
      }
      self.draw_line_at(
        line,
        (self.rect.x_min + 10) as f32,
        FontSlot::Regular,
        px,
        Rgb::BLACK,
      );
      self.cursor_y += line_h + 2.0;
    }
    self.cursor_y += 5.0;
    self.record(kind, true, clipped);
  }

  fn flow_country(&mut self) {
    let country = self.content.block(BlockKind::Country);
    let customs = self.content.block(BlockKind::CustomsUnion);
    let mut parts: Vec<String> = Vec::new();
    if let Some(block) = country {
      parts.push(format!("Страна: {}", block.text));
    }
    if let Some(block) = customs {
      parts.push(block.text.clone());
    }
    if parts.is_empty() {
      return;
    }
    let px = self.class.font_px(self.body_tier());
    let line_h = self.line_height(FontSlot::Regular, px);
    if !self.fits(line_h) {
      if country.is_some() {
        self.record(BlockKind::Country, false, true);
      }
      if customs.is_some() {
        self.record(BlockKind::CustomsUnion, false, true);
      }
      return;
    }
    let text = parts.join(" • ");
    let (line, cut) = self.ellipsis_fit(&text, FontSlot::Regular, px, self.rect.width() as f32);
    self.draw_line_at(&line, self.rect.x_min as f32, FontSlot::Regular, px, Rgb::BLACK);
    self.cursor_y += line_h + 8.0;
    if country.is_some() {
      self.record(BlockKind::Country, true, cut);
    }
    if customs.is_some() {
      self.record(BlockKind::CustomsUnion, true, false);
    }
  }

  /// Manufacture date on the left, expiry right-aligned on the same row;
  /// an expiry too wide for the shared row moves to its own row.
  fn flow_dates(&mut self) {
    let made = self.content.block(BlockKind::ManufactureDate);
    let expiry = self.content.block(BlockKind::Expiry);
    if made.is_none() && expiry.is_none() {
      return;
    }
    let px = self.class.font_px(self.detail_tier());
    let line_h = self.line_height(FontSlot::Regular, px);
    if !self.fits(line_h) {
      if made.is_some() {
        self.record(BlockKind::ManufactureDate, false, true);
      }
      if expiry.is_some() {
        self.record(BlockKind::Expiry, false, true);
      }
      return;
    }

    let mut row_used = false;
    if let Some(block) = made {
      let text = format!("Изготовлен: {}", block.text);
      let (line, cut) = self.ellipsis_fit(&text, FontSlot::Regular, px, self.rect.width() as f32);
      self.draw_line_at(&line, self.rect.x_min as f32, FontSlot::Regular, px, GRAY_TEXT);
      self.record(BlockKind::ManufactureDate, true, cut);
      row_used = true;
    }
    if let Some(block) = expiry {
      let text = format!("Годен до: {}", block.text);
      let width = self.text_width(&text, FontSlot::Regular, px);
      let right_x = self.rect.x_max as f32 - width;
      if right_x >= self.rect.x_min as f32 {
        self.draw_line_at(&text, right_x, FontSlot::Regular, px, Rgb::BLACK);
        self.record(BlockKind::Expiry, true, false);
      } else {
        if row_used {
          self.cursor_y += line_h + 2.0;
        }
        if self.fits(line_h) {
          let (line, cut) =
            self.ellipsis_fit(&text, FontSlot::Regular, px, self.rect.width() as f32);
          self.draw_line_at(&line, self.rect.x_min as f32, FontSlot::Regular, px, Rgb::BLACK);
          self.record(BlockKind::Expiry, true, cut);
        } else {
          self.record(BlockKind::Expiry, false, true);
        }
      }
    }
    self.cursor_y += line_h + 8.0;
  }

  fn flow_shelf_life(&mut self) {
    let Some(block) = self.content.block(BlockKind::ShelfLife) else {
      return;
    };
    let px = self.class.font_px(self.detail_tier());
    let line_h = self.line_height(FontSlot::Regular, px);
    if !self.fits(line_h) {
      self.record(BlockKind::ShelfLife, false, true);
      return;
    }
    let text = format!("Срок годности: {}", block.text);
    let (line, cut) = self.ellipsis_fit(&text, FontSlot::Regular, px, self.rect.width() as f32);
    self.draw_line_at(&line, self.rect.x_min as f32, FontSlot::Regular, px, GRAY_TEXT);
    self.cursor_y += line_h + 8.0;
    self.record(BlockKind::ShelfLife, true, cut);
  }

  fn flow_storage(&mut self) {
    let Some(block) = self.content.block(BlockKind::Storage) else {
      return;
    };
    let px = self.class.font_px(self.detail_tier());
    let line_h = self.line_height(FontSlot::Regular, px);
    let text = format!("Хранение: {}", block.text);
    let lines = self.wrap(&text, FontSlot::Regular, px, self.rect.width() as f32);
    let mut drew = 0;
    let mut clipped = false;
    for line in &lines {
      if !self.fits(line_h) {
        clipped = true;
        break;
      }
      self.draw_line_at(line, self.rect.x_min as f32, FontSlot::Regular, px, GRAY_TEXT);
      self.cursor_y += line_h + 2.0;
      drew += 1;
    }
    self.cursor_y += 5.0;
    self.record(BlockKind::Storage, drew > 0, clipped);
  }

  fn flow_after_opening(&mut self) {
    let Some(block) = self.content.block(BlockKind::AfterOpening) else {
      return;
    };
    let px = self.class.font_px(self.detail_tier());
    let line_h = self.line_height(FontSlot::Regular, px);
    if !self.fits(line_h) {
      self.record(BlockKind::AfterOpening, false, true);
      return;
    }
    let color = block.color_hint.unwrap_or(ALERT_RED);
    let (line, cut) =
      self.ellipsis_fit(&block.text, FontSlot::Regular, px, self.rect.width() as f32);
    self.draw_line_at(&line, self.rect.x_min as f32, FontSlot::Regular, px, color);
    self.cursor_y += line_h + 8.0;
    self.record(BlockKind::AfterOpening, true, cut);
  }

  fn flow_usage(&mut self) {
    let Some(block) = self.content.block(BlockKind::Usage) else {
      return;
    };
    let px = self.class.font_px(self.detail_tier());
    let line_h = self.line_height(FontSlot::Regular, px);
    let text = format!("Применение: {}", block.text);
    let lines = self.wrap(&text, FontSlot::Regular, px, self.rect.width() as f32);
    let mut drew = 0;
    let mut clipped = false;
    for line in &lines {
      if !self.fits(line_h) {
        clipped = true;
        break;
      }
      self.draw_line_at(line, self.rect.x_min as f32, FontSlot::Regular, px, DIM_TEXT);
      self.cursor_y += line_h + 2.0;
      drew += 1;
    }
    self.cursor_y += 5.0;
    self.record(BlockKind::Usage, drew > 0, clipped);
  }

  /// At most two regulation references are printed
  fn flow_regulations(&mut self) {
    let regulations: Vec<&TextBlock> = self.content.blocks_of(BlockKind::Regulation).collect();
    if regulations.is_empty() {
      return;
    }
    let px = self.class.font_px(self.detail_tier());
    let line_h = self.line_height(FontSlot::Regular, px);
    let mut drew = 0;
    let mut clipped = regulations.len() > 2;
    for block in regulations.iter().take(2) {
      if !self.fits(line_h) {
        clipped = true;
        break;
      }
      let (line, cut) =
        self.ellipsis_fit(&block.text, FontSlot::Regular, px, self.rect.width() as f32);
      if cut {
        clipped = true;
      }
      self.draw_line_at(&line, self.rect.x_min as f32, FontSlot::Regular, px, GREEN_TEXT);
      self.cursor_y += line_h + 2.0;
      drew += 1;
    }
    self.cursor_y += 5.0;
    self.record(BlockKind::Regulation, drew > 0, clipped);
  }

  /// Only the highest-priority warning is printed in full
  fn flow_warning(&mut self) {
    let warnings: Vec<&TextBlock> = self.content.blocks_of(BlockKind::Warning).collect();
    let Some(block) = warnings.first() else {
      return;
    };
    let px = self.class.font_px(self.detail_tier()) * block.size_multiplier;
    let line_h = self.line_height(FontSlot::Bold, px);
    if !self.fits(line_h) {
      self.record(BlockKind::Warning, false, true);
      return;
    }
    let color = block.color_hint.unwrap_or(ALERT_RED);
    let text = format!("⚠ {}", block.text);
    let (line, cut) = self.ellipsis_fit(&text, FontSlot::Bold, px, self.rect.width() as f32);
    self.draw_line_at(&line, self.rect.x_min as f32, FontSlot::Bold, px, color);
    self.cursor_y += line_h + 8.0;
    self.record(BlockKind::Warning, true, cut || warnings.len() > 1);
  }

  /// The scan code caption sits at a fixed offset above the bottom edge,
  /// independent of the cursor.
  fn flow_barcode(&mut self) {
    let Some(block) = self.content.block(BlockKind::Barcode) else {
      return;
    };
    let y = self.rect.y_max as f32 - 25.0;
    if y < self.rect.y_min as f32 {
      self.record(BlockKind::Barcode, false, true);
      return;
    }
    let px = self.class.font_px(FontTier::Small);
    let text = format!("Штрихкод: {}", block.text);
    let (line, cut) = self.ellipsis_fit(&text, FontSlot::Regular, px, self.rect.width() as f32);
    self.draw_centered_at(&line, y, FontSlot::Regular, px, Rgb::BLACK);
    self.record(BlockKind::Barcode, true, cut);
  }
}

// =============================================================================
// Tests
// =============================================================================
