//! Content structuring: raw product attributes to prioritized text blocks
//!
//! This is the first stage of the pipeline. It takes the flat
//! [`AttributeMap`](crate::AttributeMap) supplied by the caller and turns it
//! into a [`StructuredContent`]: a list of typed [`TextBlock`]s sorted by
//! regulatory priority, plus per-block font size hints.
//!
//! Blocks carry display-ready values. Embedded field labels that upstream
//! systems sometimes leave in the data ("Масса нетто: 250 г" inside the
//! `net_weight` value) are stripped here, so downstream stages never have to
//! re-sanitize. Section captions ("Производитель:", "Состав:") are owned by
//! the renderer, with one exception: the net content line picks its caption
//! from the source field (weight wins over volume), so that text is finalized
//! here.
//!
//! # Priorities
//!
//! Priority 1 is the most important. The mandatory customs fields occupy
//! 1..=10; supplemental fields (nutrition, dates, storage, usage) follow at
//! 11..=20 and are the first to be dropped when space runs out.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::attrs::{self, AttributeMap};
use crate::geometry::Rgb;

/// Base font size hint in points, before per-block multipliers
pub const BASE_FONT_SIZE_PT: f32 = 8.0;

/// Accent red used for warning text
const WARNING_RED: Rgb = Rgb::new(0xc4, 0x1e, 0x3a);

/// The kind of a text block, in regulatory priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
  Title,
  Country,
  Importer,
  Manufacturer,
  Composition,
  NetContent,
  Warning,
  GostMark,
  RecycleMark,
  Expiry,
  Nutrition,
  Energy,
  ManufactureDate,
  ShelfLife,
  Storage,
  AfterOpening,
  Usage,
  Regulation,
  Barcode,
  CustomsUnion,
}

impl BlockKind {
  /// Regulatory priority, 1 = highest
  pub fn priority(self) -> u8 {
    match self {
      BlockKind::Title => 1,
      BlockKind::Country => 2,
      BlockKind::Importer => 3,
      BlockKind::Manufacturer => 4,
      BlockKind::Composition => 5,
      BlockKind::NetContent => 6,
      BlockKind::Warning => 7,
      BlockKind::GostMark => 8,
      BlockKind::RecycleMark => 9,
      BlockKind::Expiry => 10,
      BlockKind::Nutrition => 11,
      BlockKind::Energy => 12,
      BlockKind::ManufactureDate => 13,
      BlockKind::ShelfLife => 14,
      BlockKind::Storage => 15,
      BlockKind::AfterOpening => 16,
      BlockKind::Usage => 17,
      BlockKind::Regulation => 18,
      BlockKind::Barcode => 19,
      BlockKind::CustomsUnion => 20,
    }
  }

  /// True for blocks rendered as corner marks rather than flowed text
  pub fn is_mark(self) -> bool {
    matches!(self, BlockKind::GostMark | BlockKind::RecycleMark)
  }
}

/// A single structured text block with its style hints
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
  pub kind: BlockKind,
  pub text: String,
  /// Copy of `kind.priority()`, kept on the block so sorted lists are
  /// self-describing
  pub priority: u8,
  /// Render in the bold face
  pub emphasized: bool,
  /// Multiplier applied to [`BASE_FONT_SIZE_PT`] for the size hint
  pub size_multiplier: f32,
  /// Advisory color; the renderer's palette takes precedence
  pub color_hint: Option<Rgb>,
}

impl TextBlock {
  fn new(kind: BlockKind, text: String) -> Self {
    Self {
      kind,
      text,
      priority: kind.priority(),
      emphasized: false,
      size_multiplier: 1.0,
      color_hint: None,
    }
  }
}

/// Product category detected from the product name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
  Food,
  Cosmetics,
  Electronics,
  Default,
}

const FOOD_KEYWORDS: [&str; 5] = ["сок", "juice", "молоко", "вода", "напиток"];
const COSMETICS_KEYWORDS: [&str; 4] = ["крем", "шампунь", "гель", "косметик"];
const ELECTRONICS_KEYWORDS: [&str; 4] = ["телефон", "ноутбук", "charger", "кабель"];

/// Detects the product category by keyword scan over the lowercased name
///
/// The first matching list wins; food is checked before cosmetics before
/// electronics.
///
/// # Examples
///
/// ```
/// use labelrender::content::{detect_category, ProductCategory};
///
/// assert_eq!(detect_category("Сок яблочный"), ProductCategory::Food);
/// assert_eq!(detect_category("Крем для рук"), ProductCategory::Cosmetics);
/// assert_eq!(detect_category("USB charger"), ProductCategory::Electronics);
/// assert_eq!(detect_category("Стол"), ProductCategory::Default);
/// ```
pub fn detect_category(product_name: &str) -> ProductCategory {
  let lower = product_name.to_lowercase();
  if FOOD_KEYWORDS.iter().any(|k| lower.contains(k)) {
    ProductCategory::Food
  } else if COSMETICS_KEYWORDS.iter().any(|k| lower.contains(k)) {
    ProductCategory::Cosmetics
  } else if ELECTRONICS_KEYWORDS.iter().any(|k| lower.contains(k)) {
    ProductCategory::Electronics
  } else {
    ProductCategory::Default
  }
}

/// Per-category formatting rule for one block kind
#[derive(Debug, Clone, Copy)]
struct StyleRule {
  caps: bool,
  bold: bool,
  size_multiplier: f32,
  color: Option<Rgb>,
}

const fn rule(caps: bool, bold: bool, size_multiplier: f32, color: Option<Rgb>) -> StyleRule {
  StyleRule {
    caps,
    bold,
    size_multiplier,
    color,
  }
}

/// The immutable rule tables, one lookup per (category, kind) pair
fn style_rule(category: ProductCategory, kind: BlockKind) -> Option<StyleRule> {
  match (category, kind) {
    (ProductCategory::Food, BlockKind::Title) => Some(rule(true, true, 1.2, None)),
    (ProductCategory::Food, BlockKind::Composition) => Some(rule(false, false, 0.9, None)),
    (ProductCategory::Food, BlockKind::Warning) => {
      Some(rule(true, true, 1.0, Some(WARNING_RED)))
    }
    (ProductCategory::Cosmetics, BlockKind::Title) => Some(rule(true, true, 1.2, None)),
    (ProductCategory::Cosmetics, BlockKind::NetContent) => {
      Some(rule(false, true, 1.1, None))
    }
    (ProductCategory::Electronics, BlockKind::Title) => Some(rule(true, true, 1.3, None)),
    _ => None,
  }
}

/// Translates a country name into its Russian uppercase form
///
/// Unknown countries are passed through uppercased.
pub fn translate_country(country: &str) -> String {
  match country.to_lowercase().as_str() {
    "china" => "КИТАЙ".to_string(),
    "germany" => "ГЕРМАНИЯ".to_string(),
    "usa" => "США".to_string(),
    "italy" => "ИТАЛИЯ".to_string(),
    "france" => "ФРАНЦИЯ".to_string(),
    "spain" => "ИСПАНИЯ".to_string(),
    _ => country.to_uppercase(),
  }
}

/// Removes any embedded field labels from a raw attribute value
fn strip_labels(value: &str, labels: &[&str]) -> String {
  let mut out = value.to_string();
  for label in labels {
    out = out.replace(label, "");
  }
  out.trim().to_string()
}

/// A graphical mark the renderer must reserve a corner zone for
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IconKind {
  Gost,
  Recycle,
  ScanCode,
}

/// The fully structured content of one label
#[derive(Debug, Clone)]
pub struct StructuredContent {
  pub category: ProductCategory,
  /// Blocks sorted by ascending priority
  pub blocks: Vec<TextBlock>,
  /// Suggested point size per block kind, `round(base * multiplier)`
  pub font_size_hints: BTreeMap<BlockKind, u32>,
  /// Corner marks requested by the boolean attribute flags
  pub required_icons: BTreeSet<IconKind>,
}

impl StructuredContent {
  /// First block of the given kind, if any
  pub fn block(&self, kind: BlockKind) -> Option<&TextBlock> {
    self.blocks.iter().find(|b| b.kind == kind)
  }

  /// All blocks of the given kind, in priority order
  pub fn blocks_of(&self, kind: BlockKind) -> impl Iterator<Item = &TextBlock> {
    self.blocks.iter().filter(move |b| b.kind == kind)
  }

  /// True if at least one block of the kind exists
  pub fn has(&self, kind: BlockKind) -> bool {
    self.block(kind).is_some()
  }

  /// Total text volume in characters, mark captions excluded
  ///
  /// Marks render as corner glyphs, so their caption text takes no room
  /// in the flowed area and must not inflate the size estimate.
  pub fn text_volume(&self) -> usize {
    self
      .blocks
      .iter()
      .filter(|b| !b.kind.is_mark())
      .map(|b| b.text.chars().count())
      .sum()
  }
}

/// Structures a raw attribute map into prioritized, styled text blocks
///
/// This function is total: any map produces a valid (possibly empty)
/// result. Unknown keys are ignored; empty values count as absent.
pub fn structure(attributes: &AttributeMap) -> StructuredContent {
  let title_source = attrs::get_str(attributes, "product_full_name")
    .or_else(|| attrs::get_str(attributes, "product_name"));
  let category = detect_category(attrs::get_str(attributes, "product_name").unwrap_or(""));

  let mut blocks = Vec::new();
  extract_blocks(attributes, title_source, &mut blocks);
  for block in &mut blocks {
    apply_style(category, block);
  }
  // Extraction already runs in priority order; the stable sort holds the
  // ordering invariant even if the extraction order changes.
  blocks.sort_by_key(|b| b.priority);

  let font_size_hints = font_hints(&blocks);
  let required_icons = required_icons(attributes);

  StructuredContent {
    category,
    blocks,
    font_size_hints,
    required_icons,
  }
}

fn required_icons(attributes: &AttributeMap) -> BTreeSet<IconKind> {
  let mut icons = BTreeSet::new();
  if attrs::get_bool(attributes, "requires_gost") {
    icons.insert(IconKind::Gost);
  }
  if attrs::get_bool(attributes, "is_recyclable") {
    icons.insert(IconKind::Recycle);
  }
  if attrs::get_bool(attributes, "requires_qr") {
    icons.insert(IconKind::ScanCode);
  }
  icons
}

fn extract_blocks(
  attributes: &AttributeMap,
  title_source: Option<&str>,
  blocks: &mut Vec<TextBlock>,
) {
  if let Some(title) = title_source {
    blocks.push(TextBlock::new(BlockKind::Title, title.to_string()));
  }

  if let Some(raw) = attrs::get_str(attributes, "country_of_origin") {
    let clean = strip_labels(raw, &["Страна происхождения:", "Страна:"]);
    if !clean.is_empty() {
      let text = format!("{} ({})", clean, translate_country(&clean));
      blocks.push(TextBlock::new(BlockKind::Country, text));
    }
  }

  if let Some(text) = party_text(attributes, "importer_full", "importer", "importer_address") {
    blocks.push(TextBlock::new(BlockKind::Importer, text));
  }

  if let Some(text) = party_text(
    attributes,
    "manufacturer_full",
    "manufacturer",
    "manufacturer_address",
  ) {
    blocks.push(TextBlock::new(BlockKind::Manufacturer, text));
  }

  if let Some(composition) = attrs::get_str(attributes, "ingredients")
    .or_else(|| attrs::get_str(attributes, "composition"))
  {
    blocks.push(TextBlock::new(
      BlockKind::Composition,
      composition.to_string(),
    ));
  }

  // Weight wins over volume; the caption is data-dependent, so the final
  // line is assembled here rather than in the renderer.
  if let Some(raw) = attrs::get_str(attributes, "net_weight") {
    let net = strip_labels(raw, &["Масса нетто:", "Нетто:"]);
    blocks.push(TextBlock::new(
      BlockKind::NetContent,
      format!("Масса нетто: {}", net),
    ));
  } else if let Some(volume) = attrs::get_str(attributes, "volume") {
    blocks.push(TextBlock::new(
      BlockKind::NetContent,
      format!("Объем: {}", volume),
    ));
  }

  for warning in attrs::get_list(attributes, "warnings") {
    blocks.push(TextBlock::new(BlockKind::Warning, warning.to_uppercase()));
  }

  if attrs::get_bool(attributes, "requires_gost") {
    blocks.push(TextBlock::new(
      BlockKind::GostMark,
      "✔ Соответствует ГОСТ".to_string(),
    ));
  }

  if attrs::get_bool(attributes, "is_recyclable") {
    blocks.push(TextBlock::new(
      BlockKind::RecycleMark,
      "♻ Перерабатываемая упаковка".to_string(),
    ));
  }

  if let Some(raw) = attrs::get_str(attributes, "expiry_date") {
    let clean = strip_labels(raw, &["Годен до:", "Дата окончания срока годности:"]);
    blocks.push(TextBlock::new(BlockKind::Expiry, clean));
  }

  if let Some(nutrition) = attrs::get_str(attributes, "nutrition") {
    let truncated: String = nutrition.chars().take(100).collect();
    blocks.push(TextBlock::new(BlockKind::Nutrition, truncated));
  }

  let energy_value = attrs::get_str(attributes, "energy_value");
  let energy_kj = attrs::get_str(attributes, "energy_value_kj");
  match (energy_kj, energy_value) {
    (Some(kj), Some(kcal)) => {
      blocks.push(TextBlock::new(BlockKind::Energy, format!("{} / {}", kj, kcal)));
    }
    (None, Some(kcal)) => {
      blocks.push(TextBlock::new(BlockKind::Energy, kcal.to_string()));
    }
    _ => {}
  }

  if let Some(raw) = attrs::get_str(attributes, "manufacture_date") {
    let clean = strip_labels(raw, &["Дата изготовления:"]);
    blocks.push(TextBlock::new(BlockKind::ManufactureDate, clean));
  }

  if let Some(shelf_life) = attrs::get_str(attributes, "shelf_life") {
    blocks.push(TextBlock::new(BlockKind::ShelfLife, shelf_life.to_string()));
  }

  if let Some(storage) = attrs::get_str(attributes, "storage_conditions") {
    blocks.push(TextBlock::new(BlockKind::Storage, storage.to_string()));
  }

  if let Some(after) = attrs::get_str(attributes, "after_opening") {
    blocks.push(TextBlock::new(BlockKind::AfterOpening, after.to_string()));
  }

  if let Some(usage) = attrs::get_str(attributes, "usage_instructions") {
    blocks.push(TextBlock::new(BlockKind::Usage, usage.to_string()));
  }

  for regulation in attrs::get_list(attributes, "technical_regulations") {
    blocks.push(TextBlock::new(BlockKind::Regulation, regulation.to_string()));
  }

  if let Some(raw) = attrs::get_str(attributes, "barcode")
    .or_else(|| attrs::get_str(attributes, "ean13"))
  {
    let clean = strip_labels(raw, &["Штрихкод продукта:", "Штрихкод:"]);
    blocks.push(TextBlock::new(BlockKind::Barcode, clean));
  }

  if attrs::get_bool(attributes, "customs_union")
    || attrs::get_str(attributes, "customs_union").is_some()
  {
    blocks.push(TextBlock::new(
      BlockKind::CustomsUnion,
      "Таможенный союз".to_string(),
    ));
  }
}

/// Resolves a legal party (manufacturer or importer) to its display text
///
/// A `_full` value wins outright; otherwise the short name is used, with
/// the separate address appended when present.
fn party_text(
  attributes: &AttributeMap,
  full_key: &str,
  name_key: &str,
  address_key: &str,
) -> Option<String> {
  if let Some(full) = attrs::get_str(attributes, full_key) {
    return Some(full.to_string());
  }
  let name = attrs::get_str(attributes, name_key)?;
  match attrs::get_str(attributes, address_key) {
    Some(address) => Some(format!("{}, {}", name, address)),
    None => Some(name.to_string()),
  }
}

fn apply_style(category: ProductCategory, block: &mut TextBlock) {
  if let Some(rule) = style_rule(category, block.kind) {
    if rule.caps {
      block.text = block.text.to_uppercase();
    }
    block.emphasized = rule.bold;
    block.size_multiplier = rule.size_multiplier;
    block.color_hint = rule.color;
  }
}

fn font_hints(blocks: &[TextBlock]) -> BTreeMap<BlockKind, u32> {
  let mut hints = BTreeMap::new();
  for block in blocks {
    let size = if block.kind.is_mark() {
      BASE_FONT_SIZE_PT
    } else {
      BASE_FONT_SIZE_PT * block.size_multiplier
    };
    hints.insert(block.kind, size.round() as u32);
  }
  hints
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
  use super::*;
  use crate::attrs::AttributeMap;

  fn map(pairs: &[(&str, &str)]) -> AttributeMap {
    pairs
      .iter()
      .map(|(k, v)| (k.to_string(), (*v).into()))
      .collect()
  }

  #[test]
  fn test_category_first_match_wins() {
    // "гель для душа с соком алоэ" contains both food and cosmetics
    // keywords; the food list is scanned first.
    assert_eq!(
      detect_category("Гель для душа с соком алоэ"),
      ProductCategory::Food
    );
  }

  #[test]
  fn test_category_case_insensitive() {
    assert_eq!(detect_category("ШАМПУНЬ детский"), ProductCategory::Cosmetics);
    assert_eq!(detect_category("Ноутбук 15\""), ProductCategory::Electronics);
  }

  #[test]
  fn test_structure_is_total_on_empty_map() {
    let content = structure(&AttributeMap::new());
    assert!(content.blocks.is_empty());
    assert!(content.font_size_hints.is_empty());
    assert!(content.required_icons.is_empty());
    assert_eq!(content.category, ProductCategory::Default);
  }

  #[test]
  fn test_priorities_non_decreasing() {
    let content = structure(&map(&[
      ("product_name", "Сок яблочный"),
      ("country_of_origin", "Germany"),
      ("importer", "ООО Ромашка"),
      ("manufacturer", "ACME GmbH"),
      ("ingredients", "яблоки, вода"),
      ("net_weight", "250 г"),
      ("expiry_date", "12.2026"),
      ("shelf_life", "12 месяцев"),
    ]));
    let priorities: Vec<u8> = content.blocks.iter().map(|b| b.priority).collect();
    let mut sorted = priorities.clone();
    sorted.sort_unstable();
    assert_eq!(priorities, sorted);
    assert_eq!(content.blocks[0].kind, BlockKind::Title);
  }

  #[test]
  fn test_country_gets_translation() {
    let content = structure(&map(&[("country_of_origin", "Germany")]));
    let country = content.block(BlockKind::Country).unwrap();
    assert_eq!(country.text, "Germany (ГЕРМАНИЯ)");
  }

  #[test]
  fn test_country_label_stripped() {
    let content = structure(&map(&[("country_of_origin", "Страна: Китай")]));
    let country = content.block(BlockKind::Country).unwrap();
    assert_eq!(country.text, "Китай (КИТАЙ)");
  }

  #[test]
  fn test_unknown_country_uppercased() {
    assert_eq!(translate_country("Узбекистан"), "УЗБЕКИСТАН");
    assert_eq!(translate_country("france"), "ФРАНЦИЯ");
  }

  #[test]
  fn test_net_content_weight_wins_over_volume() {
    let content = structure(&map(&[
      ("net_weight", "Масса нетто: 250 г"),
      ("volume", "1 л"),
    ]));
    let net = content.block(BlockKind::NetContent).unwrap();
    assert_eq!(net.text, "Масса нетто: 250 г");
  }

  #[test]
  fn test_net_content_volume_alone() {
    let content = structure(&map(&[("volume", "200 мл")]));
    let net = content.block(BlockKind::NetContent).unwrap();
    assert_eq!(net.text, "Объем: 200 мл");
  }

  #[test]
  fn test_food_title_styled() {
    let content = structure(&map(&[("product_name", "Сок яблочный")]));
    let title = content.block(BlockKind::Title).unwrap();
    assert_eq!(title.text, "СОК ЯБЛОЧНЫЙ");
    assert!(title.emphasized);
    assert_eq!(title.size_multiplier, 1.2);
  }

  #[test]
  fn test_electronics_title_multiplier() {
    let content = structure(&map(&[("product_name", "Кабель USB-C")]));
    let title = content.block(BlockKind::Title).unwrap();
    assert_eq!(title.size_multiplier, 1.3);
    assert_eq!(*content.font_size_hints.get(&BlockKind::Title).unwrap(), 10);
  }

  #[test]
  fn test_food_composition_hint_shrinks() {
    let content = structure(&map(&[
      ("product_name", "Сок"),
      ("ingredients", "яблоки"),
    ]));
    // round(8 * 0.9) = 7
    assert_eq!(
      *content.font_size_hints.get(&BlockKind::Composition).unwrap(),
      7
    );
  }

  #[test]
  fn test_warnings_uppercased_and_red() {
    let mut attributes = map(&[("product_name", "Вода минеральная")]);
    attributes.insert(
      "warnings".to_string(),
      vec!["Не замораживать".to_string(), "Беречь от солнца".to_string()].into(),
    );
    let content = structure(&attributes);
    let warnings: Vec<&TextBlock> = content.blocks_of(BlockKind::Warning).collect();
    assert_eq!(warnings.len(), 2);
    assert_eq!(warnings[0].text, "НЕ ЗАМОРАЖИВАТЬ");
    assert_eq!(warnings[0].color_hint, Some(Rgb::new(0xc4, 0x1e, 0x3a)));
    assert!(warnings[0].emphasized);
  }

  #[test]
  fn test_mark_blocks_from_flags() {
    let mut attributes = AttributeMap::new();
    attributes.insert("requires_gost".to_string(), true.into());
    attributes.insert("is_recyclable".to_string(), true.into());
    let content = structure(&attributes);
    assert!(content.has(BlockKind::GostMark));
    assert!(content.has(BlockKind::RecycleMark));
    assert!(content.block(BlockKind::GostMark).unwrap().kind.is_mark());
    assert_eq!(*content.font_size_hints.get(&BlockKind::GostMark).unwrap(), 8);
    // Mark captions take no flowed space.
    assert_eq!(content.text_volume(), 0);
  }

  #[test]
  fn test_required_icon_set_from_flags() {
    let mut attributes = AttributeMap::new();
    attributes.insert("requires_gost".to_string(), true.into());
    attributes.insert("requires_qr".to_string(), true.into());
    attributes.insert("is_recyclable".to_string(), false.into());
    let content = structure(&attributes);
    assert!(content.required_icons.contains(&IconKind::Gost));
    assert!(content.required_icons.contains(&IconKind::ScanCode));
    assert!(!content.required_icons.contains(&IconKind::Recycle));
    // The scan code is a zone, not a text block.
    assert!(!content.has(BlockKind::Barcode));
  }

  #[test]
  fn test_expiry_label_stripped() {
    let content = structure(&map(&[("expiry_date", "Годен до: 31.12.2026")]));
    assert_eq!(content.block(BlockKind::Expiry).unwrap().text, "31.12.2026");
  }

  #[test]
  fn test_manufacturer_address_appended() {
    let content = structure(&map(&[
      ("manufacturer", "ACME GmbH"),
      ("manufacturer_address", "Берлин, Германия"),
    ]));
    assert_eq!(
      content.block(BlockKind::Manufacturer).unwrap().text,
      "ACME GmbH, Берлин, Германия"
    );
  }

  #[test]
  fn test_manufacturer_full_wins() {
    let content = structure(&map(&[
      ("manufacturer_full", "ACME GmbH, Берлин"),
      ("manufacturer", "ACME"),
      ("manufacturer_address", "игнорируется"),
    ]));
    assert_eq!(
      content.block(BlockKind::Manufacturer).unwrap().text,
      "ACME GmbH, Берлин"
    );
  }

  #[test]
  fn test_nutrition_truncated_to_100_chars() {
    let long = "а".repeat(150);
    let mut attributes = AttributeMap::new();
    attributes.insert("nutrition".to_string(), long.into());
    let content = structure(&attributes);
    let nutrition = content.block(BlockKind::Nutrition).unwrap();
    assert_eq!(nutrition.text.chars().count(), 100);
  }

  #[test]
  fn test_energy_combines_kj_and_kcal() {
    let content = structure(&map(&[
      ("energy_value_kj", "190 кДж"),
      ("energy_value", "45 ккал"),
    ]));
    assert_eq!(
      content.block(BlockKind::Energy).unwrap().text,
      "190 кДж / 45 ккал"
    );
  }

  #[test]
  fn test_customs_union_from_bool() {
    let mut attributes = AttributeMap::new();
    attributes.insert("customs_union".to_string(), true.into());
    let content = structure(&attributes);
    assert_eq!(
      content.block(BlockKind::CustomsUnion).unwrap().text,
      "Таможенный союз"
    );
  }

  #[test]
  fn test_barcode_ean13_alias() {
    let content = structure(&map(&[("ean13", "Штрихкод: 4600000000000")]));
    assert_eq!(
      content.block(BlockKind::Barcode).unwrap().text,
      "4600000000000"
    );
  }

  #[test]
  fn test_text_volume_counts_chars_not_bytes() {
    let content = structure(&map(&[("product_name", "Сок")]));
    // Cyrillic is two bytes per char; volume must count 3.
    assert_eq!(content.text_volume(), 3);
  }
}
