//! Generate a printable label from a product attribute JSON file.
//!
//! The input is a flat JSON object of product attributes plus an optional
//! `product_dimensions` object describing the package wall. The image is
//! written to the output path and the layout report lands next to it as
//! `<stem>_report.json`.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use labelrender::attrs::{get_str, AttributeMap, AttributeValue};
use labelrender::image_output::write_pixmap;
use labelrender::plan::{PackageGeometry, PackageKind};
use labelrender::{EngineConfig, LabelEngine, Result};
use serde_json::Value;

#[derive(Parser, Debug)]
#[command(
  name = "label_gen",
  version,
  about = "Generate compliance label images from product attribute JSON"
)]
struct Cli {
  /// Product attribute JSON file
  #[arg(long)]
  input: PathBuf,

  /// Output image path (.png or .jpg); the report is written next to it
  #[arg(long, default_value = "output/label.png")]
  output: PathBuf,

  /// Package template override: auto, juice_box, bottle, cosmetics, electronics
  #[arg(long, default_value = "auto")]
  template: String,

  /// Raster resolution in dots per inch
  #[arg(long, default_value_t = 300)]
  dpi: u32,

  /// Print a layout summary and warnings to stderr
  #[arg(long)]
  verbose: bool,
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  match run(&cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("error: {}", err);
      ExitCode::FAILURE
    }
  }
}

fn run(cli: &Cli) -> Result<()> {
  let raw = fs::read_to_string(&cli.input)?;
  let json: Value = serde_json::from_str(&raw)?;
  let attributes = attributes_from_json(&json);
  let mut geometry = geometry_from_json(&json, &attributes);
  if cli.template != "auto" {
    geometry.package_type = PackageKind::parse(&cli.template);
  }

  let engine = LabelEngine::with_config(EngineConfig::new().with_dpi(cli.dpi))?;
  let output = engine.generate(&attributes, &geometry)?;

  if let Some(parent) = cli.output.parent() {
    if !parent.as_os_str().is_empty() {
      fs::create_dir_all(parent)?;
    }
  }
  write_pixmap(&output.pixmap, &cli.output)?;
  fs::write(report_path_for(&cli.output), output.report.to_json()?)?;

  if cli.verbose {
    let report = &output.report;
    eprintln!(
      "label {}x{} cm ({}x{} px), {} blocks drawn, {} overflowed{}",
      report.plan.width_cm,
      report.plan.height_cm,
      report.canvas_width_px,
      report.canvas_height_px,
      report.drawn_blocks.len(),
      report.overflowed_blocks.len(),
      if report.used_fallback {
        ", fallback layout"
      } else {
        ""
      },
    );
    for warning in &report.warnings {
      eprintln!("warning: {}", warning);
    }
  }
  println!("{}", cli.output.display());
  Ok(())
}

/// Flattens a JSON object into the attribute map the engine consumes.
/// Numbers become strings ("750" and "750 мл" follow the same path),
/// nulls and nested objects are dropped.
fn attributes_from_json(json: &Value) -> AttributeMap {
  let mut map = AttributeMap::new();
  let Some(object) = json.as_object() else {
    return map;
  };
  for (key, value) in object {
    if key == "product_dimensions" {
      continue;
    }
    match value {
      Value::String(s) => {
        map.insert(key.clone(), AttributeValue::Str(s.clone()));
      }
      Value::Bool(b) => {
        map.insert(key.clone(), AttributeValue::Bool(*b));
      }
      Value::Number(n) => {
        map.insert(key.clone(), AttributeValue::Str(n.to_string()));
      }
      Value::Array(items) => {
        let list: Vec<String> = items
          .iter()
          .filter_map(|item| match item {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
          })
          .collect();
        map.insert(key.clone(), AttributeValue::List(list));
      }
      _ => {}
    }
  }
  map
}

fn geometry_from_json(json: &Value, attributes: &AttributeMap) -> PackageGeometry {
  let fallback = PackageGeometry::default();
  if let Some(dims) = json.get("product_dimensions").and_then(Value::as_object) {
    let number = |key: &str, default: f32| {
      dims
        .get(key)
        .and_then(Value::as_f64)
        .map(|v| v as f32)
        .unwrap_or(default)
    };
    return PackageGeometry {
      wall_width_cm: number("wall_width", fallback.wall_width_cm),
      wall_height_cm: number("wall_height", fallback.wall_height_cm),
      min_margin_cm: number("min_label_margin", fallback.min_margin_cm),
      package_type: dims
        .get("package_type")
        .and_then(Value::as_str)
        .map(PackageKind::parse)
        .unwrap_or(fallback.package_type),
    };
  }

  // Juice cartons ship on a known side panel when no dimensions are given.
  let hints = [
    get_str(attributes, "product_type").unwrap_or(""),
    get_str(attributes, "product_name").unwrap_or(""),
  ];
  let juice = hints.iter().any(|hint| {
    let lower = hint.to_lowercase();
    lower.contains("сок") || lower.contains("juice")
  });
  if juice {
    PackageGeometry {
      wall_width_cm: 12.0,
      wall_height_cm: 4.0,
      min_margin_cm: 0.5,
      package_type: PackageKind::JuiceBox,
    }
  } else {
    fallback
  }
}

fn report_path_for(output: &Path) -> PathBuf {
  let stem = output
    .file_stem()
    .and_then(|s| s.to_str())
    .unwrap_or("label");
  output.with_file_name(format!("{}_report.json", stem))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_attributes_from_json_value_kinds() {
    let json: Value = serde_json::from_str(
      r#"{
        "product_name": "Сок",
        "requires_gost": true,
        "net_weight": 750,
        "warnings": ["Содержит сахар", 18],
        "nothing": null,
        "product_dimensions": {"wall_width": 12}
      }"#,
    )
    .unwrap();
    let map = attributes_from_json(&json);
    assert_eq!(get_str(&map, "product_name"), Some("Сок"));
    assert_eq!(get_str(&map, "net_weight"), Some("750"));
    assert!(labelrender::attrs::get_bool(&map, "requires_gost"));
    assert_eq!(
      labelrender::attrs::get_list(&map, "warnings"),
      vec!["Содержит сахар", "18"]
    );
    assert!(!map.contains_key("nothing"));
    assert!(!map.contains_key("product_dimensions"));
  }

  #[test]
  fn test_geometry_from_dimensions_object() {
    let json: Value = serde_json::from_str(
      r#"{"product_dimensions": {
        "wall_width": 8.5,
        "wall_height": 5.0,
        "min_label_margin": 0.4,
        "package_type": "bottle"
      }}"#,
    )
    .unwrap();
    let geometry = geometry_from_json(&json, &AttributeMap::new());
    assert!((geometry.wall_width_cm - 8.5).abs() < 1e-6);
    assert!((geometry.wall_height_cm - 5.0).abs() < 1e-6);
    assert_eq!(geometry.package_type, PackageKind::Bottle);
  }

  #[test]
  fn test_juice_panel_inferred_from_name() {
    let json: Value = serde_json::from_str(r#"{"product_name": "Сок яблочный"}"#).unwrap();
    let map = attributes_from_json(&json);
    let geometry = geometry_from_json(&json, &map);
    assert_eq!(geometry.package_type, PackageKind::JuiceBox);
    assert!((geometry.wall_width_cm - 12.0).abs() < 1e-6);
  }

  #[test]
  fn test_report_path_next_to_image() {
    assert_eq!(
      report_path_for(Path::new("out/label.png")),
      PathBuf::from("out/label_report.json")
    );
    assert_eq!(
      report_path_for(Path::new("photo.jpg")),
      PathBuf::from("photo_report.json")
    );
  }

  #[test]
  fn test_run_writes_image_and_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("product.json");
    fs::write(
      &input,
      r#"{"product_name": "Сок яблочный", "country_of_origin": "Россия"}"#,
    )
    .unwrap();
    let cli = Cli {
      input,
      output: dir.path().join("label.png"),
      template: "auto".to_string(),
      dpi: 300,
      verbose: false,
    };
    run(&cli).unwrap();

    let image = fs::read(&cli.output).unwrap();
    assert_eq!(&image[..8], b"\x89PNG\r\n\x1a\n");

    let raw = fs::read_to_string(dir.path().join("label_report.json")).unwrap();
    let report: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(report["used_fallback"], Value::Bool(false));
    assert_eq!(report["plan"]["width_cm"], Value::from(3.5));
  }
}
