use criterion::{black_box, criterion_group, criterion_main, Criterion};
use labelrender::attrs::{AttributeMap, AttributeValue};
use labelrender::plan::{PackageGeometry, PackageKind};
use labelrender::LabelEngine;

fn attribute_map(pairs: &[(&str, &str)]) -> AttributeMap {
  pairs
    .iter()
    .map(|(k, v)| (k.to_string(), AttributeValue::from(*v)))
    .collect()
}

fn juice_attributes() -> AttributeMap {
  let mut map = attribute_map(&[
    ("product_name", "Сок яблочный осветленный"),
    ("country_of_origin", "Россия"),
    ("volume", "1 л"),
    ("ingredients", "яблочный сок концентрированный, вода питьевая"),
    ("manufacturer", "ООО «Сады Придонья»"),
    ("manufacturer_address", "Россия, Волгоградская обл."),
    ("expiry_date", "12.08.2027"),
    ("storage_conditions", "при температуре от 0 до 25 °C"),
    ("barcode", "4600682406458"),
  ]);
  map.insert("requires_gost".to_string(), AttributeValue::Bool(true));
  map.insert("is_recyclable".to_string(), AttributeValue::Bool(true));
  map
}

fn bench_full_label(c: &mut Criterion) {
  let engine = LabelEngine::new().expect("engine");
  let attributes = juice_attributes();
  let geometry = PackageGeometry {
    wall_width_cm: 12.0,
    wall_height_cm: 4.0,
    min_margin_cm: 0.5,
    package_type: PackageKind::JuiceBox,
  };
  c.bench_function("generate_full_juice_label", |b| {
    b.iter(|| {
      black_box(
        engine
          .generate(black_box(&attributes), &geometry)
          .expect("generate"),
      )
    })
  });
}

fn bench_minimal_label(c: &mut Criterion) {
  let engine = LabelEngine::new().expect("engine");
  let attributes = attribute_map(&[("product_name", "Карандаш чернографитный")]);
  let geometry = PackageGeometry::default();
  c.bench_function("generate_minimal_label", |b| {
    b.iter(|| {
      black_box(
        engine
          .generate(black_box(&attributes), &geometry)
          .expect("generate"),
      )
    })
  });
}

fn bench_text_heavy_label(c: &mut Criterion) {
  let engine = LabelEngine::new().expect("engine");
  let mut attributes = juice_attributes();
  attributes.insert(
    "ingredients".to_string(),
    AttributeValue::Str("яблочный сок, вишнёвый сок, виноградный сок, вода ".repeat(40)),
  );
  let geometry = PackageGeometry {
    wall_width_cm: 15.0,
    wall_height_cm: 8.0,
    min_margin_cm: 0.5,
    package_type: PackageKind::Cosmetics,
  };
  c.bench_function("generate_text_heavy_label", |b| {
    b.iter(|| {
      black_box(
        engine
          .generate(black_box(&attributes), &geometry)
          .expect("generate"),
      )
    })
  });
}

criterion_group!(
  render_benches,
  bench_full_label,
  bench_minimal_label,
  bench_text_heavy_label
);
criterion_main!(render_benches);
