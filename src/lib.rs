pub mod api;
pub mod attrs;
pub mod content;
pub mod error;
pub mod geometry;
pub mod image_output;
pub mod plan;
pub mod render;
pub mod report;
pub mod text;

pub use api::{EngineConfig, LabelEngine, LabelOutput};
pub use attrs::{AttributeMap, AttributeValue};
pub use error::{Error, Result};
pub use geometry::{ContentRect, PxPoint, PxRect, Rgb};
pub use plan::{LabelPlan, PackageGeometry, PackageKind};
pub use report::{ComplianceReport, LayoutReport};

// Re-export the raster type callers receive
pub use tiny_skia::Pixmap;
