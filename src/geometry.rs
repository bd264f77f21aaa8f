//! Core geometry types for label planning and painting
//!
//! This module provides the geometric primitives used throughout the
//! engine. Planning works in centimeters (the physical size of the label
//! on the package wall); rendering works in device pixels at a fixed DPI.
//!
//! # Unit Conversion
//!
//! A centimeter measure becomes pixels via `cm * 0.393701 * dpi`, truncated
//! toward zero. Truncation (rather than rounding) keeps every derived
//! coordinate inside the canvas.
//!
//! # Coordinate System
//!
//! The coordinate system has its origin at the top-left corner:
//! - Positive X extends to the right
//! - Positive Y extends downward

use std::fmt;

use serde::Serialize;

/// Centimeters per inch, inverted (1 / 2.54)
pub const CM_TO_INCH: f32 = 0.393701;

/// Converts a physical measure in centimeters to device pixels
///
/// The result is truncated toward zero, matching the integer pixel grid
/// used by the renderer.
///
/// # Examples
///
/// ```
/// use labelrender::geometry::cm_to_px;
///
/// assert_eq!(cm_to_px(3.5, 300), 413);
/// assert_eq!(cm_to_px(0.1, 300), 11);
/// assert_eq!(cm_to_px(0.0, 300), 0);
/// ```
pub fn cm_to_px(cm: f32, dpi: u32) -> i32 {
  (cm * CM_TO_INCH * dpi as f32) as i32
}

/// Rounds a centimeter measure to one decimal place
///
/// Planned label dimensions are reported at millimeter precision.
///
/// # Examples
///
/// ```
/// use labelrender::geometry::round_cm;
///
/// assert_eq!(round_cm(3.4499), 3.4);
/// assert_eq!(round_cm(2.55), 2.6);
/// ```
pub fn round_cm(value: f32) -> f32 {
  (value * 10.0).round() / 10.0
}

/// A 2D point in device pixel space
///
/// The origin (0, 0) is at the top-left corner of the canvas.
///
/// # Examples
///
/// ```
/// use labelrender::PxPoint;
///
/// let p = PxPoint::new(10, 20);
/// assert_eq!(p.x, 10);
/// assert_eq!(p.y, 20);
/// assert_eq!(PxPoint::ZERO, PxPoint::new(0, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PxPoint {
  /// X coordinate (horizontal position, increases to the right)
  pub x: i32,
  /// Y coordinate (vertical position, increases downward)
  pub y: i32,
}

impl PxPoint {
  /// The zero point at the origin (0, 0)
  pub const ZERO: Self = Self { x: 0, y: 0 };

  /// Creates a new point at the given coordinates
  pub const fn new(x: i32, y: i32) -> Self {
    Self { x, y }
  }
}

impl fmt::Display for PxPoint {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "({}, {})", self.x, self.y)
  }
}

/// An axis-aligned rectangle in device pixel space
///
/// Stored as origin plus size. The rectangle covers pixel columns
/// `x..x + width` and rows `y..y + height`.
///
/// # Examples
///
/// ```
/// use labelrender::PxRect;
///
/// let r = PxRect::new(10, 20, 100, 50);
/// assert_eq!(r.max_x(), 110);
/// assert_eq!(r.max_y(), 70);
/// assert!(r.contains(10, 20));
/// assert!(!r.contains(110, 20));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PxRect {
  /// X coordinate of the left edge
  pub x: i32,
  /// Y coordinate of the top edge
  pub y: i32,
  /// Width in pixels
  pub width: i32,
  /// Height in pixels
  pub height: i32,
}

impl PxRect {
  /// Creates a new rectangle from its top-left corner and size
  pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
    Self {
      x,
      y,
      width,
      height,
    }
  }

  /// X coordinate of the right edge (exclusive)
  pub fn max_x(&self) -> i32 {
    self.x + self.width
  }

  /// Y coordinate of the bottom edge (exclusive)
  pub fn max_y(&self) -> i32 {
    self.y + self.height
  }

  /// Returns true if the point lies inside the rectangle
  pub fn contains(&self, x: i32, y: i32) -> bool {
    x >= self.x && x < self.max_x() && y >= self.y && y < self.max_y()
  }

  /// Returns true if the two rectangles share any area
  ///
  /// # Examples
  ///
  /// ```
  /// use labelrender::PxRect;
  ///
  /// let a = PxRect::new(0, 0, 10, 10);
  /// let b = PxRect::new(5, 5, 10, 10);
  /// let c = PxRect::new(20, 20, 5, 5);
  /// assert!(a.intersects(&b));
  /// assert!(!a.intersects(&c));
  /// ```
  pub fn intersects(&self, other: &PxRect) -> bool {
    self.x < other.max_x()
      && other.x < self.max_x()
      && self.y < other.max_y()
      && other.y < self.max_y()
  }

  /// Grows the rectangle by `amount` pixels on every side
  pub fn inflate(&self, amount: i32) -> PxRect {
    PxRect {
      x: self.x - amount,
      y: self.y - amount,
      width: self.width + 2 * amount,
      height: self.height + 2 * amount,
    }
  }
}

impl fmt::Display for PxRect {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{}x{} at ({}, {})",
      self.width, self.height, self.x, self.y
    )
  }
}

/// The writable region of the canvas after reserved zones are carved out
///
/// Text flows top to bottom inside this rectangle. The bounds are kept as
/// explicit edges because the flow pass addresses them individually
/// (centering against `x_min..x_max`, truncating against `y_max`).
///
/// Minimum usable dimensions are enforced at construction: the rectangle
/// never degenerates below 10 pixels of width or 20 pixels of height, no
/// matter how aggressively the reserved zones shrink it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentRect {
  /// Left edge (inclusive)
  pub x_min: i32,
  /// Right edge (exclusive)
  pub x_max: i32,
  /// Top edge (inclusive)
  pub y_min: i32,
  /// Bottom edge (exclusive)
  pub y_max: i32,
}

impl ContentRect {
  /// Minimum content width in pixels
  pub const MIN_WIDTH: i32 = 10;
  /// Minimum content height in pixels
  pub const MIN_HEIGHT: i32 = 20;

  /// Builds a content rectangle from candidate edges, enforcing minimums
  ///
  /// The left and top edges stay where the caller put them; the right and
  /// bottom edges are pushed out as needed so the rectangle keeps its
  /// minimum usable size.
  ///
  /// # Examples
  ///
  /// ```
  /// use labelrender::ContentRect;
  ///
  /// let r = ContentRect::from_edges(50, 52, 30, 31);
  /// assert_eq!(r.width(), ContentRect::MIN_WIDTH);
  /// assert_eq!(r.height(), ContentRect::MIN_HEIGHT);
  /// ```
  pub fn from_edges(x_min: i32, x_max: i32, y_min: i32, y_max: i32) -> Self {
    let width = (x_max - x_min).max(Self::MIN_WIDTH);
    let height = (y_max - y_min).max(Self::MIN_HEIGHT);
    Self {
      x_min,
      x_max: x_min + width,
      y_min,
      y_max: y_min + height,
    }
  }

  /// Width in pixels
  pub fn width(&self) -> i32 {
    self.x_max - self.x_min
  }

  /// Height in pixels
  pub fn height(&self) -> i32 {
    self.y_max - self.y_min
  }
}

impl fmt::Display for ContentRect {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "x {}..{}, y {}..{}",
      self.x_min, self.x_max, self.y_min, self.y_max
    )
  }
}

/// An opaque RGB color
///
/// The canvas is always fully opaque; alpha is fixed at 255 when painting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
  pub r: u8,
  pub g: u8,
  pub b: u8,
}

impl Rgb {
  pub const BLACK: Self = Self::new(0, 0, 0);
  pub const WHITE: Self = Self::new(255, 255, 255);

  /// Creates a color from its components
  pub const fn new(r: u8, g: u8, b: u8) -> Self {
    Self { r, g, b }
  }
}

// =============================================================================
// Tests
// =============================================================================
