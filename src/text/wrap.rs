//! Greedy word wrapping with hyphenated hard splits
//!
//! The wrapper is a pure function over a measuring closure, which keeps it
//! independent of the font stack: unit tests drive it with a fake metric,
//! the renderer passes a closure over [`super::measure_width`].
//!
//! Words are packed greedily. A word that cannot fit on any line by itself
//! is split character by character against a slightly narrower limit, and
//! every part except the last gets a trailing hyphen. Nothing is ever
//! dropped: every character of the input appears in the output.

/// Width reserve for the hyphen appended to split parts, in pixels
pub const HYPHEN_SLACK: f32 = 10.0;

/// Wraps `text` into lines no wider than `max_width`
///
/// `measure` returns the rendered width of a candidate string in pixels.
/// Whitespace runs collapse to single spaces.
///
/// # Examples
///
/// ```
/// use labelrender::text::wrap_text;
///
/// // Fake metric: every char is 6px wide.
/// let measure = |s: &str| s.chars().count() as f32 * 6.0;
/// let lines = wrap_text("состав сок яблочный", 72.0, measure);
/// assert_eq!(lines, vec!["состав сок", "яблочный"]);
/// ```
pub fn wrap_text<F>(text: &str, max_width: f32, measure: F) -> Vec<String>
where
  F: Fn(&str) -> f32,
{
  let mut lines = Vec::new();
  let mut current = String::new();

  for word in text.split_whitespace() {
    let candidate = if current.is_empty() {
      word.to_string()
    } else {
      format!("{} {}", current, word)
    };

    if measure(&candidate) <= max_width {
      current = candidate;
      continue;
    }

    if !current.is_empty() {
      lines.push(std::mem::take(&mut current));
    }
    if measure(word) <= max_width {
      current = word.to_string();
    } else {
      hard_split(word, max_width, &measure, &mut lines);
    }
  }

  if !current.is_empty() {
    lines.push(current);
  }
  lines
}

/// Splits an oversized word into hyphenated parts
///
/// Parts are measured against `max_width - HYPHEN_SLACK` so the appended
/// hyphen does not push them past the limit. The final part carries no
/// hyphen. A single character wider than the limit is emitted anyway;
/// progress beats strict width here.
fn hard_split<F>(word: &str, max_width: f32, measure: &F, lines: &mut Vec<String>)
where
  F: Fn(&str) -> f32,
{
  let limit = max_width - HYPHEN_SLACK;
  let mut part = String::new();

  for ch in word.chars() {
    let mut candidate = part.clone();
    candidate.push(ch);
    if measure(&candidate) <= limit {
      part = candidate;
    } else {
      if !part.is_empty() {
        part.push('-');
        lines.push(std::mem::take(&mut part));
      }
      part.push(ch);
    }
  }

  if !part.is_empty() {
    lines.push(part);
  }
}

// =============================================================================
// Tests
// =============================================================================
