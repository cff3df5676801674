//! Tiling strategies
//!
//! Each function partitions one rectangle among a run of weighted children,
//! returning one rectangle per weight in input order. Weights must be finite
//! and non-negative.
//!
//! - `slice`: stack children top-to-bottom
//! - `dice`: lay children left-to-right
//! - `squarify`: greedy rows of slices/dices that keep aspect ratios near
//!   a target (the golden ratio by default)

use serde::{Deserialize, Serialize};

/// Golden ratio, the default target aspect for squarified rows
pub const PHI: f64 = 1.618_033_988_749_895;

/// Axis-aligned rectangle, `(x0, y0)` top-left and `(x1, y1)` bottom-right
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Rect {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Rect {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Shrink by `left/top/right/bottom`, collapsing to the midline instead
    /// of inverting when the insets exceed the size
    pub fn inset(&self, left: f64, top: f64, right: f64, bottom: f64) -> Self {
        let (mut x0, mut y0) = (self.x0 + left, self.y0 + top);
        let (mut x1, mut y1) = (self.x1 - right, self.y1 - bottom);
        if x1 < x0 {
            x0 = (x0 + x1) / 2.0;
            x1 = x0;
        }
        if y1 < y0 {
            y0 = (y0 + y1) / 2.0;
            y1 = y0;
        }
        Self { x0, y0, x1, y1 }
    }

    /// Shrink by the same amount on every side
    pub fn inset_uniform(&self, p: f64) -> Self {
        self.inset(p, p, p, p)
    }

    /// Snap every edge to the nearest integer
    pub fn round(&self) -> Self {
        Self {
            x0: self.x0.round(),
            y0: self.y0.round(),
            x1: self.x1.round(),
            y1: self.y1.round(),
        }
    }

    /// Whether `other` lies entirely within this rectangle (edges may touch)
    pub fn contains(&self, other: &Rect) -> bool {
        other.x0 >= self.x0 && other.y0 >= self.y0 && other.x1 <= self.x1 && other.y1 <= self.y1
    }

    /// Whether the interiors intersect (shared edges do not count)
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x0 < other.x1 && other.x0 < self.x1 && self.y0 < other.y1 && other.y0 < self.y1
    }
}

/// Stack children vertically, heights proportional to weight
pub fn slice(weights: &[f64], rect: Rect) -> Vec<Rect> {
    let total: f64 = weights.iter().sum();
    let k = if total > 0.0 { rect.height() / total } else { 0.0 };

    let mut y = rect.y0;
    let mut out: Vec<Rect> = weights
        .iter()
        .map(|w| {
            let y0 = y;
            y += w * k;
            Rect::new(rect.x0, y0, rect.x1, y)
        })
        .collect();

    if total > 0.0 {
        if let Some(last) = out.last_mut() {
            last.y1 = rect.y1;
        }
    }
    out
}

/// Lay children horizontally, widths proportional to weight
pub fn dice(weights: &[f64], rect: Rect) -> Vec<Rect> {
    let total: f64 = weights.iter().sum();
    let k = if total > 0.0 { rect.width() / total } else { 0.0 };

    let mut x = rect.x0;
    let mut out: Vec<Rect> = weights
        .iter()
        .map(|w| {
            let x0 = x;
            x += w * k;
            Rect::new(x0, rect.y0, x, rect.y1)
        })
        .collect();

    if total > 0.0 {
        if let Some(last) = out.last_mut() {
            last.x1 = rect.x1;
        }
    }
    out
}

/// Squarified tiling
///
/// Children are consumed in order into rows. A row grows while adding the
/// next child does not worsen its worst aspect ratio; the finished row takes
/// a strip off the shorter side of the remaining space. Callers sort weights
/// descending first; zero weights trail and end up in zero-thickness tiles.
pub fn squarify(weights: &[f64], rect: Rect, ratio: f64) -> Vec<Rect> {
    let n = weights.len();
    let mut out = Vec::with_capacity(n);
    let mut remaining: f64 = weights.iter().sum();
    let (mut x0, mut y0) = (rect.x0, rect.y0);
    let (x1, y1) = (rect.x1, rect.y1);

    let mut i0 = 0;
    let mut i1 = 0;
    while i0 < n {
        let dx = x1 - x0;
        let dy = y1 - y0;

        // Seed the row with the next non-empty child.
        let mut sum;
        loop {
            sum = weights[i1];
            i1 += 1;
            if sum != 0.0 || i1 >= n {
                break;
            }
        }

        let mut min_value = sum;
        let mut max_value = sum;
        let alpha = aspect(dx, dy) / (remaining * ratio);
        let mut beta = sum * sum * alpha;
        let mut min_ratio = (max_value / beta).max(beta / min_value);

        while i1 < n {
            let value = weights[i1];
            sum += value;
            min_value = min_value.min(value);
            max_value = max_value.max(value);
            beta = sum * sum * alpha;
            let new_ratio = (max_value / beta).max(beta / min_value);
            if new_ratio > min_ratio {
                sum -= value;
                break;
            }
            min_ratio = new_ratio;
            i1 += 1;
        }

        let row = &weights[i0..i1];
        let last_row = i1 >= n;
        if dx < dy {
            let y_end = if remaining > 0.0 && !last_row {
                y0 + dy * sum / remaining
            } else {
                y1
            };
            out.extend(dice(row, Rect::new(x0, y0, x1, y_end)));
            y0 = y_end;
        } else {
            let x_end = if remaining > 0.0 && !last_row {
                x0 + dx * sum / remaining
            } else {
                x1
            };
            out.extend(slice(row, Rect::new(x0, y0, x_end, y1)));
            x0 = x_end;
        }

        remaining -= sum;
        i0 = i1;
    }

    out
}

/// Long side over short side; unbounded for degenerate rectangles
fn aspect(dx: f64, dy: f64) -> f64 {
    if dx <= 0.0 || dy <= 0.0 {
        return f64::INFINITY;
    }
    (dy / dx).max(dx / dy)
}
