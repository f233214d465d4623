// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use tiny_skia::{NonZeroRect, Point, Rect, Transform};

/// Line representation.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Line {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Line {
    /// Creates a new line from `p1` to `p2`.
    pub fn new(p1: Point, p2: Point) -> Line {
        Line {
            x1: p1.x,
            y1: p1.y,
            x2: p2.x,
            y2: p2.y,
        }
    }

    // Computed in f64, so coordinates close to `f32::MAX` do not overflow.
    fn delta(&self) -> (f64, f64) {
        (
            self.x2 as f64 - self.x1 as f64,
            self.y2 as f64 - self.y1 as f64,
        )
    }

    /// Calculates the line length.
    pub fn length(&self) -> f64 {
        let (dx, dy) = self.delta();
        dx.hypot(dy)
    }

    /// Sets the line length, keeping the start point and the direction.
    ///
    /// Does nothing for a zero-length line, since it has no direction.
    pub fn set_length(&mut self, len: f64) {
        let curr_len = self.length();
        if curr_len == 0.0 || !curr_len.is_finite() {
            return;
        }

        let (dx, dy) = self.delta();
        let scale = len / curr_len;
        self.x2 = (self.x1 as f64 + dx * scale) as f32;
        self.y2 = (self.y1 as f64 + dy * scale) as f32;
    }

    pub fn end(&self) -> Point {
        Point::from_xy(self.x2, self.y2)
    }
}

/// Returns the length that scalar values are relative to inside a `width` x `height` box.
///
/// `sqrt(width² + height²) / sqrt(2)`, which is just `width` for a square.
pub(crate) fn normalized_diagonal(width: f32, height: f32) -> f32 {
    (width * width + height * height).sqrt() / std::f32::consts::SQRT_2
}

/// Maps a point in bounding box units into user space.
pub(crate) fn bbox_point(bbox: Rect, x: f32, y: f32) -> Point {
    Point::from_xy(bbox.x() + x * bbox.width(), bbox.y() + y * bbox.height())
}

/// Moves `ts` from bounding box units into user space.
///
/// Returns `None` for a box without an area, since it cannot be inverted.
pub(crate) fn bbox_conjugate(ts: Transform, bbox: Rect) -> Option<Transform> {
    if ts.is_identity() {
        return Some(ts);
    }

    let bbox = NonZeroRect::from_xywh(bbox.x(), bbox.y(), bbox.width(), bbox.height())?;
    let bbox_ts = Transform::from_bbox(bbox);
    let inv = bbox_ts.invert()?;
    Some(bbox_ts.pre_concat(ts).pre_concat(inv))
}
