// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use strict_num::{NonZeroPositiveF32, PositiveF32};
use tiny_skia::{Point, Rect, Transform};

use crate::geom::{self, Line};
use crate::units::convert_length;
use crate::{AId, Degenerate, Options, ResolvedAttributes, Units};

/// How far inside the circle a focal point is pulled back, relative to the radius.
pub const FOCAL_EPSILON: f32 = 1.0 / 128.0;

/// Absolute radial gradient geometry.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ResolvedGeometry {
    /// Center of the end circle.
    pub center: Point,

    /// Focal point.
    ///
    /// Always strictly inside the end circle.
    pub focal: Point,

    /// Radius of the end circle.
    pub r: NonZeroPositiveF32,

    /// Radius of the focal circle.
    pub fr: PositiveF32,

    /// Gradient transform in user space.
    pub transform: Transform,
}

/// Converts resolved attributes into absolute geometry.
///
/// `bbox` is the bounding box of the painted element. It's used only by
/// `objectBoundingBox` gradients.
///
/// Returns [`Degenerate`] when the radius is not positive. Such gradient
/// should be painted using the last stop color.
pub fn build(
    attrs: &ResolvedAttributes,
    bbox: Option<Rect>,
    opt: &Options,
) -> Result<ResolvedGeometry, Degenerate> {
    let len = |aid, length| convert_length(length, aid, attrs.units, opt);

    let (center, focal, r, fr, transform) = match attrs.units {
        Units::UserSpaceOnUse => (
            Point::from_xy(len(AId::Cx, attrs.cx), len(AId::Cy, attrs.cy)),
            Point::from_xy(len(AId::Fx, attrs.fx), len(AId::Fy, attrs.fy)),
            len(AId::R, attrs.r),
            len(AId::Fr, attrs.fr),
            attrs.transform,
        ),
        Units::ObjectBoundingBox => {
            let bbox = bbox.unwrap_or_else(|| {
                log::warn!(
                    "Gradient '{}' requires a bounding box. A unit one is used instead.",
                    attrs.id
                );
                unit_bbox()
            });

            let diagonal = geom::normalized_diagonal(bbox.width(), bbox.height());
            let transform = geom::bbox_conjugate(attrs.transform, bbox).unwrap_or_else(|| {
                log::warn!(
                    "Gradient '{}' on a zero-sized shape. 'gradientTransform' is applied as is.",
                    attrs.id
                );
                attrs.transform
            });

            (
                geom::bbox_point(bbox, len(AId::Cx, attrs.cx), len(AId::Cy, attrs.cy)),
                geom::bbox_point(bbox, len(AId::Fx, attrs.fx), len(AId::Fy, attrs.fy)),
                len(AId::R, attrs.r) * diagonal,
                len(AId::Fr, attrs.fr) * diagonal,
                transform,
            )
        }
    };

    // 'A value of zero will cause the area to be painted as a single color
    // using the color and opacity of the last gradient stop.'
    //
    // Negative and non-finite values are errors, so we can resolve them
    // in whatever way we want.
    let r = NonZeroPositiveF32::new(r).ok_or_else(|| Degenerate {
        last_stop: attrs.stops.last().copied(),
    })?;

    if !is_finite(center) {
        log::warn!("Gradient '{}' has a non-finite center.", attrs.id);
        return Err(Degenerate {
            last_stop: attrs.stops.last().copied(),
        });
    }

    let focal = if is_finite(focal) {
        focal
    } else {
        log::warn!(
            "Gradient '{}' has a non-finite focal point. The center is used instead.",
            attrs.id
        );
        center
    };

    let fr = PositiveF32::new(fr).unwrap_or_else(|| {
        log::warn!("Gradient '{}' has an invalid 'fr'. Reset to 0.", attrs.id);
        PositiveF32::ZERO
    });

    Ok(ResolvedGeometry {
        center,
        focal: prepare_focal(center, focal, r.get()),
        r,
        fr,
        transform,
    })
}

// If the focal point lies on or outside the end circle, it's pulled back inside
// along the center-to-focal line. Otherwise the gradient math divides by zero.
fn prepare_focal(center: Point, focal: Point, r: f32) -> Point {
    let r = r as f64;
    let mut line = Line::new(center, focal);
    if line.length() >= r {
        line.set_length(r * (1.0 - FOCAL_EPSILON as f64));
    }

    line.end()
}

fn is_finite(p: Point) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

fn unit_bbox() -> Rect {
    // Unwrap is safe, because the rect is valid.
    Rect::from_xywh(0.0, 0.0, 1.0, 1.0).unwrap()
}
