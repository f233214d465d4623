// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use svgtypes::{Length, LengthUnit as Unit};

use crate::geom::normalized_diagonal;
use crate::{AId, Options};

/// A coordinate system of the gradient geometry.
///
/// `gradientUnits` attribute in SVG.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Units {
    /// Values are absolute user space coordinates.
    UserSpaceOnUse,
    /// Values are fractions of the painted element's bounding box.
    ObjectBoundingBox,
}

impl Default for Units {
    fn default() -> Self {
        Units::ObjectBoundingBox
    }
}

impl std::str::FromStr for Units {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "userSpaceOnUse" => Ok(Units::UserSpaceOnUse),
            "objectBoundingBox" => Ok(Units::ObjectBoundingBox),
            _ => Err(()),
        }
    }
}

/// Converts a length into a number.
///
/// In `ObjectBoundingBox` mode the result is a fraction of the box,
/// so `50%` becomes `0.5`. In `UserSpaceOnUse` mode percentages are
/// relative to the viewport.
pub(crate) fn convert_length(length: Length, aid: AId, units: Units, opt: &Options) -> f32 {
    let dpi = opt.dpi;
    let n = length.number as f32;
    match length.unit {
        Unit::None | Unit::Px => n,
        Unit::Em => n * opt.font_size,
        Unit::Ex => n * opt.font_size / 2.0,
        Unit::In => n * dpi,
        Unit::Cm => n * dpi / 2.54,
        Unit::Mm => n * dpi / 25.4,
        Unit::Pt => n * dpi / 72.0,
        Unit::Pc => n * dpi / 6.0,
        Unit::Percent => {
            if units == Units::ObjectBoundingBox {
                n / 100.0
            } else {
                let viewport = opt.viewport;
                match aid {
                    AId::Cx | AId::Fx => convert_percent(length, viewport.width()),
                    AId::Cy | AId::Fy => convert_percent(length, viewport.height()),
                    _ => {
                        let base = normalized_diagonal(viewport.width(), viewport.height());
                        convert_percent(length, base)
                    }
                }
            }
        }
    }
}

fn convert_percent(length: Length, base: f32) -> f32 {
    base * (length.number as f32) / 100.0
}
