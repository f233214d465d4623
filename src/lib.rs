// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
`paintserver` resolves SVG `radialGradient` paint servers into renderable shaders.

A gradient element may delegate any unset attribute to another gradient via `href`.
This crate walks such reference chains, merges the attributes, converts the
geometry from `objectBoundingBox` or `userSpaceOnUse` units into absolute
coordinates and produces a `tiny_skia::Shader` ready to be used as a fill
or a stroke.

The usual flow is:

1. Store authored gradients in [`Defs`].
2. Ask a [`PaintCache`] for the paint of an element.
   The cache runs [`resolve`] and [`build`] only when the element was
   invalidated since the last request.
3. Paint with [`PaintSource::shader`], or fall back to a flat fill
   when a [`Degenerate`] gradient is reported.

The document model, layout and rasterization are external to this crate.
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(missing_copy_implementations)]

mod attribute;
mod cache;
mod definition;
mod error;
mod geom;
mod geometry;
mod options;
mod paint_server;
mod resolve;
mod units;

pub use strict_num::{self, ApproxEqUlps, NonZeroPositiveF32, NormalizedF32, PositiveF32};
pub use svgtypes::{Color, Length, LengthUnit};
pub use tiny_skia::{Point, Rect, Size, Transform};

pub use crate::attribute::AId;
pub use crate::cache::{GradientPaint, PaintCache};
pub use crate::definition::{
    DefinitionSource, Defs, GradientDefinition, GradientKind, Opacity, RadialAttributes,
    SpreadMethod, Stop, StopOffset,
};
pub use crate::error::{Degenerate, Error, MalformedChain};
pub use crate::geometry::{build, ResolvedGeometry, FOCAL_EPSILON};
pub use crate::options::Options;
pub use crate::paint_server::PaintSource;
pub use crate::resolve::{resolve, ResolvedAttributes};
pub use crate::units::Units;

trait OptionLog {
    fn log_none<F: FnOnce()>(self, f: F) -> Self;
}

impl<T> OptionLog for Option<T> {
    #[inline]
    fn log_none<F: FnOnce()>(self, f: F) -> Self {
        self.or_else(|| {
            f();
            None
        })
    }
}
