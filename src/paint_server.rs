// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::{ResolvedAttributes, ResolvedGeometry, SpreadMethod, Stop};

/// A renderable radial gradient.
#[derive(Clone, Debug)]
pub struct PaintSource {
    /// ID of the gradient element.
    pub id: String,

    /// Absolute gradient geometry.
    pub geometry: ResolvedGeometry,

    /// Resolved stops.
    pub stops: Vec<Stop>,

    /// Resolved spread method.
    pub spread_method: SpreadMethod,

    shader: Option<tiny_skia::Shader<'static>>,
}

impl PaintSource {
    /// Creates a paint source from resolved attributes and geometry.
    pub fn new(attrs: &ResolvedAttributes, geometry: ResolvedGeometry) -> Self {
        let shader = convert_radial_gradient(&geometry, &attrs.stops, attrs.spread_method);
        if shader.is_none() {
            log::warn!("Gradient '{}' cannot be rendered.", attrs.id);
        }

        PaintSource {
            id: attrs.id.clone(),
            geometry,
            stops: attrs.stops.clone(),
            spread_method: attrs.spread_method,
            shader,
        }
    }

    /// Returns a `tiny-skia` shader.
    ///
    /// `None` when `tiny-skia` cannot render this gradient. For example,
    /// when there are no stops. Nothing should be painted in this case.
    ///
    /// `tiny-skia` has no focal radius support, so
    /// [`ResolvedGeometry::fr`] is ignored here.
    pub fn shader(&self) -> Option<&tiny_skia::Shader<'static>> {
        self.shader.as_ref()
    }
}

fn convert_radial_gradient(
    geometry: &ResolvedGeometry,
    stops: &[Stop],
    spread_method: SpreadMethod,
) -> Option<tiny_skia::Shader<'static>> {
    let mode = match spread_method {
        SpreadMethod::Pad => tiny_skia::SpreadMode::Pad,
        SpreadMethod::Reflect => tiny_skia::SpreadMode::Reflect,
        SpreadMethod::Repeat => tiny_skia::SpreadMode::Repeat,
    };

    let mut points = Vec::with_capacity(stops.len());
    for stop in stops {
        let alpha = stop.opacity.get() * (stop.color.alpha as f32 / 255.0);
        let color = tiny_skia::Color::from_rgba(
            stop.color.red as f32 / 255.0,
            stop.color.green as f32 / 255.0,
            stop.color.blue as f32 / 255.0,
            alpha,
        )?;
        points.push(tiny_skia::GradientStop::new(stop.offset.get(), color))
    }

    tiny_skia::RadialGradient::new(
        geometry.focal,
        geometry.center,
        geometry.r.get(),
        points,
        mode,
        geometry.transform,
    )
}
