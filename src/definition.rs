// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::collections::HashMap;

use strict_num::NormalizedF32;
use svgtypes::{Color, Length};
use tiny_skia::Transform;

use crate::Units;

/// An alias to `NormalizedF32`.
pub type Opacity = NormalizedF32;

/// An alias to `NormalizedF32`.
pub type StopOffset = NormalizedF32;

/// A spread method.
///
/// `spreadMethod` attribute in SVG.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SpreadMethod {
    Pad,
    Reflect,
    Repeat,
}

impl Default for SpreadMethod {
    fn default() -> Self {
        Self::Pad
    }
}

impl std::str::FromStr for SpreadMethod {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pad" => Ok(SpreadMethod::Pad),
            "reflect" => Ok(SpreadMethod::Reflect),
            "repeat" => Ok(SpreadMethod::Repeat),
            _ => Err(()),
        }
    }
}

/// Gradient's stop element.
///
/// Stops are passed to the shader as is, in the authored order.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Stop {
    /// Gradient stop offset.
    ///
    /// `offset` in SVG.
    pub offset: StopOffset,

    /// Gradient stop color.
    ///
    /// `stop-color` in SVG.
    pub color: Color,

    /// Gradient stop opacity.
    ///
    /// `stop-opacity` in SVG.
    pub opacity: Opacity,
}

impl Stop {
    /// Creates a new stop. `offset` and `opacity` are clamped to the 0..1 range.
    pub fn new(offset: f32, color: Color, opacity: f32) -> Self {
        Stop {
            offset: StopOffset::new_clamped(offset),
            color,
            opacity: Opacity::new_clamped(opacity),
        }
    }
}

/// Geometry attributes of a `radialGradient` element.
///
/// `None` means that the attribute is not set on this element.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct RadialAttributes {
    pub cx: Option<Length>,
    pub cy: Option<Length>,
    pub r: Option<Length>,
    pub fx: Option<Length>,
    pub fy: Option<Length>,
    pub fr: Option<Length>,
}

/// A gradient kind.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum GradientKind {
    /// A `linearGradient` element.
    ///
    /// Can only be used as a source of shared attributes and stops.
    Linear,
    /// A `radialGradient` element.
    Radial(RadialAttributes),
}

/// An authored, possibly partial, gradient element.
#[derive(Clone, PartialEq, Debug)]
pub struct GradientDefinition {
    /// Element's ID.
    pub id: String,

    /// Gradient kind with kind-specific attributes.
    pub kind: GradientKind,

    /// `gradientUnits` in SVG.
    pub units: Option<Units>,

    /// `gradientTransform` in SVG.
    pub transform: Option<Transform>,

    /// `spreadMethod` in SVG.
    pub spread_method: Option<SpreadMethod>,

    /// ID of the referenced gradient.
    ///
    /// `xlink:href` in SVG.
    pub href: Option<String>,

    /// A list of `stop` elements.
    pub stops: Vec<Stop>,
}

impl GradientDefinition {
    /// Creates an empty `radialGradient`.
    pub fn new_radial(id: impl Into<String>) -> Self {
        Self::new(id.into(), GradientKind::Radial(RadialAttributes::default()))
    }

    /// Creates an empty `linearGradient`.
    pub fn new_linear(id: impl Into<String>) -> Self {
        Self::new(id.into(), GradientKind::Linear)
    }

    fn new(id: String, kind: GradientKind) -> Self {
        GradientDefinition {
            id,
            kind,
            units: None,
            transform: None,
            spread_method: None,
            href: None,
            stops: Vec::new(),
        }
    }

    /// Checks that this is a `radialGradient`.
    pub fn is_radial(&self) -> bool {
        matches!(self.kind, GradientKind::Radial(_))
    }

    /// Returns the radial geometry attributes.
    pub fn radial(&self) -> Option<&RadialAttributes> {
        match self.kind {
            GradientKind::Radial(ref attrs) => Some(attrs),
            GradientKind::Linear => None,
        }
    }

    /// Appends a stop.
    pub fn push_stop(&mut self, stop: Stop) {
        self.stops.push(stop);
    }
}

/// A gradient lookup used to follow `href` references.
pub trait DefinitionSource {
    /// Returns a gradient by its ID.
    fn definition(&self, id: &str) -> Option<&GradientDefinition>;
}

impl DefinitionSource for HashMap<String, GradientDefinition> {
    fn definition(&self, id: &str) -> Option<&GradientDefinition> {
        self.get(id)
    }
}

/// A flat storage of gradient elements, indexed by ID.
#[derive(Clone, Default, Debug)]
pub struct Defs {
    gradients: HashMap<String, GradientDefinition>,
}

impl Defs {
    /// Creates an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a gradient, returning the one previously stored under the same ID.
    pub fn insert(&mut self, def: GradientDefinition) -> Option<GradientDefinition> {
        self.gradients.insert(def.id.clone(), def)
    }

    /// Returns a gradient by its ID.
    pub fn get(&self, id: &str) -> Option<&GradientDefinition> {
        self.gradients.get(id)
    }

    /// Returns a mutable gradient by its ID.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut GradientDefinition> {
        self.gradients.get_mut(id)
    }

    /// Removes a gradient by its ID.
    pub fn remove(&mut self, id: &str) -> Option<GradientDefinition> {
        self.gradients.remove(id)
    }

    /// Returns the number of stored gradients.
    pub fn len(&self) -> usize {
        self.gradients.len()
    }

    /// Checks that there are no gradients.
    pub fn is_empty(&self) -> bool {
        self.gradients.is_empty()
    }
}

impl DefinitionSource for Defs {
    fn definition(&self, id: &str) -> Option<&GradientDefinition> {
        self.get(id)
    }
}
