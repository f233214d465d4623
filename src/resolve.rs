// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use svgtypes::{Length, LengthUnit as Unit};
use tiny_skia::Transform;

use crate::{
    DefinitionSource, Error, GradientDefinition, GradientKind, MalformedChain, Options,
    RadialAttributes, SpreadMethod, Stop, Units,
};

/// Fully resolved `radialGradient` attributes.
///
/// Geometry is still in authored lengths. Use [`build`](crate::build)
/// to get absolute coordinates.
#[allow(missing_docs)]
#[derive(Clone, PartialEq, Debug)]
pub struct ResolvedAttributes {
    /// ID of the resolved gradient.
    pub id: String,
    pub cx: Length,
    pub cy: Length,
    pub r: Length,
    pub fx: Length,
    pub fy: Length,
    pub fr: Length,
    pub units: Units,
    pub transform: Transform,
    pub spread_method: SpreadMethod,
    pub stops: Vec<Stop>,

    /// IDs of all visited gradients, starting with the resolved one.
    pub chain: Vec<String>,

    /// Set when the reference chain was cut short.
    pub malformed: Option<MalformedChain>,
}

/// Resolves attributes of a `radialGradient` element.
///
/// According to the SVG spec, gradient attributes can be inherited via the `xlink:href` attribute.
/// So we have to search linked gradients first and if they do not have such attributes
/// we have to fallback to the default one.
///
/// Geometry attributes can be inherited only from radial gradients, but a linear
/// gradient in the chain doesn't stop the search. Units, transform,
/// spread method and stops can be inherited from any kind of gradient.
///
/// A chain that is too long, cyclic or broken is not an error. The walk stops
/// and everything that is still unset is defaulted.
///
/// Details: https://www.w3.org/TR/SVG11/pservers.html#RadialGradients
pub fn resolve<S: DefinitionSource + ?Sized>(
    def: &GradientDefinition,
    source: &S,
    opt: &Options,
) -> Result<ResolvedAttributes, Error> {
    if !def.is_radial() {
        return Err(Error::NotRadialGradient(def.id.clone()));
    }

    let mut acc = Accumulator::default();
    let mut chain = vec![def.id.clone()];
    let mut malformed = None;
    let mut node = def;
    loop {
        acc.merge(node);

        let link = match node.href {
            Some(ref link) => link.clone(),
            None => break,
        };

        if chain.contains(&link) {
            log::warn!("Gradient '{}' has a recursive 'xlink:href'.", def.id);
            malformed = Some(MalformedChain::Cycle(link));
            break;
        }

        if chain.len() >= opt.max_chain_length {
            log::warn!(
                "Gradient '{}' has more than {} linked gradients. The rest is ignored.",
                def.id,
                opt.max_chain_length
            );
            malformed = Some(MalformedChain::TooLong);
            break;
        }

        node = match source.definition(&link) {
            Some(link_node) => link_node,
            None => {
                log::warn!(
                    "Gradient '{}' references a missing element '{}'.",
                    node.id,
                    link
                );
                malformed = Some(MalformedChain::BrokenLink(link));
                break;
            }
        };

        chain.push(link);
    }

    let half = Length::new(50.0, Unit::Percent);
    let cx = acc.geometry.cx.unwrap_or(half);
    let cy = acc.geometry.cy.unwrap_or(half);
    Ok(ResolvedAttributes {
        id: def.id.clone(),
        cx,
        cy,
        r: acc.geometry.r.unwrap_or(half),
        // `fx` and `fy` fallback to the resolved `cx` and `cy`
        // and not to their defaults.
        fx: acc.geometry.fx.unwrap_or(cx),
        fy: acc.geometry.fy.unwrap_or(cy),
        fr: acc.geometry.fr.unwrap_or_else(Length::zero),
        units: acc.units.unwrap_or_default(),
        transform: acc.transform.unwrap_or_default(),
        spread_method: acc.spread_method.unwrap_or_default(),
        stops: acc.stops.unwrap_or_default(),
        chain,
        malformed,
    })
}

#[derive(Default)]
struct Accumulator {
    geometry: RadialAttributes,
    units: Option<Units>,
    transform: Option<Transform>,
    spread_method: Option<SpreadMethod>,
    stops: Option<Vec<Stop>>,
}

impl Accumulator {
    fn merge(&mut self, node: &GradientDefinition) {
        // Linear gradients have no radial geometry and are skipped.
        if let GradientKind::Radial(ref attrs) = node.kind {
            let g = &mut self.geometry;
            g.cx = g.cx.or(attrs.cx);
            g.cy = g.cy.or(attrs.cy);
            g.r = g.r.or(attrs.r);
            g.fx = g.fx.or(attrs.fx);
            g.fy = g.fy.or(attrs.fy);
            g.fr = g.fr.or(attrs.fr);
        }

        self.units = self.units.or(node.units);
        self.transform = self.transform.or(node.transform);
        self.spread_method = self.spread_method.or(node.spread_method);

        // Stops are never merged. The first non-empty list wins.
        if self.stops.is_none() && !node.stops.is_empty() {
            self.stops = Some(node.stops.clone());
        }
    }
}
