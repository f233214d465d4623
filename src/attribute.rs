// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::str::FromStr;

use svgtypes::Length;
use tiny_skia::Transform;

use crate::{Error, GradientDefinition, GradientKind, SpreadMethod, Units};

/// A gradient attribute ID.
#[allow(missing_docs)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum AId {
    Cx,
    Cy,
    R,
    Fx,
    Fy,
    Fr,
    GradientUnits,
    GradientTransform,
    SpreadMethod,
    Href,
}

impl AId {
    /// Returns the attribute name as written in SVG.
    pub fn to_str(self) -> &'static str {
        match self {
            AId::Cx => "cx",
            AId::Cy => "cy",
            AId::R => "r",
            AId::Fx => "fx",
            AId::Fy => "fy",
            AId::Fr => "fr",
            AId::GradientUnits => "gradientUnits",
            AId::GradientTransform => "gradientTransform",
            AId::SpreadMethod => "spreadMethod",
            AId::Href => "href",
        }
    }
}

impl FromStr for AId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let aid = match s {
            "cx" => AId::Cx,
            "cy" => AId::Cy,
            "r" => AId::R,
            "fx" => AId::Fx,
            "fy" => AId::Fy,
            "fr" => AId::Fr,
            "gradientUnits" => AId::GradientUnits,
            "gradientTransform" => AId::GradientTransform,
            "spreadMethod" => AId::SpreadMethod,
            "href" | "xlink:href" => AId::Href,
            _ => return Err(()),
        };

        Ok(aid)
    }
}

impl std::fmt::Display for AId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl GradientDefinition {
    /// Sets an attribute from its authored string value.
    ///
    /// On error, the attribute is left unset, so it will be inherited
    /// via `href` or defaulted.
    pub fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), Error> {
        let aid = AId::from_str(name).map_err(|_| Error::UnknownAttribute(name.to_string()))?;
        let invalid = || Error::InvalidAttributeValue {
            attribute: aid,
            value: value.to_string(),
        };

        match aid {
            AId::GradientUnits => {
                self.units = None;
                self.units = Some(Units::from_str(value).map_err(|_| invalid())?);
            }
            AId::GradientTransform => {
                self.transform = None;
                self.transform = Some(parse_transform(value).ok_or_else(invalid)?);
            }
            AId::SpreadMethod => {
                self.spread_method = None;
                self.spread_method = Some(SpreadMethod::from_str(value).map_err(|_| invalid())?);
            }
            AId::Href => {
                self.href = None;
                let link = svgtypes::IRI::from_str(value).map_err(|_| invalid())?;
                self.href = Some(link.0.to_string());
            }
            _ => {
                let attrs = match self.kind {
                    GradientKind::Radial(ref mut attrs) => attrs,
                    GradientKind::Linear => return Err(Error::UnknownAttribute(name.to_string())),
                };

                let field = match aid {
                    AId::Cx => &mut attrs.cx,
                    AId::Cy => &mut attrs.cy,
                    AId::R => &mut attrs.r,
                    AId::Fx => &mut attrs.fx,
                    AId::Fy => &mut attrs.fy,
                    _ => &mut attrs.fr,
                };

                *field = None;
                *field = Some(Length::from_str(value).map_err(|_| invalid())?);
            }
        }

        Ok(())
    }
}

fn parse_transform(value: &str) -> Option<Transform> {
    let ts = svgtypes::Transform::from_str(value).ok()?;
    let ts = Transform::from_row(
        ts.a as f32,
        ts.b as f32,
        ts.c as f32,
        ts.d as f32,
        ts.e as f32,
        ts.f as f32,
    );

    if ts.is_valid() {
        Some(ts)
    } else {
        Some(Transform::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use svgtypes::LengthUnit;

    #[test]
    fn parse_geometry() {
        let mut def = GradientDefinition::new_radial("rg1");
        def.set_attribute("cx", "25%").unwrap();
        def.set_attribute("r", "10").unwrap();

        let attrs = def.radial().unwrap();
        assert_eq!(attrs.cx, Some(Length::new(25.0, LengthUnit::Percent)));
        assert_eq!(attrs.r, Some(Length::new_number(10.0)));
        assert_eq!(attrs.cy, None);
    }

    #[test]
    fn parse_shared() {
        let mut def = GradientDefinition::new_linear("lg1");
        def.set_attribute("gradientUnits", "userSpaceOnUse").unwrap();
        def.set_attribute("spreadMethod", "reflect").unwrap();
        def.set_attribute("xlink:href", "#lg2").unwrap();
        def.set_attribute("gradientTransform", "translate(10 20)").unwrap();

        assert_eq!(def.units, Some(Units::UserSpaceOnUse));
        assert_eq!(def.spread_method, Some(SpreadMethod::Reflect));
        assert_eq!(def.href.as_deref(), Some("lg2"));
        assert_eq!(def.transform, Some(Transform::from_translate(10.0, 20.0)));
    }

    #[test]
    fn geometry_on_linear() {
        let mut def = GradientDefinition::new_linear("lg1");
        assert_eq!(
            def.set_attribute("cx", "0.5"),
            Err(Error::UnknownAttribute("cx".to_string()))
        );
    }

    #[test]
    fn invalid_value_unsets() {
        let mut def = GradientDefinition::new_radial("rg1");
        def.set_attribute("spreadMethod", "pad").unwrap();
        assert!(def.set_attribute("spreadMethod", "mirror").is_err());
        assert_eq!(def.spread_method, None);

        assert_eq!(
            def.set_attribute("r", "big"),
            Err(Error::InvalidAttributeValue {
                attribute: AId::R,
                value: "big".to_string(),
            })
        );
        assert_eq!(def.radial().unwrap().r, None);
    }

    #[test]
    fn non_invertible_transform() {
        let mut def = GradientDefinition::new_radial("rg1");
        def.set_attribute("gradientTransform", "scale(0)").unwrap();
        assert_eq!(def.transform, Some(Transform::default()));
    }

    #[test]
    fn unknown_attribute() {
        let mut def = GradientDefinition::new_radial("rg1");
        assert!(def.set_attribute("x1", "0").is_err());
    }
}
