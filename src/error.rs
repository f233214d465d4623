// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::{AId, Stop};

/// List of all errors.
#[derive(Clone, PartialEq, Debug)]
pub enum Error {
    /// An attribute that is not supported by the gradient kind.
    UnknownAttribute(String),

    /// An attribute value that cannot be parsed.
    ///
    /// The attribute stays unset, so it will be inherited or defaulted.
    InvalidAttributeValue {
        /// Attribute name.
        attribute: AId,
        /// Authored value.
        value: String,
    },

    /// A radial gradient was requested, but the element is a linear one.
    NotRadialGradient(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Error::UnknownAttribute(ref name) => {
                write!(f, "'{}' is not a gradient attribute", name)
            }
            Error::InvalidAttributeValue {
                attribute,
                ref value,
            } => {
                write!(f, "invalid '{}' value: '{}'", attribute, value)
            }
            Error::NotRadialGradient(ref id) => {
                write!(f, "gradient '{}' is not a radial gradient", id)
            }
        }
    }
}

impl std::error::Error for Error {}

/// A gradient with a non-positive radius.
///
/// 'A value of zero will cause the area to be painted as a single color
/// using the color and opacity of the last gradient stop.'
///
/// This crate only reports the condition. Painting the fallback color
/// is up to the caller.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Degenerate {
    /// The last stop of the resolved stop list, if any.
    pub last_stop: Option<Stop>,
}

impl std::fmt::Display for Degenerate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "gradient radius is not positive")
    }
}

impl std::error::Error for Degenerate {}

/// A reason why a reference chain was cut short.
///
/// Resolution still completes, using defaults for everything
/// that was not found before the cut.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum MalformedChain {
    /// The chain is longer than [`Options::max_chain_length`](crate::Options::max_chain_length).
    TooLong,
    /// The chain links back to an already visited gradient.
    Cycle(String),
    /// The chain links to a gradient that doesn't exist.
    BrokenLink(String),
}

impl std::fmt::Display for MalformedChain {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            MalformedChain::TooLong => write!(f, "the reference chain is too long"),
            MalformedChain::Cycle(ref id) => {
                write!(f, "the reference chain has a cycle at '{}'", id)
            }
            MalformedChain::BrokenLink(ref id) => {
                write!(f, "the reference chain links to a missing '{}'", id)
            }
        }
    }
}
