// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use tiny_skia::Size;

/// Processing options.
#[derive(Clone, Copy, Debug)]
pub struct Options {
    /// Target DPI.
    ///
    /// Impacts units conversion.
    ///
    /// Default: 96.0
    pub dpi: f32,

    /// A default font size.
    ///
    /// Used to convert `em` and `ex` lengths.
    ///
    /// Default: 12
    pub font_size: f32,

    /// The viewport size.
    ///
    /// Percentage lengths in `userSpaceOnUse` gradients are relative to it.
    ///
    /// Default: `(100, 100)`
    pub viewport: Size,

    /// The maximum number of gradients visited while resolving a reference chain,
    /// the gradient itself included.
    ///
    /// Default: 16
    pub max_chain_length: usize,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            dpi: 96.0,
            font_size: 12.0,
            viewport: Size::from_wh(100.0, 100.0).unwrap(),
            max_chain_length: 16,
        }
    }
}
