// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::collections::HashMap;
use std::sync::Arc;

use tiny_skia::Rect;

use crate::{
    build, resolve, Degenerate, DefinitionSource, MalformedChain, OptionLog, Options, PaintSource,
};

/// A gradient paint of an element.
#[derive(Clone, Debug)]
pub enum GradientPaint {
    /// A renderable gradient.
    Source(Arc<PaintSource>),
    /// A gradient that should be painted as a single color.
    Degenerate(Degenerate),
}

#[derive(Debug)]
struct Slot {
    generation: u64,
    gradient_id: String,
    // IDs of all gradients the paint was resolved through.
    chain: Vec<String>,
    paint: GradientPaint,
}

/// Gradient paints cache.
///
/// Each element owns a single slot, which is rebuilt only after the element
/// was invalidated. The document is expected to call [`PaintCache::invalidate`]
/// when element's gradient attributes, reference chain or bounding box are changed.
///
/// Elements are referenced by their IDs.
#[derive(Default, Debug)]
pub struct PaintCache {
    slots: HashMap<String, Slot>,
    generations: HashMap<String, u64>,
    rebuilds: usize,
}

impl PaintCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current generation of an element.
    ///
    /// Starts at 0 and is incremented by each invalidation.
    pub fn generation(&self, element: &str) -> u64 {
        self.generations.get(element).copied().unwrap_or(0)
    }

    /// Marks element's paint as outdated.
    pub fn invalidate(&mut self, element: &str) {
        let generation = self.generations.entry(element.to_string()).or_insert(0);
        *generation = generation.wrapping_add(1);
    }

    /// Invalidates all elements that were resolved through the gradient `id`,
    /// either directly or via `href`.
    ///
    /// Returns the number of invalidated elements.
    pub fn invalidate_gradient(&mut self, id: &str) -> usize {
        let elements: Vec<String> = self
            .slots
            .iter()
            .filter(|(_, slot)| slot.chain.iter().any(|link| link == id))
            .map(|(element, _)| element.clone())
            .collect();

        for element in &elements {
            self.invalidate(element);
        }

        elements.len()
    }

    /// Checks that element's paint has to be rebuilt.
    pub fn is_stale(&self, element: &str) -> bool {
        match self.slots.get(element) {
            Some(slot) => slot.generation != self.generation(element),
            None => true,
        }
    }

    /// Returns element's gradient paint, rebuilding it when stale.
    ///
    /// `gradient_id` is the gradient referenced by the element's fill or stroke.
    /// `bbox` is the element's bounding box.
    ///
    /// Returns `None` when the gradient doesn't exist or is not a radial one.
    pub fn paint<S: DefinitionSource + ?Sized>(
        &mut self,
        element: &str,
        gradient_id: &str,
        source: &S,
        bbox: Option<Rect>,
        opt: &Options,
    ) -> Option<GradientPaint> {
        if let Some(slot) = self.slots.get(element) {
            if slot.generation == self.generation(element) && slot.gradient_id == gradient_id {
                return Some(slot.paint.clone());
            }
        }

        self.slots.remove(element);

        let def = source.definition(gradient_id).log_none(|| {
            log::warn!(
                "Element '{}' references a missing gradient '{}'.",
                element,
                gradient_id
            )
        })?;

        self.rebuilds += 1;
        let attrs = match resolve(def, source, opt) {
            Ok(attrs) => attrs,
            Err(e) => {
                log::warn!("Element '{}' cannot be painted: {}.", element, e);
                return None;
            }
        };

        let paint = match build(&attrs, bbox, opt) {
            Ok(geometry) => GradientPaint::Source(Arc::new(PaintSource::new(&attrs, geometry))),
            Err(degenerate) => GradientPaint::Degenerate(degenerate),
        };

        // A missing gradient may appear later, so it's a dependency too.
        let mut chain = attrs.chain;
        if let Some(MalformedChain::BrokenLink(id)) = attrs.malformed {
            chain.push(id);
        }

        let generation = self.generation(element);
        self.slots.insert(
            element.to_string(),
            Slot {
                generation,
                gradient_id: gradient_id.to_string(),
                chain,
                paint: paint.clone(),
            },
        );

        Some(paint)
    }

    /// Removes element's slot.
    ///
    /// Should be called when the element is removed from the document.
    pub fn remove(&mut self, element: &str) {
        self.slots.remove(element);
        self.generations.remove(element);
    }

    /// Removes all slots.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.generations.clear();
    }

    /// Returns how many times paints were resolved and built.
    pub fn rebuild_count(&self) -> usize {
        self.rebuilds
    }
}
