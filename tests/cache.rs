use std::cell::Cell;

use paintserver::{
    Color, DefinitionSource, Defs, GradientDefinition, GradientPaint, Options, PaintCache, Rect,
    Stop,
};

// Counts lookups, which happen only while resolving a reference chain.
struct CountingSource {
    defs: Defs,
    lookups: Cell<usize>,
}

impl DefinitionSource for CountingSource {
    fn definition(&self, id: &str) -> Option<&GradientDefinition> {
        self.lookups.set(self.lookups.get() + 1);
        self.defs.get(id)
    }
}

fn radial(id: &str, attrs: &[(&str, &str)]) -> GradientDefinition {
    let mut def = GradientDefinition::new_radial(id);
    for (name, value) in attrs {
        def.set_attribute(name, value).unwrap();
    }
    def
}

fn defs() -> Defs {
    let mut base = radial("base", &[("r", "0.4")]);
    base.push_stop(Stop::new(0.0, Color::black(), 1.0));
    base.push_stop(Stop::new(1.0, Color::white(), 1.0));

    let mut defs = Defs::new();
    defs.insert(base);
    defs.insert(radial("rg1", &[("href", "#base"), ("cx", "0.3")]));
    defs.insert(radial("flat", &[("href", "#base"), ("r", "0")]));
    defs.insert(GradientDefinition::new_linear("lg1"));
    defs
}

fn bbox() -> Option<Rect> {
    Rect::from_xywh(0.0, 0.0, 100.0, 100.0)
}

fn source(paint: &GradientPaint) -> &paintserver::PaintSource {
    match paint {
        GradientPaint::Source(source) => source,
        GradientPaint::Degenerate(_) => panic!("unexpected degenerate gradient"),
    }
}

#[test]
fn cached_until_invalidated() {
    let source = CountingSource {
        defs: defs(),
        lookups: Cell::new(0),
    };
    let opt = Options::default();
    let mut cache = PaintCache::new();

    assert!(cache.is_stale("circle"));
    cache.paint("circle", "rg1", &source, bbox(), &opt).unwrap();
    assert!(!cache.is_stale("circle"));
    let lookups = source.lookups.get();
    assert_eq!(cache.rebuild_count(), 1);

    cache.paint("circle", "rg1", &source, bbox(), &opt).unwrap();
    assert_eq!(source.lookups.get(), lookups);
    assert_eq!(cache.rebuild_count(), 1);

    cache.invalidate("circle");
    assert!(cache.is_stale("circle"));
    cache.paint("circle", "rg1", &source, bbox(), &opt).unwrap();
    assert!(source.lookups.get() > lookups);
    assert_eq!(cache.rebuild_count(), 2);
}

#[test]
fn same_paint_is_returned() {
    let defs = defs();
    let opt = Options::default();
    let mut cache = PaintCache::new();

    let paint1 = cache.paint("circle", "rg1", &defs, bbox(), &opt).unwrap();
    let paint2 = cache.paint("circle", "rg1", &defs, bbox(), &opt).unwrap();
    match (paint1, paint2) {
        (GradientPaint::Source(s1), GradientPaint::Source(s2)) => {
            assert!(std::sync::Arc::ptr_eq(&s1, &s2))
        }
        _ => panic!("unexpected degenerate gradient"),
    }
}

#[test]
fn new_bbox_after_invalidation() {
    let defs = defs();
    let opt = Options::default();
    let mut cache = PaintCache::new();

    let paint = cache.paint("circle", "rg1", &defs, bbox(), &opt).unwrap();
    assert!((source(&paint).geometry.center.x - 30.0).abs() < 1e-3);

    // Without an invalidation the old geometry is kept.
    let moved = Rect::from_xywh(100.0, 0.0, 100.0, 100.0);
    let paint = cache.paint("circle", "rg1", &defs, moved, &opt).unwrap();
    assert!((source(&paint).geometry.center.x - 30.0).abs() < 1e-3);

    cache.invalidate("circle");
    let paint = cache.paint("circle", "rg1", &defs, moved, &opt).unwrap();
    assert!((source(&paint).geometry.center.x - 130.0).abs() < 1e-3);
}

#[test]
fn elements_have_own_slots() {
    let defs = defs();
    let opt = Options::default();
    let mut cache = PaintCache::new();

    cache.paint("circle1", "rg1", &defs, bbox(), &opt).unwrap();
    cache.paint("circle2", "rg1", &defs, bbox(), &opt).unwrap();
    assert_eq!(cache.rebuild_count(), 2);

    cache.invalidate("circle1");
    assert!(cache.is_stale("circle1"));
    assert!(!cache.is_stale("circle2"));
}

#[test]
fn other_gradient_is_rebuilt() {
    let defs = defs();
    let opt = Options::default();
    let mut cache = PaintCache::new();

    cache.paint("circle", "rg1", &defs, bbox(), &opt).unwrap();
    let paint = cache.paint("circle", "base", &defs, bbox(), &opt).unwrap();
    assert_eq!(source(&paint).id, "base");
    assert_eq!(cache.rebuild_count(), 2);
}

#[test]
fn invalidate_referenced_gradient() {
    let mut defs = defs();
    let opt = Options::default();
    let mut cache = PaintCache::new();

    cache.paint("circle1", "rg1", &defs, bbox(), &opt).unwrap();
    cache.paint("circle2", "base", &defs, bbox(), &opt).unwrap();
    cache.paint("circle3", "flat", &defs, bbox(), &opt).unwrap();

    defs.get_mut("base").unwrap().set_attribute("r", "0.1").unwrap();
    assert_eq!(cache.invalidate_gradient("base"), 3);
    assert_eq!(cache.invalidate_gradient("rg1"), 1);

    let paint = cache.paint("circle1", "rg1", &defs, bbox(), &opt).unwrap();
    assert!((source(&paint).geometry.r.get() - 10.0).abs() < 1e-3);
}

#[test]
fn invalidate_missing_link() {
    let mut defs = defs();
    defs.insert(radial("rg2", &[("href", "#later")]));
    let opt = Options::default();
    let mut cache = PaintCache::new();

    cache.paint("circle", "rg2", &defs, bbox(), &opt).unwrap();
    defs.insert(radial("later", &[("r", "0.2")]));
    assert_eq!(cache.invalidate_gradient("later"), 1);
    assert!(cache.is_stale("circle"));
}

#[test]
fn degenerate_is_cached() {
    let defs = defs();
    let opt = Options::default();
    let mut cache = PaintCache::new();

    let paint = cache.paint("circle", "flat", &defs, bbox(), &opt).unwrap();
    match paint {
        GradientPaint::Degenerate(degenerate) => {
            let last = degenerate.last_stop.unwrap();
            assert_eq!(last.color, Color::white());
        }
        GradientPaint::Source(_) => panic!("expected a degenerate gradient"),
    }

    cache.paint("circle", "flat", &defs, bbox(), &opt).unwrap();
    assert_eq!(cache.rebuild_count(), 1);
}

#[test]
fn missing_and_linear_gradients() {
    let defs = defs();
    let opt = Options::default();
    let mut cache = PaintCache::new();

    assert!(cache.paint("circle", "missing", &defs, bbox(), &opt).is_none());
    assert!(cache.paint("circle", "lg1", &defs, bbox(), &opt).is_none());
    assert!(cache.is_stale("circle"));
}

#[test]
fn shader_is_built() {
    let defs = defs();
    let opt = Options::default();
    let mut cache = PaintCache::new();

    let paint = cache.paint("circle", "rg1", &defs, bbox(), &opt).unwrap();
    assert!(source(&paint).shader().is_some());
    assert_eq!(source(&paint).stops.len(), 2);
}

#[test]
fn no_stops_no_shader() {
    let mut defs = Defs::new();
    defs.insert(radial("rg1", &[]));
    let opt = Options::default();
    let mut cache = PaintCache::new();

    let paint = cache.paint("circle", "rg1", &defs, bbox(), &opt).unwrap();
    assert!(source(&paint).shader().is_none());
}

#[test]
fn generations() {
    let mut cache = PaintCache::new();
    assert_eq!(cache.generation("circle"), 0);
    cache.invalidate("circle");
    cache.invalidate("circle");
    assert_eq!(cache.generation("circle"), 2);

    cache.remove("circle");
    assert_eq!(cache.generation("circle"), 0);
}

#[test]
fn remove_and_clear() {
    let defs = defs();
    let opt = Options::default();
    let mut cache = PaintCache::new();

    cache.paint("circle1", "rg1", &defs, bbox(), &opt).unwrap();
    cache.paint("circle2", "rg1", &defs, bbox(), &opt).unwrap();

    cache.remove("circle1");
    assert!(cache.is_stale("circle1"));
    assert!(!cache.is_stale("circle2"));

    cache.clear();
    assert!(cache.is_stale("circle2"));
    assert_eq!(cache.invalidate_gradient("rg1"), 0);
}
