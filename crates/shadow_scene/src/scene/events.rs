//! Event types and sinks for observing scene generation and illumination.
//!
//! This module defines [`SceneEvent`] and a small set of sinks to emit, filter, or
//! collect events while running [`crate::scene::Scene::generate_with_events`] or
//! [`crate::scene::Scene::illuminate_with_events`].
use crate::raster::CellRect;
use crate::scene::config::SceneConfig;
use crate::scene::illumination::CoverageStats;
use crate::scene::placement::PlacementMethod;

/// Describes events emitted while building or illuminating a scene.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum SceneEvent {
    /// Emitted before the first boulder is drawn.
    GenerationStarted {
        /// The configuration being generated.
        config: SceneConfig,
    },

    /// Emitted for every boulder that found a free origin.
    BoulderPlaced {
        /// Creation index of the boulder.
        index: usize,
        /// Footprint written into the surface raster.
        footprint: CellRect,
        /// Height in meters.
        height: f32,
        /// How the origin was chosen.
        method: PlacementMethod,
    },

    /// Random draws failed and the pool was scanned exhaustively.
    PlacementFallback {
        /// Creation index of the boulder.
        index: usize,
        /// Number of random draws that were rejected first.
        attempts: usize,
    },

    /// Emitted once all boulders are placed.
    GenerationFinished {
        boulder_count: usize,
        /// Fraction of raster cells covered by boulders.
        boulder_area_pct: f64,
    },

    /// Emitted when an illumination query starts.
    IlluminationStarted { incidence_angle_deg: f64 },

    /// A boulder's shadow rounded to zero pixels.
    ShadowSkipped { index: usize },

    /// A shadow reached past row 0 and its negative rows were folded onto row 0.
    ShadowClipped {
        index: usize,
        /// Shadow region before clamping.
        region: CellRect,
        /// Rows folded onto row 0.
        rows_folded: usize,
    },

    /// Emitted when the classified raster is complete.
    IlluminationFinished {
        incidence_angle_deg: f64,
        stats: CoverageStats,
    },
}

impl SceneEvent {
    pub fn kind(&self) -> SceneEventKind {
        match self {
            SceneEvent::GenerationStarted { .. } => SceneEventKind::GenerationStarted,
            SceneEvent::BoulderPlaced { .. } => SceneEventKind::BoulderPlaced,
            SceneEvent::PlacementFallback { .. } => SceneEventKind::PlacementFallback,
            SceneEvent::GenerationFinished { .. } => SceneEventKind::GenerationFinished,
            SceneEvent::IlluminationStarted { .. } => SceneEventKind::IlluminationStarted,
            SceneEvent::ShadowSkipped { .. } => SceneEventKind::ShadowSkipped,
            SceneEvent::ShadowClipped { .. } => SceneEventKind::ShadowClipped,
            SceneEvent::IlluminationFinished { .. } => SceneEventKind::IlluminationFinished,
        }
    }
}

/// Discriminant of [`SceneEvent`], used by sinks to opt out of noisy events.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneEventKind {
    GenerationStarted,
    BoulderPlaced,
    PlacementFallback,
    GenerationFinished,
    IlluminationStarted,
    ShadowSkipped,
    ShadowClipped,
    IlluminationFinished,
}

/// A generic event sink that accepts [`SceneEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: SceneEvent);

    /// Whether events of `kind` should be built and sent at all.
    fn wants(&self, _kind: SceneEventKind) -> bool {
        true
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: SceneEvent) {}

    #[inline]
    fn wants(&self, _kind: SceneEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(SceneEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(SceneEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(SceneEvent),
{
    #[inline]
    fn send(&mut self, event: SceneEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects events in a `Vec`, optionally restricted to some kinds.
#[derive(Default)]
pub struct VecSink {
    events: Vec<SceneEvent>,
    only: Option<Vec<SceneEventKind>>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect only events whose kind is listed.
    pub fn only(kinds: impl IntoIterator<Item = SceneEventKind>) -> Self {
        Self {
            events: Vec::new(),
            only: Some(kinds.into_iter().collect()),
        }
    }

    pub fn into_inner(self) -> Vec<SceneEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[SceneEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of collected events of `kind`.
    pub fn count(&self, kind: SceneEventKind) -> usize {
        self.events.iter().filter(|e| e.kind() == kind).count()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: SceneEvent) {
        if self.wants(event.kind()) {
            self.events.push(event);
        }
    }

    fn wants(&self, kind: SceneEventKind) -> bool {
        self.only.as_ref().is_none_or(|kinds| kinds.contains(&kind))
    }
}
