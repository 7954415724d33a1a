use super::touch::{TouchRemoval, TouchTracker, TouchUpdate};
use super::types::{InputEvent, KeyEvent, TouchContact};
use crate::coords::{Vec2, Viewport};
use crate::debug::DebugLevel;
use crate::entity::{Entity, EntityFactory};
use crate::render;
use crate::surface::{self, Surface};

/// Tunables for input handling.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Entities added or removed per click/tap.
    pub spawn_batch: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self { spawn_batch: 10 }
    }
}

/// What a click or tap did to the entity collection.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BatchOutcome {
    /// Right of the midline: this many entities were appended.
    Spawned(usize),
    /// Left of the midline: entities were dropped from the front.
    /// `removed < requested` when the collection held fewer than a batch.
    Removed { removed: usize, requested: usize },
    /// Exactly on the midline: nothing changes.
    DeadZone,
}

/// Simulation state mutated by input and read by rendering.
///
/// Owns the viewport, the entity collection, tracked touches, the pointer
/// position and the debug level. All operations run to completion on the
/// caller's thread; the host serializes event delivery.
#[derive(Debug, Clone)]
pub struct SimulationState {
    viewport: Viewport,
    entities: Vec<Entity>,
    touches: TouchTracker,
    pointer: Vec2,
    debug: DebugLevel,
    config: SimulationConfig,
}

impl SimulationState {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_config(viewport, SimulationConfig::default())
    }

    pub fn with_config(viewport: Viewport, config: SimulationConfig) -> Self {
        Self {
            viewport,
            entities: Vec::new(),
            touches: TouchTracker::new(),
            pointer: Vec2::zero(),
            debug: DebugLevel::Off,
            config,
        }
    }

    #[inline]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[inline]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Mutable access for the page's update loop.
    #[inline]
    pub fn entities_mut(&mut self) -> &mut Vec<Entity> {
        &mut self.entities
    }

    #[inline]
    pub fn touches(&self) -> &TouchTracker {
        &self.touches
    }

    #[inline]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    #[inline]
    pub fn debug_level(&self) -> DebugLevel {
        self.debug
    }

    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    // ── event handlers ────────────────────────────────────────────────────

    /// Records the pointer position. No clamping: it may lie off-surface.
    #[inline]
    pub fn on_pointer_move(&mut self, position: Vec2) {
        self.pointer = position;
    }

    /// Spawns a batch right of the midline, removes one left of it.
    pub fn on_pointer_click<F: EntityFactory + ?Sized>(&mut self, position: Vec2, factory: &mut F) -> BatchOutcome {
        self.batch_at(position.x, factory)
    }

    /// Advances the debug level when the key press asks for it.
    ///
    /// Returns the new level, or `None` if the key has no effect.
    pub fn on_key(&mut self, event: &KeyEvent) -> Option<DebugLevel> {
        if !event.cycles_debug() {
            return None;
        }
        self.debug = self.debug.cycle();
        log::debug!("debug level -> {}", self.debug);
        Some(self.debug)
    }

    /// Applies the click rule per new contact, then starts tracking it.
    pub fn on_touch_start<F: EntityFactory + ?Sized>(
        &mut self,
        contacts: &[TouchContact],
        factory: &mut F,
    ) -> Vec<BatchOutcome> {
        contacts
            .iter()
            .map(|&contact| {
                let outcome = self.batch_at(contact.position.x, factory);
                self.touches.track(contact);
                outcome
            })
            .collect()
    }

    pub fn on_touch_move(&mut self, contacts: &[TouchContact]) -> Vec<TouchUpdate> {
        contacts
            .iter()
            .map(|&contact| {
                let update = self.touches.update(contact);
                if update == TouchUpdate::NoMatch {
                    log::trace!("touch move for untracked contact {}", contact.id);
                }
                update
            })
            .collect()
    }

    pub fn on_touch_end(&mut self, contacts: &[TouchContact]) -> Vec<TouchRemoval> {
        contacts
            .iter()
            .map(|contact| {
                let removal = self.touches.remove(contact.id);
                if removal == TouchRemoval::NoMatch {
                    log::trace!("touch end for untracked contact {}", contact.id);
                }
                removal
            })
            .collect()
    }

    /// Resizes the viewport and the surface buffer together.
    pub fn on_resize<S: Surface + ?Sized>(&mut self, width: u32, height: u32, surface: &mut S) {
        surface::resize(&mut self.viewport, surface, width, height);
    }

    /// Routes `event` to its handler.
    pub fn apply_event<S, F>(&mut self, event: &InputEvent, surface: &mut S, factory: &mut F)
    where
        S: Surface + ?Sized,
        F: EntityFactory + ?Sized,
    {
        match event {
            InputEvent::PointerMoved(p) => self.on_pointer_move(*p),
            InputEvent::PointerClicked(p) => {
                self.on_pointer_click(*p, factory);
            }
            InputEvent::Key(k) => {
                self.on_key(k);
            }
            InputEvent::TouchStarted(contacts) => {
                self.on_touch_start(contacts, factory);
            }
            InputEvent::TouchMoved(contacts) => {
                self.on_touch_move(contacts);
            }
            InputEvent::TouchEnded(contacts) => {
                self.on_touch_end(contacts);
            }
            InputEvent::Resized { width, height } => self.on_resize(*width, *height, surface),
        }
    }

    // ── rendering ─────────────────────────────────────────────────────────

    /// Draws every entity at the current debug level.
    pub fn draw_entities<S: Surface + ?Sized>(&self, surface: &mut S) {
        render::draw_entities(surface, &self.entities, self.debug);
    }

    // ── internals ─────────────────────────────────────────────────────────

    /// Shared click/tap rule. Both comparisons are strict, so `x == w2`
    /// does nothing.
    fn batch_at<F: EntityFactory + ?Sized>(&mut self, x: f32, factory: &mut F) -> BatchOutcome {
        let batch = self.config.spawn_batch;
        let w2 = self.viewport.w2();

        if x > w2 {
            self.entities.extend((0..batch).map(|_| factory.create()));
            log::debug!("spawned {batch} entities ({} total)", self.entities.len());
            BatchOutcome::Spawned(batch)
        } else if x < w2 {
            let removed = batch.min(self.entities.len());
            self.entities.drain(..removed);
            if removed < batch {
                log::debug!("removed {removed} of {batch} requested entities; collection exhausted");
            } else {
                log::debug!("removed {removed} entities ({} left)", self.entities.len());
            }
            BatchOutcome::Removed { removed, requested: batch }
        } else {
            log::trace!("click on midline x={x}; ignored");
            BatchOutcome::DeadZone
        }
    }
}
