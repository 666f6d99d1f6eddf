//! Plays timelines against the shared scene signal.
//!
//! Cues at offset zero are applied synchronously. Later cues become pending
//! handles held per channel in [`ChannelSlots`]; dropping a handle cancels
//! it, so replacing or clearing a channel's handles is the whole
//! cancellation story. In the browser a handle is a `gloo_timers` timeout.
//! Outside it there is no clock, so the deferred cue itself is held and
//! never fires.

#[cfg(test)]
#[path = "player_test.rs"]
mod player_test;

use std::collections::HashMap;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use gloo_timers::callback::Timeout;

use super::scene::Scene;
use super::timeline::{Channel, Cue, Timeline, project};

#[cfg(feature = "hydrate")]
type PendingCue = Timeout;

#[cfg(not(feature = "hydrate"))]
type PendingCue = Cue;

/// Pending cue handles grouped by channel.
///
/// Generic over the handle so the supersession rules hold for any handle
/// whose `Drop` cancels its cue.
pub struct ChannelSlots<H> {
    slots: HashMap<Channel, Vec<H>>,
}

impl<H> Default for ChannelSlots<H> {
    fn default() -> Self {
        Self { slots: HashMap::new() }
    }
}

impl<H> ChannelSlots<H> {
    /// Drop the handles of every channel a timeline on `channel` supersedes.
    pub fn supersede(&mut self, channel: Channel) {
        for superseded in channel.cancels() {
            let dropped = self.cancel(*superseded);
            if dropped > 0 {
                log::trace!("{channel:?} dropped {dropped} pending {superseded:?} cues");
            }
        }
    }

    /// Drop the handles held for `channel`, returning how many there were.
    pub fn cancel(&mut self, channel: Channel) -> usize {
        self.slots.remove(&channel).map_or(0, |handles| handles.len())
    }

    /// Hold `handles` for `channel`, dropping any it already held.
    pub fn insert(&mut self, channel: Channel, handles: Vec<H>) {
        self.slots.insert(channel, handles);
    }
}

#[derive(Clone, Copy)]
pub struct TransitionPlayer {
    scene: RwSignal<Scene>,
    pending: StoredValue<ChannelSlots<PendingCue>, LocalStorage>,
}

impl TransitionPlayer {
    pub fn new(scene: RwSignal<Scene>) -> Self {
        Self { scene, pending: StoredValue::new_local(ChannelSlots::default()) }
    }

    /// Start `timeline`, first dropping whatever its channel supersedes.
    pub fn play(&self, timeline: Timeline) {
        let channel = timeline.channel;
        log::debug!("{channel:?}: {} cues over {} ms", timeline.cues.len(), timeline.duration_ms());
        self.pending.update_value(|slots| slots.supersede(channel));

        if timeline.cues.iter().any(|c| c.at_ms == 0) {
            self.scene.update(|scene| project(scene, &timeline, 0));
        }

        let scene = self.scene;
        let handles: Vec<PendingCue> = timeline
            .cues
            .into_iter()
            .filter(|c| c.at_ms > 0)
            .map(|cue| schedule(scene, channel, cue))
            .collect();
        self.pending.update_value(|slots| slots.insert(channel, handles));
    }

    pub fn play_all(&self, timelines: Vec<Timeline>) {
        for timeline in timelines {
            self.play(timeline);
        }
    }

    /// Drop every pending cue on `channel`.
    pub fn cancel(&self, channel: Channel) {
        self.pending.update_value(|slots| {
            slots.cancel(channel);
        });
    }
}

#[cfg(feature = "hydrate")]
fn schedule(scene: RwSignal<Scene>, channel: Channel, cue: Cue) -> PendingCue {
    Timeout::new(cue.at_ms, move || {
        if scene.try_update(|s| s.apply(&cue.op)).is_none() {
            log::debug!("scene disposed; dropping {channel:?} cue at {} ms", cue.at_ms);
        }
    })
}

#[cfg(not(feature = "hydrate"))]
fn schedule(_scene: RwSignal<Scene>, _channel: Channel, cue: Cue) -> PendingCue {
    cue
}
