use std::collections::BTreeSet;

use fanloop_model::{Rect, VisibleFrame};
use tracing::{debug, trace};

use crate::visibility::{VisibilityPolicy, VisibilitySelector};

/// Side effects the UI collaborator must carry out after a visibility
/// change. Pauses are applied before the play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackCommand<I: Ord> {
    pub play: Option<I>,
    pub pause: BTreeSet<I>,
}

impl<I: Ord> Default for PlaybackCommand<I> {
    fn default() -> Self {
        Self {
            play: None,
            pause: BTreeSet::new(),
        }
    }
}

impl<I: Ord> PlaybackCommand<I> {
    /// No-op command.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.play.is_none() && self.pause.is_empty()
    }
}

/// Keeps at most one cell playing as the feed scrolls.
///
/// The only state is the identifier that currently owns playback; every
/// decision is derived from the latest frame snapshot plus that field, so
/// it is safe to call on every scroll frame.
#[derive(Debug, Clone)]
pub struct PlaybackCoordinator<I> {
    selector: VisibilitySelector,
    currently_playing: Option<I>,
}

impl<I> Default for PlaybackCoordinator<I> {
    fn default() -> Self {
        Self::new(VisibilityPolicy::default())
    }
}

impl<I> PlaybackCoordinator<I> {
    pub fn new(policy: VisibilityPolicy) -> Self {
        Self {
            selector: VisibilitySelector::new(policy),
            currently_playing: None,
        }
    }

    pub fn policy(&self) -> VisibilityPolicy {
        self.selector.policy()
    }
}

impl<I: Clone + Ord + std::fmt::Debug> PlaybackCoordinator<I> {
    pub fn current(&self) -> Option<&I> {
        self.currently_playing.as_ref()
    }

    /// Re-evaluates the winner for a fresh snapshot.
    ///
    /// Returns an empty command when the winner is unchanged. Otherwise
    /// every displayed non-winner and the previous winner are paused and
    /// the new winner (if any) is played.
    pub fn on_visibility_changed(
        &mut self,
        frames: &[VisibleFrame<I>],
        viewport: Rect,
    ) -> PlaybackCommand<I> {
        let winner = self.selector.select(frames, viewport);

        if winner == self.currently_playing {
            trace!(?winner, "playback winner unchanged");
            return PlaybackCommand::none();
        }

        let mut pause: BTreeSet<I> = frames
            .iter()
            .map(|f| f.id.clone())
            .filter(|id| Some(id) != winner.as_ref())
            .collect();
        if let Some(previous) = self.currently_playing.take() {
            if Some(&previous) != winner.as_ref() {
                pause.insert(previous);
            }
        }

        debug!(?winner, paused = pause.len(), "playback winner changed");
        self.currently_playing = winner.clone();

        PlaybackCommand {
            play: winner,
            pause,
        }
    }

    /// Forgets the current winner, returning the command that stops it.
    pub fn reset(&mut self) -> PlaybackCommand<I> {
        let mut command = PlaybackCommand::none();
        if let Some(previous) = self.currently_playing.take() {
            debug!(?previous, "playback coordinator reset");
            command.pause.insert(previous);
        }
        command
    }
}
