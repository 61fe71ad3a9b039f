use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::library::Track;

use super::element::MediaElement;
use super::types::{PlaybackSnapshot, RepeatMode};

/// Playlist position, play/pause flag, shuffle and repeat mode, bound to
/// one media element.
///
/// Invariant: `current` is `Some(i)` with `i < tracks.len()` whenever the
/// playlist is non-empty, and `None` otherwise.
pub struct PlaybackController<E, R = StdRng> {
    tracks: Vec<Track>,
    current: Option<usize>,
    playing: bool,
    shuffle: bool,
    repeat_mode: RepeatMode,
    element: E,
    rng: R,
}

impl<E: MediaElement> PlaybackController<E, StdRng> {
    /// Create an empty, paused controller with repeat `all` and shuffle off.
    pub fn new(element: E) -> Self {
        Self::with_rng(element, StdRng::from_os_rng())
    }
}

impl<E: MediaElement, R: Rng> PlaybackController<E, R> {
    /// Like `new`, with an explicit random source for shuffle picks.
    pub fn with_rng(element: E, rng: R) -> Self {
        Self {
            tracks: Vec::new(),
            current: None,
            playing: false,
            shuffle: false,
            repeat_mode: RepeatMode::default(),
            element,
            rng,
        }
    }

    /// Replace the playlist. A non-empty list selects its first track.
    ///
    /// Never starts playback by itself; if the controller was already
    /// playing, the first track of the new list picks up.
    pub fn load(&mut self, tracks: Vec<Track>) {
        self.tracks = tracks;
        if self.tracks.is_empty() {
            self.current = None;
            self.playing = false;
        } else {
            self.current = Some(0);
        }
        self.sync_element();
    }

    /// Pause a running element; otherwise try to start the current track.
    ///
    /// Follows the element's paused state rather than `is_playing`.
    pub fn toggle_play(&mut self) {
        if !self.element.is_paused() {
            self.element.pause();
            self.playing = false;
            return;
        }
        if self.current.is_none() {
            self.playing = false;
            return;
        }
        match self.element.play() {
            Ok(()) => self.playing = true,
            Err(e) => {
                self.playing = false;
                debug!(error = %e, "play attempt rejected, staying paused");
            }
        }
    }

    /// Index `next` would move to. Returns 0 for an empty playlist.
    pub fn next_index(&mut self) -> usize {
        let n = self.tracks.len();
        if n == 0 {
            return 0;
        }
        if self.shuffle {
            return self.shuffled_index();
        }
        let i = self.current.unwrap_or(0);
        (i + 1) % n
    }

    /// Index `prev` would move to. Returns 0 for an empty playlist.
    pub fn prev_index(&mut self) -> usize {
        let n = self.tracks.len();
        if n == 0 {
            return 0;
        }
        if self.shuffle {
            return self.shuffled_index();
        }
        let i = self.current.unwrap_or(0);
        (i + n - 1) % n
    }

    // Uniform pick; a hit on the current track moves one step forward.
    fn shuffled_index(&mut self) -> usize {
        let n = self.tracks.len();
        let mut r = self.rng.random_range(0..n);
        if n > 1 && Some(r) == self.current {
            r = (r + 1) % n;
        }
        r
    }

    /// Move to the next track. No-op on an empty playlist.
    pub fn next(&mut self) -> usize {
        let i = self.next_index();
        if !self.tracks.is_empty() {
            self.set_current(i);
        }
        i
    }

    /// Move to the previous track. No-op on an empty playlist.
    pub fn prev(&mut self) -> usize {
        let i = self.prev_index();
        if !self.tracks.is_empty() {
            self.set_current(i);
        }
        i
    }

    /// Jump to `index` and start playing it. Out-of-range indexes are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.tracks.len() {
            debug!(index, len = self.tracks.len(), "ignoring out-of-range track selection");
            return false;
        }
        self.playing = true;
        self.set_current(index);
        true
    }

    /// React to the element reporting the end of the current track.
    pub fn on_track_end(&mut self) {
        let Some(i) = self.current else {
            return;
        };

        if self.repeat_mode == RepeatMode::One {
            self.replay();
            return;
        }

        if self.repeat_mode == RepeatMode::All || self.shuffle {
            let next = self.next_index();
            self.set_current(next);
            return;
        }

        if i + 1 < self.tracks.len() {
            self.set_current(i + 1);
        } else {
            self.element.pause();
            self.playing = false;
        }
    }

    pub fn set_shuffle(&mut self, shuffle: bool) {
        self.shuffle = shuffle;
    }

    pub fn set_repeat_mode(&mut self, mode: RepeatMode) {
        self.repeat_mode = mode;
    }

    /// Advance the repeat mode through `off -> one -> all -> off`.
    pub fn cycle_repeat_mode(&mut self) -> RepeatMode {
        self.repeat_mode = self.repeat_mode.cycled();
        self.repeat_mode
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.current.and_then(|i| self.tracks.get(i))
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    pub fn repeat_mode(&self) -> RepeatMode {
        self.repeat_mode
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn element_mut(&mut self) -> &mut E {
        &mut self.element
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            tracks: self.tracks().to_vec(),
            current_index: self.current_index(),
            current: self.current_track().cloned(),
            is_playing: self.is_playing(),
            shuffle: self.shuffle(),
            repeat_mode: self.repeat_mode(),
        }
    }

    fn set_current(&mut self, index: usize) {
        if self.current == Some(index) {
            // Same track again (single-track playlist): start it over.
            self.replay();
            return;
        }
        self.current = Some(index);
        self.sync_element();
    }

    fn replay(&mut self) {
        self.element.rewind();
        if self.playing {
            self.try_play();
        }
    }

    // Reload the element with the current source and resume if playing.
    fn sync_element(&mut self) {
        let src = self.current_track().map(|t| t.src.clone());
        match src {
            Some(src) => {
                self.element.load(&src);
                if self.playing {
                    self.try_play();
                }
            }
            None => self.element.unload(),
        }
    }

    fn try_play(&mut self) {
        if let Err(e) = self.element.play() {
            debug!(error = %e, "play attempt after track change rejected");
        }
    }
}
