use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use crate::config::Settings;
use crate::library::{self, Track};
use crate::playback::{DeckElement, PlaybackController, RepeatMode};
use crate::votes::{Ballot, JsonlVoteStore, VoteStore};

pub type Player = PlaybackController<DeckElement>;
pub type PlayerHandle = Arc<Mutex<Player>>;
pub type BallotHandle = Arc<Mutex<Ballot>>;

/// Shared service state; clones share the same player, ballot and store.
#[derive(Clone)]
pub struct App {
    pub settings: Arc<Settings>,
    pub player: PlayerHandle,
    pub ballot: BallotHandle,
    pub store: Arc<dyn VoteStore>,
}

impl App {
    /// Build state from settings with the JSON-lines vote store they name.
    pub fn new(settings: Settings) -> Self {
        let store = Arc::new(JsonlVoteStore::new(settings.votes.store_path.clone()));
        debug!(path = %store.path().display(), "vote store configured");
        Self::with_store(settings, store)
    }

    pub fn with_store(settings: Settings, store: Arc<dyn VoteStore>) -> Self {
        let mut player = PlaybackController::new(DeckElement::new());
        player.set_shuffle(settings.playback.shuffle);
        player.set_repeat_mode(RepeatMode::from(settings.playback.repeat_mode));

        let ballot = Ballot::new(settings.votes.single_submission);

        Self {
            settings: Arc::new(settings),
            player: Arc::new(Mutex::new(player)),
            ballot: Arc::new(Mutex::new(ballot)),
            store,
        }
    }

    /// List the audio directory as configured.
    pub fn scan_catalog(&self) -> Vec<Track> {
        library::scan(&self.settings.library.dir, &self.settings.library)
    }

    /// Re-list the catalog and hand it to the player. Returns the track count.
    pub fn reload_player(&self) -> usize {
        let tracks = self.scan_catalog();
        let count = tracks.len();
        self.player().load(tracks);
        count
    }

    /// Lock the player. A poisoned lock is recovered: every controller
    /// transition leaves the state consistent.
    pub fn player(&self) -> MutexGuard<'_, Player> {
        self.player.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn ballot(&self) -> MutexGuard<'_, Ballot> {
        self.ballot.lock().unwrap_or_else(|e| e.into_inner())
    }
}
