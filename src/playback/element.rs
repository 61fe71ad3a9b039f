use super::types::PlayError;

/// The playback element the controller drives.
///
/// Mirrors the subset of a browser media element the player uses: swapping
/// the source, starting (fallibly), pausing and seeking back to zero.
pub trait MediaElement {
    /// Replace the source and reset the position. Leaves the element paused.
    fn load(&mut self, src: &str);
    /// Drop the current source.
    fn unload(&mut self);
    /// Start or resume playback.
    fn play(&mut self) -> Result<(), PlayError>;
    fn pause(&mut self);
    /// Seek to the start of the current source without changing paused state.
    fn rewind(&mut self);
    fn is_paused(&self) -> bool;
}

/// Model of the page's single `<audio>` element.
///
/// Tracks the loaded source and paused state, and enforces the autoplay
/// policy: `play` is rejected until `unlock` records a user gesture.
#[derive(Debug, Default)]
pub struct DeckElement {
    src: Option<String>,
    paused: bool,
    unlocked: bool,
}

impl DeckElement {
    pub fn new() -> Self {
        Self {
            paused: true,
            ..Self::default()
        }
    }

    /// Record a user gesture; later `play` calls are allowed.
    pub fn unlock(&mut self) {
        self.unlocked = true;
    }

    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }
}

impl MediaElement for DeckElement {
    fn load(&mut self, src: &str) {
        self.src = Some(src.to_string());
        self.paused = true;
    }

    fn unload(&mut self) {
        self.src = None;
        self.paused = true;
    }

    fn play(&mut self) -> Result<(), PlayError> {
        if self.src.is_none() {
            return Err(PlayError::NoSource);
        }
        if !self.unlocked {
            return Err(PlayError::NotAllowed);
        }
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    // The page owns the playhead; there is no position to reset here.
    fn rewind(&mut self) {}

    fn is_paused(&self) -> bool {
        self.paused
    }
}
