//! The reading service: submit an image, get an interpretation, keep it.

use tokio::sync::watch;
use tracing::{debug, error, info};
use uuid::Uuid;

use fortuna_client::ImageAnalyzer;
use fortuna_store::ReadingStore;
use fortuna_types::Reading;

use crate::error::{Error, Result};
use crate::state::ViewState;

/// Single public entry point combining the analysis client and the store.
///
/// Generic over [`ImageAnalyzer`] so tests can drive it with a scripted
/// mock. State transitions are published on a watch channel obtained via
/// [`subscribe`](ReadingService::subscribe); the service never assumes a
/// specific UI thread.
pub struct ReadingService<A> {
    analyzer: A,
    store: ReadingStore,
    state_tx: watch::Sender<ViewState>,
}

impl<A: ImageAnalyzer> ReadingService<A> {
    /// Create a service from an analyzer and an opened store.
    pub fn new(analyzer: A, store: ReadingStore) -> Self {
        let (state_tx, _) = watch::channel(ViewState::Idle);
        Self {
            analyzer,
            store,
            state_tx,
        }
    }

    /// Subscribe to view state transitions.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state_tx.subscribe()
    }

    /// The current view state.
    pub fn state(&self) -> ViewState {
        self.state_tx.borrow().clone()
    }

    /// Submit an image for analysis and persist the resulting reading.
    ///
    /// On success the history gains a new first entry and the state moves
    /// to [`ViewState::Result`]. On any failure nothing is persisted, the
    /// state moves to [`ViewState::Error`] with the user-facing message,
    /// and the typed error propagates to the caller.
    pub async fn submit(&mut self, image_bytes: &[u8]) -> Result<(String, Reading)> {
        match self.run_submit(image_bytes).await {
            Ok((text, reading)) => {
                info!(id = %reading.id, "reading created");
                self.set_state(ViewState::Result(text.clone()));
                Ok((text, reading))
            }
            Err(err) => {
                // Full diagnostics for developers; the category string is
                // all the presentation layer receives.
                error!(error = %err, "submit failed");
                self.set_state(ViewState::Error(err.user_message().to_string()));
                Err(err)
            }
        }
    }

    async fn run_submit(&mut self, image_bytes: &[u8]) -> Result<(String, Reading)> {
        if image_bytes.is_empty() {
            return Err(Error::InvalidInput);
        }

        self.set_state(ViewState::Loading);

        let text = self.analyzer.analyze(image_bytes).await?;
        let reading = self.store.save(&text, image_bytes)?;
        Ok((text, reading))
    }

    /// Return to [`ViewState::Idle`], discarding any displayed result or
    /// error.
    pub fn reset(&mut self) {
        debug!("state reset");
        self.set_state(ViewState::Idle);
    }

    /// The reading history, most recent first.
    pub fn list(&self) -> &[Reading] {
        self.store.list()
    }

    /// Look up a reading by id.
    pub fn get(&self, id: Uuid) -> Option<&Reading> {
        self.store.get(id)
    }

    /// Image bytes for a reading. A missing blob is recoverable; callers
    /// should render a placeholder.
    pub fn get_image(&self, reading: &Reading) -> Result<Vec<u8>> {
        Ok(self.store.get_image(reading)?)
    }

    /// Delete a reading and its image.
    pub fn delete(&mut self, id: Uuid) -> Result<()> {
        Ok(self.store.delete(id)?)
    }

    /// Remove unreferenced blob files; returns how many were removed.
    pub fn sweep_orphans(&self) -> Result<usize> {
        Ok(self.store.sweep_orphans()?)
    }

    fn set_state(&self, state: ViewState) {
        self.state_tx.send_replace(state);
    }
}
