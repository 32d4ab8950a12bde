use crate::item::enums::item_state::ItemState;
use crate::item::errors::ItemError;
use crate::item::structs::item::Item;
use crate::item::structs::item_id::ItemId;
use crate::item::structs::progress_update::ProgressUpdate;

impl Item {
    /// A freshly submitted item: nothing transferred yet, queued for the protocol layer.
    pub fn new(id: ItemId, name: &str, file_size: u64) -> Item {
        Item {
            id,
            name: name.to_string(),
            state: ItemState::Queued,
            archived: false,
            downloaded: 0,
            uploaded: 0,
            ratio: 0.0,
            file_size,
            remaining: file_size,
            down_rate: 0,
            up_rate: 0,
            peers: Vec::new(),
            files: Vec::new(),
        }
    }

    pub fn with_state(mut self, state: ItemState) -> Item {
        self.state = state;
        self
    }

    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    pub fn refresh_ratio(&mut self) {
        self.ratio = if self.downloaded > 0 {
            self.uploaded as f64 / self.downloaded as f64
        } else {
            0.0
        };
    }

    /// The active state implied by the current counters and peers.
    pub fn derived_state(&self) -> ItemState {
        if self.is_complete() {
            return ItemState::Seeding;
        }
        if !self.peers.iter().any(|peer| peer.state.is_connected()) {
            return ItemState::Stalled;
        }
        ItemState::Downloading
    }

    /// Applies a progress report.
    ///
    /// Rejects the whole report without touching the item when a counter would move the
    /// wrong way. The state is only re-derived while the item is in an active state.
    pub fn apply_progress(&mut self, update: &ProgressUpdate) -> Result<(), ItemError> {
        if update.downloaded < self.downloaded {
            return Err(self.regression("downloaded", self.downloaded, update.downloaded));
        }
        if update.uploaded < self.uploaded {
            return Err(self.regression("uploaded", self.uploaded, update.uploaded));
        }
        if update.remaining > self.remaining {
            return Err(self.regression("remaining", self.remaining, update.remaining));
        }

        self.downloaded = update.downloaded;
        self.uploaded = update.uploaded;
        self.remaining = update.remaining;
        self.down_rate = update.down_rate;
        self.up_rate = update.up_rate;
        if let Some(peers) = &update.peers {
            self.peers = peers.clone();
        }
        if let Some(files) = &update.files {
            self.files = files.clone();
        }
        self.refresh_ratio();

        if self.state.is_active() {
            self.state = self.derived_state();
        }
        Ok(())
    }

    /// Zeroes the upload counter. Never called by action application.
    pub fn reset_uploaded(&mut self) {
        self.uploaded = 0;
        self.up_rate = 0;
        self.refresh_ratio();
    }

    fn regression(&self, counter: &'static str, previous: u64, reported: u64) -> ItemError {
        ItemError::CounterRegression {
            id: self.id,
            counter,
            previous,
            reported,
        }
    }
}
