//! Per-card resolution state as seen by the presentation layer.
//!
//! A [`PreviewSlot`] belongs to one rendered card. Every time the card's URL
//! changes the caller starts a new resolution with [`PreviewSlot::begin`];
//! completions carrying an older [`Ticket`] are ignored, so a slow fetch for a
//! superseded URL can never overwrite the current card.

use crate::PreviewResult;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "preview", rename_all = "snake_case")]
pub enum PreviewOutcome {
    Pending,
    Resolved(PreviewResult),
    Failed,
}

impl PreviewOutcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, PreviewOutcome::Pending)
    }

    pub fn preview(&self) -> Option<&PreviewResult> {
        match self {
            PreviewOutcome::Resolved(preview) => Some(preview),
            PreviewOutcome::Pending | PreviewOutcome::Failed => None,
        }
    }
}

/// Proof that a resolution was started for a given URL generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
}

#[derive(Debug, Clone)]
pub struct PreviewSlot {
    url: Option<String>,
    generation: u64,
    outcome: PreviewOutcome,
}

impl Default for PreviewSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewSlot {
    pub fn new() -> Self {
        Self {
            url: None,
            generation: 0,
            outcome: PreviewOutcome::Pending,
        }
    }

    /// Switches the slot to `url` and marks it pending.
    pub fn begin(&mut self, url: impl Into<String>) -> Ticket {
        self.generation += 1;
        self.url = Some(url.into());
        self.outcome = PreviewOutcome::Pending;
        Ticket {
            generation: self.generation,
        }
    }

    /// Returns `false` and drops `outcome` when `ticket` has been superseded.
    pub fn complete(&mut self, ticket: Ticket, outcome: PreviewOutcome) -> bool {
        if ticket.generation != self.generation {
            debug!(
                stale = ticket.generation,
                current = self.generation,
                "Discarding superseded preview"
            );
            return false;
        }
        self.outcome = outcome;
        true
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.generation == self.generation
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn outcome(&self) -> &PreviewOutcome {
        &self.outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GenericPreview, VideoPreview};

    fn video() -> PreviewResult {
        PreviewResult::Video(VideoPreview {
            video_id: "dQw4w9WgXcQ".into(),
            thumbnail_url: "https://img.youtube.com/vi/dQw4w9WgXcQ/maxresdefault.jpg".into(),
        })
    }

    #[test]
    fn test_new_slot_is_pending() {
        let slot = PreviewSlot::new();
        assert!(slot.outcome().is_pending());
        assert_eq!(slot.url(), None);
    }

    #[test]
    fn test_complete_current_ticket() {
        let mut slot = PreviewSlot::new();
        let ticket = slot.begin("https://youtu.be/dQw4w9WgXcQ");

        assert!(slot.complete(ticket, PreviewOutcome::Resolved(video())));
        assert_eq!(slot.outcome().preview(), Some(&video()));
        assert_eq!(slot.url(), Some("https://youtu.be/dQw4w9WgXcQ"));
    }

    #[test]
    fn test_superseded_completion_is_dropped() {
        let mut slot = PreviewSlot::new();
        let old = slot.begin("https://www.example.com/old");
        let new = slot.begin("https://youtu.be/dQw4w9WgXcQ");

        assert!(!slot.is_current(old));
        assert!(!slot.complete(
            old,
            PreviewOutcome::Resolved(PreviewResult::Generic(GenericPreview::default()))
        ));
        assert!(slot.outcome().is_pending());

        assert!(slot.complete(new, PreviewOutcome::Failed));
        assert_eq!(slot.outcome(), &PreviewOutcome::Failed);
    }

    #[test]
    fn test_begin_resets_to_pending() {
        let mut slot = PreviewSlot::new();
        let ticket = slot.begin("https://www.example.com/");
        slot.complete(ticket, PreviewOutcome::Failed);

        slot.begin("https://www.example.com/again");
        assert!(slot.outcome().is_pending());
    }
}
