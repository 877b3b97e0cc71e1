//! Copy acknowledgment for the raw-data viewer.
//!
//! A successful copy flips the copy button into a short-lived "copied"
//! state that reverts on its own after [`FEEDBACK_SECS`]. The decision
//! logic lives here so it can be tested; the widget recoloring and the
//! FLTK timeout are glue in `app::state`.

use super::error::AppError;

/// Seconds the acknowledgment stays on the button before reverting.
pub const FEEDBACK_SECS: f64 = 2.0;

/// Button label while the acknowledgment window is active.
pub const FEEDBACK_LABEL: &str = "✓ Copiado!";

/// Blocking fallback shown when the clipboard write fails.
pub const COPY_FAILED_MESSAGE: &str = "Erro ao copiar. Use Ctrl+C manualmente.";

/// Tracks the acknowledgment window. Each copy gets a fresh sequence
/// number; a revert timer only fires through if it carries the latest one,
/// so starting a second copy mid-window cannot flicker the label.
#[derive(Debug, Default)]
pub struct CopyFeedback {
    seq: u32,
    active: bool,
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful copy; returns the sequence number the revert
    /// timer must present to be honored.
    pub fn acknowledge(&mut self) -> u32 {
        self.seq = self.seq.wrapping_add(1);
        self.active = true;
        self.seq
    }

    /// A revert timer fired. Returns whether the button should revert.
    pub fn expire(&mut self, seq: u32) -> bool {
        if self.active && seq == self.seq {
            self.active = false;
            true
        } else {
            false
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// What the UI should do after a copy attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Show the acknowledgment and schedule a revert carrying this seq.
    Acknowledged(u32),
    /// Leave the button untouched and tell the user to copy manually.
    Failed,
}

/// Decide the UI reaction to a copy attempt. The acknowledgment only ever
/// appears for writes that went through.
pub fn copy_outcome(feedback: &mut CopyFeedback, wrote: Result<(), AppError>) -> CopyOutcome {
    match wrote {
        Ok(()) => CopyOutcome::Acknowledged(feedback.acknowledge()),
        Err(err) => {
            eprintln!("Clipboard copy failed: {err}");
            CopyOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successful_copy_acknowledges() {
        let mut feedback = CopyFeedback::new();
        let outcome = copy_outcome(&mut feedback, Ok(()));
        assert!(matches!(outcome, CopyOutcome::Acknowledged(_)));
        assert!(feedback.is_active());
    }

    #[test]
    fn test_revert_fires_once() {
        let mut feedback = CopyFeedback::new();
        let seq = feedback.acknowledge();
        assert!(feedback.expire(seq));
        assert!(!feedback.expire(seq));
        assert!(!feedback.is_active());
    }

    #[test]
    fn test_stale_timer_is_ignored_after_new_copy() {
        let mut feedback = CopyFeedback::new();
        let first = feedback.acknowledge();
        let second = feedback.acknowledge();
        // The first window's timer fires after the second copy started.
        assert!(!feedback.expire(first));
        assert!(feedback.is_active());
        assert!(feedback.expire(second));
    }

    #[test]
    fn test_failed_copy_never_acknowledges() {
        let mut feedback = CopyFeedback::new();
        let outcome = copy_outcome(
            &mut feedback,
            Err(AppError::Clipboard("write rejected".to_string())),
        );
        assert_eq!(outcome, CopyOutcome::Failed);
        assert!(!feedback.is_active());
        // A later revert tick must not flip anything either.
        assert!(!feedback.expire(0));
    }
}
