//! Scripted upload widget - Implements UploadWidgetPort with queued outcomes
//!
//! Stands in for the third-party widget when no real one is available.
//! Each `open` is answered with the next queued outcome; when nothing is
//! queued the completion is held until [`ScriptedUploadWidget::complete_next`].

use std::collections::VecDeque;

use application::ports::{
    UploadCompletion, UploadOutcome, UploadWidgetOptions, UploadWidgetPort,
};
use parking_lot::Mutex;
use tracing::debug;

/// Upload widget driven by a script of outcomes
#[derive(Default)]
pub struct ScriptedUploadWidget {
    outcomes: Mutex<VecDeque<UploadOutcome>>,
    pending: Mutex<VecDeque<UploadCompletion>>,
    opened_with: Mutex<Vec<UploadWidgetOptions>>,
}

impl std::fmt::Debug for ScriptedUploadWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptedUploadWidget")
            .field("queued", &self.outcomes.lock().len())
            .field("pending", &self.pending.lock().len())
            .finish_non_exhaustive()
    }
}

impl ScriptedUploadWidget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the outcome for the next `open`
    pub fn push_outcome(&self, outcome: UploadOutcome) {
        self.outcomes.lock().push_back(outcome);
    }

    /// Deliver an outcome to the oldest held completion
    ///
    /// Returns false when no completion is waiting.
    pub fn complete_next(&self, outcome: UploadOutcome) -> bool {
        let Some(on_complete) = self.pending.lock().pop_front() else {
            return false;
        };
        on_complete(outcome);
        true
    }

    /// Number of completions waiting for an outcome
    pub fn pending(&self) -> usize {
        self.pending.lock().len()
    }

    /// Options of every `open` call so far
    pub fn opened_with(&self) -> Vec<UploadWidgetOptions> {
        self.opened_with.lock().clone()
    }
}

impl UploadWidgetPort for ScriptedUploadWidget {
    fn open(&self, options: &UploadWidgetOptions, on_complete: UploadCompletion) {
        self.opened_with.lock().push(options.clone());

        let next = self.outcomes.lock().pop_front();
        match next {
            Some(outcome) => {
                debug!(success = outcome.is_ok(), "Upload widget answered from script");
                on_complete(outcome);
            },
            None => {
                debug!("Upload widget holding completion");
                self.pending.lock().push_back(on_complete);
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use application::ports::UploadError;
    use domain::UploadedPhoto;

    use super::*;

    fn recorder() -> (Arc<Mutex<Vec<UploadOutcome>>>, impl Fn() -> UploadCompletion) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let make = move || -> UploadCompletion {
            let sink = sink.clone();
            Box::new(move |outcome| sink.lock().push(outcome))
        };
        (seen, make)
    }

    #[test]
    fn queued_outcome_completes_immediately() {
        let widget = ScriptedUploadWidget::new();
        let (seen, make) = recorder();
        widget.push_outcome(Ok(vec![UploadedPhoto::new("p/a", "a")]));

        widget.open(&UploadWidgetOptions::default(), make());

        assert_eq!(seen.lock().len(), 1);
        assert_eq!(widget.pending(), 0);
        assert_eq!(widget.opened_with().len(), 1);
    }

    #[test]
    fn completion_is_held_without_script() {
        let widget = ScriptedUploadWidget::new();
        let (seen, make) = recorder();

        widget.open(&UploadWidgetOptions::default(), make());
        assert!(seen.lock().is_empty());
        assert_eq!(widget.pending(), 1);

        assert!(widget.complete_next(Err(UploadError::Cancelled)));
        assert_eq!(seen.lock().as_slice(), &[Err(UploadError::Cancelled)]);
        assert!(!widget.complete_next(Err(UploadError::Cancelled)));
    }
}
