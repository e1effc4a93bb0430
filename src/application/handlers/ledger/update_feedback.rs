//! UpdateFeedbackHandler - command handler for patching feedback.

use crate::domain::feedback::{Feedback, FeedbackPatch};
use crate::domain::foundation::{DomainError, FeedbackId};
use crate::ports::DynRecordStore;

/// Command to patch feedback text and/or rating.
///
/// The author and target links are fixed at creation.
#[derive(Debug, Clone)]
pub struct UpdateFeedbackCommand {
    pub feedback_id: FeedbackId,
    pub patch: FeedbackPatch,
}

/// Handler for updating feedback.
pub struct UpdateFeedbackHandler {
    feedback: DynRecordStore<Feedback>,
}

impl UpdateFeedbackHandler {
    pub fn new(feedback: DynRecordStore<Feedback>) -> Self {
        Self { feedback }
    }

    pub async fn handle(&self, cmd: UpdateFeedbackCommand) -> Result<Feedback, DomainError> {
        let mut feedback = self.feedback.get(&cmd.feedback_id).await?;
        feedback.apply_patch(cmd.patch)?;
        self.feedback.update(feedback.clone()).await?;
        Ok(feedback)
    }
}
