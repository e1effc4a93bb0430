//! UpdateEventHandler - command handler for patching a care event.

use crate::domain::care_event::{CareEventPatch, PetCareEvent};
use crate::domain::foundation::{DomainError, EventId};
use crate::ports::DynRecordStore;

/// Command to patch a care event's mutable fields.
///
/// The organizer link is fixed at creation and not patchable.
#[derive(Debug, Clone)]
pub struct UpdateEventCommand {
    pub event_id: EventId,
    pub patch: CareEventPatch,
}

/// Handler for updating care events.
pub struct UpdateEventHandler {
    events: DynRecordStore<PetCareEvent>,
}

impl UpdateEventHandler {
    pub fn new(events: DynRecordStore<PetCareEvent>) -> Self {
        Self { events }
    }

    pub async fn handle(&self, cmd: UpdateEventCommand) -> Result<PetCareEvent, DomainError> {
        let mut event = self.events.get(&cmd.event_id).await?;
        event.apply_patch(cmd.patch)?;
        self.events.update(event.clone()).await?;
        Ok(event)
    }
}
