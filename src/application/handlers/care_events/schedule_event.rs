//! ScheduleEventHandler - command handler for creating a care event.

use crate::application::reference::require_exists;
use crate::domain::care_event::PetCareEvent;
use crate::domain::foundation::{DomainError, EventId, Timestamp, UserId};
use crate::domain::user::User;
use crate::ports::DynRecordStore;

/// Command to schedule a pet care event.
#[derive(Debug, Clone)]
pub struct ScheduleEventCommand {
    pub title: String,
    pub description: String,
    pub date_time: Timestamp,
    pub location: String,
    pub organizer_id: UserId,
}

/// Handler for scheduling care events.
///
/// The organizer must be a known user; nothing is written until that
/// reference resolves.
pub struct ScheduleEventHandler {
    events: DynRecordStore<PetCareEvent>,
    users: DynRecordStore<User>,
}

impl ScheduleEventHandler {
    pub fn new(events: DynRecordStore<PetCareEvent>, users: DynRecordStore<User>) -> Self {
        Self { events, users }
    }

    pub async fn handle(&self, cmd: ScheduleEventCommand) -> Result<PetCareEvent, DomainError> {
        require_exists(self.users.as_ref(), &cmd.organizer_id, "organizer_id").await?;

        let event = PetCareEvent::new(
            EventId::new(),
            cmd.title,
            cmd.description,
            cmd.date_time,
            cmd.location,
            cmd.organizer_id,
        )?;
        self.events.insert(event.clone()).await?;

        Ok(event)
    }
}
