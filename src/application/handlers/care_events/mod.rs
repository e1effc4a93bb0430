//! Pet care event command handlers.

mod schedule_event;
mod update_event;

pub use schedule_event::{ScheduleEventCommand, ScheduleEventHandler};
pub use update_event::{UpdateEventCommand, UpdateEventHandler};
