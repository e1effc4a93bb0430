//! Application handlers.
//!
//! One command or query handler per operation, grouped by entity. The
//! `records` module holds the generic fetch/list/remove handlers that
//! behave identically for every store; the other modules hold the
//! operations with entity-specific logic.

pub mod adoptions;
pub mod care_events;
pub mod ledger;
pub mod pets;
pub mod records;
pub mod users;

pub use adoptions::{
    workflow_lock, ReviewRequestCommand, ReviewRequestHandler, SubmitRequestCommand,
    SubmitRequestHandler, WorkflowLock,
};
pub use care_events::{
    ScheduleEventCommand, ScheduleEventHandler, UpdateEventCommand, UpdateEventHandler,
};
pub use ledger::{
    LeaveFeedbackCommand, LeaveFeedbackHandler, RecordDonationCommand, RecordDonationHandler,
    UpdateDonationCommand, UpdateDonationHandler, UpdateFeedbackCommand, UpdateFeedbackHandler,
};
pub use pets::{
    CreatePetCommand, CreatePetHandler, ListPetsHandler, ListPetsQuery, UpdatePetCommand,
    UpdatePetHandler,
};
pub use records::{GetRecordHandler, ListRecordsHandler, ListRecordsQuery, RemoveRecordHandler};
pub use users::{
    LoginResult, LoginUserCommand, LoginUserHandler, RegisterUserCommand, RegisterUserHandler,
    RemoveUserCommand, RemoveUserHandler, UpdateUserCommand, UpdateUserHandler,
};
