//! Feedback and donation ledger handlers.
//!
//! Both record types are append-mostly: created once, with only their
//! payload fields (text/rating, amount) patchable afterwards.

mod leave_feedback;
mod record_donation;
mod update_donation;
mod update_feedback;

pub use leave_feedback::{LeaveFeedbackCommand, LeaveFeedbackHandler};
pub use record_donation::{RecordDonationCommand, RecordDonationHandler};
pub use update_donation::{UpdateDonationCommand, UpdateDonationHandler};
pub use update_feedback::{UpdateFeedbackCommand, UpdateFeedbackHandler};
