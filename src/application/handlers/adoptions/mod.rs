//! Adoption workflow command handlers.
//!
//! Submitting and reviewing requests both read one store and
//! conditionally write another, so the two handlers share a
//! [`WorkflowLock`] that serializes those read-check-write sequences.
//! Without it, two concurrent approvals could both observe a pending
//! request and both flip the pet.

use std::sync::Arc;
use tokio::sync::Mutex;

mod review_request;
mod submit_request;

pub use review_request::{ReviewRequestCommand, ReviewRequestHandler};
pub use submit_request::{SubmitRequestCommand, SubmitRequestHandler};

/// Critical-section lock shared by the adoption handlers.
///
/// One lock for the whole workflow is coarser than per-pet keying but
/// correct, and the store is single-process anyway.
pub type WorkflowLock = Arc<Mutex<()>>;

/// Creates the lock both adoption handlers must share.
pub fn workflow_lock() -> WorkflowLock {
    Arc::new(Mutex::new(()))
}
