//! RecordDonationHandler - command handler for recording a donation.

use crate::domain::donation::Donation;
use crate::domain::foundation::{DomainError, DonationId, UserId};
use crate::ports::DynRecordStore;

/// Command to record a donation.
#[derive(Debug, Clone)]
pub struct RecordDonationCommand {
    pub donor_id: UserId,
    pub amount_cents: i64,
}

/// Handler for recording donations.
///
/// Unlike every other foreign key, `donor_id` is recorded without an
/// existence check. Donations can outlive (or predate) the donor's
/// account; the asymmetry is deliberate and pinned by tests.
pub struct RecordDonationHandler {
    donations: DynRecordStore<Donation>,
}

impl RecordDonationHandler {
    pub fn new(donations: DynRecordStore<Donation>) -> Self {
        Self { donations }
    }

    pub async fn handle(&self, cmd: RecordDonationCommand) -> Result<Donation, DomainError> {
        let donation = Donation::new(DonationId::new(), cmd.donor_id, cmd.amount_cents)?;
        self.donations.insert(donation.clone()).await?;
        Ok(donation)
    }
}
