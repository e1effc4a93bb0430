//! UpdateDonationHandler - command handler for correcting a donation amount.

use crate::domain::donation::{Donation, DonationPatch};
use crate::domain::foundation::{DomainError, DonationId};
use crate::ports::DynRecordStore;

/// Command to patch a donation's amount.
#[derive(Debug, Clone)]
pub struct UpdateDonationCommand {
    pub donation_id: DonationId,
    pub patch: DonationPatch,
}

/// Handler for updating donations.
pub struct UpdateDonationHandler {
    donations: DynRecordStore<Donation>,
}

impl UpdateDonationHandler {
    pub fn new(donations: DynRecordStore<Donation>) -> Self {
        Self { donations }
    }

    pub async fn handle(&self, cmd: UpdateDonationCommand) -> Result<Donation, DomainError> {
        let mut donation = self.donations.get(&cmd.donation_id).await?;
        donation.apply_patch(cmd.patch)?;
        self.donations.update(donation.clone()).await?;
        Ok(donation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryStore;
    use crate::domain::foundation::{ErrorCode, UserId};
    use std::sync::Arc;

    async fn seeded() -> (UpdateDonationHandler, DynRecordStore<Donation>, DonationId) {
        let store: DynRecordStore<Donation> = Arc::new(InMemoryStore::new());
        let donation = Donation::new(DonationId::new(), UserId::new(), 1000).unwrap();
        let id = *donation.id();
        store.insert(donation).await.unwrap();
        (UpdateDonationHandler::new(store.clone()), store, id)
    }

    #[tokio::test]
    async fn corrects_the_amount() {
        let (handler, store, id) = seeded().await;

        let updated = handler
            .handle(UpdateDonationCommand {
                donation_id: id,
                patch: DonationPatch {
                    amount_cents: Some(2000),
                },
            })
            .await
            .unwrap();

        assert_eq!(updated.amount_cents(), 2000);
        assert_eq!(store.get(&id).await.unwrap().amount_cents(), 2000);
    }

    #[tokio::test]
    async fn donor_and_timestamps_are_immutable() {
        let (handler, store, id) = seeded().await;
        let before = store.get(&id).await.unwrap();

        let updated = handler
            .handle(UpdateDonationCommand {
                donation_id: id,
                patch: DonationPatch {
                    amount_cents: Some(3000),
                },
            })
            .await
            .unwrap();

        assert_eq!(updated.donor_id(), before.donor_id());
        assert_eq!(updated.created_at(), before.created_at());
    }

    #[tokio::test]
    async fn non_positive_patch_amount_is_out_of_range() {
        let (handler, store, id) = seeded().await;

        let err = handler
            .handle(UpdateDonationCommand {
                donation_id: id,
                patch: DonationPatch {
                    amount_cents: Some(0),
                },
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::OutOfRange);
        assert_eq!(store.get(&id).await.unwrap().amount_cents(), 1000);
    }

    #[tokio::test]
    async fn unknown_donation_is_not_found() {
        let (handler, _, _) = seeded().await;

        let err = handler
            .handle(UpdateDonationCommand {
                donation_id: DonationId::new(),
                patch: DonationPatch::default(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
