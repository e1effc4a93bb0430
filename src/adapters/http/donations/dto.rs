//! HTTP DTOs for donation endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::donation::{Donation, DonationPatch};
use crate::domain::foundation::UserId;

/// Request to record a donation. The donor is recorded as reported.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordDonationRequest {
    pub donor_id: UserId,
    pub amount_cents: i64,
}

/// Request to correct a donation amount.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDonationRequest {
    #[serde(default)]
    pub amount_cents: Option<i64>,
}

impl From<UpdateDonationRequest> for DonationPatch {
    fn from(req: UpdateDonationRequest) -> Self {
        DonationPatch {
            amount_cents: req.amount_cents,
        }
    }
}

/// Query parameters for the donation listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListDonationsParams {
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Donation view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct DonationResponse {
    pub id: String,
    pub donor_id: String,
    pub amount_cents: i64,
    pub created_at: String,
}

impl From<&Donation> for DonationResponse {
    fn from(donation: &Donation) -> Self {
        Self {
            id: donation.id().to_string(),
            donor_id: donation.donor_id().to_string(),
            amount_cents: donation.amount_cents(),
            created_at: donation.created_at().as_datetime().to_rfc3339(),
        }
    }
}

impl From<Donation> for DonationResponse {
    fn from(donation: Donation) -> Self {
        Self::from(&donation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::DonationId;

    #[test]
    fn amounts_stay_integer_cents_in_json() {
        let donation = Donation::new(DonationId::new(), UserId::new(), 2500).unwrap();
        let json = serde_json::to_string(&DonationResponse::from(&donation)).unwrap();
        assert!(json.contains("\"amount_cents\":2500"));
    }
}
