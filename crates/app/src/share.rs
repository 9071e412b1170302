//! Payment-request payloads handed to the share overlay.

use domain::{Money, OrderSnapshot, ParticipantName};
use serde::{Deserialize, Serialize};

/// A request for one participant's payment, rendered to an opaque
/// string for whatever shares it (QR overlay, clipboard).
///
/// Nothing in this crate interprets the string back; it is a one-way
/// hand-off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub order_id: String,
    pub outing_name: String,
    pub participant: ParticipantName,
    pub amount: Money,
    pub currency: String,
}

impl PaymentRequest {
    /// Builds a request asking one participant for an amount.
    pub fn for_participant(
        snapshot: &OrderSnapshot,
        participant: ParticipantName,
        amount: Money,
    ) -> Self {
        Self {
            order_id: snapshot
                .order_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
            outing_name: snapshot.outing_name.clone(),
            participant,
            amount,
            currency: "USD".to_string(),
        }
    }

    /// Builds one request per participant, splitting the grand total
    /// evenly with any remainder cents going to the earliest
    /// participants.
    pub fn even_split(snapshot: &OrderSnapshot) -> Vec<Self> {
        let amounts = snapshot
            .grand_total()
            .split_even(snapshot.participants.len());
        snapshot
            .participants
            .iter()
            .zip(amounts)
            .map(|(participant, amount)| {
                Self::for_participant(snapshot, participant.clone(), amount)
            })
            .collect()
    }

    /// Serializes the request into the string handed to the overlay.
    pub fn to_share_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
