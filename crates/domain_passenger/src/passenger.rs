//! Passenger entity

use serde::{Deserialize, Serialize};

use core_kernel::{ClaimId, PaxId};

/// Registration details for a new passenger
///
/// Validated by [`crate::PassengerValidator`] before a [`Passenger`] is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPassenger {
    pub pax_id: PaxId,
    pub name: String,
    pub flight_no: String,
    pub contact: String,
}

impl NewPassenger {
    pub fn new(
        pax_id: PaxId,
        name: impl Into<String>,
        flight_no: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            pax_id,
            name: name.into(),
            flight_no: flight_no.into(),
            contact: contact.into(),
        }
    }
}

/// A registered passenger and their claim filing history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    pub pax_id: PaxId,
    pub name: String,
    /// Normalized flight number, e.g. `AI101`
    pub flight_no: String,
    pub contact: String,
    claims: Vec<ClaimId>,
}

impl Passenger {
    /// Builds a passenger from validated registration details
    pub(crate) fn from_registration(request: NewPassenger) -> Self {
        Self {
            pax_id: request.pax_id,
            name: request.name.trim().to_string(),
            flight_no: normalize_flight_no(&request.flight_no),
            contact: request.contact.trim().to_string(),
            claims: Vec::new(),
        }
    }

    /// Claims filed by this passenger, oldest first
    pub fn claims(&self) -> &[ClaimId] {
        &self.claims
    }

    pub fn has_claim(&self, claim: &ClaimId) -> bool {
        self.claims.contains(claim)
    }

    pub(crate) fn push_claim(&mut self, claim: ClaimId) {
        self.claims.push(claim);
    }
}

/// Uppercases and strips spaces, so `ai 101` and `AI101` are the same flight
pub fn normalize_flight_no(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}
