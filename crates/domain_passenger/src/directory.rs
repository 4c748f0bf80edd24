//! Passenger directory
//!
//! Each passenger record sits behind its own mutex so that claim filings for
//! the same passenger are serialized, while the id map is guarded by a
//! reader-writer lock held only for lookups and inserts.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::info;

use core_kernel::ports::DomainPort;
use core_kernel::{ClaimId, ClaimantPort, PaxId, PortError};
use crate::error::PassengerError;
use crate::passenger::{NewPassenger, Passenger};
use crate::validation::PassengerValidator;

type PassengerHandle = Arc<Mutex<Passenger>>;

/// Thread-safe store of passenger records
#[derive(Default)]
pub struct PassengerDirectory {
    passengers: RwLock<HashMap<PaxId, PassengerHandle>>,
}

impl PassengerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a passenger
    ///
    /// # Errors
    ///
    /// * `ValidationFailed` if the details break a validation rule
    /// * `DuplicatePassenger` if `pax_id` is already registered
    pub fn register(
        &self,
        pax_id: PaxId,
        name: impl Into<String>,
        flight_no: impl Into<String>,
        contact: impl Into<String>,
    ) -> Result<Passenger, PassengerError> {
        self.register_passenger(NewPassenger::new(pax_id, name, flight_no, contact))
    }

    /// Registers a passenger from a prepared request
    pub fn register_passenger(&self, request: NewPassenger) -> Result<Passenger, PassengerError> {
        let validation = PassengerValidator::validate(&request);
        if !validation.is_valid {
            return Err(PassengerError::validation_failed(validation.errors));
        }
        for warning in &validation.warnings {
            tracing::warn!(pax_id = %request.pax_id, %warning, "Passenger registered with warning");
        }

        let mut passengers = self.passengers.write();
        if passengers.contains_key(&request.pax_id) {
            return Err(PassengerError::DuplicatePassenger(request.pax_id));
        }

        let passenger = Passenger::from_registration(request);
        passengers.insert(passenger.pax_id.clone(), Arc::new(Mutex::new(passenger.clone())));

        info!(pax_id = %passenger.pax_id, flight_no = %passenger.flight_no, "Passenger registered");
        Ok(passenger)
    }

    /// Appends a claim to the passenger's filing history
    pub fn attach_claim(&self, pax_id: &PaxId, claim: ClaimId) -> Result<(), PassengerError> {
        let handle = self.handle(pax_id)?;
        let mut passenger = handle.lock();
        if passenger.has_claim(&claim) {
            return Err(PassengerError::ClaimAlreadyAttached {
                pax: pax_id.clone(),
                claim,
            });
        }

        info!(pax_id = %pax_id, claim_id = %claim, "Claim attached to passenger");
        passenger.push_claim(claim);
        Ok(())
    }

    /// Claims filed by the passenger, in filing order
    pub fn claims_of(&self, pax_id: &PaxId) -> Result<Vec<ClaimId>, PassengerError> {
        let handle = self.handle(pax_id)?;
        let passenger = handle.lock();
        Ok(passenger.claims().to_vec())
    }

    /// Point-in-time copy of the passenger record
    pub fn get(&self, pax_id: &PaxId) -> Result<Passenger, PassengerError> {
        let handle = self.handle(pax_id)?;
        let passenger = handle.lock();
        Ok(passenger.clone())
    }

    pub fn contains(&self, pax_id: &PaxId) -> bool {
        self.passengers.read().contains_key(pax_id)
    }

    pub fn len(&self) -> usize {
        self.passengers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn handle(&self, pax_id: &PaxId) -> Result<PassengerHandle, PassengerError> {
        self.passengers
            .read()
            .get(pax_id)
            .cloned()
            .ok_or_else(|| PassengerError::PassengerNotFound(pax_id.clone()))
    }
}

impl std::fmt::Debug for PassengerDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PassengerDirectory")
            .field("passengers", &self.len())
            .finish()
    }
}

impl DomainPort for PassengerDirectory {}

impl ClaimantPort for PassengerDirectory {
    fn attach_claim(&self, claimant: &PaxId, claim: &ClaimId) -> Result<(), PortError> {
        PassengerDirectory::attach_claim(self, claimant, claim.clone()).map_err(PortError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::ErrorKind;

    fn pax(s: &str) -> PaxId {
        PaxId::new(s).unwrap()
    }

    fn claim(s: &str) -> ClaimId {
        ClaimId::new(s).unwrap()
    }

    #[test]
    fn test_register_and_get() {
        let directory = PassengerDirectory::new();
        directory.register(pax("P001"), "Seshanth", "AI101", "9876543210").unwrap();

        let passenger = directory.get(&pax("P001")).unwrap();
        assert_eq!(passenger.name, "Seshanth");
        assert!(directory.contains(&pax("P001")));
    }

    #[test]
    fn test_duplicate_registration_keeps_original() {
        let directory = PassengerDirectory::new();
        directory.register(pax("P001"), "Seshanth", "AI101", "9876543210").unwrap();

        let err = directory
            .register(pax("P001"), "Someone Else", "BA200", "1234567")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateId);
        assert_eq!(directory.get(&pax("P001")).unwrap().name, "Seshanth");
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_invalid_registration_not_stored() {
        let directory = PassengerDirectory::new();
        let err = directory.register(pax("P001"), "", "AI101", "9876543210").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(directory.is_empty());
    }

    #[test]
    fn test_claims_in_filing_order() {
        let directory = PassengerDirectory::new();
        directory.register(pax("P001"), "Seshanth", "AI101", "9876543210").unwrap();
        directory.attach_claim(&pax("P001"), claim("CL002")).unwrap();
        directory.attach_claim(&pax("P001"), claim("CL001")).unwrap();

        assert_eq!(
            directory.claims_of(&pax("P001")).unwrap(),
            vec![claim("CL002"), claim("CL001")]
        );
    }

    #[test]
    fn test_attach_to_unknown_passenger() {
        let directory = PassengerDirectory::new();
        let err = directory.attach_claim(&pax("P404"), claim("CL001")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_port_maps_errors() {
        let directory = PassengerDirectory::new();
        let port: &dyn ClaimantPort = &directory;
        let err = port.attach_claim(&pax("P001"), &claim("CL001")).unwrap_err();
        assert!(matches!(err, PortError::NotFound { .. }));

        directory.register(pax("P001"), "Seshanth", "AI101", "9876543210").unwrap();
        port.attach_claim(&pax("P001"), &claim("CL001")).unwrap();
        let err = port.attach_claim(&pax("P001"), &claim("CL001")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateId);
    }
}
