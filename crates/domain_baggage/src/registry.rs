//! Bag registry
//!
//! The registry owns every bag record and enforces a single bag per tag.
//! Each bag sits behind its own mutex, so scans of different bags proceed in
//! parallel while scans of the same bag are serialized. The tag map itself is
//! behind a reader-writer lock that is only held long enough to look up or
//! insert a handle; it is never held while a bag lock is being acquired.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use rust_decimal::Decimal;
use tracing::info;

use core_kernel::{BagTag, Clock, PaxId, SystemClock, Weight};
use crate::baggage::Baggage;
use crate::checkpoint::Checkpoint;
use crate::error::BaggageError;

type BagHandle = Arc<Mutex<Baggage>>;

#[derive(Default)]
struct RegistryState {
    bags: HashMap<BagTag, BagHandle>,
    // (tag, owner) in registration order
    owners: Vec<(BagTag, PaxId)>,
}

/// Thread-safe store of bag records
pub struct BaggageRegistry {
    state: RwLock<RegistryState>,
    clock: Arc<dyn Clock>,
}

impl BaggageRegistry {
    /// Creates an empty registry driven by the system clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty registry with an injected clock
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: RwLock::new(RegistryState::default()),
            clock,
        }
    }

    /// Registers a new bag
    ///
    /// # Errors
    ///
    /// * `InvalidWeight` if `weight` is negative
    /// * `DuplicateTag` if the tag is already registered
    pub fn register(&self, tag: BagTag, weight: Decimal, owner: PaxId) -> Result<Baggage, BaggageError> {
        let weight = Weight::from_kg(weight)?;

        let mut state = self.state.write();
        if state.bags.contains_key(&tag) {
            return Err(BaggageError::DuplicateTag(tag));
        }

        let bag = Baggage::new(tag.clone(), weight, owner.clone(), self.clock.now());
        state.bags.insert(tag.clone(), Arc::new(Mutex::new(bag.clone())));
        state.owners.push((tag, owner));

        info!(bag_tag = %bag.tag, pax_id = %bag.owner, weight = %bag.weight, "Bag registered");
        Ok(bag)
    }

    /// Records a scan of the bag at `checkpoint_name` and returns the new checkpoint
    pub fn record_movement(&self, tag: &BagTag, checkpoint_name: &str) -> Result<Checkpoint, BaggageError> {
        let handle = self.handle(tag)?;
        let mut bag = handle.lock();
        let checkpoint = bag.record_scan(checkpoint_name, self.clock.now())?;

        info!(bag_tag = %tag, checkpoint = %checkpoint.name(), "Bag moved");
        Ok(checkpoint)
    }

    /// Appends a checkpoint captured by an external scanner
    pub fn record_checkpoint(&self, tag: &BagTag, checkpoint: Checkpoint) -> Result<(), BaggageError> {
        let handle = self.handle(tag)?;
        let mut bag = handle.lock();
        let name = checkpoint.name().to_string();
        bag.record_checkpoint(checkpoint)?;

        info!(bag_tag = %tag, checkpoint = %name, "Recorded external scan");
        Ok(())
    }

    /// Current status of the bag
    pub fn locate(&self, tag: &BagTag) -> Result<String, BaggageError> {
        let handle = self.handle(tag)?;
        let bag = handle.lock();
        Ok(bag.status().to_string())
    }

    /// Ordered scan history of the bag
    pub fn route_history(&self, tag: &BagTag) -> Result<Vec<Checkpoint>, BaggageError> {
        let handle = self.handle(tag)?;
        let bag = handle.lock();
        Ok(bag.route().to_vec())
    }

    /// Point-in-time copy of the bag record
    pub fn snapshot(&self, tag: &BagTag) -> Result<Baggage, BaggageError> {
        let handle = self.handle(tag)?;
        let bag = handle.lock();
        Ok(bag.clone())
    }

    /// Tags of every bag owned by `owner`, in registration order
    pub fn bags_of(&self, owner: &PaxId) -> Vec<BagTag> {
        self.state
            .read()
            .owners
            .iter()
            .filter(|(_, o)| o == owner)
            .map(|(tag, _)| tag.clone())
            .collect()
    }

    pub fn contains(&self, tag: &BagTag) -> bool {
        self.state.read().bags.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.state.read().bags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn handle(&self, tag: &BagTag) -> Result<BagHandle, BaggageError> {
        self.state
            .read()
            .bags
            .get(tag)
            .cloned()
            .ok_or_else(|| BaggageError::BagNotFound(tag.clone()))
    }
}

impl Default for BaggageRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BaggageRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BaggageRegistry")
            .field("bags", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::ErrorKind;
    use rust_decimal_macros::dec;

    fn tag(s: &str) -> BagTag {
        BagTag::new(s).unwrap()
    }

    fn pax(s: &str) -> PaxId {
        PaxId::new(s).unwrap()
    }

    #[test]
    fn test_register_and_locate() {
        let registry = BaggageRegistry::new();
        registry.register(tag("BAG101"), dec!(20.5), pax("P001")).unwrap();
        assert_eq!(registry.locate(&tag("BAG101")).unwrap(), "Created");
    }

    #[test]
    fn test_duplicate_tag_leaves_original() {
        let registry = BaggageRegistry::new();
        registry.register(tag("BAG101"), dec!(20.5), pax("P001")).unwrap();

        let err = registry.register(tag("BAG101"), dec!(3), pax("P002")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateId);

        let bag = registry.snapshot(&tag("BAG101")).unwrap();
        assert_eq!(bag.owner, pax("P001"));
        assert_eq!(bag.weight.kilograms(), dec!(20.5));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let registry = BaggageRegistry::new();
        let err = registry.register(tag("BAG101"), dec!(-1), pax("P001")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unknown_tag_is_not_found() {
        let registry = BaggageRegistry::new();
        let err = registry.record_movement(&tag("BAG404"), "Security").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_bags_of_owner() {
        let registry = BaggageRegistry::new();
        registry.register(tag("BAG1"), dec!(10), pax("P001")).unwrap();
        registry.register(tag("BAG2"), dec!(12), pax("P002")).unwrap();
        registry.register(tag("BAG3"), dec!(8), pax("P001")).unwrap();

        assert_eq!(registry.bags_of(&pax("P001")), vec![tag("BAG1"), tag("BAG3")]);
        assert!(registry.bags_of(&pax("P999")).is_empty());
    }
}
