use lift_core::mocks::MemorySlot;
use lift_core::{
    DEFAULT_THRESHOLD, THRESHOLD_UNCONFIGURED, ThresholdStore, ThresholdUpdate,
};
use rstest::rstest;

#[rstest]
#[case(49, ThresholdUpdate::Rejected)]
#[case(50, ThresholdUpdate::Rejected)]
#[case(51, ThresholdUpdate::Accepted)]
#[case(253, ThresholdUpdate::Accepted)]
#[case(254, ThresholdUpdate::Rejected)]
#[case(255, ThresholdUpdate::Rejected)]
#[case(0, ThresholdUpdate::Rejected)]
fn validation_band_is_strict(#[case] value: u8, #[case] expected: ThresholdUpdate) {
    let mut store = ThresholdStore::open(MemorySlot::new(120)).expect("open");
    assert_eq!(store.set(value).expect("set"), expected);
}

#[test]
fn rejection_leaves_live_and_persisted_state_alone() {
    let slot = MemorySlot::new(120);
    let stores = slot.stores();
    let mut store = ThresholdStore::open(slot).expect("open");

    assert_eq!(store.set(49).expect("set"), ThresholdUpdate::Rejected);
    assert_eq!(store.get(), 120);
    assert!(stores.borrow().is_empty(), "rejected value must not persist");
}

#[test]
fn acceptance_persists_before_going_live() {
    let slot = MemorySlot::new(120);
    let stores = slot.stores();
    let mut store = ThresholdStore::open(slot).expect("open");

    assert_eq!(store.set(200).expect("set"), ThresholdUpdate::Accepted);
    assert_eq!(store.get(), 200);
    assert_eq!(*stores.borrow(), vec![200]);
}

#[test]
fn unconfigured_slot_bootstraps_the_default() {
    let slot = MemorySlot::new(THRESHOLD_UNCONFIGURED);
    let stores = slot.stores();
    let store = ThresholdStore::open(slot).expect("open");

    assert_eq!(store.get(), DEFAULT_THRESHOLD);
    // The default is written back so the slot is configured from now on.
    assert_eq!(*stores.borrow(), vec![DEFAULT_THRESHOLD]);
}

#[test]
fn configured_slot_is_used_as_is() {
    let slot = MemorySlot::new(90);
    let stores = slot.stores();
    let store = ThresholdStore::open(slot).expect("open");

    assert_eq!(store.get(), 90);
    assert!(stores.borrow().is_empty());
}
