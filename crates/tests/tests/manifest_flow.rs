use stowage_core::{AgeCategory, ComplianceEngine, ComplianceRequest, StorageCategory, TravelClass};
use stowage_storage::{load_manifest, manifest_to_string, read_manifest, save_manifest};
use stowage_tests::bag_cm;

#[test]
fn manifest_drives_a_full_evaluation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("traveler.csv");

    save_manifest(
        &path,
        &[
            bag_cm(StorageCategory::CarryOn, 8.0, [55.0, 40.0, 23.0]),
            bag_cm(StorageCategory::Checked, 20.0, [60.0, 40.0, 25.0]),
        ],
    )
    .unwrap();

    let items = load_manifest(&path).unwrap();
    assert_eq!(items.len(), 2);

    let result = ComplianceEngine::default().evaluate(ComplianceRequest::new(
        TravelClass::Economy,
        AgeCategory::Adult,
        items,
    ));

    // The 8 kg carry-on moves to checked; two retained pieces exceed the
    // Economy allowance of one, so an extra-piece fee applies.
    assert_eq!(result.moved_to_checked.len(), 1);
    assert_eq!(result.fees, 150.0);
}

#[test]
fn evaluated_items_survive_a_save_load_cycle() {
    let engine = ComplianceEngine::default();
    let result = engine.evaluate(ComplianceRequest::new(
        TravelClass::Business,
        AgeCategory::Adult,
        vec![
            bag_cm(StorageCategory::CarryOn, 6.0, [55.0, 40.0, 23.0]),
            bag_cm(StorageCategory::Checked, 35.0, [60.0, 40.0, 25.0]),
        ],
    ));
    assert_eq!(result.cargo.len(), 1);

    let rendered = manifest_to_string(&result.items).unwrap();
    let restored = read_manifest(rendered.as_bytes()).unwrap();

    assert_eq!(restored.len(), result.items.len());
    for (original, loaded) in result.items.iter().zip(&restored) {
        assert_eq!(original, loaded);
    }
    // Terminal flags round-trip too.
    assert!(restored.iter().any(|i| i.is_special()));
}

#[test]
fn moved_items_export_header_when_nothing_moves() {
    let engine = ComplianceEngine::default();
    let result = engine.evaluate(ComplianceRequest::new(
        TravelClass::First,
        AgeCategory::Adult,
        vec![bag_cm(StorageCategory::CarryOn, 6.0, [55.0, 40.0, 23.0])],
    ));
    assert!(result.moved_to_checked.is_empty());

    let rendered = manifest_to_string(&result.moved_to_checked).unwrap();
    assert_eq!(rendered.lines().count(), 1);
}
