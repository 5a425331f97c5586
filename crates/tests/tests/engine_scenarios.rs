use stowage_core::{
    AgeCategory, ComplianceEngine, ComplianceRequest, LuggageItem, StorageCategory, TravelClass,
    Unit,
};
use stowage_tests::{bag, bag_cm};

fn evaluate(
    class: TravelClass,
    age: AgeCategory,
    items: Vec<LuggageItem>,
) -> stowage_core::EvaluationResult {
    ComplianceEngine::default().evaluate(ComplianceRequest::new(class, age, items))
}

#[test]
fn economy_adult_clean_set() {
    let result = evaluate(
        TravelClass::Economy,
        AgeCategory::Adult,
        vec![
            bag_cm(StorageCategory::CarryOn, 7.0, [55.0, 40.0, 23.0]),
            bag_cm(StorageCategory::Personal, 3.0, [35.0, 25.0, 20.0]),
            bag_cm(StorageCategory::Checked, 20.0, [60.0, 40.0, 25.0]),
        ],
    );

    assert!(result.valid);
    assert_eq!(result.fees, 0.0);
    assert!(result.moved_to_checked.is_empty());
    assert!(result.cargo.is_empty());
}

#[test]
fn economy_adult_overweight_carry_on_is_moved() {
    let result = evaluate(
        TravelClass::Economy,
        AgeCategory::Adult,
        vec![bag_cm(StorageCategory::CarryOn, 8.0, [55.0, 40.0, 23.0])],
    );

    assert_eq!(result.moved_to_checked.len(), 1);
    assert!(result.message.contains("move"));
    // The moved bag is within checked limits, so the overall verdict holds.
    assert!(result.valid);
    assert_eq!(
        result.moved_to_checked[0].category(),
        StorageCategory::Checked
    );
}

#[test]
fn business_adult_cargo_item_fails_with_zero_fee() {
    let heavy = bag_cm(StorageCategory::Checked, 35.0, [60.0, 40.0, 25.0]);
    let result = evaluate(TravelClass::Business, AgeCategory::Adult, vec![heavy]);

    assert!(!result.valid);
    assert_eq!(result.cargo.len(), 1);
    assert_eq!(result.fees, 0.0);
    assert!(result.cargo[0].is_special());
}

#[test]
fn unit_invariance_across_cm_mm_in() {
    // The same physical bag measured in three units must evaluate the same.
    let variants = [
        bag(StorageCategory::CarryOn, 6.0, [55.0, 40.0, 23.0], Unit::Cm),
        bag(StorageCategory::CarryOn, 6.0, [550.0, 400.0, 230.0], Unit::Mm),
        bag(
            StorageCategory::CarryOn,
            6.0,
            [55.0 / 2.54, 40.0 / 2.54, 23.0 / 2.54],
            Unit::In,
        ),
    ];

    for item in variants {
        let result = evaluate(TravelClass::Economy, AgeCategory::Adult, vec![item]);
        assert!(result.valid);
        assert_eq!(result.fees, 0.0);
        assert!(result.moved_to_checked.is_empty());
    }
}

#[test]
fn carry_on_capacity_invariant_holds_for_crowded_cabins() {
    for class in [TravelClass::Economy, TravelClass::Business, TravelClass::First] {
        let engine = ComplianceEngine::default();
        let ceiling = engine.policy_table().class_policy(class).cabin.quantity as usize + 1;

        let items: Vec<_> = (0..8)
            .map(|i| bag_cm(StorageCategory::CarryOn, 1.0 + i as f64 * 0.5, [50.0, 35.0, 20.0]))
            .collect();
        let result = engine.evaluate(ComplianceRequest::new(class, AgeCategory::Adult, items));

        let cabin_count = result
            .items
            .iter()
            .filter(|i| i.category() == StorageCategory::CarryOn && i.is_compliant())
            .count();
        assert!(cabin_count <= ceiling, "class {class:?}: {cabin_count} > {ceiling}");
    }
}

#[test]
fn cargo_threshold_is_never_fee_charged() {
    let cases = vec![
        bag_cm(StorageCategory::Checked, 33.0, [60.0, 40.0, 25.0]),
        bag_cm(StorageCategory::Checked, 50.0, [60.0, 40.0, 25.0]),
        bag_cm(StorageCategory::Checked, 10.0, [90.0, 80.0, 40.0]),
    ];

    for item in cases {
        let weight = item.weight_kg();
        let result = evaluate(TravelClass::First, AgeCategory::Adult, vec![item]);
        assert!(!result.valid, "weight {weight} should be refused");
        assert_eq!(result.cargo.len(), 1);
        assert_eq!(result.fees, 0.0);
    }
}

#[test]
fn fee_monotonicity_one_more_overweight_bag() {
    let engine = ComplianceEngine::default();
    let base = vec![bag_cm(StorageCategory::Checked, 20.0, [60.0, 40.0, 25.0])];
    let mut extended = base.clone();
    extended.push(bag_cm(StorageCategory::Checked, 30.0, [60.0, 40.0, 25.0]));

    // Economy + child overlay: the piece allowance covers both bags, so
    // only the overweight fee differs between the two runs.
    let base_fees = engine
        .evaluate(ComplianceRequest::new(
            TravelClass::Economy,
            AgeCategory::Child,
            base,
        ))
        .fees;
    let extended_fees = engine
        .evaluate(ComplianceRequest::new(
            TravelClass::Economy,
            AgeCategory::Child,
            extended,
        ))
        .fees;

    assert_eq!(extended_fees - base_fees, 75.0);
}

#[test]
fn already_compliant_input_is_idempotent() {
    let engine = ComplianceEngine::default();
    let request = ComplianceRequest::new(
        TravelClass::Business,
        AgeCategory::Adult,
        vec![
            bag_cm(StorageCategory::CarryOn, 10.0, [55.0, 40.0, 23.0]),
            bag_cm(StorageCategory::CarryOn, 9.0, [55.0, 40.0, 23.0]),
            bag_cm(StorageCategory::Personal, 2.0, [30.0, 20.0, 10.0]),
            bag_cm(StorageCategory::Checked, 28.0, [60.0, 40.0, 25.0]),
            bag_cm(StorageCategory::Checked, 25.0, [60.0, 40.0, 25.0]),
        ],
    );

    let result = engine.evaluate(request);
    assert!(result.valid);
    assert_eq!(result.fees, 0.0);
    assert!(result.moved_to_checked.is_empty());
    assert!(result.cargo.is_empty());
}

#[test]
fn evaluation_result_serializes_for_callers() {
    let result = evaluate(
        TravelClass::Economy,
        AgeCategory::Adult,
        vec![bag_cm(StorageCategory::CarryOn, 8.0, [55.0, 40.0, 23.0])],
    );

    let json = serde_json::to_value(&result).unwrap();
    assert!(json["valid"].is_boolean());
    assert!(json["moved_to_checked"].is_array());
    assert_eq!(json["moved_to_checked"][0]["category"], "checked");
}
