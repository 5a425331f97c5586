//! Shared fixtures for the cross-crate integration tests.

use stowage_core::{Dimensions, LuggageItem, StorageCategory, Unit};

pub fn bag_cm(category: StorageCategory, weight: f64, dims: [f64; 3]) -> LuggageItem {
    bag(category, weight, dims, Unit::Cm)
}

pub fn bag(category: StorageCategory, weight: f64, dims: [f64; 3], unit: Unit) -> LuggageItem {
    LuggageItem::new(
        category,
        weight,
        Dimensions::new(dims[0], dims[1], dims[2], unit).expect("fixture dimensions are valid"),
    )
    .expect("fixture weight is valid")
}
