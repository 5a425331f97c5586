use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid storage category: {0}")]
    InvalidStorageCategory(String),
    #[error("invalid dimension unit: {0} (expected cm, mm or in)")]
    InvalidUnit(String),
    #[error("invalid travel class: {0}")]
    InvalidTravelClass(String),
    #[error("invalid age category: {0}")]
    InvalidAgeCategory(String),
    #[error("weight must be a finite non-negative number, got {0}")]
    InvalidWeight(f64),
    #[error("dimension {name} must be a finite non-negative number, got {value}")]
    InvalidDimension { name: &'static str, value: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Cm,
    Mm,
    In,
}

impl Unit {
    pub fn parse(value: &str) -> Result<Self, ModelError> {
        match value.trim().to_lowercase().as_str() {
            "cm" => Ok(Self::Cm),
            "mm" => Ok(Self::Mm),
            "in" | "inch" => Ok(Self::In),
            other => Err(ModelError::InvalidUnit(other.to_string())),
        }
    }

    pub fn as_code(self) -> &'static str {
        match self {
            Self::Cm => "cm",
            Self::Mm => "mm",
            Self::In => "in",
        }
    }

    /// Multiplier converting a length in this unit to centimeters.
    pub fn factor_to_cm(self) -> f64 {
        match self {
            Self::Cm => 1.0,
            Self::Mm => 0.1,
            Self::In => 2.54,
        }
    }

    /// Multiplier converting a volume in this unit cubed to cubic centimeters.
    pub fn factor_to_cm3(self) -> f64 {
        match self {
            Self::Cm => 1.0,
            Self::Mm => 0.001,
            Self::In => 16.387,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StorageCategory {
    CarryOn,
    Checked,
    Special,
    Personal,
}

impl StorageCategory {
    pub fn parse(value: &str) -> Result<Self, ModelError> {
        match value.trim().to_lowercase().as_str() {
            "carry-on" | "carry_on" | "carryon" | "cabin" => Ok(Self::CarryOn),
            "checked" | "hold" => Ok(Self::Checked),
            "special" | "cargo" => Ok(Self::Special),
            "personal" => Ok(Self::Personal),
            other => Err(ModelError::InvalidStorageCategory(other.to_string())),
        }
    }

    pub fn as_code(self) -> &'static str {
        match self {
            Self::CarryOn => "carry-on",
            Self::Checked => "checked",
            Self::Special => "special",
            Self::Personal => "personal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelClass {
    Economy,
    Business,
    First,
}

impl TravelClass {
    pub fn parse(value: &str) -> Result<Self, ModelError> {
        match value.trim().to_lowercase().as_str() {
            "economy" => Ok(Self::Economy),
            "business" => Ok(Self::Business),
            "first" => Ok(Self::First),
            other => Err(ModelError::InvalidTravelClass(other.to_string())),
        }
    }

    pub fn as_code(self) -> &'static str {
        match self {
            Self::Economy => "economy",
            Self::Business => "business",
            Self::First => "first",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeCategory {
    Adult,
    Child,
    Infant,
}

impl AgeCategory {
    pub fn parse(value: &str) -> Result<Self, ModelError> {
        match value.trim().to_lowercase().as_str() {
            "adult" => Ok(Self::Adult),
            "child" => Ok(Self::Child),
            "infant" => Ok(Self::Infant),
            other => Err(ModelError::InvalidAgeCategory(other.to_string())),
        }
    }

    pub fn as_code(self) -> &'static str {
        match self {
            Self::Adult => "adult",
            Self::Child => "child",
            Self::Infant => "infant",
        }
    }
}

/// Measured extent of a single bag. Spatial values are stored in the unit
/// they were measured in; accessors normalize to centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimensions {
    pub height: f64,
    pub width: f64,
    pub depth: f64,
    pub unit: Unit,
}

impl Dimensions {
    pub fn new(height: f64, width: f64, depth: f64, unit: Unit) -> Result<Self, ModelError> {
        for (name, value) in [("height", height), ("width", width), ("depth", depth)] {
            if !value.is_finite() || value < 0.0 {
                return Err(ModelError::InvalidDimension { name, value });
            }
        }
        Ok(Self {
            height,
            width,
            depth,
            unit,
        })
    }

    /// `[height, width, depth]` normalized to centimeters.
    pub fn to_cm(&self) -> [f64; 3] {
        let factor = self.unit.factor_to_cm();
        [
            self.height * factor,
            self.width * factor,
            self.depth * factor,
        ]
    }

    /// Sum of the three dimensions in centimeters (airline "linear size").
    pub fn total_cm(&self) -> f64 {
        self.to_cm().iter().sum()
    }

    pub fn volume_cm3(&self) -> f64 {
        self.height * self.width * self.depth * self.unit.factor_to_cm3()
    }
}

/// A single physical bag plus the classification state the engine mutates
/// during evaluation. Classification changes only happen through the named
/// transition methods, so flag combinations stay coherent: a cargo-routed
/// item can never read as cabin-compliant.
#[derive(Debug, Clone, Serialize)]
pub struct LuggageItem {
    #[serde(skip)]
    id: Uuid,
    category: StorageCategory,
    excess: bool,
    special: bool,
    compliant: bool,
    weight_kg: f64,
    dimensions: Dimensions,
}

impl LuggageItem {
    pub fn new(
        category: StorageCategory,
        weight_kg: f64,
        dimensions: Dimensions,
    ) -> Result<Self, ModelError> {
        if !weight_kg.is_finite() || weight_kg < 0.0 {
            return Err(ModelError::InvalidWeight(weight_kg));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            category,
            excess: false,
            special: false,
            compliant: false,
            weight_kg,
            dimensions,
        })
    }

    pub(crate) fn id(&self) -> Uuid {
        self.id
    }

    /// Re-key the item. Callers may hand in clones that share an id;
    /// the engine re-keys everything on entry so each physical bag is
    /// tracked individually.
    pub(crate) fn assign_fresh_id(&mut self) {
        self.id = Uuid::new_v4();
    }

    pub fn category(&self) -> StorageCategory {
        self.category
    }

    pub fn is_excess(&self) -> bool {
        self.excess
    }

    pub fn is_special(&self) -> bool {
        self.special
    }

    pub fn is_compliant(&self) -> bool {
        self.compliant
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    pub fn volume_cm3(&self) -> f64 {
        self.dimensions.volume_cm3()
    }

    pub fn total_size_cm(&self) -> f64 {
        self.dimensions.total_cm()
    }

    pub fn dimensions_cm(&self) -> [f64; 3] {
        self.dimensions.to_cm()
    }

    // --- classification transitions -------------------------------------

    pub(crate) fn mark_cabin_compliant(&mut self) {
        self.compliant = true;
    }

    pub(crate) fn mark_noncompliant(&mut self) {
        self.compliant = false;
    }

    /// Compliant cabin item displaced because the cabin quota is full.
    pub(crate) fn mark_cabin_overflow(&mut self) {
        self.excess = true;
        self.compliant = false;
    }

    pub(crate) fn move_to_checked(&mut self) {
        self.category = StorageCategory::Checked;
    }

    /// Checked item re-admitted into freed cabin capacity.
    pub(crate) fn reclaim_to_cabin(&mut self) {
        self.category = StorageCategory::CarryOn;
        self.compliant = true;
        self.excess = false;
    }

    /// Item beyond the checked limits entirely; refused as baggage.
    pub(crate) fn route_to_cargo(&mut self) {
        self.special = true;
        self.compliant = false;
    }

    /// Item retained as checked but incurring a fee.
    pub(crate) fn mark_fee_excess(&mut self) {
        self.excess = true;
    }

    // --- flat record conversion -----------------------------------------

    pub fn to_record(&self) -> LuggageRecord {
        LuggageRecord {
            storage: self.category.as_code().to_string(),
            excess: self.excess,
            special: self.special,
            compliance: self.compliant,
            weight: self.weight_kg,
            height: self.dimensions.height,
            width: self.dimensions.width,
            depth: self.dimensions.depth,
            unit: self.dimensions.unit.as_code().to_string(),
        }
    }

    pub fn from_record(record: &LuggageRecord) -> Result<Self, ModelError> {
        let unit = Unit::parse(&record.unit)?;
        let dimensions = Dimensions::new(record.height, record.width, record.depth, unit)?;
        let mut item = Self::new(
            StorageCategory::parse(&record.storage)?,
            record.weight,
            dimensions,
        )?;
        item.excess = record.excess;
        item.special = record.special;
        item.compliant = record.compliance;
        Ok(item)
    }
}

impl PartialEq for LuggageItem {
    /// Identity-free value equality: category, flags and dimensions match
    /// exactly, weights within 0.01 kg.
    fn eq(&self, other: &Self) -> bool {
        self.category == other.category
            && self.excess == other.excess
            && self.special == other.special
            && self.compliant == other.compliant
            && (self.weight_kg - other.weight_kg).abs() < 0.01
            && self.dimensions == other.dimensions
    }
}

/// Flat field set shared by CSV persistence and report details. Round-trip
/// through this record reproduces an equal item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LuggageRecord {
    pub storage: String,
    pub excess: bool,
    pub special: bool,
    pub compliance: bool,
    pub weight: f64,
    pub height: f64,
    pub width: f64,
    pub depth: f64,
    pub unit: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComplianceRequest {
    pub travel_class: TravelClass,
    pub age_category: AgeCategory,
    pub items: Vec<LuggageItem>,
}

impl ComplianceRequest {
    pub fn new(
        travel_class: TravelClass,
        age_category: AgeCategory,
        items: Vec<LuggageItem>,
    ) -> Self {
        Self {
            travel_class,
            age_category,
            items,
        }
    }

    /// Build a request from untyped codes, rejecting unknown values before
    /// any evaluation begins.
    pub fn from_codes(
        travel_class: &str,
        age_category: &str,
        items: Vec<LuggageItem>,
    ) -> Result<Self, ModelError> {
        Ok(Self::new(
            TravelClass::parse(travel_class)?,
            AgeCategory::parse(age_category)?,
            items,
        ))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationResult {
    pub valid: bool,
    pub message: String,
    pub moved_to_checked: Vec<LuggageItem>,
    pub cargo: Vec<LuggageItem>,
    pub fees: f64,
    /// Every item of the request with its terminal classification flags.
    pub items: Vec<LuggageItem>,
}

impl EvaluationResult {
    pub fn failed(message: String) -> Self {
        Self {
            valid: false,
            message,
            moved_to_checked: Vec::new(),
            cargo: Vec::new(),
            fees: 0.0,
            items: Vec::new(),
        }
    }
}
