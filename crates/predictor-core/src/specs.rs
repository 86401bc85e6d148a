//! Raw form state and the categorical spec fields.

use serde::Serialize;

/// Fallback values applied when a numeric field is blank or unreadable.
///
/// They describe a typical mid-range phone, so an empty form still prices
/// something sensible instead of erroring.
pub mod defaults {
    pub const RATING: f64 = 4.0;
    pub const RAM_GB: f64 = 4.0;
    pub const DISPLAY_IN: f64 = 6.0;
    pub const CAMERA_MP: f64 = 48.0;
    pub const BATTERY_MAH: f64 = 4000.0;
    /// Remote mode substitutes only the rating, at a slightly higher anchor.
    pub const RATING_REMOTE: f64 = 4.2;
}

/// Processor families recognized by the estimator.
///
/// Matches the categories the pricing data was trained on. Only Snapdragon
/// and Exynos carry a premium; everything else prices as baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Processor {
    Snapdragon,
    Exynos,
    Mediatek,
    Apple,
    Unisoc,
    Other,
}

impl Processor {
    pub const ALL: [Processor; 6] = [
        Processor::Snapdragon,
        Processor::Exynos,
        Processor::Mediatek,
        Processor::Apple,
        Processor::Unisoc,
        Processor::Other,
    ];

    /// Form and wire value, e.g. `"snapdragon"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Processor::Snapdragon => "snapdragon",
            Processor::Exynos => "exynos",
            Processor::Mediatek => "mediatek",
            Processor::Apple => "apple",
            Processor::Unisoc => "unisoc",
            Processor::Other => "other",
        }
    }

    /// Human-readable label for the select control.
    pub fn label(&self) -> &'static str {
        match self {
            Processor::Snapdragon => "Snapdragon",
            Processor::Exynos => "Exynos",
            Processor::Mediatek => "MediaTek",
            Processor::Apple => "Apple",
            Processor::Unisoc => "Unisoc",
            Processor::Other => "Other",
        }
    }

    /// Parse a form value, treating anything unrecognized as [`Processor::Other`].
    pub fn from_value(value: &str) -> Processor {
        match value {
            "snapdragon" => Processor::Snapdragon,
            "exynos" => Processor::Exynos,
            "mediatek" => Processor::Mediatek,
            "apple" => Processor::Apple,
            "unisoc" => Processor::Unisoc,
            _ => Processor::Other,
        }
    }

    /// Price adjustment factor for this family.
    pub fn multiplier(&self) -> f64 {
        match self {
            Processor::Snapdragon => 1.15,
            Processor::Exynos => 1.08,
            _ => 1.0,
        }
    }
}

/// Whether the phone takes an expandable memory card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryCard {
    Supported,
    NotSupported,
}

impl MemoryCard {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemoryCard::Supported => "supported",
            MemoryCard::NotSupported => "not-supported",
        }
    }

    pub fn from_value(value: &str) -> MemoryCard {
        match value {
            "supported" => MemoryCard::Supported,
            _ => MemoryCard::NotSupported,
        }
    }

    /// Price adjustment factor; expandable storage carries a 5% premium.
    pub fn multiplier(&self) -> f64 {
        match self {
            MemoryCard::Supported => 1.05,
            MemoryCard::NotSupported => 1.0,
        }
    }

    /// Wire encoding for the prediction service: supported is 1.
    pub fn flag(&self) -> u8 {
        match self {
            MemoryCard::Supported => 1,
            MemoryCard::NotSupported => 0,
        }
    }
}

/// How many SIM slots the phone has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimSupport {
    Single,
    Dual,
}

impl SimSupport {
    pub fn as_str(&self) -> &'static str {
        match self {
            SimSupport::Single => "single",
            SimSupport::Dual => "dual",
        }
    }

    pub fn from_value(value: &str) -> SimSupport {
        match value {
            "dual" => SimSupport::Dual,
            _ => SimSupport::Single,
        }
    }

    /// Price adjustment factor; dual SIM carries a 10% premium.
    pub fn multiplier(&self) -> f64 {
        match self {
            SimSupport::Dual => 1.1,
            SimSupport::Single => 1.0,
        }
    }

    /// Wire encoding for the prediction service: dual is 1.
    pub fn flag(&self) -> u8 {
        match self {
            SimSupport::Dual => 1,
            SimSupport::Single => 0,
        }
    }
}

/// Raw, as-typed contents of the estimator form.
///
/// Numeric fields stay text until an estimate is requested; the categorical
/// fields always hold a valid choice.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecForm {
    pub rating: String,
    pub ram: String,
    pub display: String,
    pub camera_mp: String,
    pub battery_capacity: String,
    pub processor_type: Processor,
    pub card: MemoryCard,
    pub sim: SimSupport,
}

impl Default for SpecForm {
    fn default() -> Self {
        Self {
            rating: String::new(),
            ram: String::new(),
            display: String::new(),
            camera_mp: String::new(),
            battery_capacity: String::new(),
            processor_type: Processor::Snapdragon,
            card: MemoryCard::NotSupported,
            sim: SimSupport::Single,
        }
    }
}

impl SpecForm {
    /// Parse the numeric fields, substituting the documented defaults for
    /// anything blank or unreadable. Local estimation never fails on bad
    /// input; it just prices a typical mid-range phone.
    pub fn parse_or_default(&self) -> PhoneSpecs {
        PhoneSpecs {
            rating: parse_or(&self.rating, defaults::RATING),
            ram: parse_or(&self.ram, defaults::RAM_GB),
            display: parse_or(&self.display, defaults::DISPLAY_IN),
            camera_mp: parse_or(&self.camera_mp, defaults::CAMERA_MP),
            battery_capacity: parse_or(&self.battery_capacity, defaults::BATTERY_MAH),
            processor_type: self.processor_type,
            card: self.card,
            sim: self.sim,
        }
    }

    /// Names of the remote-mode required fields that are still blank, in
    /// form order. Remote submissions are blocked until this is empty.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.ram.trim().is_empty() {
            missing.push("RAM");
        }
        if self.camera_mp.trim().is_empty() {
            missing.push("camera");
        }
        if self.battery_capacity.trim().is_empty() {
            missing.push("battery capacity");
        }
        missing
    }
}

/// Parsed, numeric view of a [`SpecForm`], ready for the pricing formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhoneSpecs {
    pub rating: f64,
    pub ram: f64,
    pub display: f64,
    pub camera_mp: f64,
    pub battery_capacity: f64,
    pub processor_type: Processor,
    pub card: MemoryCard,
    pub sim: SimSupport,
}

pub(crate) fn parse_or(text: &str, fallback: f64) -> f64 {
    text.trim().parse().unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_form_parses_to_defaults() {
        let specs = SpecForm::default().parse_or_default();
        assert_eq!(specs.rating, 4.0);
        assert_eq!(specs.ram, 4.0);
        assert_eq!(specs.display, 6.0);
        assert_eq!(specs.camera_mp, 48.0);
        assert_eq!(specs.battery_capacity, 4000.0);
        assert_eq!(specs.processor_type, Processor::Snapdragon);
        assert_eq!(specs.card, MemoryCard::NotSupported);
        assert_eq!(specs.sim, SimSupport::Single);
    }

    #[test]
    fn test_garbage_numeric_text_falls_back() {
        let form = SpecForm {
            rating: "4,5".into(),
            ram: "lots".into(),
            display: " 6.7 ".into(),
            ..SpecForm::default()
        };
        let specs = form.parse_or_default();
        assert_eq!(specs.rating, 4.0);
        assert_eq!(specs.ram, 4.0);
        assert_eq!(specs.display, 6.7);
    }

    #[test]
    fn test_zero_is_a_valid_input() {
        let form = SpecForm {
            rating: "0".into(),
            ..SpecForm::default()
        };
        assert_eq!(form.parse_or_default().rating, 0.0);
    }

    #[test]
    fn test_missing_required_reports_blank_fields_in_form_order() {
        let mut form = SpecForm {
            ram: "8".into(),
            camera_mp: "64".into(),
            battery_capacity: "5000".into(),
            ..SpecForm::default()
        };
        assert!(form.missing_required().is_empty());

        form.ram.clear();
        form.battery_capacity = "   ".into();
        assert_eq!(form.missing_required(), vec!["RAM", "battery capacity"]);
    }

    #[test]
    fn test_rating_is_optional_for_remote_mode() {
        let form = SpecForm {
            ram: "8".into(),
            camera_mp: "64".into(),
            battery_capacity: "5000".into(),
            ..SpecForm::default()
        };
        assert!(form.rating.is_empty());
        assert!(form.missing_required().is_empty());
    }

    #[test]
    fn test_processor_form_values_round_trip() {
        for processor in Processor::ALL {
            assert_eq!(Processor::from_value(processor.as_str()), processor);
        }
        assert_eq!(Processor::from_value("bionic-x9"), Processor::Other);
    }

    #[test]
    fn test_choice_form_values_round_trip() {
        assert_eq!(
            MemoryCard::from_value(MemoryCard::Supported.as_str()),
            MemoryCard::Supported
        );
        assert_eq!(MemoryCard::from_value("maybe"), MemoryCard::NotSupported);
        assert_eq!(
            SimSupport::from_value(SimSupport::Dual.as_str()),
            SimSupport::Dual
        );
        assert_eq!(SimSupport::from_value(""), SimSupport::Single);
    }

    #[test]
    fn test_premium_multipliers() {
        assert_eq!(Processor::Snapdragon.multiplier(), 1.15);
        assert_eq!(Processor::Exynos.multiplier(), 1.08);
        assert_eq!(Processor::Mediatek.multiplier(), 1.0);
        assert_eq!(Processor::Apple.multiplier(), 1.0);
        assert_eq!(MemoryCard::Supported.multiplier(), 1.05);
        assert_eq!(MemoryCard::NotSupported.multiplier(), 1.0);
        assert_eq!(SimSupport::Dual.multiplier(), 1.1);
        assert_eq!(SimSupport::Single.multiplier(), 1.0);
    }

    #[test]
    fn test_wire_flags() {
        assert_eq!(MemoryCard::Supported.flag(), 1);
        assert_eq!(MemoryCard::NotSupported.flag(), 0);
        assert_eq!(SimSupport::Dual.flag(), 1);
        assert_eq!(SimSupport::Single.flag(), 0);
    }
}
