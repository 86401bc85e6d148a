//! The local pricing formula.
//!
//! A linear base score over the numeric specs, scaled by the premium
//! multipliers for dual SIM, expandable storage, and processor family, then
//! rounded to two decimals.

use crate::specs::PhoneSpecs;

const RATING_WEIGHT: f64 = 50.0;
const RAM_WEIGHT: f64 = 28.0;
const DISPLAY_WEIGHT: f64 = 45.0;
const CAMERA_WEIGHT: f64 = 3.2;
const BATTERY_WEIGHT: f64 = 0.035;
const BASE_OFFSET: f64 = 120.0;

/// Which terms enter the base score.
///
/// The rating-weighted variant folds the user rating into the base; the
/// specs-only variant prices purely from hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formula {
    RatingWeighted,
    SpecsOnly,
}

/// Deterministic local estimate for the given specs, in display-currency
/// units rounded to two decimals.
pub fn estimate(formula: Formula, specs: &PhoneSpecs) -> f64 {
    let hardware = specs.ram * RAM_WEIGHT
        + specs.display * DISPLAY_WEIGHT
        + specs.camera_mp * CAMERA_WEIGHT
        + specs.battery_capacity * BATTERY_WEIGHT
        + BASE_OFFSET;
    let base = match formula {
        Formula::RatingWeighted => specs.rating * RATING_WEIGHT + hardware,
        Formula::SpecsOnly => hardware,
    };
    let adjusted = base
        * specs.sim.multiplier()
        * specs.card.multiplier()
        * specs.processor_type.multiplier();
    round2(adjusted)
}

/// Round to two decimal places, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::{MemoryCard, Processor, SimSupport, SpecForm};

    fn baseline_phone() -> PhoneSpecs {
        PhoneSpecs {
            rating: 4.0,
            ram: 4.0,
            display: 6.0,
            camera_mp: 48.0,
            battery_capacity: 4000.0,
            processor_type: Processor::Other,
            card: MemoryCard::NotSupported,
            sim: SimSupport::Single,
        }
    }

    #[test]
    fn test_flagship_scenario() {
        // base 225 + 336 + 301.5 + 345.6 + 175 + 120 = 1503.1,
        // multiplier 1.1 * 1.05 * 1.15 = 1.32825
        let specs = PhoneSpecs {
            rating: 4.5,
            ram: 12.0,
            display: 6.7,
            camera_mp: 108.0,
            battery_capacity: 5000.0,
            processor_type: Processor::Snapdragon,
            card: MemoryCard::Supported,
            sim: SimSupport::Dual,
        };
        assert_eq!(estimate(Formula::RatingWeighted, &specs), 1996.49);
        assert_eq!(estimate(Formula::SpecsOnly, &specs), 1697.64);
    }

    #[test]
    fn test_blank_form_prices_the_default_phone() {
        let form = SpecForm {
            processor_type: Processor::Other,
            ..SpecForm::default()
        };
        let specs = form.parse_or_default();
        assert_eq!(estimate(Formula::RatingWeighted, &specs), 995.6);
        assert_eq!(estimate(Formula::SpecsOnly, &specs), 795.6);
    }

    #[test]
    fn test_identical_specs_identical_estimate() {
        let specs = baseline_phone();
        assert_eq!(
            estimate(Formula::RatingWeighted, &specs),
            estimate(Formula::RatingWeighted, &specs)
        );
    }

    #[test]
    fn test_estimate_is_monotone_in_each_numeric_field() {
        let specs = baseline_phone();
        let reference = estimate(Formula::RatingWeighted, &specs);

        let bumps: [fn(&mut PhoneSpecs); 5] = [
            |s| s.rating += 0.5,
            |s| s.ram += 2.0,
            |s| s.display += 0.3,
            |s| s.camera_mp += 16.0,
            |s| s.battery_capacity += 500.0,
        ];
        for bump in bumps {
            let mut bumped = specs;
            bump(&mut bumped);
            assert!(estimate(Formula::RatingWeighted, &bumped) >= reference);
        }
    }

    #[test]
    fn test_every_premium_raises_the_price() {
        let plain = baseline_phone();
        let reference = estimate(Formula::RatingWeighted, &plain);

        let mut dual = plain;
        dual.sim = SimSupport::Dual;
        let mut carded = plain;
        carded.card = MemoryCard::Supported;
        let mut snapdragon = plain;
        snapdragon.processor_type = Processor::Snapdragon;

        assert!(estimate(Formula::RatingWeighted, &dual) > reference);
        assert!(estimate(Formula::RatingWeighted, &carded) > reference);
        assert!(estimate(Formula::RatingWeighted, &snapdragon) > reference);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(1996.492575), 1996.49);
        // 0.125 is exact in binary, so this is a true midpoint
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(995.6000000000001), 995.6);
        assert_eq!(round2(0.0), 0.0);
    }
}
