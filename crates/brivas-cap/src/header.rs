//! Address field header octet
//!
//! ```text
//!   7   6   5   4   3   2   1   0
//! +---+-----------+---------------+
//! |ext|  nature   | numbering plan|
//! +---+-----------+---------------+
//! ```

use crate::types::{AddressNature, NumberingPlan};

pub const NO_EXTENSION_MASK: u8 = 0x80;
pub const NATURE_OF_ADDRESS_MASK: u8 = 0x70;
pub const NUMBERING_PLAN_MASK: u8 = 0x0F;

/// Decoded header octet, raw indicator codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressHeader {
    /// Bit 7
    pub extension: bool,
    /// Bits 6-4
    pub nature_code: u8,
    /// Bits 3-0
    pub plan_code: u8,
}

impl AddressHeader {
    pub fn new(nature: AddressNature, plan: NumberingPlan, extension: bool) -> Self {
        Self {
            extension,
            nature_code: nature.indicator(),
            plan_code: plan.indicator(),
        }
    }

    pub fn encode(&self) -> u8 {
        let mut h = 0u8;
        if self.extension {
            h |= NO_EXTENSION_MASK;
        }
        h |= (self.nature_code & 0x07) << 4;
        h |= self.plan_code & NUMBERING_PLAN_MASK;
        h
    }

    pub fn decode(v: u8) -> Self {
        Self {
            extension: (v & NO_EXTENSION_MASK) != 0,
            nature_code: (v & NATURE_OF_ADDRESS_MASK) >> 4,
            plan_code: v & NUMBERING_PLAN_MASK,
        }
    }

    pub fn address_nature(&self) -> Option<AddressNature> {
        AddressNature::from_indicator(self.nature_code)
    }

    pub fn numbering_plan(&self) -> Option<NumberingPlan> {
        NumberingPlan::from_indicator(self.plan_code)
    }
}
