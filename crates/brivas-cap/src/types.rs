//! Address classification enumerations shared by the CAP primitives

use serde::{Deserialize, Serialize};
use std::fmt;

/// Nature of Address (3-bit indicator)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum AddressNature {
    Unknown = 0,
    InternationalNumber = 1,
    NationalSignificantNumber = 2,
    NetworkSpecificNumber = 3,
    SubscriberNumber = 4,
    Reserved = 5,
    AbbreviatedNumber = 6,
    ReservedForExtension = 7,
}

impl AddressNature {
    /// Wire indicator value
    pub fn indicator(&self) -> u8 {
        *self as u8
    }

    /// Map a wire indicator, `None` for codes outside the enumeration
    pub fn from_indicator(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Unknown),
            1 => Some(Self::InternationalNumber),
            2 => Some(Self::NationalSignificantNumber),
            3 => Some(Self::NetworkSpecificNumber),
            4 => Some(Self::SubscriberNumber),
            5 => Some(Self::Reserved),
            6 => Some(Self::AbbreviatedNumber),
            7 => Some(Self::ReservedForExtension),
            _ => None,
        }
    }
}

impl fmt::Display for AddressNature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "unknown",
            Self::InternationalNumber => "international_number",
            Self::NationalSignificantNumber => "national_significant_number",
            Self::NetworkSpecificNumber => "network_specific_number",
            Self::SubscriberNumber => "subscriber_number",
            Self::Reserved => "reserved",
            Self::AbbreviatedNumber => "abbreviated_number",
            Self::ReservedForExtension => "reserved_for_extension",
        };
        f.write_str(name)
    }
}

/// Numbering Plan Indicator (4-bit)
///
/// Codes 10..=14 have no assignment and decode to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum NumberingPlan {
    Unknown = 0,
    Isdn = 1,       // E.164
    Spare2 = 2,
    Data = 3,       // X.121
    Telex = 4,
    /// Repurposed by CAP for alphanumeric addresses (3GPP TS 23.040 type-of-number '101'B)
    Spare5 = 5,
    LandMobile = 6, // E.212
    Spare7 = 7,
    National = 8,
    PrivatePlan = 9,
    Reserved = 15,
}

impl NumberingPlan {
    /// Plan whose address body is GSM 7-bit packed text rather than TBCD
    pub const ALPHANUMERIC: Self = Self::Spare5;

    /// Wire indicator value
    pub fn indicator(&self) -> u8 {
        *self as u8
    }

    /// Map a wire indicator, `None` for unassigned codes
    pub fn from_indicator(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Unknown),
            1 => Some(Self::Isdn),
            2 => Some(Self::Spare2),
            3 => Some(Self::Data),
            4 => Some(Self::Telex),
            5 => Some(Self::Spare5),
            6 => Some(Self::LandMobile),
            7 => Some(Self::Spare7),
            8 => Some(Self::National),
            9 => Some(Self::PrivatePlan),
            15 => Some(Self::Reserved),
            _ => None,
        }
    }

    pub fn is_alphanumeric(&self) -> bool {
        *self == Self::ALPHANUMERIC
    }
}

impl fmt::Display for NumberingPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "unknown",
            Self::Isdn => "ISDN",
            Self::Spare2 => "spare_2",
            Self::Data => "data",
            Self::Telex => "telex",
            Self::Spare5 => "spare_5",
            Self::LandMobile => "land_mobile",
            Self::Spare7 => "spare_7",
            Self::National => "national",
            Self::PrivatePlan => "private_plan",
            Self::Reserved => "reserved",
        };
        f.write_str(name)
    }
}
