//! Attribute representation of [`AddressField`]
//!
//! Flat `nai` / `npi` / `number` / `extension` attributes for external
//! serializers (JSON, XML attribute sets). `extension` defaults to `false` when
//! missing so documents written without it still load.

use serde::{Deserialize, Serialize};

use crate::address::AddressField;
use crate::errors::{CapError, Result, ValidationError};
use crate::types::{AddressNature, NumberingPlan};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressFieldRepr {
    /// Nature of address indicator
    pub nai: u8,
    /// Numbering plan indicator
    pub npi: u8,
    /// Decoded address
    pub number: String,
    #[serde(default)]
    pub extension: bool,
}

impl AddressFieldRepr {
    /// Snapshot of a field, `None` when any part cannot be decoded
    pub fn from_field(field: &AddressField) -> Option<Self> {
        Some(Self {
            nai: field.address_nature()?.indicator(),
            npi: field.numbering_plan()?.indicator(),
            number: field.address()?,
            extension: field.is_extension()?,
        })
    }

    /// Rebuild the wire field
    pub fn to_field(&self) -> Result<AddressField> {
        let nature = AddressNature::from_indicator(self.nai)
            .ok_or(ValidationError::UnknownAddressNature(self.nai))?;
        let plan = NumberingPlan::from_indicator(self.npi)
            .ok_or(ValidationError::UnknownNumberingPlan(self.npi))?;

        AddressField::builder()
            .address_nature(nature)
            .numbering_plan(plan)
            .address(self.number.as_str())
            .extension(self.extension)
            .build()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

impl TryFrom<&AddressFieldRepr> for AddressField {
    type Error = CapError;

    fn try_from(repr: &AddressFieldRepr) -> Result<Self> {
        repr.to_field()
    }
}
