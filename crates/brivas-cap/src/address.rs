//! CalledPartyBCDNumber
//!
//! One header octet (extension, nature of address, numbering plan) followed by
//! the address body. The body is TBCD digits, except for the alphanumeric
//! numbering plan where it holds GSM 7-bit packed text (3GPP TS 29.078,
//! DestinationSubscriberNumber in ConnectSMSArg / InitialDPSMSArg).

use bytes::{BufMut, Bytes, BytesMut};
use std::fmt;
use tracing::{debug, trace};

use crate::config::AddressConfig;
use crate::errors::{DecodingError, Result, ValidationError};
use crate::gsm7;
use crate::header::AddressHeader;
use crate::tbcd;
use crate::types::{AddressNature, NumberingPlan};

pub const PRIMITIVE_NAME: &str = "CalledPartyBCDNumber";

/// Longest digit string carried on the TBCD path
pub const MAX_ADDRESS_DIGITS: usize = 38;

/// Octet-string bounds of the primitive
pub const MIN_FIELD_LEN: usize = 1;
pub const MAX_FIELD_LEN: usize = 41;

/// Called party address field
///
/// Holds the wire octets only; every accessor decodes on demand. An empty
/// field is valid and yields `None` everywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AddressField {
    data: Bytes,
}

impl AddressField {
    /// Encode a field from logical values
    pub fn new(
        address_nature: AddressNature,
        numbering_plan: NumberingPlan,
        address: &str,
        is_extension: bool,
    ) -> Result<Self> {
        if !numbering_plan.is_alphanumeric() {
            let digits = address.chars().count();
            if digits > MAX_ADDRESS_DIGITS {
                return Err(ValidationError::AddressTooLong {
                    max: MAX_ADDRESS_DIGITS,
                    actual: digits,
                }
                .into());
            }
        }

        let header = AddressHeader::new(address_nature, numbering_plan, is_extension);

        let mut buf = BytesMut::with_capacity(1 + address.len());
        buf.put_u8(header.encode());
        if numbering_plan.is_alphanumeric() {
            buf.put_slice(&gsm7::encode_gsm7(address)?);
        } else {
            tbcd::encode_digits_into(&mut buf, address)?;
        }

        trace!(
            nature = %address_nature,
            plan = %numbering_plan,
            len = buf.len(),
            "Encoded {}", PRIMITIVE_NAME
        );

        Ok(Self { data: buf.freeze() })
    }

    /// Start building a field whose parts may be absent
    pub fn builder() -> AddressFieldBuilder {
        AddressFieldBuilder::default()
    }

    /// Build from a bare digit string using configured defaults
    pub fn from_digits(digits: &str, config: &AddressConfig) -> Result<Self> {
        let nature = AddressNature::from_indicator(config.nature_of_address)
            .ok_or(ValidationError::UnknownAddressNature(config.nature_of_address))?;
        let plan = NumberingPlan::from_indicator(config.numbering_plan)
            .ok_or(ValidationError::UnknownNumberingPlan(config.numbering_plan))?;
        Self::new(nature, plan, digits, config.extension)
    }

    /// Wrap received octets without inspecting them
    pub fn from_bytes(data: impl Into<Bytes>) -> Self {
        Self { data: data.into() }
    }

    /// Wrap received octets, enforcing the primitive's length bounds
    pub fn parse(data: &[u8]) -> Result<Self> {
        Self::parse_bounded(data, MAX_FIELD_LEN)
    }

    /// Like [`AddressField::parse`] with the configured upper bound
    pub fn parse_with(data: &[u8], config: &AddressConfig) -> Result<Self> {
        Self::parse_bounded(data, config.max_field_octets)
    }

    fn parse_bounded(data: &[u8], max: usize) -> Result<Self> {
        if data.len() < MIN_FIELD_LEN || data.len() > max {
            debug!(len = data.len(), max, "Rejecting {}", PRIMITIVE_NAME);
            return Err(ValidationError::FieldLength {
                min: MIN_FIELD_LEN,
                max,
                actual: data.len(),
            }
            .into());
        }
        Ok(Self::from_bytes(Bytes::copy_from_slice(data)))
    }

    /// Wire octets
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Wire octets, shared
    pub fn to_bytes(&self) -> Bytes {
        self.data.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Decoded header octet
    pub fn header(&self) -> Option<AddressHeader> {
        self.data.first().map(|&h| AddressHeader::decode(h))
    }

    pub fn address_nature(&self) -> Option<AddressNature> {
        self.header()?.address_nature()
    }

    pub fn numbering_plan(&self) -> Option<NumberingPlan> {
        self.header()?.numbering_plan()
    }

    pub fn is_extension(&self) -> Option<bool> {
        self.header().map(|h| h.extension)
    }

    /// Decoded address, `None` when the field is empty or the body is malformed
    pub fn address(&self) -> Option<String> {
        if self.data.is_empty() {
            return None;
        }

        match self.decode_address() {
            Ok(address) => Some(address),
            Err(e) => {
                debug!(error = %e, len = self.data.len(), "Undecodable {} address", PRIMITIVE_NAME);
                None
            }
        }
    }

    fn decode_address(&self) -> std::result::Result<String, DecodingError> {
        let body = &self.data[1..];
        if self.numbering_plan() == Some(NumberingPlan::ALPHANUMERIC) {
            gsm7::decode_gsm7(body)
        } else {
            tbcd::decode_packed(body)
        }
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::with_capacity(4);
        if let Some(nature) = self.address_nature() {
            parts.push(format!("addressNature={}", nature));
        }
        if let Some(plan) = self.numbering_plan() {
            parts.push(format!("numberingPlan={}", plan));
        }
        if let Some(address) = self.address() {
            parts.push(format!("address={}", address));
        }
        if self.is_extension() == Some(true) {
            parts.push("extension".to_string());
        }
        write!(f, "{} [{}]", PRIMITIVE_NAME, parts.join(", "))
    }
}

/// Builder for [`AddressField`] where mandatory parts may be missing
#[derive(Debug, Clone, Default)]
pub struct AddressFieldBuilder {
    address_nature: Option<AddressNature>,
    numbering_plan: Option<NumberingPlan>,
    address: Option<String>,
    is_extension: bool,
}

impl AddressFieldBuilder {
    pub fn address_nature(mut self, nature: impl Into<Option<AddressNature>>) -> Self {
        self.address_nature = nature.into();
        self
    }

    pub fn numbering_plan(mut self, plan: impl Into<Option<NumberingPlan>>) -> Self {
        self.numbering_plan = plan.into();
        self
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn extension(mut self, is_extension: bool) -> Self {
        self.is_extension = is_extension;
        self
    }

    pub fn build(self) -> Result<AddressField> {
        let primitive = PRIMITIVE_NAME;
        let nature = self
            .address_nature
            .ok_or(ValidationError::MissingAddressNature { primitive })?;
        let plan = self
            .numbering_plan
            .ok_or(ValidationError::MissingNumberingPlan { primitive })?;
        let address = self
            .address
            .ok_or(ValidationError::MissingAddress { primitive })?;
        AddressField::new(nature, plan, &address, self.is_extension)
    }
}
