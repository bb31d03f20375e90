//! # Brivas CAP Primitives
//!
//! Leaf-level codecs for CAMEL Application Part parameters:
//!
//! - **CalledPartyBCDNumber** - header octet plus TBCD digits, or GSM 7-bit
//!   packed text for the alphanumeric numbering plan
//! - **TBCD** - semi-octet digit packing with `0xF` filler
//! - **GSM7** - 3GPP TS 23.038 default alphabet, septet packing
//!
//! ## Example
//! ```rust
//! use brivas_cap::{AddressField, AddressNature, NumberingPlan};
//!
//! let field = AddressField::new(
//!     AddressNature::InternationalNumber,
//!     NumberingPlan::Isdn,
//!     "4471234567",
//!     false,
//! )?;
//! assert_eq!(field.as_bytes()[0], 0x11);
//!
//! let received = AddressField::from_bytes(field.to_bytes());
//! assert_eq!(received.address().as_deref(), Some("4471234567"));
//! # Ok::<(), brivas_cap::CapError>(())
//! ```

pub mod address;
pub mod config;
pub mod errors;
pub mod gsm7;
pub mod header;
pub mod repr;
pub mod tbcd;
pub mod telemetry;
pub mod types;

// Re-exports
pub use address::{AddressField, AddressFieldBuilder};
pub use config::{AddressConfig, CapConfig, LogConfig};
pub use errors::{CapError, DecodingError, EncodingError, Result, ValidationError};
pub use header::AddressHeader;
pub use repr::AddressFieldRepr;
pub use types::{AddressNature, NumberingPlan};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
