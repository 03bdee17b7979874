//! MAC address value type.
//!
//! The native layer identifies a physical armband by a 48-bit MAC address
//! carried as the low bits of a `u64`. The canonical string form is
//! `XX-XX-XX-XX-XX-XX` in upper-case hex.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A 48-bit MAC address. Instances are immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MacAddress(u64);

impl MacAddress {
    /// The largest representable address value.
    pub const MAX: u64 = (1 << 48) - 1;

    /// Construct from a numeric value, rejecting anything outside the
    /// 48-bit range.
    pub fn new(value: u64) -> Result<Self> {
        if value > Self::MAX {
            return Err(Error::invalid_argument(format!(
                "value {value:#x} exceeds the MAC address range"
            )));
        }
        Ok(Self(value))
    }

    /// Construct from a native value, truncating to 48 bits. The native
    /// layer keeps the upper bits zero by contract.
    pub const fn from_raw(value: u64) -> Self {
        Self(value & Self::MAX)
    }

    /// The numeric value of this address.
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let octets = self.0.to_be_bytes();
        write!(
            f,
            "{:02X}-{:02X}-{:02X}-{:02X}-{:02X}-{:02X}",
            octets[2], octets[3], octets[4], octets[5], octets[6], octets[7]
        )
    }
}

impl FromStr for MacAddress {
    type Err = Error;

    /// Parse the canonical `XX-XX-XX-XX-XX-XX` form. `:` is accepted as a
    /// separator as well, since several host tools print it that way.
    fn from_str(s: &str) -> Result<Self> {
        let digits: String = s.chars().filter(|c| *c != '-' && *c != ':').collect();
        if digits.len() != 12 || s.len() > 17 {
            return Err(Error::invalid_argument(format!("not a valid MAC address: {s:?}")));
        }
        let value = u64::from_str_radix(&digits, 16)
            .map_err(|_| Error::invalid_argument(format!("not a valid MAC address: {s:?}")))?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_in_canonical_dashed_hex() {
        let mac = MacAddress::new(0x0A_1B_2C_3D_4E_5F).unwrap();
        assert_eq!(mac.to_string(), "0A-1B-2C-3D-4E-5F");
        assert_eq!(MacAddress::default().to_string(), "00-00-00-00-00-00");
    }

    #[test]
    fn parses_dashed_and_colon_separated_forms() {
        let dashed: MacAddress = "0A-1B-2C-3D-4E-5F".parse().unwrap();
        let colons: MacAddress = "0a:1b:2c:3d:4e:5f".parse().unwrap();
        assert_eq!(dashed, colons);
        assert_eq!(dashed.as_u64(), 0x0A_1B_2C_3D_4E_5F);
    }

    #[test]
    fn rejects_out_of_range_values_and_malformed_strings() {
        assert!(MacAddress::new(MacAddress::MAX).is_ok());
        assert!(MacAddress::new(MacAddress::MAX + 1).is_err());

        for s in ["", "0A-1B-2C", "0A-1B-2C-3D-4E-5F-60", "zz-1b-2c-3d-4e-5f"] {
            assert!(s.parse::<MacAddress>().is_err(), "parsed {s:?}");
        }
    }

    #[test]
    fn from_raw_truncates_to_48_bits() {
        let mac = MacAddress::from_raw(0xFFFF_0A1B_2C3D_4E5F);
        assert_eq!(mac.as_u64(), 0x0A1B_2C3D_4E5F);
    }
}
