//! Hardware address parsing.
//!
//! Accepts the usual textual forms of IEEE 802 MAC-48, EUI-48, EUI-64 and
//! 20-octet IP over InfiniBand addresses:
//!
//! ```text
//! 00:00:5e:00:53:01
//! 00-00-5E-00-53-01
//! 0000.5e00.5301
//! 02:00:5e:10:00:00:00:01
//! ```
//!
//! Parsed addresses always display as lowercase, colon-separated octets.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid MAC address {0:?}")]
pub struct ParseMacError(pub String);

/// A hardware address of 6, 8 or 20 octets.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MacAddr(Vec<u8>);

impl MacAddr {
  pub fn octets(&self) -> &[u8] {
    &self.0
  }
}

fn valid_octet_count(n: usize) -> bool {
  matches!(n, 6 | 8 | 20)
}

fn hex_byte(pair: &[u8]) -> Option<u8> {
  let s = std::str::from_utf8(pair).ok()?;
  if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
    return None;
  }
  u8::from_str_radix(s, 16).ok()
}

impl FromStr for MacAddr {
  type Err = ParseMacError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let err = || ParseMacError(s.to_string());
    let bytes = s.as_bytes();
    if bytes.len() < 14 {
      return Err(err());
    }

    let octets = if bytes[2] == b':' || bytes[2] == b'-' {
      // xx:xx:xx:xx:xx:xx
      if (bytes.len() + 1) % 3 != 0 {
        return Err(err());
      }
      let n = (bytes.len() + 1) / 3;
      if !valid_octet_count(n) {
        return Err(err());
      }
      let sep = bytes[2];
      let mut octets = Vec::with_capacity(n);
      for (i, chunk) in bytes.chunks(3).enumerate() {
        if i + 1 < n && chunk.get(2) != Some(&sep) {
          return Err(err());
        }
        octets.push(hex_byte(&chunk[..2]).ok_or_else(err)?);
      }
      octets
    } else if bytes[4] == b'.' {
      // xxxx.xxxx.xxxx
      if (bytes.len() + 1) % 5 != 0 {
        return Err(err());
      }
      let n = 2 * (bytes.len() + 1) / 5;
      if !valid_octet_count(n) {
        return Err(err());
      }
      let mut octets = Vec::with_capacity(n);
      for (i, chunk) in bytes.chunks(5).enumerate() {
        if i + 1 < n / 2 && chunk.get(4) != Some(&b'.') {
          return Err(err());
        }
        octets.push(hex_byte(&chunk[..2]).ok_or_else(err)?);
        octets.push(hex_byte(&chunk[2..4]).ok_or_else(err)?);
      }
      octets
    } else {
      return Err(err());
    };

    Ok(MacAddr(octets))
  }
}

impl fmt::Display for MacAddr {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, octet) in self.0.iter().enumerate() {
      if i > 0 {
        f.write_str(":")?;
      }
      write!(f, "{:02x}", octet)?;
    }
    Ok(())
  }
}
