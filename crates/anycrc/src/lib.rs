//! CRC checksums for arbitrary parameter sets.
//!
//! Any CRC of width 1 to 64 bits is described by a [`ParameterSet`] (the
//! Rocksoft model: `width`, `poly`, `init`, `refin`, `refout`, `xorout`, plus
//! the `check` value of `"123456789"`). Two engines compute it:
//!
//! | Engine | Strategy | Notes |
//! |--------|----------|-------|
//! | [`BitwiseCrc`] | one bit at a time | reference; `const fn`; no allocation |
//! | [`TableCrc`] | one byte at a time | 256-entry table shared via [`TableCache`] (`std`) |
//!
//! Both implement [`Checksum`] and produce identical results for every valid
//! parameter set and input. [`fixed`] holds hand-rolled engines for two
//! specific algorithms, and [`catalog`] names over a hundred published ones.
//!
//! # Example
//!
//! ```rust
//! use anycrc::{BitwiseCrc, Checksum, TableCrc, catalog};
//!
//! let params = catalog::CRC_32_ISO_HDLC;
//!
//! let mut table = TableCrc::new(params);
//! table.update(b"1234");
//! table.update(b"56789");
//! assert_eq!(table.value(), 0xCBF4_3926);
//!
//! assert_eq!(BitwiseCrc::checksum(&params, b"123456789"), table.value());
//! ```
//!
//! Custom algorithms are built and validated the same way:
//!
//! ```rust
//! use anycrc::{Checksum, ParameterSet};
//!
//! let sata = ParameterSet::new("CRC-32/SATA", 32, 0x04C1_1DB7, 0x5232_5032, false, false, 0, 0xCF72_AFE8)?;
//! sata.self_test()?;
//! assert_eq!(anycrc::make_table_engine(sata).digest(b"123456789"), 0xCF72_AFE8);
//! # Ok::<(), anycrc::CrcError>(())
//! ```
//!
//! # no_std Support
//!
//! Without the default `std` feature only the bitwise engine, the fixed
//! engines and the catalog are available.
//!
//! ```toml
//! [dependencies]
//! anycrc = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod bitwise;
pub mod catalog;
mod error;
pub mod fixed;
mod params;
pub mod reflect;
#[cfg(feature = "std")]
pub mod table;

#[cfg(all(test, feature = "std"))]
mod proptests;

pub use bitwise::BitwiseCrc;
pub use error::CrcError;
pub use params::{CHECK_INPUT, ParameterSet};
#[cfg(feature = "std")]
pub use table::{CacheStats, CrcTable, TableCache, TableCrc};
pub use traits::Checksum;
#[cfg(feature = "std")]
pub use traits::io::{ChecksumReader, ChecksumWriter};

/// A bitwise engine for `params`.
#[inline]
#[must_use]
pub const fn make_bitwise_engine(params: ParameterSet) -> BitwiseCrc {
  BitwiseCrc::new(params)
}

/// A table engine for `params`, backed by the process-wide cache.
#[cfg(feature = "std")]
#[inline]
#[must_use]
pub fn make_table_engine(params: ParameterSet) -> TableCrc {
  TableCrc::new(params)
}
