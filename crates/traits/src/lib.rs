//! Engine contract shared by every `anycrc` CRC engine.
//!
//! This crate is `no_std` compatible and has zero dependencies. It defines the
//! single trait both CRC engine kinds conform to, so code that feeds bytes into
//! "some CRC" can be written once and monomorphized for whichever engine the
//! caller picked.
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`Checksum`] | `reset` / `update` / `value` / `parameters` |
//! | [`io::ChecksumReader`] | Feed everything read from a `Read` into an engine (`std`) |
//! | [`io::ChecksumWriter`] | Feed everything written to a `Write` into an engine (`std`) |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod checksum;
pub mod io;

pub use checksum::Checksum;
