//! License risk classification for repository search hits.
//!
//! - [`spdx`]: the known identifier sets (permissive, copyleft) and the
//!   non-commercial markers.
//! - [`classifier`]: entry point mapping an optional identifier onto one of
//!   the four [`LicenseStatus`](crate::models::LicenseStatus) categories.

pub mod classifier;
pub mod spdx;
