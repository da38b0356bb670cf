//! `MAJOR.MINOR.PATCH[-EXTRA]` version values.
//!
//! Equality covers all four fields. Precedence covers only the numeric triple, so
//! `1.0.0-alpha` and `1.0.0-beta` are unequal but neither sorts before the other.


use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

/// Version string that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid version string: cannot convert {input:?} to a version")]
pub struct InvalidVersionFormat {
	/// The rejected input.
	pub input: String,
}

/// A major/minor/patch triple with an optional extra label (`snapshot`, `rc1`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
	major: u32,
	minor: u32,
	patch: u32,
	extra: String,
}

impl Version {
	/// Creates a version. An empty `extra` means no label.
	pub fn new(major: u32, minor: u32, patch: u32, extra: impl Into<String>) -> Self {
		Self {
			major,
			minor,
			patch,
			extra: extra.into(),
		}
	}

	/// Parses `MAJOR.MINOR.PATCH[-EXTRA]`.
	///
	/// Fields are separated by `.` or `-`. The first three must be integers; the
	/// label is everything after the third separator.
	pub fn parse(input: &str) -> Result<Self, InvalidVersionFormat> {
		let mut fields = input.splitn(4, |c: char| c == '.' || c == '-');

		let (Some(major), Some(minor), Some(patch)) = (
			component(fields.next()),
			component(fields.next()),
			component(fields.next()),
		) else {
			return Err(InvalidVersionFormat {
				input: input.to_string(),
			});
		};

		Ok(Self::new(major, minor, patch, fields.next().unwrap_or_default()))
	}

	pub fn major(&self) -> u32 {
		self.major
	}

	pub fn minor(&self) -> u32 {
		self.minor
	}

	pub fn patch(&self) -> u32 {
		self.patch
	}

	/// The extra label, empty when absent.
	pub fn extra(&self) -> &str {
		&self.extra
	}

	/// Returns true if the version carries an extra label.
	pub fn is_prerelease(&self) -> bool {
		!self.extra.is_empty()
	}

	/// Compares the numeric triple lexicographically, ignoring the label.
	pub fn cmp_precedence(&self, other: &Self) -> Ordering {
		(self.major, self.minor, self.patch).cmp(&(other.major, other.minor, other.patch))
	}
}

fn component(field: Option<&str>) -> Option<u32> {
	field?.parse().ok()
}

/// Orders by [`Version::cmp_precedence`]. Versions that share a triple but differ in
/// label are unordered, which keeps this consistent with `==`.
impl PartialOrd for Version {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		match self.cmp_precedence(other) {
			Ordering::Equal if self.extra != other.extra => None,
			ordering => Some(ordering),
		}
	}
}

impl fmt::Display for Version {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
		if !self.extra.is_empty() {
			write!(f, "-{}", self.extra)?;
		}
		Ok(())
	}
}

impl FromStr for Version {
	type Err = InvalidVersionFormat;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl Serialize for Version {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for Version {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let raw = String::deserialize(deserializer)?;
		raw.parse().map_err(de::Error::custom)
	}
}
