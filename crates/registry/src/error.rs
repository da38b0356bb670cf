/// Registry lookup error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
	/// No entry is registered under the requested key.
	#[error("key not found: {key}")]
	KeyNotFound {
		/// `Debug` rendering of the missing key.
		key: String,
	},
}

impl RegistryError {
	pub(crate) fn key_not_found(key: &impl std::fmt::Debug) -> Self {
		Self::KeyNotFound {
			key: format!("{key:?}"),
		}
	}
}
