/// Picks `self` unless it is absent, otherwise `other`.
///
/// Absent means empty for strings and `None` for options. An option holding an
/// absent value is absent too, so `Some("")` falls through like `None` and blank
/// config values reach their defaults.
pub trait Coalesce: Sized {
	/// Returns true if this value should give way to a fallback.
	fn is_absent(&self) -> bool {
		false
	}

	fn coalesce(self, other: Self) -> Self {
		if self.is_absent() { other } else { self }
	}
}

impl<T: Coalesce> Coalesce for Option<T> {
	fn is_absent(&self) -> bool {
		self.as_ref().is_none_or(T::is_absent)
	}
}

impl Coalesce for &str {
	fn is_absent(&self) -> bool {
		self.is_empty()
	}
}

impl Coalesce for String {
	fn is_absent(&self) -> bool {
		self.is_empty()
	}
}

macro_rules! always_present {
	($($ty:ty),* $(,)?) => {
		$(impl Coalesce for $ty {})*
	};
}

always_present!(bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
