//! Construction-time options for [`crate::Enum`].

use serde::Deserialize;

/// Boxed option function folded over [`EnumOptions::default`] at construction.
pub type OptionFn = Box<dyn FnOnce(&mut EnumOptions) + Send>;

/// Options snapshot held by every container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EnumOptions {
	/// Reserved for future validation rules. Has no effect on container behavior.
	pub strict: bool,
}

impl EnumOptions {
	/// Folds option functions over the defaults, in order. Later functions win.
	pub fn from_fns<I>(fns: I) -> Self
	where
		I: IntoIterator<Item = OptionFn>,
	{
		let mut opts = Self::default();
		for apply in fns {
			apply(&mut opts);
		}
		opts
	}
}

/// Sets [`EnumOptions::strict`].
pub fn strict(enabled: bool) -> OptionFn {
	Box::new(move |opts| opts.strict = enabled)
}
