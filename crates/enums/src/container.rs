//! Append-only enum container.
//!
//! # Mental model
//!
//! * Members live in an insertion-ordered `Vec`, indexed by value for O(1) lookup.
//! * Insertion holds the write lock across the duplicate check and the append.
//! * The value→description map is derived lazily and published through an [`ArcSwapOption`].
//!   Insertion clears the slot under the write lock; readers rebuild under the read lock.
//!
//! # Invariants
//!
//! * `index` and `members` always agree: every indexed position holds the member with that
//!   value, and no value appears twice.
//! * A published description map reflects the member set at the time it was built. Because
//!   rebuilds hold the read lock and insertion holds the write lock, no insertion can land
//!   between a rebuild and its publication, so readers never see a stale map.
//!
//! # Concurrency & ordering
//!
//! * `get`, `contains`, `len`, `members`, and `to_member_map` take the read lock.
//! * `to_desc_map` is a lock-free load on the hot path. Concurrent rebuilds may race to publish;
//!   they build identical maps, so either winner is correct.

use std::borrow::{Borrow, Cow};
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use arc_swap::ArcSwapOption;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::{EnumError, EnumOptions, EnumValue, Member, OptionFn};

/// Value→description view returned by [`Enum::to_desc_map`].
pub type DescMap<V> = FxHashMap<V, String>;

/// Value→member view returned by [`Enum::to_member_map`].
pub type MemberMap<V> = FxHashMap<V, Member<V>>;

struct State<V> {
	members: Vec<Member<V>>,
	index: FxHashMap<V, usize>,
}

impl<V> Default for State<V> {
	fn default() -> Self {
		Self {
			members: Vec::new(),
			index: FxHashMap::default(),
		}
	}
}

/// Thread-safe, append-only set of enum members keyed by value.
pub struct Enum<V>
where
	V: EnumValue,
{
	label: Cow<'static, str>,
	options: EnumOptions,
	state: RwLock<State<V>>,
	desc_cache: ArcSwapOption<DescMap<V>>,
}

impl<V> Enum<V>
where
	V: EnumValue,
{
	/// Creates an empty container with default options.
	pub fn new() -> Self {
		Self::with_config(EnumOptions::default())
	}

	/// Creates an empty container, folding `fns` over the default options in order.
	pub fn with_options<I>(fns: I) -> Self
	where
		I: IntoIterator<Item = OptionFn>,
	{
		Self::with_config(EnumOptions::from_fns(fns))
	}

	/// Creates an empty container with an explicit options snapshot.
	pub fn with_config(options: EnumOptions) -> Self {
		Self {
			label: Cow::Borrowed(std::any::type_name::<Self>()),
			options,
			state: RwLock::new(State::default()),
			desc_cache: ArcSwapOption::empty(),
		}
	}

	/// Replaces the label used in errors and logs.
	pub fn with_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
		self.label = label.into();
		self
	}

	/// Returns the diagnostic label. Defaults to [`Self::type_name`].
	pub fn label(&self) -> &str {
		&self.label
	}

	/// Returns the Rust type name of this container.
	pub fn type_name(&self) -> &'static str {
		std::any::type_name::<Self>()
	}

	/// Returns the options this container was built with.
	pub fn options(&self) -> EnumOptions {
		self.options
	}

	/// Inserts a new member.
	///
	/// Fails with [`EnumError::Duplicate`] if `value` is already present; the error carries the
	/// existing member's description and the container is left untouched.
	pub fn insert(&self, value: V, desc: impl Into<String>) -> Result<Member<V>, EnumError<V>> {
		let mut guard = self.state.write();
		let state = &mut *guard;

		if let Some(&pos) = state.index.get(&value) {
			let existing = &state.members[pos];
			debug!(label = %self.label, value = ?existing.value(), "duplicate enum member rejected");
			return Err(EnumError::Duplicate {
				label: self.label.to_string(),
				value: existing.value().clone(),
				desc: existing.desc().to_owned(),
			});
		}

		let member = Member::new(value.clone(), desc);
		state.index.insert(value, state.members.len());
		state.members.push(member.clone());
		self.desc_cache.store(None);

		trace!(label = %self.label, value = ?member.value(), len = state.members.len(), "enum member inserted");
		Ok(member)
	}

	/// Like [`Self::insert`], but panics on a duplicate.
	///
	/// Intended for startup-time definitions where a duplicate is a programming error. Never
	/// call it with values derived from untrusted input.
	#[track_caller]
	pub fn must_insert(&self, value: V, desc: impl Into<String>) -> Member<V> {
		match self.insert(value, desc) {
			Ok(member) => member,
			Err(err) => panic!("{err}"),
		}
	}

	/// Inserts `entries` in order, stopping at the first duplicate.
	///
	/// Members inserted before the failing entry stay in the container.
	pub fn try_extend<I, D>(&self, entries: I) -> Result<(), EnumError<V>>
	where
		I: IntoIterator<Item = (V, D)>,
		D: Into<String>,
	{
		for (value, desc) in entries {
			self.insert(value, desc)?;
		}
		Ok(())
	}

	/// Looks up a member by value.
	pub fn get<Q>(&self, value: &Q) -> Result<Member<V>, EnumError<V>>
	where
		V: Borrow<Q>,
		Q: Hash + Eq + ToOwned<Owned = V> + ?Sized,
	{
		let state = self.state.read();
		match state.index.get(value) {
			Some(&pos) => Ok(state.members[pos].clone()),
			None => Err(EnumError::NotFound {
				label: self.label.to_string(),
				value: value.to_owned(),
			}),
		}
	}

	/// Like [`Self::get`], but panics if the value is absent.
	#[track_caller]
	pub fn must_get<Q>(&self, value: &Q) -> Member<V>
	where
		V: Borrow<Q>,
		Q: Hash + Eq + ToOwned<Owned = V> + ?Sized,
	{
		match self.get(value) {
			Ok(member) => member,
			Err(err) => panic!("{err}"),
		}
	}

	/// Returns true if a member holds `value`.
	pub fn contains<Q>(&self, value: &Q) -> bool
	where
		V: Borrow<Q>,
		Q: Hash + Eq + ?Sized,
	{
		self.state.read().index.contains_key(value)
	}

	/// Returns the number of members.
	pub fn len(&self) -> usize {
		self.state.read().members.len()
	}

	/// Returns true if the container has no members.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns a copy of all members in insertion order.
	pub fn members(&self) -> Vec<Member<V>> {
		self.state.read().members.clone()
	}

	/// Returns a snapshot of the members keyed by value.
	pub fn to_member_map(&self) -> MemberMap<V> {
		let state = self.state.read();
		state
			.members
			.iter()
			.map(|m| (m.value().clone(), m.clone()))
			.collect()
	}

	/// Returns the value→description map, rebuilding it only if an insertion happened since
	/// the last build.
	pub fn to_desc_map(&self) -> Arc<DescMap<V>> {
		if let Some(cached) = self.desc_cache.load_full() {
			return cached;
		}

		let state = self.state.read();
		// Another reader may have published while we waited for the lock.
		if let Some(cached) = self.desc_cache.load_full() {
			return cached;
		}

		let map: Arc<DescMap<V>> = Arc::new(
			state
				.members
				.iter()
				.map(|m| (m.value().clone(), m.desc().to_owned()))
				.collect(),
		);
		self.desc_cache.store(Some(Arc::clone(&map)));
		debug!(label = %self.label, len = map.len(), "rebuilt enum description map");
		map
	}
}

impl<V> Default for Enum<V>
where
	V: EnumValue,
{
	fn default() -> Self {
		Self::new()
	}
}

impl<V> fmt::Debug for Enum<V>
where
	V: EnumValue,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let state = self.state.read();
		f.debug_struct("Enum")
			.field("label", &self.label)
			.field("options", &self.options)
			.field("members", &state.members)
			.finish()
	}
}
