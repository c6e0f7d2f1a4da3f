use crate::{
	data::User,
	storage::{self, SessionStore, Store},
};
use serde::{de::DeserializeOwned, Serialize};

pub trait SessionValue: Serialize + DeserializeOwned {
	fn id() -> &'static str;

	/// Unreadable entries are treated as if they were never written.
	fn load(store: &impl Store) -> Option<Self> {
		match store.get::<Self>(Self::id()) {
			Ok(value) => value,
			Err(err) => {
				log::warn!(target: "session", "ignoring unreadable {:?} entry: {err}", Self::id());
				None
			}
		}
	}

	fn apply_to_session(&self, store: &impl Store) -> Result<(), storage::Error> {
		store.set(Self::id(), self)
	}

	fn delete(store: &impl Store) {
		store.delete(Self::id());
	}
}

impl SessionValue for User {
	fn id() -> &'static str {
		"currentUser"
	}
}

/// The signed-in user for this tab, if any.
pub fn current_user() -> Option<User> {
	match SessionStore::open() {
		Ok(store) => User::load(&store),
		Err(err) => {
			log::warn!(target: "session", "{err}");
			None
		}
	}
}

/// Forget the signed-in user.
pub fn end() {
	match SessionStore::open() {
		Ok(store) => User::delete(&store),
		Err(err) => log::warn!(target: "session", "{err}"),
	}
}
