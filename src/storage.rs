use gloo_storage::{errors::StorageError, LocalStorage, SessionStorage};
use serde::{de::DeserializeOwned, Serialize};
use std::marker::PhantomData;

/// Session-scoped browser storage, cleared when the tab closes.
pub type SessionStore = Browser<SessionStorage>;
/// Durable browser storage shared by every page of the site.
pub type LocalStore = Browser<LocalStorage>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error("storage is unavailable: {0}")]
	Unavailable(String),
	#[error(transparent)]
	Malformed(#[from] serde_json::Error),
}

/// A key-value area holding json documents.
pub trait Store {
	/// Returns `Ok(None)` when the key has never been written.
	fn get<T>(&self, key: &str) -> Result<Option<T>, Error>
	where
		T: DeserializeOwned;

	fn set<T>(&self, key: &str, value: &T) -> Result<(), Error>
	where
		T: Serialize;

	fn delete(&self, key: &str);
}

/// A gloo storage area whose presence can be checked without panicking.
pub trait Area: gloo_storage::Storage {
	fn probe() -> Result<Option<web_sys::Storage>, wasm_bindgen::JsValue>;
}
impl Area for LocalStorage {
	fn probe() -> Result<Option<web_sys::Storage>, wasm_bindgen::JsValue> {
		gloo_utils::window().local_storage()
	}
}
impl Area for SessionStorage {
	fn probe() -> Result<Option<web_sys::Storage>, wasm_bindgen::JsValue> {
		gloo_utils::window().session_storage()
	}
}

pub struct Browser<S>(PhantomData<S>);
impl<S> std::fmt::Debug for Browser<S> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(std::any::type_name::<S>())
	}
}
impl<S> Browser<S>
where
	S: Area,
{
	/// Private browsing modes and strict cookie settings can refuse access,
	/// which gloo would otherwise turn into a panic on first use.
	pub fn open() -> Result<Self, Error> {
		match S::probe() {
			Ok(Some(_)) => Ok(Self(PhantomData)),
			Ok(None) => Err(Error::Unavailable("storage area is not provided by this window".into())),
			Err(err) => Err(Error::Unavailable(format!("{err:?}"))),
		}
	}
}
impl<S> Store for Browser<S>
where
	S: Area,
{
	fn get<T>(&self, key: &str) -> Result<Option<T>, Error>
	where
		T: DeserializeOwned,
	{
		match S::get::<T>(key) {
			Ok(value) => Ok(Some(value)),
			Err(StorageError::KeyNotFound(_)) => Ok(None),
			Err(StorageError::SerdeError(err)) => Err(Error::Malformed(err)),
			Err(err) => Err(Error::Unavailable(err.to_string())),
		}
	}

	fn set<T>(&self, key: &str, value: &T) -> Result<(), Error>
	where
		T: Serialize,
	{
		match S::set(key, value) {
			Ok(()) => Ok(()),
			Err(StorageError::SerdeError(err)) => Err(Error::Malformed(err)),
			Err(err) => Err(Error::Unavailable(err.to_string())),
		}
	}

	fn delete(&self, key: &str) {
		S::delete(key);
	}
}

#[cfg(test)]
pub use memory::Memory;
