use crate::{
	api::{self, UserApi},
	data::{User, UserUpdate},
	session::SessionValue,
	storage::{self, Store},
};

/// What to do with the cached session record when the backend rejects or
/// never receives a profile update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WritePolicy {
	/// Apply the edit locally and report success anyway. Client and server
	/// can diverge until the next successful load.
	Optimistic,
	/// Leave the cache untouched and report the failure.
	Strict,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
	#[error("Passwords do not match")]
	PasswordMismatch,
}

/// Why a save never reached the backend.
#[derive(thiserror::Error, Debug)]
pub enum SaveError {
	#[error(transparent)]
	Invalid(#[from] ValidationError),
	#[error(transparent)]
	Storage(#[from] storage::Error),
}

/// One control of the edit profile form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProfileField {
	Username,
	Email,
	Phone,
	Address,
	CurrentPassword,
	NewPassword,
	ConfirmPassword,
}

impl ProfileField {
	/// Address is edited in a textarea; every other field is an input.
	pub fn is_multiline(self) -> bool {
		matches!(self, Self::Address)
	}
}

/// Contents of the edit profile form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
	pub username: String,
	pub email: String,
	pub phone: String,
	pub address: String,
	pub current_password: String,
	pub new_password: String,
	pub confirm_password: String,
}

impl ProfileForm {
	/// Password fields always start empty.
	pub fn from_user(user: &User) -> Self {
		Self {
			username: user.username.clone().unwrap_or_default(),
			email: user.email.clone(),
			phone: user.phone.clone().unwrap_or_default(),
			address: user.address.clone().unwrap_or_default(),
			..Default::default()
		}
	}

	pub fn set(&mut self, field: ProfileField, value: String) {
		let slot = match field {
			ProfileField::Username => &mut self.username,
			ProfileField::Email => &mut self.email,
			ProfileField::Phone => &mut self.phone,
			ProfileField::Address => &mut self.address,
			ProfileField::CurrentPassword => &mut self.current_password,
			ProfileField::NewPassword => &mut self.new_password,
			ProfileField::ConfirmPassword => &mut self.confirm_password,
		};
		*slot = value;
	}

	pub fn password_error(&self) -> Option<ValidationError> {
		match !self.new_password.is_empty() && self.new_password != self.confirm_password {
			true => Some(ValidationError::PasswordMismatch),
			false => None,
		}
	}

	/// The request body for this form. A password change is only sent when
	/// both the current and the new password were filled in.
	pub fn validate(&self) -> Result<UserUpdate, ValidationError> {
		if let Some(err) = self.password_error() {
			return Err(err);
		}
		let change_password = !self.current_password.is_empty() && !self.new_password.is_empty();
		Ok(UserUpdate {
			username: self.username.clone(),
			email: self.email.clone(),
			phone: self.phone.clone(),
			address: self.address.clone(),
			current_password: change_password.then(|| self.current_password.clone()),
			new_password: change_password.then(|| self.new_password.clone()),
		})
	}
}

/// The cached record with the edited fields applied. The email stays as
/// cached since it keys the record.
pub fn merge(cached: &User, update: &UserUpdate) -> User {
	User {
		username: Some(update.username.clone()),
		phone: Some(update.phone.clone()),
		address: Some(update.address.clone()),
		..cached.clone()
	}
}

#[derive(Debug)]
pub enum SaveOutcome {
	Saved(User),
	/// The backend call failed but the edit was kept locally.
	SavedLocally { user: User, error: api::Error },
	/// The backend call failed and nothing was changed.
	Rejected(api::Error),
}

impl SaveOutcome {
	pub fn user(&self) -> Option<&User> {
		match self {
			Self::Saved(user) | Self::SavedLocally { user, .. } => Some(user),
			Self::Rejected(_) => None,
		}
	}
}

/// The freshest record available: the backend's, else the cached one.
pub async fn load_profile<A>(api: &A, cached: &User) -> User
where
	A: UserApi,
{
	match api.fetch_user(&cached.email).await {
		Ok(user) => user,
		Err(err) => {
			log::warn!(target: "profile", "using cached profile, fetch failed: {err}");
			cached.clone()
		}
	}
}

/// Validate and submit `form`, then update the cached record according to
/// `policy`. Invalid forms never reach the backend.
pub async fn save_profile<A, S>(
	api: &A,
	store: &S,
	cached: &User,
	form: &ProfileForm,
	policy: WritePolicy,
) -> Result<SaveOutcome, ValidationError>
where
	A: UserApi,
	S: Store,
{
	let update = form.validate()?;
	let outcome = match api.update_user(&cached.email, &update).await {
		Ok(_) => SaveOutcome::Saved(merge(cached, &update)),
		Err(error) => match policy {
			WritePolicy::Optimistic => {
				log::warn!(target: "profile", "update failed, keeping edit locally: {error}");
				SaveOutcome::SavedLocally {
					user: merge(cached, &update),
					error,
				}
			}
			WritePolicy::Strict => {
				log::error!(target: "profile", "update failed: {error}");
				SaveOutcome::Rejected(error)
			}
		},
	};
	if let Some(user) = outcome.user() {
		if let Err(err) = user.apply_to_session(store) {
			log::error!(target: "profile", "could not cache updated profile: {err}");
		}
	}
	Ok(outcome)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::storage::Memory;
	use futures::executor::block_on;
	use futures_util::future::LocalBoxFuture;
	use std::cell::{Cell, RefCell};

	/// Answers with `user`, or fails every call with a 503 when `user` is None.
	#[derive(Default)]
	struct FakeUsers {
		user: Option<User>,
		calls: Cell<usize>,
		sent: RefCell<Option<UserUpdate>>,
	}

	impl FakeUsers {
		fn answer(&self) -> Result<User, api::Error> {
			self.calls.set(self.calls.get() + 1);
			self.user.clone().ok_or(api::Error::Status {
				status: 503,
				message: Some("Service unavailable".into()),
			})
		}
	}

	impl UserApi for FakeUsers {
		fn fetch_user<'a>(&'a self, _email: &'a str) -> LocalBoxFuture<'a, Result<User, api::Error>> {
			Box::pin(async move { self.answer() })
		}

		fn update_user<'a>(
			&'a self,
			_email: &'a str,
			update: &'a UserUpdate,
		) -> LocalBoxFuture<'a, Result<User, api::Error>> {
			Box::pin(async move {
				*self.sent.borrow_mut() = Some(update.clone());
				self.answer()
			})
		}
	}

	fn cached() -> User {
		let mut extra = serde_json::Map::new();
		extra.insert("id".into(), 4.into());
		User {
			email: "asha@example.com".into(),
			username: Some("asha".into()),
			phone: None,
			address: Some("12 Hill Rd".into()),
			extra,
		}
	}

	fn edited() -> ProfileForm {
		ProfileForm {
			username: "Asha K".into(),
			phone: "555-0101".into(),
			..ProfileForm::from_user(&cached())
		}
	}

	#[test]
	fn form_starts_from_record() {
		let form = ProfileForm::from_user(&cached());
		assert_eq!(form.username, "asha");
		assert_eq!(form.phone, "");
		assert_eq!(form.address, "12 Hill Rd");
		assert!(form.current_password.is_empty() && form.new_password.is_empty());
	}

	#[test]
	fn mismatched_confirmation_blocks() {
		let form = ProfileForm {
			current_password: "old".into(),
			new_password: "secret1".into(),
			confirm_password: "secret2".into(),
			..edited()
		};
		assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));
	}

	#[test]
	fn password_sent_only_with_current_password() {
		let form = ProfileForm {
			new_password: "secret".into(),
			confirm_password: "secret".into(),
			..edited()
		};
		let update = form.validate().unwrap();
		assert_eq!(update.new_password, None);
		assert_eq!(update.current_password, None);

		let form = ProfileForm {
			current_password: "old".into(),
			..form
		};
		let update = form.validate().unwrap();
		assert_eq!(update.current_password.as_deref(), Some("old"));
		assert_eq!(update.new_password.as_deref(), Some("secret"));
	}

	#[test]
	fn edited_address_reaches_request_and_cache() {
		assert!(ProfileField::Address.is_multiline());
		assert!(!ProfileField::Phone.is_multiline());

		let mut form = ProfileForm::from_user(&cached());
		form.set(ProfileField::Address, "12 Lake Road\nPune".into());
		let update = form.validate().unwrap();
		assert_eq!(update.address, "12 Lake Road\nPune");
		assert_eq!(merge(&cached(), &update).address.as_deref(), Some("12 Lake Road\nPune"));
	}

	#[test]
	fn confirmation_is_checked_as_typed() {
		let mut form = ProfileForm::from_user(&cached());
		form.set(ProfileField::NewPassword, "secret".into());
		assert_eq!(form.password_error(), Some(ValidationError::PasswordMismatch));
		form.set(ProfileField::ConfirmPassword, "secret".into());
		assert_eq!(form.password_error(), None);
	}

	#[test]
	fn merge_keeps_identity_and_extras() {
		let update = UserUpdate {
			email: "other@example.com".into(),
			..edited().validate().unwrap()
		};
		let merged = merge(&cached(), &update);
		assert_eq!(merged.email, "asha@example.com");
		assert_eq!(merged.username.as_deref(), Some("Asha K"));
		assert_eq!(merged.phone.as_deref(), Some("555-0101"));
		assert_eq!(merged.extra["id"], 4);
	}

	#[test]
	fn load_prefers_backend() {
		let fresh = User {
			phone: Some("555-0199".into()),
			..cached()
		};
		let api = FakeUsers {
			user: Some(fresh.clone()),
			..Default::default()
		};
		assert_eq!(block_on(load_profile(&api, &cached())), fresh);
	}

	#[test]
	fn load_falls_back_to_cache() {
		let api = FakeUsers::default();
		assert_eq!(block_on(load_profile(&api, &cached())), cached());
		assert_eq!(api.calls.get(), 1);
	}

	#[test]
	fn successful_save_updates_cache() {
		let store = Memory::default();
		let api = FakeUsers {
			user: Some(cached()),
			..Default::default()
		};
		let outcome = block_on(save_profile(&api, &store, &cached(), &edited(), WritePolicy::Strict)).unwrap();
		assert!(matches!(outcome, SaveOutcome::Saved(_)));
		let stored = User::load(&store).unwrap();
		assert_eq!(stored.username.as_deref(), Some("Asha K"));
		assert_eq!(api.sent.borrow().as_ref().map(|sent| sent.phone.as_str()), Some("555-0101"));
	}

	#[test]
	fn failed_save_is_kept_locally_when_optimistic() {
		let store = Memory::default();
		cached().apply_to_session(&store).unwrap();
		let api = FakeUsers::default();
		let outcome =
			block_on(save_profile(&api, &store, &cached(), &edited(), WritePolicy::Optimistic)).unwrap();
		assert!(matches!(outcome, SaveOutcome::SavedLocally { .. }));
		let stored = User::load(&store).unwrap();
		assert_eq!(stored.username.as_deref(), Some("Asha K"));
		assert_eq!(stored.phone.as_deref(), Some("555-0101"));
	}

	#[test]
	fn failed_save_changes_nothing_when_strict() {
		let store = Memory::default();
		cached().apply_to_session(&store).unwrap();
		let api = FakeUsers::default();
		let outcome = block_on(save_profile(&api, &store, &cached(), &edited(), WritePolicy::Strict)).unwrap();
		let error = match outcome {
			SaveOutcome::Rejected(error) => error,
			other => panic!("expected a rejection, got {other:?}"),
		};
		assert_eq!(error.message_or("Failed to update profile"), "Service unavailable");
		assert_eq!(User::load(&store), Some(cached()));
	}

	#[test]
	fn invalid_form_makes_no_call() {
		let store = Memory::default();
		let api = FakeUsers::default();
		let form = ProfileForm {
			new_password: "a".into(),
			confirm_password: "b".into(),
			..edited()
		};
		let result = block_on(save_profile(&api, &store, &cached(), &form, WritePolicy::Optimistic));
		assert!(matches!(result, Err(ValidationError::PasswordMismatch)));
		assert_eq!(api.calls.get(), 0);
		assert_eq!(User::load(&store), None);
	}
}
