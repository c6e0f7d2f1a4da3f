use crate::{
	api,
	config,
	data::{self, User},
	notification::{notify, Kind},
	profile::{load_profile, save_profile, ProfileForm, SaveError, SaveOutcome},
	session,
	storage::SessionStore,
	util,
};
use yew::prelude::*;
use yew_hooks::use_mount;

mod edit_modal;
pub use edit_modal::*;

static UPDATED: &str = "Profile updated successfully!";
static UPDATE_FAILED: &str = "Failed to update profile";

/// Profile page for the signed-in user; anyone else is sent to the login page.
#[function_component]
pub fn ProfileManager() -> Html {
	let user = use_memo((), |_| session::current_user());
	{
		let signed_in = user.is_some();
		use_mount(move || {
			if !signed_in {
				log::info!(target: "profile", "no session, redirecting to login");
				util::redirect(config::LOGIN_PAGE);
			}
		});
	}
	match &*user {
		Some(user) => html! { <ProfileView cached={user.clone()} /> },
		None => html! {},
	}
}

#[derive(Properties, PartialEq)]
pub struct ProfileViewProps {
	/// The session record at page load.
	pub cached: User,
}

#[function_component]
pub fn ProfileView(props: &ProfileViewProps) -> Html {
	let shown = use_state_eq(|| props.cached.clone());
	let editing = use_state_eq(|| None::<ProfileForm>);

	{
		let shown = shown.clone();
		let cached = props.cached.clone();
		use_mount(move || {
			wasm_bindgen_futures::spawn_local(async move {
				let user = load_profile(&api::Client::from_document(), &cached).await;
				shown.set(user);
			});
		});
	}

	let open_editor = {
		let editing = editing.clone();
		let fallback = props.cached.clone();
		Callback::from(move |_: MouseEvent| {
			let editing = editing.clone();
			let cached = session::current_user().unwrap_or_else(|| fallback.clone());
			wasm_bindgen_futures::spawn_local(async move {
				let user = load_profile(&api::Client::from_document(), &cached).await;
				editing.set(Some(ProfileForm::from_user(&user)));
			});
		})
	};
	let close_editor = {
		let editing = editing.clone();
		Callback::from(move |()| editing.set(None))
	};
	let submit = {
		let editing = editing.clone();
		let shown = shown.clone();
		let fallback = props.cached.clone();
		Callback::from(move |form: ProfileForm| {
			let editing = editing.clone();
			let shown = shown.clone();
			let cached = session::current_user().unwrap_or_else(|| fallback.clone());
			util::spawn_local("profile", async move {
				let result = save(&cached, &form).await;
				if let Some(user) = result.as_ref().ok().and_then(SaveOutcome::user) {
					shown.set(user.clone());
					editing.set(None);
				}
				let (message, kind) = save_notice(&result);
				notify(message, kind);
				result.map(|_| ())
			});
		})
	};
	let logout = Callback::from(|_: MouseEvent| {
		session::end();
		notify("You have been logged out successfully.", Kind::Success);
		util::redirect_after(config::LOGIN_PAGE, config::LOGOUT_REDIRECT_DELAY_MS);
	});

	html! {<>
		<div class="profile-card">
			<div class="profile-info">
				<div class="info-row">
					<span class="info-label">{"Name"}</span>
					<span class="info-value" id="profile-username">{data::display(&shown.username)}</span>
				</div>
				<div class="info-row">
					<span class="info-label">{"Email"}</span>
					<span class="info-value" id="profile-email">{display_email(&shown)}</span>
				</div>
				<div class="info-row">
					<span class="info-label">{"Phone"}</span>
					<span class="info-value" id="profile-phone">{data::display(&shown.phone)}</span>
				</div>
				<div class="info-row">
					<span class="info-label">{"Address"}</span>
					<span class="info-value" id="profile-address">{data::display(&shown.address)}</span>
				</div>
			</div>
			<div class="profile-actions">
				<button class="edit-profile" onclick={open_editor}>
					<i class="bx bx-edit" />{"Edit Profile"}
				</button>
				<button class="logout-btn" onclick={logout}>
					<i class="bx bx-log-out" />{"Logout"}
				</button>
			</div>
		</div>
		if let Some(form) = &*editing {
			<EditModal form={form.clone()} on_close={close_editor} on_submit={submit} />
		}
	</>}
}

async fn save(cached: &User, form: &ProfileForm) -> Result<SaveOutcome, SaveError> {
	let store = SessionStore::open()?;
	let client = api::Client::from_document();
	Ok(save_profile(&client, &store, cached, form, config::PROFILE_WRITE_POLICY).await?)
}

/// What to tell the user once a save attempt settles.
fn save_notice(result: &Result<SaveOutcome, SaveError>) -> (String, Kind) {
	match result {
		Ok(SaveOutcome::Saved(_) | SaveOutcome::SavedLocally { .. }) => (UPDATED.to_owned(), Kind::Success),
		Ok(SaveOutcome::Rejected(err)) => (err.message_or(UPDATE_FAILED), Kind::Error),
		Err(SaveError::Invalid(err)) => (format!("{err}."), Kind::Error),
		Err(SaveError::Storage(_)) => (UPDATE_FAILED.to_owned(), Kind::Error),
	}
}

fn display_email(user: &User) -> &str {
	match user.email.is_empty() {
		true => data::NOT_PROVIDED,
		false => &user.email,
	}
}
