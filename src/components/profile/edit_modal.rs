use crate::{
	profile::{ProfileField, ProfileForm},
	util::web_ext::InputExt,
};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct EditModalProps {
	/// Initial contents; the modal edits its own copy.
	pub form: ProfileForm,
	pub on_close: Callback<()>,
	pub on_submit: Callback<ProfileForm>,
}

#[function_component]
pub fn EditModal(props: &EditModalProps) -> Html {
	let state = use_state_eq({
		let form = props.form.clone();
		move || form
	});

	fn field(state: &UseStateHandle<ProfileForm>, field: ProfileField) -> Callback<InputEvent> {
		let state = state.clone();
		Callback::from(move |ev: InputEvent| {
			let value = match field.is_multiline() {
				true => ev.textarea_value(),
				false => ev.input_value(),
			};
			let Some(value) = value else {
				log::warn!(target: "profile", "no value for {field:?}");
				return;
			};
			let mut form = (*state).clone();
			form.set(field, value);
			state.set(form);
		})
	}

	let close = {
		let on_close = props.on_close.clone();
		Callback::from(move |_: MouseEvent| on_close.emit(()))
	};
	let submit = {
		let state = state.clone();
		let on_submit = props.on_submit.clone();
		Callback::from(move |ev: SubmitEvent| {
			ev.prevent_default();
			match state.password_error() {
				Some(err) => log::debug!(target: "profile", "blocked submit: {err}"),
				None => on_submit.emit((*state).clone()),
			}
		})
	};

	let mismatch = state.password_error();
	html! {
		<div class="modal" id="edit-profile-modal" style="display: block;">
			<div class="modal-content">
				<span class="close-modal" onclick={close.clone()}>{"×"}</span>
				<h2>{"Edit Profile"}</h2>
				<form id="edit-profile-form" onsubmit={submit}>
					<div class="form-group">
						<label for="name">{"Full Name"}</label>
						<input type="text" id="name" name="username" value={state.username.clone()}
							oninput={field(&state, ProfileField::Username)} />
					</div>
					<div class="form-group">
						<label for="email">{"Email"}</label>
						<input type="email" id="email" name="email" value={state.email.clone()}
							oninput={field(&state, ProfileField::Email)} />
					</div>
					<div class="form-group">
						<label for="phone">{"Phone"}</label>
						<input type="tel" id="phone" name="phone" value={state.phone.clone()}
							oninput={field(&state, ProfileField::Phone)} />
					</div>
					<div class="form-group">
						<label for="address">{"Address"}</label>
						<textarea id="address" name="address" value={state.address.clone()}
							oninput={field(&state, ProfileField::Address)} />
					</div>
					<h3>{"Change Password"}</h3>
					<div class="form-group">
						<label for="current-password">{"Current Password"}</label>
						<input type="password" id="current-password" name="currentPassword"
							value={state.current_password.clone()}
							oninput={field(&state, ProfileField::CurrentPassword)} />
					</div>
					<div class="form-group">
						<label for="new-password">{"New Password"}</label>
						<input type="password" id="new-password" name="newPassword"
							value={state.new_password.clone()}
							oninput={field(&state, ProfileField::NewPassword)} />
					</div>
					<div class="form-group">
						<label for="confirm-password">{"Confirm New Password"}</label>
						<input type="password" id="confirm-password" name="confirmPassword"
							value={state.confirm_password.clone()}
							oninput={field(&state, ProfileField::ConfirmPassword)} />
						if let Some(err) = mismatch {
							<span class="field-error">{err.to_string()}</span>
						}
					</div>
					<div class="form-actions">
						<button type="button" class="cancel-edit" onclick={close}>{"Cancel"}</button>
						<button type="submit" class="save-profile" disabled={mismatch.is_some()}>{"Save Changes"}</button>
					</div>
				</form>
			</div>
		</div>
	}
}
