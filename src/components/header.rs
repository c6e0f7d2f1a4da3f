use crate::{config, data::User, session, util};
use yew::prelude::*;

/// Which header affordances to show for the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderLinks {
	/// Where the profile icons (desktop and mobile) lead.
	pub profile_href: &'static str,
	pub show_login: bool,
	pub show_register: bool,
	pub show_account: bool,
	pub welcome: Option<String>,
}

impl HeaderLinks {
	pub fn for_session(user: Option<&User>) -> Self {
		match user {
			Some(user) => Self {
				profile_href: config::PROFILE_PAGE,
				show_login: false,
				show_register: false,
				show_account: true,
				welcome: Some(match user.greeting_name() {
					Some(name) => format!("Welcome, {name}"),
					None => "Welcome".to_owned(),
				}),
			},
			None => Self {
				profile_href: config::LOGIN_PAGE,
				show_login: true,
				show_register: true,
				show_account: false,
				welcome: None,
			},
		}
	}
}

#[function_component]
pub fn SessionIndicator() -> Html {
	let user = use_memo((), |_| session::current_user());
	let links = HeaderLinks::for_session((*user).as_ref());
	if let Some(user) = &*user {
		log::debug!(target: "header", "signed in as {}", user.email);
	}

	let logout = Callback::from(|ev: MouseEvent| {
		ev.prevent_default();
		session::end();
		util::redirect(config::LOGIN_PAGE);
	});

	let divider = || html! { <span class="divider">{"|"}</span> };
	let actions = match &links.welcome {
		Some(welcome) => html! {<>
			<span class="welcome-message">{welcome}</span>
			{divider()}
			<a href={config::PROFILE_PAGE} class="action-link profile-link">{"My Account"}</a>
			{divider()}
			<a href="#" id="logout-link" class="action-link" onclick={logout}>{"Logout"}</a>
		</>},
		None => html! {<>
			if links.show_login {
				<a href={config::LOGIN_PAGE} class="action-link login-link">{"Login"}</a>
			}
			{divider()}
			if links.show_register {
				<a href={config::REGISTER_PAGE} class="action-link register-link">{"Register"}</a>
			}
		</>},
	};

	html! {<>
		<div class="user-actions">{actions}</div>
		<a class="icon-link profile-icon" href={links.profile_href}>
			<i class="bx bx-user" />
		</a>
		<a class="mobile-action-link profile" href={links.profile_href}>
			<i class="bx bx-user" />
			<span>{if links.show_account { "My Account" } else { "Login" }}</span>
		</a>
	</>}
}
