use crate::config;
use gloo_timers::callback::Timeout;
use std::cell::Cell;
use yew::prelude::*;
use yewdux::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kind {
	Success,
	Error,
}

impl Kind {
	pub fn class(self) -> &'static str {
		match self {
			Self::Success => "success",
			Self::Error => "error",
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
	pub message: String,
	pub kind: Kind,
}

/// The one toast shown for the whole page. Posting replaces whatever is
/// showing; there is no queue.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct Notifications {
	current: Option<Notice>,
	generation: u64,
	visible: bool,
}

impl Notifications {
	/// Show `message`, returning the generation that may later dismiss it.
	pub fn post(&mut self, message: String, kind: Kind) -> u64 {
		self.generation += 1;
		self.current = Some(Notice { message, kind });
		self.visible = true;
		self.generation
	}

	/// Hide the notice of `generation`, unless a newer one replaced it.
	pub fn expire(&mut self, generation: u64) {
		if generation == self.generation {
			self.visible = false;
		}
	}

	pub fn generation(&self) -> u64 {
		self.generation
	}

	pub fn current(&self) -> Option<&Notice> {
		self.current.as_ref()
	}

	pub fn is_visible(&self) -> bool {
		self.visible && self.current.is_some()
	}
}

pub fn notify(message: impl Into<String>, kind: Kind) {
	let message = message.into();
	log::debug!(target: "notification", "{kind:?}: {message}");
	ensure_host();
	let dispatch = Dispatch::<Notifications>::new();
	dispatch.reduce_mut(move |notifications| {
		notifications.post(message.clone(), kind);
	});
	let generation = dispatch.get().generation();
	Timeout::new(config::NOTIFICATION_DURATION_MS, move || {
		Dispatch::<Notifications>::new().reduce_mut(move |notifications| notifications.expire(generation));
	})
	.forget();
}

thread_local! {
	static HOST_MOUNTED: Cell<bool> = const { Cell::new(false) };
}

/// Mount the shared notification element the first time anything is posted.
fn ensure_host() {
	if HOST_MOUNTED.with(|mounted| mounted.replace(true)) {
		return;
	}
	let document = gloo_utils::document();
	let Some(body) = document.body() else {
		log::error!(target: "notification", "document has no body to attach notifications to");
		HOST_MOUNTED.with(|mounted| mounted.set(false));
		return;
	};
	let root = match document.create_element("div") {
		Ok(root) => root,
		Err(err) => {
			log::error!(target: "notification", "{err:?}");
			HOST_MOUNTED.with(|mounted| mounted.set(false));
			return;
		}
	};
	root.set_id("notification-host");
	if let Err(err) = body.append_child(&root) {
		log::error!(target: "notification", "{err:?}");
		HOST_MOUNTED.with(|mounted| mounted.set(false));
		return;
	}
	yew::Renderer::<NotificationHost>::with_root(root).render();
}

#[function_component]
pub fn NotificationHost() -> Html {
	let notifications = use_store_value::<Notifications>();
	let Some(notice) = notifications.current() else {
		return html! {};
	};
	let mut classes = classes!("notification", notice.kind.class());
	if notifications.is_visible() {
		classes.push("show");
	}
	html! {
		<div class={classes}>{notice.message.clone()}</div>
	}
}
