use crate::components::{CatalogBrowser, ProfileManager, SessionIndicator};

/// The independent widgets a storefront page may host. Each one owns the
/// element with its id and is mounted only on pages that provide it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Controller {
	SessionIndicator,
	CatalogBrowser,
	ProfileManager,
}

impl Controller {
	pub fn all() -> [Self; 3] {
		[Self::SessionIndicator, Self::CatalogBrowser, Self::ProfileManager]
	}

	pub fn element_id(self) -> &'static str {
		match self {
			Self::SessionIndicator => "session-indicator",
			Self::CatalogBrowser => "catalog-browser",
			Self::ProfileManager => "profile-manager",
		}
	}
}

/// The controllers whose mount point exists on this page.
pub fn plan(exists: impl Fn(&str) -> bool) -> Vec<Controller> {
	Controller::all()
		.into_iter()
		.filter(|controller| exists(controller.element_id()))
		.collect()
}

pub fn mount_all() {
	let document = gloo_utils::document();
	let controllers = plan(|id| document.get_element_by_id(id).is_some());
	log::debug!(target: "mount", "mounting {controllers:?}");
	for controller in controllers {
		let Some(root) = document.get_element_by_id(controller.element_id()) else {
			continue;
		};
		match controller {
			Controller::SessionIndicator => {
				yew::Renderer::<SessionIndicator>::with_root(root).render();
			}
			Controller::CatalogBrowser => {
				yew::Renderer::<CatalogBrowser>::with_root(root).render();
			}
			Controller::ProfileManager => {
				yew::Renderer::<ProfileManager>::with_root(root).render();
			}
		}
	}
}
