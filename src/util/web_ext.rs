use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::TargetCast;

/// Reads form controls from the events they fire.
pub trait InputExt {
	fn input_value(&self) -> Option<String>;
	fn input_checked(&self) -> Option<bool>;
	fn select_value(&self) -> Option<String>;
	fn textarea_value(&self) -> Option<String>;
}

impl<T> InputExt for T
where
	T: AsRef<web_sys::Event>,
{
	fn input_value(&self) -> Option<String> {
		Some(self.target_dyn_into::<HtmlInputElement>()?.value())
	}

	fn input_checked(&self) -> Option<bool> {
		Some(self.target_dyn_into::<HtmlInputElement>()?.checked())
	}

	fn select_value(&self) -> Option<String> {
		Some(self.target_dyn_into::<HtmlSelectElement>()?.value())
	}

	fn textarea_value(&self) -> Option<String> {
		Some(self.target_dyn_into::<HtmlTextAreaElement>()?.value())
	}
}
