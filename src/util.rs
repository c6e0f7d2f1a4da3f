pub mod web_ext;

pub fn spawn_local<F, E>(target: &'static str, future: F)
where
	F: futures_util::Future<Output = Result<(), E>> + 'static,
	E: std::fmt::Debug + 'static,
{
	wasm_bindgen_futures::spawn_local(async move {
		if let Err(err) = future.await {
			log::error!(target: target, "{err:?}");
		}
	});
}

/// Leave the current page for `path`.
pub fn redirect(path: &str) {
	log::debug!("redirecting to {path}");
	if let Err(err) = gloo_utils::window().location().set_href(path) {
		log::error!("failed to redirect to {path}: {err:?}");
	}
}

/// Redirect to `path` after `delay_ms`, letting a notification show first.
pub fn redirect_after(path: &'static str, delay_ms: u32) {
	wasm_bindgen_futures::spawn_local(async move {
		gloo_timers::future::TimeoutFuture::new(delay_ms).await;
		redirect(path);
	});
}

pub fn scroll_to_top() {
	gloo_utils::window().scroll_to_with_x_and_y(0.0, 0.0);
}
