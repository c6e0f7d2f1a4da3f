use futures_util::future::LocalBoxFuture;
use yew::prelude::*;
use yew_hooks::use_mount;

#[derive(Debug, PartialEq)]
pub enum FetchState<T, E> {
	Loading,
	Ready(T),
	Failed(E),
}

pub struct FetchHandle<T, E> {
	state: UseStateHandle<FetchState<T, E>>,
}
impl<T, E> std::ops::Deref for FetchHandle<T, E> {
	type Target = FetchState<T, E>;

	fn deref(&self) -> &Self::Target {
		&self.state
	}
}

/// Runs `make_future` once when the component mounts and tracks its outcome.
/// Failures are logged under `target` and kept in the state for rendering.
/// There is no retry.
#[hook]
pub fn use_fetch_on_mount<F, T, E>(target: &'static str, make_future: F) -> FetchHandle<T, E>
where
	F: FnOnce() -> LocalBoxFuture<'static, Result<T, E>> + 'static,
	T: 'static,
	E: std::fmt::Display + 'static,
{
	let state = use_state(|| FetchState::Loading);
	{
		let state = state.clone();
		use_mount(move || {
			wasm_bindgen_futures::spawn_local(async move {
				let final_state = match make_future().await {
					Ok(data) => FetchState::Ready(data),
					Err(err) => {
						log::error!(target: target, "{err}");
						FetchState::Failed(err)
					}
				};
				state.set(final_state);
			});
		});
	}
	FetchHandle { state }
}
