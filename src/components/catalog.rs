use crate::{
	api::{self, CatalogApi},
	catalog::{Action, CatalogState, SortMode},
	config::PAGE_WINDOW,
	hooks::{use_fetch_on_mount, FetchState},
	util::{self, web_ext::InputExt},
};
use futures_util::FutureExt;
use yew::prelude::*;

mod card;
pub use card::*;
mod filters;
pub use filters::*;
mod pagination;
pub use pagination::*;

#[function_component]
pub fn CatalogBrowser() -> Html {
	let state = use_reducer(CatalogState::default);
	let filters_open = use_state_eq(|| false);

	let fetch = {
		let state = state.clone();
		use_fetch_on_mount("catalog", move || {
			async move {
				let products = api::Client::from_document().fetch_products().await?;
				log::info!(target: "catalog", "loaded {} products", products.len());
				state.dispatch(Action::Loaded(products));
				Ok::<_, api::Error>(())
			}
			.boxed_local()
		})
	};

	let on_sort = {
		let state = state.clone();
		Callback::from(move |ev: Event| {
			let Some(value) = ev.select_value() else { return };
			match value.parse::<SortMode>() {
				Ok(sort) => state.dispatch(Action::SetSort(sort)),
				Err(err) => log::warn!(target: "catalog", "{err}"),
			}
		})
	};
	let toggle_filters = {
		let filters_open = filters_open.clone();
		Callback::from(move |_: MouseEvent| filters_open.set(!*filters_open))
	};
	let on_page = {
		let state = state.clone();
		Callback::from(move |action: Action| {
			state.dispatch(action);
			util::scroll_to_top();
		})
	};

	let results = state.results();
	let page = state.page_of(&results);

	let listing = match placeholder(&*fetch, page.items.is_empty()) {
		Some(Placeholder::Loading) => html! {
			<div class="loader">{Placeholder::Loading.message()}</div>
		},
		Some(Placeholder::LoadFailed) => html! {
			<div class="error-message">
				<p>{Placeholder::LoadFailed.message()}</p>
			</div>
		},
		Some(Placeholder::NoResults) => html! {
			<div class="empty-state">
				<i class="bx bx-search-alt" />
				<p>{Placeholder::NoResults.message()}</p>
			</div>
		},
		None => html! {
			<div class="products-grid">
				{page.items.iter().map(|product| html! {
					<ProductCard key={product.id} product={(*product).clone()} products={state.products.clone()} />
				}).collect::<Html>()}
			</div>
		},
	};

	html! {
		<div class="catalog">
			<button
				class={classes!("filter-toggle", filters_open.then_some("active"))}
				onclick={toggle_filters}
			>
				<i class="bx bx-filter" />
				{if *filters_open { "Hide Filters" } else { "Show Filters" }}
			</button>
			<FilterSidebar
				open={*filters_open}
				draft={state.draft.clone()}
				summary={state.summary.clone()}
				dispatch={state.dispatcher()}
			/>
			<div class="products-section">
				<div class="products-header">
					<span class="products-count">{format!("Showing {} products", page.range_label())}</span>
					<select id="sort-by" class="sort-select" onchange={on_sort}>
						{SortMode::all().iter().map(|mode| html! {
							<option value={mode.value()} selected={*mode == state.sort}>{mode.label()}</option>
						}).collect::<Html>()}
					</select>
				</div>
				{listing}
				if page.total_pages > 1 {
					<Pagination
						current={page.number}
						total={page.total_pages}
						window={page.window(PAGE_WINDOW)}
						on_navigate={on_page}
					/>
				}
			</div>
		</div>
	}
}

/// What the listing shows instead of product cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placeholder {
	Loading,
	LoadFailed,
	NoResults,
}

impl Placeholder {
	pub fn message(self) -> &'static str {
		match self {
			Self::Loading => "Loading medicines...",
			Self::LoadFailed => "Failed to load products. Please try again later.",
			Self::NoResults => "No medicines found matching your criteria.",
		}
	}
}

fn placeholder<E>(fetch: &FetchState<(), E>, page_empty: bool) -> Option<Placeholder> {
	match fetch {
		FetchState::Loading => Some(Placeholder::Loading),
		FetchState::Failed(_) => Some(Placeholder::LoadFailed),
		FetchState::Ready(()) if page_empty => Some(Placeholder::NoResults),
		FetchState::Ready(()) => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn failed_load_shows_error_placeholder() {
		let failed = FetchState::<(), api::Error>::Failed(api::Error::Status {
			status: 500,
			message: None,
		});
		assert_eq!(placeholder(&failed, true), Some(Placeholder::LoadFailed));
		assert_eq!(
			Placeholder::LoadFailed.message(),
			"Failed to load products. Please try again later."
		);
	}

	#[test]
	fn listing_states() {
		let loading = FetchState::<(), api::Error>::Loading;
		assert_eq!(placeholder(&loading, true), Some(Placeholder::Loading));
		let ready = FetchState::<(), api::Error>::Ready(());
		assert_eq!(placeholder(&ready, true), Some(Placeholder::NoResults));
		assert_eq!(placeholder(&ready, false), None);
	}
}
