use crate::{
	catalog::{Action, CatalogState, FilterDraft, Summary},
	util::web_ext::InputExt,
};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FilterSidebarProps {
	/// Shown on small screens only when toggled open.
	pub open: bool,
	pub draft: FilterDraft,
	pub summary: Rc<Summary>,
	pub dispatch: UseReducerDispatcher<CatalogState>,
}

fn on_checked(dispatch: &UseReducerDispatcher<CatalogState>, action: impl Fn(bool) -> Action + 'static) -> Callback<Event> {
	let dispatch = dispatch.clone();
	Callback::from(move |ev: Event| {
		if let Some(checked) = ev.input_checked() {
			dispatch.dispatch(action(checked));
		}
	})
}

fn on_text(dispatch: &UseReducerDispatcher<CatalogState>, action: impl Fn(String) -> Action + 'static) -> Callback<InputEvent> {
	let dispatch = dispatch.clone();
	Callback::from(move |ev: InputEvent| {
		if let Some(value) = ev.input_value() {
			dispatch.dispatch(action(value));
		}
	})
}

#[function_component]
pub fn FilterSidebar(props: &FilterSidebarProps) -> Html {
	let FilterSidebarProps { open, draft, summary, dispatch } = props;

	let categories = summary
		.categories
		.iter()
		.map(|(category, count)| {
			let onchange = {
				let category = category.clone();
				on_checked(dispatch, move |checked| Action::SetCategory(category.clone(), checked))
			};
			html! {
				<label class="filter-option" key={category.clone()}>
					<input
						type="checkbox"
						name="category"
						value={category.clone()}
						checked={draft.categories.is_selected(category)}
						{onchange}
					/>
					<span>{format!("{category} ({count})")}</span>
				</label>
			}
		})
		.collect::<Html>();

	let apply = {
		let dispatch = dispatch.clone();
		Callback::from(move |_: MouseEvent| dispatch.dispatch(Action::ApplyFilters))
	};

	html! {
		<aside class={classes!("filters-sidebar", open.then_some("active"))}>
			<div class="filter-group">
				<h3>{"Categories"}</h3>
				<label class="filter-option">
					<input
						type="checkbox"
						name="category"
						value="all"
						checked={draft.categories.is_all()}
						onchange={on_checked(dispatch, Action::SetAllCategories)}
					/>
					<span>{format!("All ({})", summary.total)}</span>
				</label>
				{categories}
			</div>
			<div class="filter-group">
				<h3>{"Prescription"}</h3>
				<label class="filter-option">
					<input
						type="checkbox"
						id="prescription-required"
						checked={draft.prescription_only}
						onchange={on_checked(dispatch, Action::SetPrescriptionOnly)}
					/>
					<span>{format!("Prescription Required ({})", summary.prescription)}</span>
				</label>
				<label class="filter-option">
					<input
						type="checkbox"
						id="otc"
						checked={draft.otc_only}
						onchange={on_checked(dispatch, Action::SetOtcOnly)}
					/>
					<span>{format!("Over the Counter ({})", summary.otc)}</span>
				</label>
			</div>
			<div class="filter-group">
				<h3>{"Price Range"}</h3>
				<div class="price-range">
					<input
						type="number"
						id="min-price"
						placeholder="Min"
						min="0"
						value={draft.min_price.clone()}
						oninput={on_text(dispatch, Action::SetMinPrice)}
					/>
					<span>{"-"}</span>
					<input
						type="number"
						id="max-price"
						placeholder="Max"
						min="0"
						value={draft.max_price.clone()}
						oninput={on_text(dispatch, Action::SetMaxPrice)}
					/>
				</div>
			</div>
			<button class="apply-filters" onclick={apply}>{"Apply Filters"}</button>
		</aside>
	}
}
