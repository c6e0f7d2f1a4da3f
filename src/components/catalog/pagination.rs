use crate::catalog::Action;
use std::ops::RangeInclusive;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
	pub current: usize,
	pub total: usize,
	/// Page numbers to link to directly.
	pub window: RangeInclusive<usize>,
	pub on_navigate: Callback<Action>,
}

#[function_component]
pub fn Pagination(props: &PaginationProps) -> Html {
	let PaginationProps { current, total, window, on_navigate } = props;
	let has_previous = *current > 1;
	let has_next = current < total;

	let link = |action: Action, enabled: bool| {
		let on_navigate = on_navigate.clone();
		Callback::from(move |ev: MouseEvent| {
			ev.prevent_default();
			if enabled {
				on_navigate.emit(action.clone());
			}
		})
	};

	html! {
		<div class="pagination">
			<a
				class={classes!("pagination-item", (!has_previous).then_some("disabled"))}
				onclick={link(Action::PreviousPage, has_previous)}
			>
				<i class="bx bx-chevron-left" />
			</a>
			{window.clone().map(|number| html! {
				<a
					key={number}
					class={classes!("pagination-item", (number == *current).then_some("active"))}
					onclick={link(Action::GoToPage(number), number != *current)}
				>
					{number}
				</a>
			}).collect::<Html>()}
			<a
				class={classes!("pagination-item", (!has_next).then_some("disabled"))}
				onclick={link(Action::NextPage, has_next)}
			>
				<i class="bx bx-chevron-right" />
			</a>
		</div>
	}
}
