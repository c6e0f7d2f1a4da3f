use super::{paginate, FilterDraft, Filters, Page, SortMode, Summary};
use crate::{config::PAGE_SIZE, data::Product};
use std::rc::Rc;
use yew::functional::Reducible;

/// Everything the catalog page knows between renders.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogState {
	pub products: Rc<Vec<Product>>,
	pub summary: Rc<Summary>,
	/// Sidebar inputs not yet applied.
	pub draft: FilterDraft,
	pub filters: Filters,
	pub sort: SortMode,
	pub page: usize,
}

impl Default for CatalogState {
	fn default() -> Self {
		Self {
			products: Rc::default(),
			summary: Rc::default(),
			draft: FilterDraft::default(),
			filters: Filters::default(),
			sort: SortMode::default(),
			page: 1,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
	Loaded(Vec<Product>),
	SetAllCategories(bool),
	SetCategory(String, bool),
	SetPrescriptionOnly(bool),
	SetOtcOnly(bool),
	SetMinPrice(String),
	SetMaxPrice(String),
	/// Commit the draft and return to the first page.
	ApplyFilters,
	SetSort(SortMode),
	GoToPage(usize),
	PreviousPage,
	NextPage,
}

impl CatalogState {
	/// Filtered then sorted, across all pages.
	pub fn results(&self) -> Vec<&Product> {
		let mut results = self.filters.apply(&self.products);
		self.sort.sort(&mut results);
		results
	}

	pub fn page_of<'a>(&self, results: &'a [&'a Product]) -> Page<'a, &'a Product> {
		paginate(results, self.page, PAGE_SIZE)
	}

	fn clamp_page(&mut self) {
		let total = super::total_pages(self.results().len(), PAGE_SIZE);
		self.page = super::clamp_page(self.page, total);
	}
}

impl Reducible for CatalogState {
	type Action = Action;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut next = (*self).clone();
		// The browser unticks "All" by itself; a fresh state makes the
		// component render it ticked again.
		let always_render = matches!(action, Action::SetAllCategories(_));
		match action {
			Action::Loaded(products) => {
				next.summary = Rc::new(Summary::of(&products));
				next.products = Rc::new(products);
				next.filters = next.draft.to_filters();
				next.page = 1;
			}
			Action::SetAllCategories(checked) => next.draft.categories.set_all(checked),
			Action::SetCategory(category, checked) => next.draft.categories.set(&category, checked),
			Action::SetPrescriptionOnly(checked) => next.draft.prescription_only = checked,
			Action::SetOtcOnly(checked) => next.draft.otc_only = checked,
			Action::SetMinPrice(text) => next.draft.min_price = text,
			Action::SetMaxPrice(text) => next.draft.max_price = text,
			Action::ApplyFilters => {
				next.filters = next.draft.to_filters();
				next.page = 1;
				log::debug!(target: "catalog", "applied {:?}", next.filters);
			}
			Action::SetSort(sort) => {
				next.sort = sort;
				next.clamp_page();
			}
			Action::GoToPage(page) => {
				next.page = page;
				next.clamp_page();
			}
			Action::PreviousPage => {
				next.page = next.page.saturating_sub(1);
				next.clamp_page();
			}
			Action::NextPage => {
				next.page += 1;
				next.clamp_page();
			}
		}
		match next == *self && !always_render {
			true => self,
			false => Rc::new(next),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog::fixtures::shelf;

	fn reduce(state: Rc<CatalogState>, actions: impl IntoIterator<Item = Action>) -> Rc<CatalogState> {
		actions.into_iter().fold(state, |state, action| state.reduce(action))
	}

	fn loaded() -> Rc<CatalogState> {
		reduce(Rc::new(CatalogState::default()), [Action::Loaded(shelf())])
	}

	#[test]
	fn loading_summarises_and_shows_everything() {
		let state = loaded();
		assert_eq!(state.summary.total, 30);
		assert_eq!(state.results().len(), 30);
		let results = state.results();
		let page = state.page_of(&results);
		assert_eq!(page.items.len(), PAGE_SIZE);
		assert_eq!(page.total_pages, 3);
	}

	#[test]
	fn draft_changes_wait_for_apply() {
		let state = reduce(loaded(), [Action::SetCategory("Pain".into(), true)]);
		assert_eq!(state.results().len(), 30);
		assert!(!state.draft.categories.is_all());

		let state = reduce(state, [Action::ApplyFilters]);
		assert_eq!(state.results().len(), 10);
		assert!(state.results().iter().all(|p| p.category == "Pain"));
	}

	#[test]
	fn apply_returns_to_first_page() {
		let state = reduce(loaded(), [Action::GoToPage(3), Action::SetMaxPrice("45".into())]);
		assert_eq!(state.page, 3);
		let state = reduce(state, [Action::ApplyFilters]);
		assert_eq!(state.page, 1);
	}

	#[test]
	fn sort_keeps_page() {
		let state = reduce(loaded(), [Action::NextPage, Action::SetSort(SortMode::PriceDescending)]);
		assert_eq!(state.page, 2);
		let results = state.results();
		assert!(results.windows(2).all(|pair| pair[0].price >= pair[1].price));
	}

	#[test]
	fn paging_stays_in_range() {
		let state = reduce(loaded(), [Action::PreviousPage]);
		assert_eq!(state.page, 1);
		let state = reduce(state, [Action::NextPage, Action::NextPage, Action::NextPage, Action::NextPage]);
		assert_eq!(state.page, 3);
		let state = reduce(state, [Action::GoToPage(42)]);
		assert_eq!(state.page, 3);
	}

	#[test]
	fn unchanged_state_is_reused() {
		let state = loaded();
		let same = state.clone().reduce(Action::PreviousPage);
		assert!(Rc::ptr_eq(&state, &same));
	}

	#[test]
	fn unticking_all_rerenders_with_all_ticked() {
		let state = loaded();
		let next = state.clone().reduce(Action::SetAllCategories(false));
		assert!(!Rc::ptr_eq(&state, &next));
		assert!(next.draft.categories.is_all());
		assert_eq!(*next, *state);
	}
}
