use crate::data::{Prescription, Product};
use rust_decimal::Decimal;
use std::{collections::BTreeSet, str::FromStr};

/// Which categories the shopper narrowed to. Nothing selected means "All".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CategorySelection(BTreeSet<String>);

impl CategorySelection {
	/// The "All" checkbox is checked exactly when no specific category is.
	pub fn is_all(&self) -> bool {
		self.0.is_empty()
	}

	pub fn is_selected(&self, category: &str) -> bool {
		self.0.contains(category)
	}

	/// Checking "All" clears every specific category. Unchecking it changes
	/// nothing, since with no specific category left it is re-checked.
	pub fn set_all(&mut self, checked: bool) {
		if checked {
			self.0.clear();
		}
	}

	pub fn set(&mut self, category: &str, checked: bool) {
		if checked {
			self.0.insert(category.to_owned());
		} else {
			self.0.remove(category);
		}
	}

	pub fn matches(&self, category: &str) -> bool {
		self.is_all() || self.is_selected(category)
	}
}

/// Constraints currently applied to the listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Filters {
	pub categories: CategorySelection,
	pub prescription_only: bool,
	pub otc_only: bool,
	pub min_price: Decimal,
	pub max_price: Option<Decimal>,
}

impl Default for Filters {
	fn default() -> Self {
		Self {
			categories: CategorySelection::default(),
			prescription_only: false,
			otc_only: false,
			min_price: Decimal::ZERO,
			max_price: None,
		}
	}
}

impl Filters {
	/// Every active constraint must hold. Asking for both prescription-only
	/// and otc-only therefore matches nothing.
	pub fn matches(&self, product: &Product) -> bool {
		if !self.categories.matches(&product.category) {
			return false;
		}
		if self.prescription_only && product.prescription != Prescription::Required {
			return false;
		}
		if self.otc_only && product.prescription != Prescription::OverTheCounter {
			return false;
		}
		if product.price < self.min_price {
			return false;
		}
		if let Some(max_price) = self.max_price {
			if product.price > max_price {
				return false;
			}
		}
		true
	}

	/// The matching products, in catalog order.
	pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
		products.iter().filter(|product| self.matches(product)).collect()
	}
}

/// What the filter sidebar currently shows; becomes [`Filters`] on apply.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterDraft {
	pub categories: CategorySelection,
	pub prescription_only: bool,
	pub otc_only: bool,
	pub min_price: String,
	pub max_price: String,
}

impl FilterDraft {
	pub fn to_filters(&self) -> Filters {
		Filters {
			categories: self.categories.clone(),
			prescription_only: self.prescription_only,
			otc_only: self.otc_only,
			min_price: parse_price(&self.min_price).unwrap_or(Decimal::ZERO),
			max_price: parse_price(&self.max_price),
		}
	}
}

/// Empty or unparsable input yields `None`.
pub fn parse_price(text: &str) -> Option<Decimal> {
	let text = text.trim();
	if text.is_empty() {
		return None;
	}
	Decimal::from_str(text).ok()
}
