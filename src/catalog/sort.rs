use crate::data::Product;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortMode {
	#[default]
	Popularity,
	Rating,
	Newest,
	PriceAscending,
	PriceDescending,
}

impl SortMode {
	pub fn all() -> &'static [Self] {
		&[
			Self::Popularity,
			Self::Rating,
			Self::Newest,
			Self::PriceAscending,
			Self::PriceDescending,
		]
	}

	/// The `value` of the matching `<option>`.
	pub fn value(self) -> &'static str {
		match self {
			Self::Popularity => "popularity",
			Self::Rating => "rating",
			Self::Newest => "newest",
			Self::PriceAscending => "price-low",
			Self::PriceDescending => "price-high",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Self::Popularity => "Popularity",
			Self::Rating => "Rating",
			Self::Newest => "Newest",
			Self::PriceAscending => "Price: Low to High",
			Self::PriceDescending => "Price: High to Low",
		}
	}

	/// Orders the listing in place. The sort is stable.
	///
	/// The catalog has no rating or popularity signal yet; both fall back to
	/// ascending id so the listing does not reshuffle between renders.
	pub fn sort(self, products: &mut [&Product]) {
		match self {
			Self::PriceAscending => products.sort_by(|a, b| a.price.cmp(&b.price)),
			Self::PriceDescending => products.sort_by(|a, b| b.price.cmp(&a.price)),
			// Ids are assigned in insertion order, so the highest is the newest.
			Self::Newest => products.sort_by(|a, b| b.id.cmp(&a.id)),
			Self::Rating | Self::Popularity => products.sort_by_key(|product| product.id),
		}
	}
}

impl FromStr for SortMode {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::all()
			.iter()
			.copied()
			.find(|mode| mode.value() == s)
			.ok_or_else(|| format!("unknown sort mode {s:?}"))
	}
}
