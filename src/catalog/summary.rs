use crate::data::{Prescription, Product};
use itertools::Itertools;

/// Counts shown next to the filter checkboxes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
	pub total: usize,
	/// Distinct categories in the order they first appear, with their sizes.
	pub categories: Vec<(String, usize)>,
	pub prescription: usize,
	pub otc: usize,
}

impl Summary {
	pub fn of(products: &[Product]) -> Self {
		let counts = products.iter().map(|product| product.category.as_str()).counts();
		let categories = products
			.iter()
			.map(|product| product.category.as_str())
			.unique()
			.map(|category| (category.to_owned(), counts[category]))
			.collect();
		let prescription = products
			.iter()
			.filter(|product| product.prescription == Prescription::Required)
			.count();
		let otc = products
			.iter()
			.filter(|product| product.prescription == Prescription::OverTheCounter)
			.count();
		Self {
			total: products.len(),
			categories,
			prescription,
			otc,
		}
	}
}
