use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A medicine as listed by the backend catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
	pub id: u64,
	pub name: String,
	pub category: String,
	pub price: Decimal,
	pub prescription: Prescription,
}

impl Product {
	pub fn display_price(&self) -> String {
		format_price(self.price)
	}

	/// Product photos are not part of the catalog yet, so cards cycle through
	/// the stock images shipped with the site.
	pub fn image_url(&self) -> String {
		format!("{}/product_{}.png", crate::config::PRODUCT_IMAGE_DIR, self.id % 12 + 8)
	}
}

pub fn format_price(price: Decimal) -> String {
	format!("Rs.{price:.2}")
}

/// Whether a medicine is dispensed only against a prescription.
/// The wire format is the string "Yes" or "No".
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Prescription {
	Required,
	OverTheCounter,
	/// Anything else the backend sends; matches neither filter.
	Unknown(String),
}

impl Prescription {
	pub fn tag_class(&self) -> &'static str {
		match self {
			Self::Required => "prescription",
			_ => "otc",
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Self::Required => "Prescription",
			_ => "OTC",
		}
	}
}

impl From<String> for Prescription {
	fn from(value: String) -> Self {
		match value.as_str() {
			"Yes" => Self::Required,
			"No" => Self::OverTheCounter,
			_ => Self::Unknown(value),
		}
	}
}

impl From<Prescription> for String {
	fn from(value: Prescription) -> Self {
		match value {
			Prescription::Required => "Yes".to_owned(),
			Prescription::OverTheCounter => "No".to_owned(),
			Prescription::Unknown(value) => value,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::str::FromStr;

	#[test]
	fn parses_backend_listing() {
		let json = r#"[
			{"id": 7, "name": "Paracetamol 500mg", "category": "Pain", "price": 12.5, "prescription": "No"},
			{"id": 8, "name": "Amoxicillin", "category": "Antibiotic", "price": 40, "prescription": "Yes", "stock": 3}
		]"#;
		let products: Vec<Product> = serde_json::from_str(json).unwrap();
		assert_eq!(products.len(), 2);
		assert_eq!(products[0].price, Decimal::from_str("12.5").unwrap());
		assert_eq!(products[0].prescription, Prescription::OverTheCounter);
		assert_eq!(products[1].price, Decimal::from(40));
		assert_eq!(products[1].prescription, Prescription::Required);
	}

	#[test]
	fn unknown_prescription_survives_round_trip() {
		let json = r#"{"id": 1, "name": "Balm", "category": "Skin", "price": 3, "prescription": "Maybe"}"#;
		let product: Product = serde_json::from_str(json).unwrap();
		assert_eq!(product.prescription, Prescription::Unknown("Maybe".into()));
		let value = serde_json::to_value(&product).unwrap();
		assert_eq!(value["prescription"], "Maybe");
	}

	#[test]
	fn price_is_shown_with_two_decimals() {
		assert_eq!(format_price(Decimal::from_str("12.5").unwrap()), "Rs.12.50");
		assert_eq!(format_price(Decimal::from(3)), "Rs.3.00");
	}
}
