use crate::{
	data::{Prescription, Product},
	storage::{self, LocalStore, Store},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub static CART_KEY: &str = "cart";

/// A product snapshot taken when it was added; later catalog changes do not
/// reach it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
	pub id: u64,
	pub name: String,
	pub price: Decimal,
	pub quantity: u32,
	pub category: String,
	pub prescription: Prescription,
}

impl From<&Product> for CartLine {
	fn from(product: &Product) -> Self {
		Self {
			id: product.id,
			name: product.name.clone(),
			price: product.price,
			quantity: 1,
			category: product.category.clone(),
			prescription: product.prescription.clone(),
		}
	}
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error("no product with id {0} in the catalog")]
	UnknownProduct(u64),
	#[error(transparent)]
	Storage(#[from] storage::Error),
}

/// The shopper's cart, persisted as a json list under [`CART_KEY`].
#[derive(Debug)]
pub struct Cart<S> {
	store: S,
}

impl Cart<LocalStore> {
	pub fn open() -> Result<Self, storage::Error> {
		Ok(Self::new(LocalStore::open()?))
	}
}

impl<S> Cart<S>
where
	S: Store,
{
	pub fn new(store: S) -> Self {
		Self { store }
	}

	/// A cart that was never written is empty.
	pub fn lines(&self) -> Result<Vec<CartLine>, storage::Error> {
		Ok(self.store.get::<Vec<CartLine>>(CART_KEY)?.unwrap_or_default())
	}

	/// Bump the quantity of an existing line, or append a new one.
	/// Returns the line as stored.
	pub fn add(&self, product: &Product) -> Result<CartLine, storage::Error> {
		let mut lines = self.lines()?;
		let line = match lines.iter_mut().find(|line| line.id == product.id) {
			Some(line) => {
				line.quantity = line.quantity.saturating_add(1);
				line.clone()
			}
			None => {
				let line = CartLine::from(product);
				lines.push(line.clone());
				line
			}
		};
		self.store.set(CART_KEY, &lines)?;
		Ok(line)
	}
}

/// Add the catalog product `id` to the cart obtained from `open`.
///
/// A cart that cannot be opened or written is reacquired once before the
/// failure is reported.
pub fn add_to_cart<S, F>(open: F, products: &[Product], id: u64) -> Result<CartLine, Error>
where
	S: Store,
	F: Fn() -> Result<Cart<S>, storage::Error>,
{
	let Some(product) = products.iter().find(|product| product.id == id) else {
		return Err(Error::UnknownProduct(id));
	};
	match open().and_then(|cart| cart.add(product)) {
		Ok(line) => Ok(line),
		Err(err) => {
			log::warn!(target: "cart", "cart unavailable, retrying: {err}");
			let line = open()?.add(product)?;
			log::info!(target: "cart", "cart recovered");
			Ok(line)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{catalog::fixtures::product, storage::Memory};
	use std::cell::Cell;

	#[test]
	fn fresh_product_gets_quantity_one() {
		let cart = Cart::new(Memory::default());
		let line = cart.add(&product(1, 10, "Pain", "No")).unwrap();
		assert_eq!(line.quantity, 1);
		assert_eq!(cart.lines().unwrap(), vec![line]);
	}

	#[test]
	fn adding_twice_increments() {
		let store = Memory::default();
		let products = vec![product(1, 10, "Pain", "No"), product(2, 5, "Pain", "Yes")];
		let open = || -> Result<Cart<Memory>, storage::Error> { Ok(Cart::new(store.clone())) };
		add_to_cart(open, &products, 1).unwrap();
		let line = add_to_cart(open, &products, 1).unwrap();
		assert_eq!(line.quantity, 2);

		let lines = Cart::new(store).lines().unwrap();
		assert_eq!(lines.len(), 1);
		assert_eq!(lines[0].id, 1);
		assert_eq!(lines[0].quantity, 2);
		assert_eq!(lines[0].price, Decimal::from(10));
	}

	#[test]
	fn lines_are_snapshots() {
		let cart = Cart::new(Memory::default());
		let mut item = product(3, 10, "Cold", "No");
		cart.add(&item).unwrap();
		item.price = Decimal::from(99);
		item.name = "Renamed".into();
		let lines = cart.lines().unwrap();
		assert_eq!(lines[0].price, Decimal::from(10));
		assert_eq!(lines[0].name, "Medicine 3");
	}


	#[test]
	fn unknown_product_leaves_cart_alone() {
		let store = Memory::default();
		let err = add_to_cart(|| Ok(Cart::new(store.clone())), &[], 9).unwrap_err();
		assert!(matches!(err, Error::UnknownProduct(9)));
		assert_eq!(store.raw(CART_KEY), None);
	}

	#[test]
	fn unavailable_cart_is_retried_once() {
		let store = Memory::default();
		let attempts = Cell::new(0);
		let open = || {
			attempts.set(attempts.get() + 1);
			match attempts.get() {
				1 => Err(storage::Error::Unavailable("blocked".into())),
				_ => Ok(Cart::new(store.clone())),
			}
		};
		let line = add_to_cart(open, &[product(1, 10, "Pain", "No")], 1).unwrap();
		assert_eq!(line.quantity, 1);
		assert_eq!(attempts.get(), 2);
	}

	#[test]
	fn persistent_failure_is_reported() {
		let attempts = Cell::new(0);
		let open = || -> Result<Cart<Memory>, storage::Error> {
			attempts.set(attempts.get() + 1);
			Err(storage::Error::Unavailable("blocked".into()))
		};
		let err = add_to_cart(open, &[product(1, 10, "Pain", "No")], 1).unwrap_err();
		assert!(matches!(err, Error::Storage(storage::Error::Unavailable(_))));
		assert_eq!(attempts.get(), 2);
	}

	#[test]
	fn corrupted_cart_is_reported_not_overwritten() {
		let store = Memory::default();
		store.insert_raw(CART_KEY, "[{\"id\":");
		let err = add_to_cart(|| Ok(Cart::new(store.clone())), &[product(1, 10, "Pain", "No")], 1);
		assert!(matches!(err, Err(Error::Storage(storage::Error::Malformed(_)))));
		assert_eq!(store.raw(CART_KEY).as_deref(), Some("[{\"id\":"));
	}
}
