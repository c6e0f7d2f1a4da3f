use crate::{
	cart::{self, Cart},
	data::Product,
	notification::{notify, Kind},
};
use std::rc::Rc;
use yew::prelude::*;

static CART_FAILURE: &str = "Unable to add item to cart. Please try again later.";

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
	pub product: Product,
	/// The full catalog, which add-to-cart resolves the product id against.
	pub products: Rc<Vec<Product>>,
}

#[function_component]
pub fn ProductCard(props: &ProductCardProps) -> Html {
	let ProductCardProps { product, products } = props;

	let add_to_cart = {
		let id = product.id;
		let products = products.clone();
		Callback::from(move |_: MouseEvent| {
			log::debug!(target: "cart", "add to cart clicked for {id}");
			match cart::add_to_cart(Cart::open, &products, id) {
				Ok(line) => notify(format!("{} added to cart", line.name), Kind::Success),
				Err(err) => {
					log::error!(target: "cart", "{err}");
					notify(CART_FAILURE, Kind::Error);
				}
			}
		})
	};

	html! {
		<div class="product-card">
			<div class="product-image">
				<img src={product.image_url()} alt={product.name.clone()} />
			</div>
			<div class="product-details">
				<div class="product-category">{&product.category}</div>
				<h3 class="product-title">{&product.name}</h3>
				<div class="medicine-tags">
					<span class={classes!("medicine-tag", product.prescription.tag_class())}>
						{product.prescription.label()}
					</span>
				</div>
				<div class="product-price-cart">
					<div class="product-price">
						<span class="current-price">{product.display_price()}</span>
					</div>
					<button class="add-to-cart" data-id={product.id.to_string()} onclick={add_to_cart}>
						<i class="bx bx-cart" />
					</button>
				</div>
			</div>
		</div>
	}
}
