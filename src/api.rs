use crate::{
	config,
	data::{Product, User, UserUpdate},
	response::{InvalidJson, Response},
};
use futures_util::future::LocalBoxFuture;
use reqwest::Method;
use url::Url;

#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error(transparent)]
	Transport(#[from] reqwest::Error),
	#[error("request failed with status {status}")]
	Status { status: u16, message: Option<String> },
	#[error(transparent)]
	InvalidJson(#[from] InvalidJson),
	#[error("invalid api url: {0}")]
	InvalidUrl(#[from] url::ParseError),
}

impl Error {
	/// The server's explanation when it sent one, else `fallback`.
	pub fn message_or(&self, fallback: &str) -> String {
		match self {
			Self::Status {
				message: Some(message), ..
			} if !message.is_empty() => message.clone(),
			_ => fallback.to_owned(),
		}
	}
}

pub trait CatalogApi {
	fn fetch_products(&self) -> LocalBoxFuture<'_, Result<Vec<Product>, Error>>;
}

pub trait UserApi {
	fn fetch_user<'a>(&'a self, email: &'a str) -> LocalBoxFuture<'a, Result<User, Error>>;

	fn update_user<'a>(
		&'a self,
		email: &'a str,
		update: &'a UserUpdate,
	) -> LocalBoxFuture<'a, Result<User, Error>>;
}

/// The storefront backend.
#[derive(Clone, Debug)]
pub struct Client {
	base: Result<Url, url::ParseError>,
	http: reqwest::Client,
}

impl Client {
	pub fn new(base: &str) -> Self {
		Self {
			base: Url::parse(base),
			http: reqwest::Client::new(),
		}
	}

	/// Resolves requests against the page the app is running on, unless a
	/// base was fixed at build time.
	pub fn from_document() -> Self {
		let base = match config::API_BASE {
			Some(base) => base.to_owned(),
			None => gloo_utils::document().base_uri().ok().flatten().unwrap_or_default(),
		};
		Self::new(&base)
	}

	fn endpoint(&self, path: &str) -> Result<Url, Error> {
		let base = self.base.clone()?;
		Ok(base.join(path)?)
	}

	fn user_endpoint(&self, email: &str) -> Result<Url, Error> {
		self.endpoint(&format!("{}/{}", config::USERS_ENDPOINT, urlencoding::encode(email)))
	}

	fn request<T>(&self, method: Method, url: Url) -> Response<T>
	where
		T: serde::de::DeserializeOwned,
	{
		let builder = self.http.request(method, url).header("Accept", "application/json");
		Response::<T>::from(builder)
	}
}

impl CatalogApi for Client {
	fn fetch_products(&self) -> LocalBoxFuture<'_, Result<Vec<Product>, Error>> {
		Box::pin(async move {
			let url = self.endpoint(config::PRODUCTS_ENDPOINT)?;
			self.request::<Vec<Product>>(Method::GET, url).send().await
		})
	}
}

impl UserApi for Client {
	fn fetch_user<'a>(&'a self, email: &'a str) -> LocalBoxFuture<'a, Result<User, Error>> {
		Box::pin(async move {
			let url = self.user_endpoint(email)?;
			self.request::<User>(Method::GET, url).send().await
		})
	}

	fn update_user<'a>(
		&'a self,
		email: &'a str,
		update: &'a UserUpdate,
	) -> LocalBoxFuture<'a, Result<User, Error>> {
		Box::pin(async move {
			let url = self.user_endpoint(email)?;
			self.request::<User>(Method::PUT, url).with_json(update).send().await
		})
	}
}
