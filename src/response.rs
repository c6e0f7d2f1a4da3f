use crate::api::Error;
use reqwest::RequestBuilder;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

pub struct Response<T> {
	builder: RequestBuilder,
	marker: std::marker::PhantomData<T>,
}
impl<T> std::fmt::Debug for Response<T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.builder.fmt(f)
	}
}
impl<T> Response<T>
where
	T: DeserializeOwned,
{
	pub fn from(builder: RequestBuilder) -> Self {
		Self {
			builder,
			marker: Default::default(),
		}
	}

	pub fn with_json<Q>(mut self, json: &Q) -> Self
	where
		Q: Serialize + ?Sized,
	{
		self.builder = self.builder.json(json);
		self
	}

	pub async fn send(self) -> Result<T, Error> {
		let response: reqwest::Response = self.builder.send().await?;
		let status = response.status().as_u16();
		let text = response.text().await?;
		decode(status, text)
	}
}

/// Error responses may carry `{"message": "..."}`.
#[derive(Deserialize)]
struct ErrorBody {
	#[serde(default)]
	message: Option<String>,
}

pub fn decode<T>(status: u16, text: String) -> Result<T, Error>
where
	T: DeserializeOwned,
{
	if !(200..300).contains(&status) {
		let message = serde_json::from_str::<ErrorBody>(&text)
			.ok()
			.and_then(|body| body.message);
		return Err(Error::Status { status, message });
	}
	match serde_json::from_str(&text) {
		Ok(data) => Ok(data),
		Err(err) => Err(InvalidJson(text, err))?,
	}
}

#[derive(thiserror::Error, Debug)]
pub struct InvalidJson(pub String, pub serde_json::Error);
impl std::fmt::Display for InvalidJson {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Invalid json: {:?}\nError: {:?}", self.0, self.1)
	}
}
