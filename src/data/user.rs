use serde::{Deserialize, Serialize};

pub static NOT_PROVIDED: &str = "Not provided";

/// The signed-in customer, as returned by the backend and cached for the session.
///
/// Fields the storefront does not edit (id, role, ...) are carried through
/// untouched so that rewriting the cached record never drops them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
	/// Identity of the record; also the path segment of the users api.
	pub email: String,
	#[serde(default)]
	pub username: Option<String>,
	#[serde(default)]
	pub phone: Option<String>,
	#[serde(default)]
	pub address: Option<String>,
	#[serde(flatten)]
	pub extra: serde_json::Map<String, serde_json::Value>,
}

impl User {
	/// What to greet the user as: the username, else the email.
	pub fn greeting_name(&self) -> Option<&str> {
		match self.username.as_deref() {
			Some(name) if !name.is_empty() => Some(name),
			_ if !self.email.is_empty() => Some(&self.email),
			_ => None,
		}
	}
}

/// The value to show for an optional profile field.
pub fn display(field: &Option<String>) -> &str {
	match field.as_deref() {
		Some(value) if !value.is_empty() => value,
		_ => NOT_PROVIDED,
	}
}

/// Body of `PUT /api/users/{email}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdate {
	pub username: String,
	pub email: String,
	pub phone: String,
	pub address: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub current_password: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub new_password: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn nulls_and_unknown_fields() {
		let json = r#"{"id": 4, "username": "asha", "email": "asha@example.com", "phone": null, "role": "USER", "admin": false}"#;
		let user: User = serde_json::from_str(json).unwrap();
		assert_eq!(user.greeting_name(), Some("asha"));
		assert_eq!(display(&user.username), "asha");
		assert_eq!(display(&user.phone), NOT_PROVIDED);
		assert_eq!(display(&user.address), NOT_PROVIDED);
		assert_eq!(user.extra["role"], "USER");

		let written = serde_json::to_value(&user).unwrap();
		assert_eq!(written["id"], 4);
		assert_eq!(written["admin"], false);
	}

	#[test]
	fn empty_field_is_not_provided() {
		assert_eq!(display(&Some(String::new())), NOT_PROVIDED);
	}

	#[test]
	fn update_omits_absent_passwords() {
		let update = UserUpdate {
			username: "asha".into(),
			email: "asha@example.com".into(),
			..Default::default()
		};
		let value = serde_json::to_value(&update).unwrap();
		assert!(value.get("currentPassword").is_none());
		assert!(value.get("newPassword").is_none());

		let update = UserUpdate {
			current_password: Some("old".into()),
			new_password: Some("new".into()),
			..update
		};
		let value = serde_json::to_value(&update).unwrap();
		assert_eq!(value["currentPassword"], "old");
		assert_eq!(value["newPassword"], "new");
	}
}
