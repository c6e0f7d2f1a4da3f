use crate::profile::WritePolicy;

pub static LOGIN_PAGE: &str = "/e_commerce/pages/pages/login.html";
pub static REGISTER_PAGE: &str = "/e_commerce/pages/pages/register.html";
pub static PROFILE_PAGE: &str = "/e_commerce/pages/pages/profile.html";
pub static PRODUCT_IMAGE_DIR: &str = "/e_commerce/pages/images";

pub static PRODUCTS_ENDPOINT: &str = "/api/products";
pub static USERS_ENDPOINT: &str = "/api/users";

/// Build-time override for the backend origin. When unset, requests resolve
/// against the document's base uri.
pub static API_BASE: Option<&str> = option_env!("MEDICARE_API_BASE");

pub const PAGE_SIZE: usize = 12;
/// Maximum number of numbered page links shown at once.
pub const PAGE_WINDOW: usize = 5;

pub const NOTIFICATION_DURATION_MS: u32 = 3_000;
pub const LOGOUT_REDIRECT_DELAY_MS: u32 = 1_500;

/// What happens to the cached session record when a profile update fails.
pub const PROFILE_WRITE_POLICY: WritePolicy = WritePolicy::Optimistic;
