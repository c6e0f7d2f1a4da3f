mod product;
pub use product::*;

mod user;
pub use user::*;
