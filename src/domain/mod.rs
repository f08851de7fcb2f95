pub mod price;
pub mod product;

pub use price::{normalize_price, PriceFormatError};
pub use product::{Product, ProductPatch};
