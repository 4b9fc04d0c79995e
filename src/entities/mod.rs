// Entity Models
// The category taxonomy is static: codes and names never change at runtime.

pub mod category;

pub use category::{category_name, Category, UNKNOWN_CATEGORY_NAME};
