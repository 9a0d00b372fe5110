pub mod navbar;
pub mod notification_card;
pub mod product_card;
pub mod store_card;

pub use navbar::Navbar;
pub use notification_card::NotificationCard;
pub use product_card::ProductCard;
pub use store_card::StoreCard;
