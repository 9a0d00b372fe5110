pub mod home;
pub mod login;
pub mod notifications;
pub mod product_catalog;
pub mod product_detail;
pub mod register;
pub mod store_detail;
pub mod stores;
pub mod user_profile;

pub use home::Home;
pub use login::Login;
pub use notifications::Notifications;
pub use product_catalog::ProductCatalog;
pub use product_detail::ProductDetail;
pub use register::Register;
pub use store_detail::StoreDetail;
pub use stores::Stores;
pub use user_profile::UserProfile;
