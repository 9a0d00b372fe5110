pub mod loyalty;
pub mod notification;
pub mod product;
pub mod store;
pub mod user;

pub use loyalty::{AddActivityRequest, AddPointsRequest, DiscountCard, LoyaltyProfile, LoyaltyTier};
pub use notification::{Notification, NotificationsResponse, SendNotificationRequest};
pub use product::{
    CategoriesResponse, Category, Product, ProductFilter, ProductResponse, ProductsResponse,
};
pub use store::{Store, StoreResponse, StoresResponse};
pub use user::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserProfile};
