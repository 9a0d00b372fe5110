use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::{
    Home, Login, Notifications, ProductCatalog, ProductDetail, Register, StoreDetail, Stores,
    UserProfile,
};

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/products")]
    ProductCatalog,
    #[at("/products/:product_id")]
    ProductDetail { product_id: u32 },
    #[at("/stores")]
    Stores,
    #[at("/stores/:store_id")]
    StoreDetail { store_id: u32 },
    #[at("/profile/:user_id")]
    UserProfile { user_id: u32 },
    #[at("/notifications/:user_id")]
    Notifications { user_id: u32 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Login => html! { <Login /> },
        Route::Register => html! { <Register /> },
        Route::ProductCatalog => html! { <ProductCatalog /> },
        Route::ProductDetail { product_id } => html! { <ProductDetail {product_id} /> },
        Route::Stores => html! { <Stores /> },
        Route::StoreDetail { store_id } => html! { <StoreDetail {store_id} /> },
        Route::UserProfile { user_id } => html! { <UserProfile {user_id} /> },
        Route::Notifications { user_id } => html! { <Notifications {user_id} /> },
        Route::NotFound => html! { <h1>{"404 - Page not found"}</h1> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_render_documented_paths() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Login.to_path(), "/login");
        assert_eq!(Route::Register.to_path(), "/register");
        assert_eq!(Route::ProductCatalog.to_path(), "/products");
        assert_eq!(Route::ProductDetail { product_id: 7 }.to_path(), "/products/7");
        assert_eq!(Route::Stores.to_path(), "/stores");
        assert_eq!(Route::StoreDetail { store_id: 3 }.to_path(), "/stores/3");
        assert_eq!(Route::UserProfile { user_id: 1 }.to_path(), "/profile/1");
        assert_eq!(Route::Notifications { user_id: 1 }.to_path(), "/notifications/1");
    }

    #[test]
    fn route_params_parse_back() {
        assert_eq!(
            Route::recognize("/stores/12"),
            Some(Route::StoreDetail { store_id: 12 })
        );
        assert_eq!(
            Route::recognize("/profile/42"),
            Some(Route::UserProfile { user_id: 42 })
        );
    }
}
