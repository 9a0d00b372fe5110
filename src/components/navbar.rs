use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

// Profile and notifications are pinned to user 1 until a real session
// identity exists.
const PLACEHOLDER_USER_ID: u32 = 1;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    html! {
        <nav class="navbar">
            <div class="nav-left">
                <Link<Route> to={Route::Home} classes="nav-link">{"Home"}</Link<Route>>
                <Link<Route> to={Route::ProductCatalog} classes="nav-link">{"Products"}</Link<Route>>
                <Link<Route> to={Route::Stores} classes="nav-link">{"Stores"}</Link<Route>>
                <Link<Route> to={Route::UserProfile { user_id: PLACEHOLDER_USER_ID }} classes="nav-link">
                    {"Profile (User 1)"}
                </Link<Route>>
                <Link<Route> to={Route::Notifications { user_id: PLACEHOLDER_USER_ID }} classes="nav-link">
                    {"Notifications (User 1)"}
                </Link<Route>>
            </div>
            <div class="nav-right">
                <Link<Route> to={Route::Login} classes="nav-link">{"Login"}</Link<Route>>
                <Link<Route> to={Route::Register} classes="nav-link">{"Register"}</Link<Route>>
            </div>
        </nav>
    }
}
