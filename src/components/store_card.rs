use yew::prelude::*;
use yew_router::prelude::*;

use crate::models::Store;
use crate::router::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct StoreCardProps {
    pub store: Store,
}

#[function_component(StoreCard)]
pub fn store_card(props: &StoreCardProps) -> Html {
    let store = &props.store;

    html! {
        <div class="store-card">
            <h2 class="store-card-name">
                <Link<Route> to={Route::StoreDetail { store_id: store.id }}>
                    {&store.name}
                </Link<Route>>
            </h2>
            <p class="store-card-address">{format!("Address: {}", store.address)}</p>
            <p class="store-card-phone">{format!("Phone: {}", store.phone)}</p>
        </div>
    }
}
