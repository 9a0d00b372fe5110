use yew::prelude::*;

use crate::models::Store;
use crate::services::ApiClient;

#[derive(Properties, PartialEq, Clone)]
pub struct StoreDetailProps {
    pub store_id: u32,
}

#[function_component(StoreDetail)]
pub fn store_detail(props: &StoreDetailProps) -> Html {
    let store = use_state(|| None::<Store>);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    // Fetch on mount and again whenever the route id changes
    {
        let store = store.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with(props.store_id, move |&store_id| {
            loading.set(true);
            error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.get_store(store_id).await {
                    Ok(found) => store.set(Some(found)),
                    Err(e) => {
                        log::error!("❌ Error loading store {}: {}", store_id, e);
                        error.set(Some(e));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! { <div>{"Loading store details..."}</div> };
    }
    if let Some(e) = (*error).as_ref() {
        return html! { <div>{format!("Error: {}", e)}</div> };
    }

    match (*store).as_ref() {
        Some(store) => html! {
            <div>
                <h1>{&store.name}</h1>
                <p>{format!("Address: {}", store.address)}</p>
                <p>{format!("Phone: {}", store.phone)}</p>
                if let Some(location) = &store.location {
                    <p>{format!("Location: {}", location)}</p>
                }
            </div>
        },
        None => html! { <div>{"Store not found."}</div> },
    }
}
