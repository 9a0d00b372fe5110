use yew::prelude::*;

use crate::components::StoreCard;
use crate::models::Store;
use crate::services::ApiClient;

#[function_component(Stores)]
pub fn stores() -> Html {
    let stores = use_state(Vec::<Store>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    // Fetch the store list on mount
    {
        let stores = stores.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.get_stores().await {
                    Ok(list) => {
                        log::info!("🏬 Loaded {} stores", list.len());
                        stores.set(list);
                    }
                    Err(e) => {
                        log::error!("❌ Error loading stores: {}", e);
                        error.set(Some(e));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! { <div>{"Loading stores..."}</div> };
    }
    if let Some(e) = (*error).as_ref() {
        return html! { <div>{format!("Error: {}", e)}</div> };
    }

    html! {
        <div>
            <h1>{"Our Stores"}</h1>
            <div class="card-grid">
                { for stores.iter().map(|store| html! {
                    <StoreCard store={store.clone()} />
                }) }
            </div>
        </div>
    }
}
