use yew::prelude::*;

use crate::models::{Category, Product};
use crate::services::ApiClient;

#[derive(Properties, PartialEq, Clone)]
pub struct ProductDetailProps {
    pub product_id: u32,
}

/// Single product view. The product and the category list are fetched
/// concurrently; either failure fails the page.
#[function_component(ProductDetail)]
pub fn product_detail(props: &ProductDetailProps) -> Html {
    let product = use_state(|| None::<Product>);
    let categories = use_state(Vec::<Category>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let product = product.clone();
        let categories = categories.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with(props.product_id, move |&product_id| {
            loading.set(true);
            error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                let (product_res, categories_res) =
                    futures::join!(api.get_product(product_id), api.get_categories());

                match (product_res, categories_res) {
                    (Ok(found), Ok(category_list)) => {
                        product.set(Some(found));
                        categories.set(category_list);
                    }
                    (Err(e), _) | (_, Err(e)) => {
                        log::error!("❌ Error loading product {}: {}", product_id, e);
                        error.set(Some(e));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    if *loading {
        return html! { <div>{"Loading product details..."}</div> };
    }
    if let Some(e) = (*error).as_ref() {
        return html! { <div>{format!("Error: {}", e)}</div> };
    }

    match (*product).as_ref() {
        Some(product) => {
            let category_name = categories
                .iter()
                .find(|c| c.id == product.category_id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| "Unknown".to_string());

            html! {
                <div class="product-detail-page">
                    <h1>{&product.name}</h1>
                    <div class="product-detail-content">
                        if let Some(image_url) = &product.image_url {
                            <img src={image_url.clone()} alt={product.name.clone()} class="product-detail-image" />
                        }
                        <div class="product-detail-info">
                            <p class="product-detail-description">{&product.description}</p>
                            <p>{format!("Price: ${:.2}", product.price)}</p>
                            <p>{format!("Category: {}", category_name)}</p>
                            if let Some(quantity) = product.quantity {
                                <p>{format!("In stock: {}", quantity)}</p>
                            }
                        </div>
                    </div>
                </div>
            }
        }
        None => html! { <div>{"Product not found."}</div> },
    }
}
