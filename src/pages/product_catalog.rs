use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::components::ProductCard;
use crate::models::{Category, Product, ProductFilter};
use crate::services::ApiClient;

/// Catalog with a category/price filter form. Products reload on
/// submit; categories load once and only warn on failure.
#[function_component(ProductCatalog)]
pub fn product_catalog() -> Html {
    let products = use_state(Vec::<Product>::new);
    let categories = use_state(Vec::<Category>::new);
    let selected_category = use_state(String::new);
    let min_price = use_state(String::new);
    let max_price = use_state(String::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    // Initial load: unfiltered products plus the category list
    {
        let products = products.clone();
        let categories = categories.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            fetch_products(products, loading, error, ProductFilter::default());

            wasm_bindgen_futures::spawn_local(async move {
                let api = ApiClient::new();
                match api.get_categories().await {
                    Ok(list) => categories.set(list),
                    Err(e) => log::warn!("⚠️ Error fetching categories: {}", e),
                }
            });
            || ()
        });
    }

    let on_filter = {
        let products = products.clone();
        let loading = loading.clone();
        let error = error.clone();
        let selected_category = selected_category.clone();
        let min_price = min_price.clone();
        let max_price = max_price.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let filter = build_filter(&selected_category, &min_price, &max_price);
            fetch_products(products.clone(), loading.clone(), error.clone(), filter);
        })
    };

    let on_category_change = {
        let selected_category = selected_category.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            selected_category.set(select.value());
        })
    };

    let on_min_price_input = {
        let min_price = min_price.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            min_price.set(input.value());
        })
    };

    let on_max_price_input = {
        let max_price = max_price.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            max_price.set(input.value());
        })
    };

    if *loading {
        return html! { <div>{"Loading products..."}</div> };
    }
    if let Some(e) = (*error).as_ref() {
        return html! { <div>{format!("Error: {}", e)}</div> };
    }

    html! {
        <div>
            <h1>{"Product Catalog"}</h1>
            <form onsubmit={on_filter}>
                <div class="form-group">
                    <label>{"Category:"}</label>
                    <select value={(*selected_category).clone()} onchange={on_category_change}>
                        <option value="">{"All Categories"}</option>
                        { for categories.iter().map(|category| html! {
                            <option value={category.id.to_string()}>{&category.name}</option>
                        }) }
                    </select>
                </div>
                <div class="form-group">
                    <label>{"Min Price:"}</label>
                    <input
                        type="number"
                        value={(*min_price).clone()}
                        oninput={on_min_price_input}
                    />
                </div>
                <div class="form-group">
                    <label>{"Max Price:"}</label>
                    <input
                        type="number"
                        value={(*max_price).clone()}
                        oninput={on_max_price_input}
                    />
                </div>
                <button type="submit">{"Filter Products"}</button>
            </form>

            <div class="card-grid">
                { for products.iter().map(|product| html! {
                    <ProductCard product={product.clone()} categories={(*categories).clone()} />
                }) }
            </div>
        </div>
    }
}

fn fetch_products(
    products: UseStateHandle<Vec<Product>>,
    loading: UseStateHandle<bool>,
    error: UseStateHandle<Option<String>>,
    filter: ProductFilter,
) {
    wasm_bindgen_futures::spawn_local(async move {
        loading.set(true);
        error.set(None);

        let api = ApiClient::new();
        match api.get_products(&filter).await {
            Ok(list) => {
                log::info!("🛒 Loaded {} products", list.len());
                products.set(list);
            }
            Err(e) => {
                log::error!("❌ Error loading products: {}", e);
                error.set(Some(e));
            }
        }
        loading.set(false);
    });
}

/// Blank form fields become absent filters, not empty values.
fn build_filter(category: &str, min_price: &str, max_price: &str) -> ProductFilter {
    ProductFilter {
        category_id: category.parse().ok(),
        min_price: min_price.parse().ok(),
        max_price: max_price.parse().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_yield_no_filters() {
        let filter = build_filter("", "", "");
        assert_eq!(filter, ProductFilter::default());
        assert_eq!(filter.query_string(), "");
    }

    #[test]
    fn filled_fields_parse_into_filters() {
        let filter = build_filter("2", "10.5", "");
        assert_eq!(filter.category_id, Some(2));
        assert_eq!(filter.min_price, Some(10.5));
        assert_eq!(filter.max_price, None);
        assert_eq!(filter.query_string(), "?category_id=2&min_price=10.5");
    }

    #[test]
    fn garbage_input_is_treated_as_absent() {
        let filter = build_filter("shoes", "cheap", "");
        assert_eq!(filter, ProductFilter::default());
    }
}
