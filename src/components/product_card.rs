use yew::prelude::*;
use yew_router::prelude::*;

use crate::models::{Category, Product};
use crate::router::Route;

#[derive(Properties, PartialEq, Clone)]
pub struct ProductCardProps {
    pub product: Product,
    pub categories: Vec<Category>,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let product = &props.product;

    let category_name = props
        .categories
        .iter()
        .find(|c| c.id == product.category_id)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| "Unknown".to_string());

    html! {
        <div class="product-card">
            if let Some(image_url) = &product.image_url {
                <img src={image_url.clone()} alt={product.name.clone()} class="product-image" />
            }
            <h2 class="product-name">
                <Link<Route> to={Route::ProductDetail { product_id: product.id }}>
                    {&product.name}
                </Link<Route>>
            </h2>
            <p class="product-description">{&product.description}</p>
            <div class="product-details">
                <p class="product-price">{format!("${:.2}", product.price)}</p>
                <p class="product-category">{category_name}</p>
                if let Some(quantity) = product.quantity {
                    <p class="product-quantity">{format!("In stock: {}", quantity)}</p>
                }
            </div>
        </div>
    }
}
