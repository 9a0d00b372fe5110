use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <section class="hero-section">
                <div class="hero-content">
                    <h1>{"KINGSMAN"}</h1>
                    <h2>{"Premium menswear and a rewards program to match"}</h2>
                    <div class="hero-buttons">
                        <Link<Route> to={Route::ProductCatalog} classes="btn-primary">
                            {"Browse the catalog"}
                        </Link<Route>>
                        <Link<Route> to={Route::Stores} classes="btn-secondary">
                            {"Find a store"}
                        </Link<Route>>
                    </div>
                </div>
            </section>

            <section class="features-section">
                <h2>{"Why shop with us?"}</h2>
                <div class="feature-cards">
                    <div class="info-card">
                        <h3>{"Quality"}</h3>
                        <p>{"Impeccable construction and durability in every piece."}</p>
                    </div>
                    <div class="info-card">
                        <h3>{"Loyalty rewards"}</h3>
                        <p>{"Earn points on every purchase and climb the tiers."}</p>
                    </div>
                    <div class="info-card">
                        <h3>{"Member discounts"}</h3>
                        <p>{"Your discount card grows with you."}</p>
                    </div>
                </div>
            </section>
        </div>
    }
}
