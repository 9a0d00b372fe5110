use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::Navbar;
use crate::router::{switch, Route};

/// Root component: navbar plus the routed page area.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Navbar />
            <div class="container">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}
