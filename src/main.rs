use loyalty_storefront::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🛍️ Kingsman Loyalty Club starting...");

    yew::Renderer::<App>::new().render();
}
