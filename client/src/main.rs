mod api;
mod dom;
mod handlers;
mod storage;

fn main() {
    console_error_panic_hook::set_once();
    let Some(document) = dom::document() else {
        return;
    };
    let settings = storage::load_settings();
    handlers::bind_all(&document, settings);
}
