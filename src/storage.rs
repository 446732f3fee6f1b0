use gloo_console::error;

const BASE_URL_KEY: &str = "api-base-url";

pub fn load_base_url() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;

    storage.get_item(BASE_URL_KEY).ok()?
}

pub fn store_base_url(base_url: &str) {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());

    match storage {
        Some(storage) => {
            if storage.set_item(BASE_URL_KEY, base_url).is_err() {
                error!("Error persisting the API base URL");
            }
        }
        None => error!("Local storage is unavailable"),
    }
}
