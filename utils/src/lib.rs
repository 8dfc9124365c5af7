use gloo::utils::{document, window};
use wasm_bindgen::JsValue;

pub fn get_local_storage(key: &str) -> Option<String> {
    window().local_storage().ok()??.get_item(key).ok()?
}

pub fn set_local_storage(key: &str, value: &str) -> Result<(), JsValue> {
    window()
        .local_storage()?
        .ok_or(JsValue::from_str("local storage unavailable"))?
        .set_item(key, value)
}

pub fn remove_local_storage(key: &str) -> Result<(), JsValue> {
    window()
        .local_storage()?
        .ok_or(JsValue::from_str("local storage unavailable"))?
        .remove_item(key)
}

/// writes the theme name to the root element; the stylesheet keys off
/// the `data-theme` attribute
pub fn set_theme(theme: &str) {
    if let Some(root) = document().document_element() {
        if let Err(err) = root.set_attribute("data-theme", theme) {
            log::error!("failed to set theme: {:?}", err);
        }
    }
}

pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// random index into the public avatar set, 1..=100
pub fn random_avatar_index() -> u32 {
    (js_sys::Math::random() * 100.0).floor() as u32 + 1
}

#[cfg(test)]
mod tests {
    use super::capitalize;

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("english"), "English");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("a"), "A");
    }
}
