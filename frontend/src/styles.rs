use wasm_bindgen::JsValue;

const MAIN_CSS: &str = include_str!("../styles/main.css");

/// Appends the page stylesheet to `<head>`. Called once before mounting.
pub fn inject() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("document has no <head>"))?;

    let style = document.create_element("style")?;
    style.set_text_content(Some(MAIN_CSS));
    head.append_child(&style)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::MAIN_CSS;

    #[test]
    fn stylesheet_covers_toggled_classes() {
        for selector in [
            ".header.scrolled",
            ".fade-in-section.visible",
            ".cursor-trail",
            ".nav-links-wrapper.active",
            ".burger-menu.active",
        ] {
            assert!(MAIN_CSS.contains(selector), "missing {selector}");
        }
    }
}
