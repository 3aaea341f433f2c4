// ============================================================================
// ELEMENT HELPERS - Funciones básicas para manipular DOM
// ============================================================================

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, Window};
use crate::error::{WidgetError, WidgetResult};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> WidgetResult<Document> {
    window()
        .and_then(|win| win.document())
        .ok_or_else(|| WidgetError::MissingElement("document".to_string()))
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document().ok()?.get_element_by_id(id)
}

/// Crear elemento
pub fn create_element(tag: &str) -> WidgetResult<Element> {
    Ok(document()?.create_element(tag)?)
}

/// Primer elemento dentro de `parent` que cumple el selector (obligatorio)
pub fn query(parent: &Element, selector: &str) -> WidgetResult<Element> {
    parent
        .query_selector(selector)?
        .ok_or_else(|| WidgetError::MissingElement(selector.to_string()))
}

/// Todos los elementos dentro de `parent` que cumplen el selector
pub fn query_all(parent: &Element, selector: &str) -> WidgetResult<Vec<Element>> {
    let nodes = parent.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Como `query` pero para un `<input>`
pub fn query_input(parent: &Element, selector: &str) -> WidgetResult<HtmlInputElement> {
    query(parent, selector)?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| WidgetError::MissingElement(format!("{} (input)", selector)))
}

/// Agregar clase
pub fn add_class(element: &Element, class: &str) -> WidgetResult<()> {
    Ok(element.class_list().add_1(class)?)
}

/// Remover clase
pub fn remove_class(element: &Element, class: &str) -> WidgetResult<()> {
    Ok(element.class_list().remove_1(class)?)
}

/// Alternar clase; devuelve si quedó puesta
pub fn toggle_class(element: &Element, class: &str) -> WidgetResult<bool> {
    Ok(element.class_list().toggle(class)?)
}

/// Poner o quitar clase según `on`
pub fn set_class(element: &Element, class: &str, on: bool) -> WidgetResult<()> {
    if on {
        add_class(element, class)
    } else {
        remove_class(element, class)
    }
}

/// Verificar si tiene clase
pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Establecer text content
pub fn set_text_content(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

/// Establecer inner HTML
pub fn set_inner_html(element: &Element, html: &str) {
    element.set_inner_html(html);
}

/// Agregar hijo
pub fn append_child(parent: &Element, child: &Element) -> WidgetResult<()> {
    parent.append_child(child)?;
    Ok(())
}

/// Establecer atributo
pub fn set_attribute(element: &Element, name: &str, value: &str) -> WidgetResult<()> {
    Ok(element.set_attribute(name, value)?)
}

/// Obtener atributo
pub fn get_attribute(element: &Element, name: &str) -> Option<String> {
    element.get_attribute(name)
}

/// Valor actual de un `<input>` (sin espacios)
pub fn input_value(input: &HtmlInputElement) -> String {
    input.value().trim().to_string()
}
