// ============================================================================
// ELEMENT BUILDER - Builder pattern para crear elementos fácilmente
// ============================================================================

use web_sys::Element;
use crate::dom::{create_element, set_attribute, set_text_content, append_child};
use crate::error::WidgetResult;

pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    /// Crear nuevo builder para un elemento
    pub fn new(tag: &str) -> WidgetResult<Self> {
        Ok(Self {
            element: create_element(tag)?,
        })
    }

    /// Establecer class name (reemplaza todas las clases)
    pub fn class(self, class: &str) -> Self {
        self.element.set_class_name(class);
        self
    }

    /// Establecer text content
    pub fn text(self, text: &str) -> Self {
        set_text_content(&self.element, text);
        self
    }

    /// Establecer atributo
    pub fn attr(self, name: &str, value: &str) -> WidgetResult<Self> {
        set_attribute(&self.element, name, value)?;
        Ok(self)
    }

    /// Agregar hijo
    pub fn child(self, child: &Element) -> WidgetResult<Self> {
        append_child(&self.element, child)?;
        Ok(self)
    }

    /// Agregar varios hijos en orden
    pub fn children(self, children: &[&Element]) -> WidgetResult<Self> {
        for child in children {
            append_child(&self.element, child)?;
        }
        Ok(self)
    }

    /// Construir y retornar elemento
    pub fn build(self) -> Element {
        self.element
    }
}
