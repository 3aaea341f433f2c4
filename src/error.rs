// ============================================================================
// ERRORES - Tipo de error común de los widgets
// ============================================================================

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum WidgetError {
    /// Falta un elemento esperado en el contenedor
    #[error("Element not found: {0}")]
    MissingElement(String),

    /// Error devuelto por una llamada web_sys
    #[error("DOM error: {0}")]
    Dom(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Request timed out after {0} ms")]
    Timeout(u32),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid hour: {0}")]
    InvalidHour(String),

    /// Datos del formulario incompletos (sin mesa, carrito vacío, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("A submission is already in flight")]
    SubmitInFlight,
}

pub type WidgetResult<T> = Result<T, WidgetError>;

impl WidgetError {
    /// Texto para mostrar en el widget (el detalle técnico queda en el log)
    pub fn user_message(&self) -> String {
        match self {
            WidgetError::Validation(message) => message.clone(),
            WidgetError::Timeout(_) => "The server is taking too long, please try again".to_string(),
            WidgetError::Network(_) | WidgetError::Http { .. } => {
                "Could not reach the restaurant, please try again".to_string()
            }
            WidgetError::SubmitInFlight => "Already sending, please wait".to_string(),
            WidgetError::Parse(_) => "Unexpected answer from the server".to_string(),
            WidgetError::MissingElement(_) | WidgetError::Dom(_) | WidgetError::InvalidHour(_) => {
                "Something went wrong on this page".to_string()
            }
        }
    }
}

impl From<JsValue> for WidgetError {
    fn from(value: JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{:?}", value));
        WidgetError::Dom(message)
    }
}

impl From<WidgetError> for JsValue {
    fn from(value: WidgetError) -> Self {
        JsValue::from_str(&value.to_string())
    }
}

impl From<gloo_net::Error> for WidgetError {
    fn from(value: gloo_net::Error) -> Self {
        match value {
            gloo_net::Error::SerdeError(e) => WidgetError::Parse(e.to_string()),
            other => WidgetError::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for WidgetError {
    fn from(value: serde_json::Error) -> Self {
        WidgetError::Parse(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_readable() {
        let err = WidgetError::Http { status: 503, message: "Service Unavailable".into() };
        assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");
        assert_eq!(WidgetError::Timeout(10000).to_string(), "Request timed out after 10000 ms");
        assert_eq!(
            WidgetError::Validation("no table selected".into()).to_string(),
            "Validation error: no table selected"
        );
    }

    #[test]
    fn serde_errors_become_parse_errors() {
        let err: WidgetError = serde_json::from_str::<u32>("\"x\"").unwrap_err().into();
        assert!(matches!(err, WidgetError::Parse(_)));
    }

    #[test]
    fn user_messages_hide_technical_detail() {
        let validation = WidgetError::Validation("no table selected".into());
        assert_eq!(validation.user_message(), "no table selected");

        let http = WidgetError::Http { status: 500, message: "stack trace".into() };
        assert!(!http.user_message().contains("stack trace"));
        assert_eq!(http.user_message(), WidgetError::Network("offline".into()).user_message());
        assert!(WidgetError::Timeout(10000).user_message().contains("too long"));
    }
}
