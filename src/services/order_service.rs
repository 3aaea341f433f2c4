// ============================================================================
// ORDER SERVICE - Pedidos del carrito
// ============================================================================

use crate::config::{DbConfig, Settings};
use crate::error::WidgetResult;
use crate::models::{Created, OrderPayload};
use crate::services::api_client::ApiClient;

#[derive(Clone)]
pub struct OrderService {
    api: ApiClient,
    db: DbConfig,
}

impl OrderService {
    pub fn new(settings: &Settings) -> Self {
        Self {
            api: ApiClient::new(settings.db.timeout_ms),
            db: settings.db.clone(),
        }
    }

    pub async fn submit_order(&self, payload: &OrderPayload) -> WidgetResult<Created> {
        let url = self.db.endpoint(&self.db.order);
        log::info!(
            "📨 Enviando pedido: {} productos, total {}",
            payload.total_number,
            payload.total_price
        );

        let created: Created = self.api.post_json(&url, payload).await?;
        log::info!("✅ Pedido creado: {:?}", created.id);
        Ok(created)
    }
}
