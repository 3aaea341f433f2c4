// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP con timeout.
// El timeout cubre el request completo: envío, status y lectura del cuerpo.
// ============================================================================

use std::future::Future;
use futures::future::{select, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use serde::{de::DeserializeOwned, Serialize};
use crate::error::{WidgetError, WidgetResult};

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    timeout_ms: u32,
}

impl ApiClient {
    pub fn new(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }

    /// GET que devuelve JSON
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> WidgetResult<T> {
        log::debug!("🌐 GET {}", url);

        self.with_timeout(async move {
            let response = Request::get(url).send().await?;
            let response = check_status(response).await?;
            response.json::<T>().await.map_err(WidgetError::from)
        })
        .await
    }

    /// POST con cuerpo JSON que devuelve JSON
    pub async fn post_json<B, R>(&self, url: &str, body: &B) -> WidgetResult<R>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        log::debug!("🌐 POST {}", url);

        let request = Request::post(url)
            .header("Content-Type", "application/json")
            .json(body)?;

        self.with_timeout(async move {
            let response = request.send().await?;
            let response = check_status(response).await?;
            response.json::<R>().await.map_err(WidgetError::from)
        })
        .await
    }

    async fn with_timeout<F, T>(&self, request: F) -> WidgetResult<T>
    where
        F: Future<Output = WidgetResult<T>>,
    {
        race_timeout(request, TimeoutFuture::new(self.timeout_ms), self.timeout_ms).await
    }
}

/// Lo que termine antes: la respuesta o el timer
async fn race_timeout<F, D, T>(request: F, timer: D, timeout_ms: u32) -> WidgetResult<T>
where
    F: Future<Output = WidgetResult<T>>,
    D: Future<Output = ()>,
{
    let request = Box::pin(request);
    let timer = Box::pin(timer);

    match select(request, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => {
            log::error!("⏱️ Request sin respuesta tras {} ms", timeout_ms);
            Err(WidgetError::Timeout(timeout_ms))
        }
    }
}

async fn check_status(response: Response) -> WidgetResult<Response> {
    if response.ok() {
        return Ok(response);
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = if body.trim().is_empty() {
        response.status_text()
    } else {
        body
    };
    Err(WidgetError::Http { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{pending, ready};

    #[test]
    fn stalled_body_read_times_out() {
        // La respuesta llega pero el cuerpo no termina nunca
        let request = async {
            let status = ready(200u16).await;
            assert_eq!(status, 200);
            pending::<WidgetResult<u32>>().await
        };
        let result = block_on(race_timeout(request, ready(()), 10_000));
        assert!(matches!(result, Err(WidgetError::Timeout(10_000))));
    }

    #[test]
    fn finished_request_wins_over_pending_timer() {
        let result = block_on(race_timeout(ready(Ok(7u32)), pending::<()>(), 10_000));
        assert_eq!(result.unwrap(), 7);

        let failed = block_on(race_timeout(
            ready(Err::<u32, _>(WidgetError::Http { status: 500, message: "boom".into() })),
            pending::<()>(),
            10_000,
        ));
        assert!(matches!(failed, Err(WidgetError::Http { status: 500, .. })));
    }
}
