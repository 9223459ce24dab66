//! HTTP 客户端封装
//!
//! 单一共享管道：固定基地址、固定超时、JSON 内容类型。
//! 请求侧拦截：持久存储中有令牌时注入 `Authorization: Bearer`。
//! 响应侧拦截：状态恰为 401 时同步清除两个持久条目并发出
//! 会话失效事件，然后把原始错误照常抛给调用方；其余状态原样透传。
//! 传输层不做任何页面跳转——导航由订阅失效事件的宿主完成。

use std::sync::{Arc, Mutex};

use congresotec_shared::protocol::{ApiRequest, HttpMethod};
use futures::future::{Either, select};
use futures::pin_mut;
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::use_context;

use super::error::{ApiError, mensaje_del_cuerpo};
use crate::web::{BrowserStorage, STORAGE_TOKEN_KEY, STORAGE_USUARIO_KEY, StorageAdapter};

/// 后端固定源地址（含 `/api` 前缀）
pub const API_BASE_URL: &str = "https://api.congresotec.mx/api";

/// 客户端统一请求超时（毫秒）
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

// Arc/Mutex 仅为满足 Context 的 Send 约束；WASM 单线程下无竞争
type InvalidationHandler = Arc<dyn Fn() + Send + Sync>;

/// 预配置的共享 HTTP 客户端
///
/// 存储通过适配器注入；浏览器下的具体类型见 [`PortalApi`]。
#[derive(Clone)]
pub struct ApiClient<S: StorageAdapter + Clone + 'static> {
    base_url: String,
    storage: S,
    on_invalidated: Arc<Mutex<Option<InvalidationHandler>>>,
}

/// 浏览器环境的客户端别名
pub type PortalApi = ApiClient<BrowserStorage>;

/// 从 Context 获取共享客户端
pub fn use_api() -> PortalApi {
    use_context::<PortalApi>().expect("PortalApi should be provided")
}

impl<S: StorageAdapter + Clone + 'static> ApiClient<S> {
    pub fn new(storage: S) -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            storage,
            on_invalidated: Arc::new(Mutex::new(None)),
        }
    }

    /// 注册会话失效回调（每个 401 触发一次）
    pub fn on_session_invalidated(&self, handler: impl Fn() + Send + Sync + 'static) {
        if let Ok(mut ranura) = self.on_invalidated.lock() {
            *ranura = Some(Arc::new(handler));
        }
    }

    /// 请求侧拦截：读取持久令牌。绝不失败；无令牌则请求匿名发出。
    fn bearer(&self) -> Option<String> {
        self.storage.get(STORAGE_TOKEN_KEY)
    }

    /// 响应侧 401 处理：同步清除令牌与缓存用户，发出失效事件
    fn invalidate_session(&self) {
        self.storage.delete(STORAGE_TOKEN_KEY);
        self.storage.delete(STORAGE_USUARIO_KEY);
        let handler = self.on_invalidated.lock().ok().and_then(|r| r.clone());
        if let Some(handler) = handler {
            handler();
        }
    }

    /// 发出一个协议请求并解析其响应
    pub async fn execute<R: ApiRequest>(&self, request: &R) -> Result<R::Response, ApiError> {
        let url = format!("{}{}", self.base_url, request.path());

        let mut builder = match R::METHOD {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
            HttpMethod::Patch => Request::patch(&url),
            HttpMethod::Delete => Request::delete(&url),
        };

        if let Some(token) = self.bearer() {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }

        // GET/DELETE 不携带请求体；其余方法序列化 JSON 体
        let peticion = match R::METHOD {
            HttpMethod::Get | HttpMethod::Delete => builder.build(),
            _ => builder.json(request),
        }
        .map_err(|e| ApiError::Build(e.to_string()))?;

        // 固定超时与 fetch 竞速
        let fetch = peticion.send();
        let timeout = TimeoutFuture::new(REQUEST_TIMEOUT_MS);
        pin_mut!(fetch);
        pin_mut!(timeout);

        let respuesta = match select(fetch, timeout).await {
            Either::Left((resultado, _)) => {
                resultado.map_err(|e| ApiError::Network(e.to_string()))?
            }
            Either::Right(_) => return Err(ApiError::Timeout),
        };

        let status = respuesta.status();
        if status == 401 {
            let mensaje = mensaje_de_respuesta(&respuesta).await;
            self.invalidate_session();
            // 原始错误仍要抵达调用方自己的错误处理
            return Err(ApiError::Server {
                status,
                message: mensaje,
            });
        }

        if !respuesta.ok() {
            let mensaje = mensaje_de_respuesta(&respuesta).await;
            return Err(ApiError::Server {
                status,
                message: mensaje,
            });
        }

        respuesta
            .json::<R::Response>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

async fn mensaje_de_respuesta(respuesta: &Response) -> Option<String> {
    let texto = respuesta.text().await.ok()?;
    mensaje_del_cuerpo(&texto)
}

// =========================================================
// 测试
// =========================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::storage::tests::MockStorage;
    use std::sync::atomic::{AtomicBool, Ordering};

    #[test]
    fn interceptor_lee_el_token_persistido() {
        let storage = MockStorage::default();
        storage.set(STORAGE_TOKEN_KEY, "jwt-abc");
        let cliente = ApiClient::new(storage);
        assert_eq!(cliente.bearer(), Some("jwt-abc".to_string()));
    }

    #[test]
    fn sin_token_la_peticion_sale_anonima() {
        let cliente = ApiClient::new(MockStorage::default());
        assert_eq!(cliente.bearer(), None);
    }

    #[test]
    fn invalidar_limpia_ambas_entradas_y_emite_evento() {
        let storage = MockStorage::default();
        storage.set(STORAGE_TOKEN_KEY, "jwt-abc");
        storage.set(STORAGE_USUARIO_KEY, "{\"id\":1}");

        let cliente = ApiClient::new(storage.clone());
        let avisado = Arc::new(AtomicBool::new(false));
        let bandera = avisado.clone();
        cliente.on_session_invalidated(move || bandera.store(true, Ordering::Relaxed));

        cliente.invalidate_session();

        assert_eq!(storage.get(STORAGE_TOKEN_KEY), None);
        assert_eq!(storage.get(STORAGE_USUARIO_KEY), None);
        assert!(avisado.load(Ordering::Relaxed));
    }

    #[test]
    fn invalidar_sin_suscriptor_no_falla() {
        let storage = MockStorage::default();
        storage.set(STORAGE_TOKEN_KEY, "jwt-abc");
        let cliente = ApiClient::new(storage.clone());
        cliente.invalidate_session();
        assert_eq!(storage.get(STORAGE_TOKEN_KEY), None);
    }
}
