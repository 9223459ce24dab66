//! 认证模块
//!
//! 管理用户会话状态，与路由系统解耦：路由服务只消费这里
//! 导出的会话信号组。状态转移与持久化同步在 `session` 核心中，
//! 本模块只负责把核心接到 Leptos 信号上。

pub mod session;

use async_trait::async_trait;
use congresotec_shared::Usuario;
use congresotec_shared::protocol::{
    ActualizarPerfilRequest, LoginRequest, RegisterRequest, Sesion,
};
use leptos::prelude::*;

use crate::api::client::PortalApi;
use crate::api::usuarios;
use crate::web::{BrowserStorage, SessionSignals};
use session::{AuthGateway, SessionCore};

/// 认证状态
///
/// 不变式：`is_authenticated` 为真时 `usuario` 一定在场；
/// 消费方在 `is_loading` 为真期间不得把会话当作已解析。
#[derive(Clone, Default)]
pub struct AuthState {
    pub usuario: Option<Usuario>,
    pub is_authenticated: bool,
    pub is_loading: bool,
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    /// 创建新的认证上下文（启动时处于解析中状态）
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState {
            is_loading: true,
            ..AuthState::default()
        });
        Self { state, set_state }
    }

    /// 导出给路由服务的会话信号组（解耦）
    pub fn session_signals(&self) -> SessionSignals {
        let state = self.state;
        SessionSignals {
            is_loading: Signal::derive(move || state.get().is_loading),
            is_authenticated: Signal::derive(move || state.get().is_authenticated),
            rol: Signal::derive(move || state.get().usuario.as_ref().map(|u| u.rol.clone())),
        }
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

// =========================================================
// 网关实现：会话核心 → 用户服务
// =========================================================

struct PortalGateway {
    api: PortalApi,
}

#[async_trait(?Send)]
impl AuthGateway for PortalGateway {
    async fn login(&self, credenciales: LoginRequest) -> Result<Sesion, String> {
        usuarios::login(&self.api, credenciales).await
    }

    async fn register(&self, datos: RegisterRequest) -> Result<Sesion, String> {
        usuarios::register(&self.api, datos).await
    }

    async fn validate(&self) -> Result<Usuario, String> {
        usuarios::validar(&self.api).await
    }

    async fn update_profile(&self, cambios: ActualizarPerfilRequest) -> Result<Usuario, String> {
        usuarios::actualizar_perfil(&self.api, cambios).await
    }
}

fn core(api: &PortalApi) -> SessionCore<BrowserStorage, PortalGateway> {
    SessionCore::new(BrowserStorage, PortalGateway { api: api.clone() })
}

// =========================================================
// 生命周期操作
// =========================================================

/// 初始化认证状态：存在持久会话时先校验再放行
///
/// 解析完成前 `is_loading` 保持为真，路由守卫据此渲染等待态。
pub fn init_auth(ctx: &AuthContext, api: &PortalApi) {
    let set_state = ctx.set_state;
    let core = core(api);
    leptos::task::spawn_local(async move {
        let restaurado = core.restore().await;
        set_state.update(|state| {
            state.is_authenticated = restaurado.is_some();
            state.usuario = restaurado;
            state.is_loading = false;
        });
    });
}

/// 登录；错误消息向上传播给表单展示
///
/// 无论成败，退出前都清除加载标志。
pub async fn login(
    ctx: &AuthContext,
    api: &PortalApi,
    credenciales: LoginRequest,
) -> Result<(), String> {
    let set_state = ctx.set_state;
    set_state.update(|state| state.is_loading = true);

    let resultado = core(api).login(credenciales).await;
    match resultado {
        Ok(usuario) => {
            set_state.update(|state| {
                state.usuario = Some(usuario);
                state.is_authenticated = true;
                state.is_loading = false;
            });
            Ok(())
        }
        Err(mensaje) => {
            set_state.update(|state| {
                state.usuario = None;
                state.is_authenticated = false;
                state.is_loading = false;
            });
            Err(mensaje)
        }
    }
}

/// 注册；与登录对称
pub async fn register(
    ctx: &AuthContext,
    api: &PortalApi,
    datos: RegisterRequest,
) -> Result<(), String> {
    let set_state = ctx.set_state;
    set_state.update(|state| state.is_loading = true);

    let resultado = core(api).register(datos).await;
    match resultado {
        Ok(usuario) => {
            set_state.update(|state| {
                state.usuario = Some(usuario);
                state.is_authenticated = true;
                state.is_loading = false;
            });
            Ok(())
        }
        Err(mensaje) => {
            set_state.update(|state| {
                state.usuario = None;
                state.is_authenticated = false;
                state.is_loading = false;
            });
            Err(mensaje)
        }
    }
}

/// 注销：同步清除持久与内存状态，不调用服务器
///
/// 导航由路由服务的会话监听自动处理。
pub fn logout(ctx: &AuthContext, api: &PortalApi) {
    core(api).logout();
    ctx.set_state.update(|state| {
        state.usuario = None;
        state.is_authenticated = false;
    });
}

/// 更新个人资料：内存与持久副本都以服务器返回的记录整体覆盖
pub async fn update_profile(
    ctx: &AuthContext,
    api: &PortalApi,
    cambios: ActualizarPerfilRequest,
) -> Result<(), String> {
    let usuario = core(api).update_profile(cambios).await?;
    ctx.set_state.update(|state| {
        state.usuario = Some(usuario);
    });
    Ok(())
}

/// 把传输层的 401 失效事件接回认证上下文
///
/// 存储此刻已被客户端清除；这里同步内存状态，
/// 路由服务监听到未认证后负责跳转登录页。
pub fn conectar_invalidacion(ctx: &AuthContext, api: &PortalApi) {
    let set_state = ctx.set_state;
    api.on_session_invalidated(move || {
        set_state.update(|state| {
            state.usuario = None;
            state.is_authenticated = false;
        });
    });
}
