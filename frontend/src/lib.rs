//! CongresoTec 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route` / `web::router`: 路由定义与路由服务（守卫判定所在地）
//! - `auth`: 认证状态管理（会话核心 + Leptos 接线）
//! - `api`: 共享 HTTP 客户端与按后端资源划分的服务模块
//! - `components`: UI 组件层（纯渲染 + 本地 UI 状态）

mod api {
    pub mod asistencias;
    pub mod categorias;
    pub mod client;
    pub mod concursos;
    pub mod diplomas;
    pub mod error;
    pub mod foros;
    pub mod inscripciones;
    pub mod resultados;
    pub mod roles;
    pub mod talleres;
    pub mod usuarios;
}
mod auth;
mod components {
    pub mod dashboard;
    pub mod diplomas;
    pub mod foros;
    mod icons;
    pub mod landing;
    pub mod login;
    mod navbar;
    pub mod perfil;
    pub mod register;
    pub mod resultados;
    mod sidebar;
}

// 原生 Web API 封装模块
// 路由走 History API 的自研服务而不是 leptos_router：
// 守卫判定与会话信号的注入都集中在这里。
pub(crate) mod web {
    pub mod route;
    pub mod router;
    pub mod storage;

    pub use route::AppRoute;
    pub use router::{RouteResolution, Router, RouterOutlet, SessionSignals, use_navigate};
    pub use storage::{BrowserStorage, STORAGE_TOKEN_KEY, STORAGE_USUARIO_KEY, StorageAdapter};
}

use crate::api::client::PortalApi;
use crate::auth::{AuthContext, conectar_invalidacion, init_auth};
use crate::components::dashboard::DashboardPage;
use crate::components::diplomas::DiplomasPanel;
use crate::components::foros::ForosPanel;
use crate::components::landing::LandingPage;
use crate::components::login::LoginPage;
use crate::components::perfil::PerfilPage;
use crate::components::register::RegisterPage;
use crate::components::resultados::ResultadosPanel;
use crate::web::{AppRoute, BrowserStorage, RouteResolution, Router, RouterOutlet};

use leptos::prelude::*;

/// 决议匹配函数
///
/// 等待态与拒绝态在这里渲染；放行时按路由返回对应页面。
fn route_matcher(resolution: RouteResolution) -> AnyView {
    match resolution {
        RouteResolution::Pending => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <span class="loading loading-spinner loading-lg text-primary"></span>
            </div>
        }
        .into_any(),
        RouteResolution::Denied => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"403"</h1>
                    <p class="text-xl mt-4">"Acceso denegado"</p>
                    <p class="text-base-content/70 mt-2">
                        "Tu rol no tiene permiso para ver esta sección."
                    </p>
                </div>
            </div>
        }
        .into_any(),
        RouteResolution::Granted(route) => match route {
            AppRoute::Landing => view! { <LandingPage /> }.into_any(),
            AppRoute::Login => view! { <LoginPage /> }.into_any(),
            AppRoute::Register => view! { <RegisterPage /> }.into_any(),
            AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
            AppRoute::Perfil => view! { <PerfilPage /> }.into_any(),
            AppRoute::AdminResultados => view! { <ResultadosPanel /> }.into_any(),
            AppRoute::AdminDiplomas => view! { <DiplomasPanel /> }.into_any(),
            AppRoute::AdminForos => view! { <ForosPanel /> }.into_any(),
            AppRoute::NotFound => view! {
                <div class="flex items-center justify-center min-h-screen bg-base-200">
                    <div class="text-center">
                        <h1 class="text-6xl font-bold text-error">"404"</h1>
                        <p class="text-xl mt-4">"Página no encontrada"</p>
                    </div>
                </div>
            }
            .into_any(),
        },
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 认证上下文
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 2. 共享 API 客户端；401 失效事件接回认证上下文
    let api = PortalApi::new(BrowserStorage);
    conectar_invalidacion(&auth_ctx, &api);
    provide_context(api.clone());

    // 3. 恢复并校验持久会话
    init_auth(&auth_ctx, &api);

    // 4. 路由器组件：注入会话信号实现守卫
    view! {
        <Router session=auth_ctx.session_signals()>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
