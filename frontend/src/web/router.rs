//! 路由服务模块 - 核心引擎
//!
//! 封装 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 守卫判定本身是纯函数（见 `route.rs`），这里负责执行其结论：
//! 等待、放行、渲染拒绝态，或带着原目标重定向到登录页。

use leptos::logging::log;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::{AppRoute, GuardOutcome, SessionSnapshot, evaluate_guard};

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（用于重定向，不留历史记录）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 注入路由服务的会话信号组
///
/// 路由器不直接依赖认证模块，只消费这三个信号（解耦）。
#[derive(Clone, Copy)]
pub struct SessionSignals {
    pub is_loading: Signal<bool>,
    pub is_authenticated: Signal<bool>,
    pub rol: Signal<Option<String>>,
}

impl SessionSignals {
    fn snapshot_untracked(&self) -> (bool, bool, Option<String>) {
        (
            self.is_loading.get_untracked(),
            self.is_authenticated.get_untracked(),
            self.rol.get_untracked(),
        )
    }
}

/// 路由出口的渲染决议
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteResolution {
    /// 会话解析中（或重定向即将发生），渲染等待态
    Pending,
    /// 角色不符，渲染拒绝访问态
    Denied,
    /// 渲染目标路由
    Granted(AppRoute),
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    /// 登录重定向时暂存的原目标，登录成功后返回
    intended: ReadSignal<Option<AppRoute>>,
    set_intended: WriteSignal<Option<AppRoute>>,
    session: SessionSignals,
}

impl RouterService {
    fn new(session: SessionSignals) -> Self {
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);
        let (intended, set_intended) = signal(None);

        Self {
            current_route,
            set_route,
            intended,
            set_intended,
            session,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 路由出口据此渲染：等待 / 拒绝 / 放行
    pub fn resolution(&self) -> Signal<RouteResolution> {
        let current = self.current_route;
        let session = self.session;
        Signal::derive(move || {
            let route = current.get();
            let rol = session.rol.get();
            let snapshot = SessionSnapshot {
                is_loading: session.is_loading.get(),
                is_authenticated: session.is_authenticated.get(),
                rol: rol.as_deref(),
            };
            match evaluate_guard(&route, &snapshot) {
                GuardOutcome::Allow => RouteResolution::Granted(route),
                GuardOutcome::Wait => RouteResolution::Pending,
                GuardOutcome::Deny => RouteResolution::Denied,
                // 重定向由认证监听 Effect 执行，这一拍先渲染等待态
                GuardOutcome::RedirectToLogin => RouteResolution::Pending,
            }
        })
    }

    /// **核心方法：导航与守卫**
    pub fn navigate(&self, path: &str) {
        self.navigate_to_route(AppRoute::from_path(path), true);
    }

    fn navigate_to_route(&self, target: AppRoute, use_push: bool) {
        let (is_loading, is_authenticated, rol) = self.session.snapshot_untracked();
        let snapshot = SessionSnapshot {
            is_loading,
            is_authenticated,
            rol: rol.as_deref(),
        };

        // 未认证访问受保护路由：暂存目标并转向登录
        if evaluate_guard(&target, &snapshot) == GuardOutcome::RedirectToLogin {
            log!("[Router] acceso no autenticado a {target}, redirigiendo a login");
            self.set_intended.set(Some(target));
            self.apply(AppRoute::auth_failure_redirect(), use_push);
            return;
        }

        // 已认证用户访问登录/注册：回到暂存目标或面板
        if target.should_redirect_when_authenticated() && is_authenticated && !is_loading {
            let destino = self
                .take_intended()
                .unwrap_or_else(AppRoute::auth_success_redirect);
            self.apply(destino, use_push);
            return;
        }

        // Wait / Deny 不改写导航：resolution 信号负责渲染对应状态
        self.apply(target, use_push);
    }

    fn apply(&self, route: AppRoute, use_push: bool) {
        if use_push {
            push_history_state(route.to_path());
        } else {
            replace_history_state(route.to_path());
        }
        self.set_route.set(route);
    }

    fn take_intended(&self) -> Option<AppRoute> {
        let intended = self.intended.get_untracked();
        if intended.is_some() {
            self.set_intended.set(None);
        }
        intended
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let servicio = *self;

        let closure = Closure::<dyn Fn()>::new(move || {
            // popstate 也走守卫，但用 replace 避免污染历史栈
            servicio.navigate_to_route(AppRoute::from_path(&current_path()), false);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 会话状态变化时的自动重定向
    ///
    /// 覆盖三种场景：启动校验失败、任意调用收到 401 失效、登录成功返回。
    fn setup_auth_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let set_intended = self.set_intended;
        let intended = self.intended;
        let session = self.session;

        Effect::new(move |_| {
            let is_loading = session.is_loading.get();
            let is_auth = session.is_authenticated.get();
            if is_loading {
                return;
            }
            let route = current_route.get_untracked();

            if is_auth {
                if route.should_redirect_when_authenticated() {
                    let destino = intended
                        .get_untracked()
                        .unwrap_or_else(AppRoute::auth_success_redirect);
                    set_intended.set(None);
                    log!("[Router] sesión iniciada, navegando a {destino}");
                    push_history_state(destino.to_path());
                    set_route.set(destino);
                }
            } else if route.requires_auth() {
                log!("[Router] sesión terminada, redirigiendo a login");
                set_intended.set(Some(route));
                replace_history_state(AppRoute::auth_failure_redirect().to_path());
                set_route.set(AppRoute::auth_failure_redirect());
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(session: SessionSignals) -> RouterService {
    let router = RouterService::new(session);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

/// 导航函数（返回一个可调用的闭包）
pub fn use_navigate() -> impl Fn(&str) + Clone {
    let router = use_router();
    move |to: &str| {
        router.navigate(to);
    }
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 会话信号组
    session: SessionSignals,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(session);

    children()
}

/// 路由出口组件
///
/// 根据守卫决议渲染等待态、拒绝态或目标组件。
#[component]
pub fn RouterOutlet(
    /// 决议匹配函数：接收渲染决议，返回对应视图
    matcher: fn(RouteResolution) -> AnyView,
) -> impl IntoView {
    let router = use_router();
    let resolution = router.resolution();

    move || matcher(resolution.get())
}
