//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖 DOM 或 web_sys。
//! 定义应用的所有路由、其认证/角色要求，以及守卫判定函数。

use congresotec_shared::{ROL_ADMINISTRADOR, autoriza_rol};
use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 公共首页（大会信息与日程）
    #[default]
    Landing,
    /// 登录页面
    Login,
    /// 注册页面
    Register,
    /// 与会者面板（需要认证）
    Dashboard,
    /// 个人资料（需要认证）
    Perfil,
    /// 结果管理面板（需要管理员角色）
    AdminResultados,
    /// 证书管理面板（需要管理员角色）
    AdminDiplomas,
    /// 论坛管理面板（需要管理员角色）
    AdminForos,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => Self::Landing,
            "/login" => Self::Login,
            "/registro" => Self::Register,
            "/dashboard" => Self::Dashboard,
            "/perfil" => Self::Perfil,
            "/admin/resultados" => Self::AdminResultados,
            "/admin/diplomas" => Self::AdminDiplomas,
            "/admin/foros" => Self::AdminForos,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Login => "/login",
            Self::Register => "/registro",
            Self::Dashboard => "/dashboard",
            Self::Perfil => "/perfil",
            Self::AdminResultados => "/admin/resultados",
            Self::AdminDiplomas => "/admin/diplomas",
            Self::AdminForos => "/admin/foros",
            Self::NotFound => "/404",
        }
    }

    /// 该路由是否需要认证
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::Dashboard
                | Self::Perfil
                | Self::AdminResultados
                | Self::AdminDiplomas
                | Self::AdminForos
        )
    }

    /// 该路由要求的角色（`None` 表示仅需登录）
    pub fn required_role(&self) -> Option<&'static str> {
        match self {
            Self::AdminResultados | Self::AdminDiplomas | Self::AdminForos => {
                Some(ROL_ADMINISTRADOR)
            }
            _ => None,
        }
    }

    /// 已认证用户是否应该离开此路由（登录/注册页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login | Self::Register)
    }

    /// 认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 认证成功时的默认重定向目标
    pub fn auth_success_redirect() -> Self {
        Self::Dashboard
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

// =========================================================
// 守卫判定 (Guard)
// =========================================================

/// 守卫判定所需的会话快照
#[derive(Debug, Clone, Copy)]
pub struct SessionSnapshot<'a> {
    pub is_loading: bool,
    pub is_authenticated: bool,
    pub rol: Option<&'a str>,
}

/// 守卫判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// 渲染目标内容
    Allow,
    /// 会话尚未解析完毕，渲染等待态
    Wait,
    /// 未认证，重定向到登录页（保留原目标）
    RedirectToLogin,
    /// 已认证但角色不符，渲染拒绝访问态
    Deny,
}

/// **核心守卫逻辑**：对 (路由, 会话快照) 的纯判定
///
/// 会话未解析（加载中）时一律等待，调用方不得提前放行。
pub fn evaluate_guard(route: &AppRoute, session: &SessionSnapshot<'_>) -> GuardOutcome {
    if !route.requires_auth() {
        return GuardOutcome::Allow;
    }
    if session.is_loading {
        return GuardOutcome::Wait;
    }
    if !session.is_authenticated {
        return GuardOutcome::RedirectToLogin;
    }
    match route.required_role() {
        None => GuardOutcome::Allow,
        Some(requerido) => {
            let autorizado = session
                .rol
                .map(|rol| autoriza_rol(rol, Some(requerido)))
                .unwrap_or(false);
            if autorizado {
                GuardOutcome::Allow
            } else {
                GuardOutcome::Deny
            }
        }
    }
}

// =========================================================
// 测试
// =========================================================

#[cfg(test)]
mod tests {
    use super::*;
    use congresotec_shared::ROL_PONENTE;

    fn snapshot(is_loading: bool, is_authenticated: bool, rol: Option<&str>) -> SessionSnapshot<'_> {
        SessionSnapshot {
            is_loading,
            is_authenticated,
            rol,
        }
    }

    #[test]
    fn rutas_y_paths_son_inversos() {
        let rutas = [
            AppRoute::Landing,
            AppRoute::Login,
            AppRoute::Register,
            AppRoute::Dashboard,
            AppRoute::Perfil,
            AppRoute::AdminResultados,
            AppRoute::AdminDiplomas,
            AppRoute::AdminForos,
        ];
        for ruta in rutas {
            assert_eq!(AppRoute::from_path(ruta.to_path()), ruta);
        }
        assert_eq!(AppRoute::from_path("/no-existe"), AppRoute::NotFound);
    }

    #[test]
    fn cargando_siempre_espera_en_rutas_protegidas() {
        // 加载期间无论认证标志如何都渲染等待态
        assert_eq!(
            evaluate_guard(&AppRoute::Dashboard, &snapshot(true, false, None)),
            GuardOutcome::Wait
        );
        assert_eq!(
            evaluate_guard(
                &AppRoute::AdminResultados,
                &snapshot(true, true, Some(ROL_ADMINISTRADOR))
            ),
            GuardOutcome::Wait
        );
    }

    #[test]
    fn sin_autenticar_redirige_a_login() {
        assert_eq!(
            evaluate_guard(&AppRoute::Dashboard, &snapshot(false, false, None)),
            GuardOutcome::RedirectToLogin
        );
    }

    #[test]
    fn rol_insuficiente_se_deniega_sin_redirigir() {
        // Ponente 访问面板管理页：渲染拒绝访问，绝不渲染受保护内容
        assert_eq!(
            evaluate_guard(
                &AppRoute::AdminResultados,
                &snapshot(false, true, Some(ROL_PONENTE))
            ),
            GuardOutcome::Deny
        );
    }

    #[test]
    fn administrador_accede_a_paneles() {
        assert_eq!(
            evaluate_guard(
                &AppRoute::AdminDiplomas,
                &snapshot(false, true, Some(ROL_ADMINISTRADOR))
            ),
            GuardOutcome::Allow
        );
    }

    #[test]
    fn rutas_publicas_no_esperan_ni_exigen_sesion() {
        assert_eq!(
            evaluate_guard(&AppRoute::Landing, &snapshot(true, false, None)),
            GuardOutcome::Allow
        );
        assert_eq!(
            evaluate_guard(&AppRoute::Login, &snapshot(false, false, None)),
            GuardOutcome::Allow
        );
    }

    #[test]
    fn autenticado_sin_rol_cargado_se_deniega() {
        // 不变式：绝不允许 "authenticated 但 usuario 为空" 放行角色路由
        assert_eq!(
            evaluate_guard(&AppRoute::AdminForos, &snapshot(false, true, None)),
            GuardOutcome::Deny
        );
    }
}
