//! 侧边栏导航
//!
//! 管理区入口通过统一的授权判定过滤，不在这里散落角色比较。

use congresotec_shared::ROL_ADMINISTRADOR;
use leptos::prelude::*;

use super::icons::{GraduationCap, LayoutDashboard, MessagesSquare, Trophy, UserRound};
use crate::auth::use_auth;
use crate::web::router::use_router;
use crate::web::{AppRoute, use_navigate};

#[component]
fn SidebarItem(
    route: AppRoute,
    etiqueta: &'static str,
    children: Children,
) -> impl IntoView {
    let navigate = use_navigate();
    let router = use_router();
    let activo = move || router.current_route().get() == route;

    view! {
        <li>
            <button
                class=move || if activo() { "active" } else { "" }
                on:click=move |_| navigate(route.to_path())
            >
                {children()}
                {etiqueta}
            </button>
        </li>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let auth_ctx = use_auth();

    let es_admin = move || {
        auth_ctx
            .state
            .get()
            .usuario
            .map(|u| u.puede(Some(ROL_ADMINISTRADOR)))
            .unwrap_or(false)
    };

    view! {
        <aside class="w-56 min-h-full bg-base-100 border-r border-base-300">
            <ul class="menu p-4 gap-1">
                <SidebarItem route=AppRoute::Dashboard etiqueta="Panel">
                    <LayoutDashboard class="h-4 w-4" />
                </SidebarItem>
                <SidebarItem route=AppRoute::Perfil etiqueta="Mi perfil">
                    <UserRound class="h-4 w-4" />
                </SidebarItem>
                <Show when=es_admin>
                    <li class="menu-title mt-4">"Administración"</li>
                    <SidebarItem route=AppRoute::AdminResultados etiqueta="Resultados">
                        <Trophy class="h-4 w-4" />
                    </SidebarItem>
                    <SidebarItem route=AppRoute::AdminDiplomas etiqueta="Diplomas">
                        <GraduationCap class="h-4 w-4" />
                    </SidebarItem>
                    <SidebarItem route=AppRoute::AdminForos etiqueta="Foros">
                        <MessagesSquare class="h-4 w-4" />
                    </SidebarItem>
                </Show>
            </ul>
        </aside>
    }
}
