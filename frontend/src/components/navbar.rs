//! 顶部导航栏

use leptos::prelude::*;

use super::icons::{GraduationCap, LogOut};
use crate::api::client::use_api;
use crate::auth::{logout, use_auth};
use crate::web::use_navigate;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth_ctx = use_auth();
    let api = use_api();
    let navigate = use_navigate();

    let nombre = move || {
        auth_ctx
            .state
            .get()
            .usuario
            .map(|u| u.nombre)
            .unwrap_or_default()
    };
    let autenticado = move || auth_ctx.state.get().is_authenticated;

    // 注销后无需手动导航：路由服务监听会话信号并自动重定向
    let on_logout = move |_| {
        logout(&auth_ctx, &api);
    };

    view! {
        <div class="navbar bg-base-100 shadow-md px-4">
            <div class="flex-1 gap-2">
                <GraduationCap class="h-7 w-7 text-primary" />
                <a
                    class="btn btn-ghost text-xl normal-case"
                    on:click={
                        let navigate = navigate.clone();
                        move |_| navigate("/")
                    }
                >
                    "CongresoTec"
                </a>
            </div>
            <div class="flex-none gap-2">
                <Show
                    when=autenticado
                    fallback={
                        let navigate = navigate.clone();
                        move || {
                            let navigate = navigate.clone();
                            view! {
                                <button
                                    class="btn btn-primary btn-sm"
                                    on:click=move |_| navigate("/login")
                                >
                                    "Iniciar sesión"
                                </button>
                            }
                        }
                    }
                >
                    <span class="text-sm text-base-content/70">{nombre}</span>
                    <button class="btn btn-ghost btn-sm gap-1" on:click=on_logout.clone()>
                        <LogOut class="h-4 w-4" />
                        "Salir"
                    </button>
                </Show>
            </div>
        </div>
    }
}
