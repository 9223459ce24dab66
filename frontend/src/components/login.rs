//! 登录页面

use congresotec_shared::protocol::LoginRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::icons::GraduationCap;
use crate::api::client::use_api;
use crate::auth::{login, use_auth};
use crate::web::use_navigate;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth_ctx = use_auth();
    let api = use_api();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if email.get().is_empty() || password.get().is_empty() {
            set_error_msg.set(Some("Ingresa tu correo y contraseña".to_string()));
            return;
        }

        // 提交期间禁用按钮，防止快速重复提交
        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = api.clone();
        spawn_local(async move {
            let credenciales = LoginRequest {
                email: email.get_untracked(),
                password: password.get_untracked(),
            };
            // 登录成功后由路由服务自动跳转（回到原目标或面板）
            if let Err(mensaje) = login(&auth_ctx, &api, credenciales).await {
                set_error_msg.set(Some(mensaje));
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <div class="flex flex-col items-center gap-2">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <GraduationCap class="h-8 w-8" />
                        </div>
                        <h1 class="text-3xl font-bold">"CongresoTec"</h1>
                        <p class="text-base-content/70">
                            "Inicia sesión para acceder al portal del congreso"
                        </p>
                    </div>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Correo electrónico"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="tu@correo.mx"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">"Contraseña"</span>
                            </label>
                            <input
                                id="password"
                                type="password"
                                placeholder="••••••••"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Entrando..." }.into_any()
                                } else {
                                    "Iniciar sesión".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-center text-sm mt-2">
                            "¿Aún no tienes cuenta? "
                            <a
                                class="link link-primary"
                                on:click={
                                    let navigate = navigate.clone();
                                    move |_| navigate("/registro")
                                }
                            >
                                "Regístrate"
                            </a>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
