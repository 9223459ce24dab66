//! 注册页面

use congresotec_shared::protocol::RegisterRequest;
use congresotec_shared::{ROL_ASISTENTE, ROL_PONENTE, Rol};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::client::use_api;
use crate::api::roles;
use crate::auth::{register, use_auth};
use crate::web::use_navigate;

/// 角色目录不可用时的默认选项（注册绝不开放管理员角色）
fn roles_por_defecto() -> Vec<Rol> {
    vec![
        Rol {
            id: 0,
            nombre: ROL_ASISTENTE.to_string(),
        },
        Rol {
            id: 0,
            nombre: ROL_PONENTE.to_string(),
        },
    ]
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth_ctx = use_auth();
    let api = use_api();
    let navigate = use_navigate();

    let (nombre, set_nombre) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (rol, set_rol) = signal(ROL_ASISTENTE.to_string());
    let (telefono, set_telefono) = signal(String::new());
    let (institucion, set_institucion) = signal(String::new());

    let (catalogo_roles, set_catalogo_roles) = signal(roles_por_defecto());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    // 加载角色目录；失败时保留默认选项
    Effect::new({
        let api = api.clone();
        move |_| {
            let api = api.clone();
            spawn_local(async move {
                if let Ok(lista) = roles::listar(&api).await {
                    if !lista.is_empty() {
                        set_catalogo_roles.set(lista);
                    }
                }
            });
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if nombre.get().trim().is_empty()
            || email.get().trim().is_empty()
            || password.get().is_empty()
        {
            set_error_msg.set(Some("Completa los campos obligatorios".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        let api = api.clone();
        spawn_local(async move {
            let opcional = |valor: String| {
                let valor = valor.trim().to_string();
                if valor.is_empty() { None } else { Some(valor) }
            };
            let datos = RegisterRequest {
                nombre: nombre.get_untracked().trim().to_string(),
                email: email.get_untracked().trim().to_string(),
                password: password.get_untracked(),
                rol: rol.get_untracked(),
                telefono: opcional(telefono.get_untracked()),
                institucion: opcional(institucion.get_untracked()),
            };
            // 注册成功即登录，路由服务自动跳转到面板
            if let Err(mensaje) = register(&auth_ctx, &api, datos).await {
                set_error_msg.set(Some(mensaje));
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-lg">
                <div class="text-center mb-2">
                    <h1 class="text-3xl font-bold">"Crea tu cuenta"</h1>
                    <p class="text-base-content/70 mt-1">
                        "Regístrate para participar en el congreso"
                    </p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="form-control">
                            <label class="label" for="nombre">
                                <span class="label-text">"Nombre completo"</span>
                            </label>
                            <input
                                id="nombre"
                                type="text"
                                on:input=move |ev| set_nombre.set(event_target_value(&ev))
                                prop:value=nombre
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">"Correo electrónico"</span>
                            </label>
                            <input
                                id="email"
                                type="email"
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
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="rol">
                                <span class="label-text">"Participo como"</span>
                            </label>
                            <select
                                id="rol"
                                class="select select-bordered"
                                on:change=move |ev| set_rol.set(event_target_value(&ev))
                            >
                                {move || {
                                    catalogo_roles
                                        .get()
                                        .into_iter()
                                        .map(|r| {
                                            let seleccionado = r.nombre == rol.get_untracked();
                                            view! {
                                                <option value=r.nombre.clone() selected=seleccionado>
                                                    {r.nombre.clone()}
                                                </option>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </select>
                        </div>
                        <div class="grid grid-cols-2 gap-2">
                            <div class="form-control">
                                <label class="label" for="telefono">
                                    <span class="label-text">"Teléfono (opcional)"</span>
                                </label>
                                <input
                                    id="telefono"
                                    type="tel"
                                    on:input=move |ev| set_telefono.set(event_target_value(&ev))
                                    prop:value=telefono
                                    class="input input-bordered"
                                />
                            </div>
                            <div class="form-control">
                                <label class="label" for="institucion">
                                    <span class="label-text">"Institución (opcional)"</span>
                                </label>
                                <input
                                    id="institucion"
                                    type="text"
                                    on:input=move |ev| set_institucion.set(event_target_value(&ev))
                                    prop:value=institucion
                                    class="input input-bordered"
                                />
                            </div>
                        </div>
                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> "Registrando..." }.into_any()
                                } else {
                                    "Crear cuenta".into_any()
                                }}
                            </button>
                        </div>
                        <p class="text-center text-sm mt-2">
                            "¿Ya tienes cuenta? "
                            <a
                                class="link link-primary"
                                on:click={
                                    let navigate = navigate.clone();
                                    move |_| navigate("/login")
                                }
                            >
                                "Inicia sesión"
                            </a>
                        </p>
                    </form>
                </div>
            </div>
        </div>
    }
}
