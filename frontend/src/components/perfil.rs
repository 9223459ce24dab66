//! 个人资料页面：查看与更新

use congresotec_shared::date::formatea_fecha;
use congresotec_shared::protocol::ActualizarPerfilRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::icons::UserRound;
use super::navbar::Navbar;
use super::sidebar::Sidebar;
use crate::api::client::use_api;
use crate::api::usuarios;
use crate::auth::{update_profile, use_auth};

#[component]
pub fn PerfilPage() -> impl IntoView {
    let auth_ctx = use_auth();
    let api = use_api();

    let usuario_actual = move || auth_ctx.state.get().usuario;

    // 表单以当前用户预填；保存后上下文持有服务器的权威记录
    let inicial = auth_ctx.state.get_untracked().usuario;
    let (nombre, set_nombre) = signal(inicial.as_ref().map(|u| u.nombre.clone()).unwrap_or_default());
    let (telefono, set_telefono) = signal(
        inicial
            .as_ref()
            .and_then(|u| u.telefono.clone())
            .unwrap_or_default(),
    );
    let (institucion, set_institucion) = signal(
        inicial
            .as_ref()
            .and_then(|u| u.institucion.clone())
            .unwrap_or_default(),
    );
    let (password, set_password) = signal(String::new());

    let (is_submitting, set_is_submitting) = signal(false);
    let (mensaje, set_mensaje) = signal(Option::<(String, bool)>::None);

    // 进入页面时向服务器重新查询资料，表单以最新记录预填
    Effect::new({
        let api = api.clone();
        move |_| {
            let api = api.clone();
            spawn_local(async move {
                if let Ok(usuario) = usuarios::perfil(&api).await {
                    set_nombre.set(usuario.nombre);
                    set_telefono.set(usuario.telefono.unwrap_or_default());
                    set_institucion.set(usuario.institucion.unwrap_or_default());
                }
            });
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if nombre.get().trim().is_empty() {
            set_mensaje.set(Some(("El nombre no puede quedar vacío".to_string(), true)));
            return;
        }

        set_is_submitting.set(true);
        set_mensaje.set(None);

        let api = api.clone();
        spawn_local(async move {
            let opcional = |valor: String| {
                let valor = valor.trim().to_string();
                if valor.is_empty() { None } else { Some(valor) }
            };
            let cambios = ActualizarPerfilRequest {
                nombre: Some(nombre.get_untracked().trim().to_string()),
                telefono: opcional(telefono.get_untracked()),
                institucion: opcional(institucion.get_untracked()),
                password: opcional(password.get_untracked()),
            };
            match update_profile(&auth_ctx, &api, cambios).await {
                Ok(()) => {
                    set_password.set(String::new());
                    set_mensaje.set(Some(("Perfil actualizado".to_string(), false)));
                }
                Err(texto) => set_mensaje.set(Some((texto, true))),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <Navbar />
            <div class="flex">
                <Sidebar />
                <main class="flex-1 p-4 md:p-8">
                    <div class="max-w-2xl space-y-6">
                        <div class="flex items-center gap-3">
                            <UserRound class="h-7 w-7 text-primary" />
                            <h1 class="text-2xl font-bold">"Mi perfil"</h1>
                        </div>

                        <div class="card bg-base-100 shadow">
                            <div class="card-body text-sm space-y-1">
                                {move || usuario_actual().map(|u| view! {
                                    <p>
                                        <span class="font-semibold">"Correo: "</span>
                                        {u.email.clone()}
                                    </p>
                                    <p>
                                        <span class="font-semibold">"Rol: "</span>
                                        <span class="badge badge-outline">{u.rol.clone()}</span>
                                    </p>
                                    <p>
                                        <span class="font-semibold">"Registrado: "</span>
                                        {formatea_fecha(&u.fecha_registro)}
                                    </p>
                                })}
                            </div>
                        </div>

                        <div class="card bg-base-100 shadow">
                            <form class="card-body" on:submit=on_submit>
                                <h2 class="card-title text-lg">"Actualizar datos"</h2>

                                <Show when=move || mensaje.get().is_some()>
                                    <div
                                        role="alert"
                                        class=move || {
                                            let (_, es_error) = mensaje.get().unwrap_or_default();
                                            if es_error {
                                                "alert alert-error text-sm py-2"
                                            } else {
                                                "alert alert-success text-sm py-2"
                                            }
                                        }
                                    >
                                        <span>{move || mensaje.get().unwrap_or_default().0}</span>
                                    </div>
                                </Show>

                                <div class="form-control">
                                    <label class="label" for="nombre">
                                        <span class="label-text">"Nombre"</span>
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
                                <div class="grid grid-cols-2 gap-2">
                                    <div class="form-control">
                                        <label class="label" for="telefono">
                                            <span class="label-text">"Teléfono"</span>
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
                                            <span class="label-text">"Institución"</span>
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
                                <div class="form-control">
                                    <label class="label" for="password">
                                        <span class="label-text">"Nueva contraseña (opcional)"</span>
                                    </label>
                                    <input
                                        id="password"
                                        type="password"
                                        placeholder="Dejar en blanco para conservarla"
                                        on:input=move |ev| set_password.set(event_target_value(&ev))
                                        prop:value=password
                                        class="input input-bordered"
                                    />
                                </div>
                                <div class="card-actions justify-end mt-4">
                                    <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                        {move || if is_submitting.get() {
                                            view! { <span class="loading loading-spinner"></span> "Guardando..." }.into_any()
                                        } else {
                                            "Guardar cambios".into_any()
                                        }}
                                    </button>
                                </div>
                            </form>
                        </div>
                    </div>
                </main>
            </div>
        </div>
    }
}
