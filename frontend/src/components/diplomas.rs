//! 证书管理面板
//!
//! 统计块、列表（本地类型过滤）、生成与删除。变更后重新拉取。

use congresotec_shared::date::fecha_o_pendiente;
use congresotec_shared::protocol::GenerarDiplomaRequest;
use congresotec_shared::{Diploma, DiplomaEstadisticas};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::icons::{GraduationCap, Plus};
use super::navbar::Navbar;
use super::sidebar::Sidebar;
use crate::api::client::use_api;
use crate::api::diplomas;

const TIPOS: [&str; 3] = ["participacion", "ponencia", "premiacion"];

fn etiqueta_tipo(tipo: &str) -> &'static str {
    match tipo {
        "participacion" => "Participación",
        "ponencia" => "Ponencia",
        "premiacion" => "Premiación",
        _ => "Otro",
    }
}

#[component]
pub fn DiplomasPanel() -> impl IntoView {
    let api = use_api();

    let (lista, set_lista) = signal(Vec::<Diploma>::new());
    let (stats, set_stats) = signal(Option::<DiplomaEstadisticas>::None);
    let (cargando, set_cargando) = signal(true);
    let (notificacion, set_notificacion) = signal(Option::<(String, bool)>::None);
    // 本地过滤（只影响渲染，不重新请求）
    let (filtro_tipo, set_filtro_tipo) = signal(String::new());

    // --- 生成表单状态 ---
    let (mostrar_form, set_mostrar_form) = signal(false);
    let (usuario_id, set_usuario_id) = signal(String::new());
    let (taller_id, set_taller_id) = signal(String::new());
    let (tipo, set_tipo) = signal(TIPOS[0].to_string());
    let (guardando, set_guardando) = signal(false);

    let cargar = {
        let api = api.clone();
        move || {
            let api = api.clone();
            set_cargando.set(true);
            spawn_local(async move {
                match diplomas::listar(&api, None, None).await {
                    Ok(respuesta) => set_lista.set(respuesta.items),
                    Err(mensaje) => set_notificacion.set(Some((mensaje, true))),
                }
                match diplomas::estadisticas(&api).await {
                    Ok(datos) => set_stats.set(Some(datos)),
                    Err(mensaje) => set_notificacion.set(Some((mensaje, true))),
                }
                set_cargando.set(false);
            });
        }
    };

    // 初始加载
    Effect::new({
        let cargar = cargar.clone();
        move |_| {
            cargar();
        }
    });

    // 3 秒后清除通知
    Effect::new(move |_| {
        if notificacion.get().is_some() {
            set_timeout(
                move || set_notificacion.set(None),
                std::time::Duration::from_secs(3),
            );
        }
    });

    let eliminar = {
        let api = api.clone();
        let cargar = cargar.clone();
        move |id: u32| {
            let api = api.clone();
            let cargar = cargar.clone();
            spawn_local(async move {
                match diplomas::eliminar(&api, id).await {
                    Ok(()) => {
                        set_notificacion.set(Some(("Diploma eliminado".to_string(), false)));
                        cargar();
                    }
                    Err(mensaje) => set_notificacion.set(Some((mensaje, true))),
                }
            });
        }
    };

    let on_generar = {
        let api = api.clone();
        let cargar = cargar.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();

            let usuario_id = match usuario_id.get_untracked().trim().parse::<u32>() {
                Ok(id) => id,
                Err(_) => {
                    set_notificacion
                        .set(Some(("Captura el identificador del usuario".to_string(), true)));
                    return;
                }
            };
            let taller_id = taller_id.get_untracked().trim().parse::<u32>().ok();

            set_guardando.set(true);
            let api = api.clone();
            let cargar = cargar.clone();
            spawn_local(async move {
                let datos = GenerarDiplomaRequest {
                    usuario_id,
                    taller_id,
                    tipo: tipo.get_untracked(),
                };
                match diplomas::generar(&api, datos).await {
                    Ok(_) => {
                        set_notificacion.set(Some(("Diploma generado".to_string(), false)));
                        set_mostrar_form.set(false);
                        set_usuario_id.set(String::new());
                        set_taller_id.set(String::new());
                        cargar();
                    }
                    Err(mensaje) => set_notificacion.set(Some((mensaje, true))),
                }
                set_guardando.set(false);
            });
        }
    };

    let visibles = move || {
        let filtro = filtro_tipo.get();
        lista
            .get()
            .into_iter()
            .filter(|d| filtro.is_empty() || d.tipo == filtro)
            .collect::<Vec<_>>()
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <Navbar />
            <div class="flex">
                <Sidebar />
                <main class="flex-1 p-4 md:p-8 space-y-6">
                    <Show when=move || notificacion.get().is_some()>
                        <div class="toast toast-top toast-end z-50">
                            <div class=move || {
                                let (_, es_error) = notificacion.get().unwrap_or_default();
                                if es_error {
                                    "alert alert-error shadow-lg"
                                } else {
                                    "alert alert-success shadow-lg"
                                }
                            }>
                                <span>{move || notificacion.get().unwrap_or_default().0}</span>
                            </div>
                        </div>
                    </Show>

                    <div class="flex items-center justify-between">
                        <div class="flex items-center gap-3">
                            <GraduationCap class="h-7 w-7 text-primary" />
                            <h1 class="text-2xl font-bold">"Diplomas"</h1>
                        </div>
                        <button
                            class="btn btn-primary btn-sm gap-1"
                            on:click=move |_| set_mostrar_form.update(|v| *v = !*v)
                        >
                            <Plus class="h-4 w-4" />
                            "Generar diploma"
                        </button>
                    </div>

                    {move || stats.get().map(|s| view! {
                        <div class="stats shadow bg-base-100 w-full">
                            <div class="stat">
                                <div class="stat-title">"Total"</div>
                                <div class="stat-value text-primary">{s.total}</div>
                            </div>
                            <div class="stat">
                                <div class="stat-title">"Emitidos"</div>
                                <div class="stat-value text-success">{s.emitidos}</div>
                            </div>
                            <div class="stat">
                                <div class="stat-title">"Pendientes"</div>
                                <div class="stat-value">{s.pendientes}</div>
                            </div>
                        </div>
                    })}

                    <Show when=move || mostrar_form.get()>
                        <div class="card bg-base-100 shadow">
                            <form class="card-body" on:submit=on_generar.clone()>
                                <h2 class="card-title text-lg">"Generar diploma"</h2>
                                <div class="grid md:grid-cols-3 gap-2">
                                    <div class="form-control">
                                        <label class="label" for="usuario-id">
                                            <span class="label-text">"Id del usuario"</span>
                                        </label>
                                        <input
                                            id="usuario-id"
                                            type="number"
                                            min="1"
                                            on:input=move |ev| set_usuario_id.set(event_target_value(&ev))
                                            prop:value=usuario_id
                                            class="input input-bordered"
                                            required
                                        />
                                    </div>
                                    <div class="form-control">
                                        <label class="label" for="taller-id">
                                            <span class="label-text">"Id del taller (opcional)"</span>
                                        </label>
                                        <input
                                            id="taller-id"
                                            type="number"
                                            min="1"
                                            on:input=move |ev| set_taller_id.set(event_target_value(&ev))
                                            prop:value=taller_id
                                            class="input input-bordered"
                                        />
                                    </div>
                                    <div class="form-control">
                                        <label class="label" for="tipo">
                                            <span class="label-text">"Tipo"</span>
                                        </label>
                                        <select
                                            id="tipo"
                                            class="select select-bordered"
                                            on:change=move |ev| set_tipo.set(event_target_value(&ev))
                                        >
                                            {TIPOS
                                                .into_iter()
                                                .map(|t| view! {
                                                    <option value=t>{etiqueta_tipo(t)}</option>
                                                })
                                                .collect_view()}
                                        </select>
                                    </div>
                                </div>
                                <div class="card-actions justify-end mt-2">
                                    <button
                                        type="button"
                                        class="btn btn-ghost"
                                        on:click=move |_| set_mostrar_form.set(false)
                                    >
                                        "Cancelar"
                                    </button>
                                    <button class="btn btn-primary" disabled=move || guardando.get()>
                                        {move || if guardando.get() {
                                            view! { <span class="loading loading-spinner"></span> "Generando..." }.into_any()
                                        } else {
                                            "Generar".into_any()
                                        }}
                                    </button>
                                </div>
                            </form>
                        </div>
                    </Show>

                    <div class="flex justify-end">
                        <select
                            class="select select-bordered select-sm w-52"
                            on:change=move |ev| set_filtro_tipo.set(event_target_value(&ev))
                        >
                            <option value="">"Todos los tipos"</option>
                            {TIPOS
                                .into_iter()
                                .map(|t| view! { <option value=t>{etiqueta_tipo(t)}</option> })
                                .collect_view()}
                        </select>
                    </div>

                    <Show
                        when=move || !cargando.get()
                        fallback=|| view! {
                            <div class="flex justify-center py-12">
                                <span class="loading loading-spinner loading-lg text-primary"></span>
                            </div>
                        }
                    >
                        <div class="card bg-base-100 shadow">
                            <div class="card-body p-0">
                                <table class="table">
                                    <thead>
                                        <tr>
                                            <th>"Usuario"</th>
                                            <th>"Taller"</th>
                                            <th>"Tipo"</th>
                                            <th>"Estado"</th>
                                            <th>"Emitido el"</th>
                                            <th class="text-right">"Acciones"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {let eliminar = eliminar.clone();
                                         move || {
                                            visibles()
                                                .into_iter()
                                                .map(|diploma| {
                                                    let id = diploma.id;
                                                    let eliminar = eliminar.clone();
                                                    let emitido = diploma.emitido;
                                                    let fecha = fecha_o_pendiente(diploma.fecha_emision.as_ref());
                                                    view! {
                                                        <tr class="hover">
                                                            <td class="font-medium">{diploma.usuario.clone()}</td>
                                                            <td>{diploma.taller.clone().unwrap_or_else(|| "—".to_string())}</td>
                                                            <td>{etiqueta_tipo(&diploma.tipo)}</td>
                                                            <td>
                                                                {if emitido {
                                                                    view! { <span class="badge badge-success">"Emitido"</span> }.into_any()
                                                                } else {
                                                                    view! { <span class="badge badge-ghost">"Pendiente"</span> }.into_any()
                                                                }}
                                                            </td>
                                                            <td class="text-sm text-base-content/70">{fecha}</td>
                                                            <td>
                                                                <div class="flex justify-end">
                                                                    <button
                                                                        class="btn btn-ghost btn-xs text-error"
                                                                        on:click=move |_| eliminar(id)
                                                                    >
                                                                        "Eliminar"
                                                                    </button>
                                                                </div>
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect_view()
                                        }}
                                    </tbody>
                                </table>
                            </div>
                        </div>
                    </Show>
                </main>
            </div>
        </div>
    }
}
