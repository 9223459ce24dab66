//! 论坛管理面板
//!
//! 列表（发布状态过滤）、创建/编辑、发布/取消发布、删除。
//! 表单在创建与编辑之间复用，编辑时预填所选论坛。

use chrono::{DateTime, NaiveDateTime, Utc};
use congresotec_shared::Foro;
use congresotec_shared::date::fecha_o_pendiente;
use congresotec_shared::protocol::{ActualizarForoRequest, CrearForoRequest};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::icons::{MessagesSquare, Plus};
use super::navbar::Navbar;
use super::sidebar::Sidebar;
use crate::api::client::use_api;
use crate::api::foros;

/// `datetime-local` 输入解析为 UTC（输入按本地时区语义直接取值）
fn parsea_fecha(entrada: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(entrada, "%Y-%m-%dT%H:%M")
        .ok()
        .map(|naive| naive.and_utc())
}

#[derive(Clone, Copy, PartialEq, Eq, Default)]
enum FiltroForos {
    #[default]
    Todos,
    Publicados,
    Borradores,
}

#[component]
pub fn ForosPanel() -> impl IntoView {
    let api = use_api();

    let (lista, set_lista) = signal(Vec::<Foro>::new());
    let (cargando, set_cargando) = signal(true);
    let (notificacion, set_notificacion) = signal(Option::<(String, bool)>::None);
    let (filtro, set_filtro) = signal(FiltroForos::default());

    // --- 表单状态（None = 创建，Some(id) = 编辑）---
    let (editando, set_editando) = signal(Option::<u32>::None);
    let (mostrar_form, set_mostrar_form) = signal(false);
    let (titulo, set_titulo) = signal(String::new());
    let (ponente, set_ponente) = signal(String::new());
    let (descripcion, set_descripcion) = signal(String::new());
    let (fecha_texto, set_fecha_texto) = signal(String::new());
    let (guardando, set_guardando) = signal(false);

    let cargar = {
        let api = api.clone();
        move || {
            let api = api.clone();
            set_cargando.set(true);
            spawn_local(async move {
                match foros::listar(&api, None, None).await {
                    Ok(respuesta) => set_lista.set(respuesta.items),
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

    let limpiar_form = move || {
        set_editando.set(None);
        set_titulo.set(String::new());
        set_ponente.set(String::new());
        set_descripcion.set(String::new());
        set_fecha_texto.set(String::new());
    };

    let abrir_edicion = move |foro: Foro| {
        set_editando.set(Some(foro.id));
        set_titulo.set(foro.titulo);
        set_ponente.set(foro.ponente);
        set_descripcion.set(foro.descripcion.unwrap_or_default());
        set_fecha_texto.set(
            foro.fecha
                .map(|f| f.format("%Y-%m-%dT%H:%M").to_string())
                .unwrap_or_default(),
        );
        set_mostrar_form.set(true);
    };

    let alternar_publicacion = {
        let api = api.clone();
        let cargar = cargar.clone();
        move |foro: Foro| {
            let api = api.clone();
            let cargar = cargar.clone();
            spawn_local(async move {
                let operacion = if foro.publicado {
                    foros::despublicar(&api, foro.id).await.map(|_| ())
                } else {
                    foros::publicar(&api, foro.id).await.map(|_| ())
                };
                match operacion {
                    Ok(()) => {
                        let aviso = if foro.publicado {
                            "Foro retirado de publicación"
                        } else {
                            "Foro publicado"
                        };
                        set_notificacion.set(Some((aviso.to_string(), false)));
                        cargar();
                    }
                    Err(mensaje) => set_notificacion.set(Some((mensaje, true))),
                }
            });
        }
    };

    let eliminar = {
        let api = api.clone();
        let cargar = cargar.clone();
        move |id: u32| {
            let api = api.clone();
            let cargar = cargar.clone();
            spawn_local(async move {
                match foros::eliminar(&api, id).await {
                    Ok(()) => {
                        set_notificacion.set(Some(("Foro eliminado".to_string(), false)));
                        cargar();
                    }
                    Err(mensaje) => set_notificacion.set(Some((mensaje, true))),
                }
            });
        }
    };

    let on_guardar = {
        let api = api.clone();
        let cargar = cargar.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();
            if titulo.get_untracked().trim().is_empty()
                || ponente.get_untracked().trim().is_empty()
            {
                set_notificacion.set(Some(("Captura título y ponente".to_string(), true)));
                return;
            }

            set_guardando.set(true);
            let api = api.clone();
            let cargar = cargar.clone();
            spawn_local(async move {
                let opcional = |valor: String| {
                    let valor = valor.trim().to_string();
                    if valor.is_empty() { None } else { Some(valor) }
                };
                let fecha = parsea_fecha(fecha_texto.get_untracked().trim());

                let resultado = match editando.get_untracked() {
                    None => {
                        foros::crear(
                            &api,
                            CrearForoRequest {
                                titulo: titulo.get_untracked().trim().to_string(),
                                descripcion: opcional(descripcion.get_untracked()),
                                ponente: ponente.get_untracked().trim().to_string(),
                                fecha,
                            },
                        )
                        .await
                        .map(|_| "Foro creado")
                    }
                    Some(id) => {
                        foros::actualizar(
                            &api,
                            ActualizarForoRequest {
                                id,
                                titulo: titulo.get_untracked().trim().to_string(),
                                descripcion: opcional(descripcion.get_untracked()),
                                ponente: ponente.get_untracked().trim().to_string(),
                                fecha,
                            },
                        )
                        .await
                        .map(|_| "Foro actualizado")
                    }
                };

                match resultado {
                    Ok(aviso) => {
                        set_notificacion.set(Some((aviso.to_string(), false)));
                        set_mostrar_form.set(false);
                        limpiar_form();
                        cargar();
                    }
                    Err(mensaje) => set_notificacion.set(Some((mensaje, true))),
                }
                set_guardando.set(false);
            });
        }
    };

    let visibles = move || {
        let filtro = filtro.get();
        lista
            .get()
            .into_iter()
            .filter(|f| match filtro {
                FiltroForos::Todos => true,
                FiltroForos::Publicados => f.publicado,
                FiltroForos::Borradores => !f.publicado,
            })
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
                            <MessagesSquare class="h-7 w-7 text-primary" />
                            <h1 class="text-2xl font-bold">"Foros"</h1>
                        </div>
                        <button
                            class="btn btn-primary btn-sm gap-1"
                            on:click=move |_| {
                                limpiar_form();
                                set_mostrar_form.update(|v| *v = !*v);
                            }
                        >
                            <Plus class="h-4 w-4" />
                            "Nuevo foro"
                        </button>
                    </div>

                    <Show when=move || mostrar_form.get()>
                        <div class="card bg-base-100 shadow">
                            <form class="card-body" on:submit=on_guardar.clone()>
                                <h2 class="card-title text-lg">
                                    {move || if editando.get().is_some() {
                                        "Editar foro"
                                    } else {
                                        "Crear foro"
                                    }}
                                </h2>
                                <div class="grid md:grid-cols-2 gap-2">
                                    <div class="form-control">
                                        <label class="label" for="titulo">
                                            <span class="label-text">"Título"</span>
                                        </label>
                                        <input
                                            id="titulo"
                                            type="text"
                                            on:input=move |ev| set_titulo.set(event_target_value(&ev))
                                            prop:value=titulo
                                            class="input input-bordered"
                                            required
                                        />
                                    </div>
                                    <div class="form-control">
                                        <label class="label" for="ponente">
                                            <span class="label-text">"Ponente"</span>
                                        </label>
                                        <input
                                            id="ponente"
                                            type="text"
                                            on:input=move |ev| set_ponente.set(event_target_value(&ev))
                                            prop:value=ponente
                                            class="input input-bordered"
                                            required
                                        />
                                    </div>
                                </div>
                                <div class="form-control">
                                    <label class="label" for="descripcion">
                                        <span class="label-text">"Descripción (opcional)"</span>
                                    </label>
                                    <textarea
                                        id="descripcion"
                                        class="textarea textarea-bordered"
                                        rows="2"
                                        prop:value=descripcion
                                        on:input=move |ev| set_descripcion.set(event_target_value(&ev))
                                    ></textarea>
                                </div>
                                <div class="form-control">
                                    <label class="label" for="fecha">
                                        <span class="label-text">"Fecha y hora (opcional)"</span>
                                    </label>
                                    <input
                                        id="fecha"
                                        type="datetime-local"
                                        on:input=move |ev| set_fecha_texto.set(event_target_value(&ev))
                                        prop:value=fecha_texto
                                        class="input input-bordered"
                                    />
                                </div>
                                <div class="card-actions justify-end mt-2">
                                    <button
                                        type="button"
                                        class="btn btn-ghost"
                                        on:click=move |_| {
                                            set_mostrar_form.set(false);
                                            limpiar_form();
                                        }
                                    >
                                        "Cancelar"
                                    </button>
                                    <button class="btn btn-primary" disabled=move || guardando.get()>
                                        {move || if guardando.get() {
                                            view! { <span class="loading loading-spinner"></span> "Guardando..." }.into_any()
                                        } else {
                                            "Guardar".into_any()
                                        }}
                                    </button>
                                </div>
                            </form>
                        </div>
                    </Show>

                    <div class="flex justify-end">
                        <div class="join">
                            {[
                                ("Todos", FiltroForos::Todos),
                                ("Publicados", FiltroForos::Publicados),
                                ("Borradores", FiltroForos::Borradores),
                            ]
                                .into_iter()
                                .map(|(etiqueta, valor)| view! {
                                    <button
                                        class=move || {
                                            if filtro.get() == valor {
                                                "join-item btn btn-sm btn-active"
                                            } else {
                                                "join-item btn btn-sm"
                                            }
                                        }
                                        on:click=move |_| set_filtro.set(valor)
                                    >
                                        {etiqueta}
                                    </button>
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <Show
                        when=move || !cargando.get()
                        fallback=|| view! {
                            <div class="flex justify-center py-12">
                                <span class="loading loading-spinner loading-lg text-primary"></span>
                            </div>
                        }
                    >
                        <div class="grid md:grid-cols-2 gap-4">
                            {let alternar_publicacion = alternar_publicacion.clone();
                             let eliminar = eliminar.clone();
                             move || {
                                visibles()
                                    .into_iter()
                                    .map(|foro| {
                                        let id = foro.id;
                                        let publicado = foro.publicado;
                                        let alternar = alternar_publicacion.clone();
                                        let eliminar = eliminar.clone();
                                        let editar = abrir_edicion;
                                        let para_alternar = foro.clone();
                                        let para_editar = foro.clone();
                                        view! {
                                            <div class="card bg-base-100 shadow">
                                                <div class="card-body">
                                                    <div class="flex items-start justify-between">
                                                        <h2 class="card-title text-lg">{foro.titulo.clone()}</h2>
                                                        {if publicado {
                                                            view! { <span class="badge badge-success">"Publicado"</span> }.into_any()
                                                        } else {
                                                            view! { <span class="badge badge-ghost">"Borrador"</span> }.into_any()
                                                        }}
                                                    </div>
                                                    <p class="text-sm text-base-content/70">
                                                        {foro.descripcion.clone().unwrap_or_default()}
                                                    </p>
                                                    <p class="text-sm">
                                                        <span class="font-semibold">"Ponente: "</span>
                                                        {foro.ponente.clone()}
                                                    </p>
                                                    <p class="text-sm">
                                                        <span class="font-semibold">"Fecha: "</span>
                                                        {fecha_o_pendiente(foro.fecha.as_ref())}
                                                    </p>
                                                    <div class="card-actions justify-end mt-2">
                                                        <button
                                                            class="btn btn-ghost btn-xs"
                                                            on:click=move |_| editar(para_editar.clone())
                                                        >
                                                            "Editar"
                                                        </button>
                                                        <button
                                                            class="btn btn-outline btn-xs"
                                                            on:click=move |_| alternar(para_alternar.clone())
                                                        >
                                                            {if publicado { "Despublicar" } else { "Publicar" }}
                                                        </button>
                                                        <button
                                                            class="btn btn-ghost btn-xs text-error"
                                                            on:click=move |_| eliminar(id)
                                                        >
                                                            "Eliminar"
                                                        </button>
                                                    </div>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </Show>
                </main>
            </div>
        </div>
    }
}
