//! 结果管理面板
//!
//! 列表（分页）、创建、发布/取消发布、通知获奖者、删除、统计条。
//! 每次变更后都重新拉取列表与统计，不做乐观更新。

use congresotec_shared::date::fecha_o_pendiente;
use congresotec_shared::protocol::{ActualizarResultadoRequest, CrearResultadoRequest, Paginacion};
use congresotec_shared::{Concurso, Ganador, MencionHonorifica, Resultado, ResultadoEstadisticas};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::icons::{ChevronDown, Megaphone, Plus, Trophy};
use super::navbar::Navbar;
use super::sidebar::Sidebar;
use crate::api::client::use_api;
use crate::api::{concursos, resultados};

const LIMITE_POR_PAGINA: u32 = 10;

/// 解析补充提及的文本区：一行一条，"participante | proyecto"
fn parsea_menciones(texto: &str) -> Option<Vec<MencionHonorifica>> {
    let menciones: Vec<MencionHonorifica> = texto
        .lines()
        .filter_map(|linea| {
            let linea = linea.trim();
            if linea.is_empty() {
                return None;
            }
            let (participante, proyecto) = match linea.split_once('|') {
                Some((p, y)) => (p.trim().to_string(), y.trim().to_string()),
                None => (linea.to_string(), String::new()),
            };
            Some(MencionHonorifica {
                participante,
                proyecto,
            })
        })
        .collect();
    if menciones.is_empty() { None } else { Some(menciones) }
}

/// 编辑时把已有提及还原为文本区内容
fn menciones_a_texto(menciones: Option<&[MencionHonorifica]>) -> String {
    menciones
        .unwrap_or_default()
        .iter()
        .map(|m| format!("{} | {}", m.participante, m.proyecto))
        .collect::<Vec<_>>()
        .join("\n")
}

#[component]
pub fn ResultadosPanel() -> impl IntoView {
    let api = use_api();

    let (lista, set_lista) = signal(Vec::<Resultado>::new());
    let (paginacion, set_paginacion) = signal(Option::<Paginacion>::None);
    let (pagina, set_pagina) = signal(1u32);
    let (stats, set_stats) = signal(Option::<ResultadoEstadisticas>::None);
    let (cargando, set_cargando) = signal(true);
    let (notificacion, set_notificacion) = signal(Option::<(String, bool)>::None);
    // 展开的结果行；其详情总是重新向服务器查询
    let (expandido, set_expandido) = signal(Option::<u32>::None);
    let (detalle, set_detalle) = signal(Option::<Resultado>::None);

    // --- 表单状态（None = crear，Some(id) = editar）---
    let (editando, set_editando) = signal(Option::<u32>::None);
    let (mostrar_form, set_mostrar_form) = signal(false);
    let (catalogo_concursos, set_catalogo_concursos) = signal(Vec::<Concurso>::new());
    let (concurso_sel, set_concurso_sel) = signal(String::new());
    let (descripcion, set_descripcion) = signal(String::new());
    let (primer_lugar, set_primer_lugar) = signal((String::new(), String::new()));
    let (segundo_lugar, set_segundo_lugar) = signal((String::new(), String::new()));
    let (tercer_lugar, set_tercer_lugar) = signal((String::new(), String::new()));
    let (menciones_texto, set_menciones_texto) = signal(String::new());
    let (guardando, set_guardando) = signal(false);

    let cargar = {
        let api = api.clone();
        move |nueva_pagina: u32| {
            let api = api.clone();
            set_cargando.set(true);
            set_pagina.set(nueva_pagina);
            spawn_local(async move {
                match resultados::listar(&api, Some(nueva_pagina), Some(LIMITE_POR_PAGINA)).await {
                    Ok(respuesta) => {
                        set_lista.set(respuesta.items);
                        set_paginacion.set(Some(respuesta.paginacion));
                    }
                    Err(mensaje) => set_notificacion.set(Some((mensaje, true))),
                }
                match resultados::estadisticas(&api).await {
                    Ok(datos) => set_stats.set(Some(datos)),
                    Err(mensaje) => set_notificacion.set(Some((mensaje, true))),
                }
                set_cargando.set(false);
            });
        }
    };

    // 初始加载：第一页 + 竞赛目录（创建表单的下拉选项）
    Effect::new({
        let cargar = cargar.clone();
        let api = api.clone();
        move |_| {
            cargar(1);
            let api = api.clone();
            spawn_local(async move {
                if let Ok(concs) = concursos::listar(&api).await {
                    set_catalogo_concursos.set(concs);
                }
            });
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

    let alternar_publicacion = {
        let api = api.clone();
        let cargar = cargar.clone();
        move |resultado: Resultado| {
            let api = api.clone();
            let cargar = cargar.clone();
            spawn_local(async move {
                let operacion = if resultado.publicado {
                    resultados::despublicar(&api, resultado.id).await.map(|_| ())
                } else {
                    resultados::publicar(&api, resultado.id).await.map(|_| ())
                };
                match operacion {
                    Ok(()) => {
                        let aviso = if resultado.publicado {
                            "Resultado retirado de publicación"
                        } else {
                            "Resultado publicado"
                        };
                        set_notificacion.set(Some((aviso.to_string(), false)));
                        cargar(pagina.get_untracked());
                    }
                    Err(mensaje) => set_notificacion.set(Some((mensaje, true))),
                }
            });
        }
    };

    let notificar = {
        let api = api.clone();
        move |id: u32| {
            let api = api.clone();
            spawn_local(async move {
                match resultados::notificar(&api, id).await {
                    Ok(()) => set_notificacion
                        .set(Some(("Notificaciones enviadas a los ganadores".to_string(), false))),
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
                match resultados::eliminar(&api, id).await {
                    Ok(()) => {
                        set_notificacion.set(Some(("Resultado eliminado".to_string(), false)));
                        cargar(pagina.get_untracked());
                    }
                    Err(mensaje) => set_notificacion.set(Some((mensaje, true))),
                }
            });
        }
    };

    // 展开/收起；展开时向服务器查询详情（列表不作为权威副本）
    let expandir = {
        let api = api.clone();
        move |id: u32| {
            if expandido.get_untracked() == Some(id) {
                set_expandido.set(None);
                set_detalle.set(None);
                return;
            }
            set_expandido.set(Some(id));
            set_detalle.set(None);
            let api = api.clone();
            spawn_local(async move {
                match resultados::obtener(&api, id).await {
                    Ok(resultado) => set_detalle.set(Some(resultado)),
                    Err(mensaje) => set_notificacion.set(Some((mensaje, true))),
                }
            });
        }
    };

    let limpiar_form = move || {
        set_editando.set(None);
        set_concurso_sel.set(String::new());
        set_descripcion.set(String::new());
        set_primer_lugar.set((String::new(), String::new()));
        set_segundo_lugar.set((String::new(), String::new()));
        set_tercer_lugar.set((String::new(), String::new()));
        set_menciones_texto.set(String::new());
    };

    let abrir_edicion = move |resultado: Resultado| {
        set_editando.set(Some(resultado.id));
        set_concurso_sel.set(resultado.concurso_id.to_string());
        set_descripcion.set(resultado.descripcion.unwrap_or_default());
        let fila = |lugar: u8| {
            resultado
                .ganadores
                .iter()
                .find(|g| g.lugar == lugar)
                .map(|g| (g.participante.clone(), g.proyecto.clone()))
                .unwrap_or_default()
        };
        set_primer_lugar.set(fila(1));
        set_segundo_lugar.set(fila(2));
        set_tercer_lugar.set(fila(3));
        set_menciones_texto.set(menciones_a_texto(resultado.menciones_honorificas.as_deref()));
        set_mostrar_form.set(true);
    };

    let on_guardar = {
        let api = api.clone();
        let cargar = cargar.clone();
        move |ev: leptos::web_sys::SubmitEvent| {
            ev.prevent_default();

            let mut ganadores = Vec::new();
            for (lugar, (participante, proyecto)) in [
                primer_lugar.get_untracked(),
                segundo_lugar.get_untracked(),
                tercer_lugar.get_untracked(),
            ]
            .into_iter()
            .enumerate()
            .map(|(i, fila)| (i as u8 + 1, fila))
            {
                if !participante.trim().is_empty() {
                    ganadores.push(Ganador {
                        lugar,
                        participante: participante.trim().to_string(),
                        proyecto: proyecto.trim().to_string(),
                    });
                }
            }
            if ganadores.is_empty() {
                set_notificacion.set(Some(("Captura al menos el primer lugar".to_string(), true)));
                return;
            }

            let descripcion = {
                let texto = descripcion.get_untracked().trim().to_string();
                if texto.is_empty() { None } else { Some(texto) }
            };
            let menciones_honorificas = parsea_menciones(&menciones_texto.get_untracked());

            // 创建时必须选定竞赛；编辑不改变所属竞赛
            let modo = editando.get_untracked();
            let concurso_id = match (modo, concurso_sel.get_untracked().parse::<u32>()) {
                (None, Err(_)) => {
                    set_notificacion.set(Some(("Selecciona un concurso".to_string(), true)));
                    return;
                }
                (_, parseado) => parseado.unwrap_or_default(),
            };

            set_guardando.set(true);
            let api = api.clone();
            let cargar = cargar.clone();
            spawn_local(async move {
                let resultado = match modo {
                    None => resultados::crear(
                        &api,
                        CrearResultadoRequest {
                            concurso_id,
                            descripcion,
                            ganadores,
                            menciones_honorificas,
                        },
                    )
                    .await
                    .map(|_| "Resultado registrado"),
                    Some(id) => resultados::actualizar(
                        &api,
                        ActualizarResultadoRequest {
                            id,
                            descripcion,
                            ganadores,
                            menciones_honorificas,
                        },
                    )
                    .await
                    .map(|_| "Resultado actualizado"),
                };
                match resultado {
                    Ok(aviso) => {
                        set_notificacion.set(Some((aviso.to_string(), false)));
                        set_mostrar_form.set(false);
                        limpiar_form();
                        cargar(pagina.get_untracked());
                    }
                    Err(mensaje) => set_notificacion.set(Some((mensaje, true))),
                }
                set_guardando.set(false);
            });
        }
    };

    let total_paginas = move || {
        paginacion
            .get()
            .map(|p| p.total_paginas.max(1))
            .unwrap_or(1)
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
                            <Trophy class="h-7 w-7 text-primary" />
                            <h1 class="text-2xl font-bold">"Resultados de concursos"</h1>
                        </div>
                        <button
                            class="btn btn-primary btn-sm gap-1"
                            on:click=move |_| {
                                limpiar_form();
                                set_mostrar_form.update(|v| *v = !*v);
                            }
                        >
                            <Plus class="h-4 w-4" />
                            "Nuevo resultado"
                        </button>
                    </div>

                    // 统计条
                    {move || stats.get().map(|s| view! {
                        <div class="stats shadow bg-base-100 w-full">
                            <div class="stat">
                                <div class="stat-title">"Total"</div>
                                <div class="stat-value text-primary">{s.total}</div>
                            </div>
                            <div class="stat">
                                <div class="stat-title">"Publicados"</div>
                                <div class="stat-value text-success">{s.publicados}</div>
                            </div>
                            <div class="stat">
                                <div class="stat-title">"Borradores"</div>
                                <div class="stat-value">{s.borradores}</div>
                            </div>
                            <div class="stat">
                                <div class="stat-title">"Ganadores"</div>
                                <div class="stat-value">{s.total_ganadores}</div>
                            </div>
                        </div>
                    })}

                    // 创建表单
                    <Show when=move || mostrar_form.get()>
                        <div class="card bg-base-100 shadow">
                            <form class="card-body" on:submit=on_guardar.clone()>
                                <h2 class="card-title text-lg">
                                    {move || if editando.get().is_some() {
                                        "Editar resultado"
                                    } else {
                                        "Registrar resultado"
                                    }}
                                </h2>
                                <div class="form-control">
                                    <label class="label" for="concurso">
                                        <span class="label-text">"Concurso"</span>
                                    </label>
                                    <select
                                        id="concurso"
                                        class="select select-bordered"
                                        disabled=move || editando.get().is_some()
                                        on:change=move |ev| set_concurso_sel.set(event_target_value(&ev))
                                    >
                                        <option value="" selected=move || concurso_sel.get().is_empty()>
                                            "Selecciona un concurso"
                                        </option>
                                        {move || {
                                            catalogo_concursos
                                                .get()
                                                .into_iter()
                                                .map(|c| view! {
                                                    <option value=c.id.to_string()>{c.nombre.clone()}</option>
                                                })
                                                .collect_view()
                                        }}
                                    </select>
                                </div>
                                <div class="form-control">
                                    <label class="label" for="descripcion">
                                        <span class="label-text">"Descripción (opcional)"</span>
                                    </label>
                                    <input
                                        id="descripcion"
                                        type="text"
                                        on:input=move |ev| set_descripcion.set(event_target_value(&ev))
                                        prop:value=descripcion
                                        class="input input-bordered"
                                    />
                                </div>

                                {[
                                    ("1er lugar", primer_lugar, set_primer_lugar),
                                    ("2do lugar", segundo_lugar, set_segundo_lugar),
                                    ("3er lugar", tercer_lugar, set_tercer_lugar),
                                ]
                                    .into_iter()
                                    .map(|(etiqueta, fila, set_fila)| view! {
                                        <div class="grid grid-cols-2 gap-2">
                                            <div class="form-control">
                                                <label class="label">
                                                    <span class="label-text">{etiqueta} " — participante"</span>
                                                </label>
                                                <input
                                                    type="text"
                                                    class="input input-bordered"
                                                    prop:value=move || fila.get().0
                                                    on:input=move |ev| set_fila.update(|f| f.0 = event_target_value(&ev))
                                                />
                                            </div>
                                            <div class="form-control">
                                                <label class="label">
                                                    <span class="label-text">"Proyecto"</span>
                                                </label>
                                                <input
                                                    type="text"
                                                    class="input input-bordered"
                                                    prop:value=move || fila.get().1
                                                    on:input=move |ev| set_fila.update(|f| f.1 = event_target_value(&ev))
                                                />
                                            </div>
                                        </div>
                                    })
                                    .collect_view()}

                                <div class="form-control">
                                    <label class="label" for="menciones">
                                        <span class="label-text">
                                            "Menciones honoríficas (una por línea: participante | proyecto)"
                                        </span>
                                    </label>
                                    <textarea
                                        id="menciones"
                                        class="textarea textarea-bordered"
                                        rows="3"
                                        prop:value=menciones_texto
                                        on:input=move |ev| set_menciones_texto.set(event_target_value(&ev))
                                    ></textarea>
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
                                            view! { <span class="loading loading-spinner"></span> "Guardando..." }.into_any()
                                        } else {
                                            "Guardar".into_any()
                                        }}
                                    </button>
                                </div>
                            </form>
                        </div>
                    </Show>

                    // 列表
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
                                            <th>"Concurso"</th>
                                            <th>"Categoría"</th>
                                            <th>"Estado"</th>
                                            <th>"Publicado el"</th>
                                            <th class="text-right">"Acciones"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {let alternar_publicacion = alternar_publicacion.clone();
                                         let notificar = notificar.clone();
                                         let eliminar = eliminar.clone();
                                         let expandir = expandir.clone();
                                         move || {
                                            lista
                                                .get()
                                                .into_iter()
                                                .map(|resultado| {
                                                    let id = resultado.id;
                                                    let publicado = resultado.publicado;
                                                    let concurso_nombre = resultado.concurso.clone();
                                                    let categoria = resultado.categoria.clone();
                                                    let fecha_pub =
                                                        fecha_o_pendiente(resultado.fecha_publicacion.as_ref());
                                                    let alternar = alternar_publicacion.clone();
                                                    let notificar = notificar.clone();
                                                    let eliminar = eliminar.clone();
                                                    let expandir = expandir.clone();
                                                    let editar = abrir_edicion;
                                                    let para_alternar = resultado.clone();
                                                    let para_editar = resultado;
                                                    let abierto = move || expandido.get() == Some(id);
                                                    view! {
                                                        <tr class="hover">
                                                            <td class="font-medium">{concurso_nombre}</td>
                                                            <td>{categoria}</td>
                                                            <td>
                                                                {if publicado {
                                                                    view! { <span class="badge badge-success">"Publicado"</span> }.into_any()
                                                                } else {
                                                                    view! { <span class="badge badge-ghost">"Borrador"</span> }.into_any()
                                                                }}
                                                            </td>
                                                            <td class="text-sm text-base-content/70">{fecha_pub}</td>
                                                            <td>
                                                                <div class="flex justify-end gap-1">
                                                                    <button
                                                                        class="btn btn-ghost btn-xs"
                                                                        on:click=move |_| expandir(id)
                                                                    >
                                                                        <ChevronDown class="h-4 w-4" />
                                                                    </button>
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
                                                                        class="btn btn-outline btn-xs gap-1"
                                                                        disabled=!publicado
                                                                        on:click=move |_| notificar(id)
                                                                    >
                                                                        <Megaphone class="h-3 w-3" />
                                                                        "Notificar"
                                                                    </button>
                                                                    <button
                                                                        class="btn btn-ghost btn-xs text-error"
                                                                        on:click=move |_| eliminar(id)
                                                                    >
                                                                        "Eliminar"
                                                                    </button>
                                                                </div>
                                                            </td>
                                                        </tr>
                                                        <Show when=abierto>
                                                            <tr>
                                                                <td colspan="5" class="bg-base-200/50">
                                                                    {move || match detalle.get().filter(|d| d.id == id) {
                                                                        None => view! {
                                                                            <div class="p-2">
                                                                                <span class="loading loading-dots loading-sm"></span>
                                                                            </div>
                                                                        }
                                                                        .into_any(),
                                                                        Some(d) => view! {
                                                                            <div class="p-2 space-y-2">
                                                                                <h4 class="font-semibold text-sm">"Ganadores"</h4>
                                                                                <ol class="list-decimal list-inside text-sm">
                                                                                    {d.ganadores
                                                                                        .iter()
                                                                                        .map(|g| view! {
                                                                                            <li>
                                                                                                {g.participante.clone()}
                                                                                                " — "
                                                                                                <span class="text-base-content/70">{g.proyecto.clone()}</span>
                                                                                            </li>
                                                                                        })
                                                                                        .collect_view()}
                                                                                </ol>
                                                                                {d.menciones_honorificas.clone().map(|lista_menciones| view! {
                                                                                    <h4 class="font-semibold text-sm">"Menciones honoríficas"</h4>
                                                                                    <ul class="list-disc list-inside text-sm">
                                                                                        {lista_menciones
                                                                                            .iter()
                                                                                            .map(|m| view! {
                                                                                                <li>
                                                                                                    {m.participante.clone()}
                                                                                                    " — "
                                                                                                    <span class="text-base-content/70">{m.proyecto.clone()}</span>
                                                                                                </li>
                                                                                            })
                                                                                            .collect_view()}
                                                                                    </ul>
                                                                                })}
                                                                            </div>
                                                                        }
                                                                        .into_any(),
                                                                    }}
                                                                </td>
                                                            </tr>
                                                        </Show>
                                                    }
                                                })
                                                .collect_view()
                                        }}
                                    </tbody>
                                </table>
                            </div>
                        </div>

                        // 分页
                        <div class="flex justify-center gap-2">
                            <button
                                class="btn btn-sm"
                                disabled=move || pagina.get() <= 1
                                on:click={
                                    let cargar = cargar.clone();
                                    move |_| cargar(pagina.get_untracked() - 1)
                                }
                            >
                                "Anterior"
                            </button>
                            <span class="btn btn-sm btn-ghost no-animation">
                                {move || format!("Página {} de {}", pagina.get(), total_paginas())}
                            </span>
                            <button
                                class="btn btn-sm"
                                disabled=move || { pagina.get() >= total_paginas() }
                                on:click={
                                    let cargar = cargar.clone();
                                    move |_| cargar(pagina.get_untracked() + 1)
                                }
                            >
                                "Siguiente"
                            </button>
                        </div>
                    </Show>
                </main>
            </div>
        </div>
    }
}
