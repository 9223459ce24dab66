//! 与会者面板：报名与出席记录

use congresotec_shared::date::{formatea_fecha, formatea_fecha_hora};
use congresotec_shared::{Asistencia, Inscripcion, Taller};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::icons::{CalendarDays, LayoutDashboard};
use super::navbar::Navbar;
use super::sidebar::Sidebar;
use crate::api::client::use_api;
use crate::api::{asistencias, inscripciones, talleres};
use crate::auth::use_auth;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth_ctx = use_auth();
    let api = use_api();

    let (mis_inscripciones, set_inscripciones) = signal(Vec::<Inscripcion>::new());
    let (mis_asistencias, set_asistencias) = signal(Vec::<Asistencia>::new());
    let (catalogo_talleres, set_catalogo_talleres) = signal(Vec::<Taller>::new());
    let (taller_sel, set_taller_sel) = signal(String::new());
    let (inscribiendo, set_inscribiendo) = signal(false);
    let (cargando, set_cargando) = signal(true);
    let (notificacion, set_notificacion) = signal(Option::<(String, bool)>::None);

    let cargar = {
        let api = api.clone();
        move || {
            let api = api.clone();
            set_cargando.set(true);
            spawn_local(async move {
                match inscripciones::mis_inscripciones(&api).await {
                    Ok(lista) => set_inscripciones.set(lista),
                    Err(mensaje) => set_notificacion.set(Some((mensaje, true))),
                }
                match asistencias::mis_asistencias(&api).await {
                    Ok(lista) => set_asistencias.set(lista),
                    Err(mensaje) => set_notificacion.set(Some((mensaje, true))),
                }
                set_cargando.set(false);
            });
        }
    };

    // 初始加载：记录 + 可报名的工作坊目录
    Effect::new({
        let cargar = cargar.clone();
        let api = api.clone();
        move |_| {
            cargar();
            let api = api.clone();
            spawn_local(async move {
                if let Ok(lista) = talleres::listar(&api, None).await {
                    set_catalogo_talleres
                        .set(lista.into_iter().filter(|t| t.activo).collect());
                }
            });
        }
    });

    let inscribirse = {
        let api = api.clone();
        let cargar = cargar.clone();
        move |_| {
            let taller_id = match taller_sel.get_untracked().parse::<u32>() {
                Ok(id) => id,
                Err(_) => {
                    set_notificacion.set(Some(("Selecciona un taller".to_string(), true)));
                    return;
                }
            };
            set_inscribiendo.set(true);
            let api = api.clone();
            let cargar = cargar.clone();
            spawn_local(async move {
                match inscripciones::crear(&api, taller_id).await {
                    Ok(inscripcion) => {
                        set_notificacion.set(Some((
                            format!("Inscrito a {}", inscripcion.taller),
                            false,
                        )));
                        set_taller_sel.set(String::new());
                        cargar();
                    }
                    Err(mensaje) => set_notificacion.set(Some((mensaje, true))),
                }
                set_inscribiendo.set(false);
            });
        }
    };

    let cancelar_inscripcion = {
        let api = api.clone();
        let cargar = cargar.clone();
        move |id: u32| {
            let api = api.clone();
            let cargar = cargar.clone();
            spawn_local(async move {
                match inscripciones::eliminar(&api, id).await {
                    Ok(()) => {
                        set_notificacion.set(Some(("Inscripción cancelada".to_string(), false)));
                        // 变更后总是重新拉取，不做本地对账
                        cargar();
                    }
                    Err(mensaje) => set_notificacion.set(Some((mensaje, true))),
                }
            });
        }
    };

    // 3 秒后清除通知
    Effect::new(move |_| {
        if notificacion.get().is_some() {
            set_timeout(
                move || set_notificacion.set(None),
                std::time::Duration::from_secs(3),
            );
        }
    });

    let nombre = move || {
        auth_ctx
            .state
            .get()
            .usuario
            .map(|u| u.nombre)
            .unwrap_or_default()
    };
    let total_inscripciones = move || mis_inscripciones.with(|lista| lista.len());
    let asistencias_presentes = move || {
        mis_asistencias.with(|lista| lista.iter().filter(|a| a.presente).count())
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

                    <div class="flex items-center gap-3">
                        <LayoutDashboard class="h-7 w-7 text-primary" />
                        <div>
                            <h1 class="text-2xl font-bold">"Hola, " {nombre}</h1>
                            <p class="text-base-content/70 text-sm">
                                "Tu participación en el congreso"
                            </p>
                        </div>
                    </div>

                    <div class="stats shadow bg-base-100 w-full">
                        <div class="stat">
                            <div class="stat-title">"Talleres inscritos"</div>
                            <div class="stat-value text-primary">{total_inscripciones}</div>
                        </div>
                        <div class="stat">
                            <div class="stat-title">"Sesiones asistidas"</div>
                            <div class="stat-value">{asistencias_presentes}</div>
                        </div>
                    </div>

                    <div class="card bg-base-100 shadow">
                        <div class="card-body">
                            <h2 class="card-title text-lg">"Inscribirse a un taller"</h2>
                            <div class="flex gap-2">
                                <select
                                    class="select select-bordered flex-1"
                                    on:change=move |ev| set_taller_sel.set(event_target_value(&ev))
                                >
                                    <option value="" selected=move || taller_sel.get().is_empty()>
                                        "Selecciona un taller"
                                    </option>
                                    {move || {
                                        catalogo_talleres
                                            .get()
                                            .into_iter()
                                            .map(|t| view! {
                                                <option value=t.id.to_string()>
                                                    {t.nombre.clone()}
                                                    " — "
                                                    {t.ponente.clone()}
                                                </option>
                                            })
                                            .collect_view()
                                    }}
                                </select>
                                <button
                                    class="btn btn-primary"
                                    disabled=move || inscribiendo.get()
                                    on:click=inscribirse.clone()
                                >
                                    {move || if inscribiendo.get() {
                                        view! { <span class="loading loading-spinner"></span> }.into_any()
                                    } else {
                                        "Inscribirme".into_any()
                                    }}
                                </button>
                            </div>
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
                        <div class="grid md:grid-cols-2 gap-6">
                            <div class="card bg-base-100 shadow">
                                <div class="card-body">
                                    <h2 class="card-title text-lg">"Mis inscripciones"</h2>
                                    {let cancelar_inscripcion = cancelar_inscripcion.clone();
                                     view! {
                                    <Show
                                        when=move || { total_inscripciones() > 0 }
                                        fallback=|| view! {
                                            <p class="text-sm text-base-content/60">
                                                "Aún no estás inscrito en ningún taller."
                                            </p>
                                        }
                                    >
                                        <ul class="space-y-2">
                                            {let cancelar_inscripcion = cancelar_inscripcion.clone();
                                             move || {
                                                mis_inscripciones
                                                    .get()
                                                    .into_iter()
                                                    .map(|inscripcion| {
                                                        let id = inscripcion.id;
                                                        let cancelar = cancelar_inscripcion.clone();
                                                        view! {
                                                            <li class="flex items-center justify-between border-b border-base-200 pb-2">
                                                                <div>
                                                                    <p class="font-medium">{inscripcion.taller.clone()}</p>
                                                                    <p class="text-xs text-base-content/60">
                                                                        "Inscrito el "
                                                                        {formatea_fecha(&inscripcion.fecha_inscripcion)}
                                                                    </p>
                                                                </div>
                                                                <button
                                                                    class="btn btn-ghost btn-xs text-error"
                                                                    on:click=move |_| cancelar(id)
                                                                >
                                                                    "Cancelar"
                                                                </button>
                                                            </li>
                                                        }
                                                    })
                                                    .collect_view()
                                            }}
                                        </ul>
                                    </Show>
                                    }}
                                </div>
                            </div>

                            <div class="card bg-base-100 shadow">
                                <div class="card-body">
                                    <h2 class="card-title text-lg">
                                        <CalendarDays class="h-5 w-5" />
                                        "Mis asistencias"
                                    </h2>
                                    <Show
                                        when=move || mis_asistencias.with(|l| !l.is_empty())
                                        fallback=|| view! {
                                            <p class="text-sm text-base-content/60">
                                                "Sin registros de asistencia todavía."
                                            </p>
                                        }
                                    >
                                        <ul class="space-y-2">
                                            {move || {
                                                mis_asistencias
                                                    .get()
                                                    .into_iter()
                                                    .map(|asistencia| view! {
                                                        <li class="flex items-center justify-between border-b border-base-200 pb-2">
                                                            <div>
                                                                <p class="font-medium">{asistencia.taller.clone()}</p>
                                                                <p class="text-xs text-base-content/60">
                                                                    {formatea_fecha_hora(&asistencia.fecha)}
                                                                </p>
                                                            </div>
                                                            {if asistencia.presente {
                                                                view! { <span class="badge badge-success">"Presente"</span> }.into_any()
                                                            } else {
                                                                view! { <span class="badge badge-ghost">"Ausente"</span> }.into_any()
                                                            }}
                                                        </li>
                                                    })
                                                    .collect_view()
                                            }}
                                        </ul>
                                    </Show>
                                </div>
                            </div>
                        </div>
                    </Show>
                </main>
            </div>
        </div>
    }
}
