//! 公共首页：大会介绍与日程（类别 → 工作坊 / 竞赛）

use congresotec_shared::date::fecha_o_pendiente;
use congresotec_shared::{Categoria, Concurso, Taller};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::icons::{CalendarDays, ChevronDown, Trophy};
use super::navbar::Navbar;
use crate::api::client::use_api;
use crate::api::{categorias, concursos, talleres};

#[component]
pub fn LandingPage() -> impl IntoView {
    let api = use_api();

    let (lista_categorias, set_categorias) = signal(Vec::<Categoria>::new());
    let (lista_talleres, set_talleres) = signal(Vec::<Taller>::new());
    let (lista_concursos, set_concursos) = signal(Vec::<Concurso>::new());
    let (cargando, set_cargando) = signal(true);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    // 展开的类别（本地 UI 状态）
    let (expandidas, set_expandidas) = signal(Vec::<u32>::new());

    Effect::new({
        let api = api.clone();
        move |_| {
            let api = api.clone();
            spawn_local(async move {
                let programa = async {
                    let cats = categorias::listar(&api).await?;
                    let tals = talleres::listar(&api, None).await?;
                    let concs = concursos::listar(&api).await?;
                    Ok::<_, String>((cats, tals, concs))
                };
                match programa.await {
                    Ok((cats, tals, concs)) => {
                        set_categorias.set(cats);
                        set_talleres.set(tals);
                        set_concursos.set(concs);
                    }
                    Err(mensaje) => set_error_msg.set(Some(mensaje)),
                }
                set_cargando.set(false);
            });
        }
    });

    let toggle = move |id: u32| {
        set_expandidas.update(|abiertas| {
            if let Some(pos) = abiertas.iter().position(|&x| x == id) {
                abiertas.remove(pos);
            } else {
                abiertas.push(id);
            }
        });
    };

    view! {
        <div class="min-h-screen bg-base-200">
            <Navbar />

            <div class="hero bg-base-100 py-12">
                <div class="hero-content text-center">
                    <div class="max-w-2xl">
                        <h1 class="text-4xl font-bold">"Congreso Universitario de Tecnología"</h1>
                        <p class="py-4 text-base-content/70">
                            "Talleres, concursos y foros para la comunidad universitaria. "
                            "Regístrate para inscribirte a los talleres y seguir los resultados."
                        </p>
                    </div>
                </div>
            </div>

            <div class="max-w-5xl mx-auto p-4 md:p-8 space-y-6">
                <Show when=move || error_msg.get().is_some()>
                    <div role="alert" class="alert alert-error">
                        <span>{move || error_msg.get().unwrap_or_default()}</span>
                    </div>
                </Show>

                <Show
                    when=move || !cargando.get()
                    fallback=|| view! {
                        <div class="flex justify-center py-12">
                            <span class="loading loading-spinner loading-lg text-primary"></span>
                        </div>
                    }
                >
                    <h2 class="text-2xl font-bold">"Programa"</h2>
                    {move || {
                        lista_categorias
                            .get()
                            .into_iter()
                            .map(|categoria| {
                                let id = categoria.id;
                                let abierta = move || expandidas.get().contains(&id);
                                let talleres_de = move || {
                                    lista_talleres
                                        .get()
                                        .into_iter()
                                        .filter(|t| t.categoria_id == id && t.activo)
                                        .collect::<Vec<_>>()
                                };
                                let concursos_de = move || {
                                    lista_concursos
                                        .get()
                                        .into_iter()
                                        .filter(|c| c.categoria_id == id && c.activo)
                                        .collect::<Vec<_>>()
                                };
                                view! {
                                    <div class="card bg-base-100 shadow">
                                        <button
                                            class="card-body py-4 flex-row items-center justify-between cursor-pointer"
                                            on:click=move |_| toggle(id)
                                        >
                                            <div>
                                                <h3 class="card-title">{categoria.nombre.clone()}</h3>
                                                <p class="text-sm text-base-content/70">
                                                    {categoria.descripcion.clone().unwrap_or_default()}
                                                </p>
                                            </div>
                                            <ChevronDown class="h-5 w-5" />
                                        </button>
                                        <Show when=abierta>
                                            <div class="px-8 pb-6 space-y-4">
                                                <div>
                                                    <h4 class="font-semibold flex items-center gap-2 mb-2">
                                                        <CalendarDays class="h-4 w-4 text-primary" />
                                                        "Talleres"
                                                    </h4>
                                                    <ul class="space-y-1">
                                                        {move || {
                                                            talleres_de()
                                                                .into_iter()
                                                                .map(|taller| view! {
                                                                    <li class="flex justify-between text-sm border-b border-base-200 py-1">
                                                                        <span>
                                                                            {taller.nombre.clone()}
                                                                            " — "
                                                                            {taller.ponente.clone()}
                                                                        </span>
                                                                        <span class="text-base-content/60">
                                                                            {fecha_o_pendiente(taller.fecha.as_ref())}
                                                                        </span>
                                                                    </li>
                                                                })
                                                                .collect_view()
                                                        }}
                                                    </ul>
                                                </div>
                                                <div>
                                                    <h4 class="font-semibold flex items-center gap-2 mb-2">
                                                        <Trophy class="h-4 w-4 text-primary" />
                                                        "Concursos"
                                                    </h4>
                                                    <ul class="space-y-1">
                                                        {move || {
                                                            concursos_de()
                                                                .into_iter()
                                                                .map(|concurso| view! {
                                                                    <li class="flex justify-between text-sm border-b border-base-200 py-1">
                                                                        <span>{concurso.nombre.clone()}</span>
                                                                        <span class="text-base-content/60">
                                                                            {fecha_o_pendiente(concurso.fecha.as_ref())}
                                                                        </span>
                                                                    </li>
                                                                })
                                                                .collect_view()
                                                        }}
                                                    </ul>
                                                </div>
                                            </div>
                                        </Show>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </Show>
            </div>
        </div>
    }
}
