use leptos::prelude::*;

use crate::catalog::{entries_for, CategoryEntry, DIGITAL_WORKS, HANDMADE_WORKS};
use crate::work_state::{Tab, WorkState};

use super::media_tile::AspectTile;

fn works_for(tab: Tab) -> &'static [CategoryEntry] {
    match tab {
        Tab::Digital => DIGITAL_WORKS,
        Tab::Handmade => HANDMADE_WORKS,
    }
}

#[component]
pub fn Work() -> impl IntoView {
    let (state, set_state) = signal(WorkState::new());

    view! {
        <div class="w-full">
            <h2 class="font-display text-3xl md:text-5xl">"My Work"</h2>

            <div class="mt-6 flex gap-2">
                {Tab::ALL
                    .map(|tab| {
                        view! {
                            <button
                                on:click=move |_| set_state.update(|s| s.select_tab(tab))
                                class=move || {
                                    if state.get().tab() == tab {
                                        "px-3 py-1.5 rounded-xl text-sm border transition bg-gradient-to-r from-sky-500 to-cyan-500 text-white border-transparent"
                                    } else {
                                        "px-3 py-1.5 rounded-xl text-sm border transition bg-white/5 border-white/10 hover:bg-white/10"
                                    }
                                }
                            >
                                {tab.label()}
                            </button>
                        }
                    })}
            </div>

            // Only cards live inside this grid; the expanded gallery
            // renders below it.
            <div class="mt-6 grid sm:grid-cols-2 lg:grid-cols-3 gap-5">
                {move || {
                    let current = state.get();
                    let tab = current.tab();
                    works_for(tab)
                        .iter()
                        .map(|entry| {
                            let id = entry.id;
                            let is_active = current.is_open(tab, id);
                            view! {
                                <article
                                    on:click=move |_| set_state.update(|s| s.toggle_entry(tab, id))
                                    class=if is_active {
                                        "cursor-pointer group rounded-2xl overflow-hidden bg-white/5 backdrop-blur hover:shadow-xl hover:-translate-y-0.5 transition border border-sky-400 glow-ring"
                                    } else {
                                        "cursor-pointer group rounded-2xl overflow-hidden bg-white/5 backdrop-blur hover:shadow-xl hover:-translate-y-0.5 transition border border-white/10"
                                    }
                                >
                                    <div class="relative aspect-video overflow-hidden">
                                        <img
                                            src=entry.cover
                                            alt=entry.title
                                            class="absolute inset-0 w-full h-full object-cover"
                                            style:object-position=entry.object_position.unwrap_or("50% 50%")
                                        />
                                    </div>
                                    <div class="p-4">
                                        <h3 class="font-semibold text-lg">{entry.title}</h3>
                                        <p class="text-xs uppercase tracking-wide text-sky-400">{entry.tag}</p>
                                        <p class="text-sm text-slate-300">{entry.description}</p>
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()
                }}
            </div>

            {move || {
                let current = state.get();
                current
                    .open_entry(current.tab())
                    .map(|entry| view! { <GalleryPanel entry /> })
            }}
        </div>
    }
}

/// The media set for the one open card, below the grid. The reveal class
/// animates height/opacity on enter and exit.
#[component]
fn GalleryPanel(entry: &'static str) -> impl IntoView {
    view! {
        <section class="mt-10 panel-reveal overflow-hidden">
            <div class="grid items-start gap-5 sm:grid-cols-2 lg:grid-cols-3">
                {entries_for(entry)
                    .iter()
                    .map(|item| view! { <AspectTile item=*item /> })
                    .collect_view()}
            </div>
        </section>
    }
}
