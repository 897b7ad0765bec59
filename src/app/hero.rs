use leptos::prelude::*;

use crate::catalog::PORTRAIT_IMAGES;

// Tile sizes cycle through the mosaic to keep the layout uneven.
static PORTRAIT_SIZES: [&str; 4] = ["w-40 h-56", "w-32 h-44", "w-36 h-48", "w-32 h-40"];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="relative w-full grid md:grid-cols-2 gap-10 items-center">
            <div class="relative inline-block">
                <h1 class="relative z-10 font-display leading-tight text-left">
                    <span class="block text-4xl sm:text-5xl md:text-7xl lg:text-8xl">
                        "Shyon Shiri"
                    </span>
                    <span class="block mt-1 text-2xl sm:text-3xl md:text-4xl lg:text-5xl text-transparent bg-clip-text bg-gradient-to-r from-sky-400 to-cyan-400">
                        "Graphic Designer"
                    </span>
                </h1>
                <div class="hero-glow" aria-hidden="true"></div>
            </div>
            <div class="relative max-w-xl mx-auto">
                <div class="flex flex-wrap gap-4 justify-center">
                    {PORTRAIT_IMAGES
                        .iter()
                        .enumerate()
                        .map(|(i, portrait)| {
                            let size = PORTRAIT_SIZES[i % PORTRAIT_SIZES.len()];
                            let offset = if i == 1 { " mt-8" } else { "" };
                            view! {
                                <div class=format!(
                                    "{size}{offset} relative overflow-hidden rounded-3xl border border-white/10 bg-slate-900/40 shadow-2xl",
                                )>
                                    <img
                                        src=portrait.src
                                        alt=portrait.alt.unwrap_or("")
                                        class="w-full h-full object-cover transition-transform duration-300 ease-out hover:scale-110"
                                    />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
