mod about;
mod contact;
mod hero;
mod media_tile;
mod work;

use leptos::{html, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::section::{ActiveSection, SectionId, ACTIVE_THRESHOLD};

use about::About;
use contact::Contact;
use hero::Hero;
use work::Work;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/shiri-portfolio.css" />
                <MetaTags />
            </head>
            <body class="bg-slate-950 text-slate-200">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Written by each section's viewport observer; read by the nav rail.
    let active_section = RwSignal::new(ActiveSection::new());
    provide_context(active_section);

    view! {
        // sets the document title
        <Title formatter=|title| format!("Shyon Shiri - {title}") />

        <Router>
            <Header />
            <main class="pb-24">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=Portfolio />
                </Routes>
            </main>
            <NavRail />
            <Footer />
        </Router>
    }
}

#[component]
fn Portfolio() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <PageSection id=SectionId::Home>
            <Hero />
        </PageSection>
        <PageSection id=SectionId::Work>
            <Work />
        </PageSection>
        <PageSection id=SectionId::About>
            <About />
        </PageSection>
        <PageSection id=SectionId::Contact>
            <Contact />
        </PageSection>
    }
}

/// One top-level scroll target. Registers a viewport observer at mount and
/// publishes its id when 60% of the section is visible; leptos-use tears
/// the observer down when the component is disposed.
#[component]
fn PageSection(id: SectionId, children: Children) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let active_section = expect_context::<RwSignal<ActiveSection>>();

    use_intersection_observer_with_options(
        section_ref,
        move |entries, _| {
            // Last reported crossing wins; no tie-break between sections
            // observed in the same batch.
            if entries.iter().any(|entry| entry.is_intersecting()) {
                active_section.update(|active| active.crossed(id));
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![ACTIVE_THRESHOLD]),
    );

    view! {
        <section node_ref=section_ref id=id.id_str() class="relative py-24 scroll-mt-24">
            <div class="relative max-w-6xl mx-auto grid place-items-center px-4">
                {children()}
            </div>
        </section>
    }
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="sticky top-0 z-40 backdrop-blur bg-slate-900/40 border-b border-white/10">
            <div class="w-full px-6 py-3 flex items-center justify-center">
                <img src="/assets/Shiri_Logo.png" alt="Shiri Logo" class="h-20 w-auto object-contain" />
            </div>
        </header>
    }
}

/// Fixed bottom navigation. Highlights whichever section the viewport
/// observers last reported as active.
#[component]
fn NavRail() -> impl IntoView {
    let active_section = expect_context::<RwSignal<ActiveSection>>();

    view! {
        <nav class="fixed bottom-6 left-1/2 -translate-x-1/2 z-40 flex gap-1 px-2 py-1.5 rounded-2xl border border-white/10 bg-slate-900/70 backdrop-blur shadow-2xl">
            {SectionId::ALL
                .map(|section| {
                    view! {
                        <a
                            href=format!("#{}", section.id_str())
                            aria-label=section.label()
                            class=move || {
                                if active_section.get().current() == section {
                                    "px-3 py-1.5 rounded-xl text-sm bg-gradient-to-r from-sky-500 to-cyan-500 text-white"
                                } else {
                                    "px-3 py-1.5 rounded-xl text-sm text-slate-300 hover:bg-white/10"
                                }
                            }
                        >
                            {section.label()}
                        </a>
                    }
                })}
        </nav>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="px-6 py-8 text-center text-xs text-slate-500 border-t border-white/10">
            <p>"© 2026 Shyon Shiri. Built " {env!("BUILD_TIME")}</p>
        </footer>
    }
}
