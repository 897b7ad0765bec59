use leptos::prelude::*;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <div class="max-w-3xl">
            <h2 class="font-display text-3xl md:text-5xl">"About"</h2>
            <p class="mt-4 text-slate-300">
                "I am a Bay Area based graphic designer with a Bachelor of Arts in Studio Practice with a focus in Graphic Design. My passion for design stems from my fascination for creating, whether it's for visual storytelling or personal projects."
            </p>
            <p class="mt-4 text-slate-300">
                "Design is just a short summarization to describe my broad set of capabilities. I work across several mediums including UI/UX Design, 3D Modeling, Visual Production, Welding, Sculpting, and Coding. Often times I take on related roles ranging from photographer to creative director."
            </p>
        </div>
    }
}
