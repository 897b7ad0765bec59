use leptos::{html, prelude::*};

use crate::aspect::{aspect_ratio, FALLBACK_RATIO};
use crate::catalog::{MediaItem, MediaKind};

/// A gallery tile that takes on the natural shape of its asset.
///
/// The wrapper starts at 16:9 and is resized once the image load / video
/// metadata event reports real dimensions. A failed load or a degenerate
/// size report leaves the current ratio in place; there is no error state.
#[component]
pub fn AspectTile(item: MediaItem) -> impl IntoView {
    let (ratio, set_ratio) = signal(FALLBACK_RATIO);
    let apply_ratio = move |width: u32, height: u32| {
        if let Some(r) = aspect_ratio(width, height) {
            set_ratio.set(r);
        }
    };

    let media = match item.kind {
        MediaKind::Image => {
            let img_ref = NodeRef::<html::Img>::new();
            view! {
                <img
                    node_ref=img_ref
                    src=item.src
                    alt=item.alt.unwrap_or("")
                    loading="lazy"
                    class="w-full h-full object-contain block"
                    on:load=move |_| {
                        if let Some(img) = img_ref.get_untracked() {
                            apply_ratio(img.natural_width(), img.natural_height());
                        }
                    }
                />
            }
            .into_any()
        }
        MediaKind::Video => {
            let video_ref = NodeRef::<html::Video>::new();
            view! {
                <video
                    node_ref=video_ref
                    src=item.src
                    controls=true
                    playsinline=true
                    preload="metadata"
                    class="w-full h-full object-contain block"
                    on:loadedmetadata=move |_| {
                        if let Some(video) = video_ref.get_untracked() {
                            apply_ratio(video.video_width(), video.video_height());
                        }
                    }
                ></video>
            }
            .into_any()
        }
    };

    view! {
        <article class="group rounded-3xl overflow-hidden border border-white/10 bg-slate-950/60 backdrop-blur">
            <div class="w-full" style:aspect-ratio=move || ratio.get().to_string()>
                {media}
            </div>
        </article>
    }
}
