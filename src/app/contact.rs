use leptos::task::spawn_local;
use leptos::{html, prelude::*};

use crate::contact::ContactMessage;

#[derive(Debug, Clone, PartialEq, Eq)]
enum FormStatus {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

#[server]
pub async fn send_message(message: ContactMessage) -> Result<(), ServerFnError> {
    message
        .validate()
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    let payload = serde_json::to_string(&message)
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    // Delivery is someone else's job; the site just records the message.
    tracing::info!(from = %message.email, %payload, "contact form submission");
    Ok(())
}

#[component]
pub fn Contact() -> impl IntoView {
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (status, set_status) = signal(FormStatus::Idle);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (Some(name), Some(email), Some(message)) = (
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            message_ref.get_untracked(),
        ) else {
            return;
        };
        let message = ContactMessage::new(&name.value(), &email.value(), &message.value());
        // Validate locally first so the common mistakes never leave the page.
        if let Err(e) = message.validate() {
            set_status(FormStatus::Failed(e.to_string()));
            return;
        }
        set_status(FormStatus::Sending);
        spawn_local(async move {
            match send_message(message).await {
                Ok(()) => set_status(FormStatus::Sent),
                Err(e) => {
                    log::warn!("contact submission failed: {e}");
                    set_status(FormStatus::Failed(
                        "Something went wrong - please email me directly.".to_string(),
                    ));
                }
            }
        });
    };

    view! {
        <div class="w-full grid md:grid-cols-2 gap-8 items-center">
            <div>
                <h2 class="font-display text-3xl md:text-5xl">"Let's collaborate"</h2>
                <p class="mt-4 text-slate-300">
                    "If my work peaks your interest, contact me and we can discuss bringing your ideas to fruition."
                </p>
                <div class="mt-6 flex gap-3 flex-wrap">
                    <a
                        href="mailto:shyon2001@gmail.com"
                        class="inline-flex items-center gap-2 px-4 py-2 rounded-xl font-semibold text-white bg-gradient-to-r from-sky-500 to-cyan-500 shadow hover:brightness-110"
                    >
                        "Email Me"
                    </a>
                    <a
                        href="https://www.linkedin.com/in/shyonshiri/"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center gap-2 px-4 py-2 rounded-xl font-semibold border border-white/10 hover:bg-white/10"
                    >
                        "LinkedIn"
                    </a>
                    <a
                        href="https://www.instagram.com/shyonshiri"
                        target="_blank"
                        rel="noopener noreferrer"
                        class="inline-flex items-center gap-2 px-4 py-2 rounded-xl font-semibold border border-white/10 hover:bg-white/10"
                    >
                        "Instagram"
                    </a>
                </div>
            </div>
            <div class="rounded-3xl border border-white/10 p-6 bg-white/5 backdrop-blur">
                <form class="grid gap-4" on:submit=submit>
                    <label class="grid gap-2 text-sm">
                        <span>"Name"</span>
                        <input
                            node_ref=name_ref
                            placeholder="Your name"
                            class="px-3 py-2 rounded-lg bg-transparent border border-white/10 focus:outline-none focus:ring-2 focus:ring-sky-500"
                        />
                    </label>
                    <label class="grid gap-2 text-sm">
                        <span>"Email"</span>
                        <input
                            node_ref=email_ref
                            type="email"
                            placeholder="you@domain.com"
                            class="px-3 py-2 rounded-lg bg-transparent border border-white/10 focus:outline-none focus:ring-2 focus:ring-sky-500"
                        />
                    </label>
                    <label class="grid gap-2 text-sm">
                        <span>"Message"</span>
                        <textarea
                            node_ref=message_ref
                            rows=5
                            placeholder="Project goals, timeline, budget..."
                            class="px-3 py-2 rounded-lg bg-transparent border border-white/10 focus:outline-none focus:ring-2 focus:ring-sky-500"
                        ></textarea>
                    </label>
                    <button
                        type="submit"
                        disabled=move || status.get() == FormStatus::Sending
                        class="inline-flex items-center justify-center gap-2 px-4 py-2 rounded-xl font-semibold text-white bg-gradient-to-r from-sky-500 to-cyan-500 shadow hover:brightness-110 disabled:opacity-60"
                    >
                        {move || {
                            if status.get() == FormStatus::Sending { "Sending..." } else { "Send" }
                        }}
                    </button>
                    {move || match status.get() {
                        FormStatus::Sent => {
                            Some(
                                view! {
                                    <p class="text-sm text-emerald-400">
                                        "Thanks - I'll get back to you soon."
                                    </p>
                                }
                                    .into_any(),
                            )
                        }
                        FormStatus::Failed(reason) => {
                            Some(view! { <p class="text-sm text-red-400">{reason}</p> }.into_any())
                        }
                        FormStatus::Idle | FormStatus::Sending => None,
                    }}
                </form>
            </div>
        </div>
    }
}
