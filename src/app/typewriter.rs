use std::time::Duration;

use leptos::prelude::*;
use leptos_use::{use_interval_fn, utils::Pausable};

use crate::interaction::{typewriter::DEFAULT_INTERVAL, Typewriter};

#[component]
pub fn TypewriterText(
    text: &'static str,
    #[prop(optional)] interval: Option<Duration>,
) -> impl IntoView {
    let interval = interval.unwrap_or(DEFAULT_INTERVAL);
    let state = RwSignal::new(Typewriter::new(text));

    // the interval is cleared when the component is dropped
    let Pausable { pause, .. } = use_interval_fn(
        move || state.update(|tw| {
            tw.tick();
        }),
        interval.as_millis() as u64,
    );
    Effect::new(move |_| {
        if state.with(Typewriter::is_done) {
            pause();
        }
    });

    view! {
        <span class="text-xl md:text-2xl leading-relaxed">
            {move || state.with(|tw| tw.visible().to_string())}
            <span class="animate-pulse">"|"</span>
        </span>
    }
}
