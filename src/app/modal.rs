use leptos::{ev, html, prelude::*};
use leptos_use::{on_click_outside, use_event_listener, use_window};

use super::dom::DomViewport;
use crate::interaction::ModalController;

pub type DomModal<T> = RwSignal<ModalController<T, DomViewport>>;

/// Overlay for whichever item `controller` has open. Closes on the close
/// button, Escape, or a click outside the surface.
#[component]
pub fn Modal<T, F>(controller: DomModal<T>, render: F) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    F: Fn(T) -> AnyView + Send + Sync + 'static,
{
    let surface = NodeRef::<html::Div>::new();

    let _ = use_event_listener(use_window(), ev::keydown, move |ev| {
        controller.maybe_update(|c| c.handle_key(&ev.key()));
    });
    let _ = on_click_outside(surface, move |_| {
        controller.maybe_update(|c| c.close().is_some());
    });

    view! {
        {move || {
            controller
                .with(|c| c.active().cloned())
                .map(|item| {
                    view! {
                        <div class="fixed inset-0 bg-black/80 backdrop-blur-md z-[9999]"></div>
                        <div
                            class="fixed inset-0 grid place-items-center z-[10000] p-4 pt-20 pb-20 overflow-hidden"
                            role="dialog"
                            aria-modal="true"
                        >
                            <div
                                node_ref=surface
                                class="relative w-full max-w-3xl max-h-[75vh] overflow-y-auto custom-scrollbar bg-gradient-to-br from-background/95 to-brightBlack/95 rounded-3xl border border-white/20 shadow-2xl"
                            >
                                <button
                                    class="absolute top-4 right-4 flex items-center justify-center bg-black/70 hover:bg-black/90 rounded-full h-10 w-10 shadow-lg"
                                    aria-label="Close"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        controller.update(|c| {
                                            c.close();
                                        });
                                    }
                                >
                                    "✕"
                                </button>
                                {render(item)}
                            </div>
                        </div>
                    }
                })
        }}
    }
}
