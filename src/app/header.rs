use leptos::prelude::*;
use leptos_use::use_window_scroll;

use super::components::Monogram;
use super::dom::measure_sections;
use crate::content::{NavItem, NAV_ITEMS, PROFILE};
use crate::interaction::{active_section, HEADER_OFFSET};

#[component]
pub fn Header() -> impl IntoView {
    let (active, set_active) = signal(NAV_ITEMS[0].id);
    let (menu_open, set_menu_open) = signal(false);
    let (_, scroll_y) = use_window_scroll();

    // re-measured on every scroll; the section list is short
    Effect::new(move |_| {
        let y = scroll_y();
        let extents = measure_sections(NAV_ITEMS.iter().map(|item| item.id));
        if let Some(id) = active_section(&extents, y, HEADER_OFFSET) {
            set_active(id);
        }
    });

    let nav_class = move |item: &NavItem| {
        if active() == item.id {
            "px-4 py-2 rounded-lg transition-all duration-300 bg-white/10 text-cyan"
        } else {
            "px-4 py-2 rounded-lg transition-all duration-300 hover:bg-white/5"
        }
    };

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-white/10 backdrop-blur-md border-b border-white/10 rounded-b-lg">
            <div class="container mx-auto px-4 flex justify-between items-center h-16">
                <a href="#home" class="flex items-center gap-2">
                    <Monogram />
                    <span class="font-bold text-xl hidden sm:block">{PROFILE.name}</span>
                </a>
                <nav class="hidden md:flex items-center gap-1">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <a href=format!("#{}", item.id) class=move || nav_class(item)>
                                    {item.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <button
                    class="md:hidden rounded-full p-2 text-2xl"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open() { "✕" } else { "☰" }}
                </button>
            </div>
        </header>
        <Show when=menu_open>
            <div class="fixed inset-0 z-40 bg-background/95 pt-16">
                <nav class="container mx-auto px-4 py-8 flex flex-col gap-4">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            view! {
                                <a
                                    href=format!("#{}", item.id)
                                    class="flex items-center justify-between p-4 rounded-xl border border-white/10"
                                    on:click=move |_| set_menu_open(false)
                                >
                                    <div class="flex items-center gap-3">
                                        <div class="p-2 rounded-lg bg-white/10">
                                            <i class=item.icon.class()></i>
                                        </div>
                                        <span class="font-medium">{item.label}</span>
                                    </div>
                                    <span class="text-cyan">"›"</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </div>
        </Show>
    }
}
