use leptos::{ev::MouseEvent, prelude::*};

use super::components::{SectionHeading, TechTags};
use super::dom::PageScrollLock;
use super::modal::{DomModal, Modal};
use crate::content::{ProjectCard, PROJECTS};
use crate::interaction::ModalController;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let lock = expect_context::<PageScrollLock>();
    let details: DomModal<&'static ProjectCard> = RwSignal::new(ModalController::new(lock));
    let on_open = Callback::new(move |card: &'static ProjectCard| details.update(|c| c.open(card)));

    view! {
        <section id="projects" class="py-20 relative">
            <div class="container mx-auto px-4 relative z-10">
                <SectionHeading
                    badge="Projects"
                    title="My Recent Work"
                    subtitle="Here's a selection of projects I've worked on recently."
                />
                <Modal
                    controller=details
                    render=|card: &'static ProjectCard| view! { <ProjectDetail card /> }.into_any()
                />
                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .map(|card| view! { <ProjectTile card on_open /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Opens `url` in a new tab without letting the click reach the card.
fn external(url: &'static str) -> impl Fn(MouseEvent) + Copy {
    move |ev: MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let _ = window().open_with_url_and_target(url, "_blank");
    }
}

#[component]
fn ProjectTile(card: &'static ProjectCard, on_open: Callback<&'static ProjectCard>) -> impl IntoView {
    view! {
        <div
            class="h-full bg-white/5 border border-white/10 hover:shadow-lg transition-all group rounded-xl overflow-hidden cursor-pointer hover:scale-[1.02]"
            on:click=move |ev: MouseEvent| {
                ev.prevent_default();
                on_open.run(card);
            }
        >
            <div class="relative">
                <img src=card.image alt=card.title class="w-full h-48 object-cover" />
                <div class="absolute inset-0 bg-gradient-to-t from-black/60 to-transparent opacity-0 group-hover:opacity-100 transition-opacity flex items-end p-4 gap-3">
                    {card
                        .source
                        .map(|url| {
                            view! {
                                <a
                                    href=url
                                    class="p-2 rounded-full bg-white/20 hover:bg-white/30"
                                    aria-label="Source code"
                                    on:click=external(url)
                                >
                                    <i class="devicon-github-plain"></i>
                                </a>
                            }
                        })}
                    {card
                        .demo
                        .map(|url| {
                            view! {
                                <a
                                    href=url
                                    class="p-2 rounded-full bg-white/20 hover:bg-white/30"
                                    aria-label="Live demo"
                                    on:click=external(url)
                                >
                                    <i class="extra-link"></i>
                                </a>
                            }
                        })}
                </div>
            </div>
            <div class="p-6">
                <h3 class="text-xl font-semibold mb-2 group-hover:text-cyan transition-colors">
                    {card.title}
                </h3>
                <p class="text-muted mb-4">{card.description}</p>
                <TechTags tags=card.technologies />
            </div>
        </div>
    }
}

#[component]
fn ProjectDetail(card: &'static ProjectCard) -> impl IntoView {
    let button = "px-4 py-2 bg-black/50 hover:bg-white hover:text-black border border-white/20 transition-all duration-300 rounded-lg";
    view! {
        <img src=card.image alt=card.title class="w-full h-48 object-cover object-center" />
        <div class="p-6 flex flex-col gap-4">
            <div>
                <h3 class="text-2xl font-bold mb-2">{card.title}</h3>
                <p class="mb-6">{card.detail()}</p>
            </div>
            <div class="mb-6">
                <h4 class="text-lg font-semibold mb-2 text-cyan">"Technologies"</h4>
                <TechTags tags=card.technologies large=true />
            </div>
            <div class="flex gap-4">
                {card
                    .source
                    .map(|url| {
                        view! {
                            <button class=button on:click=external(url)>
                                <i class="devicon-github-plain mr-2"></i>
                                "View Code"
                            </button>
                        }
                    })}
                {card
                    .demo
                    .map(|url| {
                        view! {
                            <button class=button on:click=external(url)>
                                <i class="extra-link mr-2"></i>
                                "Live Demo"
                            </button>
                        }
                    })}
            </div>
        </div>
    }
}
