use leptos::prelude::*;

use super::components::{SectionHeading, TechTags};
use super::tilt::Tilt;
use crate::content::{PROFILE, SKILLS, STATS};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20 relative">
            <div class="container mx-auto px-4 relative z-10">
                <SectionHeading
                    badge="About Me"
                    title="My Story"
                    subtitle="A little about who I am and what I do."
                />
                <div class="grid lg:grid-cols-2 gap-12">
                    <div class="flex flex-col gap-4">
                        {PROFILE
                            .story
                            .iter()
                            .map(|para| view! { <p class="leading-relaxed">{*para}</p> })
                            .collect_view()}
                        <div class="grid grid-cols-2 gap-4 mt-4">
                            {STATS
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <Tilt class="bg-white/5 border border-white/10 p-6 text-center">
                                            <div class="text-3xl font-bold text-cyan">{stat.value}</div>
                                            <div class="text-muted">{stat.label}</div>
                                        </Tilt>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <SkillTabs />
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillTabs() -> impl IntoView {
    let (selected, set_selected) = signal(0usize);

    view! {
        <div class="bg-white/5 border border-white/10 rounded-xl p-6">
            <div class="flex flex-wrap gap-2 mb-6">
                {SKILLS
                    .iter()
                    .enumerate()
                    .map(|(index, group)| {
                        view! {
                            <button
                                class=move || {
                                    if selected() == index {
                                        "px-4 py-2 rounded-lg bg-cyan/20 text-cyan"
                                    } else {
                                        "px-4 py-2 rounded-lg hover:bg-white/10"
                                    }
                                }
                                on:click=move |_| set_selected(index)
                            >
                                {group.category}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || SKILLS.get(selected()).map(|group| view! { <TechTags tags=group.items large=true /> })}
        </div>
    }
}
