use leptos::prelude::*;

use super::components::{Badge, SocialLinks};
use super::dom::scroll_to_section;
use super::typewriter::TypewriterText;
use crate::content::PROFILE;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="min-h-[calc(100vh-4rem)] flex items-center py-20">
            <div class="container mx-auto px-4 grid lg:grid-cols-2 gap-12 items-center">
                <div class="flex flex-col gap-6">
                    <div class="flex flex-wrap gap-2">
                        {PROFILE.roles.iter().map(|role| view! { <Badge>{*role}</Badge> }).collect_view()}
                    </div>
                    <h1 class="text-4xl md:text-6xl font-bold">
                        "Hi, I'm "
                        <span class="bg-gradient-to-r from-cyan to-purple bg-clip-text text-transparent">
                            {PROFILE.name}
                        </span>
                    </h1>
                    <TypewriterText text=PROFILE.typewriter />
                    <p class="text-muted max-w-xl">{PROFILE.intro}</p>
                    <div class="flex flex-wrap gap-4">
                        <button
                            class="px-6 py-3 rounded-lg bg-gradient-to-r from-cyan to-purple font-medium hover:opacity-90 transition-opacity"
                            on:click=move |_| scroll_to_section("projects")
                        >
                            "View Projects"
                        </button>
                        <a
                            href=PROFILE.resume
                            download=PROFILE.resume_file_name()
                            class="px-6 py-3 rounded-lg border border-white/20 hover:bg-white/10 transition-colors"
                        >
                            <i class="extra-download mr-2"></i>
                            "Download CV"
                        </a>
                    </div>
                    <SocialLinks />
                </div>
                <div class="flex justify-center">
                    <div class="relative w-64 h-64 md:w-80 md:h-80 rounded-full p-1 bg-gradient-to-br from-cyan to-purple">
                        <img
                            src=PROFILE.avatar
                            alt=PROFILE.name
                            class="w-full h-full rounded-full object-cover"
                        />
                    </div>
                </div>
            </div>
        </section>
    }
}
