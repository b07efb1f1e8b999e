use leptos::prelude::*;

use crate::content::PROFILE;

#[component]
pub fn Badge(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-flex items-center px-3 py-1 text-sm rounded-lg bg-cyan/10 text-cyan {class}",
        )>{children()}</span>
    }
}

#[component]
pub fn SectionHeading(
    badge: &'static str,
    title: &'static str,
    subtitle: &'static str,
) -> impl IntoView {
    view! {
        <div class="max-w-3xl mx-auto text-center mb-16 section-content">
            <Badge class="mb-4">{badge}</Badge>
            <h2 class="text-3xl font-bold mb-4">{title}</h2>
            <p class="text-muted">{subtitle}</p>
        </div>
    }
}

#[component]
pub fn TechTags(tags: &'static [&'static str], #[prop(optional)] large: bool) -> impl IntoView {
    let class = if large {
        "bg-white/10 hover:bg-white/20 px-3 py-1 rounded-lg"
    } else {
        "bg-white/5 border border-white/10 rounded-lg px-2 py-1 text-sm"
    };
    view! {
        <div class="flex flex-wrap gap-2">
            {tags.iter().map(|tag| view! { <span class=class>{*tag}</span> }).collect_view()}
        </div>
    }
}

#[component]
pub fn SocialLinks(#[prop(optional)] class: &'static str) -> impl IntoView {
    let link_class = "p-2 rounded-full bg-white/5 text-muted hover:text-cyan transition-colors duration-300 text-xl";
    view! {
        <div class=format!("flex gap-4 {class}")>
            <a
                href=PROFILE.github
                target="_blank"
                rel="noopener noreferrer"
                class=link_class
                aria-label="GitHub Profile"
            >
                <i class="devicon-github-plain"></i>
            </a>
            <a
                href=PROFILE.linkedin
                target="_blank"
                rel="noopener noreferrer"
                class=link_class
                aria-label="LinkedIn Profile"
            >
                <i class="devicon-linkedin-plain"></i>
            </a>
            <a href=format!("mailto:{}", PROFILE.email) class=link_class aria-label="Email">
                <i class="extra-email"></i>
            </a>
        </div>
    }
}

/// Round initials mark used in the header and footer.
#[component]
pub fn Monogram(#[prop(optional)] small: bool) -> impl IntoView {
    let size = if small { "w-8 h-8 text-xs" } else { "w-10 h-10" };
    view! {
        <div class=format!(
            "{size} rounded-full bg-gradient-to-br from-cyan to-purple flex items-center justify-center font-bold",
        )>{PROFILE.initials}</div>
    }
}
