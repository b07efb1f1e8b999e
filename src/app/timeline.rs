use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use super::components::{Badge, SectionHeading, TechTags};
use super::dom::PageScrollLock;
use super::modal::{DomModal, Modal};
use super::tilt::Tilt;
use crate::content::{has_details, ExperienceEntry, TimelineEntry};
use crate::interaction::ModalController;

/// Vertical timeline of entries. Experience entries open a detail modal;
/// the other kinds are display-only.
#[component]
pub fn TimelineSection(
    id: &'static str,
    badge: &'static str,
    title: &'static str,
    subtitle: &'static str,
    entries: &'static [TimelineEntry],
) -> impl IntoView {
    // no modal or window listeners for timelines with nothing to expand
    let details: Option<DomModal<&'static ExperienceEntry>> = has_details(entries)
        .then(|| RwSignal::new(ModalController::new(expect_context::<PageScrollLock>())));
    let on_expand = details.map(|details| {
        Callback::new(move |entry: &'static ExperienceEntry| details.update(|c| c.open(entry)))
    });
    let last = entries.len().saturating_sub(1);

    view! {
        <section id=id class="py-20 relative">
            <div class="container mx-auto px-4 relative z-10">
                <SectionHeading badge title subtitle />
                <div class="max-w-4xl mx-auto">
                    {entries
                        .iter()
                        .enumerate()
                        .map(|(index, entry)| {
                            view! { <TimelineItem entry index connector=index != last on_expand /> }
                        })
                        .collect_view()}
                </div>
            </div>
            {details
                .map(|details| {
                    view! {
                        <Modal
                            controller=details
                            render=|entry: &'static ExperienceEntry| {
                                view! { <ExperienceDetail entry /> }.into_any()
                            }
                        />
                    }
                })}
        </section>
    }
}

#[component]
fn TimelineItem(
    entry: &'static TimelineEntry,
    index: usize,
    connector: bool,
    on_expand: Option<Callback<&'static ExperienceEntry>>,
) -> impl IntoView {
    let row = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(row);
    let (side, hidden) = if index % 2 == 0 {
        ("sm:flex-row", "opacity-0 -translate-x-12")
    } else {
        ("sm:flex-row-reverse", "opacity-0 translate-x-12")
    };
    let milestone = entry.milestone();
    let expandable = on_expand.zip(entry.details());

    view! {
        <div
            node_ref=row
            class=move || {
                let state = if visible() {
                    "opacity-100 translate-x-0"
                } else {
                    hidden
                };
                format!("flex {side} gap-6 mb-12 last:mb-0 group transition-all duration-700 {state}")
            }
            style=format!("transition-delay: {}ms", index * 200)
        >
            <div class="hidden sm:block pt-1">
                <div class="w-12 h-12 rounded-full bg-white/10 border border-white/10 flex items-center justify-center shadow-sm group-hover:border-cyan/50 transition-colors">
                    <div class="w-3 h-3 rounded-full bg-gradient-to-r from-cyan to-purple animate-pulse"></div>
                </div>
                {connector
                    .then(|| {
                        view! {
                            <div class="w-0.5 h-full bg-gradient-to-b from-cyan/50 to-purple/50 opacity-30 ml-6 mt-2 group-hover:opacity-50 transition-opacity"></div>
                        }
                    })}
            </div>
            <div
                class=if expandable.is_some() { "flex-1 cursor-pointer" } else { "flex-1" }
                on:click=move |_| {
                    if let Some((on_expand, exp)) = expandable {
                        on_expand.run(exp);
                    }
                }
            >
                <Tilt class="bg-white/5 border border-white/10">
                    <div class="p-6">
                        <Badge class="mb-2">{milestone.period}</Badge>
                        <h3 class="text-xl font-semibold mb-1">{milestone.title}</h3>
                        <p class="text-muted mb-4">{milestone.institution}</p>
                        <p>{milestone.description}</p>
                    </div>
                </Tilt>
            </div>
        </div>
    }
}

#[component]
fn ExperienceDetail(entry: &'static ExperienceEntry) -> impl IntoView {
    let milestone = &entry.milestone;
    view! {
        <div class="p-8">
            <Badge class="mb-2">{milestone.period}</Badge>
            <h2 class="text-2xl font-bold mb-2">{milestone.title}</h2>
            <h3 class="text-xl text-cyan mb-6">{milestone.institution}</h3>
            <div class="mb-6">
                <h4 class="text-lg font-semibold mb-3">"Description"</h4>
                <p class="leading-relaxed">{milestone.description}</p>
            </div>
            {(!entry.technologies.is_empty())
                .then(|| {
                    view! {
                        <div class="mb-6">
                            <h4 class="text-lg font-semibold mb-3">"Technologies"</h4>
                            <TechTags tags=entry.technologies large=true />
                        </div>
                    }
                })}
            <div class="mt-8 pt-8 border-t border-white/10">
                <h4 class="text-lg font-semibold mb-3">"Key Achievements"</h4>
                <ul class="space-y-2">
                    {entry
                        .achievements
                        .iter()
                        .map(|achievement| {
                            view! {
                                <li class="flex items-start gap-2">
                                    <div class="w-2 h-2 rounded-full bg-cyan mt-2"></div>
                                    <span>{*achievement}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
