use leptos::prelude::*;
use leptos_meta::Title;

use super::about::About;
use super::contact::ContactSection;
use super::hero::Hero;
use super::projects::ProjectsSection;
use super::timeline::TimelineSection;
use crate::content::{EDUCATION, EXPERIENCE, LEADERSHIP};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <ProjectsSection />
        <TimelineSection
            id="experience"
            badge="Experience"
            title="Professional Journey"
            subtitle="My work experience and internships."
            entries=EXPERIENCE
        />
        <TimelineSection
            id="leadership"
            badge="Leadership"
            title="Leadership & Extracurricular"
            subtitle="My contributions and leadership roles."
            entries=LEADERSHIP
        />
        <TimelineSection
            id="education"
            badge="Education"
            title="My Academic Background"
            subtitle="My educational journey and professional training."
            entries=EDUCATION
        />
        <ContactSection />
    }
}
