use leptos::prelude::*;

use super::components::{Monogram, SocialLinks};
use crate::content::PROFILE;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-white/10 py-8">
            <div class="container mx-auto px-4 flex flex-col md:flex-row justify-between items-center gap-4">
                <div class="flex items-center gap-2">
                    <Monogram small=true />
                    <span class="text-muted text-sm">
                        {format!("© {} {}. All rights reserved.", env!("BUILD_YEAR"), PROFILE.name)}
                    </span>
                </div>
                <SocialLinks />
            </div>
        </footer>
    }
}
