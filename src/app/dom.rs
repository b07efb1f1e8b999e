use leptos::prelude::{document, window};
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::interaction::{ScrollLock, SectionExtent, Viewport};

/// The browser window and `<body>`. Only touched from event handlers, so it
/// is never reached during server rendering.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomViewport;

pub type PageScrollLock = ScrollLock<DomViewport>;

impl Viewport for DomViewport {
    fn scroll_offset(&self) -> f64 {
        window().scroll_y().unwrap_or_default()
    }

    fn pin(&self, offset: f64) {
        let Some(body) = document().body() else {
            return;
        };
        let style = body.style();
        let _ = style.set_property("position", "fixed");
        let _ = style.set_property("top", &format!("-{offset}px"));
        let _ = style.set_property("width", "100%");
    }

    fn unpin(&self) {
        let Some(body) = document().body() else {
            return;
        };
        let style = body.style();
        for prop in ["position", "top", "width"] {
            let _ = style.remove_property(prop);
        }
    }

    fn restore(&self, offset: f64) {
        let opts = ScrollToOptions::new();
        opts.set_top(offset);
        opts.set_behavior(ScrollBehavior::Instant);
        window().scroll_to_with_scroll_to_options(&opts);
    }
}

/// Document-space extents of the sections with the given ids, in order.
/// Ids with no matching element are skipped.
pub fn measure_sections(ids: impl IntoIterator<Item = &'static str>) -> Vec<SectionExtent<'static>> {
    let doc = document();
    ids.into_iter()
        .filter_map(|id| {
            let el = doc.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()?;
            Some(SectionExtent {
                id,
                top: f64::from(el.offset_top()),
                height: f64::from(el.offset_height()),
            })
        })
        .collect()
}

pub fn scroll_to_section(id: &str) {
    if let Some(el) = document().get_element_by_id(id) {
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

#[cfg(feature = "hydrate")]
pub fn open_mail_client(link: &str) {
    if let Err(e) = window().location().set_href(link) {
        log::error!("couldn't open mail client: {e:?}");
    }
}
