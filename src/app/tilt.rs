use leptos::{ev::MouseEvent, html, prelude::*};

use crate::interaction::{Bounds, TiltTransform};

/// Tilts its children toward the pointer while hovered.
#[component]
pub fn Tilt(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    let el = NodeRef::<html::Div>::new();
    let (tilt, set_tilt) = signal(TiltTransform::NEUTRAL);

    let on_move = move |ev: MouseEvent| {
        let Some(el) = el.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let bounds = Bounds {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        };
        set_tilt(TiltTransform::from_pointer(
            bounds,
            f64::from(ev.client_x()),
            f64::from(ev.client_y()),
        ));
    };

    view! {
        <div
            node_ref=el
            class=format!("{class} transition-all duration-200 rounded-xl")
            style=move || format!("transform: {}; transform-style: preserve-3d;", tilt().css())
            on:mousemove=on_move
            on:mouseleave=move |_| set_tilt(TiltTransform::NEUTRAL)
        >
            {children()}
        </div>
    }
}
