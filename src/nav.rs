use dioxus::prelude::*;
use kk_studios_lib::{nav::NAV_LINKS, AppMessage, SiteConfig};

use crate::app::SiteState;

#[component]
pub fn Nav() -> Element {
    let state = use_context::<Signal<SiteState>>();
    let config = use_context::<SiteConfig>();
    let tx = use_coroutine_handle::<AppMessage>();

    let open = state.read().nav.is_open();
    let links_class = if open { "nav-links open" } else { "nav-links" };
    let studio = config.studio_name;

    rsx! {
        nav { class: "site-nav",
            a { class: "brand", href: "#", "{studio}" }
            button {
                class: "drawer-toggle",
                title: "Menu",
                onclick: move |_| tx.send(AppMessage::ToggleNav),
                if open { "✕" } else { "☰" }
            }
            div { class: links_class,
                for link in NAV_LINKS {
                    a {
                        key: "{link.anchor}",
                        href: link.href(),
                        onclick: move |_| tx.send(AppMessage::CloseNav),
                        {link.label}
                    }
                }
            }
        }
    }
}
