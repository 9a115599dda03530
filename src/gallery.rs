use dioxus::prelude::*;
use kk_studios_lib::{
    gallery::{ScrollDirection, ScrollSurface},
    AppMessage,
};

use crate::{app::SiteState, image::resolve_source};

const CAROUSEL_ID: &str = "gallery-carousel";

/// Scrolls an element of the page through the webview.
pub struct EvalScroll {
    element_id: &'static str,
}

impl EvalScroll {
    pub fn new(element_id: &'static str) -> Self {
        Self { element_id }
    }

    fn script(&self, offset: f64, smooth: bool) -> String {
        let behavior = if smooth { "smooth" } else { "auto" };
        format!(
            "document.getElementById('{}')?.scrollBy({{ left: {offset}, behavior: '{behavior}' }});",
            self.element_id
        )
    }
}

impl ScrollSurface for EvalScroll {
    fn scroll_by(&mut self, offset: f64, smooth: bool) {
        let _ = document::eval(&self.script(offset, smooth));
    }
}

#[component]
pub fn Gallery() -> Element {
    let state = use_context::<Signal<SiteState>>();
    // local files are inlined once, not on every render
    let slides = use_hook(|| {
        state
            .peek()
            .gallery
            .images()
            .iter()
            .map(|image| (image.id().to_string(), resolve_source(image.source())))
            .collect::<Vec<_>>()
    });

    let scroll = move |direction| {
        let mut surface = EvalScroll::new(CAROUSEL_ID);
        state.peek().gallery.scroll(&mut surface, direction);
    };

    rsx! {
        section { id: "gallery", class: "gallery",
            div { class: "carousel-frame",
                div { id: CAROUSEL_ID, class: "carousel",
                    for (index, (id, source)) in slides.into_iter().enumerate() {
                        Slide { key: "{index}", id, source, index }
                    }
                }
                button {
                    class: "carousel-arrow left",
                    onclick: move |_| scroll(ScrollDirection::Left),
                    "‹"
                }
                button {
                    class: "carousel-arrow right",
                    onclick: move |_| scroll(ScrollDirection::Right),
                    "›"
                }
            }
        }
    }
}

#[component]
fn Slide(id: String, source: String, index: usize) -> Element {
    let state = use_context::<Signal<SiteState>>();
    let tx = use_coroutine_handle::<AppMessage>();

    let liked = state.read().gallery.is_liked(&id);
    let like_class = if liked { "like liked" } else { "like" };
    let alt = format!("Slide {}", index + 1);

    rsx! {
        div { class: "slide",
            img { src: source, alt }
            button {
                class: like_class,
                title: if liked { "Unlike" } else { "Like" },
                onclick: move |_| tx.send(AppMessage::ToggleLike(id.clone())),
                "♥"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_targets_the_carousel() {
        let surface = EvalScroll::new(CAROUSEL_ID);
        assert_eq!(
            surface.script(-500.0, true),
            "document.getElementById('gallery-carousel')?.scrollBy({ left: -500, behavior: 'smooth' });"
        );
        assert!(surface.script(500.0, false).contains("behavior: 'auto'"));
    }
}
