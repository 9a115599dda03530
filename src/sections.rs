use dioxus::prelude::*;
use kk_studios_lib::{
    content::{deck_card, TrackListing, EQUIPMENT, LOCATION, NEWS, OFFERS, SERVICES, SERVICE_CARDS},
    playback::TrackId,
    AppMessage, SiteConfig,
};

use crate::app::{DeckProgress, SiteState};

/// `m:ss`, or `h:mm:ss` past the hour.
fn clock(secs: u64) -> String {
    let (h, m, s) = (secs / 3600, secs / 60 % 60, secs % 60);
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m}:{s:02}")
    }
}

#[component]
pub fn About() -> Element {
    let studio = use_context::<SiteConfig>().studio_name;

    rsx! {
        section { id: "about", class: "about",
            img {
                src: "https://images.unsplash.com/photo-1529626455594-4ff0802cfb7e",
                alt: "{studio}",
            }
            div {
                h2 { "{studio}" }
                p {
                    strong { "Location: " }
                    {LOCATION}
                }
                h3 { "Services Offered" }
                ul {
                    for service in SERVICES {
                        li { key: "{service}", {service} }
                    }
                }
                h3 { "Studio Equipment" }
                ul {
                    for (kind, gear) in EQUIPMENT {
                        li { key: "{kind}",
                            strong { "{kind}: " }
                            {gear}
                        }
                    }
                }
                h3 { "Special Features & Offers" }
                ul {
                    for offer in OFFERS {
                        li { key: "{offer}", {offer} }
                    }
                }
                a { class: "cta", href: "#clients", "View Clients" }
            }
        }
    }
}

#[component]
pub fn Clients() -> Element {
    rsx! {
        section { id: "clients", class: "clients",
            h2 { "Trusted by Top Talent" }
            p {
                "From chart-topping artists to rising stars, KK Studios offers a full spectrum of professional services designed to elevate your sound and brand."
            }
            div { class: "service-cards",
                for card in SERVICE_CARDS {
                    div { key: "{card.title}", class: "service-card",
                        h3 { {card.title} }
                        p { {card.blurb} }
                    }
                }
            }
        }
    }
}

#[component]
pub fn MusicWork() -> Element {
    rsx! {
        section { id: "music", class: "music-work",
            h2 { "MUSIC WORK" }
            div { class: "decks",
                for track in TrackId::ALL {
                    Deck { key: "{track}", track }
                }
            }
        }
    }
}

#[component]
fn Deck(track: TrackId) -> Element {
    let state = use_context::<Signal<SiteState>>();
    let progress = use_context::<Signal<DeckProgress>>();
    let tx = use_coroutine_handle::<AppMessage>();
    let card = deck_card(track);

    let (playing, step) = {
        let state = state.read();
        (
            state.playback.is_playing(track),
            state.playback.seek_step().as_secs(),
        )
    };
    let slot = TrackId::ALL.iter().position(|t| *t == track).unwrap_or_default();
    let deck = progress.read()[slot];
    let elapsed = match deck.total_secs {
        Some(total) => format!("{} / {}", clock(deck.elapsed_secs), clock(total)),
        None => clock(deck.elapsed_secs),
    };
    let deck_class = if playing { "deck playing" } else { "deck" };

    rsx! {
        div { class: deck_class,
            div { class: "deck-header",
                h3 { {card.heading} }
                p { {card.handle} }
                span { class: "badge", "Preview" }
            }
            div { class: "transport",
                button {
                    title: "Back {step} seconds",
                    onclick: move |_| tx.send(AppMessage::SeekBackward(track)),
                    "-{step}s"
                }
                button {
                    class: "play-toggle",
                    onclick: move |_| tx.send(AppMessage::TogglePlayback(track)),
                    if playing { "Pause" } else { "Play" }
                }
                button {
                    title: "Forward {step} seconds",
                    onclick: move |_| tx.send(AppMessage::SeekForward(track)),
                    "+{step}s"
                }
                span { class: "elapsed", "{elapsed}" }
            }
            ul { class: "track-list",
                for (index, listing) in card.listings.iter().enumerate() {
                    TrackRow { key: "{index}", number: index + 1, listing: *listing }
                }
            }
        }
    }
}

#[component]
fn TrackRow(number: usize, listing: TrackListing) -> Element {
    rsx! {
        li { class: "track-row",
            div {
                p { class: "track-title", "{number}. {listing.title}" }
                p { class: "track-artist",
                    if listing.explicit {
                        span { class: "explicit", "E" }
                    }
                    {listing.artist}
                }
            }
            span { class: "duration", {listing.duration} }
        }
    }
}

#[component]
pub fn News() -> Element {
    rsx! {
        section { id: "news", class: "news",
            h2 { "Studio News & Highlights" }
            p {
                "Stay in the loop with our latest music drops, studio collabs, events, and behind-the-scenes moments that define the KK Studios experience."
            }
            div { class: "news-items",
                for item in NEWS {
                    article { key: "{item.title}", class: "news-item",
                        img { src: item.image, alt: item.title }
                        h3 { {item.title} }
                        p { {item.body} }
                        a { href: item.link, "{item.link_label} →" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Footer() -> Element {
    let studio = use_context::<SiteConfig>().studio_name;
    rsx! {
        footer { class: "footer", "© {studio}. All rights reserved." }
    }
}
