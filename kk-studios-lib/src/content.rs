//! Copy for the static sections of the page.

use crate::playback::TrackId;

pub const LOCATION: &str = "Kagarama, Kicukiro, Kigali, Rwanda";

pub const SERVICES: [&str; 5] = [
    "Recording & Mixing: High-quality vocal and instrumental recording",
    "Mastering: Final audio polishing for commercial release",
    "Beat Production: Custom beat creation tailored to artists",
    "Studio Rental: Hourly or project-based rental options",
    "Artist Development: Vocal performance, songwriting, and branding",
];

pub const EQUIPMENT: [(&str, &str); 8] = [
    ("Studio Monitors", "KRK Rokit 6 GEN 3, Behringer Truth B3031A, Yamaha NS10"),
    ("Microphones", "Rode NT1-A, Takstar SM10-B, Shure SM58"),
    ("Audio Interface", "Universal Audio Apollo Twin Duo"),
    ("Mic Preamp", "PreSonus Bluetube DUOPATH"),
    ("Mixing Console", "Yamaha AG03"),
    ("Closed-Back Headphones", "Audio Technica M50x (Black), M50rd (Limited Edition)"),
    ("Open-Back Headphones", "Samson SR850"),
    ("DAWs", "Pro Tools, FL Studio, Ableton Live"),
];

pub const OFFERS: [&str; 3] = [
    "Exclusive packages for emerging artists",
    "Discounts for bulk recording sessions",
    "Behind-the-scenes content creation (YouTube and more)",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceCard {
    pub title: &'static str,
    pub blurb: &'static str,
}

pub const SERVICE_CARDS: [ServiceCard; 5] = [
    ServiceCard {
        title: "Recording & Mixing",
        blurb: "High-quality vocal and instrumental capture, with precision-engineered mixing for pro sound.",
    },
    ServiceCard {
        title: "Mastering",
        blurb: "Final polish and enhancement to ensure your track shines across all platforms.",
    },
    ServiceCard {
        title: "Beat Production",
        blurb: "Custom beats designed to fit your style, energy, and story, from trap to gospel.",
    },
    ServiceCard {
        title: "Studio Rental",
        blurb: "Flexible hourly or full-day rentals in a world-class environment.",
    },
    ServiceCard {
        title: "Artist Development",
        blurb: "Hands-on coaching in vocals, songwriting, branding, and stage presence.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewsItem {
    pub title: &'static str,
    pub body: &'static str,
    pub image: &'static str,
    pub link_label: &'static str,
    pub link: &'static str,
}

pub const NEWS: [NewsItem; 3] = [
    NewsItem {
        title: "New Gear Arrived!",
        body: "We just upgraded with the Universal Audio Apollo x8, ready to take your mixes to the next level. Book your session today!",
        image: "https://images.unsplash.com/photo-1600880292203-757bb62b4baf",
        link_label: "Book a Session",
        link: "#contact",
    },
    NewsItem {
        title: "Open Mic Night!",
        body: "Join our monthly Open Mic at the studio and perform your latest work live. All genres welcome.",
        image: "https://images.unsplash.com/photo-1585386959984-a41552262b8e",
        link_label: "Register Now",
        link: "#contact",
    },
    NewsItem {
        title: "Collab with Top Artists",
        body: "This month, we welcomed Gentil Izere and Keffa to the studio for an exclusive gospel collab. Full story on our YouTube.",
        image: "https://images.unsplash.com/photo-1618005198919-d3d4b07a74d8",
        link_label: "Watch Now",
        link: "https://www.youtube.com/@yourstudio",
    },
];

pub const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("Instagram", "https://www.instagram.com/yourstudio"),
    ("Twitter", "https://twitter.com/yourstudio"),
    ("SoundCloud", "https://soundcloud.com/yourstudio"),
    ("YouTube", "https://www.youtube.com/@yourstudio"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackListing {
    pub title: &'static str,
    pub artist: &'static str,
    pub duration: &'static str,
    pub explicit: bool,
}

const fn listing(
    title: &'static str,
    artist: &'static str,
    duration: &'static str,
    explicit: bool,
) -> TrackListing {
    TrackListing {
        title,
        artist,
        duration,
        explicit,
    }
}

const PRODUCTION_LISTINGS: [TrackListing; 4] = [
    listing("Slay3r", "Playboi Carti", "02:44", true),
    listing("KEHLANI", "Jordan Adetunji", "02:02", false),
    listing("Body On Me", "SAINt JHN", "02:30", true),
    listing("92 Explorer", "Post Malone", "03:31", false),
];

const MIXING_LISTINGS: [TrackListing; 4] = [
    listing("Pain 1993 (with Playboi Carti)", "Drake, Playboi Carti", "02:29", true),
    listing("@ MEH", "Playboi Carti", "02:46", true),
    listing("Roses (Imanbek Remix)", "SAINt JHN, J Balvin, Imanbek", "03:28", true),
    listing("Eleven (feat. Summer Walker)", "Khalid", "03:26", false),
];

/// The card shown around each deck on the music-work section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckCard {
    pub heading: &'static str,
    pub handle: &'static str,
    pub listings: &'static [TrackListing],
}

pub fn deck_card(track: TrackId) -> DeckCard {
    match track {
        TrackId::Production => DeckCard {
            heading: "Roark Bailey - Production",
            handle: "roarkbailey",
            listings: &PRODUCTION_LISTINGS,
        },
        TrackId::Mixing => DeckCard {
            heading: "Roark Bailey - Mixing",
            handle: "roarkbailey",
            listings: &MIXING_LISTINGS,
        },
    }
}
