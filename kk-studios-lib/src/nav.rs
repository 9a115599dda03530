use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

pub const NAV_LINKS: [NavLink; 6] = [
    NavLink {
        label: "About",
        anchor: "about",
    },
    NavLink {
        label: "Clients",
        anchor: "clients",
    },
    NavLink {
        label: "Music",
        anchor: "music",
    },
    NavLink {
        label: "Gallery",
        anchor: "gallery",
    },
    NavLink {
        label: "News",
        anchor: "news",
    },
    NavLink {
        label: "Contact",
        anchor: "contact",
    },
];

/// The slide-out menu shown on narrow screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavDrawer {
    open: bool,
}

impl NavDrawer {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        debug!("nav drawer open: {}", self.open);
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_opens_and_closes() {
        let mut drawer = NavDrawer::default();
        assert!(!drawer.is_open());
        drawer.toggle();
        assert!(drawer.is_open());
        drawer.toggle();
        assert!(!drawer.is_open());
    }

    #[test]
    fn close_is_idempotent() {
        let mut drawer = NavDrawer::default();
        drawer.toggle();
        drawer.close();
        drawer.close();
        assert!(!drawer.is_open());
    }

    #[test]
    fn links_point_at_section_anchors() {
        let hrefs: Vec<_> = NAV_LINKS.iter().map(NavLink::href).collect();
        assert_eq!(hrefs[0], "#about");
        assert_eq!(hrefs[5], "#contact");
    }
}
