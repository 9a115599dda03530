use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

/// The viewport hosting the carousel. The gallery only ever asks it to move.
pub trait ScrollSurface {
    fn scroll_by(&mut self, offset: f64, smooth: bool);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryImage {
    id: Box<str>,
    source: Box<str>,
}

impl GalleryImage {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

#[derive(Debug, Clone, Default)]
pub struct Gallery {
    images: Vec<GalleryImage>,
    // absent means not liked
    liked: HashSet<Box<str>>,
    scroll_step: f64,
}

impl Gallery {
    pub fn new<I, S>(sources: I, scroll_step: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Box<str>>,
    {
        let images = sources
            .into_iter()
            .enumerate()
            .map(|(index, source)| GalleryImage {
                id: format!("slide-{index}").into(),
                source: source.into(),
            })
            .collect();

        Self {
            images,
            liked: HashSet::new(),
            scroll_step,
        }
    }

    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.liked.contains(id)
    }

    /// Flips the like on `id` and returns the new value. Ids that were never
    /// seen start out unliked.
    pub fn toggle_like(&mut self, id: &str) -> bool {
        let liked = if self.liked.remove(id) {
            false
        } else {
            self.liked.insert(id.into());
            true
        };
        debug!("{id} liked: {liked}");
        liked
    }

    pub fn liked_count(&self) -> usize {
        self.liked.len()
    }

    pub fn scroll_by<S: ScrollSurface>(
        &self,
        surface: &mut S,
        direction: ScrollDirection,
        amount: f64,
    ) {
        if !amount.is_finite() {
            return;
        }
        let amount = amount.abs();
        let offset = match direction {
            ScrollDirection::Left => -amount,
            ScrollDirection::Right => amount,
        };
        surface.scroll_by(offset, true);
    }

    pub fn scroll<S: ScrollSurface>(&self, surface: &mut S, direction: ScrollDirection) {
        self.scroll_by(surface, direction, self.scroll_step);
    }
}
