use contact::{ContactField, ContactForm, ContactSubmission, SubmissionError};
use gallery::Gallery;
use nav::NavDrawer;
use playback::{MediaResource, PlaybackController, TrackId};
use signal::ResourceSignal;

pub mod config;
pub mod contact;
pub mod content;
pub mod gallery;
pub mod nav;
pub mod playback;
pub mod signal;

pub use config::SiteConfig;

pub struct AppState<R: MediaResource> {
    pub playback: PlaybackController<R>,
    pub gallery: Gallery,
    pub contact: ContactForm,
    pub nav: NavDrawer,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    TogglePlayback(TrackId),
    Play(TrackId),
    Pause(TrackId),
    SeekForward(TrackId),
    SeekBackward(TrackId),
    Resource(TrackId, ResourceSignal),
    Tick,

    ToggleLike(String),

    ToggleNav,
    CloseNav,

    EditContact(ContactField, String),
    SubmitContact,
    SubmissionFinished(Result<(), SubmissionError>),
}

impl<R: MediaResource> AppState<R> {
    pub fn new(config: &SiteConfig, production: R, mixing: R) -> Self {
        Self {
            playback: PlaybackController::new(production, mixing, config.seek_step()),
            gallery: Gallery::new(config.gallery.iter().map(String::as_str), config.scroll_step),
            contact: ContactForm::new(),
            nav: NavDrawer::default(),
        }
    }

    /// Applies `message`. A returned submission has to be delivered by the
    /// caller, who reports back with [`AppMessage::SubmissionFinished`].
    pub fn update(&mut self, message: AppMessage) -> Option<ContactSubmission> {
        match message {
            AppMessage::TogglePlayback(track) => {
                self.playback.toggle(track);
            }
            AppMessage::Play(track) => {
                self.playback.play(track);
            }
            AppMessage::Pause(track) => self.playback.pause(track),
            AppMessage::SeekForward(track) => self.playback.seek_forward(track),
            AppMessage::SeekBackward(track) => self.playback.seek_backward(track),
            AppMessage::Resource(track, signal) => self.playback.handle_signal(track, signal),
            AppMessage::Tick => {
                self.playback.tick();
            }
            AppMessage::ToggleLike(id) => {
                self.gallery.toggle_like(&id);
            }
            AppMessage::ToggleNav => self.nav.toggle(),
            AppMessage::CloseNav => self.nav.close(),
            AppMessage::EditContact(field, value) => self.contact.set_field(field, value),
            AppMessage::SubmitContact => return self.contact.begin_submit(),
            AppMessage::SubmissionFinished(result) => self.contact.finish(result),
        }
        None
    }
}
