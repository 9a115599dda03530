use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};
use tracing::{debug, error, info, warn};

use crate::signal::{Listener, ResourceSignal, Subscription};

/// The two decks on the music-work section.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackId {
    Production,
    Mixing,
}

impl TrackId {
    pub const ALL: [TrackId; 2] = [TrackId::Production, TrackId::Mixing];

    pub fn other(self) -> TrackId {
        match self {
            TrackId::Production => TrackId::Mixing,
            TrackId::Mixing => TrackId::Production,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TrackId::Production => "Production",
            TrackId::Mixing => "Mixing",
        }
    }
}

impl std::fmt::Display for TrackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug)]
pub enum MediaError {
    #[error("no audio output is available")]
    NoOutput,
    #[error("media isn't ready: {0}")]
    NotReady(String),
    #[error("couldn't decode media: {0}")]
    Decode(String),
    #[error("couldn't seek: {0}")]
    Seek(String),
}

/// Something that actually produces sound.
///
/// Implementations report their own state changes through the listeners
/// registered with [`MediaResource::subscribe`], including changes the
/// controller didn't ask for (end of stream, a system media key).
pub trait MediaResource {
    fn play(&mut self) -> Result<(), MediaError>;

    fn pause(&mut self);

    fn is_playing(&self) -> bool;

    fn position(&self) -> Duration;

    /// `None` until the length of the media is known.
    fn duration(&self) -> Option<Duration>;

    fn seek_to(&mut self, position: Duration) -> Result<(), MediaError>;

    fn subscribe(&mut self, listener: Listener) -> Subscription;

    /// Gives resources that can't push notifications a chance to emit them.
    fn poll(&self) {}
}

/// What a deck's progress readout shows, to the second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackProgress {
    pub elapsed_secs: u64,
    pub total_secs: Option<u64>,
}

struct Deck<R> {
    resource: R,
    playing: bool,
    _subscription: Subscription,
}

/// Transport for the production and mixing decks. At most one of them is
/// playing at any time.
pub struct PlaybackController<R: MediaResource> {
    production: Deck<R>,
    mixing: Deck<R>,
    seek_step: Duration,
    signals: UnboundedReceiver<(TrackId, ResourceSignal)>,
}

impl<R: MediaResource> PlaybackController<R> {
    pub fn new(mut production: R, mut mixing: R, seek_step: Duration) -> Self {
        let (tx, signals) = unbounded_channel();

        let listener = |track: TrackId| -> Listener {
            let tx = tx.clone();
            Box::new(move |signal| {
                let _ = tx.send((track, signal));
            })
        };
        let production_sub = production.subscribe(listener(TrackId::Production));
        let mixing_sub = mixing.subscribe(listener(TrackId::Mixing));

        Self {
            production: Deck {
                resource: production,
                playing: false,
                _subscription: production_sub,
            },
            mixing: Deck {
                resource: mixing,
                playing: false,
                _subscription: mixing_sub,
            },
            seek_step,
            signals,
        }
    }

    fn deck(&self, track: TrackId) -> &Deck<R> {
        match track {
            TrackId::Production => &self.production,
            TrackId::Mixing => &self.mixing,
        }
    }

    fn deck_mut(&mut self, track: TrackId) -> &mut Deck<R> {
        match track {
            TrackId::Production => &mut self.production,
            TrackId::Mixing => &mut self.mixing,
        }
    }

    pub fn is_playing(&self, track: TrackId) -> bool {
        self.deck(track).playing
    }

    pub fn now_playing(&self) -> Option<TrackId> {
        TrackId::ALL.into_iter().find(|t| self.is_playing(*t))
    }

    pub fn position(&self, track: TrackId) -> Duration {
        self.deck(track).resource.position()
    }

    pub fn duration(&self, track: TrackId) -> Option<Duration> {
        self.deck(track).resource.duration()
    }

    pub fn progress(&self, track: TrackId) -> TrackProgress {
        TrackProgress {
            elapsed_secs: self.position(track).as_secs(),
            total_secs: self.duration(track).map(|d| d.as_secs()),
        }
    }

    pub fn seek_step(&self) -> Duration {
        self.seek_step
    }

    /// Starts `track`, stopping the other deck first. Returns whether
    /// playback actually started; a failure is logged and leaves the deck
    /// stopped.
    pub fn play(&mut self, track: TrackId) -> bool {
        let other = self.deck_mut(track.other());
        if other.playing || other.resource.is_playing() {
            other.resource.pause();
            other.playing = false;
            info!("paused {} to play {track}", track.other());
        }

        let deck = self.deck_mut(track);
        match deck.resource.play() {
            Ok(()) => {
                deck.playing = true;
                info!("playing {track}");
                true
            }
            Err(e) => {
                deck.playing = false;
                error!("couldn't start {track}: {e}");
                false
            }
        }
    }

    pub fn pause(&mut self, track: TrackId) {
        let deck = self.deck_mut(track);
        if !deck.playing {
            return;
        }
        deck.resource.pause();
        deck.playing = false;
        info!("paused {track}");
    }

    pub fn toggle(&mut self, track: TrackId) -> bool {
        if self.is_playing(track) {
            self.pause(track);
            false
        } else {
            self.play(track)
        }
    }

    /// Moves the playhead by `delta_secs`, clamped to the media's bounds.
    pub fn seek(&mut self, track: TrackId, delta_secs: f64) {
        if !delta_secs.is_finite() {
            return;
        }
        let resource = &mut self.deck_mut(track).resource;
        let current = resource.position().as_secs_f64();
        let mut target = (current + delta_secs).max(0.0);
        if let Some(duration) = resource.duration() {
            target = target.min(duration.as_secs_f64());
        }

        let Ok(target) = Duration::try_from_secs_f64(target) else {
            warn!("ignoring out of range seek on {track}: {target}");
            return;
        };
        debug!("seeking {track} to {target:?}");
        if let Err(e) = resource.seek_to(target) {
            warn!("{e}");
        }
    }

    pub fn seek_forward(&mut self, track: TrackId) {
        self.seek(track, self.seek_step.as_secs_f64());
    }

    pub fn seek_backward(&mut self, track: TrackId) {
        self.seek(track, -self.seek_step.as_secs_f64());
    }

    /// Brings the deck's flag in line with its resource after a
    /// notification.
    ///
    /// The signal only says *that* something changed; the resource is asked
    /// what its state is now, so notifications echoing commands that have
    /// since been superseded are harmless.
    pub fn handle_signal(&mut self, track: TrackId, signal: ResourceSignal) {
        let now_playing = self.deck(track).resource.is_playing();
        debug!("{track} signalled {signal:?}, playing: {now_playing}");

        if now_playing && self.is_playing(track.other()) {
            self.pause(track.other());
        }
        self.deck_mut(track).playing = now_playing;

        if signal == ResourceSignal::Ended {
            info!("{track} finished");
        }
    }

    /// Lets both resources report anything they only notice when asked.
    pub fn poll(&self) {
        self.production.resource.poll();
        self.mixing.resource.poll();
    }

    pub fn has_pending_signals(&self) -> bool {
        !self.signals.is_empty()
    }

    /// Polls both resources and applies everything they reported. Returns the
    /// number of signals handled.
    pub fn tick(&mut self) -> usize {
        self.poll();

        let mut handled = 0;
        while let Ok((track, signal)) = self.signals.try_recv() {
            self.handle_signal(track, signal);
            handled += 1;
        }
        handled
    }
}
