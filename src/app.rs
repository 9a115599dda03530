use std::{rc::Rc, time::Duration};

use dioxus::prelude::*;
use futures_util::StreamExt;
use kk_studios_lib::{
    contact::{SimulatedSubmission, SubmissionBackend},
    playback::{TrackId, TrackProgress},
    AppMessage, AppState, SiteConfig,
};
use tracing::error;

use crate::{
    contact::Contact,
    gallery::Gallery,
    music::{AudioOutput, RodioResource},
    nav::Nav,
    sections::{About, Clients, Footer, MusicWork, News},
};

pub type SiteState = AppState<RodioResource>;

/// Whole-second deck progress, indexed like [`TrackId::ALL`]. It lives apart
/// from [`SiteState`] so the poll loop only re-renders the decks.
pub type DeckProgress = [TrackProgress; 2];

const TICK: Duration = Duration::from_millis(250);

fn build_state(config: &SiteConfig) -> SiteState {
    let output = match AudioOutput::open() {
        Ok(output) => Some(Rc::new(output)),
        Err(e) => {
            error!("{e}, audio decks are disabled");
            None
        }
    };
    AppState::new(
        config,
        RodioResource::new(&config.production_audio, output.clone()),
        RodioResource::new(&config.mixing_audio, output),
    )
}

#[component]
pub fn App() -> Element {
    let config = use_context::<SiteConfig>();
    let mut state = use_context_provider(|| Signal::new(build_state(&config)));
    let mut progress = use_context_provider(|| Signal::new(DeckProgress::default()));
    let backend = SimulatedSubmission {
        delay: config.submission_delay(),
    };

    use_coroutine(move |mut rx: UnboundedReceiver<AppMessage>| async move {
        while let Some(message) = rx.next().await {
            let submission = state.write().update(message);
            if let Some(submission) = submission {
                spawn(async move {
                    let result = backend.submit(&submission).await;
                    state.write().update(AppMessage::SubmissionFinished(result));
                });
            }
        }
    });

    use_future(move || async move {
        loop {
            tokio::time::sleep(TICK).await;
            state.peek().playback.poll();
            if state.peek().playback.has_pending_signals() {
                state.write().update(AppMessage::Tick);
            }
            let current = TrackId::ALL.map(|track| state.peek().playback.progress(track));
            if *progress.peek() != current {
                progress.set(current);
            }
        }
    });

    rsx! {
        div { class: "site",
            Nav {}
            main {
                About {}
                Clients {}
                MusicWork {}
                Gallery {}
                News {}
                Contact {}
            }
            Footer {}
        }
    }
}
