use std::{
    cell::Cell,
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
    rc::Rc,
    time::Duration,
};

use kk_studios_lib::{
    playback::{MediaError, MediaResource},
    signal::{Listener, ResourceSignal, SignalHub, Subscription},
};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("couldn't initialize default audio source")]
    Stream(#[from] rodio::StreamError),
    #[error("couldn't create audio sink")]
    Play(#[from] rodio::PlayError),
    #[error("couldn't decode audio file")]
    Decode(#[from] rodio::decoder::DecoderError),

    #[error("couldn't open file")]
    IO(#[from] io::Error),
}

impl From<AudioError> for MediaError {
    fn from(e: AudioError) -> Self {
        match e {
            AudioError::Stream(_) => MediaError::NoOutput,
            AudioError::Decode(e) => MediaError::Decode(e.to_string()),
            e @ (AudioError::Play(_) | AudioError::IO(_)) => MediaError::NotReady(e.to_string()),
        }
    }
}

/// The default output device, shared by both decks. Sound stops when it is
/// dropped.
pub struct AudioOutput {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl AudioOutput {
    pub fn open() -> Result<AudioOutput, AudioError> {
        let (_stream, handle) = OutputStream::try_default()?;
        Ok(AudioOutput { _stream, handle })
    }
}

/// A deck's audio file played through rodio.
///
/// The file is decoded into a paused sink on the first play or seek, and
/// again after it has run out. rodio has no end-of-stream callback, so
/// [`MediaResource::poll`] watches for the sink draining.
pub struct RodioResource {
    path: PathBuf,
    output: Option<Rc<AudioOutput>>,
    sink: Option<Sink>,
    duration: Option<Duration>,
    // the current sink's end has been reported
    ended: Cell<bool>,
    hub: SignalHub,
}

impl RodioResource {
    pub fn new(path: impl Into<PathBuf>, output: Option<Rc<AudioOutput>>) -> Self {
        Self {
            path: path.into(),
            output,
            sink: None,
            duration: None,
            ended: Cell::new(false),
            hub: SignalHub::new(),
        }
    }

    fn load(&mut self, output: &AudioOutput) -> Result<(), AudioError> {
        let file = BufReader::new(File::open(&self.path)?);
        let source = Decoder::new(file)?;
        self.duration = source.total_duration();

        let sink = Sink::try_new(&output.handle)?;
        sink.pause();
        sink.append(source);
        self.sink = Some(sink);
        self.ended.set(false);

        info!("loaded {:?} ({:?})", self.path, self.duration);
        Ok(())
    }

    /// Makes sure a sink holding the whole file is ready, reloading it once
    /// it has drained.
    fn ensure_loaded(&mut self) -> Result<&Sink, MediaError> {
        let Some(output) = self.output.clone() else {
            return Err(MediaError::NoOutput);
        };
        if self.sink.as_ref().is_none_or(Sink::empty) {
            self.load(&output)?;
        }
        self.sink
            .as_ref()
            .ok_or_else(|| MediaError::NotReady(format!("{:?} isn't loaded", self.path)))
    }
}

impl MediaResource for RodioResource {
    fn play(&mut self) -> Result<(), MediaError> {
        self.ensure_loaded()?.play();
        self.hub.emit(ResourceSignal::Started);
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(sink) = &self.sink {
            sink.pause();
            self.hub.emit(ResourceSignal::Paused);
        }
    }

    fn is_playing(&self) -> bool {
        self.sink
            .as_ref()
            .is_some_and(|sink| !sink.is_paused() && !sink.empty())
    }

    fn position(&self) -> Duration {
        self.sink.as_ref().map_or(Duration::ZERO, Sink::get_pos)
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn seek_to(&mut self, position: Duration) -> Result<(), MediaError> {
        self.ensure_loaded()?;
        // the length is only known once the file has been decoded
        let position = self.duration.map_or(position, |total| position.min(total));
        self.sink.as_ref().map_or(Ok(()), |sink| {
            sink.try_seek(position)
                .map_err(|e| MediaError::Seek(e.to_string()))
        })
    }

    fn subscribe(&mut self, listener: Listener) -> Subscription {
        self.hub.subscribe(listener)
    }

    fn poll(&self) {
        if !self.ended.get() && self.sink.as_ref().is_some_and(Sink::empty) {
            debug!("{:?} ran out", self.path);
            self.ended.set(true);
            self.hub.emit(ResourceSignal::Ended);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_without_output_fails_cleanly() {
        let mut resource = RodioResource::new("assets/production.wav", None);
        assert!(matches!(resource.play(), Err(MediaError::NoOutput)));
        assert!(!resource.is_playing());
        assert_eq!(resource.position(), Duration::ZERO);
    }

    /// 16-bit mono PCM silence.
    fn write_silent_wav(path: &std::path::Path, secs: u32) {
        const RATE: u32 = 8000;
        let data_len = RATE * 2 * secs;
        let mut bytes = Vec::with_capacity(44 + data_len as usize);
        bytes.extend_from_slice(b"RIFF");
        bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
        bytes.extend_from_slice(b"WAVEfmt ");
        bytes.extend_from_slice(&16u32.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes());
        bytes.extend_from_slice(&1u16.to_le_bytes());
        bytes.extend_from_slice(&RATE.to_le_bytes());
        bytes.extend_from_slice(&(RATE * 2).to_le_bytes());
        bytes.extend_from_slice(&2u16.to_le_bytes());
        bytes.extend_from_slice(&16u16.to_le_bytes());
        bytes.extend_from_slice(b"data");
        bytes.extend_from_slice(&data_len.to_le_bytes());
        bytes.resize(44 + data_len as usize, 0);
        std::fs::write(path, bytes).unwrap();
    }

    #[test]
    fn seek_without_output_only_fails_for_lack_of_output() {
        let mut resource = RodioResource::new("assets/mixing.wav", None);
        assert!(matches!(
            resource.seek_to(Duration::from_secs(3)),
            Err(MediaError::NoOutput)
        ));
        assert_eq!(resource.duration(), None);
    }

    #[test]
    fn seek_before_first_play_loads_the_file() {
        // machines without a sound card can't get this far
        let Ok(output) = AudioOutput::open() else {
            return;
        };
        let path = std::env::temp_dir().join("kk_studios_seek_before_play.wav");
        write_silent_wav(&path, 2);
        let mut resource = RodioResource::new(&path, Some(Rc::new(output)));

        let result = resource.seek_to(Duration::from_secs(1));

        let _ = std::fs::remove_file(&path);
        assert!(result.is_ok());
        assert_eq!(resource.duration(), Some(Duration::from_secs(2)));
        assert!(!resource.is_playing());
    }

    #[test]
    fn seek_on_missing_file_tries_to_load_it() {
        let Ok(output) = AudioOutput::open() else {
            return;
        };
        let mut resource = RodioResource::new("missing/deck.wav", Some(Rc::new(output)));
        assert!(matches!(
            resource.seek_to(Duration::from_secs(1)),
            Err(MediaError::NotReady(_))
        ));
    }

    #[test]
    fn poll_without_sink_stays_quiet() {
        let mut resource = RodioResource::new("assets/mixing.wav", None);
        let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = std::sync::Arc::clone(&seen);
        let _sub = resource.subscribe(Box::new(move |s| sink.lock().unwrap().push(s)));
        resource.poll();
        assert!(seen.lock().unwrap().is_empty());
    }
}
