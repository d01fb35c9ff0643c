//! Wall-clock media element on a background thread
//!
//! Lock-free split between the UI and the clock thread:
//! - Commands sent via `rtrb` SPSC ringbuffer (UI → clock)
//! - State read via atomics (clock → UI)
//! - Events delivered over an `mpsc` channel (clock → UI subscription)

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use super::clock::{MediaClock, DEFAULT_TIMEUPDATE_INTERVAL};
use super::{MediaCommand, MediaElement, MediaError, MediaEvent};

/// Clock thread wake-up period
const CLOCK_TICK: Duration = Duration::from_millis(4);

/// Command queue capacity
const COMMAND_CAPACITY: usize = 64;

/// Create a media command channel
///
/// Returns (sender, receiver) pair with 64-command capacity
fn media_command_channel() -> (rtrb::Producer<MediaCommand>, rtrb::Consumer<MediaCommand>) {
    rtrb::RingBuffer::new(COMMAND_CAPACITY)
}

/// What the clock plays
#[derive(Debug, Clone, PartialEq)]
pub struct MediaSource {
    /// Display name (file name of the video)
    pub name: String,
    /// Duration in seconds
    pub duration: f64,
    /// Cadence of `timeupdate` events while playing
    pub timeupdate_interval: Duration,
}

impl MediaSource {
    pub fn new(name: impl Into<String>, duration: f64) -> Self {
        Self {
            name: name.into(),
            duration,
            timeupdate_interval: DEFAULT_TIMEUPDATE_INTERVAL,
        }
    }
}

/// Lock-free atomics for the UI to read clock state
struct MediaAtomics {
    /// Position in seconds (`f64` bits)
    position: AtomicU64,
    /// Duration in seconds (`f64` bits), `NaN` until loaded
    duration: AtomicU64,
    /// Whether the clock is running
    playing: AtomicBool,
}

impl MediaAtomics {
    fn new() -> Self {
        Self {
            position: AtomicU64::new(0.0f64.to_bits()),
            duration: AtomicU64::new(f64::NAN.to_bits()),
            playing: AtomicBool::new(false),
        }
    }

    fn publish(&self, clock: &MediaClock) {
        self.position.store(clock.position().to_bits(), Ordering::Relaxed);
        self.duration.store(clock.duration().to_bits(), Ordering::Relaxed);
        self.playing.store(clock.is_playing(), Ordering::Relaxed);
    }

    fn position(&self) -> f64 {
        f64::from_bits(self.position.load(Ordering::Relaxed))
    }

    fn duration(&self) -> f64 {
        f64::from_bits(self.duration.load(Ordering::Relaxed))
    }

    fn is_playing(&self) -> bool {
        self.playing.load(Ordering::Relaxed)
    }
}

/// Media element backed by a [`MediaClock`] thread
///
/// Dropping the handle stops and joins the thread.
pub struct ClockMedia {
    source: MediaSource,
    commands: rtrb::Producer<MediaCommand>,
    atomics: Arc<MediaAtomics>,
    events: Arc<Mutex<Receiver<MediaEvent>>>,
    stop: Arc<AtomicBool>,
    thread: Option<JoinHandle<()>>,
}

impl ClockMedia {
    /// Start the clock thread; metadata loads immediately
    pub fn spawn(source: MediaSource) -> Result<Self, MediaError> {
        let (producer, consumer) = media_command_channel();
        let (event_tx, event_rx) = mpsc::channel();
        let atomics = Arc::new(MediaAtomics::new());
        let stop = Arc::new(AtomicBool::new(false));

        let clock = MediaClock::new(source.duration, source.timeupdate_interval);
        let thread = thread::Builder::new()
            .name("media-clock".to_string())
            .spawn({
                let atomics = Arc::clone(&atomics);
                let stop = Arc::clone(&stop);
                move || run_clock(clock, consumer, atomics, event_tx, stop)
            })?;

        log::info!(
            "ClockMedia: started '{}' ({:.1}s, timeupdate every {:?})",
            source.name,
            source.duration,
            source.timeupdate_interval
        );

        Ok(Self {
            source,
            commands: producer,
            atomics,
            events: Arc::new(Mutex::new(event_rx)),
            stop,
            thread: Some(thread),
        })
    }

    pub fn source(&self) -> &MediaSource {
        &self.source
    }

    /// Shared receiver for the clock's events
    pub fn events(&self) -> Arc<Mutex<Receiver<MediaEvent>>> {
        Arc::clone(&self.events)
    }

    fn send(&mut self, command: MediaCommand) -> Result<(), MediaError> {
        if self.commands.is_abandoned() {
            return Err(MediaError::Disconnected);
        }
        self.commands.push(command).map_err(|e| match e {
            rtrb::PushError::Full(_) => MediaError::QueueFull,
        })
    }
}

impl MediaElement for ClockMedia {
    fn current_time(&self) -> f64 {
        self.atomics.position()
    }

    fn duration(&self) -> f64 {
        self.atomics.duration()
    }

    fn paused(&self) -> bool {
        !self.atomics.is_playing()
    }

    fn play(&mut self) -> Result<(), MediaError> {
        self.send(MediaCommand::Play)
    }

    fn pause(&mut self) -> Result<(), MediaError> {
        self.send(MediaCommand::Pause)
    }

    fn seek(&mut self, time: f64) -> Result<(), MediaError> {
        if !time.is_finite() {
            return Err(MediaError::InvalidTime(time));
        }
        self.send(MediaCommand::Seek(time))
    }
}

impl Drop for ClockMedia {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                log::warn!("ClockMedia: clock thread panicked");
            }
        }
    }
}

fn run_clock(
    mut clock: MediaClock,
    mut commands: rtrb::Consumer<MediaCommand>,
    atomics: Arc<MediaAtomics>,
    events: Sender<MediaEvent>,
    stop: Arc<AtomicBool>,
) {
    let mut pending = Vec::new();
    clock.load(&mut pending);
    let mut last = Instant::now();

    while !stop.load(Ordering::Relaxed) {
        while let Ok(command) = commands.pop() {
            log::debug!("media-clock: {:?}", command);
            clock.apply(command, &mut pending);
        }

        let now = Instant::now();
        clock.advance(now - last, &mut pending);
        last = now;
        atomics.publish(&clock);

        for event in pending.drain(..) {
            if events.send(event).is_err() {
                log::debug!("media-clock: event receiver dropped, stopping");
                return;
            }
        }

        thread::sleep(CLOCK_TICK);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wait_for(media: &ClockMedia, mut predicate: impl FnMut(&ClockMedia) -> bool) -> bool {
        let deadline = Instant::now() + Duration::from_secs(2);
        while Instant::now() < deadline {
            if predicate(media) {
                return true;
            }
            thread::sleep(Duration::from_millis(2));
        }
        false
    }

    #[test]
    fn test_loads_metadata() {
        let media = ClockMedia::spawn(MediaSource::new("clip.mp4", 30.0)).unwrap();
        let events = media.events();
        let first = events
            .lock()
            .unwrap()
            .recv_timeout(Duration::from_secs(2))
            .unwrap();
        assert_eq!(first, MediaEvent::LoadedMetadata { duration: 30.0 });
        assert!(wait_for(&media, |m| m.duration() == 30.0));
        assert!(media.paused());
    }

    #[test]
    fn test_seek_and_play_round_trip() {
        let mut media = ClockMedia::spawn(MediaSource::new("clip.mp4", 30.0)).unwrap();
        media.seek(12.0).unwrap();
        assert!(wait_for(&media, |m| m.current_time() == 12.0));

        media.play().unwrap();
        assert!(wait_for(&media, |m| !m.paused()));
        assert!(wait_for(&media, |m| m.current_time() > 12.0));

        media.toggle().unwrap();
        assert!(wait_for(&media, |m| m.paused()));
    }

    #[test]
    fn test_rejects_non_finite_seek() {
        let mut media = ClockMedia::spawn(MediaSource::new("clip.mp4", 30.0)).unwrap();
        assert!(matches!(media.seek(f64::NAN), Err(MediaError::InvalidTime(_))));
        assert!(matches!(
            media.seek(f64::INFINITY),
            Err(MediaError::InvalidTime(_))
        ));
    }

    #[test]
    fn test_atomics_mirror_clock() {
        let atomics = MediaAtomics::new();
        assert!(atomics.duration().is_nan());
        assert_eq!(atomics.position(), 0.0);

        let mut clock = MediaClock::new(30.0, DEFAULT_TIMEUPDATE_INTERVAL);
        let mut events = Vec::new();
        clock.load(&mut events);
        clock.apply(MediaCommand::Seek(7.5), &mut events);
        atomics.publish(&clock);
        assert_eq!(atomics.duration(), 30.0);
        assert_eq!(atomics.position(), 7.5);
        assert!(!atomics.is_playing());
    }

    #[test]
    fn test_command_channel_capacity() {
        let (mut producer, _consumer) = media_command_channel();
        for _ in 0..COMMAND_CAPACITY {
            producer.push(MediaCommand::Play).unwrap();
        }
        assert!(producer.push(MediaCommand::Pause).is_err());
    }
}
