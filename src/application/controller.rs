use std::time::Duration;

use log::{debug, info, warn};

use crate::domain::{Life, Point};

/// Render collaborator notified after every mutation.
/// Implementations get read-only access to the new generation.
pub trait View {
    fn render(&mut self, life: &Life);
}

/// Headless view for callers that pull state themselves
impl View for () {
    fn render(&mut self, _life: &Life) {}
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PlaybackState {
    #[default]
    Paused,
    Playing,
}

/// Rejected playback cadence.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlaybackError {
    #[error("Tick interval must be positive")]
    NonPositiveInterval,
    #[error("Tick interval must be finite, got {0} ms")]
    NonFiniteInterval(f64),
    #[error("Tick interval of {0} ms is out of range")]
    IntervalOutOfRange(f64),
    #[error("Speed must be a positive, finite number of steps per second, got {0}")]
    InvalidSpeed(f64),
}

/// Controller steps the automaton on a wall-clock cadence.
///
/// The driver calls [`Controller::tick`] as often as it likes; a generation
/// is computed only once the configured interval has elapsed since the last
/// step, and never more than one per tick, so a stalled driver skips time
/// instead of replaying it.
pub struct Controller<V: View> {
    life: Life,
    view: V,
    state: PlaybackState,
    interval: Duration,
    last_step: Option<Duration>,
}

impl<V: View> Controller<V> {
    /// Create a paused controller. Fails fast on a zero interval.
    pub fn new(life: Life, view: V, interval: Duration) -> Result<Self, PlaybackError> {
        validate_interval(interval)?;
        let mut controller = Self {
            life,
            view,
            state: PlaybackState::Paused,
            interval,
            last_step: None,
        };
        controller.render();
        Ok(controller)
    }

    pub fn play(&mut self) {
        if self.state != PlaybackState::Playing {
            info!("playback started at generation {}", self.life.generation());
            self.state = PlaybackState::Playing;
        }
    }

    pub fn pause(&mut self) {
        if self.state != PlaybackState::Paused {
            info!("playback paused at generation {}", self.life.generation());
            self.state = PlaybackState::Paused;
        }
    }

    pub fn toggle_playing(&mut self) {
        match self.state {
            PlaybackState::Playing => self.pause(),
            PlaybackState::Paused => self.play(),
        }
    }

    /// Advance one generation regardless of play state
    pub fn step(&mut self) {
        self.life.update();
        self.render();
    }

    /// Drive playback with the current time, measured from any fixed origin.
    ///
    /// The first tick after construction only records `now` as the reference
    /// point. Returns true if a generation was computed.
    pub fn tick(&mut self, now: Duration) -> bool {
        if self.state != PlaybackState::Playing {
            return false;
        }

        let Some(last) = self.last_step else {
            self.last_step = Some(now);
            return false;
        };

        if now < last.saturating_add(self.interval) {
            return false;
        }

        self.step();
        self.last_step = Some(now);
        true
    }

    /// Change the step cadence; takes effect on the next due check
    pub fn set_interval(&mut self, interval: Duration) -> Result<(), PlaybackError> {
        if let Err(err) = validate_interval(interval) {
            warn!("rejected tick interval {:?}: {}", interval, err);
            return Err(err);
        }
        if interval != self.interval {
            debug!("tick interval {:?} -> {:?}", self.interval, interval);
            self.interval = interval;
        }
        Ok(())
    }

    /// Change the step cadence from a millisecond value
    pub fn set_interval_ms(&mut self, millis: f64) -> Result<(), PlaybackError> {
        let interval = interval_from_ms(millis).inspect_err(|err| {
            warn!("rejected tick interval {} ms: {}", millis, err);
        })?;
        self.set_interval(interval)
    }

    /// Change the step cadence from a steps-per-second rate
    pub fn set_speed(&mut self, steps_per_second: f64) -> Result<(), PlaybackError> {
        if !steps_per_second.is_finite() || steps_per_second <= 0.0 {
            warn!("rejected speed {} steps/s", steps_per_second);
            return Err(PlaybackError::InvalidSpeed(steps_per_second));
        }
        self.set_interval_ms(1000.0 / steps_per_second)
    }

    /// Current cadence as steps per second
    pub fn speed(&self) -> f64 {
        1.0 / self.interval.as_secs_f64()
    }

    pub fn toggle(&mut self, point: Point) {
        self.life.toggle(point);
        self.render();
    }

    pub fn set_state(&mut self, point: Point, alive: bool) {
        if self.life.is_alive(point) != alive {
            self.life.set_state(point, alive);
            self.render();
        }
    }

    pub fn clear(&mut self) {
        self.life.clear();
        self.render();
    }

    /// Replace the grid with the given cells
    pub fn load_pattern(&mut self, points: impl IntoIterator<Item = Point>) {
        self.life.clear();
        self.life.add_alive_points(points);
        debug!("loaded pattern with {} cells", self.life.population());
        self.render();
    }

    pub fn alive_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.life.alive_points()
    }

    pub fn life(&self) -> &Life {
        &self.life
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Timestamp of the last tick-driven step (or the reference tick)
    pub fn last_step_time(&self) -> Option<Duration> {
        self.last_step
    }

    pub fn generation(&self) -> u64 {
        self.life.generation()
    }

    fn render(&mut self) {
        self.view.render(&self.life);
    }
}

pub fn validate_interval(interval: Duration) -> Result<(), PlaybackError> {
    if interval.is_zero() {
        return Err(PlaybackError::NonPositiveInterval);
    }
    Ok(())
}

/// Convert milliseconds into a non-zero interval
pub fn interval_from_ms(millis: f64) -> Result<Duration, PlaybackError> {
    if !millis.is_finite() {
        return Err(PlaybackError::NonFiniteInterval(millis));
    }
    if millis <= 0.0 {
        return Err(PlaybackError::NonPositiveInterval);
    }
    let interval = Duration::try_from_secs_f64(millis / 1000.0)
        .map_err(|_| PlaybackError::IntervalOutOfRange(millis))?;
    validate_interval(interval)?;
    Ok(interval)
}
