//! Animation step controller
//!
//! [`AnimationController`] owns the authoritative step counter of the one
//! active animation and moves it through the playback state machine:
//!
//! ```text
//! Idle --setup--> Ready --start--> Playing --pause--> Paused
//!                   ^                 |  ^--start------'
//!                   |                 '--last step--> Completed
//!                   '------------------reset--------------'
//! ```
//!
//! The variant itself never advances; the controller asks it to describe
//! whatever step it is on. Rendering is pull-based: the host calls
//! [`AnimationController::draw_list`] at its own frame rate, independent of
//! the step ticks delivered through [`AnimationController::poll`].
//!
//! Variant faults stop at this boundary. A failing `render` produces a
//! placeholder frame, a failing `info` a placeholder [`DisplayInfo`], and a
//! failing `log_message` no log line; stepping carries on either way.

pub mod status;
pub mod ticker;

pub use status::{StatusBoard, StatusSink, LOG_CAPACITY};
pub use ticker::{IntervalTimer, TickSource};

use crate::animation::{
    create, palette, Animation, AnimationConfig, AnimationKind, CodeFocus, DisplayInfo, Theme,
    Variant,
};
use crate::render::{DrawList, Surface, TextStyle};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

/// Step interval used until the user changes the speed
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(1200);

/// Fastest allowed step interval
pub const MIN_TICK_INTERVAL: Duration = Duration::from_millis(300);

/// Slowest allowed step interval
pub const MAX_TICK_INTERVAL: Duration = Duration::from_millis(3000);

/// Playback state of the active animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Nothing loaded
    #[default]
    Idle,
    /// Loaded and at step 0
    Ready,
    Playing,
    Paused,
    /// At the last step
    Completed,
}

/// Everything the controller tracks about the active animation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationState {
    pub kind: Option<AnimationKind>,
    pub step: usize,
    pub max_steps: usize,
    pub playback: PlaybackState,
    pub tick_interval: Duration,
}

impl Default for AnimationState {
    fn default() -> Self {
        AnimationState {
            kind: None,
            step: 0,
            max_steps: 0,
            playback: PlaybackState::Idle,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

/// Snapshot of the active animation written by the export command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationExport {
    #[serde(rename = "type")]
    pub kind: AnimationKind,
    pub current_step: usize,
    pub max_steps: usize,
    pub config: AnimationConfig,
    pub theme: Theme,
    /// Seconds since the Unix epoch
    pub timestamp: u64,
}

/// Clamp a requested step interval to the supported range
pub fn clamp_interval(requested: Duration) -> Duration {
    requested.clamp(MIN_TICK_INTERVAL, MAX_TICK_INTERVAL)
}

pub struct AnimationController<S: StatusSink = StatusBoard, T: TickSource = IntervalTimer> {
    variant: Option<Variant>,
    state: AnimationState,
    config: AnimationConfig,
    theme: Theme,
    status: S,
    ticker: T,
}

impl Default for AnimationController {
    fn default() -> Self {
        AnimationController::new(StatusBoard::new(), IntervalTimer::new())
    }
}

impl<S: StatusSink, T: TickSource> AnimationController<S, T> {
    pub fn new(status: S, ticker: T) -> Self {
        AnimationController {
            variant: None,
            state: AnimationState::default(),
            config: AnimationConfig::default(),
            theme: Theme::default(),
            status,
            ticker,
        }
    }

    /// Builder-style theme selection before the first `setup`
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Load the animation named `name`, replacing the current one.
    /// Unknown names load the simple animation.
    pub fn setup(&mut self, name: &str, config: AnimationConfig) -> AnimationKind {
        let kind = AnimationKind::resolve(name);
        self.setup_kind(kind, config);
        kind
    }

    pub fn setup_kind(&mut self, kind: AnimationKind, config: AnimationConfig) {
        self.ticker.cancel();

        let config = config.bounded();
        let variant = create(kind, &config, self.theme);
        self.state = AnimationState {
            kind: Some(kind),
            step: 0,
            max_steps: variant.max_steps(),
            playback: PlaybackState::Ready,
            tick_interval: self.state.tick_interval,
        };
        self.variant = Some(variant);
        self.config = config;

        self.status.clear_log();
        self.publish(false);
        self.status.push_log(&format!(
            "{} animation ready ({} steps)",
            kind, self.state.max_steps
        ));
        info!("Loaded {} animation with {} steps", kind, self.state.max_steps);
    }

    /// Begin or resume playback now
    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    /// Begin or resume playback with the first tick one interval after `now`.
    ///
    /// Already playing is a no-op. A finished animation restarts from step 0.
    pub fn start_at(&mut self, now: Instant) {
        match self.state.playback {
            PlaybackState::Idle => {
                debug!("Ignoring start: no animation loaded");
                return;
            }
            PlaybackState::Playing => return,
            PlaybackState::Completed => self.rewind(),
            PlaybackState::Ready | PlaybackState::Paused => {
                if self.state.step >= self.state.max_steps {
                    self.rewind();
                }
            }
        }

        self.ticker.cancel();
        self.ticker.arm(now, self.state.tick_interval);
        self.state.playback = PlaybackState::Playing;
        debug!("Playing from step {}", self.state.step);
    }

    /// Stop ticking, keeping the current step
    pub fn pause(&mut self) {
        if self.state.playback != PlaybackState::Playing {
            return;
        }
        self.ticker.cancel();
        self.state.playback = PlaybackState::Paused;
        debug!("Paused at step {}", self.state.step);
    }

    /// `start` when stopped, `pause` when playing
    pub fn toggle(&mut self) {
        if self.state.playback == PlaybackState::Playing {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Advance one step by hand without starting playback.
    ///
    /// Returns whether the step counter moved.
    pub fn step(&mut self) -> bool {
        if self.variant.is_none() {
            return false;
        }
        if self.state.step >= self.state.max_steps {
            debug!("Ignoring step: animation already complete");
            return false;
        }

        self.advance();
        if self.state.playback == PlaybackState::Ready {
            self.state.playback = PlaybackState::Paused;
        }
        true
    }

    /// Back to step 0 and `Ready`, from any state
    pub fn reset(&mut self) {
        self.ticker.cancel();
        if self.variant.is_none() {
            return;
        }
        self.rewind();
        self.state.playback = PlaybackState::Ready;
        debug!("Reset {:?} animation", self.state.kind);
    }

    /// Fire a step tick if one is due at `now`. Returns whether it fired.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.state.playback != PlaybackState::Playing || !self.ticker.due(now) {
            return false;
        }
        self.tick();
        true
    }

    /// Change the step interval, clamped to 300..=3000 ms. While playing the
    /// tick source is re-armed at the new rate and the step is kept.
    pub fn set_speed(&mut self, requested: Duration) -> Duration {
        self.set_speed_at(requested, Instant::now())
    }

    pub fn set_speed_at(&mut self, requested: Duration, now: Instant) -> Duration {
        let interval = clamp_interval(requested);
        self.state.tick_interval = interval;

        if self.state.playback == PlaybackState::Playing {
            self.ticker.cancel();
            self.ticker.arm(now, interval);
        }
        if self.variant.is_some() {
            self.status.push_log(&format!(
                "Animation speed changed: {}ms",
                interval.as_millis()
            ));
        }
        interval
    }

    /// Switch palette, rebuilding the active variant in place
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        if let Some(kind) = self.state.kind {
            self.variant = Some(create(kind, &self.config, theme));
        }
    }

    /// Render the current step into a fresh [`DrawList`].
    ///
    /// Never fails: a missing or faulty variant yields a placeholder frame.
    pub fn draw_list(&self) -> DrawList {
        match &self.variant {
            Some(variant) => frame_or_placeholder(variant, self.state.step, self.theme),
            None => placeholder(self.theme, "Loading animation..."),
        }
    }

    /// What the status widgets should show for the current step
    pub fn display_info(&self) -> DisplayInfo {
        match &self.variant {
            None => DisplayInfo::ready(),
            Some(variant) => info_or_unavailable(variant, self.state.step),
        }
    }

    pub fn code_listing(&self) -> Vec<String> {
        self.variant
            .as_ref()
            .map(|variant| variant.code_listing())
            .unwrap_or_default()
    }

    pub fn code_focus(&self) -> Option<CodeFocus> {
        self.variant.as_ref()?.code_focus(self.state.step)
    }

    /// Snapshot of the active animation, `None` when idle
    pub fn export(&mut self) -> Option<AnimationExport> {
        let kind = self.state.kind?;
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        self.status.push_log("Animation data exported");
        Some(AnimationExport {
            kind,
            current_step: self.state.step,
            max_steps: self.state.max_steps,
            config: self.config.clone(),
            theme: self.theme,
            timestamp,
        })
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_playing(&self) -> bool {
        self.state.playback == PlaybackState::Playing
    }

    pub fn status(&self) -> &S {
        &self.status
    }

    pub fn status_mut(&mut self) -> &mut S {
        &mut self.status
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    fn tick(&mut self) {
        if self.state.step < self.state.max_steps {
            self.advance();
        } else {
            self.finish();
        }
    }

    /// Move one step forward and publish it
    fn advance(&mut self) {
        self.state.step += 1;
        if let Some(variant) = self.variant.as_mut() {
            variant.on_step(self.state.step);
        }
        self.publish(true);

        if self.state.step >= self.state.max_steps {
            self.finish();
        }
    }

    fn finish(&mut self) {
        self.ticker.cancel();
        self.state.playback = PlaybackState::Completed;
        debug!("{:?} animation completed", self.state.kind);
    }

    /// Step back to 0 and clear variant bookkeeping, without touching playback
    fn rewind(&mut self) {
        self.state.step = 0;
        if let Some(variant) = self.variant.as_mut() {
            variant.reset();
        }
        self.status.clear_log();
        self.publish(false);
    }

    fn publish(&mut self, with_log: bool) {
        self.status.show_step(self.state.step, self.state.max_steps);
        let info = self.display_info();
        self.status.show_info(&info);

        if !with_log {
            return;
        }
        if let Some(message) = self
            .variant
            .as_ref()
            .and_then(|variant| log_line(variant, self.state.step))
        {
            self.status.push_log(&message);
        }
    }
}

/// Render `step` of `animation`, or a placeholder frame when it fails
pub fn frame_or_placeholder(animation: &dyn Animation, step: usize, theme: Theme) -> DrawList {
    let mut frame = DrawList::new();
    match animation.render(&mut frame, step) {
        Ok(()) => frame,
        Err(err) => {
            warn!("Render failed at step {}: {}", step, err);
            placeholder(theme, "Animation error")
        }
    }
}

/// Describe `step` of `animation`, or [`DisplayInfo::unavailable`] when it fails
pub fn info_or_unavailable(animation: &dyn Animation, step: usize) -> DisplayInfo {
    animation.info(step).unwrap_or_else(|err| {
        warn!("Display info failed at step {}: {}", step, err);
        DisplayInfo::unavailable()
    })
}

/// Narration of `step`, `None` when there is nothing to log or it fails
pub fn log_line(animation: &dyn Animation, step: usize) -> Option<String> {
    match animation.log_message(step) {
        Ok(message) if !message.is_empty() => Some(message),
        Ok(_) => None,
        Err(err) => {
            warn!("Log message failed at step {}: {}", step, err);
            None
        }
    }
}

fn placeholder(theme: Theme, message: &str) -> DrawList {
    let p = palette(theme);
    let mut frame = DrawList::new();
    frame.background(p.background);
    let (width, height) = frame.size();
    frame.text(
        (width / 2.0, height / 2.0),
        message,
        TextStyle::centered(p.danger, 16.0),
    );
    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> AnimationController<StatusBoard, IntervalTimer> {
        AnimationController::default()
    }

    #[test]
    fn test_setup_enters_ready() {
        let mut ctl = controller();
        assert_eq!(ctl.state().playback, PlaybackState::Idle);

        ctl.setup("for-loop", AnimationConfig::with_iterations(5));
        assert_eq!(ctl.state().playback, PlaybackState::Ready);
        assert_eq!(ctl.state().max_steps, 18);
        assert_eq!(ctl.state().step, 0);
        assert_eq!(ctl.status().log().next(), Some("for-loop animation ready (18 steps)"));
    }

    #[test]
    fn test_manual_steps_clamp_at_bound() {
        let mut ctl = controller();
        ctl.setup("conditional", AnimationConfig::default());

        for _ in 0..4 {
            assert!(ctl.step());
        }
        assert_eq!(ctl.state().playback, PlaybackState::Completed);
        assert!(!ctl.step());
        assert_eq!(ctl.state().step, 4);
    }

    #[test]
    fn test_ticks_only_while_playing() {
        let start = Instant::now();
        let mut ctl = controller();
        ctl.setup("simple", AnimationConfig::default());

        assert!(!ctl.poll(start + Duration::from_secs(10)));
        ctl.start_at(start);
        assert!(!ctl.poll(start + Duration::from_millis(100)));
        assert!(ctl.poll(start + DEFAULT_TICK_INTERVAL));
        assert_eq!(ctl.state().step, 1);

        ctl.pause();
        assert!(!ctl.poll(start + Duration::from_secs(60)));
        assert_eq!(ctl.state().playback, PlaybackState::Paused);
    }

    #[test]
    fn test_set_speed_clamps_and_keeps_step() {
        let start = Instant::now();
        let mut ctl = controller();
        ctl.setup("while-loop", AnimationConfig::default());
        ctl.step();
        ctl.start_at(start);

        assert_eq!(ctl.set_speed_at(Duration::from_millis(50), start), MIN_TICK_INTERVAL);
        assert_eq!(ctl.state().step, 1);
        assert!(ctl.is_playing());
        assert!(ctl.poll(start + MIN_TICK_INTERVAL));
        assert_eq!(
            ctl.set_speed_at(Duration::from_secs(60), start),
            MAX_TICK_INTERVAL
        );
    }

    #[test]
    fn test_speed_change_is_silent_when_idle() {
        let mut ctl = controller();
        ctl.set_speed(Duration::from_millis(800));
        assert_eq!(ctl.status().log_len(), 0);
        assert_eq!(ctl.state().tick_interval, Duration::from_millis(800));

        ctl.setup("simple", AnimationConfig::default());
        ctl.set_speed(Duration::from_millis(900));
        assert_eq!(ctl.status().log().next(), Some("Animation speed changed: 900ms"));
    }

    #[test]
    fn test_placeholder_when_idle() {
        let ctl = controller();
        assert!(ctl.draw_list().contains_text("Loading animation..."));
        assert_eq!(ctl.display_info(), DisplayInfo::ready());
        assert!(ctl.code_focus().is_none());
    }

    #[test]
    fn test_theme_switch_keeps_step() {
        let mut ctl = controller();
        ctl.setup("array-memory", AnimationConfig::default());
        ctl.step();
        ctl.step();
        ctl.set_theme(Theme::Lotr);

        assert_eq!(ctl.state().step, 2);
        assert_eq!(
            ctl.draw_list().background_color(),
            Some(palette(Theme::Lotr).background)
        );
    }
}
