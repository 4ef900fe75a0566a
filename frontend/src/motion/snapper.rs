//! Auto-advance across the empty scroll distance under a pinned showcase.
//!
//! The snapper is a two-state machine. While [`SnapState::Idle`] it is fed
//! scroll offsets (the caller throttles with a timer) and, when the user moves downward into a dead
//! zone, starts a [`ScrollTween`] to the end of that section's effect. While
//! [`SnapState::Animating`] every observed offset is ignored; the tween ends
//! on elapsed time only.

use super::easing::{clamp_unit, ease_in_out_cubic, lerp};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapConfig {
    /// Distance past a section start before snapping may begin.
    pub trigger_guard: f64,
    /// Distance before the target inside which the user is left alone.
    pub landing_guard: f64,
    pub duration_ms: f64,
    /// Delay of the trailing timer that evaluates a burst of scroll events.
    pub throttle_ms: u32,
    /// Fixed nav bar height. A showcase effect starts when the section top
    /// reaches the nav bar, not the viewport top.
    pub nav_height: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            trigger_guard: 10.0,
            landing_guard: 50.0,
            duration_ms: 1200.0,
            throttle_ms: 50,
            nav_height: 0.0,
        }
    }
}

/// Time-based scroll animation from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTween {
    pub from: f64,
    pub to: f64,
    pub start_ms: f64,
    pub duration_ms: f64,
}

impl ScrollTween {
    pub fn new(from: f64, to: f64, start_ms: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1.0),
        }
    }

    pub fn is_done(&self, now_ms: f64) -> bool {
        now_ms - self.start_ms >= self.duration_ms
    }

    pub fn sample(&self, now_ms: f64) -> f64 {
        if self.is_done(now_ms) {
            return self.to;
        }
        let t = clamp_unit((now_ms - self.start_ms) / self.duration_ms);
        lerp(self.from, self.to, ease_in_out_cubic(t))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SnapState {
    Idle,
    Animating(ScrollTween),
}

/// One animation frame worth of work.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapFrame {
    pub offset: f64,
    pub done: bool,
}

/// Dead zone `(effect_start + trigger_guard, target - landing_guard)` for a
/// section. The effect starts at `section_start - nav_height` and ends at
/// `target`, the offset where the progress mapper reaches 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeadZone {
    pub floor: f64,
    pub ceiling: f64,
    pub target: f64,
}

impl DeadZone {
    pub fn for_section(section_start: f64, span: f64, config: &SnapConfig) -> Self {
        let effect_start = section_start - config.nav_height;
        let target = effect_start + span;
        Self {
            floor: effect_start + config.trigger_guard,
            ceiling: target - config.landing_guard,
            target,
        }
    }

    pub fn contains(&self, offset: f64) -> bool {
        offset > self.floor && offset < self.ceiling
    }
}

#[derive(Debug, Clone)]
pub struct AutoScrollSnapper {
    config: SnapConfig,
    state: SnapState,
    last_offset: f64,
}

impl AutoScrollSnapper {
    pub fn new(config: SnapConfig, initial_offset: f64) -> Self {
        Self {
            config,
            state: SnapState::Idle,
            last_offset: initial_offset,
        }
    }

    pub fn state(&self) -> SnapState {
        self.state
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.state, SnapState::Animating(_))
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    /// Feeds a scroll sample. Returns the tween when this sample starts one.
    ///
    /// `section_starts` are document offsets of the snap sections, read from
    /// the current layout by the caller; `span` is the effect distance in
    /// pixels shared with the progress mapper.
    pub fn observe(
        &mut self,
        offset: f64,
        section_starts: &[f64],
        span: f64,
        now_ms: f64,
    ) -> Option<ScrollTween> {
        if self.is_animating() {
            return None;
        }

        let delta = offset - self.last_offset;
        self.last_offset = offset;
        if delta <= 0.0 {
            return None;
        }

        let zone = section_starts
            .iter()
            .map(|&start| DeadZone::for_section(start, span, &self.config))
            .find(|zone| zone.contains(offset))?;

        let tween = ScrollTween::new(offset, zone.target, now_ms, self.config.duration_ms);
        self.state = SnapState::Animating(tween);
        log::debug!("auto-scroll {:.0} -> {:.0}", offset, zone.target);
        Some(tween)
    }

    /// Advances the running tween. `None` when idle.
    pub fn tick(&mut self, now_ms: f64) -> Option<SnapFrame> {
        let SnapState::Animating(tween) = self.state else {
            return None;
        };
        let offset = tween.sample(now_ms);
        let done = tween.is_done(now_ms);
        if done {
            self.state = SnapState::Idle;
            self.last_offset = tween.to;
        }
        Some(SnapFrame { offset, done })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::scheduler::Throttle;

    const SPAN: f64 = 1200.0;
    const SECTIONS: [f64; 2] = [1000.0, 4000.0];

    fn snapper(at: f64) -> AutoScrollSnapper {
        AutoScrollSnapper::new(SnapConfig::default(), at)
    }

    #[test]
    fn downward_scroll_into_dead_zone_triggers() {
        let mut s = snapper(1000.0);
        let tween = s.observe(1100.0, &SECTIONS, SPAN, 0.0).expect("should snap");
        assert_eq!(tween.from, 1100.0);
        assert_eq!(tween.to, 2200.0);
        assert!(s.is_animating());
    }

    #[test]
    fn second_section_targets_its_own_end() {
        let mut s = snapper(4000.0);
        let tween = s.observe(4500.0, &SECTIONS, SPAN, 0.0).expect("should snap");
        assert_eq!(tween.to, 5200.0);
    }

    #[test]
    fn upward_scroll_never_triggers() {
        for offset in (0..6000).step_by(25) {
            let offset = offset as f64;
            let mut s = snapper(offset + 30.0);
            assert!(s.observe(offset, &SECTIONS, SPAN, 0.0).is_none(), "snapped at {offset}");
            assert!(!s.is_animating());
        }
    }

    #[test]
    fn guards_are_exclusive() {
        let config = SnapConfig::default();
        let floor = SECTIONS[0] + config.trigger_guard;
        let ceiling = SECTIONS[0] + SPAN - config.landing_guard;

        let mut s = snapper(floor - 5.0);
        assert!(s.observe(floor, &SECTIONS, SPAN, 0.0).is_none());

        let mut s = snapper(ceiling - 5.0);
        assert!(s.observe(ceiling, &SECTIONS, SPAN, 0.0).is_none());

        let mut s = snapper(floor);
        assert!(s.observe(floor + 0.5, &SECTIONS, SPAN, 0.0).is_some());
    }

    #[test]
    fn outside_dead_zones_does_nothing() {
        let mut s = snapper(0.0);
        assert!(s.observe(500.0, &SECTIONS, SPAN, 0.0).is_none());
        assert!(s.observe(3000.0, &SECTIONS, SPAN, 100.0).is_none());
        assert!(!s.is_animating());
    }

    #[test]
    fn does_not_retrigger_while_animating() {
        let mut s = snapper(1000.0);
        s.observe(1100.0, &SECTIONS, SPAN, 0.0).expect("should snap");
        let started = s.state();

        for i in 1..200 {
            let now = i as f64 * 5.0;
            if now >= SnapConfig::default().duration_ms {
                break;
            }
            assert!(s.observe(1100.0 + i as f64 * 3.0, &SECTIONS, SPAN, now).is_none());
        }
        assert_eq!(s.state(), started);
    }

    /// Replays a scroll burst the way the browser binding does: the first
    /// event arms the timer, the rest are absorbed, and the timer callback
    /// evaluates the offset current when it fires.
    fn replay_burst(
        snapper: &mut AutoScrollSnapper,
        throttle: &mut Throttle,
        burst: &[(f64, f64)],
    ) -> Option<ScrollTween> {
        let mut armed_at = None;
        let mut current = snapper.last_offset();
        for &(at_ms, offset) in burst {
            current = offset;
            if throttle.try_arm() {
                armed_at = Some(at_ms);
            }
        }
        let fire_at = armed_at? + throttle.interval_ms() as f64;
        throttle.fire();
        snapper.observe(current, &SECTIONS, SPAN, fire_at)
    }

    #[test]
    fn last_sample_of_a_burst_still_snaps() {
        let mut s = snapper(900.0);
        let mut throttle = Throttle::new(SnapConfig::default().throttle_ms);
        // Burst ends resting inside the first dead zone 20 ms after it began.
        let tween = replay_burst(&mut s, &mut throttle, &[(0.0, 950.0), (20.0, 1100.0)])
            .expect("resting in dead zone snaps");
        assert_eq!(tween.from, 1100.0);
        assert_eq!(tween.to, 2200.0);
        assert_eq!(tween.start_ms, 50.0);
        assert!(!throttle.is_armed());
    }

    #[test]
    fn burst_ending_outside_dead_zone_does_not_snap() {
        let mut s = snapper(900.0);
        let mut throttle = Throttle::new(SnapConfig::default().throttle_ms);
        assert!(replay_burst(&mut s, &mut throttle, &[(0.0, 1100.0), (30.0, 2180.0)]).is_none());
        assert_eq!(s.last_offset(), 2180.0);
    }

    #[test]
    fn snap_lands_where_progress_completes() {
        use crate::motion::progress::{ProgressConfig, ScrollProgressMapper, VisualPolicy};

        let vh = 800.0;
        let nav = 64.0;
        let progress = ProgressConfig {
            span_vh: 1.5,
            nav_height: nav,
            policy: VisualPolicy::SCALE_PAN,
        };
        let mapper = ScrollProgressMapper::new(progress);
        let config = SnapConfig {
            nav_height: nav,
            ..SnapConfig::default()
        };
        let section = 1000.0;
        let zone = DeadZone::for_section(section, progress.span_px(vh), &config);

        // Container top relative to the viewport at a given document scroll.
        let top_at = |scroll: f64| section - scroll;
        assert_eq!(mapper.progress(top_at(zone.target), vh), 1.0);
        assert!(mapper.progress(top_at(zone.target - 1.0), vh) < 1.0);
        assert_eq!(mapper.progress(top_at(zone.floor - config.trigger_guard), vh), 0.0);
    }

    #[test]
    fn animation_ends_on_time_and_lands_on_target() {
        let mut s = snapper(1000.0);
        let tween = s.observe(1100.0, &SECTIONS, SPAN, 100.0).expect("should snap");

        let mid = s.tick(100.0 + tween.duration_ms / 2.0).expect("animating");
        assert!(!mid.done);
        assert!((mid.offset - (1100.0 + 2200.0) / 2.0).abs() < 1e-9);

        let end = s.tick(100.0 + tween.duration_ms + 16.0).expect("final frame");
        assert!(end.done);
        assert_eq!(end.offset, 2200.0);
        assert_eq!(s.state(), SnapState::Idle);
        assert_eq!(s.last_offset(), 2200.0);
        assert!(s.tick(5000.0).is_none());
    }

    #[test]
    fn can_snap_again_after_returning_to_idle() {
        let mut s = snapper(1000.0);
        s.observe(1100.0, &SECTIONS, SPAN, 0.0).expect("should snap");
        s.tick(2000.0).expect("final frame");
        assert!(s.observe(4100.0, &SECTIONS, SPAN, 2001.0).is_some());
    }

    #[test]
    fn tween_sample_is_bounded() {
        let tween = ScrollTween::new(0.0, 100.0, 0.0, 800.0);
        assert_eq!(tween.sample(-50.0), 0.0);
        assert_eq!(tween.sample(0.0), 0.0);
        assert_eq!(tween.sample(800.0), 100.0);
        assert_eq!(tween.sample(10_000.0), 100.0);
    }
}
