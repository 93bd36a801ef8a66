#[cfg(feature = "hydrate")]
mod in_view;

#[cfg(feature = "hydrate")]
pub use in_view::ViewportOnce;

use crate::site::MotionPreset;

/// Easing used by reveals and hover lifts.
pub const EASE_SOFT: CubicBezier = CubicBezier::new(0.16, 1.0, 0.3, 1.0);
/// Easing used by the flip and tilt reveals.
pub const EASE_FLIP: CubicBezier = CubicBezier::new(0.12, 1.0, 0.25, 1.0);
/// Easing used by counters and skill bars.
pub const EASE_COUNT: CubicBezier = CubicBezier::new(0.22, 1.0, 0.36, 1.0);

const REDUCED_DURATION_MS: u32 = 10;
const STAGGER_BASE_DELAY_MS: u32 = 100;

/// A CSS `cubic-bezier` timing function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    fn sample(a1: f64, a2: f64, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * t * a1 + 3.0 * u * t * t * a2 + t * t * t
    }

    fn slope(a1: f64, a2: f64, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * a1 + 6.0 * u * t * (a2 - a1) + 3.0 * t * t * (1.0 - a2)
    }

    /// Eased value for `progress` in `[0, 1]`.
    pub fn at(&self, progress: f64) -> f64 {
        let x = progress.clamp(0.0, 1.0);
        if x == 0.0 || x == 1.0 {
            return x;
        }
        // newton on x(t) = x, falling back to bisection when the slope flattens
        let mut t = x;
        for _ in 0..8 {
            let err = Self::sample(self.x1, self.x2, t) - x;
            if err.abs() < 1e-6 {
                return Self::sample(self.y1, self.y2, t);
            }
            let d = Self::slope(self.x1, self.x2, t);
            if d.abs() < 1e-6 {
                break;
            }
            t -= err / d;
        }
        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..32 {
            let v = Self::sample(self.x1, self.x2, t);
            if (v - x).abs() < 1e-6 {
                break;
            }
            if v < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        Self::sample(self.y1, self.y2, t)
    }

    pub fn css(&self) -> String {
        format!(
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

/// Displayed value of a counter animating from zero to `target`.
pub fn count_up_value(target: u32, progress: f64) -> u32 {
    (f64::from(target) * EASE_COUNT.at(progress)).round() as u32
}

/// Fill fraction of a skill bar for a level in percent.
pub fn skill_fill(level: u8) -> f64 {
    (f64::from(level) / 100.0).clamp(0.0, 1.0)
}

/// Offsets and opacity of an element at one end of a reveal.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub rotate: f64,
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        rotate: 0.0,
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    pub fn style(&self) -> String {
        format!(
            "opacity: {}; transform: translate3d({}px, {}px, 0) rotate({}deg) rotateX({}deg) rotateY({}deg);",
            self.opacity, self.x, self.y, self.rotate, self.rotate_x, self.rotate_y
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub ease: CubicBezier,
}

impl Transition {
    pub fn style(&self) -> String {
        let ease = self.ease.css();
        format!(
            "transition: opacity {d}ms {ease} {delay}ms, transform {d}ms {ease} {delay}ms;",
            d = self.duration_ms,
            delay = self.delay_ms,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// A hidden → shown animation for one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub hidden: Pose,
    pub shown: Pose,
    pub transition: Option<Transition>,
}

impl Reveal {
    fn build(preset: MotionPreset, hidden: Pose, duration_ms: u32, delay_ms: u32, ease: CubicBezier) -> Self {
        match preset {
            MotionPreset::Full => Reveal {
                hidden,
                shown: Pose::REST,
                transition: Some(Transition {
                    duration_ms,
                    delay_ms,
                    ease,
                }),
            },
            MotionPreset::Minimal => Reveal {
                hidden: Pose::REST,
                shown: Pose::REST,
                transition: Some(Transition {
                    duration_ms: REDUCED_DURATION_MS,
                    delay_ms: 0,
                    ease,
                }),
            },
            MotionPreset::Disabled => Reveal {
                hidden: Pose::REST,
                shown: Pose::REST,
                transition: None,
            },
        }
    }

    pub fn fade_up(preset: MotionPreset, delay_ms: u32) -> Self {
        let hidden = Pose {
            opacity: 0.0,
            y: 22.0,
            ..Pose::REST
        };
        Self::build(preset, hidden, 850, delay_ms, EASE_SOFT)
    }

    pub fn flip_x(preset: MotionPreset, delay_ms: u32) -> Self {
        let hidden = Pose {
            opacity: 0.0,
            y: 14.0,
            rotate_x: 45.0,
            ..Pose::REST
        };
        Self::build(preset, hidden, 950, delay_ms, EASE_FLIP)
    }

    pub fn flip_y(preset: MotionPreset, delay_ms: u32) -> Self {
        let hidden = Pose {
            opacity: 0.0,
            y: 14.0,
            rotate_y: 50.0,
            ..Pose::REST
        };
        Self::build(preset, hidden, 950, delay_ms, EASE_FLIP)
    }

    pub fn slide_tilt(preset: MotionPreset, from: Side, delay_ms: u32) -> Self {
        let (x, rotate) = match from {
            Side::Left => (-22.0, -4.0),
            Side::Right => (22.0, 4.0),
        };
        let hidden = Pose {
            opacity: 0.0,
            x,
            rotate,
            ..Pose::REST
        };
        Self::build(preset, hidden, 850, delay_ms, EASE_FLIP)
    }

    /// Inline style for the element in its hidden or shown pose.
    pub fn style(&self, shown: bool) -> String {
        let pose = if shown { self.shown } else { self.hidden };
        let mut style = pose.style();
        if let Some(t) = self.transition {
            style.push(' ');
            style.push_str(&t.style());
        }
        style
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealKind {
    #[default]
    FadeUp,
    FlipX,
    FlipY,
    Slide(Side),
}

impl RevealKind {
    pub fn reveal(self, preset: MotionPreset, delay_ms: u32) -> Reveal {
        match self {
            RevealKind::FadeUp => Reveal::fade_up(preset, delay_ms),
            RevealKind::FlipX => Reveal::flip_x(preset, delay_ms),
            RevealKind::FlipY => Reveal::flip_y(preset, delay_ms),
            RevealKind::Slide(side) => Reveal::slide_tilt(preset, side, delay_ms),
        }
    }
}

/// Delay of the `index`th child of a staggered group.
pub fn stagger_delay(preset: MotionPreset, index: usize, step_ms: u32) -> u32 {
    if !preset.is_full() {
        return 0;
    }
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    STAGGER_BASE_DELAY_MS.saturating_add(index.saturating_mul(step_ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bezier_endpoints_and_monotonic() {
        for ease in [EASE_SOFT, EASE_FLIP, EASE_COUNT] {
            assert_eq!(ease.at(0.0), 0.0);
            assert_eq!(ease.at(1.0), 1.0);
            assert_eq!(ease.at(-3.0), 0.0);
            assert_eq!(ease.at(7.0), 1.0);
            let mut prev = 0.0;
            for i in 1..=20 {
                let v = ease.at(f64::from(i) / 20.0);
                assert!(v + 1e-9 >= prev, "{ease:?} not monotonic at {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn test_linear_bezier_is_identity() {
        let linear = CubicBezier::new(0.0, 0.0, 1.0, 1.0);
        for p in [0.1, 0.25, 0.5, 0.9] {
            assert!((linear.at(p) - p).abs() < 1e-4, "{p}");
        }
    }

    #[test]
    fn test_ease_out_front_loads_progress() {
        assert!(EASE_COUNT.at(0.5) > 0.8);
    }

    #[test]
    fn test_count_up() {
        assert_eq!(count_up_value(100, 0.0), 0);
        assert_eq!(count_up_value(100, 1.0), 100);
        assert_eq!(count_up_value(4, 2.0), 4);
        let mid = count_up_value(100, 0.3);
        assert!(mid > 0 && mid < 100);
    }

    #[test]
    fn test_skill_fill_clamps() {
        assert_eq!(skill_fill(0), 0.0);
        assert_eq!(skill_fill(82), 0.82);
        assert_eq!(skill_fill(250), 1.0);
    }

    #[test]
    fn test_full_reveal_moves_from_hidden_pose() {
        let reveal = Reveal::fade_up(MotionPreset::Full, 0);
        assert_eq!(reveal.hidden.opacity, 0.0);
        assert_eq!(reveal.hidden.y, 22.0);
        assert_eq!(reveal.shown, Pose::REST);
        assert!(reveal.style(false).starts_with("opacity: 0;"));
        assert!(reveal.style(true).contains("850ms"));
    }

    #[test]
    fn test_reduced_presets_do_not_move() {
        let minimal = Reveal::slide_tilt(MotionPreset::Minimal, Side::Left, 120);
        assert_eq!(minimal.hidden, Pose::REST);
        assert_eq!(minimal.transition.map(|t| t.duration_ms), Some(10));

        let disabled = Reveal::flip_y(MotionPreset::Disabled, 120);
        assert_eq!(disabled.hidden, Pose::REST);
        assert!(disabled.transition.is_none());
        assert_eq!(disabled.style(false), disabled.style(true));
    }

    #[test]
    fn test_slide_tilt_sides_mirror() {
        let left = Reveal::slide_tilt(MotionPreset::Full, Side::Left, 0);
        let right = Reveal::slide_tilt(MotionPreset::Full, Side::Right, 0);
        assert_eq!(left.hidden.x, -right.hidden.x);
        assert_eq!(left.hidden.rotate, -right.hidden.rotate);
    }

    #[test]
    fn test_reveal_kind_dispatch() {
        let preset = MotionPreset::Full;
        assert_eq!(RevealKind::FlipX.reveal(preset, 40), Reveal::flip_x(preset, 40));
        assert_eq!(
            RevealKind::Slide(Side::Right).reveal(preset, 0),
            Reveal::slide_tilt(preset, Side::Right, 0)
        );
        assert_eq!(RevealKind::default(), RevealKind::FadeUp);
    }

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay(MotionPreset::Full, 0, 85), 100);
        assert_eq!(stagger_delay(MotionPreset::Full, 3, 85), 355);
        assert_eq!(stagger_delay(MotionPreset::Minimal, 3, 85), 0);
    }
}
