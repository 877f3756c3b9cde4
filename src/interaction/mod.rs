use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::render::TooltipPrimitive;

/// Opacity a tooltip fades in to.
pub const TOOLTIP_VISIBLE_OPACITY: f64 = 0.9;
pub const TOOLTIP_FADE_IN: Duration = Duration::from_millis(300);
pub const TOOLTIP_FADE_OUT: Duration = Duration::from_millis(500);
/// Vertical distance between the pointer and the tooltip's top edge.
pub const TOOLTIP_POINTER_OFFSET_PX: f64 = 50.0;

/// Pointer position in container pixels plus the page position used to
/// place the tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    pub page_x: f64,
    pub page_y: f64,
}

impl PointerEvent {
    /// Event for a container sitting at the page origin.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            page_x: x,
            page_y: y,
        }
    }

    #[must_use]
    pub fn with_page(mut self, page_x: f64, page_y: f64) -> Self {
        self.page_x = page_x;
        self.page_y = page_y;
        self
    }
}

/// Hover transition produced by a pointer update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverChange {
    None,
    Entered { index: usize },
    Left { index: usize },
}

/// Timed opacity transition with cubic in-out easing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fade {
    pub from: f64,
    pub to: f64,
    pub duration: Duration,
    pub elapsed: Duration,
}

impl Fade {
    #[must_use]
    pub fn new(from: f64, to: f64, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn is_finished(self) -> bool {
        self.elapsed >= self.duration
    }

    #[must_use]
    pub fn progress(self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn opacity(self) -> f64 {
        self.from + (self.to - self.from) * ease_cubic_in_out(self.progress())
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta).min(self.duration);
    }
}

#[must_use]
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

/// Tooltip owned by one chart instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    text: String,
    left: f64,
    top: f64,
    opacity: f64,
    visible: bool,
    fade: Option<Fade>,
}

impl Default for Tooltip {
    fn default() -> Self {
        Self {
            text: String::new(),
            left: 0.0,
            top: 0.0,
            opacity: 0.0,
            visible: false,
            fade: None,
        }
    }
}

impl Tooltip {
    /// Shows `value` near the pointer and starts the fade-in.
    ///
    /// A running fade is interrupted and the new one starts from the current
    /// opacity.
    pub fn show(&mut self, value: f64, pointer: PointerEvent) {
        self.text = format_tooltip_value(value);
        self.left = pointer.page_x;
        self.top = pointer.page_y - TOOLTIP_POINTER_OFFSET_PX;
        self.visible = true;
        self.fade = Some(Fade::new(
            self.opacity,
            TOOLTIP_VISIBLE_OPACITY,
            TOOLTIP_FADE_IN,
        ));
    }

    /// Starts the fade-out; the tooltip hides once it completes.
    pub fn hide(&mut self) {
        if !self.visible {
            return;
        }
        self.fade = Some(Fade::new(self.opacity, 0.0, TOOLTIP_FADE_OUT));
    }

    /// Advances the running fade. Returns `true` when anything changed.
    pub fn advance(&mut self, delta: Duration) -> bool {
        let Some(mut fade) = self.fade else {
            return false;
        };
        fade.advance(delta);
        self.opacity = fade.opacity();
        if fade.is_finished() {
            self.fade = None;
            if fade.to <= 0.0 {
                self.visible = false;
            }
        } else {
            self.fade = Some(fade);
        }
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        (self.left, self.top)
    }

    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.fade.is_some()
    }

    #[must_use]
    pub fn to_primitive(&self) -> TooltipPrimitive {
        TooltipPrimitive {
            text: self.text.clone(),
            left: self.left,
            top: self.top,
            opacity: self.opacity.clamp(0.0, 1.0),
            visible: self.visible,
        }
    }
}

/// Fraction digits shown in the tooltip.
pub const TOOLTIP_FRACTION_DIGITS: usize = 2;

/// Exact decimal digits inspected when rounding; enough to resolve every
/// halfway case of an `f64` near a two-digit boundary.
const EXACT_FRACTION_DIGITS: usize = 40;

/// Tooltip text for a bar value: always two fraction digits.
///
/// Rounds half away from zero on the exact binary value, so `0.125` prints
/// `0.13` while `1.005` (stored just below the halfway point) prints `1.00`.
#[must_use]
pub fn format_tooltip_value(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (integer, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let mut digits: Vec<u8> = integer
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(TOOLTIP_FRACTION_DIGITS))
        .collect();

    let round_up = fraction
        .as_bytes()
        .get(TOOLTIP_FRACTION_DIGITS)
        .is_some_and(|digit| *digit >= b'5');
    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - TOOLTIP_FRACTION_DIGITS;
    let mut text = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        text.push('-');
    }
    text.extend(digits[..split].iter().copied().map(char::from));
    text.push('.');
    text.extend(digits[split..].iter().copied().map(char::from));
    text
}

/// Tracks which bar the pointer is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HoverState {
    hovered: Option<usize>,
}

impl HoverState {
    #[must_use]
    pub fn hovered(self) -> Option<usize> {
        self.hovered
    }

    /// Moves hover to `target`. Moving directly between two bars reports the
    /// enter of the new bar.
    pub fn update(&mut self, target: Option<usize>) -> HoverChange {
        let previous = self.hovered;
        self.hovered = target;
        match (previous, target) {
            (prev, Some(index)) if prev != Some(index) => HoverChange::Entered { index },
            (Some(index), None) => HoverChange::Left { index },
            _ => HoverChange::None,
        }
    }

    pub fn clear(&mut self) -> HoverChange {
        self.update(None)
    }
}
