use egui::emath::easing;
use egui::epaint::Shadow;
use egui::{Color32, Vec2};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Timing curve used when the content surface slides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub const ALL: [Easing; 4] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ];

    /// Map normalized time `t` in `[0, 1]` to normalized progress.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => easing::linear(t),
            Easing::EaseIn => easing::cubic_in(t),
            Easing::EaseOut => easing::cubic_out(t),
            Easing::EaseInOut => easing::cubic_in_out(t),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Easing::Linear => "Linear",
            Easing::EaseIn => "Ease in",
            Easing::EaseOut => "Ease out",
            Easing::EaseInOut => "Ease in-out",
        }
    }
}

/// Drop shadow painted under the content surface. Purely visual.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowStyle {
    pub radius: f32,
    pub opacity: f32,
    pub offset: Vec2,
    pub color: Color32,
}

impl Default for ShadowStyle {
    fn default() -> Self {
        Self {
            radius: 3.0,
            opacity: 0.5,
            offset: Vec2::new(0.0, -3.0),
            color: Color32::BLACK,
        }
    }
}

impl ShadowStyle {
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0 && self.color.a() > 0
    }

    pub fn to_shadow(&self) -> Shadow {
        Shadow {
            offset: [clamp_i8(self.offset.x), clamp_i8(self.offset.y)],
            blur: self.radius.round().clamp(0.0, u8::MAX as f32) as u8,
            spread: 0,
            color: self.color.gamma_multiply(self.opacity.clamp(0.0, 1.0)),
        }
    }
}

fn clamp_i8(value: f32) -> i8 {
    value.round().clamp(i8::MIN as f32, i8::MAX as f32) as i8
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawerOptions {
    /// Width of the menu surface in points.
    pub menu_width: f32,
    /// Slide duration in seconds.
    pub animation_duration: f32,
    pub easing: Easing,
    /// When set, pans and taps are ignored. `show` and `hide` still work.
    pub ignore_gestures: bool,
    /// Width of the strip along the right edge where an opening pan may start.
    pub edge_width: f32,
    pub shadow: ShadowStyle,
}

impl Default for DrawerOptions {
    fn default() -> Self {
        Self {
            menu_width: DrawerOptions::DEFAULT_MENU_WIDTH,
            animation_duration: DrawerOptions::DEFAULT_ANIMATION_DURATION,
            easing: Easing::default(),
            ignore_gestures: false,
            edge_width: DrawerOptions::DEFAULT_EDGE_WIDTH,
            shadow: ShadowStyle::default(),
        }
    }
}

impl DrawerOptions {
    pub const DEFAULT_MENU_WIDTH: f32 = 280.0;
    pub const DEFAULT_ANIMATION_DURATION: f32 = 0.3;
    pub const DEFAULT_EDGE_WIDTH: f32 = 20.0;

    /// Bring timing and strip settings into usable ranges. A negative or
    /// non-finite duration becomes zero; an unusable edge width falls back to
    /// the default, while zero still turns the edge strip off.
    pub fn normalized(mut self) -> Self {
        self.animation_duration = normalize_duration(self.animation_duration);
        self.edge_width = normalize_edge_width(self.edge_width);
        self
    }
}

pub(crate) fn normalize_duration(seconds: f32) -> f32 {
    if seconds.is_finite() {
        seconds.max(0.0)
    } else {
        0.0
    }
}

pub(crate) fn normalize_edge_width(edge_width: f32) -> f32 {
    if edge_width.is_finite() && edge_width >= 0.0 {
        edge_width
    } else {
        warn!("unusable edge width {edge_width}, using the default");
        DrawerOptions::DEFAULT_EDGE_WIDTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_both_ends() {
        for curve in Easing::ALL {
            assert_eq!(curve.apply(0.0), 0.0, "{curve:?}");
            assert!((curve.apply(1.0) - 1.0).abs() < 1e-6, "{curve:?}");
        }
    }

    #[test]
    fn ease_out_leads_linear() {
        assert!(Easing::EaseOut.apply(0.5) > Easing::Linear.apply(0.5));
        assert!(Easing::EaseIn.apply(0.5) < Easing::Linear.apply(0.5));
    }

    #[test]
    fn easing_clamps_out_of_range_time() {
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
        assert_eq!(Easing::Linear.apply(2.0), 1.0);
    }

    #[test]
    fn shadow_scales_color_by_opacity() {
        let style = ShadowStyle::default();
        let shadow = style.to_shadow();
        assert_eq!(shadow.offset, [0, -3]);
        assert_eq!(shadow.blur, 3);
        assert!(shadow.color.a() < Color32::BLACK.a());
    }

    #[test]
    fn transparent_shadow_is_hidden() {
        let style = ShadowStyle {
            opacity: 0.0,
            ..Default::default()
        };
        assert!(!style.is_visible());
    }

    #[test]
    fn normalized_repairs_bad_numbers() {
        let options = DrawerOptions {
            animation_duration: -1.0,
            edge_width: -10.0,
            ..Default::default()
        }
        .normalized();
        assert_eq!(options.animation_duration, 0.0);
        assert_eq!(options.edge_width, DrawerOptions::DEFAULT_EDGE_WIDTH);

        let options = DrawerOptions {
            animation_duration: f32::NAN,
            edge_width: f32::NAN,
            ..Default::default()
        }
        .normalized();
        assert_eq!(options.animation_duration, 0.0);
        assert_eq!(options.edge_width, DrawerOptions::DEFAULT_EDGE_WIDTH);

        let options = DrawerOptions {
            edge_width: 0.0,
            ..Default::default()
        }
        .normalized();
        assert_eq!(options.edge_width, 0.0);
    }

    #[test]
    fn partial_options_fill_defaults() {
        let options: DrawerOptions =
            serde_json::from_str(r#"{ "menu_width": 320.0, "easing": "Linear" }"#).unwrap();
        assert_eq!(options.menu_width, 320.0);
        assert_eq!(options.easing, Easing::Linear);
        assert_eq!(
            options.animation_duration,
            DrawerOptions::DEFAULT_ANIMATION_DURATION
        );
        assert_eq!(options.shadow, ShadowStyle::default());
    }
}
