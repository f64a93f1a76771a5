//! Pointer input as seen by the drawer, and the pure rules that map a pan to
//! a content offset and to a resting state.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerState {
    Closed,
    Open,
    DraggingToOpen,
    DraggingToClose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanPhase {
    Began,
    Changed,
    Ended,
    /// The pointer was lost before release, e.g. the window lost focus.
    Cancelled,
}

/// Input delivered to the drawer. `translation` is the total horizontal
/// movement since the pan began, negative when moving left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    EdgePan { phase: PanPhase, translation: f32 },
    Pan { phase: PanPhase, translation: f32 },
    OutsideTap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognizerKind {
    /// Pan starting in the strip along the right edge, opens the menu.
    EdgePan,
    /// Pan anywhere on the content surface, closes the menu.
    Pan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recognizer {
    pub kind: RecognizerKind,
    pub enabled: bool,
}

impl Recognizer {
    pub fn new(kind: RecognizerKind) -> Self {
        Self {
            kind,
            enabled: false,
        }
    }
}

/// Content offset while an opening pan is in progress.
pub fn opening_offset(translation: f32, menu_width: f32) -> f32 {
    clamp_offset(translation, menu_width)
}

/// Content offset while a closing pan is in progress.
pub fn closing_offset(translation: f32, menu_width: f32) -> f32 {
    clamp_offset(-menu_width + translation, menu_width)
}

/// Whether a pan covered enough distance to complete. Only the magnitude of
/// the translation counts; a pan of exactly a third of the menu completes.
pub fn completes(translation: f32, menu_width: f32) -> bool {
    !(translation.abs() < menu_width / 3.0)
}

fn clamp_offset(offset: f32, menu_width: f32) -> f32 {
    if offset.is_nan() {
        return 0.0;
    }
    offset.clamp(-menu_width, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_offset_stays_in_range() {
        let width = 280.0;
        for t in [-10_000.0, -281.0, -280.0, -140.0, -0.5, 0.0, 3.0, 10_000.0] {
            let offset = opening_offset(t, width);
            assert!((-width..=0.0).contains(&offset), "{t} -> {offset}");
        }
        assert_eq!(opening_offset(-100.0, width), -100.0);
    }

    #[test]
    fn closing_offset_starts_fully_open() {
        assert_eq!(closing_offset(0.0, 280.0), -280.0);
        assert_eq!(closing_offset(80.0, 280.0), -200.0);
        assert_eq!(closing_offset(-50.0, 280.0), -280.0);
        assert_eq!(closing_offset(500.0, 280.0), 0.0);
    }

    #[test]
    fn nan_translation_rests_at_zero() {
        assert_eq!(opening_offset(f32::NAN, 280.0), 0.0);
    }

    #[test]
    fn exactly_a_third_completes() {
        assert!(completes(-100.0, 300.0));
        assert!(!completes(-99.0, 300.0));
        assert!(completes(101.0, 300.0));
    }
}
