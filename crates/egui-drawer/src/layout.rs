use egui::{Pos2, Rect, Vec2};

/// One of the two containers the drawer composites. `frame` is in the
/// coordinate space of the container rect handed to the drawer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub frame: Rect,
}

impl Surface {
    /// Bounds of the surface in its own coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::from_min_size(Pos2::ZERO, self.frame.size())
    }
}

/// Menu frame: right-aligned to `container`, `menu_width` wide, full height.
pub fn menu_frame(container: Rect, menu_width: f32) -> Rect {
    Rect::from_min_size(
        Pos2::new(container.max.x - menu_width, container.min.y),
        Vec2::new(menu_width, container.height()),
    )
}

/// Content frame: the full container shifted horizontally by `offset`.
pub fn content_frame(container: Rect, offset: f32) -> Rect {
    container.translate(Vec2::new(offset, 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_is_right_aligned_for_any_width() {
        for width in [320.0, 568.0, 768.0, 1024.0] {
            let container = Rect::from_min_size(Pos2::ZERO, Vec2::new(width, 480.0));
            let frame = menu_frame(container, 280.0);
            assert_eq!(frame.min.x, width - 280.0);
            assert_eq!(frame.width(), 280.0);
            assert_eq!(frame.height(), 480.0);
        }
    }

    #[test]
    fn content_keeps_container_size() {
        let container = Rect::from_min_size(Pos2::new(0.0, 24.0), Vec2::new(800.0, 600.0));
        let frame = content_frame(container, -280.0);
        assert_eq!(frame.size(), container.size());
        assert_eq!(frame.min, Pos2::new(-280.0, 24.0));
    }

    #[test]
    fn bounds_are_local() {
        let surface = Surface {
            frame: Rect::from_min_size(Pos2::new(520.0, 10.0), Vec2::new(280.0, 600.0)),
        };
        assert_eq!(surface.bounds().min, Pos2::ZERO);
        assert_eq!(surface.bounds().size(), Vec2::new(280.0, 600.0));
    }
}
