mod core;

pub use self::core::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_clone_and_equality() {
        let r = Rect {
            x: 10.0,
            y: 20.0,
            width: 800.0,
            height: 600.0,
        };
        let r2 = r;
        assert_eq!(r, r2);
    }

    #[test]
    fn rect_serialization() {
        let r = Rect {
            x: 0.0,
            y: 36.0,
            width: 1280.0,
            height: 684.0,
        };
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }

    #[test]
    fn parked_rect_is_outside_any_canvas() {
        assert!(Rect::PARKED.is_parked());
        assert!(!Rect::PARKED.intersects_canvas(800.0, 600.0));
        assert!(!Rect::PARKED.intersects_canvas(7680.0, 4320.0));
        assert!(Rect::PARKED.width > 0.0 && Rect::PARKED.height > 0.0);
    }

    #[test]
    fn visible_rect_intersects_canvas() {
        let r = Rect {
            x: 0.0,
            y: 36.0,
            width: 800.0,
            height: 564.0,
        };
        assert!(r.intersects_canvas(800.0, 600.0));
        assert!(!r.is_parked());
    }

    #[test]
    fn zero_sized_rect_does_not_intersect() {
        let r = Rect {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 600.0,
        };
        assert!(!r.intersects_canvas(800.0, 600.0));
    }

    #[test]
    fn surface_id_display() {
        assert_eq!(SurfaceId(42).to_string(), "surface-42");
    }

    #[test]
    fn surface_id_hash_and_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(SurfaceId(1));
        set.insert(SurfaceId(2));
        set.insert(SurfaceId(1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn surface_role_serialization() {
        let json = serde_json::to_string(&SurfaceRole::Sidebar).unwrap();
        assert_eq!(json, "\"sidebar\"");
        let role: SurfaceRole = serde_json::from_str("\"dialog\"").unwrap();
        assert_eq!(role, SurfaceRole::Dialog);
    }

    #[test]
    fn app_state_variants() {
        assert_ne!(AppState::Starting, AppState::Running);
        assert_ne!(AppState::Running, AppState::ShuttingDown);
    }
}
