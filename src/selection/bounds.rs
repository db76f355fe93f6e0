// Viewport-space selection volume and camera projection
use bevy::prelude::*;
use crate::constants::{DEFAULT_FAR_CLIP, DEFAULT_NEAR_CLIP};

/// Axis-aligned box in normalized viewport space.
/// x/y in [0, 1] (top-left origin), z is view depth in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl ViewportBounds {
    /// Box spanned by two viewport points, reaching from the near to the far clip plane
    pub fn from_corners(a: Vec2, b: Vec2, near: f32, far: f32) -> Self {
        Self {
            min: a.min(b).extend(near),
            max: a.max(b).extend(far),
        }
    }

    /// Inclusive on every face
    #[inline]
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// Maps screen and world positions into the viewport space of one camera.
/// The selection tester receives one explicitly instead of looking a camera up.
pub trait ViewportProjector {
    /// Window pixels (top-left origin) to normalized viewport x/y
    fn screen_to_viewport(&self, screen: Vec2) -> Option<Vec2>;

    /// World position to viewport x/y plus view depth; `None` when it cannot be projected
    fn world_to_viewport(&self, world: Vec3) -> Option<Vec3>;

    /// (near, far) clip distances
    fn clip_planes(&self) -> (f32, f32);

    fn viewport_bounds(&self, drag_start: Vec2, drag_current: Vec2) -> Option<ViewportBounds> {
        let a = self.screen_to_viewport(drag_start)?;
        let b = self.screen_to_viewport(drag_current)?;
        let (near, far) = self.clip_planes();
        Some(ViewportBounds::from_corners(a, b, near, far))
    }

    fn contains_point(&self, drag_start: Vec2, drag_current: Vec2, world: Vec3) -> bool {
        let Some(bounds) = self.viewport_bounds(drag_start, drag_current) else {
            return false;
        };
        self.world_to_viewport(world)
            .is_some_and(|point| bounds.contains(point))
    }
}

/// Projector backed by a live Bevy camera
pub struct CameraProjector<'a> {
    camera: &'a Camera,
    transform: &'a GlobalTransform,
    near: f32,
    far: f32,
}

impl<'a> CameraProjector<'a> {
    pub fn new(camera: &'a Camera, transform: &'a GlobalTransform, projection: &Projection) -> Self {
        let (near, far) = clip_planes(projection);
        Self { camera, transform, near, far }
    }
}

impl ViewportProjector for CameraProjector<'_> {
    fn screen_to_viewport(&self, screen: Vec2) -> Option<Vec2> {
        normalize_in_viewport(screen, self.camera.logical_viewport_rect()?)
    }

    fn world_to_viewport(&self, world: Vec3) -> Option<Vec3> {
        // Camera::world_to_viewport already offsets by the viewport origin
        let pixel = self.camera.world_to_viewport(self.transform, world).ok()?;
        let point = normalize_in_viewport(pixel, self.camera.logical_viewport_rect()?)?;
        let depth = (world - self.transform.translation()).dot(self.transform.forward().as_vec3());
        Some(point.extend(depth))
    }

    fn clip_planes(&self) -> (f32, f32) {
        (self.near, self.far)
    }
}

/// Window pixel to [0, 1] coordinates of `viewport`; `None` for an empty viewport
pub fn normalize_in_viewport(pixel: Vec2, viewport: Rect) -> Option<Vec2> {
    let size = viewport.size();
    if size.x <= 0.0 || size.y <= 0.0 {
        return None;
    }
    Some((pixel - viewport.min) / size)
}

pub fn clip_planes(projection: &Projection) -> (f32, f32) {
    match projection {
        Projection::Perspective(perspective) => (perspective.near, perspective.far),
        Projection::Orthographic(orthographic) => (orthographic.near, orthographic.far),
        _ => (DEFAULT_NEAR_CLIP, DEFAULT_FAR_CLIP),
    }
}

/// Screen-space rectangle between two cursor positions
pub fn screen_rect(a: Vec2, b: Vec2) -> Rect {
    Rect::from_corners(a, b)
}

/// Top, left, right and bottom border strips of `rect`
pub fn border_strips(rect: Rect, thickness: f32) -> [Rect; 4] {
    let (min, max) = (rect.min, rect.max);
    [
        Rect::new(min.x, min.y, max.x, min.y + thickness),
        Rect::new(min.x, min.y, min.x + thickness, max.y),
        Rect::new(max.x - thickness, min.y, max.x, max.y),
        Rect::new(min.x, max.y - thickness, max.x, max.y),
    ]
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Screen pixels divide straight into viewport space; world points are
    /// already expressed in viewport coordinates.
    pub(crate) struct FlatProjector {
        pub screen_size: Vec2,
    }

    impl ViewportProjector for FlatProjector {
        fn screen_to_viewport(&self, screen: Vec2) -> Option<Vec2> {
            Some(screen / self.screen_size)
        }

        fn world_to_viewport(&self, world: Vec3) -> Option<Vec3> {
            Some(world)
        }

        fn clip_planes(&self) -> (f32, f32) {
            (0.1, 100.0)
        }
    }

    const PROJECTOR: FlatProjector = FlatProjector { screen_size: Vec2::new(800.0, 600.0) };
    const START: Vec2 = Vec2::new(160.0, 120.0); // (0.2, 0.2)
    const END: Vec2 = Vec2::new(640.0, 480.0);   // (0.8, 0.8)

    #[test]
    fn centre_point_is_inside() {
        assert!(PROJECTOR.contains_point(START, END, Vec3::new(0.5, 0.5, 50.0)));
    }

    #[test]
    fn point_past_corner_is_outside() {
        assert!(!PROJECTOR.contains_point(START, END, Vec3::new(0.9, 0.9, 50.0)));
    }

    #[test]
    fn drag_direction_does_not_matter() {
        let probes = [
            Vec3::new(0.5, 0.5, 50.0),
            Vec3::new(0.9, 0.9, 50.0),
            Vec3::new(0.2, 0.8, 0.1),
            Vec3::new(0.5, 0.5, 150.0),
        ];
        for probe in probes {
            assert_eq!(
                PROJECTOR.contains_point(START, END, probe),
                PROJECTOR.contains_point(END, START, probe),
            );
        }
        let cross_a = Vec2::new(START.x, END.y);
        let cross_b = Vec2::new(END.x, START.y);
        assert_eq!(PROJECTOR.viewport_bounds(START, END), PROJECTOR.viewport_bounds(cross_a, cross_b));
    }

    #[test]
    fn bounds_are_inclusive_and_depth_limited() {
        let bounds = PROJECTOR.viewport_bounds(START, END).expect("flat projector always projects");
        assert!(bounds.contains(Vec3::new(0.2, 0.8, 0.1)));
        assert!(bounds.contains(Vec3::new(0.8, 0.2, 100.0)));
        assert!(!bounds.contains(Vec3::new(0.5, 0.5, 0.05)));
        assert!(!bounds.contains(Vec3::new(0.5, 0.5, 100.5)));
    }

    #[test]
    fn zero_area_drag_only_holds_its_own_point() {
        assert!(PROJECTOR.contains_point(START, START, Vec3::new(0.2, 0.2, 1.0)));
        assert!(!PROJECTOR.contains_point(START, START, Vec3::new(0.21, 0.2, 1.0)));
    }

    #[test]
    fn borders_hug_the_rectangle() {
        let rect = screen_rect(Vec2::new(110.0, 80.0), Vec2::new(10.0, 20.0));
        assert_eq!(rect.min, Vec2::new(10.0, 20.0));
        assert_eq!(rect.max, Vec2::new(110.0, 80.0));

        let [top, left, right, bottom] = border_strips(rect, 2.0);
        assert_eq!(top, Rect::new(10.0, 20.0, 110.0, 22.0));
        assert_eq!(left, Rect::new(10.0, 20.0, 12.0, 80.0));
        assert_eq!(right, Rect::new(108.0, 20.0, 110.0, 80.0));
        assert_eq!(bottom, Rect::new(10.0, 78.0, 110.0, 80.0));
    }

    #[test]
    fn offset_viewport_normalizes_from_its_origin() {
        // Right half of an 800x600 window
        let viewport = Rect::new(400.0, 0.0, 800.0, 600.0);
        assert_eq!(normalize_in_viewport(Vec2::new(600.0, 300.0), viewport), Some(Vec2::new(0.5, 0.5)));
        assert_eq!(normalize_in_viewport(Vec2::new(400.0, 0.0), viewport), Some(Vec2::ZERO));
        assert_eq!(normalize_in_viewport(Vec2::new(800.0, 600.0), viewport), Some(Vec2::ONE));

        // A drag over the whole viewport holds a unit drawn at its centre
        let bounds = ViewportBounds::from_corners(
            normalize_in_viewport(viewport.min, viewport).unwrap(),
            normalize_in_viewport(viewport.max, viewport).unwrap(),
            0.1,
            100.0,
        );
        let centre = normalize_in_viewport(viewport.center(), viewport).unwrap();
        assert!(bounds.contains(centre.extend(10.0)));
    }

    #[test]
    fn empty_viewport_does_not_normalize() {
        let collapsed = Rect::new(400.0, 0.0, 400.0, 600.0);
        assert_eq!(normalize_in_viewport(Vec2::new(400.0, 300.0), collapsed), None);
    }

    #[test]
    fn perspective_clip_planes_are_read() {
        let projection = Projection::Perspective(PerspectiveProjection {
            near: 0.5,
            far: 300.0,
            ..default()
        });
        assert_eq!(clip_planes(&projection), (0.5, 300.0));
    }
}
