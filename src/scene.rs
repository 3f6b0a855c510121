//! The fixed scene: one white sphere and one movable point light.

use crate::error::Result;
use crate::light::Light;
use crate::sphere::Sphere;
use crate::vector::{Color, Vec3};

/// Sphere and light rendered by the controller.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Scene {
    /// The only object in the scene.
    pub sphere: Sphere,
    /// Point light the user drags around.
    pub light: Light,
}

impl Scene {
    /// White sphere at `center` with `radius`, lit from `light_position`.
    ///
    /// Fails if the radius is not positive or the light sits on the camera plane.
    pub fn new(center: Vec3, radius: f64, light_position: Vec3) -> Result<Self> {
        let sphere = Sphere::new(center, radius, Color::ONE)?;
        Light::validate_position(light_position)?;
        Ok(Self { sphere, light: Light::at(light_position) })
    }

    /// Scene with the default sphere and a light at `position`.
    pub fn with_light_at(position: Vec3) -> Self {
        Self { light: Light::at(position), ..Self::default() }
    }

    /// True if the light is inside the sphere, which suppresses the ray fan.
    pub fn light_inside_sphere(&self) -> bool {
        self.sphere.contains(self.light.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SceneError;

    #[test]
    fn test_default_scene() {
        let scene = Scene::default();
        assert_eq!(scene.sphere.center(), Vec3::new(-2.0, 0.0, -5.0));
        assert_eq!(scene.sphere.radius(), 1.5);
        assert_eq!(scene.light.position, Vec3::new(3.0, 0.0, -5.0));
        assert!(!scene.light_inside_sphere());
    }

    #[test]
    fn test_light_at_sphere_center_is_inside() {
        let scene = Scene::with_light_at(Vec3::new(-2.0, 0.0, -5.0));
        assert!(scene.light_inside_sphere());
    }

    #[test]
    fn test_new_validates_sphere_and_light() {
        let center = Vec3::new(-2.0, 0.0, -5.0);

        let scene = Scene::new(center, 1.5, Vec3::new(3.0, 0.0, -5.0)).unwrap();
        assert_eq!(scene, Scene::default());

        assert_eq!(
            Scene::new(center, -1.5, Vec3::new(3.0, 0.0, -5.0)),
            Err(SceneError::NonPositiveRadius(-1.5))
        );
        assert_eq!(
            Scene::new(center, 1.5, Vec3::new(3.0, 0.0, 0.0)),
            Err(SceneError::LightOnCameraPlane)
        );
    }

    #[test]
    fn test_light_at_center_of_custom_sphere_is_inside() {
        let center = Vec3::new(1.0, 2.0, -8.0);
        let scene = Scene::new(center, 0.5, center).unwrap();
        assert!(scene.light_inside_sphere());
    }
}
