//! The cube engine's renderer boundary over bevy's ECS, and cubie picking.
use bevy::prelude::*;

use cube_core::CubeRenderer;
use cube_core::glam;

use crate::utils::constants::cubie_constants::CUBIE_SIZE;
use crate::utils::objects::Cubie;

/// Every cubie entity with its name and transform.
pub type CubieQuery<'w, 's> =
    Query<'w, 's, (Entity, &'static Name, &'static mut Transform), With<Cubie>>;

/// Borrows the cubie query for the duration of one engine call.
pub struct BevyCubeRenderer<'q, 'w, 's> {
    query: &'q mut CubieQuery<'w, 's>,
}

impl<'q, 'w, 's> BevyCubeRenderer<'q, 'w, 's> {
    pub fn new(query: &'q mut CubieQuery<'w, 's>) -> Self {
        Self { query }
    }
}

impl CubeRenderer for BevyCubeRenderer<'_, '_, '_> {
    type Entity = Entity;

    fn entities(&self) -> Vec<Entity> {
        self.query.iter().map(|(entity, _, _)| entity).collect()
    }

    fn entity_name(&self, entity: Entity) -> Option<String> {
        let (_, name, _) = self.query.get(entity).ok()?;
        Some(name.as_str().to_string())
    }

    fn transform(&self, entity: Entity) -> Option<glam::Mat4> {
        let (_, _, transform) = self.query.get(entity).ok()?;
        Some(to_engine(&transform))
    }

    fn set_transform(&mut self, entity: Entity, matrix: glam::Mat4) {
        if let Ok((_, _, mut transform)) = self.query.get_mut(entity) {
            *transform = Transform::from_matrix(Mat4::from_cols_array(&matrix.to_cols_array()));
        }
    }
}

fn to_engine(transform: &Transform) -> glam::Mat4 {
    let matrix =
        Mat4::from_scale_rotation_translation(transform.scale, transform.rotation, transform.translation);
    glam::Mat4::from_cols_array(&matrix.to_cols_array())
}

/// Engine-space vector to bevy's.
pub fn to_bevy(vector: glam::Vec3) -> Vec3 {
    Vec3::from_array(vector.to_array())
}

/// Nearest cubie hit by a ray from the camera through `viewport_position`.
pub fn pick_cubie(
    camera: &Camera,
    camera_transform: &GlobalTransform,
    viewport_position: Vec2,
    cubies: &CubieQuery,
) -> Option<Entity> {
    let ray = camera
        .viewport_to_world(camera_transform, viewport_position)
        .ok()?;
    let half_extent = Vec3::splat(CUBIE_SIZE / 2.0);

    cubies
        .iter()
        .filter_map(|(entity, _, transform)| {
            // Move the ray into the cubie's frame so the box is axis aligned.
            let inverse = transform.rotation.inverse();
            let origin = inverse * (ray.origin - transform.translation) / transform.scale;
            let direction = inverse * *ray.direction / transform.scale;
            ray_box_distance(origin, direction, half_extent).map(|distance| (entity, distance))
        })
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(entity, _)| entity)
}

/// Distance along the ray to an axis aligned box centered at the origin.
fn ray_box_distance(origin: Vec3, direction: Vec3, half_extent: Vec3) -> Option<f32> {
    let mut near = f32::NEG_INFINITY;
    let mut far = f32::INFINITY;

    for axis in 0..3 {
        if direction[axis].abs() < f32::EPSILON {
            if origin[axis].abs() > half_extent[axis] {
                return None;
            }
            continue;
        }
        let a = (-half_extent[axis] - origin[axis]) / direction[axis];
        let b = (half_extent[axis] - origin[axis]) / direction[axis];
        near = near.max(a.min(b));
        far = far.min(a.max(b));
    }

    (near <= far && far >= 0.0).then_some(near.max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_a_box_in_front_of_the_ray() {
        let distance = ray_box_distance(Vec3::new(0.0, 0.0, 5.0), Vec3::NEG_Z, Vec3::splat(0.5));
        assert_eq!(distance, Some(4.5));
    }

    #[test]
    fn misses_boxes_beside_or_behind_the_ray() {
        let half = Vec3::splat(0.5);
        assert_eq!(ray_box_distance(Vec3::new(1.0, 0.0, 5.0), Vec3::NEG_Z, half), None);
        assert_eq!(ray_box_distance(Vec3::new(0.0, 0.0, 5.0), Vec3::Z, half), None);
    }

    #[test]
    fn origin_inside_the_box_is_distance_zero() {
        assert_eq!(ray_box_distance(Vec3::ZERO, Vec3::X, Vec3::splat(0.5)), Some(0.0));
    }
}
