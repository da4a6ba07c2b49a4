//! Boundary to the renderer that owns the cubie entities.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::hash::Hash;

use glam::Mat4;

use crate::constants::cube_constants::CUBIE_COUNT;
use crate::face::{slot_position, CubieId};
use crate::state::CubeState;

/// Renderer owning entities addressable by opaque identifiers.
pub trait CubeRenderer {
    type Entity: Copy + Eq + Hash + Debug;

    /// Every renderable entity currently known.
    fn entities(&self) -> Vec<Self::Entity>;

    fn entity_name(&self, entity: Self::Entity) -> Option<String>;

    fn transform(&self, entity: Self::Entity) -> Option<Mat4>;

    fn set_transform(&mut self, entity: Self::Entity, transform: Mat4);
}

/// Cubie identifier encoded as the leading number of an entity name,
/// e.g. `"12_Cubie"` or `"2_Black_0"`.
pub fn leading_cubie_id(name: &str) -> Option<CubieId> {
    let digits = name.chars().take_while(char::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let (number, rest) = name.split_at(digits);
    match rest.chars().next() {
        None | Some('_' | '.' | '-' | ' ') => CubieId::new(number.parse().ok()?),
        Some(_) => None,
    }
}

#[derive(Clone, Debug)]
struct MemoryEntity {
    name: Option<String>,
    transform: Mat4,
}

/// Renderer keeping entities in memory, for headless runs and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryRenderer {
    entities: BTreeMap<u32, MemoryEntity>,
    next_id: u32,
}

impl MemoryRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// One `"{id}_Cubie"` entity per cubie, placed on the slot `state` gives it.
    pub fn cube(state: &CubeState) -> Self {
        let mut renderer = Self::new();
        for slot in 0..CUBIE_COUNT {
            let id = state.as_slice()[slot];
            renderer.spawn(
                Some(format!("{id}_Cubie")),
                Mat4::from_translation(slot_position(slot)),
            );
        }
        renderer
    }

    pub fn spawn(&mut self, name: Option<String>, transform: Mat4) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.entities.insert(id, MemoryEntity { name, transform });
        id
    }

    pub fn despawn(&mut self, entity: u32) {
        self.entities.remove(&entity);
    }

    /// First entity whose name carries `cubie`.
    pub fn entity_of(&self, cubie: CubieId) -> Option<u32> {
        self.entities.iter().find_map(|(id, entity)| {
            let name = entity.name.as_deref()?;
            (leading_cubie_id(name) == Some(cubie)).then_some(*id)
        })
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl CubeRenderer for MemoryRenderer {
    type Entity = u32;

    fn entities(&self) -> Vec<u32> {
        self.entities.keys().copied().collect()
    }

    fn entity_name(&self, entity: u32) -> Option<String> {
        self.entities.get(&entity)?.name.clone()
    }

    fn transform(&self, entity: u32) -> Option<Mat4> {
        self.entities.get(&entity).map(|entity| entity.transform)
    }

    fn set_transform(&mut self, entity: u32, transform: Mat4) {
        if let Some(entity) = self.entities.get_mut(&entity) {
            entity.transform = transform;
        }
    }
}
