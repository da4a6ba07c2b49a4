//! Finds the renderer entities currently sitting on a face.

use std::collections::BTreeSet;

use crate::constants::cube_constants::FACELET_COUNT;
use crate::error::EngineError;
use crate::face::{CubieId, Face};
use crate::renderer::{leading_cubie_id, CubeRenderer};
use crate::state::CubeState;

/// Entities on one face and the cubies they render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceEntities<E> {
    pub face: Face,
    pub entities: Vec<E>,
    pub cubies: BTreeSet<CubieId>,
}

impl<E> FaceEntities<E> {
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Entities whose cubie currently occupies one of `face`'s slots.
///
/// Must be evaluated against the state before the move is committed. An empty
/// result is legitimate (model still loading); a non-empty result covering
/// anything other than 9 cubies means the model and the state disagree.
pub fn entities_on_face<R: CubeRenderer>(
    state: &CubeState,
    renderer: &R,
    face: Face,
) -> Result<FaceEntities<R::Entity>, EngineError> {
    let on_face = state.facelets(face);
    let mut entities = Vec::new();
    let mut cubies = BTreeSet::new();

    for entity in renderer.entities() {
        let Some(name) = renderer.entity_name(entity) else {
            continue;
        };
        let Some(cubie) = leading_cubie_id(&name) else {
            continue;
        };
        if on_face.contains(&cubie) {
            entities.push(entity);
            cubies.insert(cubie);
        }
    }

    if !entities.is_empty() && cubies.len() != FACELET_COUNT {
        return Err(EngineError::InconsistentGeometry {
            face,
            found: cubies.len(),
        });
    }

    Ok(FaceEntities {
        face,
        entities,
        cubies,
    })
}

/// Cubie rendered by `entity`, if its name carries one.
pub fn cubie_of<R: CubeRenderer>(renderer: &R, entity: R::Entity) -> Option<CubieId> {
    leading_cubie_id(&renderer.entity_name(entity)?)
}
