use bevy::prelude::*;
use crate::shared::*;
use super::ledger::{QuestDirector, QuestLedger};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectorPose {
    pub rotation_degrees: f32,
    pub position: Vec2,
}

/// Compass pose for an actor heading to `target`: one unit from the actor
/// on the target side. `None` when the actor stands on the target.
pub fn director_pose(actor: Vec2, target: Vec2) -> Option<DirectorPose> {
    let direction = (actor - target).try_normalize()?;
    Some(DirectorPose {
        rotation_degrees: direction.y.atan2(direction.x).to_degrees() - 90.0,
        position: actor - direction,
    })
}

pub fn update_quest_director(
    ledger: Res<QuestLedger>,
    tracked: Res<TrackedActor>,
    actors: Query<&Transform, Without<QuestDirector>>,
    mut directors: Query<&mut Transform, With<QuestDirector>>,
) {
    let Some(quest) = ledger.head() else {
        return;
    };
    let Some(actor) = tracked.entity.and_then(|e| actors.get(e).ok()) else {
        return;
    };
    let Some(director) = quest.director else {
        return;
    };
    let Ok(mut transform) = directors.get_mut(director) else {
        return;
    };
    let Some(pose) = director_pose(actor.translation.truncate(), quest.target) else {
        return;
    };
    transform.translation = pose.position.extend(Z_DIRECTOR);
    transform.rotation = Quat::from_rotation_z(pose.rotation_degrees.to_radians());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_target_to_the_right() {
        let pose = director_pose(Vec2::ZERO, Vec2::new(5.0, 0.0)).unwrap();
        assert!(close(pose.rotation_degrees, 90.0));
        assert!(close(pose.position.x, 1.0) && close(pose.position.y, 0.0));
    }

    #[test]
    fn test_target_above() {
        let pose = director_pose(Vec2::new(2.0, 2.0), Vec2::new(2.0, 10.0)).unwrap();
        // direction (0,-1): atan2 = -90
        assert!(close(pose.rotation_degrees, -180.0));
        assert!(close(pose.position.x, 2.0) && close(pose.position.y, 3.0));
    }

    #[test]
    fn test_on_target_has_no_pose() {
        assert!(director_pose(Vec2::ONE, Vec2::ONE).is_none());
    }
}
