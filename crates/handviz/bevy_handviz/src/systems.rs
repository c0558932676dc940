use bevy::prelude::*;

use crate::components::{HandMarker, HandVisualizer, MarkerPose};
use crate::resources::{MarkerAssets, MarkerStyle, XrHandDevices};
use crate::scene::WorldScene;

/// Create shared marker meshes and material when the render asset stores
/// exist. Headless apps (MinimalPlugins) skip this.
pub fn setup_marker_assets(
    mut commands: Commands,
    style: Res<MarkerStyle>,
    meshes: Option<ResMut<Assets<Mesh>>>,
    materials: Option<ResMut<Assets<StandardMaterial>>>,
) {
    let (Some(mut meshes), Some(mut materials)) = (meshes, materials) else {
        return;
    };
    // unit-diameter primitives; marker scale sets the final size
    commands.insert_resource(MarkerAssets {
        sphere: meshes.add(Sphere::new(0.5)),
        cube: meshes.add(Cuboid::new(1.0, 1.0, 1.0)),
        material: materials.add(StandardMaterial {
            base_color: style.color,
            unlit: style.unlit,
            ..default()
        }),
    });
}

/// Run every visualizer against the current device list. Exclusive so the
/// core can spawn and move markers directly in the `World`.
pub fn update_hand_visualizers(
    world: &mut World,
    visualizers: &mut QueryState<Entity, With<HandVisualizer>>,
    mut roots: Local<Vec<Entity>>,
) {
    if !world.contains_resource::<XrHandDevices>() {
        return;
    }
    roots.clear();
    roots.extend(visualizers.iter(world));

    world.resource_scope(|world, devices: Mut<XrHandDevices>| {
        for &root in roots.iter() {
            let Some(mut slot) = world.get_mut::<HandVisualizer>(root) else {
                continue;
            };
            let mut viz = std::mem::take(&mut *slot);

            let before = viz.0.markers().len();
            viz.0.update(&devices.0, &mut WorldScene::new(world, root));
            let spawned = viz.0.markers().len() - before;
            if spawned > 0 {
                debug!(
                    "handviz: {:?} visualizer {:?} spawned {} markers",
                    viz.0.handedness(),
                    root,
                    spawned
                );
            }

            if let Some(mut slot) = world.get_mut::<HandVisualizer>(root) {
                *slot = viz;
            }
        }
    });
}

/// Global transform of `entity` built from the local transforms up its
/// ancestor chain, so it is current even before propagation runs.
fn current_global(
    entity: Entity,
    ancestors: &Query<(&Transform, Option<&Parent>), Without<HandMarker>>,
) -> GlobalTransform {
    let mut global = GlobalTransform::IDENTITY;
    let mut next = Some(entity);
    while let Some(e) = next {
        let Ok((tf, parent)) = ancestors.get(e) else {
            break;
        };
        global = GlobalTransform::from(*tf) * global;
        next = parent.map(Parent::get);
    }
    global
}

/// Express each marker's world pose in its parent's space. Runs in
/// `PostUpdate` ahead of transform propagation.
pub fn sync_marker_transforms(
    mut markers: Query<(&MarkerPose, &mut Transform, Option<&Parent>), With<HandMarker>>,
    ancestors: Query<(&Transform, Option<&Parent>), Without<HandMarker>>,
) {
    for (pose, mut tf, parent) in &mut markers {
        let parent_tf = parent
            .map(|p| current_global(p.get(), &ancestors))
            .unwrap_or(GlobalTransform::IDENTITY);
        let (scale, rotation, translation) = parent_tf.to_scale_rotation_translation();
        if scale.cmpeq(Vec3::ZERO).any() {
            continue;
        }
        let inv = rotation.inverse();
        tf.translation = inv * (pose.translation - translation) / scale;
        tf.rotation = inv * pose.rotation;
    }
}
