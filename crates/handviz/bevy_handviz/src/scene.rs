use bevy::prelude::*;
use handviz_core::{PrimitiveShape, SceneGraph};

use crate::components::{HandMarker, MarkerPose};
use crate::resources::MarkerAssets;

/// [`SceneGraph`] over the Bevy `World`, rooted at a visualizer entity.
pub struct WorldScene<'w> {
    world: &'w mut World,
    root: Entity,
}

impl<'w> WorldScene<'w> {
    pub fn new(world: &'w mut World, root: Entity) -> Self {
        Self { world, root }
    }
}

impl SceneGraph for WorldScene<'_> {
    type Node = Entity;

    fn root(&self) -> Entity {
        self.root
    }

    fn create_primitive(&mut self, shape: PrimitiveShape) -> Entity {
        let render = self
            .world
            .get_resource::<MarkerAssets>()
            .map(|assets| (assets.mesh(shape), assets.material.clone()));
        let mut marker = self.world.spawn((HandMarker, MarkerPose::default()));
        match render {
            Some((mesh, material)) => marker.insert(PbrBundle {
                mesh,
                material,
                ..default()
            }),
            None => marker.insert(SpatialBundle::default()),
        };
        marker.id()
    }

    // Bevy primitives carry no collider; nothing to strip.

    fn set_local_scale(&mut self, node: Entity, scale: [f32; 3]) {
        if let Some(mut tf) = self.world.get_mut::<Transform>(node) {
            tf.scale = Vec3::from_array(scale);
        }
    }

    fn set_parent(&mut self, node: Entity, parent: Entity) {
        if let Some(mut p) = self.world.get_entity_mut(parent) {
            p.add_child(node);
        }
    }

    fn set_world_position(&mut self, node: Entity, position: [f32; 3]) {
        if let Some(mut pose) = self.world.get_mut::<MarkerPose>(node) {
            pose.translation = Vec3::from_array(position);
        }
    }

    fn set_world_rotation(&mut self, node: Entity, rotation: [f32; 4]) {
        if let Some(mut pose) = self.world.get_mut::<MarkerPose>(node) {
            pose.rotation = Quat::from_array(rotation);
        }
    }
}
