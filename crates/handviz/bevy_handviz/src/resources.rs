use bevy::prelude::*;
use handviz_core::{DeviceRegistry, PrimitiveShape};

/// Devices visible to the visualizers this frame. XR backends refresh it in
/// `HandVizSet::Ingest`.
#[derive(Resource, Default, Debug, Clone, Deref, DerefMut)]
pub struct XrHandDevices(pub DeviceRegistry);

/// Look of spawned markers.
#[derive(Resource, Debug, Clone)]
pub struct MarkerStyle {
    pub color: Color,
    pub unlit: bool,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            color: Color::srgb(0.9, 0.9, 0.95),
            unlit: true,
        }
    }
}

/// Shared marker meshes/material. Absent in headless apps, where markers are
/// spawned without a mesh.
#[derive(Resource, Debug, Clone)]
pub struct MarkerAssets {
    pub sphere: Handle<Mesh>,
    pub cube: Handle<Mesh>,
    pub material: Handle<StandardMaterial>,
}

impl MarkerAssets {
    pub fn mesh(&self, shape: PrimitiveShape) -> Handle<Mesh> {
        match shape {
            PrimitiveShape::Sphere => self.sphere.clone(),
            PrimitiveShape::Cube => self.cube.clone(),
        }
    }
}
