// Demo ground - noise-generated rolling terrain the camera rig levels against
use bevy::prelude::*;
use bevy::render::mesh::VertexAttributeValues;
use noise::{Fbm, MultiFractal, NoiseFn, Perlin};
use crate::constants::*;
use crate::types::GroundLayers;

pub struct TerrainPlugin;

impl Plugin for TerrainPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(TerrainConfig::default())
            .add_systems(Startup, spawn_terrain);
    }
}

/// Terrain configuration resource
#[derive(Resource, Clone, Debug)]
pub struct TerrainConfig {
    pub grid_size: usize,
    pub terrain_size: f32,
    pub max_height: f32,
    pub seed: u32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            grid_size: TERRAIN_GRID_SIZE,
            terrain_size: TERRAIN_SIZE,
            max_height: TERRAIN_MAX_HEIGHT,
            seed: 42,
        }
    }
}

/// Marker component for the terrain entity
#[derive(Component)]
pub struct TerrainMarker;

/// Resource storing the heightmap data for placing things on the ground
#[derive(Resource)]
pub struct TerrainHeightmap {
    pub heights: Vec<Vec<f32>>,
    pub grid_size: usize,
    pub terrain_size: f32,
    pub cell_size: f32,
}

impl TerrainHeightmap {
    pub fn new(heights: Vec<Vec<f32>>, config: &TerrainConfig) -> Self {
        Self {
            heights,
            grid_size: config.grid_size,
            terrain_size: config.terrain_size,
            cell_size: config.terrain_size / (config.grid_size - 1) as f32,
        }
    }

    /// Sample height at world position (x, z) with bilinear interpolation
    pub fn sample_height(&self, x: f32, z: f32) -> f32 {
        let half_size = self.terrain_size / 2.0;
        let grid_x = ((x + half_size) / self.cell_size).clamp(0.0, (self.grid_size - 1) as f32);
        let grid_z = ((z + half_size) / self.cell_size).clamp(0.0, (self.grid_size - 1) as f32);

        let x0 = grid_x.floor() as usize;
        let z0 = grid_z.floor() as usize;
        let x1 = (x0 + 1).min(self.grid_size - 1);
        let z1 = (z0 + 1).min(self.grid_size - 1);

        let fx = grid_x.fract();
        let fz = grid_z.fract();

        let h0 = self.heights[z0][x0] * (1.0 - fx) + self.heights[z0][x1] * fx;
        let h1 = self.heights[z1][x0] * (1.0 - fx) + self.heights[z1][x1] * fx;

        h0 * (1.0 - fz) + h1 * fz
    }
}

/// Generate heightmap using Perlin noise with fractal Brownian motion
/// Gentle hills fading out toward flat edges
pub fn generate_heightmap(config: &TerrainConfig) -> Vec<Vec<f32>> {
    let grid_size = config.grid_size;
    let mut heights = vec![vec![0.0f32; grid_size]; grid_size];

    let fbm: Fbm<Perlin> = Fbm::new(config.seed)
        .set_octaves(3)
        .set_persistence(0.4)
        .set_lacunarity(2.0);

    let half_size = config.terrain_size / 2.0;
    let cell_size = config.terrain_size / (grid_size - 1) as f32;
    let noise_scale = 0.03; // Lower = larger features

    for (z, row) in heights.iter_mut().enumerate() {
        for (x, height) in row.iter_mut().enumerate() {
            let world_x = (x as f32 * cell_size) - half_size;
            let world_z = (z as f32 * cell_size) - half_size;

            // Noise is roughly -1..1; remap to 0..1
            let noise_val = fbm.get([world_x as f64 * noise_scale, world_z as f64 * noise_scale]);
            let normalized = ((noise_val as f32 + 1.0) * 0.5).clamp(0.0, 1.0);

            let edge_dist_x = (half_size - world_x.abs()) / half_size;
            let edge_dist_z = (half_size - world_z.abs()) / half_size;
            let edge_factor = edge_dist_x.min(edge_dist_z).clamp(0.0, 1.0).powf(0.5);

            *height = normalized * config.max_height * edge_factor;
        }
    }

    heights
}

/// Subdivided plane with every vertex lifted onto the heightmap
pub fn build_terrain_mesh(heightmap: &TerrainHeightmap) -> Mesh {
    // A plane with n subdivisions has n + 2 vertices per side
    let subdivisions = heightmap.grid_size.saturating_sub(2) as u32;
    let mut mesh = Plane3d::default()
        .mesh()
        .size(heightmap.terrain_size, heightmap.terrain_size)
        .subdivisions(subdivisions)
        .build();

    if let Some(VertexAttributeValues::Float32x3(positions)) = mesh.attribute_mut(Mesh::ATTRIBUTE_POSITION) {
        for position in positions.iter_mut() {
            position[1] = heightmap.sample_height(position[0], position[2]);
        }
    }
    mesh.compute_smooth_normals();
    mesh
}

/// System: Spawn the terrain on the ground layer
pub fn spawn_terrain(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<TerrainConfig>,
) {
    let heightmap = TerrainHeightmap::new(generate_heightmap(&config), &config);
    let mesh = build_terrain_mesh(&heightmap);

    commands.spawn((
        Mesh3d(meshes.add(mesh)),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.35, 0.45, 0.25),
            perceptual_roughness: 0.9,
            metallic: 0.0,
            ..default()
        })),
        Transform::default(),
        GroundLayers::GROUND,
        TerrainMarker,
        Name::new("Terrain"),
    ));
    commands.insert_resource(heightmap);

    info!(
        "Terrain spawned: {}x{} grid over {:.0} units, seed {}",
        config.grid_size, config.grid_size, config.terrain_size, config.seed
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> TerrainConfig {
        TerrainConfig { grid_size: 9, terrain_size: 40.0, ..default() }
    }

    #[test]
    fn heights_stay_in_band_and_edges_are_flat() {
        let config = small_config();
        let heights = generate_heightmap(&config);
        assert_eq!(heights.len(), config.grid_size);
        for row in &heights {
            for &h in row {
                assert!((0.0..=config.max_height).contains(&h));
            }
        }
        let last = config.grid_size - 1;
        assert_eq!(heights[0][4], 0.0);
        assert_eq!(heights[last][4], 0.0);
        assert_eq!(heights[4][0], 0.0);
        assert_eq!(heights[4][last], 0.0);
    }

    #[test]
    fn sampling_hits_grid_vertices_and_clamps_outside() {
        let config = small_config();
        let heights = generate_heightmap(&config);
        let expected_centre = heights[4][4];
        let corner = heights[0][0];
        let heightmap = TerrainHeightmap::new(heights, &config);

        assert!((heightmap.sample_height(0.0, 0.0) - expected_centre).abs() < 1e-5);
        assert!((heightmap.sample_height(-500.0, -500.0) - corner).abs() < 1e-5);
    }

    #[test]
    fn mesh_covers_every_grid_cell() {
        let config = small_config();
        let heightmap = TerrainHeightmap::new(generate_heightmap(&config), &config);
        let mesh = build_terrain_mesh(&heightmap);
        assert_eq!(mesh.count_vertices(), config.grid_size * config.grid_size);
        let index_count = mesh.indices().map_or(0, |indices| indices.len());
        assert_eq!(index_count, (config.grid_size - 1) * (config.grid_size - 1) * 6);
    }

    #[test]
    fn mesh_vertices_sit_on_the_heightmap() {
        let config = small_config();
        let heightmap = TerrainHeightmap::new(generate_heightmap(&config), &config);
        let mesh = build_terrain_mesh(&heightmap);

        let Some(VertexAttributeValues::Float32x3(positions)) = mesh.attribute(Mesh::ATTRIBUTE_POSITION) else {
            panic!("terrain mesh has positions");
        };
        for &[x, y, z] in positions {
            assert!((y - heightmap.sample_height(x, z)).abs() < 1e-4);
        }
        let Some(VertexAttributeValues::Float32x3(normals)) = mesh.attribute(Mesh::ATTRIBUTE_NORMAL) else {
            panic!("terrain mesh has normals");
        };
        assert!(normals.iter().all(|normal| normal[1] > 0.0));
    }
}
