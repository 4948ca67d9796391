//! Draw lists for the plaza: ground, clouds and their shadows, the stepped
//! pyramid, trees, the ball court and the sun.
//!
//! Everything except the clouds is fixed once the tree layout is known, so the
//! static part is built once and each frame only splices the clouds in.

use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Quat, Vec3};

use crate::geometry::{self, Mesh};
use crate::layout::{CloudField, TreePosition};
use crate::textures::TextureKey;

pub const GROUND_HALF_EXTENT: f32 = 120.0;
pub const GROUND_UV_REPEAT: f32 = 25.0;

pub const PYRAMID_TIERS: usize = 10;
pub const PYRAMID_BASE: f32 = 10.0;
pub const PYRAMID_TIER_HEIGHT: f32 = 0.6;
pub const PYRAMID_TIER_SHRINK: f32 = 0.9;

pub const COURT_X: f32 = 30.0;
pub const SUN_POSITION: Vec3 = Vec3::new(0.0, 80.0, 0.0);
pub const SUN_RADIUS: f32 = 4.0;

const CLOUD_ALPHA: f32 = 0.6;
const SHADOW_ALPHA: f32 = 0.3;
const SHADOW_HEIGHT: f32 = 0.01;

/// Meshes the renderer keeps resident
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshKind {
    Box,
    Ground,
    Quad,
    Hoop,
    Sphere,
}

impl MeshKind {
    pub const ALL: [MeshKind; 5] = [
        MeshKind::Box,
        MeshKind::Ground,
        MeshKind::Quad,
        MeshKind::Hoop,
        MeshKind::Sphere,
    ];

    /// Tessellate the mesh in model space
    pub fn build(self) -> Mesh {
        match self {
            MeshKind::Box => geometry::unit_box(),
            MeshKind::Ground => geometry::ground_quad(GROUND_HALF_EXTENT, GROUND_UV_REPEAT),
            MeshKind::Quad => geometry::unit_quad(),
            MeshKind::Hoop => geometry::torus(0.1, 0.6, 20, 30),
            // Scaled per instance
            MeshKind::Sphere => geometry::sphere(1.0, 32, 32),
        }
    }
}

/// Surface appearance of one draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub texture: Option<TextureKey>,
    /// Multiplied with the texel; alpha drives blending
    pub color: [f32; 4],
    pub lit: bool,
}

impl Material {
    pub const fn textured(texture: TextureKey) -> Self {
        Self {
            texture: Some(texture),
            color: [1.0; 4],
            lit: true,
        }
    }

    pub const fn flat(color: [f32; 4], lit: bool) -> Self {
        Self {
            texture: None,
            color,
            lit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    pub mesh: MeshKind,
    pub model: Mat4,
    pub material: Material,
}

impl DrawItem {
    /// Unit box scaled to `size` and centred on `center`
    pub fn block(center: Vec3, size: Vec3, material: Material) -> Self {
        Self {
            mesh: MeshKind::Box,
            model: Mat4::from_scale_rotation_translation(size, Quat::IDENTITY, center),
            material,
        }
    }

    pub fn translation(&self) -> Vec3 {
        self.model.w_axis.truncate()
    }
}

/// Static draw items plus the per-frame cloud splice point
#[derive(Debug, Clone)]
pub struct Scene {
    ground: DrawItem,
    solids: Vec<DrawItem>,
}

impl Scene {
    pub fn new(trees: &[TreePosition]) -> Self {
        let mut solids = Vec::with_capacity(PYRAMID_TIERS + trees.len() * 2 + 6);
        solids.extend(pyramid());
        solids.extend(trees.iter().flat_map(|tree| tree_items(*tree)));
        solids.extend(court());
        solids.push(sun());

        Self {
            ground: DrawItem {
                mesh: MeshKind::Ground,
                model: Mat4::IDENTITY,
                material: Material::textured(TextureKey::Grass),
            },
            solids,
        }
    }

    pub fn static_item_count(&self) -> usize {
        self.solids.len() + 1
    }

    /// Full draw list in submission order: ground, clouds with shadows, then solids.
    pub fn frame_items(&self, clouds: &CloudField) -> Vec<DrawItem> {
        let mut items = Vec::with_capacity(self.static_item_count() + clouds.clouds().len() * 2);
        items.push(self.ground);
        items.extend(cloud_items(clouds));
        items.extend_from_slice(&self.solids);
        items
    }
}

fn pyramid() -> impl Iterator<Item = DrawItem> {
    (0..PYRAMID_TIERS).map(|tier| {
        let side = PYRAMID_BASE - PYRAMID_TIER_SHRINK * tier as f32;
        let y = PYRAMID_TIER_HEIGHT * (tier as f32 + 0.5);
        DrawItem::block(
            Vec3::new(0.0, y, 0.0),
            Vec3::new(side, PYRAMID_TIER_HEIGHT, side),
            Material::textured(TextureKey::Stone),
        )
    })
}

fn tree_items(tree: TreePosition) -> [DrawItem; 2] {
    [
        DrawItem::block(
            Vec3::new(tree.x, 0.5, tree.z),
            Vec3::new(0.4, 1.0, 0.4),
            Material::textured(TextureKey::Wood),
        ),
        DrawItem::block(
            Vec3::new(tree.x, 1.4, tree.z),
            Vec3::new(1.2, 1.0, 1.2),
            Material::textured(TextureKey::Leaves),
        ),
    ]
}

fn court() -> Vec<DrawItem> {
    let stone = Material::textured(TextureKey::Stone);
    let hoop_material = Material::flat([0.8, 0.8, 0.8, 1.0], true);

    let mut items = vec![DrawItem::block(
        Vec3::new(COURT_X, 0.05, 0.0),
        Vec3::new(16.0, 0.1, 8.0),
        stone,
    )];

    for side in [1.0, -1.0] {
        items.push(DrawItem::block(
            Vec3::new(COURT_X, 1.5, 4.15 * side),
            Vec3::new(2.0, 3.0, 0.3),
            stone,
        ));
    }
    for side in [1.0, -1.0] {
        items.push(DrawItem {
            mesh: MeshKind::Hoop,
            model: Mat4::from_translation(Vec3::new(COURT_X, 2.2, 3.5 * side))
                * Mat4::from_rotation_y(FRAC_PI_2),
            material: hoop_material,
        });
    }

    items.push(DrawItem {
        mesh: MeshKind::Sphere,
        model: Mat4::from_scale_rotation_translation(
            Vec3::splat(0.35),
            Quat::IDENTITY,
            Vec3::new(COURT_X, 0.4, 0.0),
        ),
        material: Material::textured(TextureKey::Ball),
    });

    items
}

fn sun() -> DrawItem {
    DrawItem {
        mesh: MeshKind::Sphere,
        model: Mat4::from_scale_rotation_translation(
            Vec3::splat(SUN_RADIUS),
            Quat::IDENTITY,
            SUN_POSITION,
        ),
        material: Material::flat([1.0, 0.6, 0.0, 1.0], false),
    }
}

/// Each cloud followed by its shadow on the ground
fn cloud_items(clouds: &CloudField) -> impl Iterator<Item = DrawItem> + '_ {
    clouds.positions().flat_map(|(cloud, position)| {
        let scale = Vec3::new(cloud.width, 1.0, cloud.depth);
        let quad = |center: Vec3, color: [f32; 4]| DrawItem {
            mesh: MeshKind::Quad,
            model: Mat4::from_scale_rotation_translation(scale, Quat::IDENTITY, center),
            material: Material::flat(color, false),
        };
        [
            quad(position, [1.0, 1.0, 1.0, CLOUD_ALPHA]),
            quad(
                Vec3::new(position.x, SHADOW_HEIGHT, position.z),
                [0.0, 0.0, 0.0, SHADOW_ALPHA],
            ),
        ]
    })
}
