use glam::Vec3;
use pyramid_walk::config::{CloudConfig, SceneConfig};
use pyramid_walk::layout::{CloudField, TreePosition};
use pyramid_walk::scene::{DrawItem, MeshKind, Scene, COURT_X, SUN_POSITION};
use pyramid_walk::textures::TextureKey;
use pyramid_walk::world::World;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn items_for(trees: &[TreePosition]) -> Vec<DrawItem> {
    Scene::new(trees).frame_items(&CloudField::new(&CloudConfig::default()))
}

fn with_texture(items: &[DrawItem], key: TextureKey) -> Vec<DrawItem> {
    items
        .iter()
        .filter(|item| item.material.texture == Some(key))
        .copied()
        .collect()
}

#[cfg(test)]
mod layout_tests {
    use super::*;

    #[test]
    fn test_each_tree_adds_trunk_and_crown() {
        let trees = [
            TreePosition { x: -20.0, z: 15.0 },
            TreePosition { x: 40.0, z: -45.0 },
            TreePosition { x: 0.0, z: 55.0 },
        ];
        let empty = Scene::new(&[]).static_item_count();
        assert_eq!(Scene::new(&trees).static_item_count(), empty + 6);

        let items = items_for(&trees);
        let trunks = with_texture(&items, TextureKey::Wood);
        let crowns = with_texture(&items, TextureKey::Leaves);
        assert_eq!(trunks.len(), 3);
        assert_eq!(crowns.len(), 3);

        for ((trunk, crown), tree) in trunks.iter().zip(&crowns).zip(&trees) {
            assert_eq!(trunk.translation(), Vec3::new(tree.x, 0.5, tree.z));
            assert_eq!(crown.translation(), Vec3::new(tree.x, 1.4, tree.z));
        }
    }

    #[test]
    fn test_court_elements_positions() {
        let items = items_for(&[]);

        let hoops: Vec<_> = items.iter().filter(|i| i.mesh == MeshKind::Hoop).collect();
        assert_eq!(hoops.len(), 2);
        for (hoop, z) in hoops.iter().zip([3.5, -3.5]) {
            assert!((hoop.translation() - Vec3::new(COURT_X, 2.2, z)).length() < 1e-6);
        }

        let ball = with_texture(&items, TextureKey::Ball);
        assert_eq!(ball.len(), 1);
        assert_eq!(ball[0].translation(), Vec3::new(COURT_X, 0.4, 0.0));
        assert_eq!(ball[0].mesh, MeshKind::Sphere);
    }

    #[test]
    fn test_hoop_opening_faces_along_x() {
        let items = items_for(&[]);
        let hoop = items.iter().find(|i| i.mesh == MeshKind::Hoop).unwrap();
        // The torus axis is +Z in model space
        let axis = hoop.model.transform_vector3(Vec3::Z);
        assert!(axis.x.abs() > 0.999);
    }

    #[test]
    fn test_sun_is_unlit_and_drawn_last() {
        let items = items_for(&[]);
        let sun = items.last().unwrap();
        assert_eq!(sun.translation(), SUN_POSITION);
        assert!(!sun.material.lit);
        assert_eq!(sun.material.texture, None);
    }

    #[test]
    fn test_pyramid_tiers_shrink_upwards() {
        let items = items_for(&[]);
        let tiers: Vec<_> = with_texture(&items, TextureKey::Stone)
            .into_iter()
            .filter(|item| item.translation().x == 0.0)
            .collect();
        assert_eq!(tiers.len(), 10);
        for pair in tiers.windows(2) {
            assert!(pair[1].model.x_axis.x < pair[0].model.x_axis.x);
        }
        assert!((tiers[9].model.x_axis.x - 1.9).abs() < 1e-5);
    }
}

#[cfg(test)]
mod cloud_draw_tests {
    use super::*;

    #[test]
    fn test_clouds_follow_offset_with_shadows() {
        let scene = Scene::new(&[]);
        let mut field = CloudField::new(&CloudConfig::default());
        field.advance(3.0);

        let items = scene.frame_items(&field);
        let clouds = &items[1..9];
        for (pair, (cloud, position)) in clouds.chunks(2).zip(field.positions()) {
            let (body, shadow) = (&pair[0], &pair[1]);
            assert_eq!(body.translation(), position);
            assert_eq!(shadow.translation(), Vec3::new(position.x, 0.01, position.z));
            assert_eq!(body.model.x_axis.x, cloud.width);
            assert_eq!(body.material.color[3], 0.6);
            assert_eq!(shadow.material.color, [0.0, 0.0, 0.0, 0.3]);
        }
    }

    #[test]
    fn test_world_step_moves_cloud_items() {
        let mut world = World::new(&SceneConfig::default(), &mut StdRng::seed_from_u64(5)).unwrap();
        let before = world.draw_items()[1].translation();
        world.step(1.0);
        let after = world.draw_items()[1].translation();
        assert!((after.z - before.z - 5.0).abs() < 1e-5);
        assert_eq!(after.x, before.x);
    }
}
