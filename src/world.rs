use rand::Rng;

use crate::camera::{FpsCamera, KeyResponse, ViewTransform};
use crate::config::SceneConfig;
use crate::core::controller::InputEvent;
use crate::layout::{generate_tree_positions, CloudField, LayoutError, TreeLayoutParams, TreePosition};
use crate::scene::{DrawItem, Scene};

/// Everything that changes while walking around, owned by the frame loop
#[derive(Debug, Clone)]
pub struct World {
    pub camera: FpsCamera,
    pub clouds: CloudField,
    trees: Vec<TreePosition>,
    scene: Scene,
}

impl World {
    /// Place the trees and set the camera at its starting pose
    pub fn new<R: Rng + ?Sized>(config: &SceneConfig, rng: &mut R) -> Result<Self, LayoutError> {
        let params = TreeLayoutParams::from(&config.layout);
        let trees = generate_tree_positions(&params, rng)?;
        let scene = Scene::new(&trees);

        Ok(Self {
            camera: FpsCamera::new(&config.camera),
            clouds: CloudField::new(&config.clouds),
            trees,
            scene,
        })
    }

    pub fn trees(&self) -> &[TreePosition] {
        &self.trees
    }

    /// Route one input event. Returns true when the host should shut down.
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Key { button, pressed } => {
                self.camera.on_key_event(button, pressed) == KeyResponse::Exit
            }
            InputEvent::Pointer { x, y } => {
                self.camera.on_pointer_move(x, y);
                false
            }
        }
    }

    /// Key releases are not delivered while unfocused, so held keys are dropped
    pub fn on_focus_lost(&mut self) {
        self.camera.release_movement();
    }

    /// Advance clouds and camera by one frame
    pub fn step(&mut self, delta_time: f32) {
        self.clouds.advance(delta_time);
        self.camera.tick(delta_time);
    }

    pub fn view(&self) -> ViewTransform {
        self.camera.view()
    }

    pub fn draw_items(&self) -> Vec<DrawItem> {
        self.scene.frame_items(&self.clouds)
    }
}
