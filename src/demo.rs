//! Demo scene shared by the window host and the headless runner.
//!
//! Spawns a three-page menu driven by a [`PanelSwitcher`], the pause menu
//! with its overlay, one music and one sound effect source, and the
//! settings widgets, then wires them into the [`Game`].

use crate::components::audiosource::{AudioSource, MusicTag, SoundEffectEmitter};
use crate::components::panelswitcher::PanelSwitcher;
use crate::components::uielement::UiElement;
use crate::components::widgets::{Dropdown, Slider, Toggle};
use crate::game::Game;
use crate::resources::settings::SettingsBindings;
use bevy_ecs::prelude::*;

pub const PANEL_NAMES: [&str; 3] = ["Main", "Options", "Credits"];

/// Entities of the demo scene.
#[derive(Debug, Clone)]
pub struct DemoScene {
    pub switcher: Entity,
    pub panels: Vec<Entity>,
    pub pause_menu: Entity,
    pub pause_overlay: Entity,
    pub music: Entity,
    pub sfx: Entity,
    pub resolution_dropdown: Entity,
    pub bgm_slider: Entity,
    pub sfx_slider: Entity,
    pub fullscreen_toggle: Entity,
}

impl DemoScene {
    /// Spawn the scene. Call before [`Game::initialize`].
    pub fn spawn(game: &mut Game) -> Self {
        let world = game.world_mut();

        let panels: Vec<Entity> = PANEL_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| world.spawn(UiElement::new(*name, i == 0)).id())
            .collect();
        let switcher = world
            .spawn((UiElement::shown("Menu"), PanelSwitcher::new(panels.clone())))
            .id();

        let pause_overlay = world.spawn(UiElement::hidden("Pause Overlay")).id();
        let pause_menu = world.spawn(UiElement::hidden("Pause Menu")).id();

        let music = world
            .spawn((AudioSource::new("theme", true).with_volume(0.8), MusicTag))
            .id();
        let sfx = world.spawn(AudioSource::new("blip", false)).id();
        world.spawn(SoundEffectEmitter::new(sfx));

        let resolution_dropdown = world.spawn(Dropdown::new()).id();
        let bgm_slider = world.spawn(Slider::new(1.0)).id();
        let sfx_slider = world.spawn(Slider::new(1.0)).id();
        let fullscreen_toggle = world.spawn(Toggle::default()).id();

        game.set_pause_ui(Some(pause_menu), Some(pause_overlay));
        game.set_settings_bindings(SettingsBindings {
            resolution_dropdown: Some(resolution_dropdown),
            bgm_slider: Some(bgm_slider),
            sfx_slider: Some(sfx_slider),
            fullscreen_toggle: Some(fullscreen_toggle),
            bgm_source: None,
        });

        Self {
            switcher,
            panels,
            pause_menu,
            pause_overlay,
            music,
            sfx,
            resolution_dropdown,
            bgm_slider,
            sfx_slider,
            fullscreen_toggle,
        }
    }

    /// Index of the first shown page, if any.
    pub fn active_panel(&self, world: &World) -> Option<usize> {
        self.panels.iter().position(|panel| {
            world
                .get::<UiElement>(*panel)
                .is_some_and(|element| element.is_active())
        })
    }
}
