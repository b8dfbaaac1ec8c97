//! The per-frame driver.
//!
//! [`Game`] owns the ECS world and the update schedule. A host creates it,
//! spawns its UI entities, calls [`Game::initialize`] once and then
//! [`Game::tick`] every frame with the frame time and the cancel key level.
//! The host reads back [`WorldTime::time_scale`], [`DisplaySettings`],
//! [`SceneRequest`] and the [`AudioSource`](crate::components::audiosource::AudioSource)
//! volumes to drive its own window, clock and mixer.

use crate::events::panels::{
    SwitchPanelAfterDelayEvent, SwitchPanelEvent, TogglePanelsAfterDelayEvent, TogglePanelsEvent,
};
use crate::events::pause::{PauseGameEvent, QuitToMenuEvent, ResumeGameEvent, TogglePauseEvent};
use crate::events::savegame::{
    LoadGameEvent, SaveGameEvent, load_game_observer, save_game_observer,
};
use crate::events::settings::{
    BgmVolumeEvent, FullscreenEvent, ResolutionSelectedEvent, SfxVolumeEvent,
};
use crate::resources::display::DisplaySettings;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::pause::PauseController;
use crate::resources::prefs::PrefsStore;
use crate::resources::savegame::SaveSlot;
use crate::resources::scene::SceneRequest;
use crate::resources::scheduler::ScheduledActions;
use crate::resources::settings::{SettingsBindings, SettingsController};
use crate::resources::worldtime::WorldTime;
use crate::systems::panels::{
    switch_panel_after_delay_observer, switch_panel_observer, toggle_panels_after_delay_observer,
    toggle_panels_observer,
};
use crate::systems::pause::{
    pause_game_observer, pause_input_system, quit_to_menu_observer, reset_pause,
    resume_game_observer, toggle_pause_observer,
};
use crate::systems::scheduler::run_scheduled_actions;
use crate::systems::settings::{
    bgm_volume_observer, fullscreen_observer, initialize_settings, resolution_selected_observer,
    settings_widget_system, sfx_volume_observer,
};
use crate::systems::time::update_world_time;
use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemId;
use log::{debug, error, info};

/// Register every observer the shell relies on.
pub fn register_observers(world: &mut World) {
    // Pause menu
    world.add_observer(toggle_pause_observer);
    world.add_observer(pause_game_observer);
    world.add_observer(resume_game_observer);
    world.add_observer(quit_to_menu_observer);
    // Save slot
    world.add_observer(save_game_observer);
    world.add_observer(load_game_observer);
    // Panels
    world.add_observer(switch_panel_observer);
    world.add_observer(toggle_panels_observer);
    world.add_observer(switch_panel_after_delay_observer);
    world.add_observer(toggle_panels_after_delay_observer);
    // Settings
    world.add_observer(resolution_selected_observer);
    world.add_observer(bgm_volume_observer);
    world.add_observer(sfx_volume_observer);
    world.add_observer(fullscreen_observer);
    world.flush();
}

/// World, schedule and setup hooks of one running game.
pub struct Game {
    world: World,
    update: Schedule,
    setup_systems: Vec<SystemId>,
    initialized: bool,
}

impl Game {
    /// Build a game whose save slot and preferences live where `config` says.
    pub fn new(config: GameConfig) -> Self {
        let prefs = PrefsStore::open(config.prefs_path());
        let slot = SaveSlot::from_config(&config);
        Self::with_stores(config, prefs, slot)
    }

    /// Build a game with explicit stores (e.g. an in-memory preference store).
    pub fn with_stores(config: GameConfig, prefs: PrefsStore, slot: SaveSlot) -> Self {
        let mut world = World::new();
        world.insert_resource(WorldTime::default().with_time_scale(1.0));
        world.insert_resource(InputState::default());
        world.insert_resource(PauseController::new());
        world.insert_resource(SceneRequest::new());
        world.insert_resource(ScheduledActions::new());
        world.insert_resource(DisplaySettings::new(
            config.window_width,
            config.window_height,
            config.fullscreen,
        ));
        world.insert_resource(SettingsController::default());
        world.insert_resource(prefs);
        world.insert_resource(slot);
        world.insert_resource(config);

        register_observers(&mut world);

        let setup_systems = vec![
            world.register_system(reset_pause),
            world.register_system(initialize_settings),
        ];

        let mut update = Schedule::default();
        update.add_systems(
            (
                pause_input_system,
                run_scheduled_actions,
                settings_widget_system,
            )
                .chain(),
        );

        Self {
            world,
            update,
            setup_systems,
            initialized: false,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Point the pause controller at the pause menu and its overlay.
    pub fn set_pause_ui(&mut self, menu: Option<Entity>, overlay: Option<Entity>) {
        let mut controller = self.world.resource_mut::<PauseController>();
        controller.menu = menu;
        controller.overlay = overlay;
    }

    /// Bind the settings screen widgets. Must happen before [`initialize`](Self::initialize).
    pub fn set_settings_bindings(&mut self, bindings: SettingsBindings) {
        self.world.resource_mut::<SettingsController>().bindings = bindings;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Run the one-shot setup: start unpaused and restore saved settings.
    pub fn initialize(&mut self) {
        for id in self.setup_systems.iter() {
            if let Err(e) = self.world.run_system(*id) {
                error!("Setup system failed: {}", e);
            }
        }
        self.world.flush();
        self.initialized = true;
        info!("Game initialized");
    }

    /// Advance one frame.
    ///
    /// `dt` is the unscaled frame time in seconds; `cancel_down` is whether
    /// the cancel key is held this frame.
    pub fn tick(&mut self, dt: f32, cancel_down: bool) {
        if !self.initialized {
            debug!("tick() before initialize(); initializing now");
            self.initialize();
        }
        self.world
            .resource_mut::<InputState>()
            .cancel
            .update(cancel_down);
        update_world_time(&mut self.world, dt);

        self.update.run(&mut self.world);

        self.world.clear_trackers(); // Clear changed components for next frame
    }

    /// Consume a pending scene load request.
    pub fn take_scene_request(&mut self) -> Option<usize> {
        self.world.resource_mut::<SceneRequest>().take()
    }

    pub fn save_game(&mut self, character: i32, character_name: &str) {
        self.world.trigger(SaveGameEvent {
            character,
            character_name: character_name.to_string(),
        });
        self.world.flush();
    }

    pub fn load_game(&mut self) {
        self.world.trigger(LoadGameEvent {});
        self.world.flush();
    }

    pub fn toggle_pause(&mut self) {
        self.world.trigger(TogglePauseEvent {});
        self.world.flush();
    }

    pub fn pause(&mut self) {
        self.world.trigger(PauseGameEvent {});
        self.world.flush();
    }

    pub fn resume(&mut self) {
        self.world.trigger(ResumeGameEvent {});
        self.world.flush();
    }

    pub fn quit_to_menu(&mut self) {
        self.world.trigger(QuitToMenuEvent {});
        self.world.flush();
    }

    pub fn switch_to_panel(&mut self, switcher: Entity, index: i32) {
        self.world.trigger(SwitchPanelEvent { switcher, index });
        self.world.flush();
    }

    pub fn switch_to_panel_after_delay(&mut self, switcher: Entity, index: i32, delay: f32) {
        self.world.trigger(SwitchPanelAfterDelayEvent {
            switcher,
            index,
            delay,
        });
        self.world.flush();
    }

    pub fn toggle_between_panels(&mut self, switcher: Entity, a: i32, b: i32) {
        self.world.trigger(TogglePanelsEvent { switcher, a, b });
        self.world.flush();
    }

    pub fn toggle_between_panels_after_delay(
        &mut self,
        switcher: Entity,
        a: i32,
        b: i32,
        delay: f32,
    ) {
        self.world.trigger(TogglePanelsAfterDelayEvent {
            switcher,
            a,
            b,
            delay,
        });
        self.world.flush();
    }

    pub fn select_resolution(&mut self, index: i32) {
        self.world.trigger(ResolutionSelectedEvent { index });
        self.world.flush();
    }

    pub fn set_bgm_volume(&mut self, volume: f32) {
        self.world.trigger(BgmVolumeEvent { volume });
        self.world.flush();
    }

    pub fn set_sfx_volume(&mut self, volume: f32) {
        self.world.trigger(SfxVolumeEvent { volume });
        self.world.flush();
    }

    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        self.world.trigger(FullscreenEvent { fullscreen });
        self.world.flush();
    }
}
