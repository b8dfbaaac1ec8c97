//! Settings systems.
//!
//! This module provides the settings screen behavior:
//! - [`initialize_settings`] – one-shot setup: builds the resolution list,
//!   discovers audio sources, restores saved preferences and applies them
//! - [`settings_widget_system`] – turns edits of the bound dropdown, sliders
//!   and toggle into settings events
//! - [`resolution_selected_observer`], [`bgm_volume_observer`],
//!   [`sfx_volume_observer`], [`fullscreen_observer`] – apply one change and
//!   persist it to the [`PrefsStore`] immediately
//!
//! # Audio discovery
//!
//! When no music source is bound, the first match wins: an [`AudioSource`]
//! tagged with [`MusicTag`], then a looping source, then any source. Sound
//! effect sources are those referenced by enabled [`SoundEffectEmitter`]s,
//! falling back to every non-looping source. Candidates are visited in
//! ascending entity order. Finding nothing only logs a warning.

use crate::components::audiosource::{AudioSource, MusicTag, SoundEffectEmitter};
use crate::components::widgets::{Dropdown, Slider, Toggle};
use crate::events::settings::{
    BgmVolumeEvent, FullscreenEvent, ResolutionSelectedEvent, SfxVolumeEvent,
};
use crate::resources::display::{DisplaySettings, PRESET_RESOLUTIONS, build_resolution_list};
use crate::resources::prefs::{PrefsStore, keys};
use crate::resources::settings::SettingsController;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

/// What discovery needs to know about one audio source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioCandidate {
    pub entity: Entity,
    pub looping: bool,
    pub tagged: bool,
}

/// Pick the background music source among `candidates` (in priority order).
pub fn find_bgm_source(candidates: &[AudioCandidate]) -> Option<Entity> {
    candidates
        .iter()
        .find(|c| c.tagged)
        .or_else(|| candidates.iter().find(|c| c.looping))
        .or_else(|| candidates.first())
        .map(|c| c.entity)
}

/// Pick the sound effect sources.
///
/// `emitter_sources` are the sources referenced by enabled emitters; only
/// those that are real audio sources are kept. With none left, every
/// non-looping candidate is used instead.
pub fn find_sfx_sources(emitter_sources: &[Entity], candidates: &[AudioCandidate]) -> Vec<Entity> {
    let mut found: Vec<Entity> = Vec::new();
    for source in emitter_sources {
        if candidates.iter().any(|c| c.entity == *source) && !found.contains(source) {
            found.push(*source);
        }
    }
    if found.is_empty() {
        found = candidates
            .iter()
            .filter(|c| !c.looping)
            .map(|c| c.entity)
            .collect();
    }
    found
}

/// Clamp into [0, 1]; NaN reads as silence.
fn clamp_volume(volume: f32) -> f32 {
    if volume.is_nan() {
        0.0
    } else {
        volume.clamp(0.0, 1.0)
    }
}

fn apply_bgm_volume(
    volume: f32,
    controller: &mut SettingsController,
    sources: &mut Query<&mut AudioSource>,
    sliders: &mut Query<&mut Slider>,
    prefs: &mut PrefsStore,
) {
    let clamped = clamp_volume(volume);
    if let Some(source) = controller.bgm_source {
        if let Ok(mut audio) = sources.get_mut(source) {
            audio.set_volume(clamped);
        }
    }
    if let Some(slider) = controller.bindings.bgm_slider {
        if let Ok(mut slider) = sliders.get_mut(slider) {
            slider.set_value(clamped);
        }
    }
    controller.bgm_volume = Some(clamped);
    prefs.store_float(keys::BGM_VOLUME, clamped);
    debug!("BGM volume set to {}", clamped);
}

fn apply_sfx_volume(
    volume: f32,
    controller: &mut SettingsController,
    sources: &mut Query<&mut AudioSource>,
    sliders: &mut Query<&mut Slider>,
    prefs: &mut PrefsStore,
) {
    let clamped = clamp_volume(volume);
    for source in controller.sfx_sources.iter() {
        if let Ok(mut audio) = sources.get_mut(*source) {
            audio.set_volume(clamped);
        }
    }
    if let Some(slider) = controller.bindings.sfx_slider {
        if let Ok(mut slider) = sliders.get_mut(slider) {
            slider.set_value(clamped);
        }
    }
    controller.sfx_volume = Some(clamped);
    prefs.store_float(keys::SFX_VOLUME, clamped);
    debug!("SFX volume set to {}", clamped);
}

/// Apply the resolution at `index`; out-of-range indices change nothing.
fn apply_resolution_index(
    index: i32,
    controller: &mut SettingsController,
    display: &mut DisplaySettings,
    prefs: &mut PrefsStore,
) -> bool {
    let Some(resolution) = controller.resolution_at(index) else {
        warn!(
            "Settings: resolution index {} is out of range (0..{}).",
            index,
            controller.resolutions.len().saturating_sub(1)
        );
        return false;
    };
    let fullscreen = prefs.get_int(keys::FULLSCREEN, display.is_fullscreen() as i32) == 1;
    display.set_resolution(resolution.width, resolution.height, fullscreen);
    prefs.store_int(keys::RESOLUTION_INDEX, index);
    controller.resolution_index = Some(index as usize);
    controller.fullscreen = Some(fullscreen);
    info!("Resolution set to {} (fullscreen={})", resolution, fullscreen);
    true
}

fn apply_fullscreen(
    fullscreen: bool,
    controller: &mut SettingsController,
    display: &mut DisplaySettings,
    toggles: &mut Query<&mut Toggle>,
    prefs: &mut PrefsStore,
) {
    display.set_fullscreen(fullscreen);
    if let Some(toggle) = controller.bindings.fullscreen_toggle {
        if let Ok(mut toggle) = toggles.get_mut(toggle) {
            toggle.on = fullscreen;
        }
    }
    controller.fullscreen = Some(fullscreen);
    prefs.store_int(keys::FULLSCREEN, fullscreen as i32);
    info!("Fullscreen set to {}", fullscreen);
}

/// One-shot setup of the settings screen.
#[allow(clippy::too_many_arguments)]
pub fn initialize_settings(
    mut controller: ResMut<SettingsController>,
    mut display: ResMut<DisplaySettings>,
    mut prefs: ResMut<PrefsStore>,
    mut audio: ParamSet<(
        Query<(Entity, &AudioSource, Has<MusicTag>)>,
        Query<&mut AudioSource>,
    )>,
    emitters: Query<&SoundEffectEmitter>,
    mut dropdowns: Query<&mut Dropdown>,
    mut sliders: Query<&mut Slider>,
    mut toggles: Query<&mut Toggle>,
) {
    let controller: &mut SettingsController = &mut controller;
    let bindings = controller.bindings;

    // Resolution candidates, current display mode included
    controller.resolutions = build_resolution_list(&PRESET_RESOLUTIONS, display.resolution());
    if let Some(dropdown) = bindings.resolution_dropdown {
        match dropdowns.get_mut(dropdown) {
            Ok(mut dropdown) => {
                dropdown.clear_options();
                dropdown.add_options(controller.resolution_labels());
            }
            Err(_) => warn!("Settings: resolution dropdown {:?} not found", dropdown),
        }
    }

    // Audio discovery
    let (candidates, volumes) = {
        let query = audio.p0();
        let mut found: Vec<(AudioCandidate, f32)> = query
            .iter()
            .map(|(entity, source, tagged)| {
                (
                    AudioCandidate {
                        entity,
                        looping: source.looping,
                        tagged,
                    },
                    source.volume(),
                )
            })
            .collect();
        found.sort_by_key(|(c, _)| c.entity);
        let volumes: Vec<(Entity, f32)> = found.iter().map(|(c, v)| (c.entity, *v)).collect();
        let candidates: Vec<AudioCandidate> = found.into_iter().map(|(c, _)| c).collect();
        (candidates, volumes)
    };
    let volume_of = |entity: Entity| {
        volumes
            .iter()
            .find(|(e, _)| *e == entity)
            .map(|(_, v)| *v)
    };

    controller.bgm_source = match bindings.bgm_source {
        Some(bound) if volume_of(bound).is_some() => Some(bound),
        Some(bound) => {
            warn!("Settings: bound music source {:?} is not an AudioSource", bound);
            find_bgm_source(&candidates)
        }
        None => find_bgm_source(&candidates),
    };
    if controller.bgm_source.is_none() {
        warn!(
            "Settings: No AudioSource found for background music. Bind one or tag it with MusicTag."
        );
    }

    let mut emitter_sources: Vec<Entity> = emitters
        .iter()
        .filter(|e| e.enabled)
        .filter_map(|e| e.source)
        .collect();
    emitter_sources.sort();
    controller.sfx_sources = find_sfx_sources(&emitter_sources, &candidates);
    if controller.sfx_sources.is_empty() {
        warn!("Settings: No SFX AudioSources found. Give SoundEffectEmitters an audio source.");
    }

    // Saved values, defaulting to what the scene currently has
    let current_bgm = controller.bgm_source.and_then(volume_of).unwrap_or(1.0);
    let current_sfx = if controller.sfx_sources.is_empty() {
        1.0
    } else {
        let sum: f32 = controller
            .sfx_sources
            .iter()
            .filter_map(|e| volume_of(*e))
            .sum();
        sum / controller.sfx_sources.len() as f32
    };
    let current_index = controller.index_of(display.resolution()) as i32;

    let saved_bgm = prefs.get_float(keys::BGM_VOLUME, current_bgm);
    let saved_sfx = prefs.get_float(keys::SFX_VOLUME, current_sfx);
    let saved_index = prefs.get_int(keys::RESOLUTION_INDEX, current_index);

    let mut sources = audio.p1();
    apply_bgm_volume(saved_bgm, controller, &mut sources, &mut sliders, &mut prefs);
    apply_sfx_volume(saved_sfx, controller, &mut sources, &mut sliders, &mut prefs);

    let saved_fullscreen = prefs.get_int(keys::FULLSCREEN, display.is_fullscreen() as i32) == 1;
    if let Some(toggle) = bindings.fullscreen_toggle {
        if let Ok(mut toggle) = toggles.get_mut(toggle) {
            toggle.on = saved_fullscreen;
        }
    }
    controller.fullscreen = Some(saved_fullscreen);

    if let Some(dropdown) = bindings.resolution_dropdown {
        if let Ok(mut dropdown) = dropdowns.get_mut(dropdown) {
            let last = controller.resolutions.len().saturating_sub(1) as i32;
            dropdown.set_value(saved_index.clamp(0, last) as usize);
        }
    }
    apply_resolution_index(saved_index, controller, &mut display, &mut prefs);

    controller.initialized = true;
    info!(
        "Settings initialized: {} resolutions, bgm={:?}, {} sfx sources",
        controller.resolutions.len(),
        controller.bgm_source,
        controller.sfx_sources.len()
    );
}

/// Forward edits of bound widgets to the settings observers.
///
/// A widget whose value already matches the applied setting is ignored, so
/// programmatic updates made by the observers do not loop back.
pub fn settings_widget_system(
    controller: Res<SettingsController>,
    sliders: Query<(Entity, &Slider), Changed<Slider>>,
    dropdowns: Query<(Entity, &Dropdown), Changed<Dropdown>>,
    toggles: Query<(Entity, &Toggle), Changed<Toggle>>,
    mut commands: Commands,
) {
    if !controller.is_initialized() {
        return;
    }
    let bindings = &controller.bindings;

    for (entity, slider) in sliders.iter() {
        let volume = slider.value();
        if bindings.bgm_slider == Some(entity) && controller.bgm_volume() != Some(volume) {
            commands.trigger(BgmVolumeEvent { volume });
        }
        if bindings.sfx_slider == Some(entity) && controller.sfx_volume() != Some(volume) {
            commands.trigger(SfxVolumeEvent { volume });
        }
    }

    for (entity, dropdown) in dropdowns.iter() {
        if bindings.resolution_dropdown == Some(entity)
            && controller.resolution_index() != Some(dropdown.value())
        {
            commands.trigger(ResolutionSelectedEvent {
                index: dropdown.value() as i32,
            });
        }
    }

    for (entity, toggle) in toggles.iter() {
        if bindings.fullscreen_toggle == Some(entity) && controller.fullscreen() != Some(toggle.on)
        {
            commands.trigger(FullscreenEvent {
                fullscreen: toggle.on,
            });
        }
    }
}

pub fn resolution_selected_observer(
    trigger: On<ResolutionSelectedEvent>,
    mut controller: ResMut<SettingsController>,
    mut display: ResMut<DisplaySettings>,
    mut dropdowns: Query<&mut Dropdown>,
    mut prefs: ResMut<PrefsStore>,
) {
    let index = trigger.event().index;
    if !apply_resolution_index(index, &mut controller, &mut display, &mut prefs) {
        return;
    }
    if let Some(dropdown) = controller.bindings.resolution_dropdown {
        if let Ok(mut dropdown) = dropdowns.get_mut(dropdown) {
            if dropdown.value() != index as usize {
                dropdown.set_value(index as usize);
            }
        }
    }
}

pub fn bgm_volume_observer(
    trigger: On<BgmVolumeEvent>,
    mut controller: ResMut<SettingsController>,
    mut sources: Query<&mut AudioSource>,
    mut sliders: Query<&mut Slider>,
    mut prefs: ResMut<PrefsStore>,
) {
    apply_bgm_volume(
        trigger.event().volume,
        &mut controller,
        &mut sources,
        &mut sliders,
        &mut prefs,
    );
}

pub fn sfx_volume_observer(
    trigger: On<SfxVolumeEvent>,
    mut controller: ResMut<SettingsController>,
    mut sources: Query<&mut AudioSource>,
    mut sliders: Query<&mut Slider>,
    mut prefs: ResMut<PrefsStore>,
) {
    apply_sfx_volume(
        trigger.event().volume,
        &mut controller,
        &mut sources,
        &mut sliders,
        &mut prefs,
    );
}

pub fn fullscreen_observer(
    trigger: On<FullscreenEvent>,
    mut controller: ResMut<SettingsController>,
    mut display: ResMut<DisplaySettings>,
    mut toggles: Query<&mut Toggle>,
    mut prefs: ResMut<PrefsStore>,
) {
    apply_fullscreen(
        trigger.event().fullscreen,
        &mut controller,
        &mut display,
        &mut toggles,
        &mut prefs,
    );
}
