//! Panel switcher integration tests: switch, toggle and their delayed forms.

use bevy_ecs::prelude::*;

use menuworks::components::panelswitcher::PanelSwitcher;
use menuworks::components::uielement::UiElement;
use menuworks::demo::DemoScene;
use menuworks::game::Game;
use menuworks::resources::gameconfig::GameConfig;
use menuworks::resources::prefs::PrefsStore;
use menuworks::resources::savegame::SaveSlot;
use menuworks::resources::scheduler::ScheduledActions;

const DT: f32 = 0.25;

fn make_game() -> Game {
    let slot = SaveSlot::new(std::env::temp_dir(), "menuworks_panels_unused.json");
    Game::with_stores(GameConfig::new(), PrefsStore::in_memory(), slot)
}

fn demo() -> (Game, DemoScene) {
    let mut game = make_game();
    let scene = DemoScene::spawn(&mut game);
    game.initialize();
    (game, scene)
}

fn shown(game: &Game, panels: &[Entity]) -> Vec<bool> {
    panels
        .iter()
        .map(|p| game.world().get::<UiElement>(*p).unwrap().is_active())
        .collect()
}

fn set_shown(game: &mut Game, panel: Entity, active: bool) {
    game.world_mut()
        .get_mut::<UiElement>(panel)
        .unwrap()
        .set_active(active);
}

// =============================================================================
// switch_to_panel
// =============================================================================

#[test]
fn switch_leaves_exactly_one_panel_shown() {
    let (mut game, scene) = demo();

    for index in 0..scene.panels.len() {
        game.switch_to_panel(scene.switcher, index as i32);
        let state = shown(&game, &scene.panels);
        assert_eq!(state.iter().filter(|s| **s).count(), 1);
        assert!(state[index]);
    }
}

#[test]
fn switch_hides_every_other_shown_panel() {
    let (mut game, scene) = demo();
    for panel in scene.panels.clone() {
        set_shown(&mut game, panel, true);
    }

    game.switch_to_panel(scene.switcher, 1);

    assert_eq!(shown(&game, &scene.panels), vec![false, true, false]);
}

#[test]
fn switch_out_of_range_changes_nothing() {
    let (mut game, scene) = demo();
    game.switch_to_panel(scene.switcher, 1);
    let before = shown(&game, &scene.panels);

    game.switch_to_panel(scene.switcher, -1);
    game.switch_to_panel(scene.switcher, 3);
    game.switch_to_panel(scene.switcher, i32::MAX);

    assert_eq!(shown(&game, &scene.panels), before);
}

#[test]
fn switch_on_empty_switcher_is_a_no_op() {
    let mut game = make_game();
    let switcher = game
        .world_mut()
        .spawn(PanelSwitcher::new(Vec::new()))
        .id();
    let bystander = game.world_mut().spawn(UiElement::shown("Other")).id();
    game.initialize();

    game.switch_to_panel(switcher, 0);

    assert_eq!(shown(&game, &[bystander]), vec![true]);
}

#[test]
fn switch_on_entity_without_switcher_is_a_no_op() {
    let (mut game, scene) = demo();
    let before = shown(&game, &scene.panels);

    game.switch_to_panel(scene.pause_menu, 0);

    assert_eq!(shown(&game, &scene.panels), before);
}

#[test]
fn switch_skips_unassigned_slots() {
    let mut game = make_game();
    let a = game.world_mut().spawn(UiElement::shown("A")).id();
    let c = game.world_mut().spawn(UiElement::hidden("C")).id();
    let mut switcher = PanelSwitcher::new([a]);
    switcher.panels.push(None);
    switcher.panels.push(Some(c));
    let switcher = game.world_mut().spawn(switcher).id();
    game.initialize();

    game.switch_to_panel(switcher, 2);

    assert_eq!(shown(&game, &[a, c]), vec![false, true]);
}

#[test]
fn switch_can_hide_the_switcher_itself() {
    let mut game = make_game();
    let panels: Vec<Entity> = (0..2)
        .map(|i| game.world_mut().spawn(UiElement::hidden(format!("P{i}"))).id())
        .collect();
    let switcher = game
        .world_mut()
        .spawn((
            UiElement::shown("Title"),
            PanelSwitcher::new(panels.clone()).with_deactivate_self(true),
        ))
        .id();
    game.initialize();

    game.switch_to_panel(switcher, 0);

    assert_eq!(shown(&game, &panels), vec![true, false]);
    assert!(!game.world().get::<UiElement>(switcher).unwrap().is_active());
}

#[test]
fn failed_switch_keeps_the_switcher_shown() {
    let mut game = make_game();
    let panel = game.world_mut().spawn(UiElement::hidden("P")).id();
    let switcher = game
        .world_mut()
        .spawn((
            UiElement::shown("Title"),
            PanelSwitcher::new([panel]).with_deactivate_self(true),
        ))
        .id();
    game.initialize();

    game.switch_to_panel(switcher, 4);

    assert!(game.world().get::<UiElement>(switcher).unwrap().is_active());
}

// =============================================================================
// toggle_between_panels
// =============================================================================

#[test]
fn toggle_swaps_two_panels() {
    let (mut game, scene) = demo();

    game.toggle_between_panels(scene.switcher, 0, 1);
    assert_eq!(shown(&game, &scene.panels), vec![false, true, false]);

    game.toggle_between_panels(scene.switcher, 0, 1);
    assert_eq!(shown(&game, &scene.panels), vec![true, false, false]);
}

#[test]
fn toggle_leaves_other_panels_alone() {
    let (mut game, scene) = demo();
    set_shown(&mut game, scene.panels[2], true);

    game.toggle_between_panels(scene.switcher, 0, 1);

    assert_eq!(shown(&game, &scene.panels), vec![false, true, true]);
}

#[test]
fn toggle_follows_the_first_panel() {
    let (mut game, scene) = demo();
    // Both shown: the first is hidden, the second stays shown
    set_shown(&mut game, scene.panels[1], true);

    game.toggle_between_panels(scene.switcher, 0, 1);

    assert_eq!(shown(&game, &scene.panels), vec![false, true, false]);
}

#[test]
fn toggle_with_invalid_index_changes_nothing() {
    let (mut game, scene) = demo();
    let before = shown(&game, &scene.panels);

    game.toggle_between_panels(scene.switcher, 0, 5);
    game.toggle_between_panels(scene.switcher, -2, 1);

    assert_eq!(shown(&game, &scene.panels), before);
}

// =============================================================================
// Delayed forms
// =============================================================================

#[test]
fn delayed_switch_fires_once_after_the_delay() {
    let (mut game, scene) = demo();

    game.switch_to_panel_after_delay(scene.switcher, 2, 0.5);
    assert_eq!(game.world().resource::<ScheduledActions>().len(), 1);

    game.tick(DT, false);
    assert_eq!(shown(&game, &scene.panels), vec![true, false, false]);

    game.tick(DT, false);
    assert_eq!(shown(&game, &scene.panels), vec![false, false, true]);
    assert!(game.world().resource::<ScheduledActions>().is_empty());

    // Later manual switches are not undone by the finished delay
    game.switch_to_panel(scene.switcher, 0);
    game.tick(DT, false);
    assert_eq!(shown(&game, &scene.panels), vec![true, false, false]);
}

#[test]
fn zero_delay_waits_for_the_next_tick() {
    let (mut game, scene) = demo();
    game.tick(DT, false);

    game.switch_to_panel_after_delay(scene.switcher, 1, 0.0);
    assert_eq!(shown(&game, &scene.panels), vec![true, false, false]);

    game.tick(DT, false);
    assert_eq!(shown(&game, &scene.panels), vec![false, true, false]);
}

#[test]
fn delayed_switch_fires_while_paused() {
    let (mut game, scene) = demo();
    game.tick(DT, true);
    game.switch_to_panel_after_delay(scene.switcher, 1, 0.5);

    game.tick(DT, false);
    game.tick(DT, false);

    assert_eq!(shown(&game, &scene.panels), vec![false, true, false]);
    assert!(game.world().resource::<ScheduledActions>().is_empty());
}

#[test]
fn delayed_actions_run_in_deadline_order() {
    let (mut game, scene) = demo();

    game.switch_to_panel_after_delay(scene.switcher, 2, 0.5);
    game.switch_to_panel_after_delay(scene.switcher, 1, 0.25);

    game.tick(DT, false);
    assert_eq!(shown(&game, &scene.panels), vec![false, true, false]);

    game.tick(DT, false);
    assert_eq!(shown(&game, &scene.panels), vec![false, false, true]);
}

#[test]
fn delayed_toggle_swaps_after_the_delay() {
    let (mut game, scene) = demo();

    game.toggle_between_panels_after_delay(scene.switcher, 0, 2, 0.25);
    assert_eq!(shown(&game, &scene.panels), vec![true, false, false]);

    game.tick(DT, false);
    assert_eq!(shown(&game, &scene.panels), vec![false, false, true]);
}

#[test]
fn delayed_switch_out_of_range_is_dropped() {
    let (mut game, scene) = demo();

    game.switch_to_panel_after_delay(scene.switcher, 9, 0.25);
    game.tick(DT, false);

    assert_eq!(shown(&game, &scene.panels), vec![true, false, false]);
    assert!(game.world().resource::<ScheduledActions>().is_empty());
}
