//! Headless integration tests for Black City.
//!
//! These tests exercise the narrative ECS logic without a window or GPU.
//! They use Bevy's `MinimalPlugins` with a fixed 100 ms frame, register the
//! domain plugins that carry pure logic (no input or screen UI), and drive
//! `PlayerInput` directly.
//!
//! Run with: `cargo test --test headless`

use std::time::Duration;

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use blackcity::chat::{ChatBubble, ChatPlugin, ChatPool};
use blackcity::economy::{EconomyPlugin, Wallet};
use blackcity::interaction::{
    DialogueLines, Interactable, InteractionPlugin, KillProxy, NpcChat, PromptSettings,
    ShopKeeper,
};
use blackcity::player::PlayerPlugin;
use blackcity::quests::{QuestDirector, QuestLedger, QuestPlugin, QuestReachZone};
use blackcity::shared::*;

// ─────────────────────────────────────────────────────────────────────────────
// Test App Builder
// ─────────────────────────────────────────────────────────────────────────────

/// Everything the tests want to assert on, gathered in `Last`.
#[derive(Resource, Default)]
struct Collected {
    chats: Vec<String>,
    started: Vec<Entity>,
    sequences_done: Vec<Entity>,
    killed: Vec<String>,
    quests_completed: Vec<String>,
    quests_removed: Vec<String>,
    scenes: Vec<String>,
    notices: Vec<String>,
    purchase_failures: Vec<String>,
    balances: Vec<u32>,
}

#[allow(clippy::too_many_arguments)]
fn collect_events(
    mut collected: ResMut<Collected>,
    mut chats: EventReader<SendChatEvent>,
    mut started: EventReader<InteractionStartedEvent>,
    mut sequences: EventReader<SequenceCompletedEvent>,
    mut killed: EventReader<EnemyKilledEvent>,
    mut completed: EventReader<QuestCompletedEvent>,
    mut removed: EventReader<QuestRemovedEvent>,
    mut scenes: EventReader<SceneLoadEvent>,
    mut notices: EventReader<NoticeEvent>,
    mut failures: EventReader<PurchaseFailedEvent>,
    mut balances: EventReader<MoneyChangedEvent>,
) {
    collected.chats.extend(chats.read().map(|e| e.text.clone()));
    collected.started.extend(started.read().map(|e| e.entity));
    collected.sequences_done.extend(sequences.read().map(|e| e.entity));
    collected.killed.extend(killed.read().map(|e| e.enemy_id.clone()));
    collected.quests_completed.extend(completed.read().map(|e| e.quest_id.clone()));
    collected.quests_removed.extend(removed.read().map(|e| e.quest_id.clone()));
    collected.scenes.extend(scenes.read().map(|e| e.scene.clone()));
    collected.notices.extend(notices.read().map(|e| e.message.clone()));
    collected.purchase_failures.extend(failures.read().map(|e| e.reason.clone()));
    collected.balances.extend(balances.read().map(|e| e.balance));
}

/// Builds a minimal Bevy app with all shared resources and events registered
/// and the logic plugins added. Tuning resources are the built-in defaults
/// with an empty story; tests override them before `enter_playing_state`.
fn build_test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(StatesPlugin);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)));

    // ── Game State ───────────────────────────────────────────────────────
    app.init_state::<GameState>();

    // ── Shared Resources (mirrors main.rs) ───────────────────────────────
    app.init_resource::<TrackedActor>()
        .init_resource::<PlayerInput>()
        .init_resource::<ChatConfig>()
        .init_resource::<ShopConfig>()
        .init_resource::<QuestCatalog>()
        .init_resource::<StoryScript>()
        .init_resource::<ShopPanel>()
        .init_resource::<Collected>();

    // ── Shared Events (mirrors main.rs) ──────────────────────────────────
    app.add_event::<SendChatEvent>()
        .add_event::<DismissChatEvent>()
        .add_event::<NoticeEvent>()
        .add_event::<AddQuestEvent>()
        .add_event::<StartQuestEvent>()
        .add_event::<RemoveQuestEvent>()
        .add_event::<RemoveQuestHandleEvent>()
        .add_event::<QuestAddedEvent>()
        .add_event::<QuestRemovedEvent>()
        .add_event::<QuestCompletedEvent>()
        .add_event::<InteractionRangeEvent>()
        .add_event::<InteractEvent>()
        .add_event::<InteractionStartedEvent>()
        .add_event::<SequenceCompletedEvent>()
        .add_event::<EnemyKilledEvent>()
        .add_event::<PurchaseRequestEvent>()
        .add_event::<PurchaseSucceededEvent>()
        .add_event::<PurchaseFailedEvent>()
        .add_event::<MoneyChangedEvent>()
        .add_event::<GrantMoneyEvent>()
        .add_event::<SceneLoadEvent>()
        .add_event::<ShotFiredEvent>()
        .add_event::<PlayerHitEvent>();

    configure_narrative_sets(&mut app);

    app.add_plugins((
        ChatPlugin,
        InteractionPlugin,
        QuestPlugin,
        EconomyPlugin,
        PlayerPlugin,
    ));
    app.add_systems(Last, collect_events);

    app
}

/// Transitions the test app to Playing state and ticks once to process it.
/// The player is spawned and tracked by the end of this frame.
fn enter_playing_state(app: &mut App) {
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::Playing);
    app.update();
}

fn run_frames(app: &mut App, frames: usize) {
    for _ in 0..frames {
        app.update();
    }
}

fn player_entity(app: &mut App) -> Entity {
    let mut query = app.world_mut().query_filtered::<Entity, With<Player>>();
    query.single(app.world())
}

fn move_player(app: &mut App, to: Vec2) {
    let player = player_entity(app);
    app.world_mut()
        .get_mut::<Transform>(player)
        .unwrap()
        .translation = to.extend(Z_ACTOR);
}

/// Holds the interact key for exactly one frame.
fn press_interact(app: &mut App) {
    app.world_mut().resource_mut::<PlayerInput>().interact = true;
    app.update();
    app.world_mut().resource_mut::<PlayerInput>().interact = false;
}

/// Holds the close-shop key for exactly one frame.
fn press_close_shop(app: &mut App) {
    app.world_mut().resource_mut::<PlayerInput>().close_shop = true;
    app.update();
    app.world_mut().resource_mut::<PlayerInput>().close_shop = false;
}

fn choose_shop_entry(app: &mut App, entry: u8) {
    app.world_mut().resource_mut::<PlayerInput>().shop_choice = Some(entry);
    app.update();
    app.world_mut().resource_mut::<PlayerInput>().shop_choice = None;
}

fn active_bubbles(app: &mut App) -> Vec<ChatBubble> {
    let mut query = app.world_mut().query::<&ChatBubble>();
    query
        .iter(app.world())
        .filter(|b| b.is_active())
        .cloned()
        .collect()
}

fn bubble_translation(app: &mut App, text: &str) -> Option<Vec3> {
    let mut query = app.world_mut().query::<(&ChatBubble, &Transform)>();
    query
        .iter(app.world())
        .find(|(b, _)| b.is_active() && b.text == text)
        .map(|(_, t)| t.translation)
}

fn director_transforms(app: &mut App) -> Vec<(QuestDirector, Transform)> {
    let mut query = app.world_mut().query::<(&QuestDirector, &Transform)>();
    query
        .iter(app.world())
        .map(|(d, t)| (d.clone(), *t))
        .collect()
}

fn spawn_interactable(app: &mut App, at: Vec2, prompt: &str) -> Entity {
    app.world_mut()
        .spawn((
            Interactable::new(3.0, 0.0, PromptSettings::new(prompt)),
            Transform::from_translation(at.extend(Z_ACTOR)),
        ))
        .id()
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-3
}

// ─────────────────────────────────────────────────────────────────────────────
// Chat
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_headless_boot_prewarms_pool_and_tracks_player() {
    let mut app = build_test_app();
    enter_playing_state(&mut app);

    let player = player_entity(&mut app);
    assert_eq!(app.world().resource::<TrackedActor>().entity, Some(player));

    let pool = app.world().resource::<ChatPool>();
    assert_eq!(pool.idle_count(), 10);
    assert_eq!(pool.created_count(), 0);
    assert_eq!(app.world().resource::<Wallet>().money, 10_000);

    // Smoke: a few seconds of idle play without panic.
    run_frames(&mut app, 30);
}

#[test]
fn test_chat_requests_without_text_or_talker_are_ignored() {
    let mut app = build_test_app();
    enter_playing_state(&mut app);
    let player = player_entity(&mut app);
    let gone = app.world_mut().spawn(Transform::default()).id();
    app.world_mut().despawn(gone);

    app.world_mut().send_event(SendChatEvent::new("", player));
    let mut no_talker = SendChatEvent::new("Hello?", player);
    no_talker.talker = None;
    app.world_mut().send_event(no_talker);
    app.world_mut().send_event(SendChatEvent::new("Anyone?", gone));
    app.update();

    assert!(active_bubbles(&mut app).is_empty());
    let pool = app.world().resource::<ChatPool>();
    assert_eq!(pool.idle_count(), 10);
    assert_eq!(pool.created_count(), 0);
}

#[test]
fn test_slot_restart_leaves_one_bubble() {
    let mut app = build_test_app();
    enter_playing_state(&mut app);
    let talker = app.world_mut().spawn(Transform::from_xyz(4.0, 0.0, Z_ACTOR)).id();
    let slot = ChatSlot::line(talker);

    let mut first = SendChatEvent::new("First line", talker);
    first.slot = Some(slot);
    let mut second = SendChatEvent::new("Second line", talker);
    second.slot = Some(slot);
    app.world_mut().send_event(first);
    app.world_mut().send_event(second);
    app.update();

    let bubbles = active_bubbles(&mut app);
    assert_eq!(bubbles.len(), 1);
    assert_eq!(bubbles[0].text, "Second line");

    // Restarting again on a later frame still replaces the bubble.
    let mut third = SendChatEvent::new("Third line", talker);
    third.slot = Some(slot);
    app.world_mut().send_event(third);
    app.update();

    let bubbles = active_bubbles(&mut app);
    assert_eq!(bubbles.len(), 1);
    assert_eq!(bubbles[0].text, "Third line");
}

#[test]
fn test_finished_bubble_returns_to_pool() {
    let mut app = build_test_app();
    enter_playing_state(&mut app);
    let player = player_entity(&mut app);

    let mut request = SendChatEvent::new("Hi", player);
    request.speed = ChatSpeed::Fast;
    request.stay = Some(0.2);
    app.world_mut().send_event(request);
    app.update();

    assert_eq!(active_bubbles(&mut app).len(), 1);
    assert_eq!(app.world().resource::<ChatPool>().idle_count(), 9);

    run_frames(&mut app, 20);

    assert!(active_bubbles(&mut app).is_empty());
    let pool = app.world().resource::<ChatPool>();
    assert_eq!(pool.idle_count(), 10);
    assert_eq!(pool.created_count(), 0);
}

#[test]
fn test_pool_grows_when_exhausted() {
    let mut app = build_test_app();
    app.world_mut().resource_mut::<ChatConfig>().initial_pool_size = 1;
    enter_playing_state(&mut app);
    let player = player_entity(&mut app);

    app.world_mut().send_event(SendChatEvent::new("One", player));
    app.world_mut().send_event(SendChatEvent::new("Two", player));
    app.update();

    assert_eq!(active_bubbles(&mut app).len(), 2);
    assert_eq!(app.world().resource::<ChatPool>().created_count(), 1);
}

#[test]
fn test_follow_bubble_tracks_talker_and_fixed_bubble_stays() {
    let mut app = build_test_app();
    enter_playing_state(&mut app);
    let talker = app.world_mut().spawn(Transform::from_xyz(0.0, 0.0, Z_ACTOR)).id();

    let mut following = SendChatEvent::new("Over here", talker);
    following.follow = true;
    following.stay = Some(0.0);
    following.offset = Some(Vec3::new(0.0, 2.0, 0.0));
    let mut fixed = SendChatEvent::new("Right here", talker);
    fixed.stay = Some(0.0);
    fixed.offset = Some(Vec3::new(0.0, 2.0, 0.0));
    app.world_mut().send_event(following);
    app.world_mut().send_event(fixed);
    app.update();

    app.world_mut()
        .get_mut::<Transform>(talker)
        .unwrap()
        .translation = Vec3::new(5.0, 1.0, Z_ACTOR);
    run_frames(&mut app, 2);

    assert_eq!(
        bubble_translation(&mut app, "Over here"),
        Some(Vec3::new(5.0, 3.0, Z_BUBBLE))
    );
    assert_eq!(
        bubble_translation(&mut app, "Right here"),
        Some(Vec3::new(0.0, 2.0, Z_BUBBLE))
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Interaction
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_prompt_shows_once_per_entry() {
    let mut app = build_test_app();
    let sign = spawn_interactable(&mut app, Vec2::new(2.0, 0.0), "Press F");
    enter_playing_state(&mut app);
    run_frames(&mut app, 5);

    let prompts = |app: &App| {
        app.world()
            .resource::<Collected>()
            .chats
            .iter()
            .filter(|t| t.as_str() == "Press F")
            .count()
    };
    assert_eq!(prompts(&app), 1);
    assert!(app.world().get::<Interactable>(sign).unwrap().has_shown_prompt);
    // Zero stay holds the prompt until it is dismissed.
    assert_eq!(active_bubbles(&mut app).len(), 1);

    move_player(&mut app, Vec2::new(50.0, 0.0));
    run_frames(&mut app, 10);
    assert!(active_bubbles(&mut app).is_empty());
    assert!(!app.world().get::<Interactable>(sign).unwrap().has_shown_prompt);

    move_player(&mut app, Vec2::new(1.0, 0.0));
    run_frames(&mut app, 3);
    assert_eq!(prompts(&app), 2);
}

#[test]
fn test_npc_dialogue_is_not_reentrant_and_completes() {
    let mut app = build_test_app();
    let npc = spawn_interactable(&mut app, Vec2::new(2.0, 0.0), "Press F to talk");
    let mut lines = DialogueLines::new(["Evening.", "Watch your back."]);
    lines.style.stay = 0.5;
    app.world_mut().entity_mut(npc).insert((lines, NpcChat));
    enter_playing_state(&mut app);

    press_interact(&mut app);
    assert_eq!(app.world().resource::<Collected>().started, vec![npc]);
    assert!(app.world().get::<Interactable>(npc).unwrap().is_interacting);
    assert!(app
        .world()
        .resource::<Collected>()
        .chats
        .contains(&"Evening.".to_string()));

    // A second press while the lines play is ignored.
    press_interact(&mut app);
    assert_eq!(app.world().resource::<Collected>().started.len(), 1);

    run_frames(&mut app, 30);
    let collected = app.world().resource::<Collected>();
    assert!(collected.chats.contains(&"Watch your back.".to_string()));
    assert_eq!(collected.sequences_done, vec![npc]);
    assert!(!app.world().get::<Interactable>(npc).unwrap().is_interacting);

    press_interact(&mut app);
    assert_eq!(app.world().resource::<Collected>().started.len(), 2);
}

#[test]
fn test_prompt_survives_finished_dialogue() {
    let mut app = build_test_app();
    let npc = spawn_interactable(&mut app, Vec2::new(2.0, 0.0), "Press F to talk");
    let mut lines = DialogueLines::new(["Evening."]);
    lines.style.stay = 0.5;
    app.world_mut().entity_mut(npc).insert((lines, NpcChat));
    enter_playing_state(&mut app);

    press_interact(&mut app);
    run_frames(&mut app, 40);

    let interactable = app.world().get::<Interactable>(npc).unwrap();
    assert!(interactable.in_range());
    assert!(!interactable.is_interacting);
    let shown: Vec<String> = active_bubbles(&mut app).into_iter().map(|b| b.text).collect();
    assert_eq!(shown, vec!["Press F to talk".to_string()]);

    press_interact(&mut app);
    assert_eq!(app.world().resource::<Collected>().started.len(), 2);
}

#[test]
fn test_shop_keeper_opens_and_closes_panel() {
    let mut app = build_test_app();
    let keeper = spawn_interactable(&mut app, Vec2::new(2.0, 0.0), "Press F to open shop");
    app.world_mut().entity_mut(keeper).insert(ShopKeeper);
    enter_playing_state(&mut app);

    press_interact(&mut app);
    assert_eq!(app.world().resource::<ShopPanel>().open_for, Some(keeper));
    assert!(app.world().get::<Interactable>(keeper).unwrap().is_interacting);

    press_close_shop(&mut app);
    assert!(!app.world().resource::<ShopPanel>().is_open());
    assert!(!app.world().get::<Interactable>(keeper).unwrap().is_interacting);
    assert!(bubble_translation(&mut app, "Press F to open shop").is_some());

    press_interact(&mut app);
    assert_eq!(app.world().resource::<ShopPanel>().open_for, Some(keeper));

    move_player(&mut app, Vec2::new(50.0, 0.0));
    run_frames(&mut app, 2);
    assert!(!app.world().resource::<ShopPanel>().is_open());
    assert!(!app.world().get::<Interactable>(keeper).unwrap().is_interacting);
    assert_eq!(app.world().resource::<Collected>().started, vec![keeper, keeper]);
}

#[test]
fn test_interact_goes_to_nearest_in_range() {
    let mut app = build_test_app();
    let far = spawn_interactable(&mut app, Vec2::new(2.5, 0.0), "Far");
    let near = spawn_interactable(&mut app, Vec2::new(-1.0, 0.0), "Near");
    for entity in [far, near] {
        app.world_mut()
            .entity_mut(entity)
            .insert((DialogueLines::new(["..."]), NpcChat));
    }
    enter_playing_state(&mut app);

    press_interact(&mut app);
    assert_eq!(app.world().resource::<Collected>().started, vec![near]);
}

#[test]
fn test_kill_proxy_reports_once() {
    let mut app = build_test_app();
    let badge = spawn_interactable(&mut app, Vec2::new(2.0, 0.0), "Press F to pick up");
    app.world_mut().entity_mut(badge).insert(KillProxy::default());
    enter_playing_state(&mut app);

    press_interact(&mut app);
    press_interact(&mut app);

    assert_eq!(
        app.world().resource::<Collected>().killed,
        vec!["ItemEnemyProxy".to_string()]
    );
    assert!(app.world().get::<KillProxy>(badge).unwrap().has_fired());
}

// ─────────────────────────────────────────────────────────────────────────────
// Quests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_quest_add_and_remove_manages_director() {
    let mut app = build_test_app();
    enter_playing_state(&mut app);

    app.world_mut().send_event(AddQuestEvent {
        quest: QuestDef::new("Q1", "Find A Long", Vec2::new(10.0, 0.0)),
    });
    run_frames(&mut app, 2);

    assert_eq!(app.world().resource::<QuestLedger>().len(), 1);
    assert_eq!(director_transforms(&mut app).len(), 1);
    assert!(app
        .world()
        .resource::<Collected>()
        .notices
        .contains(&"Quest received: Find A Long".to_string()));

    app.world_mut().send_event(RemoveQuestEvent {
        quest_id: "Q1".to_string(),
    });
    run_frames(&mut app, 2);

    assert!(app.world().resource::<QuestLedger>().is_empty());
    assert!(director_transforms(&mut app).is_empty());
    assert_eq!(
        app.world().resource::<Collected>().quests_removed,
        vec!["Q1".to_string()]
    );
}

#[test]
fn test_director_points_at_head_and_promotes_next() {
    let mut app = build_test_app();
    enter_playing_state(&mut app);

    app.world_mut().send_event(AddQuestEvent {
        quest: QuestDef::new("Q1", "East", Vec2::new(5.0, 0.0)),
    });
    app.world_mut().send_event(AddQuestEvent {
        quest: QuestDef::new("Q2", "North", Vec2::new(0.0, 5.0)),
    });
    run_frames(&mut app, 2);

    let head = app.world().resource::<QuestLedger>().head().unwrap().handle;
    for (director, transform) in director_transforms(&mut app) {
        if director.handle == head {
            assert!(close(transform.translation.x, 1.0));
            assert!(close(transform.translation.y, 0.0));
            let expected = Quat::from_rotation_z(90f32.to_radians());
            assert!(transform.rotation.angle_between(expected) < 1e-3);
        } else {
            assert_eq!(transform.translation.truncate(), DIRECTOR_PARKED);
        }
    }

    app.world_mut().send_event(RemoveQuestHandleEvent { handle: head });
    run_frames(&mut app, 2);

    let directors = director_transforms(&mut app);
    assert_eq!(directors.len(), 1);
    let (_, transform) = &directors[0];
    assert!(close(transform.translation.x, 0.0));
    assert!(close(transform.translation.y, 1.0));
}

#[test]
fn test_start_quest_from_catalog() {
    let mut app = build_test_app();
    app.insert_resource(QuestCatalog {
        quests: vec![QuestDef::new("Q2.1", "West side", Vec2::new(-20.0, 2.0))],
    });
    enter_playing_state(&mut app);

    app.world_mut().send_event(StartQuestEvent {
        quest_id: "Q2.1".to_string(),
    });
    app.world_mut().send_event(StartQuestEvent {
        quest_id: "missing".to_string(),
    });
    run_frames(&mut app, 2);

    let ledger = app.world().resource::<QuestLedger>();
    assert_eq!(ledger.len(), 1);
    assert!(ledger.contains("Q2.1"));
}

#[test]
fn test_reaching_zone_completes_quest_and_runs_hook_after_wait() {
    let mut app = build_test_app();
    app.insert_resource(StoryScript {
        opening: Vec::new(),
        hooks: vec![StoryHook {
            quest_id: "Q1".to_string(),
            steps: vec![
                StoryStep::Wait(1.0),
                StoryStep::LoadScene("Scene 2".to_string()),
            ],
        }],
    });
    app.world_mut().spawn((
        QuestReachZone::new("Q1"),
        Transform::from_xyz(10.0, 0.0, 0.0),
    ));
    enter_playing_state(&mut app);

    app.world_mut().send_event(AddQuestEvent {
        quest: QuestDef::new("Q1", "Reach the square", Vec2::new(10.0, 0.0)),
    });
    run_frames(&mut app, 3);
    assert!(app.world().resource::<Collected>().quests_completed.is_empty());

    move_player(&mut app, Vec2::new(9.0, 0.0));
    run_frames(&mut app, 3);

    let collected = app.world().resource::<Collected>();
    assert_eq!(collected.quests_completed, vec!["Q1".to_string()]);
    assert!(collected.scenes.is_empty());
    assert!(app.world().resource::<QuestLedger>().is_empty());

    run_frames(&mut app, 15);
    assert_eq!(
        app.world().resource::<Collected>().scenes,
        vec!["Scene 2".to_string()]
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Economy
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_shop_refuses_unaffordable_and_sells_affordable() {
    let mut app = build_test_app();
    app.world_mut().resource_mut::<ShopConfig>().starting_money = 150;
    enter_playing_state(&mut app);
    let keeper = app.world_mut().spawn_empty().id();
    app.world_mut().resource_mut::<ShopPanel>().open(keeper);

    // Entry 2 is the grenade (500).
    choose_shop_entry(&mut app, 2);
    assert_eq!(app.world().resource::<Wallet>().money, 150);
    assert_eq!(
        app.world().resource::<Collected>().purchase_failures,
        vec!["Not enough money!".to_string()]
    );
    let error = app.world().resource::<ShopPanel>().error.clone();
    assert_eq!(error.map(|m| m.text), Some("Not enough money!".to_string()));

    // Entry 1 is the heal (100).
    choose_shop_entry(&mut app, 1);
    assert_eq!(app.world().resource::<Wallet>().money, 50);

    run_frames(&mut app, 25);
    assert!(app.world().resource::<ShopPanel>().error.is_none());
}

#[test]
fn test_shop_keys_ignored_while_panel_closed() {
    let mut app = build_test_app();
    enter_playing_state(&mut app);

    choose_shop_entry(&mut app, 1);
    assert_eq!(app.world().resource::<Wallet>().money, 10_000);
}

#[test]
fn test_money_grant_credits_wallet_and_reports_balance() {
    let mut app = build_test_app();
    enter_playing_state(&mut app);

    app.world_mut().send_event(GrantMoneyEvent { amount: 250 });
    app.update();
    assert_eq!(app.world().resource::<Wallet>().money, 10_250);
    assert_eq!(
        app.world().resource::<Collected>().balances,
        vec![10_000, 10_250]
    );

    app.world_mut().send_event(GrantMoneyEvent { amount: -50 });
    app.update();
    assert_eq!(app.world().resource::<Wallet>().money, 10_250);
    assert_eq!(app.world().resource::<Collected>().balances.len(), 2);
}
