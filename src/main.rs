use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

use blackcity::interaction::{
    DialogueLines, Interactable, KillProxy, NpcChat, PromptSettings, ShopKeeper,
    INTERACTION_RANGE, NPC_RANGE_DEVIATION,
};
use blackcity::quests::QuestReachZone;
use blackcity::shared::*;
use blackcity::{chat, data, economy, input, interaction, player, quests, ui};

fn main() {
    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Black City".into(),
                    resolution: WindowResolution::new(SCREEN_WIDTH, SCREEN_HEIGHT),
                    present_mode: PresentMode::AutoVsync,
                    resizable: true,
                    ..default()
                }),
                ..default()
            })
            .set(ImagePlugin::default_nearest()),
    )
    // Game state
    .init_state::<GameState>()
    // Shared resources
    .init_resource::<TrackedActor>()
    .init_resource::<PlayerInput>()
    .init_resource::<ChatConfig>()
    .init_resource::<ShopConfig>()
    .init_resource::<QuestCatalog>()
    .init_resource::<StoryScript>()
    .init_resource::<ShopPanel>()
    // Chat events
    .add_event::<SendChatEvent>()
    .add_event::<DismissChatEvent>()
    .add_event::<NoticeEvent>()
    // Quest events
    .add_event::<AddQuestEvent>()
    .add_event::<StartQuestEvent>()
    .add_event::<RemoveQuestEvent>()
    .add_event::<RemoveQuestHandleEvent>()
    .add_event::<QuestAddedEvent>()
    .add_event::<QuestRemovedEvent>()
    .add_event::<QuestCompletedEvent>()
    // Interaction events
    .add_event::<InteractionRangeEvent>()
    .add_event::<InteractEvent>()
    .add_event::<InteractionStartedEvent>()
    .add_event::<SequenceCompletedEvent>()
    .add_event::<EnemyKilledEvent>()
    // Economy events
    .add_event::<PurchaseRequestEvent>()
    .add_event::<PurchaseSucceededEvent>()
    .add_event::<PurchaseFailedEvent>()
    .add_event::<MoneyChangedEvent>()
    .add_event::<GrantMoneyEvent>()
    // Host-facing events
    .add_event::<SceneLoadEvent>()
    .add_event::<ShotFiredEvent>()
    .add_event::<PlayerHitEvent>();

    configure_narrative_sets(&mut app);

    app
        // Data loading
        .add_plugins(data::DataPlugin)
        // Domain plugins
        .add_plugins(input::InputPlugin)
        .add_plugins(chat::ChatPlugin)
        .add_plugins(interaction::InteractionPlugin)
        .add_plugins(quests::QuestPlugin)
        .add_plugins(economy::EconomyPlugin)
        .add_plugins(player::PlayerPlugin)
        .add_plugins(ui::UiPlugin)
        // Camera and demo district
        .add_systems(Startup, setup_camera)
        .add_systems(OnEnter(GameState::Playing), spawn_district)
        .add_systems(Update, log_scene_requests.run_if(in_state(GameState::Playing)))
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        OrthographicProjection {
            scale: 1.0 / PIXELS_PER_UNIT,
            ..OrthographicProjection::default_2d()
        },
    ));
}

fn actor_sprite(color: Color, x: f32, y: f32) -> (Sprite, Transform) {
    (
        Sprite::from_color(color, Vec2::new(0.9, 1.4)),
        Transform::from_xyz(x, y, Z_ACTOR),
    )
}

/// The first district: a talking NPC, the merchant, a kill-proxy item and
/// the reach zone for the opening quest.
fn spawn_district(mut commands: Commands, catalog: Res<QuestCatalog>) {
    commands.spawn((
        Name::new("Street Kid"),
        Interactable::new(
            INTERACTION_RANGE,
            NPC_RANGE_DEVIATION,
            PromptSettings::new("Press F to interact"),
        ),
        DialogueLines::new([
            "You looking for A Long?",
            "They dragged him east, past the market.",
            "Better hurry.",
        ]),
        NpcChat,
        actor_sprite(Color::srgb(0.4, 0.7, 0.9), -4.0, 1.0),
    ));

    commands.spawn((
        Name::new("Merchant"),
        Interactable::new(
            INTERACTION_RANGE,
            NPC_RANGE_DEVIATION,
            PromptSettings::new("Press F to open shop"),
        ),
        ShopKeeper,
        actor_sprite(Color::srgb(0.85, 0.6, 0.2), 4.0, -3.0),
    ));

    let mut info = DialogueLines::new([
        "A thug's badge. Someone already dealt with its owner.",
        "The police will pay for proof like this.",
    ]);
    info.style.stay = 3.0;
    commands.spawn((
        Name::new("Thug Badge"),
        Interactable::new(
            INTERACTION_RANGE,
            0.0,
            PromptSettings::new("Press F to pick up").with_offset(Vec3::new(0.0, 2.5, 0.0)),
        ),
        KillProxy::default(),
        info,
        Sprite::from_color(Color::srgb(0.7, 0.7, 0.75), Vec2::splat(0.5)),
        Transform::from_xyz(9.0, 2.0, Z_ACTOR),
    ));

    let target = catalog
        .get("Q1")
        .map(QuestDef::target)
        .unwrap_or(Vec2::new(18.0, 6.0));
    commands.spawn((
        Name::new("Reach Q1"),
        QuestReachZone::new("Q1"),
        Transform::from_xyz(target.x, target.y, 0.0),
    ));

    info!("[District] Demo district spawned.");
}

fn log_scene_requests(mut events: EventReader<SceneLoadEvent>) {
    for ev in events.read() {
        info!("[District] Scene load requested: {:?}", ev.scene);
    }
}
