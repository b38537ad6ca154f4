//! Shared components, resources, events, and states for Black City.
//!
//! This is the type contract. Every domain plugin imports from here.
//! No domain imports from any other domain directly.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════
// GAME STATE — top-level state machine
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, States, Default)]
pub enum GameState {
    #[default]
    Loading,
    Playing,
}

/// Ordered phases of one frame. Chained in `main.rs` (and the headless
/// test app) so that proximity runs before input handling, and ledger
/// mutations land before the compass reads the head quest.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NarrativeSet {
    Resolve,
    Detect,
    Act,
    Sequence,
    QuestEvaluate,
    QuestMutate,
    QuestDirect,
    Dispatch,
    Animate,
}

pub fn configure_narrative_sets(app: &mut App) {
    app.configure_sets(
        Update,
        (
            NarrativeSet::Resolve,
            NarrativeSet::Detect,
            NarrativeSet::Act,
            NarrativeSet::Sequence,
            NarrativeSet::QuestEvaluate,
            NarrativeSet::QuestMutate,
            NarrativeSet::QuestDirect,
            NarrativeSet::Dispatch,
            NarrativeSet::Animate,
        )
            .chain()
            .run_if(in_state(GameState::Playing)),
    );
}

// ═══════════════════════════════════════════════════════════════════════
// WORLD CONSTANTS
// ═══════════════════════════════════════════════════════════════════════

/// Pixels per world unit. Gameplay distances (ranges, offsets, speeds)
/// are expressed in world units; the camera zooms by this factor.
pub const PIXELS_PER_UNIT: f32 = 32.0;
pub const SCREEN_WIDTH: f32 = 960.0;
pub const SCREEN_HEIGHT: f32 = 540.0;

/// Where freshly spawned director visuals wait before their first update.
pub const DIRECTOR_PARKED: Vec2 = Vec2::new(-999.0, -999.0);

pub const Z_ACTOR: f32 = 10.0;
pub const Z_DIRECTOR: f32 = 20.0;
pub const Z_BUBBLE: f32 = 50.0;

// ═══════════════════════════════════════════════════════════════════════
// INPUT — written once per frame by the input plugin
// ═══════════════════════════════════════════════════════════════════════

/// Actions for this frame. Domains read this instead of raw key state.
#[derive(Resource, Debug, Clone, Default)]
pub struct PlayerInput {
    pub move_axis: Vec2,
    /// Just pressed this frame.
    pub interact: bool,
    pub fire_held: bool,
    /// Cursor position in world units, when a cursor is over the window.
    pub aim_point: Option<Vec2>,
    /// Just pressed this frame.
    pub close_shop: bool,
    /// 1-based shop entry just pressed.
    pub shop_choice: Option<u8>,
}

// ═══════════════════════════════════════════════════════════════════════
// ACTORS
// ═══════════════════════════════════════════════════════════════════════

/// Marker for the player-controlled actor.
#[derive(Component, Debug, Default)]
pub struct Player;

/// The actor that quests, prompts and the compass are measured against.
/// Resolved lazily: `None` until the player entity exists.
#[derive(Resource, Debug, Clone, Default)]
pub struct TrackedActor {
    pub entity: Option<Entity>,
}

/// Player hit points. Consulted by the shop's heal purchase.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Default for Health {
    fn default() -> Self {
        Self {
            current: 100.0,
            max: 100.0,
        }
    }
}

impl Health {
    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    /// Restores up to `amount`, never above `max`. Returns the amount applied.
    pub fn heal(&mut self, amount: f32) -> f32 {
        if self.is_dead() || amount <= 0.0 {
            return 0.0;
        }
        let before = self.current;
        self.current = (self.current + amount).min(self.max);
        self.current - before
    }

    pub fn damage(&mut self, amount: f32) {
        self.current = (self.current - amount.max(0.0)).max(0.0);
    }
}

/// The host hit the player for `damage` points.
#[derive(Event, Debug, Clone)]
pub struct PlayerHitEvent {
    pub damage: f32,
}

// ═══════════════════════════════════════════════════════════════════════
// CHAT BUBBLES
// ═══════════════════════════════════════════════════════════════════════

/// Typing speed of a chat bubble. Mapped to a per-character interval by
/// `ChatConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChatSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

/// Which of an owner's bubbles a slot refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatLane {
    Prompt,
    Line,
}

/// A logical caller. A new request on the same slot cancels the bubble
/// the slot currently holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChatSlot {
    pub owner: Entity,
    pub lane: ChatLane,
}

impl ChatSlot {
    pub fn prompt(owner: Entity) -> Self {
        Self {
            owner,
            lane: ChatLane::Prompt,
        }
    }

    pub fn line(owner: Entity) -> Self {
        Self {
            owner,
            lane: ChatLane::Line,
        }
    }
}

/// Ask the dispatcher for a chat bubble over `talker`.
///
/// `stay: None` uses the configured default; `Some(0.0)` (or less) means
/// "keep showing until superseded" and is replaced by the configured
/// sentinel hold. `offset: None` uses the configured default offset.
#[derive(Event, Debug, Clone)]
pub struct SendChatEvent {
    pub text: String,
    pub talker: Option<Entity>,
    pub speed: ChatSpeed,
    pub stay: Option<f32>,
    pub offset: Option<Vec3>,
    pub follow: bool,
    pub slot: Option<ChatSlot>,
}

impl SendChatEvent {
    /// Normal speed, default stay and offset, placed once (no follow).
    pub fn new(text: impl Into<String>, talker: Entity) -> Self {
        Self {
            text: text.into(),
            talker: Some(talker),
            speed: ChatSpeed::Normal,
            stay: None,
            offset: None,
            follow: false,
            slot: None,
        }
    }
}

/// Fade out whatever the slot currently shows, without waiting for its hold.
#[derive(Event, Debug, Clone)]
pub struct DismissChatEvent {
    pub slot: ChatSlot,
}

// ═══════════════════════════════════════════════════════════════════════
// NOTICES
// ═══════════════════════════════════════════════════════════════════════

/// Centered on-screen notice (quest received, story cards).
#[derive(Event, Debug, Clone)]
pub struct NoticeEvent {
    pub message: String,
    pub color: Color,
    pub duration_secs: f32,
    pub scale: f32,
}

impl NoticeEvent {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            color: Color::BLACK,
            duration_secs: 1.5,
            scale: 1.2,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// QUESTS
// ═══════════════════════════════════════════════════════════════════════

/// Ledger-unique reference to one active quest, for removal by reference
/// when several share an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestHandle(pub u64);

/// A quest ready to be added to the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestDef {
    pub id: String,
    pub description: String,
    pub target: (f32, f32),
}

impl QuestDef {
    pub fn new(id: impl Into<String>, description: impl Into<String>, target: Vec2) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            target: (target.x, target.y),
        }
    }

    pub fn target(&self) -> Vec2 {
        Vec2::new(self.target.0, self.target.1)
    }
}

/// Add a quest to the ledger.
#[derive(Event, Debug, Clone)]
pub struct AddQuestEvent {
    pub quest: QuestDef,
}

/// Add a quest from the configured catalog by identifier.
#[derive(Event, Debug, Clone)]
pub struct StartQuestEvent {
    pub quest_id: String,
}

/// Remove every active quest with this identifier.
#[derive(Event, Debug, Clone)]
pub struct RemoveQuestEvent {
    pub quest_id: String,
}

/// Remove exactly one active quest.
#[derive(Event, Debug, Clone)]
pub struct RemoveQuestHandleEvent {
    pub handle: QuestHandle,
}

/// A quest entered the ledger.
#[derive(Event, Debug, Clone)]
pub struct QuestAddedEvent {
    pub handle: QuestHandle,
    pub quest_id: String,
    pub description: String,
}

/// A quest left the ledger.
#[derive(Event, Debug, Clone)]
pub struct QuestRemovedEvent {
    pub handle: QuestHandle,
    pub quest_id: String,
}

/// Raised by whatever evaluates quest objectives; story hooks listen.
#[derive(Event, Debug, Clone)]
pub struct QuestCompletedEvent {
    pub quest_id: String,
}

// ═══════════════════════════════════════════════════════════════════════
// INTERACTION
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeEdge {
    Entered,
    Exited,
}

/// Edge event from an interactable's proximity detector.
#[derive(Event, Debug, Clone)]
pub struct InteractionRangeEvent {
    pub entity: Entity,
    pub edge: RangeEdge,
}

/// The interact key reached this controller (nearest in range, idle).
#[derive(Event, Debug, Clone)]
pub struct InteractEvent {
    pub entity: Entity,
}

#[derive(Event, Debug, Clone)]
pub struct InteractionStartedEvent {
    pub entity: Entity,
}

/// A controller's scripted line sequence finished.
#[derive(Event, Debug, Clone)]
pub struct SequenceCompletedEvent {
    pub entity: Entity,
}

/// One-shot "enemy killed" signal for kill objectives.
#[derive(Event, Debug, Clone)]
pub struct EnemyKilledEvent {
    pub enemy_id: String,
}

// ═══════════════════════════════════════════════════════════════════════
// ECONOMY
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    Grenade,
    Molotov,
    C4,
}

impl WeaponKind {
    pub fn label(self) -> &'static str {
        match self {
            WeaponKind::Grenade => "Grenade",
            WeaponKind::Molotov => "Molotov",
            WeaponKind::C4 => "C4",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShopItem {
    Heal,
    Weapon(WeaponKind),
}

impl ShopItem {
    pub const ALL: [ShopItem; 4] = [
        ShopItem::Heal,
        ShopItem::Weapon(WeaponKind::Grenade),
        ShopItem::Weapon(WeaponKind::Molotov),
        ShopItem::Weapon(WeaponKind::C4),
    ];

    pub fn label(self) -> &'static str {
        match self {
            ShopItem::Heal => "Heal",
            ShopItem::Weapon(kind) => kind.label(),
        }
    }
}

#[derive(Event, Debug, Clone)]
pub struct PurchaseRequestEvent {
    pub item: ShopItem,
}

#[derive(Event, Debug, Clone)]
pub struct PurchaseSucceededEvent {
    pub item: ShopItem,
}

#[derive(Event, Debug, Clone)]
pub struct PurchaseFailedEvent {
    pub item: ShopItem,
    pub reason: String,
}

#[derive(Event, Debug, Clone)]
pub struct MoneyChangedEvent {
    pub balance: u32,
}

/// Credit the wallet (quest rewards, loot). Negative amounts are refused.
#[derive(Event, Debug, Clone)]
pub struct GrantMoneyEvent {
    pub amount: i64,
}

/// Merchant panel state. `open_for` is the shopkeeper that opened it.
#[derive(Resource, Debug, Clone, Default)]
pub struct ShopPanel {
    pub open_for: Option<Entity>,
    pub error: Option<ShopMessage>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShopMessage {
    pub text: String,
    pub remaining_secs: f32,
}

impl ShopPanel {
    pub fn is_open(&self) -> bool {
        self.open_for.is_some()
    }

    pub fn open(&mut self, keeper: Entity) {
        self.open_for = Some(keeper);
        self.error = None;
    }

    /// Closes the panel, returning the keeper that held it.
    pub fn close(&mut self) -> Option<Entity> {
        self.error = None;
        self.open_for.take()
    }
}

// ═══════════════════════════════════════════════════════════════════════
// HOST HAND-OFFS
// ═══════════════════════════════════════════════════════════════════════

/// Ask the host to load a scene. Fire-and-forget.
#[derive(Event, Debug, Clone)]
pub struct SceneLoadEvent {
    pub scene: String,
}

/// The player fired. Hit detection belongs to the host.
#[derive(Event, Debug, Clone)]
pub struct ShotFiredEvent {
    pub origin: Vec2,
    pub direction: Vec2,
    pub range: f32,
}

// ═══════════════════════════════════════════════════════════════════════
// TUNING — populated by the data layer at load time
// ═══════════════════════════════════════════════════════════════════════

/// Chat bubble timings and pool sizing.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub slow_interval: f32,
    pub normal_interval: f32,
    pub fast_interval: f32,
    pub default_stay: f32,
    /// Hold used when a request asks for a zero stay.
    pub sentinel_stay: f32,
    pub fade_out_secs: f32,
    pub default_offset: (f32, f32, f32),
    pub initial_pool_size: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            slow_interval: 0.08,
            normal_interval: 0.04,
            fast_interval: 0.02,
            default_stay: 2.0,
            sentinel_stay: 999.0,
            fade_out_secs: 0.3,
            default_offset: (0.0, 2.0, 0.0),
            initial_pool_size: 10,
        }
    }
}

impl ChatConfig {
    pub fn interval(&self, speed: ChatSpeed) -> f32 {
        match speed {
            ChatSpeed::Slow => self.slow_interval,
            ChatSpeed::Normal => self.normal_interval,
            ChatSpeed::Fast => self.fast_interval,
        }
    }

    pub fn default_offset(&self) -> Vec3 {
        let (x, y, z) = self.default_offset;
        Vec3::new(x, y, z)
    }

    /// Resolves a requested hold: `None` → default, zero or less → sentinel.
    pub fn effective_stay(&self, requested: Option<f32>) -> f32 {
        match requested {
            None => self.default_stay,
            Some(secs) if secs > 0.0 => secs,
            Some(_) => self.sentinel_stay,
        }
    }
}

/// Prices and stock limits for the merchant.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    pub heal_cost: u32,
    pub heal_amount: f32,
    pub grenade_cost: u32,
    pub molotov_cost: u32,
    pub c4_cost: u32,
    pub starting_money: u32,
    pub max_stack: u32,
    pub error_message_secs: f32,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            heal_cost: 100,
            heal_amount: 20.0,
            grenade_cost: 500,
            molotov_cost: 500,
            c4_cost: 1000,
            starting_money: 10_000,
            max_stack: 5,
            error_message_secs: 2.0,
        }
    }
}

impl ShopConfig {
    pub fn price(&self, item: ShopItem) -> u32 {
        match item {
            ShopItem::Heal => self.heal_cost,
            ShopItem::Weapon(WeaponKind::Grenade) => self.grenade_cost,
            ShopItem::Weapon(WeaponKind::Molotov) => self.molotov_cost,
            ShopItem::Weapon(WeaponKind::C4) => self.c4_cost,
        }
    }
}

/// Quests that can be started by identifier.
#[derive(Resource, Debug, Clone, Default)]
pub struct QuestCatalog {
    pub quests: Vec<QuestDef>,
}

impl QuestCatalog {
    pub fn get(&self, quest_id: &str) -> Option<&QuestDef> {
        self.quests.iter().find(|q| q.id == quest_id)
    }
}

/// One beat of a scripted story sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StoryStep {
    Wait(f32),
    /// Chat bubble over the tracked actor.
    Say(String),
    Notice(String),
    StartQuest(String),
    LoadScene(String),
}

/// Steps to play when a quest completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryHook {
    pub quest_id: String,
    pub steps: Vec<StoryStep>,
}

/// The scene's story: an opening sequence and completion hooks.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryScript {
    pub opening: Vec<StoryStep>,
    pub hooks: Vec<StoryHook>,
}

impl StoryScript {
    pub fn hooks_for<'a>(&'a self, quest_id: &'a str) -> impl Iterator<Item = &'a StoryHook> + 'a {
        self.hooks.iter().filter(move |hook| hook.quest_id == quest_id)
    }
}
