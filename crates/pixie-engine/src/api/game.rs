use serde::{Deserialize, Serialize};
use crate::api::error::EngineError;
use crate::api::types::{AnimationId, SlotId};
use crate::assets::manifest::AssetManifest;
use crate::assets::registry::AnimationRegistry;
use crate::components::entity::Entity;
use crate::core::pool::Actor;
use crate::core::room::Room;
use crate::input::snapshot::InputSnapshot;
use crate::renderer::instance::DrawBuffer;
use crate::renderer::screen::Screen;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fixed entity pool size (default: 32).
    pub pool_capacity: usize,
    /// Animations each entity can hold (default: 16).
    pub animation_capacity: usize,
    /// Screen the room renders to (default: top).
    pub screen: Screen,
    /// Initial draw buffer capacity (default: 512).
    pub max_draws: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pool_capacity: 32,
            animation_capacity: 16,
            screen: Screen::Top,
            max_draws: 512,
        }
    }
}

impl EngineConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> EngineConfig {
        EngineConfig::default()
    }

    /// Setup initial state: load assets, spawn actors, add cameras.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The game loop tick, run before control schemes and camera follow.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputSnapshot);

    /// Optional pass for extra draws on top of the room.
    fn render(&self, _ctx: &mut RenderContext) {}
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub room: Room,
    pub animations: AnimationRegistry,
    pub screen: Screen,
    animation_capacity: usize,
}

impl EngineContext {
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            room: Room::new(config.pool_capacity),
            animations: AnimationRegistry::new(),
            screen: config.screen,
            animation_capacity: config.animation_capacity,
        }
    }

    /// Replace the animation registry with one built from a JSON manifest.
    pub fn load_manifest(&mut self, json: &str) -> Result<(), EngineError> {
        let manifest = AssetManifest::from_json(json)?;
        self.animations = AnimationRegistry::from_manifest(&manifest)?;
        Ok(())
    }

    /// An entity sized with the configured animation capacity.
    pub fn new_entity(&self, x: f32, y: f32) -> Entity {
        Entity::new(x, y, self.animation_capacity)
    }

    /// Give `entity` its own copy of the registered animation `name`.
    pub fn attach(&self, entity: &mut Entity, name: &str) -> Result<AnimationId, EngineError> {
        let animation = self.animations.instantiate(name)?;
        entity.add_animation(name, animation)
    }

    /// Add an actor to the room's pool.
    pub fn spawn(&mut self, actor: Actor) -> Result<SlotId, EngineError> {
        self.room.pool.add(actor)
    }

    pub fn despawn(&mut self, slot: SlotId) -> Option<Actor> {
        self.room.pool.remove(slot)
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

/// Render context for optional custom draws after the room.
pub struct RenderContext<'a> {
    pub draws: &'a mut DrawBuffer,
    pub room: &'a Room,
    pub screen: Screen,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pool::DirectionalAnimations;

    const MANIFEST: &str = r#"{
        "sheets": [ { "name": "hero", "width": 64, "height": 16 } ],
        "animations": {
            "walk": { "sheet": "hero", "strip": { "left": 0, "top": 0, "width": 16, "height": 16, "count": 4 } }
        }
    }"#;

    #[test]
    fn config_defaults_fill_missing_fields() {
        let config = EngineConfig::from_json(r#"{ "pool_capacity": 8, "screen": "bottom" }"#).unwrap();
        assert_eq!(config.pool_capacity, 8);
        assert_eq!(config.screen, Screen::Bottom);
        assert_eq!(config.animation_capacity, 16);
        assert_eq!(config.max_draws, 512);
        assert!(EngineConfig::from_json("3").is_err());
    }

    #[test]
    fn context_builds_room_from_config() {
        let config = EngineConfig {
            pool_capacity: 2,
            animation_capacity: 1,
            ..Default::default()
        };
        let ctx = EngineContext::new(&config);
        assert_eq!(ctx.room.pool.capacity(), 2);
        assert_eq!(ctx.new_entity(0.0, 0.0).animation_capacity(), 1);
    }

    #[test]
    fn attach_and_spawn() {
        let mut ctx = EngineContext::default();
        ctx.load_manifest(MANIFEST).unwrap();

        let mut hero = ctx.new_entity(10.0, 10.0);
        let walk = ctx.attach(&mut hero, "walk").unwrap();
        assert!(matches!(ctx.attach(&mut hero, "swim"), Err(EngineError::UnknownAnimation(_))));

        let slot = ctx
            .spawn(Actor::new(hero).with_animations(DirectionalAnimations::uniform(walk)))
            .unwrap();
        assert_eq!(ctx.room.pool.occupied_count(), 1);
        assert!(ctx.despawn(slot).is_some());
        assert_eq!(ctx.room.pool.occupied_count(), 0);
    }

    #[test]
    fn bad_manifest_keeps_old_registry() {
        let mut ctx = EngineContext::default();
        ctx.load_manifest(MANIFEST).unwrap();
        assert!(ctx.load_manifest("{").is_err());
        assert!(ctx.animations.get("walk").is_some());
    }
}
