//! The demo scenario.
//!
//! 1. Register an enemy prefab and spawn a row of enemies plus a player.
//! 2. Tag enemies by wave and look them up by tag.
//! 3. Filter for moving, damageable entities and advance them one step.
//! 4. Destroy the first wave and show it is gone from every lookup.

use anyhow::Result;
use tracing::info;

use ecl_component::ObjectId;
use ecl_entity::{HostEngine, IntTag, Placement, SpawnSource, World, WorldConfig};
use ecl_math::Vec3;
use ecl_scene::{Prefab, SceneHost};

use crate::components::{Health, PlayerControlled, Velocity};
use crate::config::DemoConfig;

/// Tag carried by every enemy.
pub const ENEMY: IntTag = IntTag(1);
/// Tag carried by enemies of the first wave.
pub const FIRST_WAVE: IntTag = IntTag(2);
/// Tag carried by enemies of the second wave.
pub const SECOND_WAVE: IntTag = IntTag(3);

/// What the scenario observed, for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Enemies found by tag after spawning.
    pub enemies_spawned: usize,
    /// Entities matching the `(Health, Velocity)` filter after spawning.
    pub movers: usize,
    /// Enemies found by tag after the first wave was destroyed.
    pub enemies_remaining: usize,
    /// Whether the player was still found by component after the cleanup.
    pub player_found: bool,
}

/// Run the scenario on a fresh scene.
///
/// # Errors
///
/// Returns an error if the host rejects a spawn or destroy.
pub fn run(config: &DemoConfig) -> Result<Summary> {
    let mut host = SceneHost::new();
    let enemy_prefab = host.register_prefab(
        Prefab::new("Enemy")
            .with_component(Health::full(30.0))
            .with_component(Velocity::new(-1.0, 0.0, 0.0)),
    );

    let world_config = WorldConfig::new().with_registry_capacity(config.enemy_count + 1);
    let mut world = World::with_config(host, world_config);

    let player = world
        .spawn(SpawnSource::Named("Player"), Placement::ORIGIN)?
        .object();
    world.host_mut().add_component(player, Health::full(100.0))?;
    world.host_mut().add_component(player, PlayerControlled)?;

    for i in 0..config.enemy_count {
        let wave = if i % 2 == 0 { FIRST_WAVE } else { SECOND_WAVE };
        let placement = Placement::at(Vec3::new(10.0 + i as f32, 0.0, 0.0));
        let tags = world
            .spawn(SpawnSource::Prefab(enemy_prefab), placement)?
            .tags();
        tags.add(ENEMY);
        tags.add(wave);
    }

    let enemies_spawned = world.find_all_with(ENEMY).len();
    let moving = world.filter::<(Health, Velocity)>();
    let steps: Vec<(ObjectId, Vec3)> = world
        .query(&moving)
        .into_iter()
        .filter_map(|entity| {
            let object = entity.object();
            let velocity = world.get::<Velocity>(object)?;
            let transform = world.host().transform(object)?;
            Some((object, transform.position + velocity.linear))
        })
        .collect();
    let movers = steps.len();
    for (object, position) in steps {
        world.host_mut().set_position(object, position)?;
    }
    info!(enemies = enemies_spawned, movers, %moving, "scene populated");

    let first_wave: Vec<_> = world
        .find_all_with(FIRST_WAVE)
        .into_iter()
        .map(|entity| entity.object())
        .collect();
    for object in first_wave {
        world.destroy(object)?;
    }

    let enemies_remaining = world.find_all_with(ENEMY).len();
    let player_found = world
        .find_with_component::<PlayerControlled>()
        .is_some_and(|entity| entity.object() == player);
    let player_health = world
        .get::<Health>(player)
        .map_or(0.0, |health| health.current / health.max);
    info!(
        remaining = enemies_remaining,
        player_found,
        player_health,
        first_wave_left = world.find_with(FIRST_WAVE).is_some(),
        "first wave destroyed"
    );

    Ok(Summary {
        enemies_spawned,
        movers,
        enemies_remaining,
        player_found,
    })
}
