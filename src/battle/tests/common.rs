use crate::battle::engine::{create_battle, SideSetup};
use crate::battle::rng::TurnRng;
use crate::battle::state::{BattleId, BattleState, Controller, Side, StatusCondition};
use crate::creature::{BaseStats, Creature, CreatureBook, CreatureId};
use crate::errors::BattleResult;
use schema::{CreatureType, MoveData};

/// Draw that always passes an accuracy check.
pub const HIT: f64 = 0.0;
/// Draw that misses anything below 99 accuracy.
pub const MISS: f64 = 0.995;
/// Draw that produces zero damage variance.
pub const NO_VARIANCE: f64 = 0.5;
/// Draw that fails any percent chance below 99.
pub const FAIL: f64 = 0.995;

/// A builder for creating test creatures with common defaults.
///
/// # Example
/// ```
/// let creature = TestCreatureBuilder::new("c1", "Sparkit")
///     .with_types(vec![CreatureType::Electric])
///     .with_moves(vec![tackle()])
///     .build();
/// ```
pub struct TestCreatureBuilder {
    id: String,
    name: String,
    types: Vec<CreatureType>,
    stats: BaseStats,
    moves: Vec<MoveData>,
}

impl TestCreatureBuilder {
    /// Creates a Normal-type builder with 100 hp, 80 attack/defense and 50 speed.
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            types: vec![CreatureType::Normal],
            stats: BaseStats {
                hp: 100,
                attack: 80,
                defense: 80,
                speed: 50,
            },
            moves: vec![tackle()],
        }
    }

    pub fn with_types(mut self, types: Vec<CreatureType>) -> Self {
        self.types = types;
        self
    }

    pub fn with_moves(mut self, moves: Vec<MoveData>) -> Self {
        self.moves = moves;
        self
    }

    pub fn with_hp(mut self, hp: u16) -> Self {
        self.stats.hp = hp;
        self
    }

    pub fn with_speed(mut self, speed: u16) -> Self {
        self.stats.speed = speed;
        self
    }

    pub fn with_attack(mut self, attack: u16) -> Self {
        self.stats.attack = attack;
        self
    }

    pub fn build(self) -> Creature {
        Creature::new(
            self.id.as_str(),
            self.name,
            self.types,
            self.stats,
            self.moves,
        )
    }
}

pub fn tackle() -> MoveData {
    MoveData::new("Tackle", CreatureType::Normal, 100, 100)
}

pub fn ids(creatures: &[&Creature]) -> Vec<CreatureId> {
    creatures.iter().map(|creature| creature.id.clone()).collect()
}

/// A battle between two human-controlled rosters, each leading with its
/// first member, plus the book of every creature involved.
pub fn create_test_battle(side1: Vec<Creature>, side2: Vec<Creature>) -> (BattleState, CreatureBook) {
    create_test_battle_with(side1, Controller::Human, side2, Controller::Human)
}

pub fn create_test_battle_with(
    side1: Vec<Creature>,
    controller1: Controller,
    side2: Vec<Creature>,
    controller2: Controller,
) -> (BattleState, CreatureBook) {
    let setup = |creatures: &[Creature], controller| {
        let roster: Vec<CreatureId> = creatures.iter().map(|c| c.id.clone()).collect();
        SideSetup::new(roster.clone(), roster[0].clone(), controller)
    };
    let setup1 = setup(&side1, controller1);
    let setup2 = setup(&side2, controller2);
    let book = CreatureBook::from_creatures(side1.into_iter().chain(side2));
    let state = assert_ok(create_battle(BattleId::from("test_battle"), setup1, setup2, &book));
    (state, book)
}

/// Overwrite the live battle fields of one side's active creature.
pub fn set_active(state: &mut BattleState, side: Side, hp: u16, status: Option<StatusCondition>) {
    let side_state = state.side_mut(side);
    side_state.active_hp = hp;
    side_state.status = status;
}

/// Creates a `TurnRng` with a generous buffer of neutral draws.
/// Useful for tests where the specific RNG outcome is not important.
pub fn predictable_rng() -> TurnRng {
    TurnRng::new_for_test(vec![NO_VARIANCE; 100])
}

/// Helper function to assert that a Result is Ok and return the value.
/// Provides clear error messages in tests when functions unexpectedly fail.
pub fn assert_ok<T>(result: BattleResult<T>) -> T {
    match result {
        Ok(value) => value,
        Err(err) => panic!("Expected Ok but got error: {}", err),
    }
}
