#[cfg(test)]
mod tests {
    use crate::battle::engine::resolve_move;
    use crate::battle::rng::TurnRng;
    use crate::battle::state::{BattleState, Side, StatStages};
    use crate::battle::tests::common::{
        assert_ok, create_test_battle, tackle, TestCreatureBuilder, HIT, NO_VARIANCE,
    };
    use crate::config::EngineConfig;
    use crate::creature::CreatureBook;
    use pretty_assertions::assert_eq;
    use schema::{CreatureType, MoveData, MoveEffect, StatType, Target};

    fn war_cry() -> MoveData {
        MoveData::new("War Cry", CreatureType::Normal, 0, 100).with_effect(MoveEffect::StatBoost {
            target: Target::User,
            stat: StatType::Attack,
            stages: 2,
        })
    }

    fn armor_crush() -> MoveData {
        MoveData::new("Armor Crush", CreatureType::Normal, 0, 100).with_effect(
            MoveEffect::StatReduction {
                target: Target::Opponent,
                stat: StatType::Defense,
                stages: 1,
            },
        )
    }

    fn battle() -> (BattleState, CreatureBook) {
        create_test_battle(
            vec![TestCreatureBuilder::new("alpha", "Alpha")
                .with_speed(60)
                .with_moves(vec![war_cry(), armor_crush(), tackle()])
                .build()],
            vec![TestCreatureBuilder::new("beta", "Beta")
                .with_moves(vec![MoveData::new("Wait", CreatureType::Normal, 0, 100)])
                .build()],
        )
    }

    /// Alpha acts with `move_index`, then Beta waits, returning to Alpha's turn.
    fn round(state: &BattleState, book: &CreatureBook, move_index: usize, draws: Vec<f64>) -> BattleState {
        let config = EngineConfig::default();
        let mut rng = TurnRng::new_for_test(draws);
        let after_alpha = assert_ok(resolve_move(state, book, Side::Side1, move_index, &config, &mut rng)).state;
        let mut rng = TurnRng::new_for_test(vec![HIT]);
        assert_ok(resolve_move(&after_alpha, book, Side::Side2, 0, &config, &mut rng)).state
    }

    #[test]
    fn test_boost_raises_user_stage() {
        let (state, book) = battle();
        let next = round(&state, &book, 0, vec![HIT]);

        assert_eq!(next.side(Side::Side1).stat_stages.attack, 2);
        assert!(next.log.contains(&"Alpha's Attack rose sharply!".to_string()));
    }

    #[test]
    fn test_reduction_lowers_opponent_stage() {
        let (state, book) = battle();
        let next = round(&state, &book, 1, vec![HIT]);

        assert_eq!(
            next.side(Side::Side2).stat_stages,
            StatStages {
                attack: 0,
                defense: -1,
                speed: 0
            }
        );
        assert!(next.log.contains(&"Beta's Defense fell!".to_string()));
    }

    #[test]
    fn test_boost_at_cap_logs_and_stays_put() {
        let (state, book) = battle();
        let mut state = state;
        for _ in 0..3 {
            state = round(&state, &book, 0, vec![HIT]);
        }
        assert_eq!(state.side(Side::Side1).stat_stages.attack, 6);

        let next = round(&state, &book, 0, vec![HIT]);
        assert_eq!(next.side(Side::Side1).stat_stages.attack, 6);
        assert!(next.log.contains(&"Alpha's Attack can't go any higher!".to_string()));
    }

    #[test]
    fn test_stages_feed_into_damage() {
        let (state, book) = battle();
        let boosted = round(&state, &book, 0, vec![HIT]);
        let crushed = round(&boosted, &book, 1, vec![HIT]);
        let hit = round(&crushed, &book, 2, vec![HIT, NO_VARIANCE]);

        // (80 * 2.0) / (80 * 0.66) * 100 * 1.5 / 5 = 90.9...
        assert_eq!(hit.side(Side::Side2).active_hp, 10);
    }
}
