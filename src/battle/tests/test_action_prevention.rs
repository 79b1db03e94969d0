#[cfg(test)]
mod tests {
    use crate::battle::engine::resolve_move;
    use crate::battle::rng::TurnRng;
    use crate::battle::state::{Phase, Side, StatusCondition};
    use crate::battle::tests::common::{
        assert_ok, create_test_battle, set_active, TestCreatureBuilder, HIT, NO_VARIANCE,
    };
    use crate::config::EngineConfig;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn run_first_move(status: StatusCondition, draws: Vec<f64>) -> crate::battle::state::BattleState {
        let (mut state, book) = create_test_battle(
            vec![TestCreatureBuilder::new("alpha", "Alpha").with_speed(60).build()],
            vec![TestCreatureBuilder::new("beta", "Beta").build()],
        );
        set_active(&mut state, Side::Side1, 100, Some(status));
        let mut rng = TurnRng::new_for_test(draws);
        let next = assert_ok(resolve_move(
            &state,
            &book,
            Side::Side1,
            0,
            &EngineConfig::default(),
            &mut rng,
        ))
        .state;
        assert_eq!(rng.remaining(), 0, "every scripted draw should be consumed");
        next
    }

    #[rstest]
    #[case(StatusCondition::Paralysis, vec![0.1], "Alpha is fully paralyzed!")]
    #[case(StatusCondition::Freeze(3), vec![0.5], "Alpha is frozen solid!")]
    #[case(StatusCondition::Sleep(3), vec![], "Alpha is fast asleep.")]
    fn test_prevented_move_does_nothing_and_passes_turn(
        #[case] status: StatusCondition,
        #[case] draws: Vec<f64>,
        #[case] expected_line: &str,
    ) {
        let next = run_first_move(status, draws);

        assert_eq!(next.side(Side::Side2).active_hp, 100);
        assert_eq!(next.phase, Phase::Active { to_move: Side::Side2 });
        assert!(next.log.contains(&expected_line.to_string()));
        assert!(!next.log.iter().any(|line| line.contains("used Tackle")));
    }

    #[test]
    fn test_paralysis_lets_most_moves_through() {
        let next = run_first_move(StatusCondition::Paralysis, vec![0.6, HIT, NO_VARIANCE]);

        assert_eq!(next.side(Side::Side2).active_hp, 70);
        assert_eq!(next.side(Side::Side1).status, Some(StatusCondition::Paralysis));
    }

    #[test]
    fn test_thawed_creature_moves_the_same_turn() {
        let next = run_first_move(StatusCondition::Freeze(3), vec![0.1, HIT, NO_VARIANCE]);

        assert_eq!(next.side(Side::Side1).status, None);
        assert_eq!(next.side(Side::Side2).active_hp, 70);
        assert_eq!(
            next.log[1..].to_vec(),
            vec![
                "Alpha thawed out!".to_string(),
                "Alpha used Tackle! It dealt 30 damage.".to_string(),
            ]
        );
    }

    #[test]
    fn test_last_sleep_turn_wakes_and_moves() {
        let next = run_first_move(StatusCondition::Sleep(1), vec![HIT, NO_VARIANCE]);

        assert_eq!(next.side(Side::Side1).status, None);
        assert_eq!(next.side(Side::Side2).active_hp, 70);
        assert_eq!(next.log[1], "Alpha woke up!");
    }

    #[test]
    fn test_sleep_counter_runs_down_while_asleep() {
        let next = run_first_move(StatusCondition::Sleep(3), vec![]);
        assert_eq!(next.side(Side::Side1).status, Some(StatusCondition::Sleep(2)));
    }
}
