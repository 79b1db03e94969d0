use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum CreatureType {
    Fire,
    Water,
    Grass,
    Electric,
    Psychic,
    Ice,
    Dragon,
    Fighting,
    Flying,
    Poison,
    Ground,
    Rock,
    Bug,
    Ghost,
    Steel,
    Dark,
    Fairy,
    Normal,
}

/// The authored matchup lists for one attacking type.
///
/// A defending type may appear in more than one list (Electric lists Ground
/// as both weak and immune). Lookups resolve such overlaps in the order
/// strong, immune, weak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMatchups {
    pub strong: &'static [CreatureType],
    pub weak: &'static [CreatureType],
    pub immune: &'static [CreatureType],
}

impl CreatureType {
    pub fn matchups(self) -> TypeMatchups {
        use CreatureType::*;

        let (strong, weak, immune): (
            &'static [CreatureType],
            &'static [CreatureType],
            &'static [CreatureType],
        ) = match self {
            Fire => (&[Grass, Ice, Bug, Steel], &[Water, Ground, Rock], &[]),
            Water => (&[Fire, Ground, Rock], &[Grass, Electric], &[]),
            Grass => (&[Water, Ground, Rock], &[Fire, Ice, Poison, Flying, Bug], &[]),
            Electric => (&[Water, Flying], &[Ground], &[Ground]),
            Psychic => (&[Fighting, Poison], &[Bug, Ghost, Dark], &[Dark]),
            Ice => (&[Grass, Ground, Flying, Dragon], &[Fire, Fighting, Rock, Steel], &[]),
            Dragon => (&[Dragon], &[Ice, Dragon, Fairy], &[Fairy]),
            Fighting => (
                &[Normal, Ice, Rock, Dark, Steel],
                &[Flying, Psychic, Fairy],
                &[Ghost],
            ),
            Flying => (&[Grass, Fighting, Bug], &[Electric, Ice, Rock], &[Ground]),
            Poison => (&[Grass, Fairy], &[Ground, Psychic], &[]),
            Ground => (
                &[Fire, Electric, Poison, Rock, Steel],
                &[Water, Grass, Ice],
                &[Flying],
            ),
            Rock => (
                &[Fire, Ice, Flying, Bug],
                &[Water, Grass, Fighting, Ground, Steel],
                &[],
            ),
            Bug => (&[Grass, Psychic, Dark], &[Fire, Flying, Rock], &[]),
            Ghost => (&[Psychic, Ghost], &[Ghost, Dark], &[Normal, Fighting]),
            Steel => (&[Ice, Rock, Fairy], &[Fire, Fighting, Ground], &[Poison]),
            Dark => (&[Psychic, Ghost], &[Fighting, Bug, Fairy], &[Psychic]),
            Fairy => (&[Fighting, Dragon, Dark], &[Poison, Steel], &[]),
            Normal => (&[], &[Fighting], &[Ghost]),
        };

        TypeMatchups {
            strong,
            weak,
            immune,
        }
    }

    /// Multiplier for this attacking type against a single defending type.
    /// Returns: 2.0 = Super Effective, 1.0 = Normal, 0.5 = Not Very Effective, 0.0 = No Effect
    pub fn multiplier_against(self, defending: CreatureType) -> f64 {
        let matchups = self.matchups();

        if matchups.strong.contains(&defending) {
            2.0
        } else if matchups.immune.contains(&defending) {
            0.0
        } else if matchups.weak.contains(&defending) {
            0.5
        } else {
            1.0
        }
    }

    /// Calculate type effectiveness for an attacking type against every type
    /// of a defender. Per-type multipliers are multiplied together.
    pub fn type_effectiveness(attacking: CreatureType, defending: &[CreatureType]) -> f64 {
        defending
            .iter()
            .map(|&defending_type| attacking.multiplier_against(defending_type))
            .product()
    }

    pub fn is_immune(attacking: CreatureType, defending: &[CreatureType]) -> bool {
        Self::type_effectiveness(attacking, defending) == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;
    use strum::IntoEnumIterator;
    use CreatureType::*;

    #[test]
    fn test_chart_covers_all_eighteen_types() {
        assert_eq!(CreatureType::iter().count(), 18);
        for attacking in CreatureType::iter() {
            for defending in CreatureType::iter() {
                let m = attacking.multiplier_against(defending);
                assert!(
                    [0.0, 0.5, 1.0, 2.0].contains(&m),
                    "{} vs {} gave {}",
                    attacking,
                    defending,
                    m
                );
            }
        }
    }

    #[test]
    fn test_immune_wins_over_weak_when_both_listed() {
        assert_eq!(CreatureType::type_effectiveness(Electric, &[Ground]), 0.0);
        assert_eq!(CreatureType::type_effectiveness(Psychic, &[Dark]), 0.0);
        assert_eq!(CreatureType::type_effectiveness(Dragon, &[Fairy]), 0.0);
    }

    #[test]
    fn test_strong_wins_over_weak_when_both_listed() {
        // Ghost and Dragon list themselves as both strong and weak.
        assert_eq!(Ghost.multiplier_against(Ghost), 2.0);
        assert_eq!(Dragon.multiplier_against(Dragon), 2.0);
    }

    #[test]
    fn test_dual_type_effectiveness_is_product_of_single_lookups() {
        for attacking in CreatureType::iter() {
            for first in CreatureType::iter() {
                for second in CreatureType::iter() {
                    let combined = CreatureType::type_effectiveness(attacking, &[first, second]);
                    let expected =
                        attacking.multiplier_against(first) * attacking.multiplier_against(second);
                    assert_eq!(combined, expected);
                    assert_eq!(
                        combined,
                        CreatureType::type_effectiveness(attacking, &[second, first])
                    );
                }
            }
        }
    }

    #[test]
    fn test_specific_matchups() {
        assert_eq!(CreatureType::type_effectiveness(Fire, &[Grass]), 2.0);
        assert_eq!(CreatureType::type_effectiveness(Fire, &[Grass, Steel]), 4.0);
        assert_eq!(CreatureType::type_effectiveness(Grass, &[Fire, Flying]), 0.25);
        assert_eq!(CreatureType::type_effectiveness(Water, &[Fire, Grass]), 1.0);
        assert_eq!(CreatureType::type_effectiveness(Normal, &[Ghost, Dark]), 0.0);
        assert_eq!(CreatureType::type_effectiveness(Normal, &[Normal]), 1.0);
        assert!(CreatureType::is_immune(Ground, &[Fire, Flying]));
    }

    #[test]
    fn test_type_names_round_trip_through_strings() {
        assert_eq!(CreatureType::from_str("Electric"), Ok(Electric));
        assert_eq!(Fairy.to_string(), "Fairy");
        assert!(CreatureType::from_str("Typeless").is_err());
    }
}
