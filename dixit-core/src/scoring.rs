use dixit_types::{Player, RoundInput, RoundScore, ScoringBranch};

/// Points for a correct guess, and for the narrator when some but not all
/// players found their card.
pub const CORRECT_GUESS_POINTS: i32 = 3;

/// Points for every non-narrator when nobody or everybody found the card.
pub const ALL_OR_NONE_POINTS: i32 = 2;

/// Base points handed out before bluff votes are added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseAward {
    pub branch: ScoringBranch,
    pub narrator: i32,
    pub correct_guesser: i32,
    pub wrong_guesser: i32,
}

/// Result of scoring one round, before it is applied to the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub branch: ScoringBranch,
    /// One entry per roster player, in roster order.
    pub scores: Vec<RoundScore>,
}

pub struct ScoringEngine;

impl ScoringEngine {
    /// Pick the base-award rule from how many of the `others` non-narrators
    /// found the narrator's card.
    pub fn base_award(correct_guesses: usize, others: usize) -> BaseAward {
        if correct_guesses == 0 || correct_guesses == others {
            BaseAward {
                branch: ScoringBranch::AllOrNone,
                narrator: 0,
                correct_guesser: ALL_OR_NONE_POINTS,
                wrong_guesser: ALL_OR_NONE_POINTS,
            }
        } else {
            BaseAward {
                branch: ScoringBranch::Partial,
                narrator: CORRECT_GUESS_POINTS,
                correct_guesser: CORRECT_GUESS_POINTS,
                wrong_guesser: 0,
            }
        }
    }

    /// Score a round. The narrator only ever receives the base award; every
    /// other player gets their base award plus one point per vote their card
    /// drew.
    pub fn score_round(roster: &[Player], input: &RoundInput) -> RoundOutcome {
        let others = roster
            .iter()
            .filter(|p| p.id != input.narrator_id)
            .count();
        let award = Self::base_award(input.correct_guesses(), others);

        let scores = roster
            .iter()
            .map(|player| {
                let points = if player.id == input.narrator_id {
                    award.narrator
                } else {
                    match input.get(player.id) {
                        Some(entry) if entry.guessed => {
                            award.correct_guesser + entry.votes as i32
                        }
                        Some(entry) => award.wrong_guesser + entry.votes as i32,
                        None => award.wrong_guesser,
                    }
                };

                RoundScore {
                    player_id: player.id,
                    points,
                }
            })
            .collect();

        RoundOutcome {
            branch: award.branch,
            scores,
        }
    }
}
