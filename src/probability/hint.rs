//! Advisory hints for human players.
//!
//! Hints never mutate the game. The combination hint ranks legal moves with
//! the same scoring the hard AI uses; the continue hint classifies the
//! current bust risk and recommends banking when it is high or when a claim
//! is waiting.

use serde::{Deserialize, Serialize};

use super::bust::{current_bust_probability, RiskBand};
use crate::ai::rank_combinations;
use crate::core::{Column, ColumnSet};
use crate::dice::Combination;
use crate::rules::GameState;

/// Temporary steps at or above which the progress at risk is flagged as significant.
pub const SIGNIFICANT_STEPS: u32 = 6;

/// Bust chance after the best move above which the combination hint warns.
pub const BUST_WARNING: f64 = 0.5;

/// What the player is deciding.
#[derive(Clone, Copy, Debug)]
pub enum HintContext<'a> {
    /// Picking among the combinations of a roll (empty before rolling).
    ChooseCombination {
        state: &'a GameState,
        combos: &'a [Combination],
    },
    /// Deciding whether to roll again.
    ContinueOrStop { state: &'a GameState },
}

/// Roll again or bank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Roll,
    Stop,
}

/// Analysis of one legal combination.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComboAnalysis {
    /// Position in the roll's combination list.
    pub index: usize,
    pub combo: Combination,
    pub expected_value: f64,
    pub bust_prob_after: f64,
    /// Columns this move would top out.
    pub would_claim: ColumnSet,
}

/// Ranked advice for a combination choice.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComboHint {
    pub message: String,
    /// Best first.
    pub analyses: Vec<ComboAnalysis>,
}

/// Advice for the roll-or-stop decision.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContinueHint {
    pub message: String,
    pub recommendation: Recommendation,
    pub bust_probability: f64,
    pub risk: RiskBand,
    pub would_claim: ColumnSet,
    pub steps_at_risk: u32,
    /// Human-readable reasons, one per line.
    pub factors: Vec<String>,
}

/// A hint with a message and a structured breakdown.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Hint {
    /// No roll to advise on yet.
    NoRoll { message: String },
    /// No combination is legal.
    Bust { message: String },
    Combo(ComboHint),
    Continue(ContinueHint),
}

impl Hint {
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Hint::NoRoll { message } | Hint::Bust { message } => message,
            Hint::Combo(hint) => &hint.message,
            Hint::Continue(hint) => &hint.message,
        }
    }
}

/// Build the hint for a decision.
#[must_use]
pub fn generate_hint(context: HintContext<'_>) -> Hint {
    match context {
        HintContext::ChooseCombination { state, combos } => combo_hint(state, combos),
        HintContext::ContinueOrStop { state } => Hint::Continue(continue_hint(state)),
    }
}

/// Columns of `combo` that playing it would top out. A double moves its
/// column two steps.
#[must_use]
pub fn would_claim(state: &GameState, combo: &Combination) -> ColumnSet {
    let steps = if combo.is_double() { 2 } else { 1 };
    combo
        .columns()
        .into_iter()
        .filter(|&c| state.can_place_runner(c))
        .filter(|&c| {
            let temp = state.turn().steps(c);
            state.effective_position(c, temp + steps) >= state.board().height(c)
        })
        .collect()
}

fn join_columns(columns: ColumnSet) -> String {
    columns
        .iter()
        .map(|c: Column| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn percent(p: f64) -> u32 {
    (p * 100.0).round() as u32
}

fn combo_hint(state: &GameState, combos: &[Combination]) -> Hint {
    if combos.is_empty() {
        return Hint::NoRoll {
            message: "Roll the dice first!".to_string(),
        };
    }

    let ranked = rank_combinations(state, combos, true);
    let Some(best) = ranked.first() else {
        return Hint::Bust {
            message: "No valid moves - you will bust!".to_string(),
        };
    };

    let analyses: Vec<ComboAnalysis> = ranked
        .iter()
        .map(|scored| ComboAnalysis {
            index: scored.index,
            combo: scored.combo,
            expected_value: scored.score,
            bust_prob_after: scored.bust_prob_after.unwrap_or(0.0),
            would_claim: would_claim(state, &scored.combo),
        })
        .collect();

    let top = &analyses[0];
    let mut message = format!("Best: Columns {} & {}", best.combo.first(), best.combo.second());
    if !top.would_claim.is_empty() {
        message.push_str(&format!(
            " - would claim column(s) {}!",
            join_columns(top.would_claim)
        ));
    }
    message.push_str(&format!(" (EV: {:.1})", top.expected_value));
    if top.bust_prob_after > BUST_WARNING {
        message.push_str(&format!(
            "\nWarning: {}% chance to bust next roll!",
            percent(top.bust_prob_after)
        ));
    }

    Hint::Combo(ComboHint { message, analyses })
}

fn continue_hint(state: &GameState) -> ContinueHint {
    let bust_probability = current_bust_probability(state);
    let risk = RiskBand::from_probability(bust_probability);
    let would_claim = state.pending_claims();
    let steps_at_risk = state.turn().total_steps();

    let mut factors = vec![format!("{risk} bust risk ({}%)", percent(bust_probability))];
    let mut recommendation = if risk == RiskBand::High {
        Recommendation::Stop
    } else {
        Recommendation::Roll
    };

    if !would_claim.is_empty() {
        factors.push(format!(
            "Would claim column(s) {} if you stop!",
            join_columns(would_claim)
        ));
        recommendation = Recommendation::Stop;
    }

    if steps_at_risk >= SIGNIFICANT_STEPS {
        factors.push(format!("{steps_at_risk} steps at risk - significant progress!"));
    } else {
        factors.push(format!("Only {steps_at_risk} steps at risk"));
    }

    let message = match recommendation {
        Recommendation::Stop => "Recommendation: STOP and bank your progress",
        Recommendation::Roll => "Recommendation: Roll again",
    }
    .to_string();

    ContinueHint {
        message,
        recommendation,
        bust_probability,
        risk,
        would_claim,
        steps_at_risk,
        factors,
    }
}
