//! Roster-wide position outlook.

use crate::player::{Player, PlayerId, Position, Preference};

/// Bonus for the position a player explicitly asked for.
const STATED_BONUS: f64 = 0.20;
/// Bonus applied to both positions when the player has no leaning.
const OPEN_BONUS: f64 = 0.05;
/// Win rate assumed where no history exists.
const NEUTRAL_WIN_RATE: f64 = 0.5;

/// Suggests one position per player across a whole roster.
///
/// Useful outside any concrete split, for scrim planning or seeding a
/// lobby discussion. Each position is scored from historical win rate
/// (missing history reads as neutral) plus a preference bonus; players
/// commit in order of how strongly they lean, so a mild leaning never
/// crowds out a pronounced one. Each position is soft-capped at half
/// the roster (rounded up), keeping the outlook usable as a seat split.
///
/// Returns `(player, position)` pairs in commit order, strongest
/// leaning first. Ties prefer the flank and break by player id.
pub fn suggest_positions(players: &[Player]) -> Vec<(PlayerId, Position)> {
    let cap = (players.len() + 1) / 2;

    let mut leanings: Vec<(f64, f64, &Player)> = players
        .iter()
        .map(|p| {
            let flank = outlook_score(p, Position::Flank);
            let pocket = outlook_score(p, Position::Pocket);
            (flank, pocket, p)
        })
        .collect();

    leanings.sort_by(|a, b| {
        let lean_a = (a.0 - a.1).abs();
        let lean_b = (b.0 - b.1).abs();
        lean_b
            .total_cmp(&lean_a)
            .then_with(|| a.2.id.cmp(&b.2.id))
    });

    let mut flanks = 0;
    let mut pockets = 0;
    let mut suggestions = Vec::with_capacity(players.len());
    for (flank_score, pocket_score, player) in leanings {
        let mut position = if flank_score >= pocket_score {
            Position::Flank
        } else {
            Position::Pocket
        };
        let taken = match position {
            Position::Flank => flanks,
            Position::Pocket => pockets,
        };
        if taken >= cap {
            position = position.other();
        }
        match position {
            Position::Flank => flanks += 1,
            Position::Pocket => pockets += 1,
        }
        suggestions.push((player.id, position));
    }
    suggestions
}

fn outlook_score(player: &Player, position: Position) -> f64 {
    let history = player.win_rate(position).unwrap_or(NEUTRAL_WIN_RATE);
    let bonus = match player.preference {
        Preference::Any => OPEN_BONUS,
        p if p.accepts(position) => STATED_BONUS,
        _ => 0.0,
    };
    history + bonus
}
