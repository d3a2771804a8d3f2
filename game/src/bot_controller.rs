use crate::board::Board;
use crate::session_rng::SessionRng;
use crate::settings::{BotSettings, Difficulty};
use crate::types::Mark;

/// Snapshot of everything the bot needs for one move, detached from the
/// session so the computation can run on a worker task.
#[derive(Clone, Debug)]
pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
    pub opponent_mark: Mark,
}

impl BotInput {
    pub fn new(board: Board, bot_mark: Mark) -> Result<Self, String> {
        let opponent_mark = bot_mark
            .opponent()
            .ok_or_else(|| "Bot mark must be X or O".to_string())?;

        Ok(Self {
            board,
            bot_mark,
            opponent_mark,
        })
    }
}

/// Selects the bot's move: a [1, 100] roll against the tier's heuristic
/// percent decides between heuristic and uniformly random play. Returns
/// None only on a full board; callers check game-over first.
pub fn calculate_move(
    input: &BotInput,
    difficulty: Difficulty,
    settings: &BotSettings,
    rng: &mut SessionRng,
) -> Option<usize> {
    if input.board.empty_slots().is_empty() {
        return None;
    }

    let roll = rng.percent_roll();
    if roll <= settings.heuristic_percent(difficulty) {
        calculate_heuristic_move(input, rng)
    } else {
        calculate_random_move(&input.board, rng)
    }
}

/// One-ply lookahead in strict priority order: take an immediate win,
/// block the opponent's immediate win, otherwise play randomly. Empty
/// cells are probed in ascending index order so ties resolve to the
/// lowest index.
pub fn calculate_heuristic_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    let empty_slots = input.board.empty_slots();

    for mark in [input.bot_mark, input.opponent_mark] {
        for &index in &empty_slots {
            let mut probe = input.board.clone();
            probe.apply_move(index, mark);
            if probe.has_winner(mark) {
                return Some(index);
            }
        }
    }

    calculate_random_move(&input.board, rng)
}

pub fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    let empty_slots = board.empty_slots();
    rng.choose_index(empty_slots.len()).map(|i| empty_slots[i])
}
