use tokio::task;

use crate::bot_controller::{BotInput, calculate_move};
use crate::game_state::MatchState;
use crate::session_rng::SessionRng;
use crate::settings::{BotSettings, Difficulty};
use crate::types::{FirstPlayerMode, Mark};

/// Session-lifetime win counters. Not persisted anywhere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub x_wins: u32,
    pub o_wins: u32,
}

impl Score {
    fn record_win(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x_wins += 1,
            Mark::O => self.o_wins += 1,
            Mark::Empty => {}
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    /// Human plays X against the bot's O.
    BotMatch,
    /// Two humans share the console; no bot.
    LocalTwoPlayer,
}

/// Owns the match state, the score and the RNG for one sitting. All board
/// mutation happens here, on the owning task: the bot computation runs on a
/// worker and hands back a plain index.
pub struct MatchSession {
    state: MatchState,
    score: Score,
    rng: SessionRng,
    mode: GameMode,
    difficulty: Difficulty,
    bot_settings: BotSettings,
    first_player_mode: FirstPlayerMode,
}

pub const BOT_MARK: Mark = Mark::O;

impl MatchSession {
    pub fn new(
        mode: GameMode,
        difficulty: Difficulty,
        bot_settings: BotSettings,
        first_player_mode: FirstPlayerMode,
        mut rng: SessionRng,
    ) -> Result<Self, String> {
        bot_settings.validate()?;

        let state = MatchState::new(first_player_mode, &mut rng);
        Ok(Self {
            state,
            score: Score::default(),
            rng,
            mode,
            difficulty,
            bot_settings,
            first_player_mode,
        })
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn is_over(&self) -> bool {
        self.state.status.is_over()
    }

    pub fn is_bot_turn(&self) -> bool {
        self.mode == GameMode::BotMatch
            && !self.is_over()
            && self.state.current_mark == BOT_MARK
    }

    /// Applies the current player's move from console input. Rejected when
    /// it is the bot's turn to act.
    pub fn play_human_turn(&mut self, index: usize) -> Result<(), String> {
        if self.is_bot_turn() {
            return Err("It is the bot's turn".to_string());
        }

        let mark = self.state.current_mark;
        self.apply_turn(mark, index)
    }

    /// Computes the bot's move on a blocking worker from a snapshot of the
    /// board, then applies the returned index here. The board is never
    /// touched off the owning task.
    pub async fn play_bot_turn(&mut self) -> Result<usize, String> {
        if !self.is_bot_turn() {
            return Err("It is not the bot's turn".to_string());
        }

        let input = BotInput::new(self.state.board.clone(), BOT_MARK)?;
        let difficulty = self.difficulty;
        let settings = self.bot_settings;
        let mut worker_rng = SessionRng::new(self.rng.derive_seed());

        let index = task::spawn_blocking(move || {
            calculate_move(&input, difficulty, &settings, &mut worker_rng)
        })
        .await
        .map_err(|e| format!("Bot move task failed: {}", e))?
        .ok_or_else(|| "Bot invoked with no empty cells".to_string())?;

        self.apply_turn(BOT_MARK, index)?;
        Ok(index)
    }

    /// Resets the board for the next match; the score carries over.
    pub fn start_next_match(&mut self) {
        self.state = MatchState::new(self.first_player_mode, &mut self.rng);
    }

    fn apply_turn(&mut self, mark: Mark, index: usize) -> Result<(), String> {
        self.state.place_mark(mark, index)?;

        // A winning move flips the status exactly once; later moves are
        // rejected, so the score cannot double-count.
        if let Some(winner) = self.state.winner() {
            self.score.record_win(winner);
        }

        Ok(())
    }
}
