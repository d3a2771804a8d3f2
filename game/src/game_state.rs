use crate::board::Board;
use crate::session_rng::SessionRng;
use crate::types::{FirstPlayerMode, GameStatus, Mark};

#[derive(Clone, Debug)]
pub struct MatchState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<usize>,
}

impl MatchState {
    pub fn new(first_player_mode: FirstPlayerMode, rng: &mut SessionRng) -> Self {
        let current_mark = match first_player_mode {
            FirstPlayerMode::XFirst => Mark::X,
            FirstPlayerMode::Random => {
                if rng.coin_flip() {
                    Mark::X
                } else {
                    Mark::O
                }
            }
        };

        Self {
            board: Board::new(),
            current_mark,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn place_mark(&mut self, mark: Mark, index: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if mark != self.current_mark {
            return Err(format!("Not {}'s turn", mark.symbol()));
        }

        if !self.board.apply_move(index, mark) {
            return Err(format!("Cell {} is out of range or already marked", index));
        }

        self.last_move = Some(index);
        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => unreachable!(),
        };
    }

    fn check_game_over(&mut self) {
        if self.board.has_winner(self.current_mark) {
            self.status = match self.current_mark {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!(),
            };
            return;
        }

        if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
    }
}
