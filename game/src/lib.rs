pub mod board;
pub mod bot_controller;
pub mod game_state;
pub mod logger;
pub mod session;
pub mod session_rng;
pub mod settings;
pub mod types;
pub mod win_detector;

pub use board::{Board, CELL_COUNT};
pub use bot_controller::{BotInput, calculate_heuristic_move, calculate_move};
pub use game_state::MatchState;
pub use session::{BOT_MARK, GameMode, MatchSession, Score};
pub use session_rng::SessionRng;
pub use settings::{BotSettings, Difficulty};
pub use types::{FirstPlayerMode, GameStatus, Mark, WinningLine};
pub use win_detector::{LINES, check_win, find_winning_line};
