use tictactoe_game::{GameMode, GameStatus, MatchState, Score};

pub fn render_board(state: &MatchState) -> String {
    let cells = state.board.cells();
    let mut out = String::new();

    out.push_str("╔═══╦═══╦═══╗\n");
    for row in 0..3 {
        let base = row * 3;
        out.push_str(&format!(
            "║ {} ║ {} ║ {} ║\n",
            cells[base].symbol(),
            cells[base + 1].symbol(),
            cells[base + 2].symbol()
        ));
        if row < 2 {
            out.push_str("╠═══╬═══╬═══╣\n");
        }
    }
    out.push_str("╚═══╩═══╩═══╝");

    out
}

pub fn render_outcome(state: &MatchState, mode: GameMode) -> String {
    match (state.status, mode) {
        (GameStatus::XWon, GameMode::BotMatch) => "You won!".to_string(),
        (GameStatus::OWon, GameMode::BotMatch) => "The bot won!".to_string(),
        (GameStatus::XWon, GameMode::LocalTwoPlayer) => "Player X won!".to_string(),
        (GameStatus::OWon, GameMode::LocalTwoPlayer) => "Player O won!".to_string(),
        (GameStatus::Draw, _) => "It's a draw!".to_string(),
        (GameStatus::InProgress, _) => String::new(),
    }
}

pub fn render_score(score: Score, mode: GameMode) -> String {
    match mode {
        GameMode::BotMatch => format!("Score - You: {}  Bot: {}", score.x_wins, score.o_wins),
        GameMode::LocalTwoPlayer => format!("Score - X: {}  O: {}", score.x_wins, score.o_wins),
    }
}
