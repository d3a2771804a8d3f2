use criterion::{Criterion, criterion_group, criterion_main};
use tictactoe_game::{
    Board, BotInput, BotSettings, Difficulty, Mark, SessionRng, calculate_heuristic_move,
    calculate_move,
};

fn mid_game_board() -> Board {
    let mut board = Board::new();
    for (index, mark) in [(4, Mark::X), (0, Mark::O), (8, Mark::X), (2, Mark::O)] {
        board.apply_move(index, mark);
    }
    board
}

fn bench_heuristic_empty_board(c: &mut Criterion) {
    c.bench_function("heuristic_empty_board", |b| {
        let input = BotInput::new(Board::new(), Mark::O).unwrap();
        let mut rng = SessionRng::new(1);
        b.iter(|| calculate_heuristic_move(&input, &mut rng));
    });
}

fn bench_heuristic_mid_game(c: &mut Criterion) {
    c.bench_function("heuristic_mid_game", |b| {
        let input = BotInput::new(mid_game_board(), Mark::O).unwrap();
        let mut rng = SessionRng::new(1);
        b.iter(|| calculate_heuristic_move(&input, &mut rng));
    });
}

fn bench_full_self_play_match(c: &mut Criterion) {
    c.bench_function("self_play_hard_match", |b| {
        let settings = BotSettings::default();
        let mut rng = SessionRng::new(1);

        b.iter(|| {
            let mut board = Board::new();
            let mut current_mark = Mark::X;

            while board.winning_line().is_none() && !board.is_full() {
                let input = BotInput::new(board.clone(), current_mark).unwrap();
                let Some(index) = calculate_move(&input, Difficulty::Hard, &settings, &mut rng)
                else {
                    break;
                };
                board.apply_move(index, current_mark);
                current_mark = current_mark.opponent().unwrap();
            }

            board
        });
    });
}

criterion_group!(
    benches,
    bench_heuristic_empty_board,
    bench_heuristic_mid_game,
    bench_full_self_play_match
);
criterion_main!(benches);
