use knightrace::search::eval::{self, EvalIndex};
use knightrace::{Board, EvalCtx, Layout, Player, Players, Side};
use pretty_assertions::assert_eq;

fn players() -> (Player, Player, Players) {
    let computer = Player::new(Side::White, 0, true);
    let human = Player::new(Side::Black, 7, false);
    (computer, human, Players::new(computer, human).unwrap())
}

fn board(text: &str) -> Board {
    let (_, _, ps) = players();
    Board::from_text(text, ps).expect("valid board text")
}

#[test]
fn material_four_pieces_is_fifty() {
    let (computer, human, _) = players();
    let b = board(
        "W**W****
         ********
         ***W****
         ********
         ********
         ******W*
         ********
         BBBBBBBB",
    );
    let ctx = EvalCtx { next_to_move: human, other: human };
    assert_eq!(eval::material(&b, &computer), 50.0);
    assert_eq!(EvalIndex::Material.calc(&b, &computer, &ctx), 50.0);
}

#[test]
fn home_strength_weights_edges_lower() {
    let (computer, human, _) = players();
    let b = board(
        "W**W****
         ********
         ***W****
         ********
         ********
         ********
         ********
         BBBBBBBB",
    );
    // Column 0 counts 10, column 3 counts 15; the piece on row 2 is off the home row.
    assert_eq!(eval::home_strength(&b, &computer), 25.0);
    assert_eq!(eval::home_strength(&b, &human), 100.0);
}

#[test]
fn progress_cancels_for_mirrored_distributions() {
    let (computer, human, _) = players();
    // White (finish row 7) at rows 2 and 4; Black (finish row 0) at rows 5 and 3.
    let b = board(
        "********
         ********
         *W******
         ******B*
         ***W****
         **B*****
         ********
         ********",
    );
    let ctx = EvalCtx { next_to_move: human, other: human };
    assert_eq!(eval::progress(&b, &computer, &ctx), 0.0);
}

#[test]
fn progress_uses_distance_table() {
    let (computer, human, _) = players();
    let b = board(
        "********
         ********
         ********
         ********
         ********
         ********
         W*******
         B*******",
    );
    let ctx = EvalCtx { next_to_move: human, other: human };
    // White one row from finish: 900. Black seven rows away: 0.
    assert_eq!(eval::progress(&b, &computer, &ctx), 900.0);
}

#[test]
fn threat_sign_follows_next_mover() {
    let (computer, human, _) = players();
    let b = board(
        "********
         **B*****
         ********
         ***W****
         ********
         ****B***
         ********
         ********",
    );
    let computer_next = EvalCtx { next_to_move: computer, other: human };
    let human_next = EvalCtx { next_to_move: human, other: human };
    assert_eq!(eval::threat(&b, &computer, &computer_next), 200.0);
    assert_eq!(eval::threat(&b, &computer, &human_next), -200.0);
}

#[test]
fn score_is_sum_of_indices() {
    let (computer, human, ps) = players();
    let b = Board::start(Layout::WhiteTop, ps).unwrap();
    let mv = b.legal_moves(&computer)[0];
    let b = b.make_move(&mv);
    let ctx = EvalCtx { next_to_move: human, other: human };
    let sum: f64 = EvalIndex::ALL.iter().map(|i| i.calc(&b, &computer, &ctx)).sum();
    assert_eq!(b.evaluate(&computer, &ctx), sum);
    let bd = eval::breakdown(&b, &computer, &ctx);
    assert_eq!(bd.total, sum);
    // First move (0,0)->(1,2): seven pieces stay home, one piece six rows from finish.
    assert_eq!(bd.material, 100.0);
    assert_eq!(bd.home_strength, 100.0 - 10.0);
    assert_eq!(bd.progress, 0.0);
}
