use knightrace::engine::{apply_move, best_move, is_game_over, legal_moves, winner};
use knightrace::{Board, EngineError, Layout, Move, Player, Players, Side, Square};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn players() -> (Player, Player, Players) {
    let computer = Player::new(Side::White, 0, true);
    let human = Player::new(Side::Black, 7, false);
    (computer, human, Players::new(computer, human).unwrap())
}

#[test]
fn apply_move_rejects_illegal_and_keeps_input() {
    let (computer, _, ps) = players();
    let b = Board::start(Layout::WhiteTop, ps).unwrap();
    let sideways = Move::new(computer, Square::new(0, 0), Square::new(0, 2));
    assert_eq!(apply_move(&b, &sideways), Err(EngineError::IllegalMove(sideways)));

    let mv = Move::new(computer, Square::new(0, 0), Square::new(2, 1));
    let next = apply_move(&b, &mv).unwrap();
    assert_eq!(b.grid().get(Square::new(0, 0)), Some(Side::White));
    assert_eq!(b.grid().get(Square::new(2, 1)), None);
    assert_eq!(next.grid().get(Square::new(2, 1)), Some(Side::White));
    assert_eq!(apply_move(&b, &mv).unwrap(), next, "apply_move is not deterministic");
}

#[test]
fn apply_move_checks_direction_against_registered_player() {
    let (computer, _, ps) = players();
    let b = Board::from_text(
        "********
         ********
         **W*****
         ********
         ********
         ********
         ********
         *******B",
        ps,
    )
    .unwrap();
    // White is registered on row 0, so (2,2) -> (0,1) is a retreat onto an empty square.
    let reversed = Player::new(Side::White, 7, true);
    let retreat = Move::new(reversed, Square::new(2, 2), Square::new(0, 1));
    assert!(!legal_moves(&b, &computer).iter().any(|m| m.from == retreat.from && m.to == retreat.to));
    assert_eq!(apply_move(&b, &retreat), Err(EngineError::IllegalMove(retreat)));

    // The computer flag does not matter, only side and home row.
    let forward = Move::new(computer.as_human(), Square::new(2, 2), Square::new(4, 1));
    assert!(apply_move(&b, &forward).is_ok());
}

#[test]
fn winner_and_game_over() {
    let (computer, human, ps) = players();
    let b = Board::from_text(
        "********
         ********
         ********
         ********
         ********
         ********
         B*******
         ****W***",
        ps,
    )
    .unwrap();
    assert!(is_game_over(&b, &computer));
    assert!(!is_game_over(&b, &human));
    assert_eq!(winner(&b), Some(computer));

    let start = Board::start(Layout::WhiteTop, ps).unwrap();
    assert_eq!(winner(&start), None);
    assert!(!start.is_game_over());
}

#[test]
fn best_move_is_in_legal_moves() {
    let (computer, human, ps) = players();
    let b = Board::start(Layout::WhiteTop, ps).unwrap();
    let mv = best_move(&b, &computer, &human, 1).unwrap();
    assert!(legal_moves(&b, &computer).contains(&mv));
}

#[test]
fn random_playouts_respect_move_rules() {
    let (computer, human, ps) = players();
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..50 {
        let mut b = Board::start(Layout::WhiteTop, ps).unwrap();
        let mut mover = computer;
        let mut other = human;
        let mut counts = (8, 8);
        for _ in 0..60 {
            if b.is_game_over() { break; }
            let moves = legal_moves(&b, &mover);
            for m in &moves {
                let dest = b.grid().get(m.to);
                assert_ne!(dest, Some(mover.side), "{m} lands on own piece");
                if dest.is_none() {
                    assert!(mover.advances(m.from.row(), m.to.row()), "{m} retreats onto an empty square");
                }
            }
            if moves.is_empty() { break; }
            let mv = moves[rng.gen_range(0..moves.len())];
            b = apply_move(&b, &mv).unwrap();

            let now = (b.occupied_by(Side::White).len(), b.occupied_by(Side::Black).len());
            assert!(now.0 <= counts.0 && now.1 <= counts.1, "piece count increased");
            assert!(now.0 + now.1 <= 16);
            counts = now;
            std::mem::swap(&mut mover, &mut other);
        }
    }
}
