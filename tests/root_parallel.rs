use knightrace::search::{SearchParams, Searcher};
use knightrace::{Board, Layout, Player, Players, Side};

#[test]
fn root_parallel_bestmove_equals_single_thread() {
    let computer = Player::new(Side::White, 0, true);
    let human = Player::new(Side::Black, 7, false);
    let b = Board::start(Layout::WhiteTop, Players::new(computer, human).unwrap()).unwrap();
    // Step into a less symmetric position first.
    let b = b.make_move(&b.legal_moves(&computer)[5]);
    let b = b.make_move(&b.legal_moves(&human)[7]);

    let mut s1 = Searcher::default();
    let p1 = SearchParams { depth: 3, threads: 1, movetime: None };
    let r1 = s1.search_with_params(&b, &computer, &human, p1);

    let pool = rayon::ThreadPoolBuilder::new().num_threads(4).build().unwrap();
    let r4 = pool.install(|| {
        let mut s4 = Searcher::default();
        s4.search_with_params(&b, &computer, &human, SearchParams { threads: 4, ..p1 })
    });

    assert_eq!(r4.bestmove, r1.bestmove, "bestmove differs between single and multi-thread");
    assert_eq!(r4.score, r1.score);
    assert_eq!(r4.nodes, r1.nodes);
}

#[test]
fn threads_param_propagates() {
    let computer = Player::new(Side::White, 0, true);
    let human = Player::new(Side::Black, 7, false);
    let b = Board::start(Layout::WhiteTop, Players::new(computer, human).unwrap()).unwrap();
    let mut s = Searcher::default();
    let _ = s.search_with_params(&b, &computer, &human, SearchParams { depth: 1, threads: 4, movetime: None });
    assert_eq!(s.get_threads(), 4, "threads param did not propagate to searcher");
}
