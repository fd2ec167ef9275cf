//! Property tests over random positions.

use proptest::prelude::*;
use proptest::sample::Index;

use rust_draughts::{
    Board, Cell, Coord, MandatoryAction, Piece, Player, Rank, RuleEngine, TurnController, TurnState,
};

const RULES: RuleEngine = RuleEngine::new();

fn cell() -> impl Strategy<Value = Cell> {
    prop_oneof![
        6 => Just(Cell::Empty),
        2 => Just(Cell::Occupied(Piece::man(Player::White))),
        1 => Just(Cell::Occupied(Piece::king(Player::White))),
        2 => Just(Cell::Occupied(Piece::man(Player::Black))),
        1 => Just(Cell::Occupied(Piece::king(Player::Black))),
    ]
}

fn board() -> impl Strategy<Value = Board> {
    prop::collection::vec(cell(), 32).prop_map(|cells| {
        let mut board = Board::empty();
        for (coord, cell) in Coord::playable().zip(cells) {
            board.set(coord, cell).unwrap();
        }
        board
    })
}

fn player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::White), Just(Player::Black)]
}

fn recount(board: &Board, player: Player, rank: Rank) -> u32 {
    board.pieces(player).filter(|(_, p)| p.rank == rank).count() as u32
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn king_capture_blocks_everything_else(board in board(), player in player()) {
        let action = RULES.classify_mandatory_action(&board, player);
        prop_assume!(matches!(action, MandatoryAction::KingCapture(_)));

        for (coord, piece) in board.pieces(player) {
            for mv in RULES.enumerate_moves_for_piece(&board, coord) {
                if piece.rank == Rank::Man || !mv.is_capture {
                    prop_assert!(!RULES.is_valid_move(&board, mv.from, mv.to, player));
                }
            }
            for step in RULES.enumerate_simple_moves(&board, coord) {
                prop_assert!(!RULES.is_valid_move(&board, step.from, step.to, player));
            }
        }
    }

    #[test]
    fn valid_moves_come_from_enumeration(board in board(), player in player()) {
        for (from, _) in board.pieces(player) {
            let moves = RULES.enumerate_moves_for_piece(&board, from);
            for to in Coord::playable() {
                if RULES.is_valid_move(&board, from, to, player) {
                    prop_assert!(moves.iter().any(|m| m.connects(from, to)));
                }
            }
        }
    }

    #[test]
    fn legal_moves_never_mix_kinds(board in board(), player in player()) {
        let moves = RULES.legal_moves(&board, player);
        let captures = moves.iter().filter(|m| m.is_capture).count();
        prop_assert!(captures == 0 || captures == moves.len());
        prop_assert_eq!(RULES.has_any_legal_move(&board, player), !moves.is_empty());
    }

    #[test]
    fn accepted_moves_keep_counts_and_chains(
        board in board(),
        player in player(),
        pick in any::<Index>(),
    ) {
        let moves = RULES.legal_moves(&board, player);
        prop_assume!(!moves.is_empty());
        let mv = *pick.get(&moves);

        let before = board.total_pieces();
        let mut tc = TurnController::with_board(board, player);
        let outcome = tc.submit_move(mv.from, mv.to).unwrap();
        let after = tc.board();

        let expected = if mv.is_capture { before - 1 } else { before };
        prop_assert_eq!(after.total_pieces(), expected);

        for p in Player::all() {
            prop_assert_eq!(after.man_count(p), recount(after, p, Rank::Man));
            prop_assert_eq!(after.king_count(p), recount(after, p, Rank::King));
        }

        let landed = after.piece_at(mv.to).unwrap();
        if mv.to.row == player.promotion_row() || mv.piece.is_king() {
            prop_assert!(landed.is_king());
        }

        let more_jumps = !RULES.enumerate_jumps(after, mv.to).is_empty();
        if mv.is_capture && more_jumps {
            prop_assert_eq!(
                outcome.state,
                TurnState::CaptureContinuation { player, forced: mv.to }
            );
        } else {
            let in_chain = matches!(outcome.state, TurnState::CaptureContinuation { .. });
            prop_assert!(!in_chain);
        }
    }

    #[test]
    fn rejected_moves_change_nothing(
        board in board(),
        player in player(),
        from in 0usize..32,
        to in 0usize..32,
    ) {
        let squares: Vec<Coord> = Coord::playable().collect();
        let (from, to) = (squares[from], squares[to]);
        prop_assume!(!RULES.is_valid_move(&board, from, to, player));

        let mut tc = TurnController::with_board(board.clone(), player);
        prop_assert!(tc.submit_move(from, to).is_err());
        prop_assert_eq!(tc.board(), &board);
        prop_assert_eq!(tc.state(), TurnState::AwaitingMove { player });
    }
}
