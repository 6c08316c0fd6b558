use crate::board::Board;

/// Flood-fill the connected region of same-signed points containing `start`,
/// plus every adjacent point of a different sign.
///
/// The second list keeps duplicates: a boundary point adjacent to two region
/// points is reported twice. Starting from a stone this yields the stone's
/// chain and its boundary (liberties and enemy stones); starting from an
/// empty point it yields an empty region and the stones enclosing it.
pub fn chain_and_reached(board: &Board, start: usize) -> (Vec<usize>, Vec<usize>) {
    let sign = board.sign(start);
    let mut visited = vec![false; board.grid().area()];
    let mut chain = Vec::new();
    let mut reached = Vec::new();
    let mut stack = vec![start];

    while let Some(p) = stack.pop() {
        if visited[p] {
            continue;
        }
        visited[p] = true;
        chain.push(p);
        for &n in board.grid().neighbors(p) {
            if board.sign(n) == sign {
                if !visited[n] {
                    stack.push(n);
                }
            } else {
                reached.push(n);
            }
        }
    }

    (chain, reached)
}

/// Remove the chain containing `start` if it has no liberties. Returns the
/// cleared indices, or an empty list with the board untouched if the chain
/// is alive. Callers start from a stone.
pub fn capture_if_dead(board: &mut Board, start: usize) -> Vec<usize> {
    debug_assert_ne!(board.sign(start), 0, "capture check on an empty point");

    let (chain, reached) = chain_and_reached(board, start);
    if reached.iter().any(|&p| board.is_vacant(p)) {
        return Vec::new();
    }

    board.set_many(&chain, 0);
    chain
}
