//! Deadlock detection: cycle search over the resource conflict graph.
//!
//! Depth-first search with three marks per movement (unvisited, on stack,
//! finished).  Reaching an on-stack movement again is a cycle.  Every
//! movement is used as a root in turn, so disconnected components are
//! covered.
//!
//! The search keeps its own frame stack instead of recursing, so dense
//! graphs with long dependency chains cannot exhaust the call stack.

use ix_core::MoveId;

use crate::{Adjacency, ResourceGraph};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum Mark {
    Unvisited,
    OnStack,
    Finished,
}

/// `true` if `rcg` contains a directed cycle.
///
/// The answer does not depend on iteration order; which cycle is found
/// first does.
pub fn has_cycle(rcg: &ResourceGraph) -> bool {
    find_cycle(rcg).is_some()
}

/// One cycle of `rcg`, as the movements along it in edge order, or `None`
/// if the graph is acyclic.
///
/// Intended for diagnostics only; callers must not depend on which cycle
/// is reported.
pub fn find_cycle(rcg: &ResourceGraph) -> Option<Vec<MoveId>> {
    find_cycle_in(rcg.adjacency())
}

pub(crate) fn find_cycle_in(successors: &Adjacency<MoveId>) -> Option<Vec<MoveId>> {
    let n = successors.row_count();
    let mut mark = vec![Mark::Unvisited; n];
    // Frame = (movement, index of the next successor to explore).
    let mut stack: Vec<(MoveId, usize)> = Vec::new();

    for root in 0..n {
        if mark[root] != Mark::Unvisited {
            continue;
        }
        mark[root] = Mark::OnStack;
        stack.push((MoveId(root as u32), 0));

        while let Some(&(node, cursor)) = stack.last() {
            let Some(&next) = successors.row(node.index()).get(cursor) else {
                mark[node.index()] = Mark::Finished;
                stack.pop();
                continue;
            };
            if let Some(top) = stack.last_mut() {
                top.1 += 1;
            }

            match mark[next.index()] {
                Mark::OnStack => {
                    let start = stack.iter().position(|&(m, _)| m == next).unwrap_or(0);
                    return Some(stack[start..].iter().map(|&(m, _)| m).collect());
                }
                Mark::Unvisited => {
                    mark[next.index()] = Mark::OnStack;
                    stack.push((next, 0));
                }
                Mark::Finished => {}
            }
        }
    }
    None
}
