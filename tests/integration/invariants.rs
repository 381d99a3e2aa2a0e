//! Structural properties every generated maze must satisfy

use helixmaze::cell::{Cell, Dir};
use helixmaze::maze::{Connectivity, Maze};
use helixmaze::survey::survey;
use proptest::prelude::*;

use super::test_utils::{all_cells, params, reachable, real_edge_count, visited_cells};

fn is_entry_shaft(maze: &Maze, p: helixmaze::grid::Pos) -> bool {
    let c = maze.cell(p);
    c.is_invalid() && p.x == maze.entry_cell().x && c.has(Dir::Up) && c.has(Dir::Down)
}

fn check_mirroring(maze: &Maze) {
    for p in all_cells(maze) {
        let c = maze.cell(p);
        for d in Dir::ALL {
            if !c.has(d) {
                continue;
            }
            match maze.neighbor(p, d) {
                Some(q) => assert!(
                    maze.cell(q).has(d.opposite()),
                    "{p:?} has {d:?} but {q:?} lacks {:?}",
                    d.opposite()
                ),
                // Only the shaft opening may point off the grid
                None => assert!(is_entry_shaft(maze, p), "{p:?} points off grid via {d:?}"),
            }
        }
    }
}

fn check_no_phantoms(maze: &Maze) {
    for p in all_cells(maze) {
        let c = maze.cell(p);
        if c.is_invalid() {
            continue;
        }
        for d in Dir::ALL.into_iter().filter(|&d| c.has(d)) {
            let q = maze.neighbor(p, d).expect("real cell links off grid");
            assert!(
                !maze.cell(q).is_invalid() || is_entry_shaft(maze, q),
                "{p:?} links into margin cell {q:?}"
            );
        }
    }
}

fn check_tree(maze: &Maze) {
    let visited = visited_cells(maze);
    assert_eq!(real_edge_count(maze), visited.len() - 1);
    let seen = reachable(maze, maze.exit_cell());
    assert_eq!(seen.len(), visited.len());
}

fn check_solution(maze: &Maze) {
    let path = maze.solution_path();
    assert_eq!(path[0], maze.exit_cell());
    for pair in path.windows(2) {
        assert!(maze.is_connected(pair[0], pair[1]), "{:?} -> {:?}", pair[0], pair[1]);
        assert!(maze.is_connected(pair[1], pair[0]));
    }
    let last = *path.last().unwrap();
    assert_eq!(maze.neighbor(last, Dir::Up), Some(maze.entry_cell()));
    assert!(maze.is_connected(last, maze.entry_cell()));
}

fn check_margins(maze: &Maze) {
    let top = maze.height() - 1;
    let entry = maze.entry_cell();
    assert_eq!(entry.y, top);
    for x in 0..maze.width() {
        let bottom = maze.cell(helixmaze::grid::Pos::new(x, 0));
        assert_eq!(bottom, Cell::invalid());
        let p = helixmaze::grid::Pos::new(x, top);
        if x == entry.x {
            assert!(is_entry_shaft(maze, p));
        } else {
            assert_eq!(maze.cell(p), Cell::invalid());
        }
    }
}

fn check_dead_ends(maze: &Maze) {
    let m = maze.metrics();
    let by_hand = all_cells(maze)
        .into_iter()
        .filter(|&p| {
            let c = maze.cell(p);
            !c.is_invalid() && c.degree() == 1
        })
        .count();
    assert_eq!(m.dead_ends, by_hand);
    assert!(m.dead_ends <= m.cells);
    assert_eq!(m.solution_len, maze.solution_path().len());
}

fn check_all(maze: &Maze) {
    check_mirroring(maze);
    check_no_phantoms(maze);
    check_tree(maze);
    check_solution(maze);
    check_margins(maze);
    check_dead_ends(maze);
}

#[test]
fn test_invariants_plain_cylinder() {
    for seed in 0..10 {
        let (maze, _) = helixmaze::generate(&params(16, 10, 0, seed, 4)).unwrap();
        check_all(&maze);
    }
}

#[test]
fn test_invariants_steep_helix() {
    for seed in 0..10 {
        let (maze, _) = helixmaze::generate(&params(12, 14, 5, seed, 8)).unwrap();
        check_all(&maze);
    }
}

#[test]
fn test_full_cylinder_is_fully_carved() {
    let (maze, _) = helixmaze::generate(&params(10, 8, 0, 3, 5)).unwrap();
    assert_eq!(maze.metrics().visited, maze.metrics().cells);
}

#[test]
fn test_complexity_lengthens_solutions() {
    let seeds = 0..40;
    let calm = survey(&params(16, 12, 0, 0, 0), seeds.clone()).unwrap();
    let wild = survey(&params(16, 12, 0, 0, 10), seeds).unwrap();
    assert_eq!(calm.successes, 40);
    assert_eq!(wild.successes, 40);
    assert!(
        wild.mean_solution_len > calm.mean_solution_len,
        "complexity 10 mean {} vs complexity 0 mean {}",
        wild.mean_solution_len,
        calm.mean_solution_len
    );
}

#[test]
fn test_complexity_sign_is_ignored() {
    let a = helixmaze::generate(&params(14, 10, 1, 8, 6)).unwrap().0;
    let b = helixmaze::generate(&params(14, 10, 1, 8, -6)).unwrap().0;
    assert_eq!(a.grid(), b.grid());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_generated_mazes_hold_invariants(
        width in 3i32..18,
        height in 3i32..14,
        helix in 0i32..6,
        seed in any::<u64>(),
        complexity in -10i32..=10,
    ) {
        // A failed run must fail cleanly; a successful one must hold everything
        if let Ok((maze, _)) = helixmaze::generate(&params(width, height, helix, seed, complexity)) {
            check_all(&maze);
        }
    }
}
