//! Built-in payload texts
//!
//! Each constant is the source listing stored in the corresponding catalog
//! entry. The Rust listings document the registered runner functions; the
//! Wumpus World payload is a Prolog program kept as opaque text.

pub const DFS: &str = r#"/// Depth-first traversal from `start`.
///
/// Stack-based; neighbor lists are expanded in their listed order, so the
/// visit order matches the recursive formulation.
pub fn dfs(graph: &Graph, start: &str) -> Result<Vec<String>> {
    if !graph.contains(start) {
        return Err(ToolkitError::UnknownNode(start.to_string()));
    }

    let mut visited: HashSet<String> = HashSet::new();
    let mut order = Vec::new();
    let mut stack = vec![start.to_string()];

    while let Some(node) = stack.pop() {
        if !visited.insert(node.clone()) {
            continue;
        }
        order.push(node.clone());

        // Reverse push keeps the listed order on a LIFO stack
        for next in graph.neighbors(&node).iter().rev() {
            if !visited.contains(next) {
                stack.push(next.clone());
            }
        }
    }

    Ok(order)
}
"#;

pub const BFS: &str = r#"/// Breadth-first traversal from `start`, in level order.
pub fn bfs(graph: &Graph, start: &str) -> Result<Vec<String>> {
    if !graph.contains(start) {
        return Err(ToolkitError::UnknownNode(start.to_string()));
    }

    let mut visited: HashSet<String> = HashSet::new();
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    visited.insert(start.to_string());
    queue.push_back(start.to_string());

    while let Some(node) = queue.pop_front() {
        order.push(node.clone());
        for next in graph.neighbors(&node) {
            if visited.insert(next.clone()) {
                queue.push_back(next.clone());
            }
        }
    }

    Ok(order)
}
"#;

pub const UCS: &str = r#"/// Uniform-cost search from `start` to `goal`.
///
/// Cheapest-first frontier; each frontier entry carries the path that
/// reached it, so the result needs no reconstruction pass.
pub fn ucs(graph: &WeightedGraph, start: &str, goal: &str) -> Result<SearchOutcome> {
    if !graph.contains(start) {
        return Err(ToolkitError::UnknownNode(start.to_string()));
    }
    if !graph.contains(goal) {
        return Err(ToolkitError::UnknownNode(goal.to_string()));
    }

    let mut frontier: BinaryHeap<Reverse<(u64, String, Vec<String>)>> = BinaryHeap::new();
    let mut expanded: HashSet<String> = HashSet::new();

    frontier.push(Reverse((0, start.to_string(), vec![start.to_string()])));

    while let Some(Reverse((cost, node, path))) = frontier.pop() {
        if !expanded.insert(node.clone()) {
            continue;
        }
        if node == goal {
            return Ok(SearchOutcome { path, cost });
        }
        for (next, weight) in graph.neighbors(&node) {
            if !expanded.contains(next) {
                let mut next_path = path.clone();
                next_path.push(next.clone());
                frontier.push(Reverse((cost + weight, next.clone(), next_path)));
            }
        }
    }

    Err(ToolkitError::NoPath {
        from: start.to_string(),
        to: goal.to_string(),
    })
}
"#;

pub const DIJKSTRA: &str = r#"/// Dijkstra's shortest path from `source` to `target`.
///
/// Distance-map variant with predecessor reconstruction.
pub fn dijkstra(graph: &WeightedGraph, source: &str, target: &str) -> Result<SearchOutcome> {
    let mut dist: BTreeMap<String, u64> = BTreeMap::new();
    let mut prev: BTreeMap<String, String> = BTreeMap::new();
    let mut heap: BinaryHeap<Reverse<(u64, String)>> = BinaryHeap::new();

    dist.insert(source.to_string(), 0);
    heap.push(Reverse((0, source.to_string())));

    while let Some(Reverse((cost, node))) = heap.pop() {
        if cost > *dist.get(&node).unwrap_or(&u64::MAX) {
            continue;
        }
        if node == target {
            break;
        }
        for (next, weight) in graph.neighbors(&node) {
            let candidate = cost + weight;
            if candidate < *dist.get(next).unwrap_or(&u64::MAX) {
                dist.insert(next.clone(), candidate);
                prev.insert(next.clone(), node.clone());
                heap.push(Reverse((candidate, next.clone())));
            }
        }
    }

    reconstruct(&dist, &prev, source, target)
}
"#;

pub const COMPONENTS: &str = r#"/// Connected components of the undirected view of `graph`.
///
/// Each component is sorted internally; components are ordered by their
/// smallest node.
pub fn connected_components(graph: &Graph) -> Vec<Vec<String>> {
    let links = symmetrize(graph);
    let mut seen: HashSet<&str> = HashSet::new();
    let mut components = Vec::new();

    for node in graph.nodes() {
        if seen.contains(node) {
            continue;
        }
        let mut component = Vec::new();
        let mut queue = VecDeque::new();
        seen.insert(node);
        queue.push_back(node);
        while let Some(current) = queue.pop_front() {
            component.push(current.to_string());
            for next in links.neighbors(current) {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        component.sort();
        components.push(component);
    }

    components
}
"#;

pub const SUMMARY: &str = r#"/// Summarize a weighted graph's structure.
pub fn summarize(graph: &WeightedGraph) -> GraphSummary {
    let sinks = graph
        .nodes()
        .filter(|n| graph.neighbors(n).is_empty())
        .map(|n| n.to_string())
        .collect();

    GraphSummary {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        total_weight: graph.total_weight(),
        component_count: connected_components(&graph.unweighted()).len(),
        sinks,
    }
}
"#;

pub const WUMPUS: &str = r#"% Wumpus World
% A knowledge-based agent hunting gold in a cave of pits and one wumpus.
% The world is a 4x4 grid; the agent starts at (1,1) facing east.

:- dynamic agent_at/2, agent_dir/1, agent_arrows/1, agent_gold/0.
:- dynamic wumpus_at/2, wumpus_alive/0, pit_at/2, gold_at/2.
:- dynamic score/1.

% --- Sample world configuration ---

world_size(4).

init_world :-
    retract_all,
    assert(agent_at(1, 1)),
    assert(agent_dir(east)),
    assert(agent_arrows(1)),
    assert(wumpus_at(1, 3)),
    assert(wumpus_alive),
    assert(pit_at(3, 1)),
    assert(pit_at(3, 3)),
    assert(pit_at(4, 4)),
    assert(gold_at(2, 3)),
    assert(score(0)).

retract_all :-
    retractall(agent_at(_, _)),
    retractall(agent_dir(_)),
    retractall(agent_arrows(_)),
    retractall(agent_gold),
    retractall(wumpus_at(_, _)),
    retractall(wumpus_alive),
    retractall(pit_at(_, _)),
    retractall(gold_at(_, _)),
    retractall(score(_)).

% --- Geometry ---

adjacent(X, Y, X1, Y) :- X1 is X + 1.
adjacent(X, Y, X1, Y) :- X1 is X - 1.
adjacent(X, Y, X, Y1) :- Y1 is Y + 1.
adjacent(X, Y, X, Y1) :- Y1 is Y - 1.

in_bounds(X, Y) :-
    world_size(N),
    X >= 1, X =< N,
    Y >= 1, Y =< N.

% --- Percepts ---

stench(X, Y) :- wumpus_at(WX, WY), adjacent(X, Y, WX, WY).
breeze(X, Y) :- pit_at(PX, PY), adjacent(X, Y, PX, PY).
glitter(X, Y) :- gold_at(X, Y).

percept([Stench, Breeze, Glitter]) :-
    agent_at(X, Y),
    (stench(X, Y)  -> Stench  = stench  ; Stench  = none),
    (breeze(X, Y)  -> Breeze  = breeze  ; Breeze  = none),
    (glitter(X, Y) -> Glitter = glitter ; Glitter = none).

% --- Actions ---

turn(left)  :- agent_dir(D), left_of(D, New), set_dir(New).
turn(right) :- agent_dir(D), left_of(New, D), set_dir(New).

left_of(east, north).
left_of(north, west).
left_of(west, south).
left_of(south, east).

set_dir(New) :- retractall(agent_dir(_)), assert(agent_dir(New)).

ahead(X, Y, east,  X1, Y) :- X1 is X + 1.
ahead(X, Y, west,  X1, Y) :- X1 is X - 1.
ahead(X, Y, north, X, Y1) :- Y1 is Y + 1.
ahead(X, Y, south, X, Y1) :- Y1 is Y - 1.

move_forward :-
    agent_at(X, Y),
    agent_dir(D),
    ahead(X, Y, D, NX, NY),
    in_bounds(NX, NY),
    retractall(agent_at(_, _)),
    assert(agent_at(NX, NY)),
    add_score(-1),
    check_hazards(NX, NY).

grab :-
    agent_at(X, Y),
    gold_at(X, Y),
    retract(gold_at(X, Y)),
    assert(agent_gold),
    add_score(-1).

shoot :-
    agent_arrows(N), N > 0,
    retractall(agent_arrows(_)),
    N1 is N - 1,
    assert(agent_arrows(N1)),
    add_score(-10),
    (arrow_hits -> kill_wumpus ; true).

arrow_hits :-
    agent_at(X, Y),
    agent_dir(D),
    wumpus_at(WX, WY),
    wumpus_alive,
    in_line(X, Y, D, WX, WY).

in_line(X, Y, east,  WX, Y) :- WX > X.
in_line(X, Y, west,  WX, Y) :- WX < X.
in_line(X, Y, north, X, WY) :- WY > Y.
in_line(X, Y, south, X, WY) :- WY < Y.

kill_wumpus :- retractall(wumpus_alive).

climb :-
    agent_at(1, 1),
    (agent_gold -> add_score(1000), win ; true).

% --- Outcome ---

check_hazards(X, Y) :-
    ((wumpus_at(X, Y), wumpus_alive) -> lose
    ; pit_at(X, Y) -> lose
    ; true).

add_score(Delta) :-
    score(S),
    retractall(score(_)),
    S1 is S + Delta,
    assert(score(S1)).

win  :- score(S), format('You win! Score: ~w~n', [S]).
lose :- add_score(-1000), score(S), format('You died. Score: ~w~n', [S]).

reset :- init_world.
"#;
