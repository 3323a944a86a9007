// tests/unit_paths.rs
use collabnet_core::graph::{GraphStore, Node};
use collabnet_core::paths::{self, longest_simple_path, progressive_distances, shortest_path};

/// Small deterministic generator so the random graphs are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }
}

fn random_graph(seed: u64) -> GraphStore {
    let mut rng = Lcg(seed);
    let n = 2 + rng.below(7) as usize;
    let mut b = GraphStore::builder();
    for i in 0..n {
        b.add_node(Node::new(format!("n{i}"), format!("N{i}")));
    }
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.below(100) < 40 {
                let w = 1 + rng.below(9);
                b.add_edge(&format!("n{i}"), &format!("n{j}"), w).unwrap();
            }
        }
    }
    b.build()
}

fn simple_paths(graph: &GraphStore, from: &str, to: &str) -> Vec<Vec<String>> {
    fn walk(g: &GraphStore, to: &str, stack: &mut Vec<String>, out: &mut Vec<Vec<String>>) {
        let current = stack.last().unwrap().clone();
        if current == to {
            out.push(stack.clone());
            return;
        }
        for next in g.neighbors(&current) {
            if stack.iter().any(|s| s == next) {
                continue;
            }
            stack.push(next.to_string());
            walk(g, to, stack, out);
            stack.pop();
        }
    }
    let mut out = Vec::new();
    walk(graph, to, &mut vec![from.to_string()], &mut out);
    out
}

fn path_weight(graph: &GraphStore, path: &[String]) -> u64 {
    path.windows(2)
        .map(|w| graph.edge_between(&w[0], &w[1]).unwrap().weight)
        .sum()
}

fn longest_from(graph: &GraphStore, from: &str) -> usize {
    fn walk(g: &GraphStore, stack: &mut Vec<String>) -> usize {
        let current = stack.last().unwrap().clone();
        let mut best = stack.len();
        for next in g.neighbors(&current) {
            if stack.iter().any(|s| s == next) {
                continue;
            }
            stack.push(next.to_string());
            best = best.max(walk(g, stack));
            stack.pop();
        }
        best
    }
    walk(graph, &mut vec![from.to_string()])
}

#[test]
fn test_dijkstra_matches_exhaustive_search() {
    for seed in 1..60 {
        let g = random_graph(seed);
        let ids: Vec<String> = g.nodes().iter().map(|n| n.id.clone()).collect();
        for s in &ids {
            for t in &ids {
                let best = simple_paths(&g, s, t)
                    .iter()
                    .map(|p| path_weight(&g, p))
                    .min();
                let found = shortest_path(&g, s, t).unwrap();
                assert_eq!(found.as_ref().map(|r| r.total_weight), best, "seed {seed}: {s} -> {t}");
                if let Some(r) = found {
                    assert_eq!(r.path.first(), Some(s));
                    assert_eq!(r.path.last(), Some(t));
                    assert_eq!(path_weight(&g, &r.path), r.total_weight);
                }
            }
        }
    }
}

#[test]
fn test_table_matches_dijkstra() {
    for seed in 100..140 {
        let g = random_graph(seed);
        let source = g.nodes()[0].id.clone();
        let mut frames = 0;
        let table = progressive_distances(&g, &source, |_| frames += 1).unwrap();

        assert_eq!(frames, paths::component_size(&g, &source));
        assert_eq!(table.rows.len(), frames);
        for node in g.nodes() {
            let expected = shortest_path(&g, &source, &node.id)
                .unwrap()
                .map(|r| r.total_weight);
            assert_eq!(table.distance_to(&node.id), expected, "seed {seed}: {}", node.id);
        }
    }
}

#[test]
fn test_table_frames_settle_in_distance_order() {
    let g = random_graph(7);
    let source = g.nodes()[0].id.clone();
    let mut settled = Vec::new();
    progressive_distances(&g, &source, |frame| {
        let id = frame.settled.clone().unwrap();
        settled.push(frame.distance_to(&id).unwrap());
    })
    .unwrap();
    assert_eq!(settled.first(), Some(&0));
    assert!(settled.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_longest_matches_exhaustive_search() {
    for seed in 200..240 {
        let g = random_graph(seed);
        for node in g.nodes() {
            let path = longest_simple_path(&g, &node.id).unwrap();
            assert_eq!(path.len(), longest_from(&g, &node.id), "seed {seed}: {}", node.id);
            assert_eq!(path[0], node.id);
            for w in path.windows(2) {
                assert!(g.edge_between(&w[0], &w[1]).is_some());
            }
        }
    }
}

#[test]
fn test_unknown_ids() {
    let g = random_graph(3);
    assert_eq!(shortest_path(&g, "ghost", "n0").unwrap(), None);
    assert!(longest_simple_path(&g, "ghost").is_none());
    assert!(progressive_distances(&g, "ghost", |_| {}).is_err());
    assert_eq!(paths::component_size(&g, "ghost"), 0);
}
