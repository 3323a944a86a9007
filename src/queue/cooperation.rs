// src/queue/cooperation.rs
//! Descending-by-paper-count queue that records how it was built.

use crate::graph::Node;

/// An author and the paper count it was queued with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueItem<'g> {
    pub author: &'g Node,
    pub paper_count: usize,
}

/// Snapshot taken after one insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<'g> {
    pub new_item: QueueItem<'g>,
    pub queue_state: Vec<QueueItem<'g>>,
}

/// Authors ordered by paper count, highest first. Equal counts keep their
/// insertion order. There is no dequeue; the queue exists to be displayed.
#[derive(Debug, Clone, Default)]
pub struct CooperationQueue<'g> {
    items: Vec<QueueItem<'g>>,
    steps: Vec<Step<'g>>,
}

impl<'g> CooperationQueue<'g> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts before the first item with a strictly smaller count and
    /// records a step.
    pub fn enqueue(&mut self, author: &'g Node, paper_count: usize) -> QueueItem<'g> {
        let item = QueueItem { author, paper_count };
        match self.items.iter().position(|i| i.paper_count < paper_count) {
            Some(pos) => self.items.insert(pos, item),
            None => self.items.push(item),
        }
        self.steps.push(Step {
            new_item: item,
            queue_state: self.items.clone(),
        });
        item
    }

    #[must_use]
    pub fn items(&self) -> &[QueueItem<'g>] {
        &self.items
    }

    #[must_use]
    pub fn steps(&self) -> &[Step<'g>] {
        &self.steps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descending_with_stable_ties() {
        let x = Node::new("x", "X");
        let y = Node::new("y", "Y");
        let z = Node::new("z", "Z");

        let mut q = CooperationQueue::new();
        q.enqueue(&x, 3);
        q.enqueue(&y, 5);
        q.enqueue(&z, 3);

        let order: Vec<&str> = q.items().iter().map(|i| i.author.id.as_str()).collect();
        assert_eq!(order, vec!["y", "x", "z"]);
        assert_eq!(q.steps().len(), 3);
        for (i, step) in q.steps().iter().enumerate() {
            assert_eq!(step.queue_state.len(), i + 1);
        }
        assert_eq!(q.steps()[1].new_item.author.id, "y");
        assert_eq!(q.steps()[1].queue_state[0].paper_count, 5);
    }

    #[test]
    fn test_sorted_after_many_inserts() {
        let nodes: Vec<Node> = (0..12).map(|i| Node::new(format!("n{i}"), "")).collect();
        let counts = [4, 1, 7, 4, 0, 9, 7, 2, 4, 1, 8, 0];

        let mut q = CooperationQueue::new();
        for (node, &count) in nodes.iter().zip(counts.iter()) {
            q.enqueue(node, count);
        }

        let items = q.items();
        for pair in items.windows(2) {
            assert!(pair[0].paper_count >= pair[1].paper_count);
            if pair[0].paper_count == pair[1].paper_count {
                let a: usize = pair[0].author.id[1..].parse().unwrap();
                let b: usize = pair[1].author.id[1..].parse().unwrap();
                assert!(a < b, "ties must keep insertion order");
            }
        }
    }
}
