use crate::{
    animation::progress::{Direction, ProgressState},
    foundation::error::{LineCircleError, LineCircleResult},
    render::{draw::NodeLayout, draw::draw_node, surface::Surface},
};

/// One slot of the chain. Neighbour links are plain indices into the owning [`NodeChain`].
#[derive(Clone, Debug)]
pub struct Node {
    index: usize,
    prev: Option<usize>,
    next: Option<usize>,
    state: ProgressState,
}

impl Node {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn prev(&self) -> Option<usize> {
        self.prev
    }

    pub fn next(&self) -> Option<usize> {
        self.next
    }

    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    fn neighbour(&self, dir: Direction) -> Option<usize> {
        match dir {
            Direction::Forward => self.next,
            Direction::Backward => self.prev,
        }
    }
}

/// Arena of `N` nodes built once in ascending order.
#[derive(Clone, Debug)]
pub struct NodeChain {
    nodes: Vec<Node>,
}

impl NodeChain {
    pub fn new(len: usize, step: f64) -> LineCircleResult<Self> {
        if len == 0 {
            return Err(LineCircleError::validation("node chain needs at least one node"));
        }
        if !(step.is_finite() && step > 0.0) {
            return Err(LineCircleError::validation(format!(
                "progress step must be a positive finite number, got {step}"
            )));
        }

        let nodes = (0..len)
            .map(|index| Node {
                index,
                prev: index.checked_sub(1),
                next: (index + 1 < len).then_some(index + 1),
                state: ProgressState::new(step),
            })
            .collect();
        Ok(Self { nodes })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// # Panics
    /// If `index` is out of range; cursors handed out by the chain are always in range.
    pub fn state(&self, index: usize) -> &ProgressState {
        &self.nodes[index].state
    }

    pub(crate) fn state_mut(&mut self, index: usize) -> &mut ProgressState {
        &mut self.nodes[index].state
    }

    /// Neighbour of `from` in direction `dir`. At either end of the chain `on_exhausted` fires
    /// and `from` is returned unchanged.
    pub fn get_next(&self, from: usize, dir: Direction, on_exhausted: impl FnOnce()) -> usize {
        match self.nodes[from].neighbour(dir) {
            Some(to) => to,
            None => {
                on_exhausted();
                from
            }
        }
    }

    /// Draw node `from`, then its predecessor, down to node 0.
    pub fn draw(&self, surface: &mut dyn Surface, from: usize, layout: &NodeLayout) {
        let mut at = Some(from);
        while let Some(i) = at {
            let node = &self.nodes[i];
            draw_node(surface, layout, node.index, node.state.scale());
            at = node.prev;
        }
    }

    /// Number of nodes currently mid-sweep.
    pub fn active_count(&self) -> usize {
        self.nodes.iter().filter(|n| !n.state.is_idle()).count()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/chain/node.rs"]
mod tests;
