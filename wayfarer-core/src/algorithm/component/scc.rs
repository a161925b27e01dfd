use crate::model::network::{Graph, NodeId};
use std::collections::{HashMap, HashSet, VecDeque};

/// the stages a scheduled node passes through during the iterative
/// strongly connected component search. `Done` is sticky: advancing a
/// finished element is a no-op.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TaskStep {
    Index,
    GetSuccessors,
    SetLowlink,
    Done,
}

/// one frame of the explicit work deque, standing in for a recursion
/// frame of the classic Tarjan formulation. carries the node being
/// explored and the node it was descended into from, if any.
#[derive(Debug)]
pub struct TaskElement {
    pub node: NodeId,
    pub predecessor: Option<NodeId>,
    step: TaskStep,
}

impl TaskElement {
    pub fn new(node: NodeId, predecessor: Option<NodeId>) -> TaskElement {
        TaskElement {
            node,
            predecessor,
            step: TaskStep::Index,
        }
    }

    pub fn step(&self) -> TaskStep {
        self.step
    }

    /// moves the element to its next stage, in order
    pub fn advance(&mut self) {
        self.step = match self.step {
            TaskStep::Index => TaskStep::GetSuccessors,
            TaskStep::GetSuccessors => TaskStep::SetLowlink,
            TaskStep::SetLowlink => TaskStep::Done,
            TaskStep::Done => TaskStep::Done,
        };
    }
}

/// per-run bookkeeping for the component search
#[derive(Default)]
struct TarjanState {
    counter: usize,
    index: HashMap<NodeId, usize>,
    lowlink: HashMap<NodeId, usize>,
    on_stack: HashSet<NodeId>,
    stack: Vec<NodeId>,
}

/// Enumerates the strongly connected components of a directed graph.
///
/// This is the iterative, explicit-deque variant of Tarjan's algorithm:
/// road graphs reach depths that overflow the call stack under the
/// recursive formulation. Each scheduled node steps through
/// [`TaskStep::Index`], [`TaskStep::GetSuccessors`] and
/// [`TaskStep::SetLowlink`]; descents push fresh elements on top of the
/// parent so they complete first. Successor iteration follows the
/// graph's stable outgoing edge order and components are emitted in the
/// order their roots are finalized, so output is reproducible for a
/// given insertion sequence.
pub fn strongly_connected_components(graph: &Graph) -> Vec<Vec<NodeId>> {
    let mut state = TarjanState::default();
    let mut components: Vec<Vec<NodeId>> = Vec::new();
    let mut tasks: VecDeque<TaskElement> = VecDeque::new();

    for root in graph.node_ids() {
        if state.index.contains_key(&root) {
            continue;
        }
        tasks.push_back(TaskElement::new(root, None));
        while let Some(mut task) = tasks.pop_back() {
            match task.step() {
                TaskStep::Index => {
                    if let Some(existing) = state.index.get(&task.node) {
                        // reached through a second parent before this element ran.
                        // when still on the stack it closes a cycle back into the
                        // current search path, which the predecessor must absorb.
                        if state.on_stack.contains(&task.node) {
                            if let Some(predecessor) = task.predecessor {
                                let relinked = (*state.lowlink.get(&predecessor).unwrap_or(existing))
                                    .min(*existing);
                                state.lowlink.insert(predecessor, relinked);
                            }
                        }
                        continue;
                    }
                    state.index.insert(task.node, state.counter);
                    state.lowlink.insert(task.node, state.counter);
                    state.counter += 1;
                    state.stack.push(task.node);
                    state.on_stack.insert(task.node);
                    task.advance();
                    tasks.push_back(task);
                }
                TaskStep::GetSuccessors => {
                    let node = task.node;
                    task.advance();
                    tasks.push_back(task);
                    // children go on top of the parent's SetLowlink element in
                    // reverse order, so the first successor is explored first
                    let successors: Vec<NodeId> = graph
                        .out_edges_iter(&node)
                        .map(|edge| edge.dst_node_id)
                        .collect();
                    for successor in successors.into_iter().rev() {
                        match state.index.get(&successor) {
                            None => tasks.push_back(TaskElement::new(successor, Some(node))),
                            Some(successor_index) => {
                                if state.on_stack.contains(&successor) {
                                    let relinked = (*state
                                        .lowlink
                                        .get(&node)
                                        .unwrap_or(successor_index))
                                    .min(*successor_index);
                                    state.lowlink.insert(node, relinked);
                                }
                            }
                        }
                    }
                }
                TaskStep::SetLowlink => {
                    let node_lowlink = match state.lowlink.get(&task.node) {
                        Some(l) => *l,
                        None => continue,
                    };
                    if let Some(predecessor) = task.predecessor {
                        let relinked = state
                            .lowlink
                            .get(&predecessor)
                            .map_or(node_lowlink, |l| (*l).min(node_lowlink));
                        state.lowlink.insert(predecessor, relinked);
                    }
                    if Some(&node_lowlink) == state.index.get(&task.node) {
                        let mut component: Vec<NodeId> = Vec::new();
                        while let Some(member) = state.stack.pop() {
                            state.on_stack.remove(&member);
                            component.push(member);
                            if member == task.node {
                                break;
                            }
                        }
                        components.push(component);
                    }
                    task.advance();
                }
                TaskStep::Done => {}
            }
        }
    }

    components
}

/// Finds the largest strongly connected component of a directed graph,
/// which for an ingested road network is the usable core once one-way
/// fragments and disconnected service roads are discarded.
pub fn largest_strongly_connected_component(graph: &Graph) -> Vec<NodeId> {
    let mut largest: Vec<NodeId> = Vec::new();
    for component in strongly_connected_components(graph) {
        if component.len() > largest.len() {
            largest = component;
        }
    }
    largest
}

/// Restricts a graph to its largest strongly connected component,
/// dropping every other node along with its incident edges.
pub fn largest_scc_subgraph(graph: &Graph) -> Graph {
    let keep: HashSet<NodeId> = largest_strongly_connected_component(graph)
        .into_iter()
        .collect();
    let mut pruned = graph.clone();
    let drop: Vec<NodeId> = pruned.node_ids().filter(|n| !keep.contains(n)).collect();
    for node_id in drop {
        pruned.remove_node(&node_id);
    }
    pruned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::network::{Edge, Node};

    fn graph_from_edges(n_nodes: usize, edges: &[(usize, usize)]) -> Graph {
        let mut graph = Graph::default();
        for id in 0..n_nodes {
            graph.add_node(Node::new(id, 0.0, 0.0));
        }
        for (src, dst) in edges {
            graph.add_edge(Edge::new(*src, *dst, 1.0, 0)).unwrap();
        }
        graph
    }

    #[test]
    fn test_task_element_lifecycle() {
        let mut task = TaskElement::new(NodeId(1), None);
        assert_eq!(task.step(), TaskStep::Index);
        task.advance();
        assert_eq!(task.step(), TaskStep::GetSuccessors);
        task.advance();
        assert_eq!(task.step(), TaskStep::SetLowlink);
        task.advance();
        assert_eq!(task.step(), TaskStep::Done);
        task.advance();
        assert_eq!(task.step(), TaskStep::Done);
    }

    #[test]
    fn test_two_cycle_and_chain() {
        // 1 <-> 2 form a component, 3 -> 4 are singletons
        let graph = graph_from_edges(5, &[(1, 2), (2, 1), (3, 4)]);
        let mut components = strongly_connected_components(&graph);
        for component in components.iter_mut() {
            component.sort();
        }
        components.sort();
        assert!(components.contains(&vec![NodeId(1), NodeId(2)]));
        assert!(components.contains(&vec![NodeId(3)]));
        assert!(components.contains(&vec![NodeId(4)]));
        // node 0 exists with no edges and forms its own component
        assert_eq!(components.len(), 4);
    }

    #[test]
    fn test_every_node_appears_exactly_once() {
        let graph = graph_from_edges(
            7,
            &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 5), (5, 3), (6, 0)],
        );
        let components = strongly_connected_components(&graph);
        let mut seen: Vec<NodeId> = components.iter().flatten().copied().collect();
        seen.sort();
        let expected: Vec<NodeId> = (0..7).map(NodeId).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_condensation_is_acyclic() {
        // two cycles joined by a one-way bridge: the bridge must not merge them
        let graph = graph_from_edges(6, &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 5), (5, 3)]);
        let mut components = strongly_connected_components(&graph);
        for component in components.iter_mut() {
            component.sort();
        }
        components.sort();
        assert_eq!(
            components,
            vec![
                vec![NodeId(0), NodeId(1), NodeId(2)],
                vec![NodeId(3), NodeId(4), NodeId(5)],
            ]
        );
    }

    #[test]
    fn test_branching_node_keeps_all_successors() {
        // 0 reaches 1 directly and through 2; 1 closes the cycle back to 0.
        // the second successor must still be explored after the first descent.
        let graph = graph_from_edges(3, &[(0, 1), (0, 2), (2, 1), (1, 0)]);
        let components = strongly_connected_components(&graph);
        let largest = largest_strongly_connected_component(&graph);
        assert_eq!(components.len(), 1);
        let mut sorted = largest.clone();
        sorted.sort();
        assert_eq!(sorted, vec![NodeId(0), NodeId(1), NodeId(2)]);
    }

    #[test]
    fn test_node_scheduled_twice_while_on_stack() {
        // 2 is queued from both 0 and 1; by the time the second element
        // runs, 2 is indexed and still on the search stack
        let graph = graph_from_edges(3, &[(0, 1), (0, 2), (1, 2), (2, 0)]);
        let components = strongly_connected_components(&graph);
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].len(), 3);
    }

    #[test]
    fn test_largest_component_mock_graph() {
        // a four-node strongly connected block plus an isolated self-loop
        let graph = graph_from_edges(
            5,
            &[
                (0, 1),
                (1, 0),
                (1, 2),
                (2, 1),
                (2, 3),
                (3, 2),
                (3, 0),
                (0, 3),
                (0, 2),
                (1, 3),
                (2, 0),
                (3, 1),
                (4, 4),
            ],
        );
        let component = largest_strongly_connected_component(&graph);
        assert_eq!(component.len(), 4);
        assert!(component.contains(&NodeId(0)));
        assert!(component.contains(&NodeId(1)));
        assert!(component.contains(&NodeId(2)));
        assert!(component.contains(&NodeId(3)));
    }

    #[test]
    fn test_largest_scc_subgraph_prunes_the_rest() {
        let graph = graph_from_edges(5, &[(0, 1), (1, 0), (1, 2), (3, 4)]);
        let pruned = largest_scc_subgraph(&graph);
        assert_eq!(pruned.n_nodes(), 2);
        assert!(pruned.contains_node_id(&NodeId(0)));
        assert!(pruned.contains_node_id(&NodeId(1)));
        // edges leaving the component disappear with their endpoints
        assert_eq!(pruned.n_edges(), 2);
        for edge in pruned.edges() {
            assert!(pruned.contains_node_id(&edge.src_node_id));
            assert!(pruned.contains_node_id(&edge.dst_node_id));
        }
    }
}
