mod scc;

pub use scc::{
    largest_scc_subgraph, largest_strongly_connected_component, strongly_connected_components,
    TaskElement, TaskStep,
};
