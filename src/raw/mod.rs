mod arena;
mod node;
mod node_id;
mod raw_bst_map;

pub(crate) use raw_bst_map::RawBstMap;
