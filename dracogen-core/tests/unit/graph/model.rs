use super::*;

#[test]
fn node_ids_are_insertion_indices() {
    let mut g = Graph::default();
    let a = g.add_node(NodeKind::Prestart, None, None);
    let b = g.add_node(NodeKind::Regular, Some("A".into()), Some("7".into()));
    assert_eq!((a, b), (0, 1));
    assert_eq!(g.nodes[b].id, b);
    assert_eq!(g.find_node("A"), Some(1));
    assert_eq!(g.find_node("B"), None);
}

#[test]
fn virtual_nodes_are_not_visible() {
    let mut g = Graph::default();
    g.add_node(NodeKind::Prestart, None, None);
    g.add_node(NodeKind::Final, Some("F".into()), None);
    g.add_node(NodeKind::Control, None, None);
    let visible: Vec<NodeId> = g.visible_nodes().map(|n| n.id).collect();
    assert_eq!(visible, vec![1]);
}

#[test]
fn find_edge_is_directional() {
    let mut g = Graph::default();
    g.add_edge(Edge {
        source: 1,
        dest: 2,
        ..Edge::default()
    });
    assert_eq!(g.find_edge(1, 2), Some(0));
    assert_eq!(g.find_edge(2, 1), None);
}
