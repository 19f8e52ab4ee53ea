use super::*;

const SAMPLE: &str = "Nfa (id:1234)\n\
    All States (with hashcodes): \n\
        ACCEPT0 (obj id: 55)\n\
        START (obj id: 12)\n\
        STATE0 (obj id: 99)\n\
    Start State:   START\n\
    Accept States: [ACCEPT0]\n\
    Transitions:\n\
        START:\n\
            \u{1}a\u{1} -> STATE0\n\
            \u{1}b\u{1} -> STATE0\n\
        STATE0:\n\
            \u{1}-\u{1} -> ACCEPT0\n\
            \u{1}c\u{1} -> STATE0\n\
            \u{1}d\u{1} -> START\n";

#[test]
fn sample_builds_prestart_states_and_edges() {
    let g = parse_nfa(SAMPLE).unwrap();
    assert_eq!(g.name_id.as_deref(), Some("1234"));
    assert_eq!(g.nodes[0].kind, NodeKind::Prestart);

    let start = g.find_node("START").unwrap();
    let accept = g.find_node("ACCEPT0").unwrap();
    let state = g.find_node("STATE0").unwrap();
    assert_eq!(g.nodes[start].kind, NodeKind::Start);
    assert_eq!(g.nodes[accept].kind, NodeKind::Final);
    assert_eq!(g.nodes[state].kind, NodeKind::Regular);
    assert_eq!(g.nodes[state].object_id.as_deref(), Some("99"));

    assert_eq!(g.edges[0].source, 0);
    assert_eq!(g.edges[0].dest, start);
    assert_eq!(g.edges[0].transition, None);
}

#[test]
fn repeated_transitions_collapse_into_one_edge() {
    let g = parse_nfa(SAMPLE).unwrap();
    let start = g.find_node("START").unwrap();
    let state = g.find_node("STATE0").unwrap();
    let i = g.find_edge(start, state).unwrap();
    assert_eq!(g.edges[i].transition.as_deref(), Some(MERGED_LABEL));
    assert_eq!(g.edges[i].other_transitions, 1);
}

#[test]
fn reverse_edge_marks_the_earlier_one() {
    let g = parse_nfa(SAMPLE).unwrap();
    let start = g.find_node("START").unwrap();
    let state = g.find_node("STATE0").unwrap();
    let forward = g.find_edge(start, state).unwrap();
    let back = g.find_edge(state, start).unwrap();
    assert!(g.edges[forward].half_bidirectional);
    assert!(!g.edges[back].half_bidirectional);
}

#[test]
fn self_loops_get_a_control_node() {
    let g = parse_nfa(SAMPLE).unwrap();
    let state = g.find_node("STATE0").unwrap();
    let i = g.find_edge(state, state).unwrap();
    let edge = &g.edges[i];
    assert!(edge.loopback);
    let control = edge.control.unwrap();
    assert_eq!(g.nodes[control].kind, NodeKind::Control);
    assert_eq!(g.nodes.len(), 5);
}

#[test]
fn epsilon_label_is_kept_verbatim() {
    let g = parse_nfa(SAMPLE).unwrap();
    let state = g.find_node("STATE0").unwrap();
    let accept = g.find_node("ACCEPT0").unwrap();
    let i = g.find_edge(state, accept).unwrap();
    assert_eq!(g.edges[i].transition.as_deref(), Some("-"));
}

#[test]
fn unknown_destination_aborts_with_its_line() {
    let src = SAMPLE.replace("-> ACCEPT0", "-> NOWHERE");
    let err = parse_nfa(&src).unwrap_err();
    match err {
        DracoError::Parse { line, message } => {
            assert_eq!(line, 13);
            assert!(message.contains("NOWHERE"));
        }
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn duplicate_state_names_are_rejected() {
    let src = SAMPLE.replace("STATE0 (obj id: 99)", "START (obj id: 99)");
    let err = parse_nfa(&src).unwrap_err();
    assert!(err.to_string().contains("duplicate state name 'START'"));
}

#[test]
fn truncated_input_is_an_error() {
    let cut = &SAMPLE[..SAMPLE.find("Accept States").unwrap()];
    assert!(parse_nfa(cut).is_err());
    assert!(parse_nfa("").is_err());
}

#[test]
fn empty_accept_list_and_no_transitions() {
    let src = "Nfa (id:1)\nAll States:\nSTART (obj id: 2)\nStart State: START\nAccept States: []\nTransitions:\n";
    let g = parse_nfa(src).unwrap();
    assert_eq!(g.nodes.len(), 2);
    assert_eq!(g.edges.len(), 1);
}
