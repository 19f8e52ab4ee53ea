//! Reader for the textual NFA dump.
//!
//! ```text
//! Nfa (id:1234)
//!     All States (with hashcodes):
//!         ACCEPT0 (obj id: 55)
//!         START (obj id: 12)
//!     Start State:   START
//!     Accept States: [ACCEPT0]
//!     Transitions:
//!         START:
//!             \x01a\x01 -> ACCEPT0
//! ```
//!
//! Parsing is all-or-nothing: the first problem aborts with [`DracoError::Parse`] and no
//! partial graph is returned.

use crate::foundation::error::{DracoError, DracoResult};
use crate::graph::lexer::{Token, TokenKind, lex};
use crate::graph::model::{Edge, Graph, NodeId, NodeKind};

/// Label given to an edge that carries several transitions.
pub const MERGED_LABEL: &str = ".";

/// Build a graph from an NFA dump.
///
/// Node 0 is a virtual prestart node pointing at the start state. Self-loops get a virtual
/// control node. Node positions are left at the origin.
#[tracing::instrument(skip(input), fields(bytes = input.len()))]
pub fn parse_nfa(input: &str) -> DracoResult<Graph> {
    let tokens = lex(input)?;
    let mut p = Parser { tokens, pos: 0 };
    let mut graph = Graph::default();
    let prestart = graph.add_node(NodeKind::Prestart, None, None);

    p.skip_to_ident("Nfa")?;
    p.expect(TokenKind::LParen)?;
    p.expect_ident("id")?;
    p.expect(TokenKind::Colon)?;
    graph.name_id = Some(p.ident()?);

    p.skip_to_ident("All States")?;
    p.skip_to(TokenKind::Colon)?;
    loop {
        let name = p.ident()?;
        p.expect(TokenKind::LParen)?;
        p.expect_ident("obj id")?;
        p.expect(TokenKind::Colon)?;
        let object_id = p.ident()?;
        p.expect(TokenKind::RParen)?;
        if graph.find_node(&name).is_some() {
            return Err(p.error(format!("duplicate state name '{name}'")));
        }
        graph.add_node(NodeKind::Regular, Some(name), Some(object_id));
        if p.peek_is_ident("Start State") {
            break;
        }
    }

    p.expect_ident("Start State")?;
    p.expect(TokenKind::Colon)?;
    let start = p.node_ref(&graph)?;
    graph.nodes[start].kind = NodeKind::Start;
    graph.add_edge(Edge {
        source: prestart,
        dest: start,
        ..Edge::default()
    });

    p.expect_ident("Accept States")?;
    p.expect(TokenKind::Colon)?;
    p.expect(TokenKind::LBracket)?;
    if !p.consume(&TokenKind::RBracket) {
        loop {
            let accept = p.node_ref(&graph)?;
            graph.nodes[accept].kind = NodeKind::Final;
            match p.bump().kind {
                TokenKind::Comma => {}
                TokenKind::RBracket => break,
                ref other => {
                    let msg = format!("expected ',' or ']' in accept states, found {other:?}");
                    return Err(p.error(msg));
                }
            }
        }
    }

    p.expect_ident("Transitions")?;
    p.expect(TokenKind::Colon)?;
    while p.peek().kind != TokenKind::Eof {
        let source = p.node_ref(&graph)?;
        p.expect(TokenKind::Colon)?;
        loop {
            let label = p.label()?;
            p.expect(TokenKind::Arrow)?;
            let dest = p.node_ref(&graph)?;
            add_transition(&mut graph, source, dest, label);
            if p.peek().kind == TokenKind::Eof || p.peek_second().kind == TokenKind::Colon {
                break;
            }
        }
    }

    tracing::debug!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "parsed nfa"
    );
    Ok(graph)
}

fn add_transition(graph: &mut Graph, source: NodeId, dest: NodeId, label: String) {
    if let Some(i) = graph.find_edge(source, dest) {
        let edge = &mut graph.edges[i];
        edge.other_transitions += 1;
        edge.transition = Some(MERGED_LABEL.to_owned());
        return;
    }
    if let Some(i) = graph.find_edge(dest, source) {
        graph.edges[i].half_bidirectional = true;
    }
    let mut edge = Edge {
        source,
        dest,
        transition: Some(label),
        ..Edge::default()
    };
    if source == dest {
        edge.control = Some(graph.add_node(NodeKind::Control, None, None));
        edge.loopback = true;
    }
    graph.add_edge(edge);
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn peek_second(&self) -> &Token {
        let i = (self.pos + 1).min(self.tokens.len() - 1);
        &self.tokens[i]
    }

    // the trailing Eof is never consumed
    fn bump(&mut self) -> Token {
        let t = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        t
    }

    fn error(&self, msg: impl Into<String>) -> DracoError {
        DracoError::parse(self.peek().line, msg)
    }

    fn expect(&mut self, kind: TokenKind) -> DracoResult<()> {
        if self.peek().kind == kind {
            self.bump();
            Ok(())
        } else {
            Err(self.error(format!(
                "expected {kind:?}, found {:?}",
                self.peek().kind
            )))
        }
    }

    fn consume(&mut self, kind: &TokenKind) -> bool {
        if &self.peek().kind == kind {
            self.bump();
            true
        } else {
            false
        }
    }

    fn peek_is_ident(&self, word: &str) -> bool {
        matches!(&self.peek().kind, TokenKind::Ident(s) if s == word)
    }

    fn ident(&mut self) -> DracoResult<String> {
        match &self.peek().kind {
            TokenKind::Ident(s) => {
                let s = s.clone();
                self.bump();
                Ok(s)
            }
            other => Err(self.error(format!("expected identifier, found {other:?}"))),
        }
    }

    fn expect_ident(&mut self, word: &str) -> DracoResult<()> {
        if self.peek_is_ident(word) {
            self.bump();
            Ok(())
        } else {
            Err(self.error(format!("expected '{word}', found {:?}", self.peek().kind)))
        }
    }

    fn label(&mut self) -> DracoResult<String> {
        match &self.peek().kind {
            TokenKind::Label(s) => {
                let s = s.clone();
                self.bump();
                Ok(s)
            }
            other => Err(self.error(format!("expected transition label, found {other:?}"))),
        }
    }

    fn node_ref(&mut self, graph: &Graph) -> DracoResult<NodeId> {
        let line = self.peek().line;
        let name = self.ident()?;
        graph
            .find_node(&name)
            .ok_or_else(|| DracoError::parse(line, format!("unknown state '{name}'")))
    }

    fn skip_to_ident(&mut self, word: &str) -> DracoResult<()> {
        while !self.peek_is_ident(word) {
            if self.peek().kind == TokenKind::Eof {
                return Err(self.error(format!("unexpected end of input looking for '{word}'")));
            }
            self.bump();
        }
        self.bump();
        Ok(())
    }

    fn skip_to(&mut self, kind: TokenKind) -> DracoResult<()> {
        while self.peek().kind != kind {
            if self.peek().kind == TokenKind::Eof {
                return Err(self.error(format!("unexpected end of input looking for {kind:?}")));
            }
            self.bump();
        }
        self.bump();
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/parse.rs"]
mod tests;
