//! 分类器状态图
//!
//! 描述展示用的有限状态分类器：状态集合与带标签的转移。

use super::state_map::DfaState;
use once_cell::sync::Lazy;
use std::fmt::Write;

/// 带标签的转移
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: DfaState,
    pub to: DfaState,
    pub label: &'static str,
}

impl Transition {
    pub const fn new(from: DfaState, to: DfaState, label: &'static str) -> Self {
        Self { from, to, label }
    }

    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }
}

/// 状态图
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    states: Vec<DfaState>,
    transitions: Vec<Transition>,
}

static STANDARD: Lazy<Automaton> = Lazy::new(|| {
    use DfaState::*;
    Automaton {
        states: DfaState::ALL.to_vec(),
        transitions: vec![
            Transition::new(Start, Identifier, "letter"),
            Transition::new(Identifier, Identifier, "letter/digit"),
            Transition::new(Start, Number, "digit"),
            Transition::new(Number, Number, "digit"),
            Transition::new(Start, String, "\""),
            Transition::new(String, String, "any"),
            Transition::new(String, String, "\""),
            Transition::new(Start, Operator, "operator"),
            Transition::new(Start, Delimiter, "delimiter"),
            Transition::new(Start, Comment, "#"),
            Transition::new(Comment, Comment, "any"),
            Transition::new(Start, Error, "invalid"),
            Transition::new(Error, Error, "any"),
        ],
    }
});

impl Automaton {
    /// 标准分类器图（全局共享、只读）
    pub fn standard() -> &'static Automaton {
        &STANDARD
    }

    pub fn states(&self) -> &[DfaState] {
        &self.states
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn transitions_from(&self, state: DfaState) -> impl Iterator<Item = &Transition> + '_ {
        self.transitions.iter().filter(move |t| t.from == state)
    }

    /// 从 START 进入 `target` 的转移，后跟 `target` 上的自环
    ///
    /// `target` 为 START 或不可达时返回空。
    pub fn path_for(&self, target: DfaState) -> Vec<&Transition> {
        let Some(entry) = self
            .transitions_from(DfaState::Start)
            .find(|t| t.to == target && !t.is_loop())
        else {
            return Vec::new();
        };

        let mut path = vec![entry];
        path.extend(self.transitions_from(target).filter(|t| t.is_loop()));
        path
    }

    /// Graphviz DOT 文本（左到右布局，接受状态画双圈）
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("digraph lexer {\n    rankdir=LR;\n");
        for state in &self.states {
            let shape = if state.is_accepting() {
                "doublecircle"
            } else {
                "circle"
            };
            let _ = writeln!(dot, "    {} [shape={}];", state.name(), shape);
        }
        for t in &self.transitions {
            let label = t.label.replace('\\', "\\\\").replace('"', "\\\"");
            let _ = writeln!(dot, "    {} -> {} [label=\"{}\"];", t.from.name(), t.to.name(), label);
        }
        dot.push_str("}\n");
        dot
    }
}
