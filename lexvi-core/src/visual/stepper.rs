//! 逐个 token 的单步驱动

use super::state_map::{DfaState, StateMap};
use crate::lexer::Token;

/// 单步结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step<'t, 'src> {
    /// 0-based 序号
    pub index: usize,
    pub token: &'t Token<'src>,
    pub state: DfaState,
}

/// 在 token 序列上单步前进，给出每个 token 驱动到的状态
#[derive(Debug, Clone)]
pub struct Stepper<'t, 'src> {
    tokens: &'t [Token<'src>],
    states: &'t StateMap,
    index: usize,
}

impl<'t, 'src> Stepper<'t, 'src> {
    pub fn new(tokens: &'t [Token<'src>], states: &'t StateMap) -> Self {
        Self {
            tokens,
            states,
            index: 0,
        }
    }

    /// 处理下一个 token；序列结束后返回 None
    pub fn step(&mut self) -> Option<Step<'t, 'src>> {
        let token = self.tokens.get(self.index)?;
        let step = Step {
            index: self.index,
            token,
            state: self.states.state_for(token.kind),
        };
        self.index += 1;
        Some(step)
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.index
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.tokens.len()
    }

    /// 回到第一个 token
    pub fn reset(&mut self) {
        self.index = 0;
    }
}

impl<'t, 'src> Iterator for Stepper<'t, 'src> {
    type Item = Step<'t, 'src>;

    fn next(&mut self) -> Option<Self::Item> {
        self.step()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl ExactSizeIterator for Stepper<'_, '_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Scanner;

    #[test]
    fn test_step_through() {
        let output = Scanner::new().tokenize("x = 1.5");
        let states = StateMap::standard();
        let mut stepper = Stepper::new(output.tokens(), &states);

        assert_eq!(stepper.remaining(), 3);

        let first = stepper.step().unwrap();
        assert_eq!(first.index, 0);
        assert_eq!(first.token.text, "x");
        assert_eq!(first.state, DfaState::Identifier);

        assert_eq!(stepper.step().unwrap().state, DfaState::Operator);
        assert_eq!(stepper.step().unwrap().state, DfaState::Number);

        assert!(stepper.is_finished());
        assert!(stepper.step().is_none());
    }

    #[test]
    fn test_reset() {
        let output = Scanner::new().tokenize("a b");
        let states = StateMap::standard();
        let mut stepper = Stepper::new(output.tokens(), &states);

        stepper.by_ref().for_each(drop);
        assert_eq!(stepper.remaining(), 0);

        stepper.reset();
        assert_eq!(stepper.len(), 2);
        assert_eq!(stepper.step().unwrap().token.text, "a");
    }

    #[test]
    fn test_empty_sequence() {
        let states = StateMap::standard();
        let mut stepper = Stepper::new(&[], &states);
        assert!(stepper.is_finished());
        assert!(stepper.step().is_none());
    }
}
