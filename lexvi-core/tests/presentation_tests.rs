//! 展示层测试：状态映射、单步驱动与导出格式对同一次扫描结果的一致性

mod common;

use lexvi_core::{
    render_report, render_table, to_csv, to_json, Automaton, DfaState, ExportConfig, Scanner,
    StateMap, Stepper,
};

#[test]
fn test_stepper_states_for_function_definition() {
    let output = Scanner::new().tokenize("def hello(): return 42");
    let states = StateMap::standard();

    let visited: Vec<_> = Stepper::new(output.tokens(), &states)
        .map(|step| (step.index, step.state))
        .collect();

    assert_eq!(
        visited,
        [
            (0, DfaState::Identifier),
            (1, DfaState::Identifier),
            (2, DfaState::Delimiter),
            (3, DfaState::Delimiter),
            (4, DfaState::Delimiter),
            (5, DfaState::Identifier),
            (6, DfaState::Number),
        ]
    );
}

#[test]
fn test_every_token_state_is_reachable_and_accepting() {
    let automaton = Automaton::standard();
    let states = StateMap::standard();

    for source in common::SAMPLES {
        let output = Scanner::new().tokenize(source);
        for step in Stepper::new(output.tokens(), &states) {
            assert!(step.state.is_accepting(), "{} in {source:?}", step.token);
            assert!(!automaton.path_for(step.state).is_empty());
        }
    }
}

#[test]
fn test_stepper_can_replay() {
    let output = Scanner::new().tokenize("x = 'y'");
    let states = StateMap::standard();
    let mut stepper = Stepper::new(output.tokens(), &states);

    let first_pass: Vec<_> = stepper.by_ref().map(|s| s.token.text).collect();
    assert!(stepper.is_finished());

    stepper.reset();
    let second_pass: Vec<_> = stepper.map(|s| s.token.text).collect();
    assert_eq!(first_pass, second_pass);
}

#[test]
fn test_exports_agree_on_token_count() {
    let output = Scanner::new().tokenize("for i in range(10):\n    total += i * 2.5\n");
    let count = output.tokens().len();

    let csv = to_csv(output.tokens(), &ExportConfig::default());
    assert_eq!(csv.lines().count(), count + 1);

    let json: serde_json::Value = serde_json::from_str(&to_json(output.tokens()).unwrap()).unwrap();
    assert_eq!(json.as_array().unwrap().len(), count);

    assert_eq!(render_table(output.tokens()).lines().count(), count + 2);
    assert_eq!(render_report(&output).matches("Token: ").count(), count);
}

#[test]
fn test_report_for_invalid_input() {
    let output = Scanner::new().tokenize("x = @invalid");
    let report = render_report(&output);

    assert!(report.starts_with("Token Analysis Output:\n\nToken: IDENTIFIER\nValue: x\n"));
    assert!(report.contains("Token: IDENTIFIER\nValue: invalid\nPosition: Line 1, Column 6\n"));
    assert!(report.contains("Errors Found:\nLine 1, Column 5: Unrecognized token: @"));
}
