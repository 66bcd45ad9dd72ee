use super::*;
use crate::lang::ErrorCode;

fn fault(result: Result<(Val, Vec<String>), Halt>) -> ErrorCode {
    match result {
        Err(Halt::Fault(error)) => error.code(),
        other => panic!("expected a fault, got {:?}", other),
    }
}

#[test]
fn test_math() {
    let mut c = Context::new();
    assert_eq!(dispatch(&mut c, "SUM 2 3"), Ok((Val::Number(5), vec![])));
    assert_eq!(dispatch(&mut c, "DIVIDE 7 2"), Ok((Val::Number(3), vec![])));
    assert_eq!(dispatch(&mut c, "MODULO 7 2"), Ok((Val::Number(1), vec![])));
    assert_eq!(
        dispatch(&mut c, "multiply -4 5"),
        Ok((Val::Number(-20), vec![]))
    );
}

#[test]
fn test_division_by_zero() {
    let mut c = Context::new();
    assert_eq!(fault(dispatch(&mut c, "DIVIDE 1 0")), ErrorCode::DivisionByZero);
    assert_eq!(fault(dispatch(&mut c, "MODULO 1 0")), ErrorCode::DivisionByZero);
}

#[test]
fn test_overflow() {
    let mut c = Context::new();
    assert_eq!(
        fault(dispatch(
            &mut c,
            "MULTIPLY MULTIPLY 2147483647 2147483647 MULTIPLY 2147483647 2147483647"
        )),
        ErrorCode::Overflow
    );
}

#[test]
fn test_leftovers_are_returned() {
    let mut c = Context::new();
    assert_eq!(
        dispatch(&mut c, "SUM 1 2 3"),
        Ok((Val::Number(3), vec!["3".to_string()]))
    );
}

#[test]
fn test_equals_not() {
    let mut c = Context::new();
    assert_eq!(
        dispatch(&mut c, "EQUALS 4 4"),
        Ok((Val::Condition(true), vec![]))
    );
    assert_eq!(
        dispatch(&mut c, "NOT EQUALS 4 4"),
        Ok((Val::Condition(false), vec![]))
    );
    assert_eq!(
        dispatch(&mut c, "EQUALS 4 SUM 2 2"),
        Ok((Val::Condition(true), vec![]))
    );
}

#[test]
fn test_say_family() {
    let mut c = Context::new();
    dispatch(&mut c, r#"SAY "Hello World""#).unwrap();
    dispatch(&mut c, r#"SHOUT "Hello World""#).unwrap();
    dispatch(&mut c, r#"WHISPER "Hello World""#).unwrap();
    dispatch(&mut c, r#"PRINT "no newline""#).unwrap();
    dispatch(&mut c, "PRINTNUM SUM 40 2").unwrap();
    assert_eq!(
        c.take_output().unwrap(),
        "Hello World\nHELLO WORLD!\nhello world\nno newline42"
    );
}

#[test]
fn test_say_returns_none() {
    let mut c = Context::new();
    assert_eq!(dispatch(&mut c, "say \"x\""), Ok((Val::None, vec![])));
}

#[test]
fn test_jump() {
    let mut c = Context::new();
    dispatch(&mut c, "JUMP 40").unwrap();
    assert_eq!(c.pc(), 40);
}

#[test]
fn test_if() {
    let mut c = Context::new();
    dispatch(&mut c, "IF TRUE JUMP 10").unwrap();
    assert_eq!(c.pc(), 10);
    let mut c = Context::new();
    assert_eq!(
        dispatch(&mut c, "IF FALSE JUMP 10 these are ignored"),
        Ok((Val::None, vec![]))
    );
    assert_eq!(c.pc(), 1);
}

#[test]
fn test_if_without_jump() {
    let mut c = Context::new();
    assert_eq!(
        fault(dispatch(&mut c, "IF TRUE GOTO 10")),
        ErrorCode::IfWithoutJump
    );
    assert_eq!(fault(dispatch(&mut c, "IF TRUE")), ErrorCode::IfWithoutJump);
}

#[test]
fn test_reserve_increment() {
    let mut c = Context::new();
    dispatch(&mut c, "RESERVE x _ NUMBER").unwrap();
    for _ in 0..3 {
        dispatch(&mut c, "INCREMENT x").unwrap();
    }
    assert_eq!(c.var("x"), Some(&Val::Number(3)));
    dispatch(&mut c, "DECREMENT x").unwrap();
    assert_eq!(c.var("x"), Some(&Val::Number(2)));
}

#[test]
fn test_increment_coerces_to_number() {
    let mut c = reserved(Kind::Text, "T");
    dispatch(&mut c, "INCREMENT T").unwrap();
    assert_eq!(c.var("T"), Some(&Val::Number(1)));
}

#[test]
fn test_increment_undefined() {
    let mut c = Context::new();
    assert_eq!(
        fault(dispatch(&mut c, "INCREMENT nope")),
        ErrorCode::UndefinedVariable
    );
}

#[test]
fn test_reserve_defaults() {
    let mut c = Context::new();
    dispatch(&mut c, "RESERVE T _ TEXT").unwrap();
    dispatch(&mut c, "RESERVE C _ CONDITION").unwrap();
    dispatch(&mut c, "RESERVE K _ TYPE").unwrap();
    dispatch(&mut c, "RESERVE H _ CHARACTER").unwrap();
    dispatch(&mut c, "RESERVE N _ WHATEVER").unwrap();
    assert_eq!(c.var("T"), Some(&Val::Text(String::new())));
    assert_eq!(c.var("C"), Some(&Val::Condition(false)));
    assert_eq!(c.var("K"), Some(&Val::Type(Kind::None)));
    assert_eq!(c.var("H"), Some(&Val::Character(0)));
    assert_eq!(c.var("N"), Some(&Val::None));
    assert_eq!(
        fault(dispatch(&mut c, "RESERVE Q _")),
        ErrorCode::MissingArgument
    );
}

#[test]
fn test_assign() {
    let mut c = reserved(Kind::Number, "N");
    dispatch(&mut c, "n IS SUM 1 2").unwrap();
    assert_eq!(c.var("N"), Some(&Val::Number(3)));

    let mut c = reserved(Kind::Text, "T");
    dispatch(&mut c, r#"T IS "two words""#).unwrap();
    assert_eq!(c.var("T"), Some(&Val::Text("two words".to_string())));

    let mut c = reserved(Kind::Condition, "C");
    dispatch(&mut c, "C IS NOT FALSE").unwrap();
    assert_eq!(c.var("C"), Some(&Val::Condition(true)));

    let mut c = reserved(Kind::Type, "K");
    assert_eq!(
        dispatch(&mut c, "K IS NUMBER extra"),
        Ok((Val::None, vec!["extra".to_string()]))
    );
    assert_eq!(c.var("K"), Some(&Val::Type(Kind::Number)));
}

#[test]
fn test_assign_uppercases_target() {
    let mut c = reserved(Kind::Number, "lower");
    assert_eq!(
        fault(dispatch(&mut c, "lower IS 1")),
        ErrorCode::UnrecognizedCommand
    );
}

#[test]
fn test_assign_without_resolver() {
    let mut c = reserved(Kind::Character, "H");
    assert_eq!(
        fault(dispatch(&mut c, "H IS 1")),
        ErrorCode::UnrecognizedValue
    );
    let mut c = reserved(Kind::None, "Z");
    assert_eq!(
        fault(dispatch(&mut c, "Z IS 1")),
        ErrorCode::UnrecognizedValue
    );
}

#[test]
fn test_unrecognized_command() {
    let mut c = Context::new();
    assert_eq!(
        fault(dispatch(&mut c, "UNKNOWNCMD 1 2")),
        ErrorCode::UnrecognizedCommand
    );
    let mut c = reserved(Kind::Number, "N");
    assert_eq!(
        fault(dispatch(&mut c, "N EQUALS 1")),
        ErrorCode::UnrecognizedCommand
    );
}

#[test]
fn test_ask_suspends_without_answer() {
    let mut c = Context::new();
    assert_eq!(
        dispatch(&mut c, r#"ASK "Your name?""#),
        Err(Halt::Ask("Your name?".to_string()))
    );
    c.answer("Ada");
    assert_eq!(
        dispatch(&mut c, r#"ASK "Your name?""#),
        Ok((Val::Text("Ada".to_string()), vec![]))
    );
}

#[test]
fn test_askfor_number() {
    let mut c = Context::new();
    c.answer("42");
    assert_eq!(
        dispatch(&mut c, r#"ASKFOR NUMBER "How many?""#),
        Ok((Val::Number(42), vec![]))
    );
    let mut c = Context::new();
    c.answer("lots");
    assert_eq!(
        fault(dispatch(&mut c, r#"ASKFOR NUMBER "How many?""#)),
        ErrorCode::ExpectedNumber
    );
}

#[test]
fn test_askfor_unusable_type() {
    let mut c = Context::new();
    assert_eq!(
        dispatch(&mut c, r#"ASKFOR CONDITION "Really?""#),
        Err(Halt::Ask("Really?".to_string()))
    );
    c.answer("yes");
    assert_eq!(
        fault(dispatch(&mut c, r#"ASKFOR CONDITION "Really?""#)),
        ErrorCode::CannotUseType
    );
}
