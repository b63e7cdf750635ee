use super::*;

fn eval(text: &str, index: usize) -> Value {
    eval_string_option(text, BitIndex(index), 7).unwrap()
}

#[test]
fn plain_strings_pass_through() {
    assert_eq!(StringOption::parse("deeppink").unwrap(), None);
    assert_eq!(eval("50%", 3), Value::Text("50%".into()));
}

#[test]
fn single_argument_stagger_steps_from_zero() {
    assert_eq!(eval("stagger(10)", 0), Value::Number(0.0));
    assert_eq!(eval("stagger(10)", 3), Value::Number(30.0));
}

#[test]
fn two_argument_stagger_adds_base() {
    assert_eq!(eval("stagger(100, 25)", 0), Value::Number(100.0));
    assert_eq!(eval("STAGGER( 100 , 25 )", 2), Value::Number(150.0));
}

#[test]
fn base_unit_wins_over_step_unit() {
    assert_eq!(eval("stagger(10%, 5px)", 2), Value::Text("20%".into()));
    assert_eq!(eval("stagger(10, 5px)", 2), Value::Text("20px".into()));
    assert_eq!(eval("stagger(10em, 1)", 1), Value::Text("11em".into()));
}

#[test]
fn rand_stays_in_bounds_and_keeps_unit() {
    for i in 0..16 {
        let v = eval_string_option("rand(10, 20)", BitIndex(i), i as u64).unwrap();
        let n = v.as_f64().unwrap();
        assert!((10.0..20.0).contains(&n), "{n} out of range");

        let v = eval_string_option("rand(0, 90deg)", BitIndex(i), i as u64).unwrap();
        let s = v.as_str().unwrap();
        assert!(s.ends_with("deg"), "{s} lost its unit");
    }
}

#[test]
fn rand_is_deterministic_for_a_seed() {
    let a = eval_string_option("rand(0, 1)", BitIndex(0), 99).unwrap();
    let b = eval_string_option("rand(0, 1)", BitIndex(0), 99).unwrap();
    assert_eq!(a, b);
}

#[test]
fn stagger_accepts_rand_operands() {
    let opt = StringOption::parse("stagger(rand(0, 10), 20)").unwrap().unwrap();
    match &opt {
        StringOption::Stagger {
            base: Operand::Rand(_),
            step: Operand::Amount(a),
        } => assert_eq!(a.value, 20.0),
        other => panic!("unexpected parse {other:?}"),
    }
    let n = eval("stagger(rand(0, 10), 20)", 2).as_f64().unwrap();
    assert!((40.0..50.0).contains(&n));
}

#[test]
fn malformed_options_are_errors() {
    assert!(StringOption::parse("stagger(1, 2, 3)").is_err());
    assert!(StringOption::parse("stagger(1,").is_err());
    assert!(StringOption::parse("rand(1)").is_err());
    assert!(StringOption::parse("stagger(10furlongs)").is_err());
    assert!(StringOption::parse("50% rand(1, 2)").is_err());
}
