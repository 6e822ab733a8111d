use jslet::evaluate;

fn assert_output(src: &str, expected: &[&str]) {
    match evaluate(src) {
        Ok(lines) => {
            let expected: Vec<String> = expected.iter().map(ToString::to_string).collect();
            assert_eq!(lines, expected, "unexpected output for script:\n{src}");
        },
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_error(src: &str, needle: &str) {
    match evaluate(src) {
        Ok(lines) => panic!("Script succeeded ({lines:?}) but was expected to fail"),
        Err(e) => {
            let message = e.to_string();
            assert!(message.contains(needle),
                    "error '{message}' does not mention '{needle}'");
        },
    }
}

#[test]
fn arithmetic_and_number_formatting() {
    assert_output("print(1 + 2)", &["3"]);
    assert_output("print(7 * 9 - 3)", &["60"]);
    assert_output("print(0.5 + 0.25)", &["0.75"]);
    assert_output("print(10 / 4)", &["2.5"]);
    assert_output("print(10 % 3)", &["1"]);
    assert_output("print(-3 + 1)", &["-2"]);
    assert_output("print(6 / 2)", &["3"]);
}

#[test]
fn division_by_zero_is_infinity() {
    assert_output("print(1 / 0)", &["Infinity"]);
    assert_output("print(-1 / 0)", &["-Infinity"]);
}

#[test]
fn string_concatenation_coerces_the_other_operand() {
    assert_output("print(1 + \"2\")", &["12"]);
    assert_output("print(\"n = \" + 42)", &["n = 42"]);
    assert_output("print(\"flag: \" + true)", &["flag: true"]);
    assert_output("print(\"\" + undefined)", &["undefined"]);
    assert_output("let a = [1, 2]\nprint(\"a: \" + a)", &["a: [1, 2]"]);
}

#[test]
fn print_joins_arguments_with_spaces() {
    assert_output("print(1, \"two\", true)", &["1 two true"]);
    assert_output("print()", &[""]);
    assert_output("print(print)", &["[Function: print]"]);
}

#[test]
fn single_and_double_quotes_are_equivalent() {
    assert_output("print('hello' + \" \" + 'world')", &["hello world"]);
    assert_output("let o = {'a': 1, \"b\": 2, c: 3}\nprint(o.a, o.b, o.c)", &["1 2 3"]);
}

#[test]
fn let_without_initializer_is_undefined() {
    assert_output("let x\nprint(x)", &["undefined"]);
}

#[test]
fn variables_reassign_and_shadow() {
    assert_output("let x = 1\nx = x + 1\nprint(x)", &["2"]);
    assert_output(
                  r#"
        let x = "outer"
        {
            let x = "inner"
            print(x)
        }
        print(x)
    "#,
                  &["inner", "outer"],
    );
}

#[test]
fn assignment_in_block_writes_through_to_outer_scope() {
    assert_output(
                  r#"
        let x = 1
        {
            x = 2
        }
        print(x)
    "#,
                  &["2"],
    );
}

#[test]
fn arrays_index_length_and_growth() {
    assert_output("let a = [1, \"two\", true]\nprint(a)", &["[1, two, true]"]);
    assert_output("let a = [1, 2, 3]\nprint(a[0], a[2])", &["1 3"]);
    assert_output("let m = [1, 2]\nprint(m[5])", &["undefined"]);
    assert_output("let m = [1, 2]\nprint(m.length)", &["2"]);
    assert_output("let m = [1]\nm[3] = 4\nprint(m, m.length)", &["[1, undefined, undefined, 4] 4"]);
    assert_output("let empty = []\nprint(empty, empty.length)", &["[] 0"]);
}

#[test]
fn arrays_alias_by_reference() {
    assert_output(
                  r#"
        let a = [1, 2]
        let b = a
        b[0] = 99
        print(a[0])
    "#,
                  &["99"],
    );
}

#[test]
fn objects_nesting_and_key_order() {
    assert_output("let o = {a: {b: 1}}\nprint(o.a.b)", &["1"]);
    assert_output("let o = {a: {b: 1}}\nprint(o[\"a\"][\"b\"])", &["1"]);
    assert_output("let o = {z: 1, a: 2}\nprint(o)", &["{z: 1, a: 2}"]);
    assert_output("let o = {z: 1, a: 2}\no.z = 3\no.m = 4\nprint(o)", &["{z: 3, a: 2, m: 4}"]);
    assert_output("let o = {}\nprint(o.missing)", &["undefined"]);
}

#[test]
fn objects_alias_by_reference() {
    assert_output(
                  r#"
        let a = {count: 0}
        let b = a
        b.count = 5
        print(a.count)
    "#,
                  &["5"],
    );
}

#[test]
fn self_referential_containers_print_a_placeholder() {
    assert_output("let o = {}\no.self = o\nprint(o)", &["{self: [Circular]}"]);
    assert_output("let a = [1]\na[1] = a\nprint(\"\" + a)", &["[1, [Circular]]"]);
    assert_output(
                  r#"
        let a = []
        let b = [a]
        a[0] = b
        print(a)
    "#,
                  &["[[[Circular]]]"],
    );
}

#[test]
fn trailing_commas_are_permitted() {
    assert_output("let a = [1, 2, 3,]\nprint(a.length)", &["3"]);
    assert_output("let o = {a: 1, b: 2,}\nprint(o)", &["{a: 1, b: 2}"]);
    assert_output("let add = (a, b,) => a + b\nprint(add(1, 2))", &["3"]);
}

#[test]
fn strict_equality_is_identity_for_containers() {
    assert_output("print([1] == [1])", &["false"]);
    assert_output("let a = [1]\nlet b = a\nprint(a == b)", &["true"]);
    assert_output("print(1 == 1, 1 == 2, \"x\" == \"x\")", &["true false true"]);
    assert_output("print(1 == \"1\")", &["false"]);
    assert_output("print(undefined == undefined)", &["true"]);
    assert_output("print(1 != 2)", &["true"]);
}

#[test]
fn comparisons_and_logical_not() {
    assert_output("print(2 < 3, 3 > 2, 2 <= 2, 3 >= 4)", &["true true true false"]);
    assert_output("print(\"abc\" < \"abd\")", &["true"]);
    assert_output("print(!false, !0, !\"\", !1)", &["true true true false"]);
}

#[test]
fn if_else_follows_truthiness() {
    assert_output(
                  r#"
        if (1 < 2) {
            print("then")
        } else {
            print("else")
        }
    "#,
                  &["then"],
    );
    assert_output(
                  r#"
        if ("") print("truthy")
        else print("falsy")
    "#,
                  &["falsy"],
    );
    assert_output(
                  r#"
        let x = 10
        if (x < 5) print("small")
        else if (x < 50) print("medium")
        else print("large")
    "#,
                  &["medium"],
    );
}

#[test]
fn while_loops_and_postfix_update() {
    assert_output(
                  r#"
        let i = 0
        while (i < 3) {
            print(i)
            i++
        }
    "#,
                  &["0", "1", "2"],
    );
    assert_output("let n = 5\nprint(n++)\nprint(n)", &["5", "6"]);
    assert_output("let n = 5\nprint(n--)\nprint(n)", &["5", "4"]);
    assert_output("let a = [10]\na[0]++\nprint(a[0])", &["11"]);
}

#[test]
fn update_runs_a_computed_index_once() {
    assert_output(
                  r#"
        let i = 0
        let a = [10, 20]
        a[i++]++
        print(i, a)
    "#,
                  &["1 [11, 20]"],
    );
    assert_output(
                  r#"
        let calls = 0
        let o = {n: 0}
        function key() {
            calls++
            return "n"
        }
        o[key()]++
        print(calls, o.n)
    "#,
                  &["1 1"],
    );
}

#[test]
fn function_declarations_and_returns() {
    assert_output(
                  r#"
        function add(a, b) {
            return a + b
        }
        print(add(2, 5))
    "#,
                  &["7"],
    );
    assert_output(
                  r#"
        function noReturn() {
            let x = 1
        }
        print(noReturn())
    "#,
                  &["undefined"],
    );
    assert_output(
                  r#"
        function bare() {
            return
        }
        print(bare())
    "#,
                  &["undefined"],
    );
    assert_output(
                  r#"
        function early(n) {
            if (n < 0) {
                return "negative"
            }
            return "non-negative"
        }
        print(early(-1), early(1))
    "#,
                  &["negative non-negative"],
    );
}

#[test]
fn function_expressions_and_arrows() {
    assert_output(
                  r#"
        const square = function (x) { return x * x }
        print(square(4))
    "#,
                  &["16"],
    );
    assert_output("const add = (a, b) => a + b\nprint(add(1, 2))", &["3"]);
    assert_output("const two = () => 2\nprint(two())", &["2"]);
    assert_output("const double = x => x * 2\nprint(double(21))", &["42"]);
    assert_output(
                  r#"
        const loud = (msg) => {
            return msg + "!"
        }
        print(loud("hey"))
    "#,
                  &["hey!"],
    );
}

#[test]
fn functions_stringify_with_their_name() {
    assert_output("function greet() {}\nprint(greet)", &["[Function: greet]"]);
    assert_output("const f = (x) => x\nprint(f)", &["[Function]"]);
}

#[test]
fn closures_capture_the_defining_environment() {
    assert_output(
                  r#"
        function makeCounter() {
            let count = 0
            return () => {
                count = count + 1
                return count
            }
        }
        const counter = makeCounter()
        print(counter(), counter(), counter())
    "#,
                  &["1 2 3"],
    );
    assert_output(
                  r#"
        const concat = (x) => (y) => x + y
        print(concat("x")("y"))
    "#,
                  &["xy"],
    );
    assert_output(
                  r#"
        function makeAdder(n) {
            return function (x) {
                return x + n
            }
        }
        const addFive = makeAdder(5)
        const addTen = makeAdder(10)
        print(addFive(1), addTen(1))
    "#,
                  &["6 11"],
    );
}

#[test]
fn functions_are_values() {
    assert_output(
                  r#"
        function twice(f, x) {
            return f(f(x))
        }
        print(twice((n) => n * 3, 2))
    "#,
                  &["18"],
    );
    assert_output(
                  r#"
        const ops = {inc: (n) => n + 1, dec: (n) => n - 1}
        print(ops.inc(1), ops.dec(1))
    "#,
                  &["2 0"],
    );
    assert_output(
                  r#"
        const handlers = [(n) => n + 1, (n) => n * 2]
        print(handlers[0](10), handlers[1](10))
    "#,
                  &["11 20"],
    );
}

#[test]
fn arguments_reflects_the_actual_call() {
    assert_output(
                  r#"
        function f() {
            print(arguments.length)
            print(arguments[0])
        }
        f(1, 2, 3)
    "#,
                  &["3", "1"],
    );
    assert_output(
                  r#"
        function f(a, b) {
            print(a, b, arguments.length)
        }
        f(1)
    "#,
                  &["1 undefined 1"],
    );
    assert_output(
                  r#"
        function f(a) {
            print(arguments)
        }
        f("x", "y")
    "#,
                  &["[x, y]"],
    );
}

#[test]
fn arrows_see_the_enclosing_arguments() {
    assert_output(
                  r#"
        function outer() {
            const peek = () => arguments.length
            return peek()
        }
        print(outer(1, 2, 3))
    "#,
                  &["3"],
    );
}

#[test]
fn comments_and_optional_semicolons() {
    assert_output(
                  r#"
        // line comment
        let x = 1; let y = 2
        /* block
           comment */
        print(x + y); ;
    "#,
                  &["3"],
    );
}

#[test]
fn undefined_variable_is_a_reference_error() {
    assert_error("print(missing)", "ReferenceError");
    assert_error("missing = 1", "ReferenceError");
}

#[test]
fn const_reassignment_is_a_type_error() {
    assert_error("const a = 1\na = 2", "TypeError");
    assert_error("const a = 1\na = 2", "constant");
}

#[test]
fn const_requires_an_initializer() {
    assert_error("const a", "initializer");
}

#[test]
fn calling_a_non_function_is_a_type_error() {
    assert_error("let x = 4\nx(1)", "is not a function");
    assert_error("undefined()", "is not a function");
}

#[test]
fn member_access_on_primitives_is_a_type_error() {
    assert_error("let n = 1\nprint(n.key)", "TypeError");
    assert_error("print(undefined.key)", "TypeError");
}

#[test]
fn invalid_operands_are_type_errors() {
    assert_error("print(1 - \"x\")", "TypeError");
    assert_error("print({} * 2)", "TypeError");
    assert_error("let s = \"x\"\ns++", "TypeError");
}

#[test]
fn huge_array_indices_are_rejected() {
    assert_error("let a = []\na[1000000000000] = 1", "Invalid array index");
}

#[test]
fn lexer_rejects_malformed_input() {
    assert_error("let x = 1 @ 2", "Unexpected character");
    assert_error("let s = \"oops", "Unterminated string");
}

#[test]
fn parser_rejects_malformed_input() {
    assert_error("let = 1", "identifier");
    assert_error("print(1", "Unexpected end of input");
    assert_error("1 = 2", "assignment target");
    assert_error("let o = {a 1}", "':'");
}

#[test]
fn error_messages_carry_the_line_number() {
    assert_error("let a = 1\nlet b = 2\nprint(c)", "line 3");
}
