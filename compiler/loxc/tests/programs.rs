//! Whole programs run through a `Session`.

mod common;

use common::output;
use pretty_assertions::assert_eq;

#[test]
fn assignment_is_right_associative() {
    assert_eq!(
        output("var a=1; var b=2; var c=3; a=b=c; print a; print b; print c;"),
        "3\n3\n3\n"
    );
}

#[test]
fn assignment_chain_with_strings() {
    assert_eq!(
        output("var a = \"a\";\nvar b = \"b\";\nvar c = \"c\";\na = b = c;\nprint a;\nprint b;\nprint c;"),
        "c\nc\nc\n"
    );
}

#[test]
fn lexical_shadowing() {
    assert_eq!(
        output("var a=10; { print a; var a=20; print a; } print a;"),
        "10\n20\n10\n"
    );
}

#[test]
fn dangling_else() {
    assert_eq!(
        output("if (true) if (false) print \"bad\"; else print \"good\";"),
        "good\n"
    );
    assert_eq!(
        output("if (true) if (true) print \"bad\"; else print \"good\";"),
        "bad\n"
    );
}

const DIGITS: &str = "0\n1\n2\n3\n4\n5\n6\n7\n8\n9\n";

#[test]
fn c_style_for_loop() {
    assert_eq!(output("for (var i = 0; i < 10; i = i + 1) print i;"), DIGITS);
}

#[test]
fn while_loop() {
    assert_eq!(
        output("var i = 0;\nwhile (i < 10) {\n  print i;\n  i = i + 1;\n}"),
        DIGITS
    );
}

#[test]
fn for_loop_with_empty_initializer() {
    assert_eq!(
        output("var i = 0;\nfor (; i < 10; i = i + 1) {\n  print i;\n}"),
        DIGITS
    );
}

#[test]
fn for_loop_with_only_condition() {
    assert_eq!(
        output("var i = 0; for (; i < 10;) { print i; i = i + 1; }"),
        DIGITS
    );
}

#[test]
fn comments_are_ignored() {
    let source = "
        // line comment
        print 1; /* block
        comment */ print 2;
    ";
    assert_eq!(output(source), "1\n2\n");
}

#[test]
fn expressions() {
    assert_eq!(output("print 2 + 3 * 4 - 6 / 2;"), "11\n");
    assert_eq!(output("print -(1 + 2) >= -3;"), "true\n");
    assert_eq!(output("print \"a\" + \"b\" == \"ab\";"), "true\n");
    assert_eq!(output("print !(1 < 2) or null;"), "nil\n");
    assert_eq!(output("print 10 / 4;"), "2.5\n");
}

#[test]
fn empty_program() {
    assert_eq!(output(""), "");
    assert_eq!(output("// nothing here\n"), "");
}

#[test]
fn multiline_strings() {
    assert_eq!(output("print \"one\ntwo\";"), "one\ntwo\n");
}

#[test]
fn nested_blocks_restore_outer_bindings() {
    let source = "
        var a = \"global\";
        {
            var a = \"outer\";
            {
                var a = \"inner\";
                print a;
            }
            print a;
        }
        print a;
    ";
    assert_eq!(output(source), "inner\nouter\nglobal\n");
}

#[test]
fn globals_survive_between_runs() {
    let mut session = common::session();
    assert!(session.run("var greeting = \"hi\";").is_success());
    assert!(session.run("greeting = greeting + \"!\";").is_success());
    let outcome = session.run("print greeting;");
    let script = common::finish(session, outcome);
    assert_eq!(script.stdout, "hi!\n");
}

#[test]
fn deeply_nested_grouping() {
    let depth = 200_000;
    let source = format!("print {}1{};", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(output(&source), "1\n");
}

#[test]
fn deeply_nested_blocks() {
    let depth = 50_000;
    let source = format!("var a = 7; {}print a;{}", "{".repeat(depth), "}".repeat(depth));
    assert_eq!(output(&source), "7\n");
}
