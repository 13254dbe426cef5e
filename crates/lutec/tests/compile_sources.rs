use lute_parsing::parser::error::ErrorKind;
use lutec::{BuildLutecError, Lutec, LutecError};
use std::io::Write;
use test_log::test;
use tracing::info;

mod common;

fn lutec() -> Lutec {
    Lutec::builder().build().expect("could not create lutec")
}

#[test]
fn test_integer_declaration() -> eyre::Result<()> {
    let generated = lutec().compile_path(&common::sml("declaration.sml"))?;
    info!("generated:\n{generated}");
    assert!(generated.contains("int x = 5;"));
    assert_eq!(generated, common::document("    int x = 5;\n"));
    Ok(())
}

#[test]
fn test_list_declaration() -> eyre::Result<()> {
    let generated = lutec().compile_path(&common::sml("list_declaration.sml"))?;
    assert_eq!(
        generated,
        common::document(
            "    list<int>* l = new list<int>(1,new list<int>(2,new list<int>(3,0)));\n"
        )
    );
    Ok(())
}

#[test]
fn test_dangling_do() -> eyre::Result<()> {
    let generated = lutec().compile_path(&common::sml("dangling_do.sml"))?;
    assert_eq!(
        generated,
        common::document("    while b {\n        x = x - 1;\n    };\n")
    );
    Ok(())
}

#[test]
fn test_conditional() -> eyre::Result<()> {
    let generated = lutec().compile_path(&common::sml("conditional.sml"))?;
    assert!(generated.contains("b ? 1 : 0;"));
    Ok(())
}

#[test]
fn test_let_block() -> eyre::Result<()> {
    let generated = lutec().compile_path(&common::sml("let_block.sml"))?;
    assert_eq!(
        generated,
        common::document(
            "    int x = 0;\n    {\n        int y = 2;\n        x = y + 1;\n    };\n"
        )
    );
    Ok(())
}

#[test]
fn test_float_cons_uses_declared_type() -> eyre::Result<()> {
    let generated = lutec().compile_path(&common::sml("float_cons.sml"))?;
    assert_eq!(
        generated,
        common::document(
            "    float y = 2.5;\n    list<float>* l = new list<float>(x,new list<float>(y,0));\n"
        )
    );
    Ok(())
}

#[test]
fn test_malformed_float() {
    let error = lutec()
        .compile_path(&common::sml("malformed_float.sml"))
        .unwrap_err();
    let LutecError::Syntax(syntax) = &error else {
        panic!("expected a syntax error, got {error:?}");
    };
    assert!(matches!(syntax.kind(), ErrorKind::Lex(_)));
    assert_eq!(error.to_string(), "Line 1 : syntax error : .");
}

#[test]
fn test_dangling_else() {
    let error = lutec()
        .compile_path(&common::sml("dangling_else.sml"))
        .unwrap_err();
    let syntax = error.as_syntax().expect("a syntax error");
    assert!(matches!(syntax.kind(), ErrorKind::Flow { .. }));
    assert_eq!(error.to_string(), "Line 1 : syntax error : else");
}

#[test]
fn test_juxtaposition_error_stops_generation() {
    let error = lutec().compile_str("val x : int = 5 ;\nx y ;").unwrap_err();
    let syntax = error.as_syntax().expect("a syntax error");
    assert!(matches!(syntax.kind(), ErrorKind::Juxtaposition { .. }));
    assert_eq!(error.to_string(), "Line 2 : syntax error : y");
}

#[test]
fn test_missing_file() {
    let error = lutec()
        .compile_path(&common::sml("missing.sml"))
        .unwrap_err();
    assert!(matches!(error, LutecError::Io(_)));
}

#[test]
fn test_compile_temporary_file() -> eyre::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "val b : bool = true ;")?;
    let generated = lutec().compile_path(file.path())?;
    assert_eq!(generated, common::document("    bool b = true;\n"));
    Ok(())
}

#[test]
fn test_configured_output() -> eyre::Result<()> {
    let lutec = Lutec::builder().header("runtime.h").indent_width(2).build()?;
    let generated = lutec.compile_str("while b do x := x - 1 ;")?;
    assert_eq!(
        generated,
        "#include <runtime.h>\nint main()\n{\n  while b {\n    x = x - 1;\n  };\n}"
    );
    Ok(())
}

#[test]
fn test_builder_validation() {
    assert!(matches!(
        Lutec::builder().indent_width(0).build(),
        Err(BuildLutecError::ZeroIndent)
    ));
    assert!(matches!(
        Lutec::builder().header(" ").build(),
        Err(BuildLutecError::EmptyHeader)
    ));
}
