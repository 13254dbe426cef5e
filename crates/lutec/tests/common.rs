use std::path::{Path, PathBuf};

/// The path of a sample source
pub fn sml(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("sml")
        .join(name)
}

/// Wraps generated statements in the default document
pub fn document(body: &str) -> String {
    format!("#include <ml-c.h>\nint main()\n{{\n{body}}}")
}
