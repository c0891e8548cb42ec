use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=docs/");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("bundled_docs.rs");
    let mut f = fs::File::create(&dest_path).unwrap();

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let docs_dir = Path::new(&manifest_dir).join("docs");
    if !docs_dir.exists() {
        writeln!(f, "pub const BUNDLED_DOCS: &[(&str, &str)] = &[];").unwrap();
        return;
    }

    let mut entries: Vec<_> = fs::read_dir(&docs_dir)
        .unwrap()
        .map(|res| res.unwrap().path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "md"))
        .collect();

    // Sorted so the generated table is stable across builds
    entries.sort();

    writeln!(f, "pub const BUNDLED_DOCS: &[(&str, &str)] = &[").unwrap();
    for path in entries {
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        println!("cargo:rerun-if-changed={}", path.display());
        writeln!(
            f,
            "    ({:?}, include_str!({:?})),",
            name,
            path.to_string_lossy()
        )
        .unwrap();
    }
    writeln!(f, "];").unwrap();
}
