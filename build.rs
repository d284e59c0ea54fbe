// build.rs

use glob::glob;
use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// A matrix fixture discovered under `data/`.
#[derive(Debug)]
struct Fixture {
    pub name: String,
    pub path: PathBuf,
    /// `true` for fixtures under `data/singular`, which must have a null space.
    pub singular: bool,
}

/// Discovers all fixtures by scanning the `data/` directory.
fn get_all_fixtures() -> Vec<Fixture> {
    [("data/singular", true), ("data/full_rank", false)]
        .into_iter()
        .flat_map(|(dir, singular)| {
            glob(&format!("{}/*.csv", dir))
                .expect("Failed to read glob pattern")
                .filter_map(Result::ok)
                .map(move |path| {
                    let stem = path
                        .file_stem()
                        .unwrap()
                        .to_string_lossy()
                        .replace('-', "_");
                    let kind = if singular { "singular" } else { "full_rank" };
                    Fixture {
                        name: format!("{kind}_{stem}"),
                        path,
                        singular,
                    }
                })
        })
        .collect()
}

fn main() {
    println!("cargo:rerun-if-changed=data");

    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("fixture_tests.rs");
    let mut file = BufWriter::new(File::create(&dest_path).unwrap());

    // One `#[test]` per fixture file.
    for fixture in get_all_fixtures() {
        let path = fixture
            .path
            .canonicalize()
            .unwrap_or_else(|_| fixture.path.clone());
        writeln!(
            file,
            r#"
#[test]
fn fixture_{name}() -> anyhow::Result<()> {{
    run_fixture("{path}", {singular})
}}
"#,
            name = fixture.name,
            path = path.to_str().unwrap().escape_default(),
            singular = fixture.singular,
        )
        .unwrap();
    }
}
