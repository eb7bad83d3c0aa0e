//! Fake mermaid-cli and npm used by the integration tests.
//!
//! The fake mmdc writes a minimal SVG/PNG/PDF derived from the input, grows
//! raster output with `-s`, and fails with a parse error when the diagram
//! contains `TDf`.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use mermaido::{Mermaido, Settings};
use tempfile::TempDir;

pub const DIAGRAM: &str = "graph TD; A-->B;";
pub const BAD_DIAGRAM: &str = "graph TDf; fdsA-->dfB;";

pub const FAKE_MMDC: &str = r#"#!/bin/sh
printf '%s\n' "$@" > "$(dirname "$0")/last-args"
in=""; out=""; scale=1
while [ $# -gt 0 ]; do
  case "$1" in
    -i) in="$2"; shift 2 ;;
    -o) out="$2"; shift 2 ;;
    -s) scale="$2"; shift 2 ;;
    -p|-t|-b|-w|-H|-c|-C) shift 2 ;;
    *) shift ;;
  esac
done
[ -f "$in" ] || { echo "Input file \"$in\" doesn't exist" >&2; exit 1; }
printf '%s\n' "$in" > "$(dirname "$0")/last-input"
if grep -q 'TDf' "$in"; then
  echo "Error: Parse error on line 1: graph TDf; fdsA-->dfB; Expecting 'NEWLINE', got 'ALPHA'" >&2
  exit 1
fi
case "$out" in
  *.svg)
    body="$(cat "$in")"
    printf '<svg xmlns="http://www.w3.org/2000/svg"><!-- %s --></svg>\n' "$body" > "$out" ;;
  *.png)
    printf '\211PNG\r\n\032\n' > "$out"
    n=0
    while [ "$n" -lt "$scale" ]; do cat "$in" >> "$out"; n=$((n+1)); done ;;
  *.pdf) printf '%%PDF-1.4\n' > "$out"; cat "$in" >> "$out" ;;
  *)
    echo "Output file must end with \".md\", \".svg\", \".png\" or \".pdf\"" >&2
    exit 1 ;;
esac
"#;

static SPAWN_LOCK: Mutex<()> = Mutex::new(());

/// Serializes tests that write and then execute scripts, avoiding ETXTBSY
/// when another thread forks while a script is still open for writing.
pub fn lock() -> MutexGuard<'static, ()> {
    SPAWN_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

/// File the fake mmdc left next to itself (`last-args`, `last-input`).
pub fn recorded(engine: &Mermaido, name: &str) -> String {
    fs::read_to_string(engine.layout().mmdc().with_file_name(name)).unwrap()
}

pub fn write_script(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

/// npm stand-in: records its args and lays down the fake mmdc plus a
/// package manifest carrying the requested version.
pub fn fake_npm_script() -> String {
    format!(
        r#"#!/bin/sh
printf '%s\n' "$@" > npm-args
for last; do :; done
version="${{last##*@}}"
mkdir -p node_modules/.bin node_modules/@mermaid-js/mermaid-cli
cat > node_modules/.bin/mmdc <<'MMDC'
{mmdc}MMDC
chmod +x node_modules/.bin/mmdc
manifest=node_modules/@mermaid-js/mermaid-cli/package.json
printf '{{"name":"@mermaid-js/mermaid-cli","version":"%s"}}' "$version" > "$manifest"
"#,
        mmdc = FAKE_MMDC
    )
}

pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("scratch")).unwrap();
        Self { dir }
    }

    pub fn cache_root(&self) -> PathBuf {
        self.dir.path().join("cache")
    }

    pub fn scratch(&self) -> PathBuf {
        self.dir.path().join("scratch")
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn settings(&self) -> Settings {
        Settings::from_env()
            .with_cache_root(self.cache_root())
            .with_scratch_dir(self.scratch())
            .with_npm(self.path("npm"))
    }

    pub fn engine(&self) -> Mermaido {
        Mermaido::new(self.settings())
    }

    /// Engine whose cache already holds the fake mmdc.
    pub fn installed(&self) -> Mermaido {
        let engine = self.engine();
        write_script(&engine.layout().mmdc(), FAKE_MMDC);
        engine
    }

    pub fn install_fake_npm(&self) {
        write_script(&self.path("npm"), &fake_npm_script());
    }

    pub fn scratch_entries(&self) -> usize {
        fs::read_dir(self.scratch()).unwrap().count()
    }
}
