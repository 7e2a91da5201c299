//! Test fixtures and constants.

use std::io::Write;
use tempfile::NamedTempFile;

/// Config documents
pub mod configs {
    pub const STRICT_JSON: &str = "mode: strict\nformat: json\n";

    pub const PERMISSIVE_TEXT: &str = "mode: permissive\nformat: text\n";

    /// Unknown mode name, rejected by the parser
    pub const INVALID_MODE: &str = "mode: sloppy\n";
}

/// Batch documents
pub mod batches {
    /// One request per operation, all valid in strict mode
    pub const ALL_OPERATIONS: &str = r##"
- op: rgb-to-hsv
  r: 128
  g: 128
  b: 128
- op: rgb-to-hsl
  r: 255
  g: 0
  b: 0
- op: hsv-to-rgb
  h: 0.0
  s: 1.0
  v: 1.0
- op: hsl-to-rgb
  h: 0.25
  s: 0.0
  l: 0.5
- op: temperature
  kelvin: 6600
- op: hex-to-rgb
  hex: "#FF0080"
- op: rgb-to-hex
  r: 255
  g: 0
  b: 128
"##;

    /// Inputs only the permissive mode accepts
    pub const OUT_OF_RANGE: &str = r#"
- op: hsv-to-rgb
  h: 0.5
  s: 1.0
  v: 1.5
- op: temperature
  kelvin: 50
- op: hex-to-rgb
  hex: "FF0080 extra"
"#;

    pub const JSON_LIST: &str =
        r#"[{"op": "rgb-to-hex", "r": 1, "g": 2, "b": 3}, {"op": "temperature", "kelvin": 1000}]"#;
}

/// Write `content` to a fresh temporary file
pub fn temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}
