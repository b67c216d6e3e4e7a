//! Test fixtures - reusable declaration documents.

/// Base set: a fallback `base` emote plus two expressions.
pub const FOX: &str = r#"
name: fox
variants:
  - name: base
    src: base.svg
  - name: happy
    objects:
      - type: eye
        src: eye.svg
      - type: blush
        src: blush.svg
  - name: sad
    objects:
      - type: tear
        src: tear.svg
"#;

/// Recolors `happy`, drops its blush and adds an `angry` emote.
pub const FOX_BLUE: &str = r#"
name: fox_blue
basedOn: fox
variants:
  - name: happy
    overwrites:
      - id: eye
        color: blue
      - id: blush
        remove: true
  - name: angry
    objects:
      - type: brow
        src: brow.svg
"#;

/// JSON flavour of a child set.
pub const FOX_RED_JSON: &str = r#"{
  "name": "fox_red",
  "basedOn": "fox",
  "variants": [
    {"name": "sad", "overwrites": [{"id": "tear", "color": "red"}]}
  ]
}"#;

pub const CYCLE_A: &str = "name: a\nbasedOn: b\nvariants: []\n";
pub const CYCLE_B: &str = "name: b\nbasedOn: a\nvariants: []\n";

/// `happy` declared twice.
pub const DUPLICATE: &str = r#"
name: dup
variants:
  - name: happy
  - name: happy
"#;

/// Overwrites an asset `happy` never had.
pub const GHOST: &str = r#"
name: ghost
basedOn: fox
variants:
  - name: happy
    overwrites:
      - id: ghost
        color: white
"#;
