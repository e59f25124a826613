/// The glyph resource that ships at the root of the workspace. Every crate's tests load it from here.
pub fn letters_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/../letters.json")
}
