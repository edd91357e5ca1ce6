use anyhow::Result;
use handlebars::{no_escape, Handlebars};

pub const RELEASE_NOTES_TEMPLATE: &str = "release_notes";

pub fn handlebars<'hb>() -> Result<Handlebars<'hb>> {
    let mut hb = Handlebars::new();

    let release_notes = include_str!("./release_notes.hbs");

    hb.register_template_string(RELEASE_NOTES_TEMPLATE, release_notes)?;

    // markdown, not html
    hb.register_escape_fn(no_escape);

    Ok(hb)
}
