//! Page templates, compiled into the binary.
//!
//! Everything extends `base.html`, which owns the page chrome and the
//! flash banner. Shipping the templates via `include_str!` keeps the
//! binary self-contained; there is no template directory to deploy.

use tera::Tera;

pub fn build() -> tera::Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("base.html", include_str!("../../templates/base.html")),
        ("index.html", include_str!("../../templates/index.html")),
        ("form.html", include_str!("../../templates/form.html")),
    ])?;
    Ok(tera)
}
