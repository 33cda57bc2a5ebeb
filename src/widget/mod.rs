use std::fmt::Debug;

use include_dir::{include_dir, Dir};
use lazy_static::*;
use serde::Serialize;
use tera::Tera;

pub use map_list::*;
pub use map_ranking::*;
pub use upload_form::*;

mod formatters;
mod map_list;
mod map_ranking;
mod upload_form;

pub trait Widget
where
    Self: Serialize + Sized + Debug,
{
    /// Must be a file name ending in `.j2`, located in `src/res/widgets/`.
    const FILE: &'static str;

    /// Render the template file with this context, extended by
    /// - `widget_id`: identifies the widget in the rendered markup
    fn render(&self) -> String {
        log::debug!("render widget context: {:?}", &self);

        let mut tera_context =
            tera::Context::from_serialize(self).expect("failed to create widget context!");
        tera_context.insert("widget_id", Self::FILE);

        TEMPLATES
            .render(Self::FILE, &tera_context)
            .expect("failed to render widget!")
    }
}

lazy_static! {
    static ref TEMPLATES: Tera = collect_templates().expect("failed to collect widget templates");
}

fn collect_templates() -> tera::Result<Tera> {
    // Include all widget templates at compile-time:
    static TEMPLATE_DIR: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/src/res/widgets");

    let mut tera = Tera::default();
    for file in TEMPLATE_DIR.files() {
        let file_name = file.path().to_str().expect("failed to read template");
        tera.add_raw_template(
            file_name,
            file.contents_utf8().expect("failed to read template"),
        )?;
    }
    Ok(tera)
}
