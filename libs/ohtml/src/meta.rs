//! Element metadata, used to verify documents while they are being built.

use std::collections::HashMap;

use lazy_static::lazy_static;

#[derive(Debug)]
pub struct ElementMeta {
    pub tag_name: &'static str,
    /// False for void elements (`<br>`, `<link>`, ...), which are
    /// serialized without a closing tag and must not carry a body.
    pub has_closing_tag: bool,
}

macro_rules! element_metas {
    { $($tag:ident = $has_closing_tag:expr),* $(,)? } => {
        &[
            $(
                ElementMeta {
                    tag_name: stringify!($tag),
                    has_closing_tag: $has_closing_tag,
                },
            )*
        ]
    }
}

/// The elements this library knows how to build. Not the full HTML
/// standard; extend the table when a new tag is needed.
pub const ELEMENTS: &'static [ElementMeta] = element_metas! {
    html = true,
    head = true,
    title = true,
    meta = false,
    link = false,
    style = true,
    script = true,
    body = true,
    header = true,
    nav = true,
    main = true,
    section = true,
    article = true,
    aside = true,
    footer = true,
    div = true,
    span = true,
    p = true,
    h1 = true,
    h2 = true,
    h3 = true,
    h4 = true,
    h5 = true,
    h6 = true,
    ul = true,
    ol = true,
    li = true,
    a = true,
    em = true,
    strong = true,
    small = true,
    code = true,
    pre = true,
    kbd = true,
    time = true,
    button = true,
    label = true,
    form = true,
    input = false,
    canvas = true,
    img = false,
    br = false,
    hr = false,
};

pub struct MetaDb {
    by_tag: HashMap<&'static str, &'static ElementMeta>,
}

impl MetaDb {
    fn new(elements: &'static [ElementMeta]) -> MetaDb {
        MetaDb {
            by_tag: elements.iter().map(|meta| (meta.tag_name, meta)).collect(),
        }
    }

    pub fn get(&self, tag_name: &str) -> Option<&'static ElementMeta> {
        self.by_tag.get(tag_name).copied()
    }
}

lazy_static! {
    pub static ref METADB: MetaDb = MetaDb::new(ELEMENTS);
}

/// Lexical check only; `data-*` and `aria-*` names pass like any
/// other dash-separated name.
pub fn is_valid_attribute_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => (),
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
