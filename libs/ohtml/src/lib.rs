//! Html dom abstraction as an owned node tree.
//!
//! Documents are built through the [`Html`] handle, which verifies
//! element and attribute names against [`meta::METADB`] while
//! building. Text reaches the output only through string nodes and
//! attribute values, both of which are escaped at serialization time.

pub mod meta;
pub mod myfrom;

use std::fmt::Display;
use std::io::Write;

use anyhow::{anyhow, bail, Result};
use kstring::KString;

pub use meta::{ElementMeta, MetaDb, METADB};

use crate::myfrom::MyFrom;

pub const NBSP: &str = "\u{00A0}";

// https://www.w3.org/International/questions/qa-byte-order-mark#problems
const BOM: &str = "\u{FEFF}";
#[cfg(test)]
#[test]
fn t_file_encoding() {
    assert_eq!(BOM.as_bytes(), &[0xEF, 0xBB, 0xBF]);
}

const DOCTYPE: &str = "<!DOCTYPE html>\n";

#[derive(Debug, Clone)]
pub enum Node {
    Element(Element),
    String(KString),
    /// Already-serialized content, printed verbatim. The only path
    /// around escaping; reserved for content the caller controls
    /// fully, e.g. generated inline scripts.
    Preserialized(KString),
    /// Serializes to nothing; the placeholder for conditionally
    /// omitted parts.
    None,
}

#[derive(Debug, Clone)]
pub struct Element {
    meta: &'static ElementMeta,
    attr: Vec<(KString, KString)>,
    body: Vec<Node>,
}

impl Element {
    pub fn tag_name(&self) -> &'static str {
        self.meta.tag_name
    }

    pub fn attributes(&self) -> &[(KString, KString)] {
        &self.attr
    }

    pub fn body(&self) -> &[Node] {
        &self.body
    }
}

fn escape_into(out: &mut Vec<u8>, s: &str) {
    for b in s.as_bytes() {
        match b {
            b'&' => out.extend_from_slice(b"&amp;"),
            b'<' => out.extend_from_slice(b"&lt;"),
            b'>' => out.extend_from_slice(b"&gt;"),
            b'"' => out.extend_from_slice(b"&quot;"),
            b'\'' => out.extend_from_slice(b"&#39;"),
            _ => out.push(*b),
        }
    }
}

/// Escape the five HTML-reserved characters in the text
/// representation of `val`; everything else passes through
/// unchanged. Total, no failure mode.
pub fn html_escape(val: impl Display) -> String {
    let s = val.to_string();
    let mut buf = Vec::with_capacity(s.len());
    escape_into(&mut buf, &s);
    // Safe because escape_into copies the input's UTF-8 bytes,
    // substituting some ASCII bytes with ASCII sequences.
    unsafe { String::from_utf8_unchecked(buf) }
}

fn write_escaped(out: &mut impl Write, s: &str) -> Result<()> {
    let mut buf = Vec::with_capacity(s.len());
    escape_into(&mut buf, s);
    out.write_all(&buf)?;
    Ok(())
}

pub trait Print {
    /// Print serialized HTML.
    fn print_html_fragment(&self, out: &mut impl Write) -> Result<()>;

    /// Print text content, ignoring all markup.
    fn print_plain(&self, out: &mut String) -> Result<()>;

    fn to_html_fragment_string(&self) -> Result<String> {
        let mut v = Vec::new();
        self.print_html_fragment(&mut v)?;
        // Safe because v was filled from UTF-8 string values and
        // ASCII byte string literals concatenated together.
        Ok(unsafe { String::from_utf8_unchecked(v) })
    }

    fn to_plain_string(&self) -> Result<String> {
        let mut s = String::new();
        self.print_plain(&mut s)?;
        Ok(s)
    }
}

impl Print for Node {
    fn print_html_fragment(&self, out: &mut impl Write) -> Result<()> {
        match self {
            Node::Element(e) => e.print_html_fragment(out),
            Node::String(s) => write_escaped(out, s.as_str()),
            Node::Preserialized(s) => {
                out.write_all(s.as_bytes())?;
                Ok(())
            }
            Node::None => Ok(()),
        }
    }

    fn print_plain(&self, out: &mut String) -> Result<()> {
        match self {
            Node::Element(e) => e.print_plain(out),
            Node::String(s) => {
                out.push_str(s.as_str());
                Ok(())
            }
            Node::Preserialized(_) => {
                // would require re-parsing
                bail!("print_plain: cannot print pre-serialized content as plain text")
            }
            Node::None => Ok(()),
        }
    }
}

impl Print for Element {
    fn print_html_fragment(&self, out: &mut impl Write) -> Result<()> {
        out.write_all(b"<")?;
        out.write_all(self.meta.tag_name.as_bytes())?;
        for (key, val) in &self.attr {
            out.write_all(b" ")?;
            // Key names never need escaping, they were verified at
            // build time.
            out.write_all(key.as_bytes())?;
            out.write_all(b"=\"")?;
            write_escaped(out, val.as_str())?;
            out.write_all(b"\"")?;
        }
        out.write_all(b">")?;
        self.body.print_html_fragment(out)?;
        if self.meta.has_closing_tag {
            out.write_all(b"</")?;
            out.write_all(self.meta.tag_name.as_bytes())?;
            out.write_all(b">")?;
        }
        Ok(())
    }

    fn print_plain(&self, out: &mut String) -> Result<()> {
        self.body.print_plain(out)
    }
}

impl Print for Vec<Node> {
    fn print_html_fragment(&self, out: &mut impl Write) -> Result<()> {
        for node in self {
            node.print_html_fragment(out)?;
        }
        Ok(())
    }

    fn print_plain(&self, out: &mut String) -> Result<()> {
        for node in self {
            node.print_plain(out)?;
        }
        Ok(())
    }
}

impl Node {
    /// Serialize as a full document: byte-order mark (so the files
    /// are read correctly e.g. by Safari), doctype, then the tree.
    pub fn print_html_document(&self, out: &mut impl Write) -> Result<()> {
        out.write_all(BOM.as_bytes())?;
        out.write_all(DOCTYPE.as_bytes())?;
        self.print_html_fragment(out)
    }

    pub fn to_html_document_string(&self) -> Result<String> {
        let mut v = Vec::new();
        self.print_html_document(&mut v)?;
        // See to_html_fragment_string.
        Ok(unsafe { String::from_utf8_unchecked(v) })
    }
}

fn ks<T>(s: T) -> KString
where
    KString: MyFrom<T>,
{
    KString::myfrom(s)
}

pub fn att<T, U>(key: T, val: U) -> Option<(KString, KString)>
where
    KString: MyFrom<T> + MyFrom<U>,
{
    Some((ks(key), ks(val)))
}

pub fn opt_att<T, U>(key: T, val: Option<U>) -> Option<(KString, KString)>
where
    KString: MyFrom<T> + MyFrom<U>,
{
    val.map(|val| (ks(key), ks(val)))
}

pub trait ToAttrs {
    fn to_attrs(self) -> Vec<(KString, KString)>;
}

// `None` entries come from `opt_att` and are simply skipped.
impl<const N: usize> ToAttrs for [Option<(KString, KString)>; N] {
    fn to_attrs(self) -> Vec<(KString, KString)> {
        self.into_iter().flatten().collect()
    }
}

impl ToAttrs for Vec<Option<(KString, KString)>> {
    fn to_attrs(self) -> Vec<(KString, KString)> {
        self.into_iter().flatten().collect()
    }
}

pub trait ToBody {
    fn to_body(self) -> Vec<Node>;
}

impl<const N: usize> ToBody for [Node; N] {
    fn to_body(self) -> Vec<Node> {
        self.into()
    }
}

impl ToBody for Vec<Node> {
    fn to_body(self) -> Vec<Node> {
        self
    }
}

impl ToBody for Node {
    fn to_body(self) -> Vec<Node> {
        vec![self]
    }
}

pub trait TryCollectBody {
    fn try_collect_body(self) -> Result<Vec<Node>>;
}

impl<I: Iterator<Item = Result<Node>>> TryCollectBody for I {
    fn try_collect_body(self) -> Result<Vec<Node>> {
        self.collect()
    }
}

macro_rules! def_element_methods {
    { $($name:ident)* } => {
        $(
            pub fn $name(&self, attr: impl ToAttrs, body: impl ToBody) -> Result<Node> {
                self.element(stringify!($name), attr, body)
            }
        )*
    }
}

/// Handle for building verified nodes.
pub struct Html {
    metadb: &'static MetaDb,
}

impl Html {
    pub fn new() -> Html {
        Html { metadb: &METADB }
    }

    pub fn element(&self, tag_name: &str, attr: impl ToAttrs, body: impl ToBody) -> Result<Node> {
        let meta = self
            .metadb
            .get(tag_name)
            .ok_or_else(|| anyhow!("unknown element name {tag_name:?}"))?;
        let attr = attr.to_attrs();
        for (key, _) in &attr {
            if !meta::is_valid_attribute_name(key.as_str()) {
                bail!("invalid attribute name {key:?} on element {tag_name:?}");
            }
        }
        let body = body.to_body();
        if !meta.has_closing_tag && !body.is_empty() {
            bail!("void element {tag_name:?} cannot have a body");
        }
        Ok(Node::Element(Element { meta, attr, body }))
    }

    pub fn staticstr(&self, s: &'static str) -> Node {
        Node::String(KString::from_static(s))
    }

    pub fn str(&self, s: &str) -> Node {
        Node::String(KString::from_ref(s))
    }

    pub fn string(&self, s: String) -> Node {
        Node::String(KString::from(s))
    }

    /// String node from anything printable, e.g. a year number.
    pub fn text(&self, val: impl Display) -> Node {
        Node::String(KString::from(val.to_string()))
    }

    /// Verbatim, *unescaped* content. The caller vouches for it.
    pub fn preserialized(&self, s: String) -> Node {
        Node::Preserialized(KString::from(s))
    }

    pub fn empty_node(&self) -> Node {
        Node::None
    }

    def_element_methods! {
        html head title style script body
        header nav main section article aside footer
        div span p h1 h2 h3 h4 h5 h6
        ul ol li a em strong small code pre kbd time
        button label form canvas
    }

    // Void elements; these reject non-empty bodies in `element`.
    def_element_methods! {
        meta link input img br hr
    }
}

impl Default for Html {
    fn default() -> Self {
        Html::new()
    }
}
