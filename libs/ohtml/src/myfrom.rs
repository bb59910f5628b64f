//! `From`-alike conversions into `KString`.
//!
//! kstring offers no `From<&str>` (the caller must pick `from_ref`
//! vs. `from_static`), which makes generic call sites awkward; this
//! trait fills the gap with the `from_ref` choice.

use kstring::KString;

pub trait MyFrom<T> {
    fn myfrom(s: T) -> Self;
}

impl MyFrom<&str> for KString {
    fn myfrom(s: &str) -> Self {
        KString::from_ref(s)
    }
}

impl MyFrom<&&str> for KString {
    fn myfrom(s: &&str) -> Self {
        KString::from_ref(*s)
    }
}

impl MyFrom<&String> for KString {
    fn myfrom(s: &String) -> Self {
        KString::from_ref(s)
    }
}

impl MyFrom<String> for KString {
    fn myfrom(s: String) -> Self {
        KString::from_string(s)
    }
}

impl MyFrom<&KString> for KString {
    fn myfrom(s: &KString) -> Self {
        s.clone()
    }
}

impl MyFrom<KString> for KString {
    fn myfrom(s: KString) -> Self {
        s
    }
}
