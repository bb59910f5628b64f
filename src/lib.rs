pub mod util;
pub mod time_util;
pub mod easy_fs;
pub mod scripting;
pub mod page_context;
pub mod content;
pub mod nav;
pub mod projects;
pub mod website_layout;
pub mod arm;
pub mod pages;
pub mod site;
pub mod deploy;
