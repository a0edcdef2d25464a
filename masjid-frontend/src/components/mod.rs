mod banners;
mod footer;
mod header;
mod mosque_list;
mod prayer_panel;

pub use self::{banners::*, footer::*, header::*, mosque_list::*, prayer_panel::*};
