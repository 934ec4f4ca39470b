//! App shell components: AppBar, Footer
//!
//! These components form the persistent frame around the active screen.

mod appbar;
mod footer;

pub use appbar::AppBar;
pub use footer::Footer;
