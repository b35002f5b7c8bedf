//! Built-in toolboxes.
//!
//! - [`basics`]: stateless networking helpers (`lookup_oui`)
//! - [`ios`]: Cisco IOS device tools riding pooled sessions

pub mod basics;
pub mod ios;
pub mod oui;

pub use basics::network_basics_toolbox;
pub use ios::{cisco_ios_pool, register_ios_tools};
