//! Presentation capability. The core hands a [`Dashboard`] to a renderer and
//! never touches a terminal or file itself.

use crate::core::dashboard::Dashboard;
use anyhow::Result;

pub trait Renderer {
    fn render(&mut self, dashboard: &Dashboard) -> Result<()>;
}
