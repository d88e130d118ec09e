//! Chart and heat-colour helpers shared by the dashboard panels.

mod drawing;

pub(crate) use drawing::*;
