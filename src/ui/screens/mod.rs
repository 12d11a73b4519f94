mod bootstrap;

pub(crate) use bootstrap::{BootstrapAction, render_bootstrap};
