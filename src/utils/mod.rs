pub(crate) mod debug;
pub(crate) mod jq;

pub(crate) use debug::{debug_enabled, set_debug};
pub(crate) use jq::filter_json;
